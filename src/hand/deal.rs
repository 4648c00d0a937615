//! Single-or-bulk card input.

use serde::{Deserialize, Serialize};

/// Cards handed to [`Hand::add`](super::Hand::add).
///
/// Callers that already know the shape should call `add_card` or
/// `add_cards` directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deal<C> {
    /// One card, appended to the bottom of the hand.
    Single(C),
    /// Several cards, appended in order.
    Bulk(Vec<C>),
}

impl<C> Deal<C> {
    /// Wrap a single card.
    #[must_use]
    pub fn single(card: C) -> Self {
        Deal::Single(card)
    }

    /// Number of cards carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Deal::Single(_) => 1,
            Deal::Bulk(cards) => cards.len(),
        }
    }

    /// True for an empty bulk deal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> From<Vec<C>> for Deal<C> {
    fn from(cards: Vec<C>) -> Self {
        Deal::Bulk(cards)
    }
}
