//! A named, ordered hand of cards.
//!
//! Cards enter at the bottom (back) and leave from the top (front):
//!
//! ```
//! use war_hand::hand::Hand;
//!
//! let mut hand = Hand::new("Alice");
//! hand.add_cards(["a", "b", "c"]);
//!
//! assert_eq!(hand.draw_top().unwrap(), "a");
//! assert_eq!(hand.to_string(), "Player Alice has 2 cards.");
//! ```

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::deal::Deal;
use crate::error::{HandError, HandResult};

/// One participant's cards.
///
/// The card type is opaque; any value works. Order is exactly insertion
/// order, minus whatever has been drawn from the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand<C> {
    name: String,
    cards: VecDeque<C>,
}

impl<C> Hand<C> {
    /// Create an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: VecDeque::new(),
        }
    }

    /// The participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card `draw_top` would return, without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&C> {
        self.cards.front()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }

    /// Remove and return the top card.
    ///
    /// Fails with [`HandError::EmptyCollection`] when the hand is empty.
    pub fn draw_top(&mut self) -> HandResult<C> {
        let card = self
            .cards
            .pop_front()
            .ok_or_else(|| HandError::EmptyCollection {
                name: self.name.clone(),
            })?;
        trace!(hand = %self.name, remaining = self.cards.len(), "drew top card");
        Ok(card)
    }

    /// Append one card to the bottom.
    pub fn add_card(&mut self, card: C) {
        self.cards.push_back(card);
        trace!(hand = %self.name, len = self.cards.len(), "added card");
    }

    /// Append several cards to the bottom, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = C>) {
        let before = self.cards.len();
        self.cards.extend(cards);
        trace!(
            hand = %self.name,
            added = self.cards.len() - before,
            len = self.cards.len(),
            "added cards"
        );
    }

    /// Append a single card or a bulk sequence.
    pub fn add(&mut self, deal: Deal<C>) {
        match deal {
            Deal::Single(card) => self.add_card(card),
            Deal::Bulk(cards) => self.add_cards(cards),
        }
    }

    /// Status line, e.g. `"Player Alice has 3 cards."`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<C> fmt::Display for Hand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} has {} cards.", self.name, self.cards.len())
    }
}

impl<'a, C> IntoIterator for &'a Hand<C> {
    type Item = &'a C;
    type IntoIter = std::collections::vec_deque::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let hand: Hand<u32> = Hand::new("Alice");
        assert_eq!(hand.name(), "Alice");
        assert_eq!(hand.len(), 0);
        assert!(hand.is_empty());
        assert_eq!(hand.peek_top(), None);
    }

    #[test]
    fn test_draw_empty_fails() {
        let mut hand: Hand<u32> = Hand::new("Bob");
        assert_eq!(
            hand.draw_top(),
            Err(HandError::EmptyCollection {
                name: "Bob".to_string()
            })
        );
        // Still usable afterwards
        hand.add_card(7);
        assert_eq!(hand.draw_top(), Ok(7));
    }

    #[test]
    fn test_draw_takes_front() {
        let mut hand = Hand::new("Alice");
        hand.add_cards(vec![10, 20, 30]);

        assert_eq!(hand.peek_top(), Some(&10));
        assert_eq!(hand.draw_top(), Ok(10));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.iter().copied().collect::<Vec<_>>(), vec![20, 30]);
    }

    #[test]
    fn test_single_then_bulk_order() {
        let mut hand = Hand::new("Alice");
        hand.add_card('x');
        hand.add_cards(['a', 'b']);
        hand.add_card('y');

        let order: Vec<_> = (&hand).into_iter().copied().collect();
        assert_eq!(order, vec!['x', 'a', 'b', 'y']);
    }

    #[test]
    fn test_add_deal() {
        let mut hand = Hand::new("Carol");
        hand.add(Deal::single(1));
        hand.add(Deal::from(vec![2, 3]));
        hand.add(Deal::Bulk(vec![]));

        assert_eq!(hand.len(), 3);
        assert_eq!(hand.draw_top(), Ok(1));
        assert_eq!(hand.draw_top(), Ok(2));
        assert_eq!(hand.draw_top(), Ok(3));
    }

    #[test]
    fn test_bulk_of_vecs_is_not_flattened() {
        // A hand of Vec cards: a bulk add of two Vecs adds two cards.
        let mut hand: Hand<Vec<u8>> = Hand::new("Dave");
        hand.add_cards(vec![vec![1, 2], vec![3]]);
        hand.add_card(vec![4, 5, 6]);

        assert_eq!(hand.len(), 3);
        assert_eq!(hand.draw_top(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_describe() {
        let mut hand = Hand::new("Alice");
        assert_eq!(hand.describe(), "Player Alice has 0 cards.");

        hand.add_card("a");
        assert_eq!(hand.describe(), "Player Alice has 1 cards.");

        hand.add_cards(["b", "c"]);
        assert_eq!(hand.describe(), "Player Alice has 3 cards.");
        assert_eq!(format!("{}", hand), hand.describe());
    }

    #[test]
    fn test_serialization() {
        let mut hand = Hand::new("Alice");
        hand.add_cards([3, 1, 2]);

        let json = serde_json::to_string(&hand).unwrap();
        let deserialized: Hand<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, deserialized);
    }
}
