//! A deck of playing cards.
//!
//! The top of the deck is the end of the backing `Vec`, so dealing is a pop.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Ordered pile of cards to deal from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh 52-card deck, suit by suit, Two through Ace.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A deck in the given order (last card is the top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` once exhausted.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), 52);

        assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::Ace));
    }

    #[test]
    fn test_deal_one_takes_top() {
        let mut deck = Deck::standard();

        assert_eq!(deck.deal_one(), Some(Card::new(Suit::Clubs, Rank::Ace)));
        assert_eq!(deck.deal_one(), Some(Card::new(Suit::Clubs, Rank::King)));
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn test_deal_until_empty() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Hearts, Rank::Five)]);

        assert!(deck.deal_one().is_some());
        assert!(deck.is_empty());
        assert_eq!(deck.deal_one(), None);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut GameRng::new(42));
        b.shuffle(&mut GameRng::new(42));

        assert_eq!(a, b);
        assert_ne!(a, Deck::standard());

        let mut c = Deck::standard();
        c.shuffle(&mut GameRng::new(43));
        assert_ne!(a, c);
    }
}
