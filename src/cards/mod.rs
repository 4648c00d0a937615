//! Playing cards and decks.
//!
//! `Hand` works with any card type; these are the standard 52-card
//! types used by [`Table`](crate::table::Table).

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
