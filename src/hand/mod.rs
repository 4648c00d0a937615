//! Participant hands.
//!
//! A `Hand` is one participant's ordered pile of cards. It is generic over
//! the card type: the hand never looks inside a card.
//!
//! ## Key Types
//!
//! - `Hand`: Named, ordered card collection (index 0 is the top)
//! - `Deal`: Single card or bulk sequence, for callers that decide at runtime

pub mod hand;
pub mod deal;

pub use deal::Deal;
pub use hand::Hand;
