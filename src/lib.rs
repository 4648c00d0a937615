//! # war-hand
//!
//! Card hands for the War card game, plus the deck and dealing table that
//! fill them.
//!
//! ## Design Principles
//!
//! 1. **Hands are plain values**: A `Hand` owns its cards and nothing else.
//!    No global state, no locking, no rules.
//!
//! 2. **Generic cards**: `Hand<C>` accepts any card type. The standard
//!    52-card types in `cards` are one choice, not a requirement.
//!
//! 3. **Empty draws fail loudly**: Drawing from an empty hand returns
//!    `HandError::EmptyCollection`; the caller decides what that means.
//!
//! ## Modules
//!
//! - `hand`: `Hand` and the single/bulk `Deal` input
//! - `cards`: Suits, ranks, cards, decks
//! - `core`: Seats, seeded RNG, table configuration
//! - `table`: Dealing a deck into one hand per seat
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod hand;
pub mod cards;
pub mod table;

// Re-export commonly used types
pub use crate::core::{GameRng, SeatId, SeatMap, TableConfig};

pub use crate::error::{HandError, HandResult, TableError, TableResult};

pub use crate::hand::{Deal, Hand};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::table::Table;
