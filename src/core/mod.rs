//! Core building blocks: seats, RNG, configuration.
//!
//! Nothing here knows about cards; `cards`, `hand` and `table` build on it.

pub mod seat;
pub mod rng;
pub mod config;

pub use seat::{SeatId, SeatMap};
pub use rng::GameRng;
pub use config::{TableConfig, MAX_SEATS};
