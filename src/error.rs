//! Error types.
//!
//! Drawing from an empty hand is the only way a `Hand` can fail. Table
//! setup adds a couple of configuration errors on top.

use thiserror::Error;

/// Errors raised by [`Hand`](crate::hand::Hand) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// `draw_top` was called on a hand with no cards.
    #[error("hand '{name}' has no cards to draw")]
    EmptyCollection { name: String },
}

/// Result type alias for hand operations.
pub type HandResult<T> = Result<T, HandError>;

/// Errors raised while building a [`Table`](crate::table::Table).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table needs at least one player")]
    NoPlayers,

    #[error("table supports at most 255 players, got {count}")]
    TooManyPlayers { count: usize },
}

/// Result type alias for table operations.
pub type TableResult<T> = Result<T, TableError>;
