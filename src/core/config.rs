//! Table configuration.
//!
//! Callers describe a table up front (who sits where, how to shuffle) and
//! hand the config to [`Table::new`](crate::table::Table::new).

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Maximum number of seats at one table.
pub const MAX_SEATS: usize = 255;

/// Setup for a dealing table.
///
/// ```
/// use war_hand::core::TableConfig;
///
/// let config = TableConfig::new()
///     .with_player("Alice")
///     .with_player("Bob")
///     .with_seed(7);
///
/// assert_eq!(config.players, vec!["Alice", "Bob"]);
/// assert!(config.shuffle);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Player names in seat order.
    pub players: Vec<String>,

    /// Seed for the deck shuffle.
    #[serde(default)]
    pub seed: u64,

    /// Shuffle the deck before dealing.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

fn default_shuffle() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            seed: 0,
            shuffle: true,
        }
    }
}

impl TableConfig {
    /// Create an empty configuration (no players, seed 0, shuffled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player at the next seat.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal the deck in its fresh order.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Check the player count.
    pub fn validate(&self) -> TableResult<()> {
        match self.players.len() {
            0 => Err(TableError::NoPlayers),
            count if count > MAX_SEATS => Err(TableError::TooManyPlayers { count }),
            _ => Ok(()),
        }
    }
}
