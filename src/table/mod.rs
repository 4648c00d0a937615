//! Dealing table.
//!
//! Builds one [`Hand`](crate::hand::Hand) per configured player and deals a
//! standard deck into them. What happens to the cards afterwards is up to
//! the caller's game.

pub mod table;

pub use table::Table;
