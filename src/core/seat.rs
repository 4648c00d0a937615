//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier supporting 1-255 participants.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat at a table, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table with `seat_count` seats.
    ///
    /// ```
    /// use war_hand::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(3).collect();
    /// assert_eq!(seats, vec![SeatId(0), SeatId(1), SeatId(2)]);
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use war_hand::core::{SeatId, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::new(2, |_| 0);
/// wins[SeatId::new(1)] += 1;
/// assert_eq!(wins[SeatId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// Panics on 0 or more than 255 seats.
    pub fn new(seat_count: usize, mut factory: impl FnMut(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> {
        SeatId::all(self.data.len())
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
