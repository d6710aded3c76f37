//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players of a Mancala game. Side A owns pits 0-5 and the store at
//! index 6; side B owns pits 7-12 and the store at index 13.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

use super::board::{STORE_A, STORE_B};

/// One of the two players.
///
/// Side B is the engine's side by convention: evaluation scores are
/// positive when B is ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, A first.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Get the raw side index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Slot index of this side's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Side::A => STORE_A,
            Side::B => STORE_B,
        }
    }

    /// Slot indices of this side's six playing pits.
    ///
    /// ```
    /// use mancala_engine::core::Side;
    ///
    /// assert_eq!(Side::A.pits(), 0..=5);
    /// assert_eq!(Side::B.pits(), 7..=12);
    /// ```
    #[must_use]
    pub const fn pits(self) -> RangeInclusive<usize> {
        match self {
            Side::A => 0..=5,
            Side::B => 7..=12,
        }
    }

    /// Whether `slot` is one of this side's playing pits.
    #[must_use]
    pub fn owns_pit(self, slot: usize) -> bool {
        self.pits().contains(&slot)
    }

    /// Whether this side maximizes the evaluation score during search.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::B)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mancala_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::B] += 3;
///
/// assert_eq!(scores[Side::A], 0);
/// assert_eq!(scores[Side::B], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
