//! The 14-slot Mancala board.
//!
//! ## Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Slots 0-5 are side A's pits and slot 6 its store. Slots 7-12 are side
//! B's pits and slot 13 its store. Sowing runs in increasing index order,
//! counter-clockwise in the picture above.
//!
//! `Board` is `Copy`: every transition produces a new value, so search
//! branches never share mutable state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::side::{Side, SideMap};

/// Number of slots (12 pits plus 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Playing pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Side A's store slot.
pub const STORE_A: usize = 6;

/// Side B's store slot.
pub const STORE_B: usize = 13;

/// Marbles per pit in a standard opening position.
pub const STANDARD_MARBLES_PER_PIT: u32 = 4;

/// Legal move list; never longer than one side's pit count.
pub type MoveList = SmallVec<[usize; PITS_PER_SIDE]>;

/// A Mancala board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u32; SLOT_COUNT],
}

impl Board {
    /// Create an opening position with `marbles_per_pit` in every pit and
    /// both stores empty.
    #[must_use]
    pub fn new(marbles_per_pit: u32) -> Self {
        let mut slots = [marbles_per_pit; SLOT_COUNT];
        slots[STORE_A] = 0;
        slots[STORE_B] = 0;
        Self { slots }
    }

    /// The standard 4-per-pit opening (48 marbles).
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_MARBLES_PER_PIT)
    }

    /// Create a board from raw slot counts.
    ///
    /// Any non-negative distribution is accepted.
    #[must_use]
    pub const fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Raw slot counts.
    #[must_use]
    pub const fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.slots
    }

    /// Marbles in one slot.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> u32 {
        self.slots[slot]
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [u32; SLOT_COUNT] {
        &mut self.slots
    }

    /// The six playing pits of a side, in sowing order.
    #[must_use]
    pub fn pits(&self, side: Side) -> &[u32] {
        &self.slots[side.pits()]
    }

    /// Marbles banked in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u32 {
        self.slots[side.store()]
    }

    /// Marbles remaining in a side's playing pits.
    #[must_use]
    pub fn pit_total(&self, side: Side) -> u32 {
        self.pits(side).iter().sum()
    }

    /// Store plus remaining pits, i.e. the side's score once swept.
    #[must_use]
    pub fn side_total(&self, side: Side) -> u32 {
        self.store(side) + self.pit_total(side)
    }

    /// Whether all six of a side's pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.pits(side).iter().all(|&count| count == 0)
    }

    /// Whether either side has run out of marbles.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_side_empty(Side::A) || self.is_side_empty(Side::B)
    }

    /// Total marbles on the board. Conserved by every move and the sweep.
    #[must_use]
    pub fn total_marbles(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Non-empty pits of a side in ascending index order.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        side.pits().filter(|&pit| self.slots[pit] > 0).collect()
    }

    /// Whether `side` may sow from `pit`.
    #[must_use]
    pub fn is_legal_move(&self, side: Side, pit: usize) -> bool {
        side.owns_pit(pit) && self.slots[pit] > 0
    }

    /// Per-side store counts.
    #[must_use]
    pub fn stores(&self) -> SideMap<u32> {
        SideMap::new(|side| self.store(side))
    }

    /// The board after the end-of-game sweep: each side's remaining pit
    /// marbles moved into its own store.
    ///
    /// This is a forced transfer, not a move, and has no capture logic.
    #[must_use]
    pub fn swept(&self) -> Board {
        let mut next = *self;
        for side in Side::ALL {
            let remaining = next.pit_total(side);
            for pit in side.pits() {
                next.slots[pit] = 0;
            }
            next.slots[side.store()] += remaining;
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.slots[slot]
    }
}

impl From<[u32; SLOT_COUNT]> for Board {
    fn from(slots: [u32; SLOT_COUNT]) -> Self {
        Self::from_slots(slots)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top: Vec<String> = Side::B.pits().rev().map(|i| format!("{:>3}", self.slots[i])).collect();
        let bottom: Vec<String> = Side::A.pits().map(|i| format!("{:>3}", self.slots[i])).collect();

        writeln!(f, "     {}", top.join(" "))?;
        writeln!(f, "{:>3}{:>26}", self.slots[STORE_B], self.slots[STORE_A])?;
        write!(f, "     {}", bottom.join(" "))
    }
}
