//! Permutation grid encoding for conference schedules.
//!
//! # Encoding
//!
//! A schedule is a rectangular `slots × rooms` grid of `u32` identifiers.
//! Identifiers below the session count denote real sessions; the remaining
//! values up to `slots * rooms` are distinct empty sentinels, so the grid is
//! always a bijection between cells and `[0, slots*rooms)` even when the
//! grid has more cells than sessions.
//!
//! The permutation property is the central correctness invariant of the
//! engine: it must hold after initialization, repair, crossover, and
//! mutation. All operators in [`crate::ga`] preserve it by only swapping
//! cell contents or resolving duplicate-free donor values.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A `slots × rooms` grid of session identifiers forming a permutation
/// of `[0, slots*rooms)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    slots: usize,
    rooms: usize,
    cells: Vec<u32>,
}

impl ScheduleGrid {
    /// Creates a grid with identifiers in identity order
    /// (cell `(slot, room)` holds `slot * rooms + room`).
    pub fn new(slots: usize, rooms: usize) -> Self {
        let cells = (0..(slots * rooms) as u32).collect();
        Self { slots, rooms, cells }
    }

    /// Creates a uniformly random permutation grid.
    pub fn shuffled<R: Rng + ?Sized>(slots: usize, rooms: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(slots, rooms);
        grid.cells.shuffle(rng);
        grid
    }

    /// Number of timeslots (rows).
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of rooms (columns).
    #[inline]
    pub fn rooms(&self) -> usize {
        self.rooms
    }

    /// Total cell count (`slots * rooms`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Identifier at `(slot, room)`.
    #[inline]
    pub fn get(&self, slot: usize, room: usize) -> u32 {
        self.cells[slot * self.rooms + room]
    }

    /// Overwrites the identifier at `(slot, room)`.
    #[inline]
    pub fn set(&mut self, slot: usize, room: usize, value: u32) {
        self.cells[slot * self.rooms + room] = value;
    }

    /// Swaps the contents of two cells.
    #[inline]
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        self.cells
            .swap(a.0 * self.rooms + a.1, b.0 * self.rooms + b.1);
    }

    /// All identifiers within one timeslot, in room order.
    #[inline]
    pub fn slot_row(&self, slot: usize) -> &[u32] {
        &self.cells[slot * self.rooms..(slot + 1) * self.rooms]
    }

    /// Searches the leading region (slots `[0, slot_bound)`, all rooms)
    /// for `value`, returning its cell position.
    ///
    /// Used by the cycle-resolution crossover to detect donor values that
    /// already occur in the region copied from the other parent.
    pub fn find_in_leading_slots(&self, value: u32, slot_bound: usize) -> Option<(usize, usize)> {
        let bound = slot_bound.min(self.slots) * self.rooms;
        self.cells[..bound]
            .iter()
            .position(|&c| c == value)
            .map(|idx| (idx / self.rooms, idx % self.rooms))
    }

    /// Checks the permutation invariant: every identifier in
    /// `[0, slots*rooms)` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for &c in &self.cells {
            let Some(slot) = seen.get_mut(c as usize) else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}
