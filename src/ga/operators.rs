//! Genetic operators over permutation grids.
//!
//! Three families, all invariant-preserving:
//!
//! - **Cycle-resolution crossover**: copies a leading block of timeslots from
//!   one parent and resolves the remaining cells from the other parent by
//!   following duplicate-value chains, so the child is always a permutation.
//! - **Swap mutation**: per-cell probabilistic swap with another timeslot in
//!   the same room. A pure intra-grid swap, so the invariant holds trivially.
//! - **Repair**: forced passes restoring ordering constraints and room
//!   priority. Only swaps cell contents, re-applied every generation because
//!   crossover and mutation can reintroduce violations.

use rand::Rng;

use crate::models::{ScheduleGrid, SessionSet};

/// Cycle-resolution crossover with a random cut timeslot.
pub fn cycle_crossover<R: Rng + ?Sized>(
    mom: &ScheduleGrid,
    dad: &ScheduleGrid,
    rng: &mut R,
) -> ScheduleGrid {
    let cut = rng.random_range(0..mom.slots());
    cycle_crossover_at(mom, dad, cut)
}

/// Cycle-resolution crossover at a fixed cut timeslot.
///
/// Timeslots `[0, cut)` are copied verbatim from `mom`. Each remaining cell
/// takes its value from `dad`, except that values already present in the
/// copied region are resolved by moving to that value's position in `mom`
/// and retrying with `dad`'s value there. The chain visits distinct
/// positions of the finite copied region, so it terminates, and the
/// resolved values complete the permutation without duplicates.
pub fn cycle_crossover_at(mom: &ScheduleGrid, dad: &ScheduleGrid, cut: usize) -> ScheduleGrid {
    debug_assert_eq!(mom.slots(), dad.slots());
    debug_assert_eq!(mom.rooms(), dad.rooms());

    let mut child = mom.clone();
    for slot in cut..mom.slots() {
        for room in 0..mom.rooms() {
            let (mut s, mut r) = (slot, room);
            loop {
                let value = dad.get(s, r);
                match mom.find_in_leading_slots(value, cut) {
                    Some((ns, nr)) => {
                        s = ns;
                        r = nr;
                    }
                    None => {
                        child.set(slot, room, value);
                        break;
                    }
                }
            }
        }
    }
    child
}

/// Per-cell swap mutation.
///
/// With probability `mutation_rate`, swaps a cell with the same room at a
/// different, uniformly chosen timeslot. No-op on single-slot grids.
pub fn swap_mutation<R: Rng + ?Sized>(grid: &mut ScheduleGrid, mutation_rate: f64, rng: &mut R) {
    let slots = grid.slots();
    if slots < 2 {
        return;
    }
    for slot in 0..slots {
        for room in 0..grid.rooms() {
            if rng.random::<f64>() >= mutation_rate {
                continue;
            }
            let mut other = slot;
            while other == slot {
                other = rng.random_range(0..slots);
            }
            grid.swap((slot, room), (other, room));
        }
    }
}

/// Constraint repair: ordering pass, then room-priority pass.
///
/// Deterministic for fixed collaborator answers and idempotent on grids
/// that already satisfy both constraints.
pub fn repair<S: SessionSet + ?Sized>(grid: &mut ScheduleGrid, sessions: &S) {
    enforce_ordering(grid, sessions);
    enforce_room_priority(grid, sessions);
}

/// Swaps every occupied cell pair `(slot1 < slot2)` that the collaborator
/// reports as violating relative ordering. All pairs are checked, not just
/// adjacent slots.
fn enforce_ordering<S: SessionSet + ?Sized>(grid: &mut ScheduleGrid, sessions: &S) {
    let real = sessions.len() as u32;
    for slot1 in 0..grid.slots() {
        for room1 in 0..grid.rooms() {
            if grid.get(slot1, room1) >= real {
                continue;
            }
            for slot2 in slot1 + 1..grid.slots() {
                for room2 in 0..grid.rooms() {
                    let later = grid.get(slot2, room2);
                    if later >= real {
                        continue;
                    }
                    let earlier = grid.get(slot1, room1);
                    if sessions.breaks_ordering(earlier, later) {
                        grid.swap((slot1, room1), (slot2, room2));
                    }
                }
            }
        }
    }
}

/// Bubble-sorts each timeslot's rooms by descending session priority.
/// Empty cells rank below every session and sink to the end of the slot.
fn enforce_room_priority<S: SessionSet + ?Sized>(grid: &mut ScheduleGrid, sessions: &S) {
    let real = sessions.len() as u32;
    let rooms = grid.rooms();
    for slot in 0..grid.slots() {
        for i in 1..rooms {
            for j in 0..rooms - i {
                let left = grid.get(slot, j);
                let right = grid.get(slot, j + 1);
                if right >= real {
                    continue;
                }
                if left >= real || sessions.higher_priority(right, left) {
                    grid.swap((slot, j), (slot, j + 1));
                }
            }
        }
    }
}
