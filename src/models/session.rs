//! Collaborator interfaces consumed by the genetic engine.
//!
//! The engine is deliberately agnostic about what makes a schedule good:
//! the fitness function, ordering constraints, and priority relations live
//! behind [`SessionSet`], and room metadata behind [`RoomSet`]. The engine
//! only requires that identifiers below [`SessionSet::len`] are real
//! sessions; everything at or above it is an empty sentinel cell.

use crate::models::ScheduleGrid;

/// Quality rating for one candidate schedule.
///
/// `score` is the only value the engine acts on (higher is better).
/// The penalty fields are a diagnostic breakdown surfaced in logs and
/// reports; they carry no correctness weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rating {
    /// Scalar quality, higher is better.
    pub score: f64,
    /// Sessions scheduled against an ordering constraint.
    pub order_penalty: u32,
    /// Demand exceeding room capacity.
    pub oversubscribed_penalty: u32,
    /// Same-theme collisions within a timeslot.
    pub theme_penalty: u32,
    /// High-priority sessions placed in low-priority rooms.
    pub priority_penalty: u32,
    /// Theme-collision counts, one entry per theme.
    pub per_theme: Vec<u32>,
}

/// The scoring collaborator: the set of sessions to place, their
/// constraints, and the fitness function over a grid.
///
/// Called once per candidate per generation from parallel tasks, so
/// implementations must be `Sync` and must not retain references to the
/// grids they rate.
pub trait SessionSet: Sync {
    /// Number of real sessions. Grid identifiers `>= len()` are empty cells.
    fn len(&self) -> usize;

    /// True when there are no sessions to schedule.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct themes, sizing [`Rating::per_theme`].
    fn theme_count(&self) -> usize;

    /// Rates a complete candidate grid.
    fn rate(&self, grid: &ScheduleGrid) -> Rating;

    /// True when scheduling `earlier` in a strictly earlier timeslot than
    /// `later` violates an ordering constraint (e.g. part two of a
    /// multi-part session before part one).
    fn breaks_ordering(&self, earlier: u32, later: u32) -> bool;

    /// True when session `a` outranks session `b` for room priority.
    fn higher_priority(&self, a: u32, b: u32) -> bool;

    /// Human-readable session title, for reporting only.
    fn title(&self, id: u32) -> &str;

    /// Theme name of a session, for reporting only.
    fn theme_name(&self, id: u32) -> &str;

    /// Numeric priority of a session, for reporting only.
    fn priority(&self, id: u32) -> u32;
}

/// The room collaborator: how many rooms exist and what they are called.
pub trait RoomSet {
    /// Number of rooms (grid columns).
    fn len(&self) -> usize;

    /// True when no rooms are available.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Room name, for reporting only.
    fn name(&self, room: usize) -> &str;
}
