//! Domain types for permutation-grid conference scheduling.
//!
//! - [`ScheduleGrid`]: the `slots × rooms` permutation encoding of a
//!   candidate schedule, including empty-sentinel cells.
//! - [`SessionSet`] / [`RoomSet`]: collaborator traits supplying constraints,
//!   the fitness function, and reporting metadata.
//! - [`Rating`]: scalar score plus diagnostic penalty breakdown.

mod grid;
mod session;

pub use grid::ScheduleGrid;
pub use session::{Rating, RoomSet, SessionSet};
