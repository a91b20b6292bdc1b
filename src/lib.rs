//! Conference schedule optimization via a permutation-grid genetic algorithm.
//!
//! Searches for a high-quality assignment of sessions to a
//! `timeslot × room` grid. Candidate schedules are permutations of session
//! identifiers (padded with empty sentinels), evolved under an externally
//! supplied fitness function and constraint comparators.
//!
//! # Modules
//!
//! - **`models`**: the [`ScheduleGrid`] permutation encoding and the
//!   [`SessionSet`]/[`RoomSet`] collaborator traits
//! - **`ga`**: population store, repair, roulette selection,
//!   cycle-resolution crossover, mutation, and the generational driver
//! - **`report`**: Markdown export of the best schedule
//!
//! # Example
//!
//! ```no_run
//! use conf_schedule::{GaConfig, GeneticScheduler};
//! # use conf_schedule::{Rating, RoomSet, ScheduleGrid, SessionSet};
//! # struct MySessions; struct MyRooms;
//! # impl SessionSet for MySessions {
//! #     fn len(&self) -> usize { 0 }
//! #     fn theme_count(&self) -> usize { 0 }
//! #     fn rate(&self, _: &ScheduleGrid) -> Rating { Rating::default() }
//! #     fn breaks_ordering(&self, _: u32, _: u32) -> bool { false }
//! #     fn higher_priority(&self, _: u32, _: u32) -> bool { false }
//! #     fn title(&self, _: u32) -> &str { "" }
//! #     fn theme_name(&self, _: u32) -> &str { "" }
//! #     fn priority(&self, _: u32) -> u32 { 0 }
//! # }
//! # impl RoomSet for MyRooms {
//! #     fn len(&self) -> usize { 1 }
//! #     fn name(&self, _: usize) -> &str { "" }
//! # }
//!
//! let mut scheduler = GeneticScheduler::new(MySessions, MyRooms, 13);
//! let summary = scheduler.run(&GaConfig::default())?;
//! println!("best score {} after {} generations", summary.best_score, summary.generations);
//! scheduler.record("schedule.md");
//! # Ok::<(), conf_schedule::ConfigError>(())
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke et al. (1995), "A Genetic Algorithm Based University Timetabling
//!   System"

pub mod ga;
pub mod models;
pub mod report;

pub use ga::{ConfigError, GaConfig, GeneticScheduler, RunSummary};
pub use models::{Rating, RoomSet, ScheduleGrid, SessionSet};
