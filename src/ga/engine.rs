//! Generational driver for the genetic schedule search.
//!
//! Orchestrates `init → fix → (rate/rank → select → breed → mutate → fix)*`
//! over the double-buffered population, with an early exit once the best
//! score reaches the configured target. Every phase is a hard barrier; the
//! loop is synchronous from the caller's perspective.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::ga::population::Population;
use crate::ga::rng::RngPool;
use crate::models::{RoomSet, ScheduleGrid, SessionSet};
use crate::report;

// Target comparison is a tolerance check, never exact float equality.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Tunable parameters for one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of candidate schedules per generation.
    pub population_size: usize,
    /// Top-ranked candidates copied unchanged into the next generation.
    pub elite_count: usize,
    /// Per-cell probability of a mutation swap, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Generation budget; the run always rates at least one generation.
    pub max_generations: usize,
    /// Score at which the search stops early (tolerance-compared).
    pub target_score: f64,
    /// Master seed for the random stream pool.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_count: 4,
            mutation_rate: 0.01,
            max_generations: 100,
            target_score: 1.0,
            seed: 5_374_857,
        }
    }
}

/// Caller-input contract violations, detected before any optimization work.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Population size was zero.
    #[error("population size must be positive")]
    ZeroPopulation,
    /// More elites requested than candidates exist.
    #[error("elite count {elite_count} exceeds population size {population_size}")]
    EliteExceedsPopulation {
        elite_count: usize,
        population_size: usize,
    },
    /// Mutation rate outside `[0, 1]`.
    #[error("mutation rate {0} is outside [0, 1]")]
    MutationRateOutOfRange(f64),
    /// The schedule needs at least one timeslot.
    #[error("timeslot count must be positive")]
    ZeroTimeslots,
    /// The schedule needs at least one room.
    #[error("room count must be positive")]
    ZeroRooms,
    /// More sessions than grid cells; no permutation can place them all.
    #[error("{sessions} sessions cannot fit a grid of {cells} cells")]
    InsufficientCapacity { sessions: usize, cells: usize },
}

/// Outcome of one [`GeneticScheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Number of generations rated (1..=`max_generations`).
    pub generations: usize,
    /// Best score in the final generation.
    pub best_score: f64,
    /// True when the target score was reached before the budget ran out.
    pub converged: bool,
}

/// Population-based search for a high-quality session-to-grid assignment.
///
/// The scoring collaborator supplies the fitness function and both repair
/// comparators; the engine owns the population, the random stream pool, and
/// the generational loop.
pub struct GeneticScheduler<S, R> {
    sessions: S,
    rooms: R,
    slot_count: usize,
    population: Option<Population>,
}

impl<S: SessionSet, R: RoomSet> GeneticScheduler<S, R> {
    /// Creates a scheduler over `slot_count` timeslots and the given
    /// session and room collaborators.
    pub fn new(sessions: S, rooms: R, slot_count: usize) -> Self {
        Self {
            sessions,
            rooms,
            slot_count,
            population: None,
        }
    }

    /// The scoring collaborator.
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// The room collaborator.
    pub fn rooms(&self) -> &R {
        &self.rooms
    }

    /// Number of timeslots in the grid.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    fn validate(&self, config: &GaConfig) -> Result<(), ConfigError> {
        if config.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if config.elite_count > config.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite_count: config.elite_count,
                population_size: config.population_size,
            });
        }
        if !(0.0..=1.0).contains(&config.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(config.mutation_rate));
        }
        if self.slot_count == 0 {
            return Err(ConfigError::ZeroTimeslots);
        }
        if self.rooms.len() == 0 {
            return Err(ConfigError::ZeroRooms);
        }
        let cells = self.slot_count * self.rooms.len();
        if self.sessions.len() > cells {
            return Err(ConfigError::InsufficientCapacity {
                sessions: self.sessions.len(),
                cells,
            });
        }
        Ok(())
    }

    /// Runs the generational loop to completion.
    ///
    /// Stops when the best score reaches `target_score` (within tolerance)
    /// or the generation budget is exhausted. Afterwards
    /// [`best_schedule`](Self::best_schedule) and
    /// [`best_score`](Self::best_score) describe the final generation.
    pub fn run(&mut self, config: &GaConfig) -> Result<RunSummary, ConfigError> {
        self.validate(config)?;

        let pool = RngPool::new(config.seed, config.population_size);
        let mut population = Population::random(
            config.population_size,
            self.slot_count,
            self.rooms.len(),
            &pool,
        );
        population.repair_current(&self.sessions);

        let mut generation = 0;
        let summary = loop {
            let best = population.rate_all(&self.sessions);
            let top = population.rating(population.best_index());
            info!("generation {generation}: best score {best:.4}");
            debug!(
                "generation {generation} penalties: order={} oversubscribed={} theme={} priority={}",
                top.order_penalty,
                top.oversubscribed_penalty,
                top.theme_penalty,
                top.priority_penalty
            );

            generation += 1;
            if best >= config.target_score - SCORE_TOLERANCE {
                break RunSummary {
                    generations: generation,
                    best_score: best,
                    converged: true,
                };
            }
            if generation >= config.max_generations {
                break RunSummary {
                    generations: generation,
                    best_score: best,
                    converged: false,
                };
            }

            population.derive_weights();
            population.breed_into_next(config.elite_count, &pool);
            population.mutate_next(config.mutation_rate, &pool);
            population.repair_next(&self.sessions);
            population.advance();
        };

        self.population = Some(population);
        Ok(summary)
    }

    /// Read-only view of the best candidate's grid, once a run completed.
    pub fn best_schedule(&self) -> Option<&ScheduleGrid> {
        self.population.as_ref().map(Population::best_candidate)
    }

    /// Best score of the final generation, once a run completed.
    pub fn best_score(&self) -> Option<f64> {
        self.population.as_ref().map(Population::best_score)
    }

    /// Writes the best schedule as a Markdown table to `path`.
    ///
    /// Best-effort: failure to open or write the destination logs a warning
    /// and never aborts; the optimization result stays available.
    pub fn record<P: AsRef<Path>>(&self, path: P) {
        let Some(grid) = self.best_schedule() else {
            warn!("no schedule to record; run the optimizer first");
            return;
        };
        let score = self.best_score().unwrap_or_default();
        if let Err(err) =
            report::save_markdown(path.as_ref(), grid, score, &self.sessions, &self.rooms)
        {
            warn!("failed to write schedule report: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fixtures::{StubRooms, StubSessions};
    use crate::models::Rating;

    fn scheduler() -> GeneticScheduler<StubSessions, StubRooms> {
        GeneticScheduler::new(StubSessions::conference(), StubRooms::three(), 2)
    }

    // Routes the driver's per-generation log lines through the test
    // harness, visible with RUST_LOG=debug.
    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config(generations: usize) -> GaConfig {
        GaConfig {
            population_size: 30,
            elite_count: 2,
            mutation_rate: 0.1,
            max_generations: generations,
            seed: 42,
            ..GaConfig::default()
        }
    }

    /// Rater that scores every grid at the target, for early-exit tests.
    struct PerfectRater;

    impl SessionSet for PerfectRater {
        fn len(&self) -> usize {
            2
        }
        fn theme_count(&self) -> usize {
            1
        }
        fn rate(&self, _grid: &ScheduleGrid) -> Rating {
            Rating {
                score: 1.0,
                ..Rating::default()
            }
        }
        fn breaks_ordering(&self, _earlier: u32, _later: u32) -> bool {
            false
        }
        fn higher_priority(&self, _a: u32, _b: u32) -> bool {
            false
        }
        fn title(&self, _id: u32) -> &str {
            "session"
        }
        fn theme_name(&self, _id: u32) -> &str {
            "theme"
        }
        fn priority(&self, _id: u32) -> u32 {
            0
        }
    }

    #[test]
    fn test_rejects_zero_population() {
        let mut s = scheduler();
        let cfg = GaConfig {
            population_size: 0,
            elite_count: 0,
            ..GaConfig::default()
        };
        assert_eq!(s.run(&cfg), Err(ConfigError::ZeroPopulation));
    }

    #[test]
    fn test_rejects_oversized_elite() {
        let mut s = scheduler();
        let cfg = GaConfig {
            population_size: 4,
            elite_count: 5,
            ..GaConfig::default()
        };
        assert_eq!(
            s.run(&cfg),
            Err(ConfigError::EliteExceedsPopulation {
                elite_count: 5,
                population_size: 4
            })
        );
    }

    #[test]
    fn test_rejects_bad_mutation_rate() {
        let mut s = scheduler();
        let cfg = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert_eq!(s.run(&cfg), Err(ConfigError::MutationRateOutOfRange(1.5)));
    }

    #[test]
    fn test_rejects_zero_timeslots() {
        let mut s = GeneticScheduler::new(StubSessions::conference(), StubRooms::three(), 0);
        assert_eq!(s.run(&GaConfig::default()), Err(ConfigError::ZeroTimeslots));
    }

    #[test]
    fn test_rejects_undersized_grid() {
        // 4 sessions into a 1x3 grid.
        let mut s = GeneticScheduler::new(StubSessions::conference(), StubRooms::three(), 1);
        assert_eq!(
            s.run(&GaConfig::default()),
            Err(ConfigError::InsufficientCapacity {
                sessions: 4,
                cells: 3
            })
        );
    }

    #[test]
    fn test_no_best_schedule_before_run() {
        let s = scheduler();
        assert!(s.best_schedule().is_none());
        assert!(s.best_score().is_none());
    }

    #[test]
    fn test_early_exit_on_target_score() {
        init_logging();
        let mut s = GeneticScheduler::new(PerfectRater, StubRooms::three(), 2);
        let summary = s.run(&config(50)).unwrap();
        assert!(summary.converged);
        assert_eq!(summary.generations, 1);
        assert_eq!(s.best_score(), Some(1.0));
    }

    #[test]
    fn test_best_score_is_monotonic_across_budgets() {
        // Seeded runs with budget g are prefixes of budget g+1, so the final
        // best score must be non-decreasing in the budget (elitism).
        let mut previous = f64::NEG_INFINITY;
        for generations in 1..=6 {
            let mut s = scheduler();
            let summary = s.run(&config(generations)).unwrap();
            assert!(
                summary.best_score >= previous,
                "best score dropped from {previous} at budget {generations}"
            );
            previous = summary.best_score;
        }
    }

    #[test]
    fn test_end_to_end_constraints_hold_on_best_schedule() {
        init_logging();
        let mut s = scheduler();
        let summary = s.run(&config(20)).unwrap();
        assert!(summary.generations <= 20);
        assert!(summary.best_score > 0.0);

        let sessions = s.sessions();
        let best = s.best_schedule().unwrap();
        assert!(best.is_permutation());
        assert_eq!(best.slots(), s.slot_count());
        assert_eq!(best.rooms(), s.rooms().len());

        // Ordering constraint: session 0 never strictly after session 1.
        let slot0 = best.find_in_leading_slots(0, s.slot_count()).unwrap().0;
        let slot1 = best.find_in_leading_slots(1, s.slot_count()).unwrap().0;
        assert!(slot0 <= slot1);

        // Priority constraint: rooms sorted by descending priority,
        // empties last, within every slot.
        let real = sessions.len() as u32;
        for slot in 0..best.slots() {
            let row = best.slot_row(slot);
            for pair in row.windows(2) {
                let (left, right) = (pair[0], pair[1]);
                if right >= real {
                    continue;
                }
                assert!(left < real);
                assert!(!sessions.higher_priority(right, left));
            }
        }
    }

    #[test]
    fn test_runs_are_reproducible_for_a_seed() {
        let mut a = scheduler();
        let mut b = scheduler();
        let sa = a.run(&config(5)).unwrap();
        let sb = b.run(&config(5)).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(a.best_schedule(), b.best_schedule());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let cfg = config(20);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.population_size, 30);
        assert_eq!(back.seed, 42);
    }
}
