//! Genetic engine for permutation-grid schedule search.
//!
//! The population is double-buffered; each phase (initialize, rate, repair,
//! breed, mutate) is data-parallel across candidates with a hard barrier
//! between phases. All operators preserve the grid permutation invariant.
//!
//! # Submodules
//!
//! - [`engine`]: configuration, validation, and the generational driver
//! - [`population`]: double-buffered store and per-phase parallel passes
//! - [`operators`]: cycle-resolution crossover, swap mutation, repair
//! - [`selection`]: normalized roulette-wheel parent selection
//! - [`rng`]: checkout/check-in pool of seeded generator streams
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Oliver et al. (1987), "A Study of Permutation Crossover Operators"

pub mod engine;
pub mod operators;
pub mod population;
pub mod rng;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{ConfigError, GaConfig, GeneticScheduler, RunSummary};
pub use population::Population;
pub use rng::RngPool;
