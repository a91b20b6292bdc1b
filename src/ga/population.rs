//! Double-buffered population store and per-phase parallel passes.
//!
//! Owns the current and next generation buffers plus the derived arrays
//! (ratings, selection weights, descending rank). Every phase is
//! data-parallel across candidates with a hard barrier at the end: a phase
//! method returns only once every candidate has been processed, so the next
//! phase always observes fully materialized input. Generations advance by
//! swapping the two buffers, never by overwriting one while it is read.

use rayon::prelude::*;

use crate::ga::rng::RngPool;
use crate::ga::{operators, selection};
use crate::models::{Rating, ScheduleGrid, SessionSet};

/// *N* candidate schedules with their ratings, weights, and ranking.
#[derive(Debug)]
pub struct Population {
    current: Vec<ScheduleGrid>,
    next: Vec<ScheduleGrid>,
    ratings: Vec<Rating>,
    weights: Vec<f64>,
    ranked: Vec<usize>,
}

impl Population {
    /// Initializes `size` independent uniformly random permutation grids,
    /// one pool stream per candidate, and allocates the derived buffers.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero. Every later phase assumes at least one
    /// candidate, and `best_index`/`best_score` have no meaning without one.
    pub fn random(size: usize, slots: usize, rooms: usize, pool: &RngPool) -> Self {
        assert!(size > 0, "population needs at least one candidate");
        let current: Vec<ScheduleGrid> = (0..size)
            .into_par_iter()
            .map(|i| {
                let mut rng = pool.checkout(i);
                ScheduleGrid::shuffled(slots, rooms, &mut *rng)
            })
            .collect();
        let next = current.clone();
        Self {
            current,
            next,
            ratings: vec![Rating::default(); size],
            weights: vec![0.0; size],
            ranked: (0..size).collect(),
        }
    }

    /// Population size *N*.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// True for a zero-candidate population.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current-generation candidate `i`.
    pub fn candidate(&self, i: usize) -> &ScheduleGrid {
        &self.current[i]
    }

    /// Rating of candidate `i` from the last [`rate_all`](Self::rate_all).
    pub fn rating(&self, i: usize) -> &Rating {
        &self.ratings[i]
    }

    /// Candidate indices sorted by descending score.
    pub fn ranked(&self) -> &[usize] {
        &self.ranked
    }

    /// Index of the best-rated candidate.
    pub fn best_index(&self) -> usize {
        self.ranked[0]
    }

    /// Score of the best-rated candidate.
    pub fn best_score(&self) -> f64 {
        self.ratings[self.best_index()].score
    }

    /// The best-rated candidate's grid.
    pub fn best_candidate(&self) -> &ScheduleGrid {
        &self.current[self.best_index()]
    }

    /// Normalized selection weights from the last
    /// [`derive_weights`](Self::derive_weights).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Rates every current-generation candidate in parallel, then ranks.
    /// Returns the best score of the generation.
    pub fn rate_all<S: SessionSet + ?Sized>(&mut self, sessions: &S) -> f64 {
        self.current
            .par_iter()
            .zip(self.ratings.par_iter_mut())
            .for_each(|(grid, rating)| {
                *rating = sessions.rate(grid);
            });
        self.rank();
        self.best_score()
    }

    /// Stable descending sort of candidate indices by score. Ties keep
    /// ascending index order, fixed within a generation.
    fn rank(&mut self) {
        let ratings = &self.ratings;
        self.ranked.clear();
        self.ranked.extend(0..ratings.len());
        self.ranked
            .sort_by(|&a, &b| ratings[b].score.total_cmp(&ratings[a].score));
    }

    /// Recomputes normalized selection weights from the current ratings.
    pub fn derive_weights(&mut self) {
        let scores: Vec<f64> = self.ratings.iter().map(|r| r.score).collect();
        self.weights = selection::derive_weights(&scores);
    }

    /// Repairs every current-generation candidate in parallel.
    pub fn repair_current<S: SessionSet + ?Sized>(&mut self, sessions: &S) {
        self.current
            .par_iter_mut()
            .for_each(|grid| operators::repair(grid, sessions));
    }

    /// Repairs every next-generation candidate in parallel.
    pub fn repair_next<S: SessionSet + ?Sized>(&mut self, sessions: &S) {
        self.next
            .par_iter_mut()
            .for_each(|grid| operators::repair(grid, sessions));
    }

    /// Fills the next generation: elites copied verbatim into ranks
    /// `[0, elite_count)`, the rest bred from roulette-selected parent pairs
    /// via cycle-resolution crossover.
    ///
    /// Requires [`rate_all`](Self::rate_all) and
    /// [`derive_weights`](Self::derive_weights) for this generation.
    /// Reads only the current buffer, writes only disjoint next-buffer slots.
    pub fn breed_into_next(&mut self, elite_count: usize, pool: &RngPool) {
        let start = elite_count.min(self.len());
        for rank in 0..start {
            let src = self.ranked[rank];
            self.next[rank].clone_from(&self.current[src]);
        }

        let Self {
            current,
            next,
            weights,
            ..
        } = self;
        let current: &[ScheduleGrid] = current;
        let weights: &[f64] = weights;
        next[start..]
            .par_iter_mut()
            .enumerate()
            .for_each(|(offset, child)| {
                let task = start + offset;
                let mut rng = pool.checkout(task);
                let (mom, dad) = selection::pick_parent_pair(weights, &mut *rng);
                *child = operators::cycle_crossover(&current[mom], &current[dad], &mut *rng);
            });
    }

    /// Mutates every next-generation candidate except index 0 (the elite
    /// champion) in parallel.
    pub fn mutate_next(&mut self, mutation_rate: f64, pool: &RngPool) {
        self.next
            .par_iter_mut()
            .enumerate()
            .skip(1)
            .for_each(|(task, grid)| {
                let mut rng = pool.checkout(task);
                operators::swap_mutation(grid, mutation_rate, &mut *rng);
            });
    }

    /// Swaps the generation buffers: the bred/mutated/repaired next
    /// generation becomes current.
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
