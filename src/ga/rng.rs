//! Pool of independently seeded random generator streams.
//!
//! Each data-parallel task (one candidate per phase) checks out a stream for
//! the duration of its draws and checks it back in by dropping the guard.
//! Streams are seeded deterministically from a master seed plus the stream
//! index, so a fixed seed reproduces an entire run regardless of how the
//! parallel phases are scheduled: task `i` always draws from stream `i`.

use std::sync::{Mutex, MutexGuard};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

// Golden-ratio increment; spreads per-stream seeds across the u64 space.
const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

/// A checkout/check-in pool of [`Pcg64Mcg`] generator streams.
#[derive(Debug)]
pub struct RngPool {
    streams: Vec<Mutex<Pcg64Mcg>>,
}

impl RngPool {
    /// Creates a pool of `stream_count` generators (at least one) derived
    /// from `master_seed`.
    pub fn new(master_seed: u64, stream_count: usize) -> Self {
        let streams = (0..stream_count.max(1))
            .map(|i| {
                let seed = master_seed.wrapping_add(STREAM_SPACING.wrapping_mul(i as u64 + 1));
                Mutex::new(Pcg64Mcg::seed_from_u64(seed))
            })
            .collect();
        Self { streams }
    }

    /// Number of streams in the pool.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Checks out the stream for `task_index` (wrapping over the pool size).
    ///
    /// The guard grants exclusive access until dropped; concurrent tasks
    /// with distinct indices in `[0, stream_count)` never contend.
    pub fn checkout(&self, task_index: usize) -> MutexGuard<'_, Pcg64Mcg> {
        self.streams[task_index % self.streams.len()]
            .lock()
            .expect("rng stream lock poisoned")
    }
}
