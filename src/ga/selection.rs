//! Roulette-wheel parent selection.
//!
//! Selection weights are derived from ratings by shifting so the worst
//! candidate has weight zero, then normalizing to a probability
//! distribution. A draw walks the cumulative weights and picks the first
//! candidate whose running sum exceeds the sample; floating-point shortfall
//! falls back to the last candidate rather than leaving the pick undefined.

use rand::Rng;

// Bounded retries before falling back to a deterministic distinct partner.
const DISTINCT_RETRY_LIMIT: usize = 32;

/// Derives normalized selection weights from candidate scores.
///
/// `weight[i] = score[i] - min(score)`, normalized to sum to 1. When every
/// candidate scores the same (zero total weight), the distribution degrades
/// to uniform instead of dividing by zero.
pub fn derive_weights(scores: &[f64]) -> Vec<f64> {
    let worst = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mut weights: Vec<f64> = scores.iter().map(|s| s - worst).collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in &mut weights {
            *w /= total;
        }
    } else if !weights.is_empty() {
        let uniform = 1.0 / weights.len() as f64;
        weights.fill(uniform);
    }
    weights
}

/// Picks the first index whose cumulative weight exceeds `r`.
///
/// `weights` must be normalized; `r` is expected in `[0, 1)`. Returns the
/// last index when rounding leaves the cumulative sum just below `r`.
pub fn roulette_pick(weights: &[f64], r: f64) -> usize {
    let mut sum = 0.0;
    for (i, w) in weights.iter().enumerate() {
        sum += w;
        if r < sum {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}

/// Draws one parent index from the weight distribution.
pub fn pick_parent<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    roulette_pick(weights, rng.random::<f64>())
}

/// Draws two distinct parent indices.
///
/// The second index is redrawn until it differs from the first; if the
/// weight mass has collapsed onto a single candidate, a bounded number of
/// retries gives way to the next index so selection cannot hang.
pub fn pick_parent_pair<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> (usize, usize) {
    let first = pick_parent(weights, rng);
    for _ in 0..DISTINCT_RETRY_LIMIT {
        let second = pick_parent(weights, rng);
        if second != first {
            return (first, second);
        }
    }
    (first, (first + 1) % weights.len().max(1))
}
