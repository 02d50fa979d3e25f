//! Walker's Alias Method for O(1) sampling from a discrete distribution.

use crate::config::{DEFAULT_RESIDUE_TOLERANCE, residue_bound};
use crate::error::BuildError;
use rand::Rng;
use rand::distr::Distribution;

/// Probability and alias tables for a fixed discrete distribution over `0..n`.
///
/// Slot `i` returns `i` with probability `prob[i]` and `alias[i]` otherwise.
/// Exactly-full slots alias to themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
    max_residue: f64,
}

impl AliasTable {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// `NaN` weights count as zero.
    pub fn new(weights: &[f64]) -> Result<Self, BuildError> {
        Self::build(weights, None)
    }

    /// Validate `weights` (and the length of a parallel value map, if any) and
    /// build the tables.
    ///
    /// # Errors
    /// In order: [`BuildError::NoDistribution`], [`BuildError::BadSize`],
    /// [`BuildError::BadDistribution`], [`BuildError::Infinite`],
    /// [`BuildError::NoData`].
    pub fn build(weights: &[f64], values_len: Option<usize>) -> Result<Self, BuildError> {
        Self::build_with_tolerance(weights, values_len, DEFAULT_RESIDUE_TOLERANCE)
    }

    pub(crate) fn build_with_tolerance(
        weights: &[f64],
        values_len: Option<usize>,
        tolerance: f64,
    ) -> Result<Self, BuildError> {
        let n = weights.len();
        if n == 0 {
            return Err(BuildError::NoDistribution);
        }
        if let Some(values) = values_len.filter(|&v| v != n) {
            return Err(BuildError::BadSize { weights: n, values });
        }
        if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
            return Err(BuildError::BadDistribution { index, value });
        }
        if let Some(index) = weights.iter().position(|&w| w == f64::INFINITY) {
            return Err(BuildError::Infinite { index });
        }
        if !weights.iter().any(|&w| w > 0.0) {
            return Err(BuildError::NoData);
        }

        let mut prob: Vec<f64> = weights
            .iter()
            .map(|&w| if w.is_nan() { 0.0 } else { w })
            .collect();
        normalize(&mut prob);

        // Scale so the average slot holds exactly 1.
        let scale = n as f64;
        for p in prob.iter_mut() {
            *p *= scale;
        }

        let mut alias: Vec<usize> = (0..n).collect();
        let mut underfull = Vec::with_capacity(n);
        let mut overfull = Vec::with_capacity(n);
        for (i, &p) in prob.iter().enumerate() {
            if p < 1.0 {
                underfull.push(i);
            } else if p > 1.0 {
                overfull.push(i);
            }
        }

        let mut redirects = 0usize;
        while let (Some(&u), Some(&o)) = (underfull.last(), overfull.last()) {
            underfull.pop();
            alias[u] = o;
            prob[o] += prob[u] - 1.0;
            redirects += 1;

            #[allow(clippy::float_cmp)]
            if prob[o] < 1.0 {
                overfull.pop();
                underfull.push(o);
            } else if prob[o] == 1.0 {
                overfull.pop();
            }
        }

        // Whatever is left is rounding noise around 1.0.
        let mut max_residue = 0.0f64;
        for i in underfull.into_iter().chain(overfull) {
            max_residue = max_residue.max((prob[i] - 1.0).abs());
            prob[i] = 1.0;
        }

        let bound = residue_bound(n, tolerance);
        debug_assert!(
            max_residue <= bound,
            "alias table residue {max_residue:e} exceeds {bound:e} (n={n})"
        );
        if max_residue > tolerance {
            log::warn!("alias table residue {max_residue:e} exceeds tolerance {tolerance:e} (n={n})");
        }
        log::debug!("built alias table: n={n} redirects={redirects} residue={max_residue:e}");

        Ok(Self {
            prob,
            alias,
            max_residue,
        })
    }

    /// Map a uniform variate `v` in `[0, 1)` to a slot outcome.
    ///
    /// One variate picks both the slot (integer part of `n * v`) and the
    /// coin flip (fractional part). The comparison assumes `v` can be 0 but
    /// never 1.
    #[inline]
    pub fn pick(&self, v: f64) -> usize {
        let n = self.prob.len();
        let x = v * n as f64;
        let idx = (x as usize).min(n - 1);
        let remainder = x - idx as f64;
        if remainder < self.prob[idx] {
            idx
        } else {
            self.alias[idx]
        }
    }

    /// Per-slot probability of keeping the slot's own index.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Per-slot fallback index.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    /// Largest deviation from 1.0 that was clamped away after redistribution.
    pub fn max_residue(&self) -> f64 {
        self.max_residue
    }

    /// Probability of outcome `i` implied by the tables.
    pub fn outcome_probability(&self, i: usize) -> f64 {
        let n = self.prob.len() as f64;
        let own = self.prob.get(i).copied().unwrap_or(0.0);
        let borrowed: f64 = self
            .alias
            .iter()
            .zip(&self.prob)
            .enumerate()
            .filter(|&(slot, (&a, _))| a == i && slot != i)
            .map(|(_, (_, &p))| 1.0 - p)
            .sum();
        (own + borrowed) / n
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Draw k samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub(crate) fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            counts[self.sample(rng)] += 1;
        }
        counts
    }
}

impl Distribution<usize> for AliasTable {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick(rng.random::<f64>())
    }
}

/// Divide by the sum so the weights form a distribution. Leaves them alone if
/// they already sum to exactly 1.
fn normalize(weights: &mut [f64]) {
    let mut sum: f64 = weights.iter().sum();
    if !sum.is_finite() {
        // Finite weights whose sum overflows: bring them down to [0, 1] first.
        let max = weights.iter().copied().fold(0.0f64, f64::max);
        for w in weights.iter_mut() {
            *w /= max;
        }
        sum = weights.iter().sum();
    }
    #[allow(clippy::float_cmp)]
    if sum != 1.0 {
        for w in weights.iter_mut() {
            *w /= sum;
        }
    }
}
