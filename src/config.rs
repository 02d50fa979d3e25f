/// Largest deviation from 1.0 the redistribution loop may leave behind
/// before the table is considered broken.
pub const DEFAULT_RESIDUE_TOLERANCE: f64 = 1e-9;

/// Largest residue a correct build can leave for `n` slots.
///
/// Summing `n` weights and pushing mass through up to `n` redirects each
/// round off by about one ulp of values as large as `n`, so the bound grows
/// as `n^2 * eps`. Never tighter than `tolerance`.
pub fn residue_bound(n: usize, tolerance: f64) -> f64 {
    let n = n as f64;
    tolerance.max(8.0 * n * n * f64::EPSILON)
}

/// Construction options for [`AliasSampler`](crate::AliasSampler).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Seed for the sampler's stream. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Bound on the floating-point residue clamped away after redistribution.
    pub residue_tolerance: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            residue_tolerance: DEFAULT_RESIDUE_TOLERANCE,
        }
    }
}

impl SamplerConfig {
    /// Seed the stream with `seed` instead of OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Warn when the clamped residue exceeds `tolerance`.
    pub fn with_residue_tolerance(mut self, tolerance: f64) -> Self {
        self.residue_tolerance = tolerance;
        self
    }
}
