use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::SamplerConfig;
use crate::error::{BuildError, HistogramError};
use crate::histogram;
use crate::walker::AliasTable;

/// Alias-method sampler that owns its tables, its value map and its own
/// random stream.
///
/// The stream never touches the thread-local generator: each sampler is
/// seeded either explicitly or from OS entropy, so drawing from one sampler
/// cannot shift what any other generator produces next.
///
/// # Reproducibility
/// A seeded draw resets the stream and the state it ends in is kept, so
/// `draw(a + b, Some(s))` equals `draw(a, Some(s))` followed by `draw(b, None)`.
#[derive(Debug, Clone)]
pub struct AliasSampler<T = usize> {
    table: AliasTable,
    values: Vec<T>,
    stream: Pcg64,
}

impl AliasSampler<usize> {
    /// Sampler over the indices `0..weights.len()`.
    ///
    /// # Errors
    /// See [`AliasTable::build`].
    pub fn new(weights: &[f64]) -> Result<Self, BuildError> {
        Self::with_config(weights, (0..weights.len()).collect(), SamplerConfig::default())
    }
}

impl<T> AliasSampler<T> {
    /// Sampler whose outcome `i` is `values[i]`.
    ///
    /// # Errors
    /// See [`AliasTable::build`]; a length mismatch is [`BuildError::BadSize`].
    pub fn with_values(weights: &[f64], values: Vec<T>) -> Result<Self, BuildError> {
        Self::with_config(weights, values, SamplerConfig::default())
    }

    /// Like [`with_values`](Self::with_values), with an explicit seed and
    /// residue tolerance.
    pub fn with_config(
        weights: &[f64],
        values: Vec<T>,
        config: SamplerConfig,
    ) -> Result<Self, BuildError> {
        let table =
            AliasTable::build_with_tolerance(weights, Some(values.len()), config.residue_tolerance)?;
        Ok(Self {
            table,
            values,
            stream: initial_stream(config.seed),
        })
    }

    /// Draw one value from the current stream.
    pub fn draw_one(&mut self) -> &T {
        let i = self.table.pick(self.stream.random::<f64>());
        &self.values[i]
    }

    /// Draw `count` indices; seeding works exactly as in [`draw`](Self::draw).
    pub fn draw_indices(&mut self, count: usize, seed: Option<u64>) -> Vec<usize> {
        if let Some(seed) = seed {
            self.reseed(seed);
        }
        log::trace!(
            "drawing {count} samples from n={} (seeded: {})",
            self.table.len(),
            seed.is_some()
        );
        (0..count)
            .map(|_| self.table.pick(self.stream.random::<f64>()))
            .collect()
    }

    /// Reset the stream to a fresh state derived from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.stream = Pcg64::seed_from_u64(seed);
    }

    /// The probability and alias tables drawn from.
    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Outcome `i` of the sampler is `values()[i]`.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<T: Clone> AliasSampler<T> {
    /// Draw `count` outcomes in draw order.
    ///
    /// With `Some(seed)` the stream restarts from `seed` first; with `None` it
    /// continues from wherever the previous call left it.
    pub fn draw(&mut self, count: usize, seed: Option<u64>) -> Vec<T> {
        self.draw_indices(count, seed)
            .into_iter()
            .map(|i| self.values[i].clone())
            .collect()
    }
}

impl<T: Ord + Clone> AliasSampler<T> {
    /// Count how often each distinct observation occurs and sample the
    /// distinct values with those frequencies.
    pub fn from_observations(observations: &[T]) -> Result<Self, BuildError> {
        let (values, weights) = histogram::frequencies(observations);
        Self::with_values(&weights, values)
    }
}

impl AliasSampler<f64> {
    /// Histogram `samples` into `bins` equal-width bins and sample the bin
    /// centers with the bin probabilities.
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, HistogramError> {
        let hist = histogram::binned(samples, bins)?;
        Ok(Self::with_values(&hist.probabilities, hist.centers)?)
    }
}

fn initial_stream(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_os_rng(),
    }
}
