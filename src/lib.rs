//! # aliasdraw
//!
//! Sampling from a fixed discrete distribution in O(1) per draw.
//!
//! This crate builds the probability and alias tables of
//! [Walker's Alias Method](https://en.wikipedia.org/wiki/Alias_method)
//! from any non-negative weight vector, and wraps them in a sampler that owns
//! its own seeded random stream so draws are reproducible and resumable.
//!
//! ## Quick start
//!
//! ```rust
//! use aliasdraw::AliasSampler;
//!
//! # fn main() -> Result<(), aliasdraw::BuildError> {
//! let mut faces = AliasSampler::with_values(
//!     &[1.0, 4.0, 1.0, 2.0, 1.0, 1.0],
//!     vec![1, 2, 3, 4, 5, 6],
//! )?;
//!
//! let first = faces.draw(512, Some(7));
//! let rest = faces.draw(512, None); // continues the seeded stream
//!
//! let mut again = faces.clone();
//! let all = again.draw(1024, Some(7));
//! assert_eq!(all[..512], first[..]);
//! assert_eq!(all[512..], rest[..]);
//! # Ok(()) }
//! ```
//!
//! ## Weighted enums
//!
//! Literal weights are checked at compile time: a negative, infinite or
//! all-zero weighting does not compile. Weights naming a `const` are checked
//! when the sampler is built.
//!
//! ```rust,ignore
//! use aliasdraw::WeightedEnum;
//!
//! const GC: f64 = 0.62;
//!
//! #[derive(Copy, Clone, Debug, WeightedEnum)]
//! enum Base {
//!     #[weight((1.0 - GC) / 2.0)] A,
//!     #[weight(GC / 2.0)]         C,
//!     #[weight(GC / 2.0)]         G,
//!     #[weight((1.0 - GC) / 2.0)] T,
//! }
//!
//! let mut bases = Base::seeded_sampler(7)?;
//! let read: Vec<Base> = bases.draw(150, None);
//! ```
//!
//! ## Performance
//! * **Build**: O(n) to construct the tables from weights.
//! * **Draw**: O(1) per sample (one uniform variate, one branch).
//! * **Space**: 2 vectors of length `n` (f64 + usize) plus the value map.
//!
//! ## Gotchas
//! * Weights must be non-negative and finite, with at least one positive.
//!   `NaN` weights are treated as zero.
//! * Index samplers are 0-based.
//! * Each sampler owns a PCG stream; clone a sampler to fork its stream.

mod config;
mod error;
pub mod histogram;
mod sampler;
mod walker;

pub use config::{DEFAULT_RESIDUE_TOLERANCE, SamplerConfig, residue_bound};
pub use error::{BuildError, HistogramError};
pub use sampler::AliasSampler;
pub use walker::AliasTable;

/// Derive macro imported from `aliasdraw_macros`.
/// See the crate-level example for usage.
pub use aliasdraw_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedEnum::ENTRIES`],
/// which enables building a ready-to-draw [`AliasSampler`].
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum.
    const ENTRIES: &'static [(Self, f64)];

    /// Sampler over the enum's variants, seeded from OS entropy.
    ///
    /// # Errors
    /// See [`AliasTable::build`]: no variants, a negative weight, or no
    /// positive weight will error.
    fn sampler() -> Result<AliasSampler<Self>, BuildError>
    where
        Self: Copy,
    {
        Self::sampler_with(SamplerConfig::default())
    }

    /// Sampler over the enum's variants built with `config`.
    fn sampler_with(config: SamplerConfig) -> Result<AliasSampler<Self>, BuildError>
    where
        Self: Copy,
    {
        let (values, weights): (Vec<Self>, Vec<f64>) = Self::ENTRIES.iter().copied().unzip();
        AliasSampler::with_config(&weights, values, config)
    }
}
