//! Turning raw observations into `(values, weights)` for a sampler.
//!
//! [`frequencies`] counts distinct discrete observations; [`binned`] sorts real
//! samples into equal-width bins and reports each bin's center and share.

use std::collections::BTreeMap;

use crate::error::HistogramError;

/// Distinct observations in ascending order and the fraction of
/// `observations` each one accounts for.
pub fn frequencies<T: Ord + Clone>(observations: &[T]) -> (Vec<T>, Vec<f64>) {
    let mut counts: BTreeMap<&T, usize> = BTreeMap::new();
    for obs in observations {
        *counts.entry(obs).or_default() += 1;
    }
    let total = observations.len() as f64;
    counts
        .into_iter()
        .map(|(value, count)| (value.clone(), count as f64 / total))
        .unzip()
}

/// Equal-width histogram of real samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub centers: Vec<f64>,
    pub counts: Vec<usize>,
    /// `counts` divided by the number of samples.
    pub probabilities: Vec<f64>,
}

/// Sort `samples` into `bins` equal-width bins spanning `[min, max]`.
///
/// Bins are half-open except the last, which also holds `max`. If every
/// sample is equal the single value sits in the middle of a unit-wide range.
///
/// # Errors
/// [`HistogramError::ZeroBins`], [`HistogramError::Empty`], or
/// [`HistogramError::NonFinite`] for NaN or infinite samples.
pub fn binned(samples: &[f64], bins: usize) -> Result<Histogram, HistogramError> {
    if bins == 0 {
        return Err(HistogramError::ZeroBins);
    }
    if samples.is_empty() {
        return Err(HistogramError::Empty);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(HistogramError::NonFinite { index, value });
    }

    let (mut lo, mut hi) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    #[allow(clippy::float_cmp)]
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut edges: Vec<f64> = (0..bins).map(|k| lo + k as f64 * width).collect();
    edges.push(hi);

    let mut counts = vec![0usize; bins];
    for &x in samples {
        let k = (((x - lo) / width) as usize).min(bins - 1);
        counts[k] += 1;
    }

    let centers = edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect();
    let total = samples.len() as f64;
    let probabilities = counts.iter().map(|&c| c as f64 / total).collect();

    Ok(Histogram {
        edges,
        centers,
        counts,
        probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_of_dice_rolls() {
        let (values, weights) = frequencies(&[4, 4, 2, 2, 2, 2, 3, 1, 5, 6]);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        let expected = [0.1, 0.4, 0.1, 0.2, 0.1, 0.1];
        for (w, e) in weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-12);
        }
    }

    #[test]
    fn frequencies_of_nothing() {
        let (values, weights) = frequencies::<u8>(&[]);
        assert!(values.is_empty());
        assert!(weights.is_empty());
    }

    #[test]
    fn max_lands_in_last_bin() {
        let h = binned(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.centers, vec![0.5, 1.5, 2.5, 3.5]);
        assert!((h.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_samples_get_unit_range() {
        let h = binned(&[2.0, 2.0, 2.0], 1).unwrap();
        assert_eq!(h.edges, vec![1.5, 2.5]);
        assert_eq!(h.centers, vec![2.0]);
        assert_eq!(h.counts, vec![3]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(binned(&[1.0], 0), Err(HistogramError::ZeroBins));
        assert_eq!(binned(&[], 3), Err(HistogramError::Empty));
        assert!(matches!(
            binned(&[1.0, f64::NAN], 3),
            Err(HistogramError::NonFinite { index: 1, .. })
        ));
    }
}
