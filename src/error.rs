/// Reasons an [`AliasTable`](crate::AliasTable) cannot be built from a weight vector.
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildError {
    /// The weight vector is empty.
    NoDistribution,
    /// The value map does not have one entry per weight.
    BadSize { weights: usize, values: usize },
    /// A weight is strictly negative.
    BadDistribution { index: usize, value: f64 },
    /// A weight is `+inf`.
    Infinite { index: usize },
    /// No weight is strictly positive (all zero or NaN).
    NoData,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::NoDistribution => write!(f, "weights slice is empty"),
            BuildError::BadSize { weights, values } => {
                write!(f, "got {values} values for {weights} weights")
            }
            BuildError::BadDistribution { index, value } => {
                write!(
                    f,
                    "weights contain a negative value at index {index}: {value}"
                )
            }
            BuildError::Infinite { index } => {
                write!(f, "weights contain an infinite value at index {index}")
            }
            BuildError::NoData => write!(f, "no weight is strictly positive"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Errors from the histogram helpers in [`crate::histogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistogramError {
    Empty,
    ZeroBins,
    NonFinite { index: usize, value: f64 },
    Build(BuildError),
}

impl std::fmt::Display for HistogramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistogramError::Empty => write!(f, "no samples to histogram"),
            HistogramError::ZeroBins => write!(f, "bin count must be at least 1"),
            HistogramError::NonFinite { index, value } => {
                write!(f, "sample {index} is not finite: {value}")
            }
            HistogramError::Build(e) => write!(f, "histogram weights rejected: {e}"),
        }
    }
}

impl std::error::Error for HistogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistogramError::Build(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BuildError> for HistogramError {
    fn from(e: BuildError) -> Self {
        HistogramError::Build(e)
    }
}
