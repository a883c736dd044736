use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Specifies errors which can be returned by map operations.
/// All of them are detected before the map is modified.
#[derive(Clone, Debug, PartialEq)]
pub enum MapError {
    /// Grid size or vector dimension is not positive, or a grid is not square.
    InvalidDimension {
        /// Grid side size.
        size: usize,
        /// Vector dimension.
        dimension: usize,
    },
    /// A sample has a dimension which differs from the map's one.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },
    /// Training is called without data.
    EmptyDataset,
    /// Training is called with zero iterations.
    InvalidIterationCount,
    /// Some scalar parameter is out of its domain.
    InvalidParameter(String),
    /// A sample contains NaN or infinite value.
    NonFiniteInput {
        /// Index of the offending sample.
        index: usize,
    },
}

impl MapError {
    pub(crate) fn invalid_parameter(name: &str, value: Float) -> Self {
        MapError::InvalidParameter(format!("{name} has invalid value: {value}"))
    }
}

impl Display for MapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidDimension { size, dimension } => {
                write!(f, "invalid map dimension: grid size {size}, vector dimension {dimension}")
            }
            MapError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MapError::EmptyDataset => write!(f, "dataset is empty"),
            MapError::InvalidIterationCount => write!(f, "amount of iterations should be positive"),
            MapError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            MapError::NonFiniteInput { index } => write!(f, "sample at index {index} has non finite value"),
        }
    }
}

impl std::error::Error for MapError {}
