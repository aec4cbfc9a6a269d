use std::error::Error;
use std::fmt;

/// Message carried by `InvalidArgument` when a vector is built from no coordinates.
pub const EMPTY_COORDINATES_MSG: &str = "coordinates must be nonempty";

/// Message reserved for non-sequence input. The constructor only accepts
/// `IntoIterator`, so this never surfaces at runtime.
pub const NOT_ITERABLE_MSG: &str = "coordinates must be an iterable";

/// Errors raised by vector construction and the operations built on normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    InvalidArgument(String),
    CannotNormalizeZeroVector,
    CannotComputeAngleWithZeroVector,
    NoUniqueParallelComponent,
    NoUniqueOrthogonalComponent,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            VectorError::CannotNormalizeZeroVector => write!(f, "Cannot normalize zero vector"),
            VectorError::CannotComputeAngleWithZeroVector => {
                write!(f, "Cannot compute angle with zero vector")
            }
            VectorError::NoUniqueParallelComponent => write!(f, "No unique parallel component"),
            VectorError::NoUniqueOrthogonalComponent => {
                write!(f, "No unique orthogonal component")
            }
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
