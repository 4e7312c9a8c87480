//! Error type for the fallible (`try_*`) operations.

use core::fmt;

/// Errors reported by the checked counterparts of the permissive operators.
///
/// The operators themselves never return this: indexing panics like a Rust
/// array, and `normalise` lets inf/NaN propagate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    /// Component or row index past the end of the value.
    IndexOutOfBounds { index: usize, len: usize },
    /// A direction was requested from a vector with no usable length
    /// (magnitude not above epsilon, or NaN).
    ZeroMagnitude,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::ZeroMagnitude => write!(f, "cannot normalise a zero-magnitude vector"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}
