use thiserror::Error;

/// Errors returned by fallible matrix and vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A matrix or vector was built from a sequence with the wrong number of components.
    #[error("expected {expected} components, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// Flat data was written into a destination buffer of the wrong length.
    #[error("destination holds {actual} components, but {expected} are required")]
    SizeMismatch { expected: usize, actual: usize },

    /// Attempted to invert a matrix whose determinant is zero.
    #[error("attempt to invert a singular matrix")]
    SingularMatrix,

    /// Attempted to normalize a vector of length zero.
    #[error("attempt to normalize a zero-length vector")]
    ZeroLength,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidDimension {
                expected: 9,
                actual: 4
            }
            .to_string(),
            "expected 9 components, got 4"
        );
        assert_eq!(
            Error::SizeMismatch {
                expected: 16,
                actual: 12
            }
            .to_string(),
            "destination holds 12 components, but 16 are required"
        );
        assert_eq!(
            Error::SingularMatrix.to_string(),
            "attempt to invert a singular matrix"
        );
    }
}
