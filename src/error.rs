//! Error types for hull computation.

use thiserror::Error;

/// Errors that can occur while computing a convex hull.
///
/// Degenerate inputs (empty, one or two points, duplicates, all collinear)
/// are not errors; they produce degenerate hulls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// A point has a NaN or infinite coordinate.
    #[error("invalid input: point {index} has a non-finite coordinate")]
    InvalidInput {
        /// Position of the offending point in the input.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_point() {
        let err = HullError::InvalidInput { index: 7 };
        assert_eq!(
            err.to_string(),
            "invalid input: point 7 has a non-finite coordinate"
        );
    }
}
