//! Error type for image shape violations.

use thiserror::Error;

/// An image does not have the shape an operation requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The operation only accepts square images.
    #[error("image must be square (got {width}x{height})")]
    NotSquare {
        /// Actual width in pixels
        width: u32,
        /// Actual height in pixels
        height: u32,
    },

    /// The source image has no pixels to sample from.
    #[error("source image has zero dimensions")]
    EmptySource,

    /// A width or height exceeds [`MAX_DIMENSION`](super::MAX_DIMENSION).
    #[error("image too large: {width}x{height} (max {max}x{max})")]
    TooLarge { width: u32, height: u32, max: u32 },

    /// A raw pixel buffer does not match the declared dimensions.
    #[error("pixel buffer holds {actual} values, expected {expected} for {width}x{height}")]
    BufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_reports_dimensions() {
        let error = ShapeError::NotSquare {
            width: 10,
            height: 20,
        };
        assert_eq!(error.to_string(), "image must be square (got 10x20)");
    }

    #[test]
    fn test_empty_source_message() {
        assert_eq!(
            ShapeError::EmptySource.to_string(),
            "source image has zero dimensions"
        );
    }

    #[test]
    fn test_too_large_message() {
        let error = ShapeError::TooLarge {
            width: 70_000,
            height: 1,
            max: 65_535,
        };
        assert_eq!(
            error.to_string(),
            "image too large: 70000x1 (max 65535x65535)"
        );
    }
}
