//! Error taxonomy for the board engine.

use derive_more::{Display, Error};

/// Errors reported by board construction and generation.
///
/// The invalid-argument class ([`InvalidSize`], [`SegmentMismatch`]) is
/// always surfaced before any board is built; no partial board ever
/// accompanies an error. [`ConstructionFailure`] indicates an exhausted
/// search, which cannot happen for a well-formed `(n, r, c)` and is
/// treated as a defect rather than retried.
///
/// [`InvalidSize`]: BoardError::InvalidSize
/// [`SegmentMismatch`]: BoardError::SegmentMismatch
/// [`ConstructionFailure`]: BoardError::ConstructionFailure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The requested board size is not a positive integer.
    #[display("board size must be at least 1, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },

    /// The segment dimensions do not multiply to the board size.
    #[display("segment dimensions {rows}x{cols} do not multiply to board size {size}")]
    SegmentMismatch {
        /// Segment rows as given.
        rows: usize,
        /// Segment columns as given.
        cols: usize,
        /// Board size as given.
        size: usize,
    },

    /// The backtracking search exhausted every candidate without
    /// completing a board.
    #[display("failed to construct a valid board of size {size}")]
    ConstructionFailure {
        /// The board size being generated.
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BoardError::InvalidSize { size: 0 }.to_string(),
            "board size must be at least 1, got 0"
        );
        assert_eq!(
            BoardError::SegmentMismatch {
                rows: 2,
                cols: 4,
                size: 9
            }
            .to_string(),
            "segment dimensions 2x4 do not multiply to board size 9"
        );
        assert_eq!(
            BoardError::ConstructionFailure { size: 9 }.to_string(),
            "failed to construct a valid board of size 9"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<BoardError>();
    }
}
