//! Board position representation.

use std::fmt::{self, Display};

/// A zero-indexed cell coordinate on a board.
///
/// Positions are plain `(row, col)` pairs and carry no board size; the
/// board they index into defines the valid range.
///
/// # Examples
///
/// ```
/// use polydoku_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.row(), 3);
        assert_eq!(pos.col(), 7);
        assert_eq!(Position::from((3, 7)), pos);
        assert_eq!(format!("{pos}"), "(3, 7)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Position::new(0, 8) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
