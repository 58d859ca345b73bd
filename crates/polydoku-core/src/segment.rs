//! Segment geometry for variable-size boards.
//!
//! A board of size N is partitioned into aligned rectangular segments of
//! `rows × cols` cells with `rows * cols == N`, so exactly N segments tile
//! the board. [`SegmentShape::for_size`] derives the most square shape a
//! given N admits.

use std::fmt::{self, Display};

use crate::{BoardError, Position};

/// The dimensions of a board's rectangular segments.
///
/// The shape is only meaningful together with a board size N satisfying
/// `rows * cols == N`; [`SegmentShape::for_board`] enforces that pairing,
/// while [`SegmentShape::for_size`] derives a valid shape from N alone.
///
/// # Examples
///
/// ```
/// use polydoku_core::SegmentShape;
///
/// assert_eq!(SegmentShape::for_size(9), SegmentShape::new(3, 3));
/// assert_eq!(SegmentShape::for_size(6), SegmentShape::new(2, 3));
/// assert_eq!(SegmentShape::for_size(7), SegmentShape::new(1, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentShape {
    rows: usize,
    cols: usize,
}

impl SegmentShape {
    /// Creates a shape from raw segment dimensions.
    ///
    /// No board size is checked here; pair the shape with a size through
    /// [`SegmentShape::for_board`] before handing it to a solver.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Derives the segment shape for a board of size `n`.
    ///
    /// Perfect squares yield square segments (`√n × √n`, the classic
    /// case). Otherwise the largest divisor `d` of `n` with
    /// `2 <= d <= floor(√n)` yields `d × n/d`. If no such divisor exists
    /// (n = 1 or n prime), the degenerate shape `1 × n` is returned: each
    /// segment spans a full row, which is accepted, not an error.
    ///
    /// The result always satisfies `rows * cols == n` and `rows <= cols`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::SegmentShape;
    ///
    /// assert_eq!(SegmentShape::for_size(16), SegmentShape::new(4, 4));
    /// assert_eq!(SegmentShape::for_size(12), SegmentShape::new(3, 4));
    /// assert_eq!(SegmentShape::for_size(1), SegmentShape::new(1, 1));
    /// ```
    #[must_use]
    pub fn for_size(n: usize) -> Self {
        assert!(n > 0, "board size must be at least 1, got {n}");
        let root = n.isqrt();
        if root * root == n {
            return Self::new(root, root);
        }
        for d in (2..=root).rev() {
            if n % d == 0 {
                return Self::new(d, n / d);
            }
        }
        Self::new(1, n)
    }

    /// Validates a shape against a board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero, and
    /// [`BoardError::SegmentMismatch`] if `rows * cols != size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::SegmentShape;
    ///
    /// assert!(SegmentShape::for_board(3, 3, 9).is_ok());
    /// assert!(SegmentShape::for_board(2, 4, 9).is_err());
    /// ```
    pub fn for_board(rows: usize, cols: usize, size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        if rows * cols != size {
            return Err(BoardError::SegmentMismatch { rows, cols, size });
        }
        Ok(Self::new(rows, cols))
    }

    /// Returns the number of rows in a segment.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in a segment.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the top-left corner of the aligned segment containing `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::{Position, SegmentShape};
    ///
    /// let shape = SegmentShape::new(2, 3);
    /// assert_eq!(shape.origin_of(Position::new(3, 4)), Position::new(2, 3));
    /// ```
    #[must_use]
    pub const fn origin_of(&self, pos: Position) -> Position {
        Position::new(pos.row() - pos.row() % self.rows, pos.col() - pos.col() % self.cols)
    }
}

impl Display for SegmentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_for_size_known_shapes() {
        assert_eq!(SegmentShape::for_size(1), SegmentShape::new(1, 1));
        assert_eq!(SegmentShape::for_size(4), SegmentShape::new(2, 2));
        assert_eq!(SegmentShape::for_size(6), SegmentShape::new(2, 3));
        assert_eq!(SegmentShape::for_size(7), SegmentShape::new(1, 7));
        assert_eq!(SegmentShape::for_size(9), SegmentShape::new(3, 3));
        assert_eq!(SegmentShape::for_size(16), SegmentShape::new(4, 4));
        assert_eq!(SegmentShape::for_size(32), SegmentShape::new(4, 8));
    }

    #[test]
    #[should_panic(expected = "board size must be at least 1")]
    fn test_for_size_zero_panics() {
        let _ = SegmentShape::for_size(0);
    }

    #[test]
    fn test_for_board_validation() {
        assert_eq!(
            SegmentShape::for_board(2, 3, 6),
            Ok(SegmentShape::new(2, 3))
        );
        assert_eq!(
            SegmentShape::for_board(2, 4, 9),
            Err(BoardError::SegmentMismatch {
                rows: 2,
                cols: 4,
                size: 9
            })
        );
        assert_eq!(
            SegmentShape::for_board(0, 0, 0),
            Err(BoardError::InvalidSize { size: 0 })
        );
        // Zero-dimension shapes must be rejected here; rendering and
        // segment-origin math divide by the shape dimensions.
        assert_eq!(
            SegmentShape::for_board(0, 5, 6),
            Err(BoardError::SegmentMismatch {
                rows: 0,
                cols: 5,
                size: 6
            })
        );
    }

    #[test]
    fn test_origin_of_tiles_the_board() {
        let shape = SegmentShape::new(2, 3);
        assert_eq!(shape.origin_of(Position::new(0, 0)), Position::new(0, 0));
        assert_eq!(shape.origin_of(Position::new(1, 2)), Position::new(0, 0));
        assert_eq!(shape.origin_of(Position::new(2, 3)), Position::new(2, 3));
        assert_eq!(shape.origin_of(Position::new(5, 5)), Position::new(4, 3));
    }

    proptest! {
        #[test]
        fn prop_for_size_product_and_order(n in 1usize..=512) {
            let shape = SegmentShape::for_size(n);
            prop_assert_eq!(shape.rows() * shape.cols(), n);
            prop_assert!(shape.rows() >= 1);
            prop_assert!(shape.rows() <= shape.cols());
        }

        #[test]
        fn prop_for_size_square_boards(root in 1usize..=22) {
            let shape = SegmentShape::for_size(root * root);
            prop_assert_eq!(shape, SegmentShape::new(root, root));
        }
    }
}
