//! Numeric board representation used during solving.

use std::fmt::{self, Display};

use crate::{Position, SegmentShape};

/// An N×N grid of cell values, with `0` meaning empty.
///
/// This is the solver-facing form of a board: cells hold values in
/// `1..=N` once placed, and the board is always square. Each generation
/// call owns its own `Board`; nothing is shared between calls.
///
/// # Examples
///
/// ```
/// use polydoku_core::{Board, Position};
///
/// let mut board = Board::empty(4);
/// assert_eq!(board.get(Position::new(0, 0)), None);
///
/// board.set(Position::new(0, 0), 3);
/// assert_eq!(board.get(Position::new(0, 0)), Some(3));
///
/// board.clear(Position::new(0, 0));
/// assert_eq!(board.get(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<usize>,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1, got {size}");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Returns the board size N.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row() < self.size && pos.col() < self.size,
            "position {pos} out of range for board size {}",
            self.size
        );
        pos.row() * self.size + pos.col()
    }

    /// Returns the value at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<usize> {
        match self.cells[self.index(pos)] {
            0 => None,
            value => Some(value),
        }
    }

    /// Places `value` at `pos`, overwriting any previous value.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range or `value` is not in `1..=N`.
    pub fn set(&mut self, pos: Position, value: usize) {
        assert!(
            (1..=self.size).contains(&value),
            "value must be between 1 and {}, got {value}",
            self.size
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Clears the cell at `pos` back to empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    pub fn clear(&mut self, pos: Position) {
        let index = self.index(pos);
        self.cells[index] = 0;
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::{Board, Position};
    ///
    /// let mut board = Board::empty(2);
    /// board.set(Position::new(0, 0), 1);
    /// assert_eq!(board.first_empty(), Some(Position::new(0, 1)));
    /// ```
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&value| value == 0)
            .map(|i| Position::new(i / self.size, i % self.size))
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Checks whether `value` may be placed at `pos` without repeating in
    /// the cell's row, column, or aligned segment.
    ///
    /// The check is side-effect free and does not require the target cell
    /// to be empty; it reports whether `value` occurs anywhere in the
    /// three houses covering `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range. The segment scan assumes `shape`
    /// tiles this board (`rows * cols == N`).
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::{Board, Position, SegmentShape};
    ///
    /// let shape = SegmentShape::for_size(9);
    /// let mut board = Board::empty(9);
    /// board.set(Position::new(4, 4), 5);
    ///
    /// assert!(!board.can_place(Position::new(4, 0), 5, shape)); // row
    /// assert!(!board.can_place(Position::new(0, 4), 5, shape)); // column
    /// assert!(!board.can_place(Position::new(3, 3), 5, shape)); // segment
    /// assert!(board.can_place(Position::new(0, 0), 5, shape));
    /// ```
    #[must_use]
    pub fn can_place(&self, pos: Position, value: usize, shape: SegmentShape) -> bool {
        let _ = self.index(pos);

        for col in 0..self.size {
            if self.cells[pos.row() * self.size + col] == value {
                return false;
            }
        }

        for row in 0..self.size {
            if self.cells[row * self.size + pos.col()] == value {
                return false;
            }
        }

        let origin = shape.origin_of(pos);
        for row in origin.row()..origin.row() + shape.rows() {
            for col in origin.col()..origin.col() + shape.cols() {
                if self.cells[row * self.size + col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Returns `true` if the board is completely filled and every row,
    /// column, and aligned segment is a permutation of `1..=N`.
    ///
    /// Intended for validators and tests; the solver maintains the
    /// constraint incrementally and does not need this.
    #[must_use]
    pub fn is_valid_solution(&self, shape: SegmentShape) -> bool {
        let n = self.size;
        if shape.rows() * shape.cols() != n || !self.is_filled() {
            return false;
        }

        let is_permutation = |values: &mut [usize]| {
            values.sort_unstable();
            values.iter().enumerate().all(|(i, &value)| value == i + 1)
        };

        for row in 0..n {
            let mut values: Vec<_> = (0..n).map(|col| self.cells[row * n + col]).collect();
            if !is_permutation(&mut values) {
                return false;
            }
        }

        for col in 0..n {
            let mut values: Vec<_> = (0..n).map(|row| self.cells[row * n + col]).collect();
            if !is_permutation(&mut values) {
                return false;
            }
        }

        for seg_row in (0..n).step_by(shape.rows()) {
            for seg_col in (0..n).step_by(shape.cols()) {
                let mut values = Vec::with_capacity(n);
                for row in seg_row..seg_row + shape.rows() {
                    for col in seg_col..seg_col + shape.cols() {
                        values.push(self.cells[row * n + col]);
                    }
                }
                if !is_permutation(&mut values) {
                    return false;
                }
            }
        }

        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * self.size + col] {
                    0 => write!(f, ".")?,
                    value => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}
