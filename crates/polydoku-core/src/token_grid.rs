//! Textual board representation for presentation layers.

use std::fmt::{self, Display};

use crate::{Board, Position, SegmentShape};

/// The marker token held by every cell of an empty display grid.
///
/// Presentation layers must treat exactly this token as "unfilled"; the
/// engine never mixes marker values across calls.
pub const EMPTY_TOKEN: &str = "-";

/// An N×N grid of display tokens.
///
/// This is the form handed to callers: each cell holds either
/// [`EMPTY_TOKEN`] or the stringified value of the corresponding
/// [`Board`] cell. A `TokenGrid` is a complete immutable snapshot; the
/// engine keeps no reference to it after returning.
///
/// # Examples
///
/// ```
/// use polydoku_core::{EMPTY_TOKEN, TokenGrid};
///
/// let grid = TokenGrid::empty(3);
/// assert_eq!(grid.size(), 3);
/// assert!(grid.rows().iter().flatten().all(|token| token == EMPTY_TOKEN));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrid {
    rows: Vec<Vec<String>>,
}

impl TokenGrid {
    /// Creates an empty display grid of the given size, every cell set to
    /// [`EMPTY_TOKEN`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1, got {size}");
        Self {
            rows: vec![vec![EMPTY_TOKEN.to_owned(); size]; size],
        }
    }

    /// Returns the grid size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the grid contents as rows of tokens.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Renders the grid with blank separator lines between segment rows
    /// and extra spacing between segment columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use polydoku_core::{Board, Position, SegmentShape, TokenGrid};
    ///
    /// let mut board = Board::empty(4);
    /// board.set(Position::new(0, 0), 1);
    /// let grid = TokenGrid::from(&board);
    /// let shape = SegmentShape::for_size(4);
    /// assert!(grid.render(shape).starts_with("1 -  - -"));
    /// ```
    #[must_use]
    pub fn render(&self, shape: SegmentShape) -> String {
        let mut out = String::new();
        for (row, tokens) in self.rows.iter().enumerate() {
            if row > 0 {
                out.push('\n');
                if row % shape.rows() == 0 {
                    out.push('\n');
                }
            }
            for (col, token) in tokens.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                    if col % shape.cols() == 0 {
                        out.push(' ');
                    }
                }
                out.push_str(token);
            }
        }
        out
    }
}

impl From<&Board> for TokenGrid {
    /// Converts a numeric board to its display form.
    ///
    /// Filled cells become their stringified value; empty cells become
    /// [`EMPTY_TOKEN`]. A solved board therefore contains no marker
    /// tokens at all.
    fn from(board: &Board) -> Self {
        let size = board.size();
        let rows = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        board
                            .get(Position::new(row, col))
                            .map_or_else(|| EMPTY_TOKEN.to_owned(), |value| value.to_string())
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

impl Display for TokenGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, tokens) in self.rows.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_grid_uses_marker_everywhere() {
        let grid = TokenGrid::empty(4);
        assert_eq!(grid.size(), 4);
        for row in grid.rows() {
            assert_eq!(row.len(), 4);
            for token in row {
                assert_eq!(token, EMPTY_TOKEN);
            }
        }
    }

    #[test]
    #[should_panic(expected = "board size must be at least 1")]
    fn test_empty_zero_panics() {
        let _ = TokenGrid::empty(0);
    }

    #[test]
    fn test_from_board_stringifies_values() {
        let mut board = Board::empty(2);
        board.set(Position::new(0, 0), 1);
        board.set(Position::new(1, 1), 2);
        let grid = TokenGrid::from(&board);
        assert_eq!(grid.rows()[0], vec!["1", "-"]);
        assert_eq!(grid.rows()[1], vec!["-", "2"]);
        assert_eq!(format!("{grid}"), "1 -\n- 2");
    }

    #[test]
    fn test_render_separates_segments() {
        let mut board = Board::empty(4);
        board.set(Position::new(0, 0), 1);
        board.set(Position::new(2, 2), 4);
        let grid = TokenGrid::from(&board);
        let rendered = grid.render(SegmentShape::new(2, 2));
        assert_eq!(
            rendered,
            "1 -  - -\n- -  - -\n\n- -  4 -\n- -  - -"
        );
    }
}
