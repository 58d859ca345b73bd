//! Core data structures for variable-size Sudoku boards.
//!
//! This crate provides the data model shared by board generation and
//! validation: boards are N×N for arbitrary N ≥ 1, partitioned into
//! rectangular r×c segments with `r * c == N`. Classic 9×9 Sudoku is the
//! special case N = 9 with 3×3 segments.
//!
//! # Overview
//!
//! The crate is organized around four concepts:
//!
//! 1. **Geometry** - [`segment`]: the [`SegmentShape`] type and the
//!    calculator that derives the most square r×c shape for a given N.
//! 2. **Numeric board** - [`board`]: the [`Board`] grid used during
//!    solving, with the side-effect-free placement check
//!    [`Board::can_place`].
//! 3. **Display board** - [`token_grid`]: the [`TokenGrid`] textual form
//!    handed to presentation layers.
//! 4. **Errors** - [`error`]: the [`BoardError`] taxonomy shared across
//!    the engine.
//!
//! # Examples
//!
//! ```
//! use polydoku_core::{Board, Position, SegmentShape};
//!
//! // Derive the segment shape for a 6×6 board: 2×3 blocks.
//! let shape = SegmentShape::for_size(6);
//! assert_eq!((shape.rows(), shape.cols()), (2, 3));
//!
//! // Place a value and check the constraint from another cell.
//! let mut board = Board::empty(6);
//! board.set(Position::new(0, 0), 4);
//! assert!(!board.can_place(Position::new(0, 5), 4, shape)); // same row
//! assert!(board.can_place(Position::new(3, 5), 4, shape));
//! ```

pub mod board;
pub mod error;
pub mod position;
pub mod segment;
pub mod token_grid;

// Re-export commonly used types
pub use self::{
    board::Board,
    error::BoardError,
    position::Position,
    segment::SegmentShape,
    token_grid::{EMPTY_TOKEN, TokenGrid},
};
