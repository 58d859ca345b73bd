//! Randomized board generation for variable-size Sudoku.
//!
//! This crate fills N×N boards with rectangular r×c segments using
//! randomized recursive backtracking: the first empty cell (row-major) is
//! assigned a candidate from a freshly shuffled `1..=N` sequence, the
//! search recurses, and a dead end reverts the cell and tries the next
//! candidate. Shuffling is what makes repeated calls produce different
//! valid boards.
//!
//! Every call is synchronous, stateless, and owns its board; randomness
//! comes from a per-call PCG generator derived from a [`BoardSeed`], so a
//! board can be reproduced exactly by reusing its seed.
//!
//! # Examples
//!
//! ```
//! use polydoku_core::SegmentShape;
//! use polydoku_generator::generate_solved_board;
//!
//! let shape = SegmentShape::for_size(6);
//! let solved = generate_solved_board(6, shape.rows(), shape.cols())?;
//! assert!(solved.board.is_valid_solution(solved.shape));
//! # Ok::<(), polydoku_core::BoardError>(())
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{SolvedBoard, generate_empty_board, generate_solved_board,
        generate_solved_board_with_seed},
    seed::{BoardSeed, ParseSeedError},
};
