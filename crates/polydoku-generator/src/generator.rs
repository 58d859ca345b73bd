//! Board generation via randomized backtracking.

use polydoku_core::{Board, BoardError, SegmentShape, TokenGrid};
use rand::{Rng, seq::SliceRandom as _};

use crate::BoardSeed;

/// A fully generated board, handed to the caller as a complete snapshot.
///
/// Holds both the numeric board and its display form, plus the segment
/// shape that was enforced and the seed that produced it. Feeding the
/// same seed back into [`generate_solved_board_with_seed`] reproduces
/// the board exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedBoard {
    /// The solved numeric board.
    pub board: Board,
    /// The display form of the board; contains no empty markers.
    pub tokens: TokenGrid,
    /// The segment shape the board satisfies.
    pub shape: SegmentShape,
    /// The seed that produced this board.
    pub seed: BoardSeed,
}

/// Builds an empty display grid of size `size`, every cell holding the
/// empty marker token.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSize`] if `size` is zero.
///
/// # Examples
///
/// ```
/// use polydoku_core::EMPTY_TOKEN;
/// use polydoku_generator::generate_empty_board;
///
/// let grid = generate_empty_board(4)?;
/// assert!(grid.rows().iter().flatten().all(|token| token == EMPTY_TOKEN));
/// # Ok::<(), polydoku_core::BoardError>(())
/// ```
pub fn generate_empty_board(size: usize) -> Result<TokenGrid, BoardError> {
    if size == 0 {
        return Err(BoardError::InvalidSize { size });
    }
    Ok(TokenGrid::empty(size))
}

/// Generates a solved board of size `size` with `rows × cols` segments,
/// using a fresh random seed.
///
/// Every row, column, and aligned segment of the result is a permutation
/// of `1..=size`. The seed that produced the board is returned in the
/// snapshot so the board can be regenerated.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSize`] if `size` is zero and
/// [`BoardError::SegmentMismatch`] if `rows * cols != size`, in both
/// cases before any board construction starts.
/// [`BoardError::ConstructionFailure`] is reported if the search space is
/// exhausted, which cannot happen for a shape that actually tiles the
/// board and indicates a defect.
///
/// # Examples
///
/// ```
/// use polydoku_generator::generate_solved_board;
///
/// let solved = generate_solved_board(9, 3, 3)?;
/// assert!(solved.board.is_valid_solution(solved.shape));
/// # Ok::<(), polydoku_core::BoardError>(())
/// ```
pub fn generate_solved_board(size: usize, rows: usize, cols: usize) -> Result<SolvedBoard, BoardError> {
    generate_solved_board_with_seed(size, rows, cols, BoardSeed::random())
}

/// Generates a solved board from an explicit seed.
///
/// Identical to [`generate_solved_board`] except that the caller controls
/// the randomness, making the output fully deterministic.
///
/// # Errors
///
/// Same as [`generate_solved_board`].
///
/// # Examples
///
/// ```
/// use polydoku_generator::{BoardSeed, generate_solved_board_with_seed};
///
/// let seed = BoardSeed::from_phrase("reproducible");
/// let a = generate_solved_board_with_seed(6, 2, 3, seed)?;
/// let b = generate_solved_board_with_seed(6, 2, 3, seed)?;
/// assert_eq!(a.board, b.board);
/// # Ok::<(), polydoku_core::BoardError>(())
/// ```
pub fn generate_solved_board_with_seed(
    size: usize,
    rows: usize,
    cols: usize,
    seed: BoardSeed,
) -> Result<SolvedBoard, BoardError> {
    let shape = SegmentShape::for_board(rows, cols, size)?;
    let mut board = Board::empty(size);
    let mut rng = seed.rng();
    if !fill(&mut board, shape, &mut rng) {
        return Err(BoardError::ConstructionFailure { size });
    }
    Ok(SolvedBoard {
        tokens: TokenGrid::from(&board),
        board,
        shape,
        seed,
    })
}

/// Recursive backtracking step: fills the first empty cell (row-major)
/// with a randomly ordered candidate and recurses.
///
/// Returns `true` once no empty cell remains. On a dead end the cell is
/// reverted and the next candidate tried; `false` propagates the failure
/// one level up.
fn fill<R: Rng + ?Sized>(board: &mut Board, shape: SegmentShape, rng: &mut R) -> bool {
    let Some(pos) = board.first_empty() else {
        return true;
    };
    let mut candidates: Vec<usize> = (1..=board.size()).collect();
    candidates.shuffle(rng);
    for value in candidates {
        if board.can_place(pos, value, shape) {
            board.set(pos, value);
            if fill(board, shape, rng) {
                return true;
            }
            board.clear(pos);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use polydoku_core::Position;

    use super::*;

    #[test]
    fn test_empty_board_rejects_zero() {
        assert_eq!(
            generate_empty_board(0),
            Err(BoardError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn test_solved_board_rejects_bad_arguments() {
        assert_eq!(
            generate_solved_board(9, 2, 4).unwrap_err(),
            BoardError::SegmentMismatch {
                rows: 2,
                cols: 4,
                size: 9
            }
        );
        assert_eq!(
            generate_solved_board(0, 0, 0).unwrap_err(),
            BoardError::InvalidSize { size: 0 }
        );
    }

    #[test]
    fn test_fill_completes_partial_board() {
        let shape = SegmentShape::new(2, 2);
        let mut board = Board::empty(4);
        board.set(Position::new(0, 0), 1);
        board.set(Position::new(3, 3), 2);
        let mut rng = BoardSeed::from_phrase("partial").rng();
        assert!(fill(&mut board, shape, &mut rng));
        assert!(board.is_valid_solution(shape));
        // The pre-filled cells survive untouched.
        assert_eq!(board.get(Position::new(0, 0)), Some(1));
        assert_eq!(board.get(Position::new(3, 3)), Some(2));
    }

    #[test]
    fn test_fill_reports_dead_ends() {
        // Two equal values in one row make the board unfillable.
        let shape = SegmentShape::new(2, 2);
        let mut board = Board::empty(4);
        board.set(Position::new(0, 0), 1);
        board.set(Position::new(0, 2), 1);
        let mut rng = BoardSeed::from_phrase("dead end").rng();
        assert!(!fill(&mut board, shape, &mut rng));
    }

    #[test]
    fn test_degenerate_sizes() {
        let one = generate_solved_board(1, 1, 1).unwrap();
        assert_eq!(one.board.get(Position::new(0, 0)), Some(1));

        // Prime size: segments degenerate to full rows.
        let prime = generate_solved_board(5, 1, 5).unwrap();
        assert!(prime.board.is_valid_solution(SegmentShape::new(1, 5)));
    }
}
