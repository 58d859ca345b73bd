//! Example demonstrating board generation for arbitrary sizes.
//!
//! This example shows how to:
//! - Derive a segment shape for a board size
//! - Generate an empty or solved board
//! - Reproduce a board from its printed seed
//!
//! # Usage
//!
//! Generate a classic 9×9 board:
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Generate a 12×12 board with an explicit 3×4 segment shape:
//!
//! ```sh
//! cargo run --example generate_board -- --size 12 --rows 3 --cols 4
//! ```
//!
//! Reproduce a previous board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-hex-digit-seed>
//! ```
//!
//! Print an empty board instead of solving:
//!
//! ```sh
//! cargo run --example generate_board -- --size 6 --empty
//! ```

use std::process;

use clap::Parser;
use polydoku_core::SegmentShape;
use polydoku_generator::{
    BoardSeed, generate_empty_board, generate_solved_board_with_seed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size N (the board is N×N).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: usize,

    /// Segment rows; requires --cols. Defaults to the derived shape.
    #[arg(long, value_name = "ROWS", requires = "cols")]
    rows: Option<usize>,

    /// Segment columns; requires --rows. Defaults to the derived shape.
    #[arg(long, value_name = "COLS", requires = "rows")]
    cols: Option<usize>,

    /// Seed to reproduce a previous board (64 hexadecimal digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,

    /// Print an empty board instead of a solved one.
    #[arg(long)]
    empty: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.size == 0 {
        eprintln!("--size must be at least 1.");
        process::exit(2);
    }

    let shape = match (args.rows, args.cols) {
        (Some(rows), Some(cols)) => match SegmentShape::for_board(rows, cols, args.size) {
            Ok(shape) => shape,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        _ => SegmentShape::for_size(args.size),
    };
    log::info!("board size {} with {shape} segments", args.size);

    if args.empty {
        match generate_empty_board(args.size) {
            Ok(grid) => println!("{}", grid.render(shape)),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        return;
    }

    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    match generate_solved_board_with_seed(args.size, shape.rows(), shape.cols(), seed) {
        Ok(solved) => {
            println!("Seed:");
            println!("  {}", solved.seed);
            println!();
            println!("Board:");
            for line in solved.tokens.render(solved.shape).lines() {
                println!("  {line}");
            }
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
