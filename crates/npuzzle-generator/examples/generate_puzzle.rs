//! Example demonstrating seeded puzzle generation.
//!
//! Generates a shuffled board, prints it with its seed, and optionally solves
//! it to report the optimal move count.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a previous puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 12345
//! ```
//!
//! Generate a harder 4x4 puzzle and solve it:
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- --dimension 4 --moves 40 --solve
//! ```

use std::process;

use clap::Parser;
use npuzzle_generator::{DEFAULT_SHUFFLE_MOVES, ShuffleSeed, Shuffler};
use npuzzle_solver::IdaStarSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the board.
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    dimension: usize,

    /// Number of random slides to apply.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_SHUFFLE_MOVES)]
    moves: usize,

    /// Seed to reproduce a puzzle. A random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<ShuffleSeed>,

    /// Solve the generated puzzle and print the optimal move count.
    #[arg(long)]
    solve: bool,
}

fn main() {
    let args = Args::parse();
    let shuffler = match Shuffler::new(args.dimension) {
        Ok(shuffler) => shuffler.with_moves(args.moves),
        Err(err) => {
            eprintln!("Invalid dimension: {err}");
            process::exit(2);
        }
    };

    let puzzle = match args.seed {
        Some(seed) => shuffler.generate_with_seed(seed),
        None => shuffler.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Shuffled ({} slides):", puzzle.moves);
    for line in puzzle.start.board().to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Manhattan distance: {}", puzzle.start.h());

    if args.solve {
        let solution = match IdaStarSolver::new().solve(puzzle.start, &puzzle.target) {
            Ok(solution) => solution,
            Err(err) => {
                eprintln!("Failed to solve: {err}");
                process::exit(1);
            }
        };
        println!("Optimal moves: {}", solution.optimal_move_count());
        println!("Nodes explored: {}", solution.nodes_explored());
    }
}

