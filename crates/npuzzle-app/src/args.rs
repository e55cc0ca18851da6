use clap::Parser;
use npuzzle_core::Board;
use npuzzle_generator::{DEFAULT_SHUFFLE_MOVES, ShuffleSeed};

/// Solve sliding-tile puzzles optimally with IDA*.
///
/// Without `--board`, a solved board of the requested size is shuffled by
/// random slides. The seed is printed so the puzzle can be reproduced.
#[derive(Debug, Clone, Parser)]
#[command(name = "npuzzle", author, version, about)]
pub struct Args {
    /// Side length of the shuffled board.
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    pub dimension: usize,

    /// Start board as tiles in row-major order, 0 for the blank
    /// (e.g. "1,2,0,4,5,3,7,8,6").
    #[arg(
        short,
        long,
        value_name = "TILES",
        conflicts_with_all = ["dimension", "shuffles", "seed"],
    )]
    pub board: Option<Board>,

    /// Number of random slides applied to the solved board.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_SHUFFLE_MOVES)]
    pub shuffles: usize,

    /// Seed to reproduce a shuffle. A random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<ShuffleSeed>,

    /// Print every board on the solution path.
    #[arg(short, long)]
    pub play: bool,
}
