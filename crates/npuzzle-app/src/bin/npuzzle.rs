//! Command-line sliding-puzzle solver.
//!
//! This is the entry point for the `npuzzle` binary.

use std::{io, process};

use clap::Parser as _;
use npuzzle_app::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("starting npuzzle with {args:?}");

    let mut stdout = io::stdout().lock();
    if let Err(err) = npuzzle_app::run(&args, &mut stdout) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
