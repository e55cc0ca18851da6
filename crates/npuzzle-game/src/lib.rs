//! Interactive sliding-puzzle sessions.
//!
//! A [`Game`] owns the live board a player manipulates: sliding tiles next to
//! the blank, shuffling, and asking the solver for an optimal solution that
//! can then be played back.
//!
//! # Examples
//!
//! ```
//! use npuzzle_game::Game;
//! use npuzzle_solver::IdaStarSolver;
//!
//! let mut game = Game::new(3)?;
//! assert!(game.is_solved());
//!
//! // slide the tile right of the blank, then the one below it
//! assert!(game.slide_at(0, 1));
//! assert!(game.slide_at(1, 1));
//! assert!(!game.is_solved());
//!
//! let solution = game.solve(&IdaStarSolver::new())?;
//! assert_eq!(solution.optimal_move_count(), 2);
//! # Ok::<(), npuzzle_game::GameError>(())
//! ```

mod game;

pub use self::game::{Game, GameError};
