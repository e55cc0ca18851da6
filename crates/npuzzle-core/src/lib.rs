//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the immutable building blocks shared by the solver,
//! the shuffler and the interactive game session.
//!
//! # Overview
//!
//! - [`position`]: grid coordinates ([`Position`]) and blank movements ([`Direction`])
//! - [`board`]: a validated tile configuration ([`Board`])
//! - [`state`]: a search-tree node ([`BoardState`]) carrying `g`, `h` and `f` costs
//! - [`arena`]: handle-indexed storage for states and their parent links ([`StateArena`])
//! - [`solvability`]: the permutation-parity reachability check
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::{Board, BoardState, Direction};
//!
//! let board: Board = "1,2,0,4,5,3,7,8,6".parse()?;
//! let state = BoardState::root(board);
//! assert_eq!(state.g(), 0);
//! assert_eq!(state.h(), 10);
//!
//! let next = state.board().slid(Direction::Left).unwrap();
//! assert_eq!(next.tiles(), &[1, 0, 2, 4, 5, 3, 7, 8, 6]);
//! # Ok::<(), npuzzle_core::ParseBoardError>(())
//! ```

pub mod arena;
pub mod board;
pub mod position;
pub mod solvability;
pub mod state;

pub use self::{
    arena::{StateArena, StateId},
    board::{Board, BoardError, MAX_DIMENSION, ParseBoardError},
    position::{Direction, Position},
    solvability::{SolvabilityError, is_solvable},
    state::{BoardState, manhattan_distance},
};
