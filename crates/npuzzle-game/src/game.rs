use npuzzle_core::{Board, BoardError, BoardState, Position, SolvabilityError, is_solvable};
use npuzzle_generator::shuffle_from;
use npuzzle_solver::{IdaStarSolver, Solution, SolveError};
use rand::Rng;

/// Errors returned by [`Game`] operations.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The board could not be created.
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
    /// The live board cannot reach the target by sliding tiles.
    #[display("the puzzle is not solvable")]
    Unsolvable,
    /// The solvability check rejected the boards.
    #[display("solvability check failed: {_0}")]
    Solvability(#[from] SolvabilityError),
    /// The solver rejected the boards.
    #[display("solver failed: {_0}")]
    Solve(#[from] SolveError),
}

/// A sliding-puzzle session.
///
/// Tracks the live board, the target it should reach, and the most recent
/// solution computed for the live board. Any change to the live board
/// discards that solution.
#[derive(Debug, Clone)]
pub struct Game {
    current: BoardState,
    target: Board,
    solution: Option<Solution>,
}

impl Game {
    /// Creates a solved game with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if `dimension` is zero or too large.
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        let target = Board::solved(dimension)?;
        Ok(Self {
            current: BoardState::root(target.clone()),
            target,
            solution: None,
        })
    }

    /// Creates a game starting from `board`, aiming for the solved board of
    /// the same size.
    ///
    /// The board may be unsolvable; [`solve`](Self::solve) reports that.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if no solved board of that size exists.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        let target = Board::solved(board.dimension())?;
        Ok(Self {
            current: BoardState::root(board),
            target,
            solution: None,
        })
    }

    /// Returns the live board.
    #[must_use]
    pub fn current(&self) -> &Board {
        self.current.board()
    }

    /// Returns the board the game is solved at.
    #[must_use]
    pub fn target(&self) -> &Board {
        &self.target
    }

    /// Returns `true` if the live board equals the target.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current.is(&self.target)
    }

    /// Slides the tile at `(row, col)` into the blank.
    ///
    /// Returns `true` if a tile moved. Cells that are not next to the blank,
    /// the blank itself, and cells off the grid are ignored.
    pub fn slide_at(&mut self, row: usize, col: usize) -> bool {
        let next = self.current.slide_towards(Position::new(row, col));
        if next.board() == self.current.board() {
            return false;
        }
        self.set_current(next);
        true
    }

    /// Applies `moves` random slides to the live board.
    pub fn shuffle<R>(&mut self, rng: &mut R, moves: usize)
    where
        R: Rng + ?Sized,
    {
        let next = shuffle_from(&self.current, rng, moves);
        self.set_current(next);
    }

    /// Finds an optimal solution for the live board.
    ///
    /// The result is kept until the live board changes or
    /// [`play_solution`](Self::play_solution) takes it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Unsolvable`] if the target cannot be reached.
    pub fn solve(&mut self, solver: &IdaStarSolver) -> Result<&Solution, GameError> {
        if !is_solvable(self.current.board(), &self.target)? {
            return Err(GameError::Unsolvable);
        }
        let solution = solver.solve(self.current.clone(), &self.target)?;
        log::info!(
            "solved in {} moves ({} nodes explored)",
            solution.optimal_move_count(),
            solution.nodes_explored()
        );
        Ok(self.solution.insert(solution))
    }

    /// Returns the solution computed for the live board, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Takes the pending solution for playback and jumps the live board to
    /// the target.
    ///
    /// Returns `None` if no solution is pending.
    pub fn play_solution(&mut self) -> Option<Solution> {
        let solution = self.solution.take()?;
        self.current = BoardState::root(self.target.clone());
        Some(solution)
    }

    fn set_current(&mut self, state: BoardState) {
        self.current = state;
        self.solution = None;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_new_game_is_solved() {
        let game = Game::new(4).unwrap();
        assert!(game.is_solved());
        assert_eq!(game.current(), game.target());
        assert!(game.solution().is_none());
    }

    #[test]
    fn test_new_rejects_bad_dimension() {
        assert!(Game::new(0).unwrap_err().is_board());
    }

    #[test]
    fn test_slide_at_adjacent_cell() {
        let mut game = Game::new(3).unwrap();
        assert!(game.slide_at(1, 0));
        assert_eq!(game.current().tiles(), &[3, 1, 2, 0, 4, 5, 6, 7, 8]);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_slide_at_ignores_other_cells() {
        let mut game = Game::new(3).unwrap();
        assert!(!game.slide_at(0, 0));
        assert!(!game.slide_at(1, 1));
        assert!(!game.slide_at(2, 2));
        assert!(!game.slide_at(5, 0));
        assert!(game.is_solved());
    }

    #[test]
    fn test_solve_and_play() {
        let mut game = Game::new(3).unwrap();
        game.shuffle(&mut Pcg64Mcg::seed_from_u64(3), 12);

        let count = game.solve(&IdaStarSolver::new()).unwrap().optimal_move_count();
        assert!(count <= 12);
        assert!(game.solution().is_some());

        let solution = game.play_solution().unwrap();
        assert_eq!(solution.optimal_move_count(), count);
        assert_eq!(solution.playback().last(), Some(game.target()));
        assert!(game.is_solved());
        assert!(game.play_solution().is_none());
    }

    #[test]
    fn test_slide_discards_solution() {
        let mut game = Game::new(3).unwrap();
        assert!(game.slide_at(0, 1));
        game.solve(&IdaStarSolver::new()).unwrap();
        assert!(game.slide_at(0, 2));
        assert!(game.solution().is_none());
        assert!(game.play_solution().is_none());
    }

    #[test]
    fn test_unsolvable_board() {
        let board: Board = "0 2 1 3 4 5 6 7 8".parse().unwrap();
        let mut game = Game::from_board(board).unwrap();
        assert_eq!(
            game.solve(&IdaStarSolver::new()).unwrap_err(),
            GameError::Unsolvable
        );
        assert!(game.solution().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::Unsolvable.to_string(), "the puzzle is not solvable");
        assert_eq!(
            GameError::from(BoardError::Empty).to_string(),
            format!("invalid board: {}", BoardError::Empty)
        );
    }

    proptest! {
        #[test]
        fn prop_shuffled_game_stays_solvable(moves in 0_usize..100, seed in any::<u64>()) {
            let mut game = Game::new(4).unwrap();
            game.shuffle(&mut Pcg64Mcg::seed_from_u64(seed), moves);
            prop_assert!(is_solvable(game.current(), game.target()).unwrap());
        }
    }
}
