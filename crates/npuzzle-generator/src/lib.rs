//! Seeded shuffling of sliding-tile puzzles.
//!
//! Puzzles are produced by a random walk of blank slides starting from the
//! solved board, so every generated start state is solvable. The walk is
//! driven by a PCG generator seeded from a [`ShuffleSeed`], which makes
//! generation reproducible.
//!
//! # Examples
//!
//! ```
//! use npuzzle_generator::{ShuffleSeed, Shuffler};
//!
//! let shuffler = Shuffler::new(3)?.with_moves(30);
//! let a = shuffler.generate_with_seed(ShuffleSeed::new(42));
//! let b = shuffler.generate_with_seed(ShuffleSeed::new(42));
//! assert_eq!(a.start, b.start);
//! assert_eq!(a.seed.to_string(), "42");
//! # Ok::<(), npuzzle_core::BoardError>(())
//! ```

use npuzzle_core::{Board, BoardError, BoardState};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Number of random slides applied by default.
pub const DEFAULT_SHUFFLE_MOVES: usize = 50;

/// Seed for reproducible shuffles.
///
/// Displays and parses as a decimal integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr,
)]
pub struct ShuffleSeed(u64);

impl ShuffleSeed {
    /// Wraps a raw seed value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A shuffled puzzle together with the data needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledPuzzle {
    /// The shuffled start state; it has no parent.
    pub start: BoardState,
    /// The solved board the walk started from.
    pub target: Board,
    /// The seed that produced `start`.
    pub seed: ShuffleSeed,
    /// Number of random slides applied.
    pub moves: usize,
}

/// Generates shuffled puzzles of a fixed dimension.
#[derive(Debug, Clone)]
pub struct Shuffler {
    target: Board,
    moves: usize,
}

impl Shuffler {
    /// Creates a shuffler for boards of the given side length, applying
    /// [`DEFAULT_SHUFFLE_MOVES`] slides.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if `dimension` is zero or too large.
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        Ok(Self {
            target: Board::solved(dimension)?,
            moves: DEFAULT_SHUFFLE_MOVES,
        })
    }

    /// Sets the number of random slides.
    #[must_use]
    pub fn with_moves(mut self, moves: usize) -> Self {
        self.moves = moves;
        self
    }

    /// Returns the solved board shuffles start from.
    #[must_use]
    pub fn target(&self) -> &Board {
        &self.target
    }

    /// Returns the number of random slides applied.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> ShuffledPuzzle {
        self.generate_with_seed(ShuffleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ShuffleSeed) -> ShuffledPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed.value());
        let start = shuffle_from(&BoardState::root(self.target.clone()), &mut rng, self.moves);
        log::debug!("shuffled {} slides with seed {seed}", self.moves);
        ShuffledPuzzle {
            start,
            target: self.target.clone(),
            seed,
            moves: self.moves,
        }
    }
}

/// Applies `moves` uniformly random slides to `state`.
///
/// Every intermediate state is produced by
/// [`BoardState::random_successor`], so the result has no parent.
pub fn shuffle_from<R>(state: &BoardState, rng: &mut R, moves: usize) -> BoardState
where
    R: Rng + ?Sized,
{
    let mut current = state.clone();
    for step in 0..moves {
        current = current.random_successor(rng);
        log::trace!(
            "shuffle step {step}: blank at {}",
            current.board().blank_position()
        );
    }
    current
}

#[cfg(test)]
mod tests {
    use npuzzle_core::is_solvable;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_moves() {
        let shuffler = Shuffler::new(3).unwrap();
        assert_eq!(shuffler.moves(), DEFAULT_SHUFFLE_MOVES);
        assert_eq!(shuffler.target(), &Board::solved(3).unwrap());
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(Shuffler::new(0).unwrap_err(), BoardError::Empty);
    }

    #[test]
    fn test_zero_moves_is_solved() {
        let shuffler = Shuffler::new(4).unwrap().with_moves(0);
        let puzzle = shuffler.generate();
        assert_eq!(puzzle.start.board(), &puzzle.target);
        assert_eq!(puzzle.moves, 0);
    }

    #[test]
    fn test_seed_parse_and_display() {
        let seed: ShuffleSeed = "1234567890".parse().unwrap();
        assert_eq!(seed, ShuffleSeed::new(1_234_567_890));
        assert_eq!(seed.to_string(), "1234567890");
        assert!("not-a-seed".parse::<ShuffleSeed>().is_err());
    }

    #[test]
    fn test_shuffle_from_keeps_no_parent() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let start = BoardState::solved(3).unwrap();
        let shuffled = shuffle_from(&start, &mut rng, 25);
        assert_eq!(shuffled.parent(), None);
        assert_eq!(shuffled.g(), 0);
    }

    proptest! {
        #[test]
        fn prop_generation_is_reproducible_and_solvable(
            dimension in 2_usize..=5,
            moves in 0_usize..100,
            seed in any::<u64>(),
        ) {
            let shuffler = Shuffler::new(dimension).unwrap().with_moves(moves);
            let a = shuffler.generate_with_seed(ShuffleSeed::new(seed));
            let b = shuffler.generate_with_seed(ShuffleSeed::new(seed));
            prop_assert_eq!(&a, &b);
            prop_assert!(is_solvable(a.start.board(), &a.target).unwrap());
        }
    }
}
