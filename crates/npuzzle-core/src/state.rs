//! Search-tree nodes with precomputed costs.

use rand::{Rng, seq::IndexedRandom as _};

use crate::{Board, BoardError, Direction, Position, StateId};

/// Sum of Manhattan distances of every non-blank tile to its home cell.
///
/// The home cell of tile `v` is `(v / dimension, v % dimension)`, i.e. the
/// cell it occupies on [`Board::solved`]. Each slide moves exactly one tile by
/// one cell, so this never overestimates the remaining number of slides.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Board, manhattan_distance};
///
/// assert_eq!(manhattan_distance(&Board::solved(4)?), 0);
///
/// let board: Board = "1,0,2,3,4,5,6,7,8".parse().unwrap();
/// assert_eq!(manhattan_distance(&board), 1);
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
#[must_use]
pub fn manhattan_distance(board: &Board) -> u32 {
    let dimension = board.dimension();
    let total: usize = board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let current = Position::from_index(i, dimension);
            let home = Position::from_index(usize::from(tile), dimension);
            current.manhattan_distance(home)
        })
        .sum();
    // at most 256 tiles, each at most 30 cells away
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// A snapshot of the board reached during a search, together with its costs.
///
/// - `g`: number of slides from the root state
/// - `h`: [`manhattan_distance`] of the board
/// - `f`: `g + h`
///
/// All three are computed once at construction. Transitions never mutate a
/// state; they build new ones. The parent link is a [`StateId`] into the
/// [`StateArena`](crate::StateArena) that owns the parent, so ancestry is a
/// plain chain of handles.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{BoardState, StateArena};
///
/// let mut arena = StateArena::new();
/// let root = arena.push(BoardState::new(vec![1, 2, 0, 4, 5, 3, 7, 8, 6])?);
///
/// for child in arena[root].successors(root) {
///     assert_eq!(child.g(), 1);
///     assert_eq!(child.parent(), Some(root));
/// }
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    parent: Option<StateId>,
    g: u32,
    h: u32,
    f: u32,
}

impl BoardState {
    /// Validates `tiles` and creates a root state from them.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the configuration is malformed, see
    /// [`Board::new`].
    pub fn new(tiles: Vec<u8>) -> Result<Self, BoardError> {
        Ok(Self::root(Board::new(tiles)?))
    }

    /// Creates a root state (no parent, `g = 0`).
    #[must_use]
    pub fn root(board: Board) -> Self {
        Self::with_cost(board, None, 0)
    }

    /// Creates the canonical solved state of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if `dimension` is zero or too large.
    pub fn solved(dimension: usize) -> Result<Self, BoardError> {
        Ok(Self::root(Board::solved(dimension)?))
    }

    fn with_cost(board: Board, parent: Option<StateId>, g: u32) -> Self {
        let h = manhattan_distance(&board);
        Self {
            board,
            parent,
            g,
            h,
            f: g + h,
        }
    }

    /// Returns the tile configuration.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the handle of the state this one was expanded from.
    #[must_use]
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Returns the path cost from the root.
    #[must_use]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Returns the heuristic estimate of the remaining cost.
    #[must_use]
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Returns the estimated total cost `g + h`.
    #[must_use]
    pub fn f(&self) -> u32 {
        self.f
    }

    /// Returns `true` if this state's configuration equals `board`.
    #[must_use]
    pub fn is(&self, board: &Board) -> bool {
        self.board == *board
    }

    /// Returns the successor reached by moving the blank in `direction`,
    /// linked to `this` as parent.
    ///
    /// `this` must be the handle under which `self` is stored. Returns `None`
    /// if the blank is on the blocking edge.
    #[must_use]
    pub fn child(&self, direction: Direction, this: StateId) -> Option<Self> {
        let board = self.board.slid(direction)?;
        Some(Self::with_cost(board, Some(this), self.g + 1))
    }

    /// Returns every successor in expansion order (right, left, up, down),
    /// each linked to `this` as parent.
    ///
    /// `this` must be the handle under which `self` is stored.
    #[must_use]
    pub fn successors(&self, this: StateId) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.child(dir, this))
            .collect()
    }

    /// Returns a successor chosen uniformly among the legal moves.
    ///
    /// The result is a fresh root: it has no parent and `g = 0`. On a
    /// single-cell board there is no legal move and the state is returned
    /// unchanged.
    #[must_use]
    pub fn random_successor<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let legal = self.board.legal_directions();
        legal
            .as_slice()
            .choose(rng)
            .and_then(|&dir| self.board.slid(dir))
            .map_or_else(|| self.clone(), Self::root)
    }

    /// Slides the tile at `pos` into the blank if they are adjacent.
    ///
    /// The result is a fresh root with no parent. If `pos` is not next to the
    /// blank (including `pos` being the blank itself, or lying off the grid)
    /// the state is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::{BoardState, Position};
    ///
    /// let state = BoardState::solved(3)?;
    /// let moved = state.slide_towards(Position::new(0, 1));
    /// assert_eq!(moved.board().tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
    ///
    /// let unchanged = state.slide_towards(Position::new(2, 2));
    /// assert_eq!(unchanged.board(), state.board());
    /// # Ok::<(), npuzzle_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn slide_towards(&self, pos: Position) -> Self {
        Direction::between(self.board.blank_position(), pos)
            .and_then(|dir| self.board.slid(dir))
            .map_or_else(|| self.clone(), Self::root)
    }
}
