//! Grid coordinates and blank movements.

use std::fmt::{self, Display};

/// A cell coordinate on a square board.
///
/// Rows grow downwards and columns grow to the right. Board indices are
/// row-major: index `i` on a board of dimension `d` is `(i / d, i % d)`.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Position;
///
/// let pos = Position::from_index(5, 3);
/// assert_eq!(pos, Position::new(1, 2));
/// assert_eq!(pos.index(3), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major board index into a position.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub const fn from_index(index: usize, dimension: usize) -> Self {
        Self {
            row: index / dimension,
            col: index % dimension,
        }
    }

    /// Returns the row-major index of this position on a board of `dimension`.
    #[must_use]
    pub const fn index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the sum of absolute row and column differences.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Position;
    ///
    /// let a = Position::new(0, 0);
    /// let b = Position::new(2, 1);
    /// assert_eq!(a.manhattan_distance(b), 3);
    /// assert_eq!(b.manhattan_distance(a), 3);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if `other` is exactly one grid step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A direction in which the blank moves.
///
/// Moving the blank to the right slides the tile on its right one cell to the
/// left, and so on.
///
/// The declaration order is the expansion order used by the search engine,
/// see [`Direction::ALL`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The blank moves one column to the right.
    #[default]
    Right,
    /// The blank moves one column to the left.
    Left,
    /// The blank moves one row up.
    Up,
    /// The blank moves one row down.
    Down,
}

impl Direction {
    /// All directions in expansion order: right, left, up, down.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Direction;
    ///
    /// for dir in Direction::ALL {
    ///     assert_eq!(dir.opposite().opposite(), dir);
    /// }
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the direction leading from `from` to the adjacent `to`.
    ///
    /// Returns `None` if the positions are not adjacent.
    #[must_use]
    pub const fn between(from: Position, to: Position) -> Option<Self> {
        if !from.is_adjacent(to) {
            return None;
        }
        Some(if to.col > from.col {
            Self::Right
        } else if to.col < from.col {
            Self::Left
        } else if to.row < from.row {
            Self::Up
        } else {
            Self::Down
        })
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Up => "Up",
            Self::Down => "Down",
        };
        f.write_str(s)
    }
}
