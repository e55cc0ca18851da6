//! Validated tile configurations.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Direction, Position};

/// Largest supported side length.
///
/// Tiles are stored as `u8`, so a board may hold at most 256 cells.
pub const MAX_DIMENSION: usize = 16;

/// Errors raised when a tile configuration is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The configuration contains no tiles.
    #[display("board configuration is empty")]
    Empty,
    /// The number of tiles is not a perfect square.
    #[display("board configuration length {len} is not a perfect square")]
    NotSquare {
        /// Number of tiles supplied.
        len: usize,
    },
    /// The side length exceeds [`MAX_DIMENSION`].
    #[display("board dimension {dimension} exceeds the maximum of {}", MAX_DIMENSION)]
    TooLarge {
        /// Requested side length.
        dimension: usize,
    },
    /// A tile value is not in `0..len`.
    #[display("tile {tile} is out of range for a board of {len} cells")]
    TileOutOfRange {
        /// Offending tile value.
        tile: u8,
        /// Number of cells on the board.
        len: usize,
    },
    /// A tile value appears more than once.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// Offending tile value.
        tile: u8,
    },
}

/// Errors raised when parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardError {
    /// A token is neither `.` nor an integer in `0..=255`.
    #[display("invalid tile {token:?}")]
    InvalidTile {
        /// The offending token.
        token: String,
    },
    /// The tiles parsed but do not form a valid board.
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
}

/// An immutable, validated arrangement of tiles on a square grid.
///
/// Tiles are stored in row-major order. Value `0` is the blank; every value in
/// `0..dimension²` appears exactly once.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Board, Direction, Position};
///
/// let board = Board::solved(3)?;
/// assert_eq!(board.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(board.blank_position(), Position::new(0, 0));
///
/// // The blank sits in the top-left corner, so only right and down are legal.
/// let legal: Vec<_> = board.legal_directions().into_iter().collect();
/// assert_eq!(legal, [Direction::Right, Direction::Down]);
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Validates `tiles` and builds a board from them.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the configuration is empty, its length is
    /// not a perfect square, the side length exceeds [`MAX_DIMENSION`], or the
    /// tiles are not a permutation of `0..len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::{Board, BoardError};
    ///
    /// assert!(Board::new(vec![1, 0, 3, 2]).is_ok());
    /// assert_eq!(
    ///     Board::new(vec![0, 1, 2]),
    ///     Err(BoardError::NotSquare { len: 3 })
    /// );
    /// assert_eq!(
    ///     Board::new(vec![0, 1, 1, 2]),
    ///     Err(BoardError::DuplicateTile { tile: 1 })
    /// );
    /// ```
    pub fn new(tiles: Vec<u8>) -> Result<Self, BoardError> {
        let len = tiles.len();
        if len == 0 {
            return Err(BoardError::Empty);
        }
        let dimension = len.isqrt();
        if dimension * dimension != len {
            return Err(BoardError::NotSquare { len });
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::TooLarge { dimension });
        }

        let mut seen = vec![false; len];
        let mut blank = 0;
        for (i, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(BoardError::TileOutOfRange { tile, len })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
            if tile == 0 {
                blank = i;
            }
        }

        Ok(Self {
            dimension,
            tiles,
            blank,
        })
    }

    /// Returns the canonical solved board `[0, 1, ..., dimension² - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Empty`] for a zero dimension and
    /// [`BoardError::TooLarge`] above [`MAX_DIMENSION`].
    pub fn solved(dimension: usize) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        if dimension > MAX_DIMENSION {
            return Err(BoardError::TooLarge { dimension });
        }
        let len = dimension * dimension;
        // len <= 256, so every index fits in a u8
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (0..len).map(|i| i as u8).collect();
        Ok(Self {
            dimension,
            tiles,
            blank: 0,
        })
    }

    /// Returns the side length.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of cells (`dimension²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; a validated board has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the row-major index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the position of the blank.
    #[must_use]
    pub fn blank_position(&self) -> Position {
        Position::from_index(self.blank, self.dimension)
    }

    /// Returns the tile at `pos`, or `None` if `pos` lies outside the grid.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<u8> {
        if pos.row() >= self.dimension || pos.col() >= self.dimension {
            return None;
        }
        Some(self.tiles[pos.index(self.dimension)])
    }

    /// Returns the position holding `tile`, or `None` if it is not on this board.
    #[must_use]
    pub fn position_of(&self, tile: u8) -> Option<Position> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|i| Position::from_index(i, self.dimension))
    }

    /// Returns the index the blank would swap with when moving in `direction`,
    /// or `None` if the blank sits on the blocking edge.
    fn neighbor_index(&self, direction: Direction) -> Option<usize> {
        let p = self.blank;
        let d = self.dimension;
        match direction {
            Direction::Right => (p % d != d - 1).then(|| p + 1),
            Direction::Left => (p % d != 0).then(|| p - 1),
            Direction::Up => (p >= d).then(|| p - d),
            Direction::Down => (p < d * (d - 1)).then(|| p + d),
        }
    }

    /// Returns `true` if the blank can move in `direction`.
    #[must_use]
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.neighbor_index(direction).is_some()
    }

    /// Returns the legal blank movements in expansion order (right, left, up, down).
    #[must_use]
    pub fn legal_directions(&self) -> ArrayVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_slide(dir))
            .collect()
    }

    /// Returns the board after moving the blank one step in `direction`.
    ///
    /// Returns `None` if the move would take the blank off the grid.
    #[must_use]
    pub fn slid(&self, direction: Direction) -> Option<Self> {
        let target = self.neighbor_index(direction)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            dimension: self.dimension,
            tiles,
            blank: target,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        for (row_index, row) in self.tiles.chunks(self.dimension).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses tiles separated by commas and/or whitespace. The blank may be
    /// written as `0` or `.`, so the [`Display`] form parses back.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Board;
    ///
    /// let a: Board = "1,2,0,4,5,3,7,8,6".parse()?;
    /// let b: Board = "1 2 0\n4 5 3\n7 8 6".parse()?;
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string().parse::<Board>()?, a);
    /// # Ok::<(), npuzzle_core::ParseBoardError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                if token == "." {
                    return Ok(0);
                }
                token.parse::<u8>().map_err(|_| ParseBoardError::InvalidTile {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tiles)?)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}
