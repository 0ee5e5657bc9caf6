use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

/// Largest supported board dimension; every tile of a 128x128 board fits in a `u16`.
pub const MAX_DIMENSION: usize = 128;

/// A single-cell slide of the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by [`Board::neighbors`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable n-by-n arrangement of sliding tiles.
///
/// Tiles are stored row-major, `0` is the blank. The goal board holds
/// `1..n²` in order with the blank in the bottom-right cell. Hamming and
/// Manhattan distances to the goal are computed once, at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u16>,
    blank: usize,
    hamming: u32,
    manhattan: u32,
}

impl Board {
    /// Builds a board from rows of tiles, rejecting anything that is not a
    /// square permutation of `0..n²`.
    pub fn new(grid: Vec<Vec<u16>>) -> Result<Self, PuzzleError> {
        let size = grid.len();
        check_dimension(size)?;

        let mut tiles = Vec::with_capacity(size * size);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != size {
                return Err(PuzzleError::Ragged {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
            tiles.extend(line);
        }

        Self::from_flat(size, tiles)
    }

    /// The solved board of the given dimension.
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        check_dimension(size)?;
        Ok(Self::with_tiles(size, goal_tiles(size)))
    }

    /// A uniformly shuffled board, re-drawn until it is solvable.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        check_dimension(size)?;
        let mut tiles = goal_tiles(size);

        loop {
            tiles.shuffle(rng);
            let board = Self::with_tiles(size, tiles.clone());
            if board.is_solvable() {
                return Ok(board);
            }
        }
    }

    fn from_flat(size: usize, tiles: Vec<u16>) -> Result<Self, PuzzleError> {
        check_dimension(size)?;
        if tiles.len() != size * size {
            return Err(PuzzleError::TileCount {
                expected: size * size,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange {
                    tile: tile as u64,
                    max: size * size - 1,
                })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile { tile });
            }
            *slot = true;
        }

        Ok(Self::with_tiles(size, tiles))
    }

    // Callers guarantee `tiles` is a permutation of 0..size².
    fn with_tiles(size: usize, tiles: Vec<u16>) -> Self {
        let mut blank = 0;
        let mut hamming = 0;
        let mut manhattan = 0;

        for (idx, &value) in tiles.iter().enumerate() {
            if value == 0 {
                blank = idx;
                continue;
            }
            if value as usize != idx + 1 {
                hamming += 1;
                let (row, col) = (idx / size, idx % size);
                let target_row = (value as usize - 1) / size;
                let target_col = (value as usize - 1) % size;
                manhattan += row.abs_diff(target_row) + col.abs_diff(target_col);
            }
        }

        Self {
            size,
            tiles,
            blank,
            hamming,
            manhattan: manhattan as u32,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Number of tiles out of place.
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// Sum of the Manhattan distances between tiles and their goal cells.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    pub fn tile(&self, row: usize, col: usize) -> u16 {
        self.tiles[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.tiles.chunks(self.size)
    }

    /// The board reached by moving the blank one cell in `dir`, if that
    /// cell exists.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (dx, dy) = dir.as_offset();

        let new_row = row as isize + dx;
        let new_col = col as isize + dy;

        if new_row >= 0 && new_row < self.size as isize && new_col >= 0 && new_col < self.size as isize {
            let target = new_row as usize * self.size + new_col as usize;
            let mut tiles = self.tiles.clone();
            tiles.swap(self.blank, target);
            Some(Self::with_tiles(self.size, tiles))
        } else {
            None
        }
    }

    /// All boards one slide away, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            directions: Direction::ALL.into_iter(),
        }
    }

    /// This board with two adjacent non-blank tiles exchanged, which flips
    /// its permutation parity. The pair is the first two cells of row 0, or
    /// of row 1 when the blank sits in row 0.
    pub fn twin(&self) -> Board {
        let (first, second) = if self.blank < self.size {
            (self.size, self.size + 1)
        } else {
            (0, 1)
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Self::with_tiles(self.size, tiles)
    }

    /// Decides reachability of the goal from the inversion parity.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        let (blank_row, _) = self.blank();

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + blank row index) is odd
            (inversions + blank_row) % 2 == 1
        }
    }
}

fn check_dimension(size: usize) -> Result<(), PuzzleError> {
    match size {
        0 => Err(PuzzleError::Empty),
        1 => Err(PuzzleError::TooSmall { dimension: size }),
        _ if size > MAX_DIMENSION => Err(PuzzleError::TooLarge { dimension: size }),
        _ => Ok(()),
    }
}

fn goal_tiles(size: usize) -> Vec<u16> {
    let last = size * size;
    (1..last).map(|tile| tile as u16).chain(std::iter::once(0)).collect()
}

fn count_inversions(tiles: &[u16]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Lazy iterator over the neighbors of a [`Board`].
pub struct Neighbors<'a> {
    board: &'a Board,
    directions: std::array::IntoIter<Direction, 4>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let board = self.board;
        self.directions.find_map(|dir| board.slide(dir))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len().max(2);

        writeln!(f, "{}", self.size)?;
        for row in self.rows() {
            for &val in row {
                write!(f, "{:>width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text dump produced by `Display`: the dimension followed by
/// the tiles in row-major order, separated by any whitespace.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let size: usize = match tokens.next() {
            None => return Err(PuzzleError::Empty),
            Some(token) => token.parse().map_err(|_| PuzzleError::Parse {
                token: token.to_string(),
            })?,
        };
        check_dimension(size)?;

        let tiles = tokens
            .map(|token| {
                let value: u64 = token.parse().map_err(|_| PuzzleError::Parse {
                    token: token.to_string(),
                })?;
                u16::try_from(value).map_err(|_| PuzzleError::TileOutOfRange {
                    tile: value,
                    max: size * size - 1,
                })
            })
            .collect::<Result<Vec<u16>, PuzzleError>>()?;

        Self::from_flat(size, tiles)
    }
}
