//! Grid cells, pentomino shape keys and the pure cell-set transforms.
//!
//! All transforms return new cell sets; nothing here mutates in place.

use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use crate::core::common::GameError;
use crate::core::config::CELLS_PER_PIECE;

/// Integer grid coordinate, `x` to the right and `y` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + offset`, or `None` if a coordinate overflows.
    pub fn checked_add(self, offset: Cell) -> Option<Cell> {
        Some(Cell::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// The four edge-sharing neighbours. Coordinates saturate at the `i32`
    /// limits, which are never inside a board.
    pub fn orthogonal_neighbors(self) -> [Cell; 4] {
        [
            Cell::new(self.x.saturating_add(1), self.y),
            Cell::new(self.x.saturating_sub(1), self.y),
            Cell::new(self.x, self.y.saturating_add(1)),
            Cell::new(self.x, self.y.saturating_sub(1)),
        ]
    }

    fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Add for Cell {
    type Output = Cell;
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The cells of one pentomino in one orientation.
pub type Cells = [Cell; CELLS_PER_PIECE];

/// Single-letter name of one of the twelve free pentominoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKey {
    F,
    I,
    L,
    N,
    P,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl ShapeKey {
    /// All keys in catalog order.
    pub const ALL: [ShapeKey; 12] = [
        ShapeKey::F,
        ShapeKey::I,
        ShapeKey::L,
        ShapeKey::N,
        ShapeKey::P,
        ShapeKey::T,
        ShapeKey::U,
        ShapeKey::V,
        ShapeKey::W,
        ShapeKey::X,
        ShapeKey::Y,
        ShapeKey::Z,
    ];

    /// Position of this key in [`ShapeKey::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            ShapeKey::F => 'F',
            ShapeKey::I => 'I',
            ShapeKey::L => 'L',
            ShapeKey::N => 'N',
            ShapeKey::P => 'P',
            ShapeKey::T => 'T',
            ShapeKey::U => 'U',
            ShapeKey::V => 'V',
            ShapeKey::W => 'W',
            ShapeKey::X => 'X',
            ShapeKey::Y => 'Y',
            ShapeKey::Z => 'Z',
        }
    }

    /// Case-insensitive lookup by letter.
    pub fn from_letter(letter: char) -> Option<ShapeKey> {
        let upper = letter.to_ascii_uppercase();
        ShapeKey::ALL.iter().copied().find(|k| k.letter() == upper)
    }
}

impl FromStr for ShapeKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ShapeKey::from_letter(c).ok_or(GameError::ShapeNotFound),
            _ => Err(GameError::ShapeNotFound),
        }
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Translate cells so the minimum x and minimum y are both zero.
pub fn normalize(cells: &Cells) -> Cells {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    cells.map(|c| Cell::new(c.x - min_x, c.y - min_y))
}

/// Quarter turn, `(x, y) -> (-y, x)`, then normalized.
pub fn rotate_cw(cells: &Cells) -> Cells {
    normalize(&cells.map(|c| Cell::new(-c.y, c.x)))
}

/// Horizontal mirror, `(x, y) -> (-x, y)`, then normalized.
pub fn flip_x(cells: &Cells) -> Cells {
    normalize(&cells.map(|c| Cell::new(-c.x, c.y)))
}

pub fn is_normalized(cells: &Cells) -> bool {
    cells.iter().map(|c| c.x).min() == Some(0) && cells.iter().map(|c| c.y).min() == Some(0)
}

/// True when every cell is reachable from the first through edge-sharing
/// steps.
pub fn is_connected(cells: &Cells) -> bool {
    let mut reached = [false; CELLS_PER_PIECE];
    reached[0] = true;
    let mut grew = true;
    while grew {
        grew = false;
        for i in 0..CELLS_PER_PIECE {
            if reached[i] {
                continue;
            }
            if (0..CELLS_PER_PIECE).any(|j| reached[j] && cells[i].is_adjacent(cells[j])) {
                reached[i] = true;
                grew = true;
            }
        }
    }
    reached.iter().all(|r| *r)
}

fn has_duplicates(cells: &Cells) -> bool {
    (0..CELLS_PER_PIECE).any(|i| (i + 1..CELLS_PER_PIECE).any(|j| cells[i] == cells[j]))
}

/// Canonical form of a cell set: the cells sorted by x, then y.
///
/// Two normalized cell sets are the same orientation iff their signatures
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Cells);

impl Signature {
    pub fn of(cells: &Cells) -> Self {
        let mut sorted = *cells;
        sorted.sort_unstable();
        Signature(sorted)
    }

    pub fn cells(&self) -> &Cells {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{},{};", c.x, c.y)?;
        }
        Ok(())
    }
}

/// A named pentomino in one normalized orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    key: ShapeKey,
    cells: Cells,
}

impl Shape {
    /// Build a shape, checking it is 5 distinct, 4-connected, normalized
    /// cells.
    pub fn new(key: ShapeKey, cells: Cells) -> Result<Self, GameError> {
        if has_duplicates(&cells) || !is_connected(&cells) || !is_normalized(&cells) {
            return Err(GameError::InvalidShape);
        }
        Ok(Self { key, cells })
    }

    pub fn key(&self) -> ShapeKey {
        self.key
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn signature(&self) -> Signature {
        Signature::of(&self.cells)
    }

    /// This shape turned a quarter clockwise.
    pub fn rotated_cw(&self) -> Shape {
        Shape {
            key: self.key,
            cells: rotate_cw(&self.cells),
        }
    }

    /// This shape mirrored horizontally.
    pub fn flipped_x(&self) -> Shape {
        Shape {
            key: self.key,
            cells: flip_x(&self.cells),
        }
    }

    /// Same key and same cells up to ordering.
    pub fn same_orientation(&self, other: &Shape) -> bool {
        self.key == other.key && self.signature() == other.signature()
    }
}
