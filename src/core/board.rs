//! Shared occupancy grid for placed pentominoes.

use core::fmt;

use crate::core::bitboard::BitBoard;
use crate::core::common::GameError;
use crate::core::config::GameConfig;
use crate::core::shape::Cell;

type BB = BitBoard<u128>;

/// Width × height occupancy grid with a running occupied-cell counter.
///
/// Occupancy only changes through [`Board::set_occupied`], which keeps
/// `occupied_count` equal to the number of set cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    occupied: BB,
    occupied_count: usize,
}

impl Board {
    /// Create an empty board; fails if the dimensions do not fit the grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        GameConfig::new(width, height).validate()?;
        Ok(Board {
            occupied: BB::new(width, height)?,
            occupied_count: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.occupied.width()
    }

    pub fn height(&self) -> usize {
        self.occupied.height()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    #[inline]
    fn position(&self, cell: Cell) -> Option<(usize, usize)> {
        if self.is_inside(cell) {
            Some((cell.x as usize, cell.y as usize))
        } else {
            None
        }
    }

    /// `x` in `[0, width)` and `y` in `[0, height)`.
    #[inline]
    pub fn is_inside(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width()
            && (cell.y as usize) < self.height()
    }

    /// Inside the board and occupied.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        match self.position(cell) {
            Some((x, y)) => self.occupied.get(x, y).unwrap_or(false),
            None => false,
        }
    }

    /// Inside the board and unoccupied. Cells outside are never empty.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.is_inside(cell) && !self.is_occupied(cell)
    }

    /// Set a cell's occupancy. Outside cells and cells already in the target
    /// state are left alone.
    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) {
        let Some((x, y)) = self.position(cell) else {
            return;
        };
        if self.occupied.get(x, y) != Ok(!occupied) {
            return;
        }
        let written = if occupied {
            self.occupied.set(x, y)
        } else {
            self.occupied.clear(x, y)
        };
        match written {
            Ok(()) if occupied => self.occupied_count += 1,
            Ok(()) => self.occupied_count -= 1,
            Err(_) => {}
        }
    }

    /// True if an in-board edge neighbour of `cell` is occupied.
    pub fn has_orthogonal_neighbor_occupied(&self, cell: Cell) -> bool {
        cell.orthogonal_neighbors()
            .iter()
            .any(|n| self.is_occupied(*n))
    }

    /// Every cell of the board, row by row from `y = 0`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width() as i32, self.height() as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }

    /// Read-only copy of the occupancy for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            occupied: self.occupied,
            occupied_count: self.occupied_count,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ {}x{}, occupied_count: {}, occupied: {:?} }}",
            self.width(),
            self.height(),
            self.occupied_count,
            self.occupied
        )
    }
}

/// Immutable view of a board's occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    occupied: BB,
    occupied_count: usize,
}

impl BoardSnapshot {
    pub fn width(&self) -> usize {
        self.occupied.width()
    }

    pub fn height(&self) -> usize {
        self.occupied.height()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self
                .occupied
                .get(cell.x as usize, cell.y as usize)
                .unwrap_or(false)
    }

    /// Occupied cells, row by row from `y = 0`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.occupied
            .iter_set_bits()
            .map(|(x, y)| Cell::new(x as i32, y as i32))
    }
}

/// Rows from the top (`y = height - 1`) down; `#` occupied, `.` empty.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height() as i32).rev() {
            for x in 0..self.width() as i32 {
                let ch = if self.is_occupied(Cell::new(x, y)) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
