//! Pieces of the shared pool and their ownership/placement state.

use crate::core::common::PlayerId;
use crate::core::shape::{flip_x, rotate_cw, Cell, Cells, Shape, ShapeKey};

/// Index of a piece in the pool. The pool holds one piece per catalog
/// shape, so this is also the shape's catalog index.
pub type PieceId = usize;

/// Ownership and placement flags of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceState {
    /// Set once at draft pick, never changed afterwards.
    pub owner: Option<PlayerId>,
    /// Flips to `true` on a successful placement, never back.
    pub placed: bool,
}

/// One pentomino of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    key: ShapeKey,
    cells: Cells,
    anchor: Option<Cell>,
    state: PieceState,
}

impl Piece {
    /// An unowned, unplaced piece in the shape's canonical orientation.
    pub fn new(id: PieceId, shape: &Shape) -> Self {
        Self {
            id,
            key: shape.key(),
            cells: *shape.cells(),
            anchor: None,
            state: PieceState::default(),
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn key(&self) -> ShapeKey {
        self.key
    }

    /// Current orientation. For a placed piece this is the committed one.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Board anchor once placed.
    pub fn anchor(&self) -> Option<Cell> {
        self.anchor
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.state.owner
    }

    pub fn is_placed(&self) -> bool {
        self.state.placed
    }

    /// Board cells covered by a placed piece.
    pub fn board_cells(&self) -> Option<Cells> {
        self.anchor.map(|a| self.cells.map(|c| a + c))
    }

    /// Turn the current orientation a quarter clockwise. Placed pieces keep
    /// their committed orientation.
    pub fn rotate_cw(&mut self) {
        if !self.state.placed {
            self.cells = rotate_cw(&self.cells);
        }
    }

    /// Mirror the current orientation. Placed pieces keep their committed
    /// orientation.
    pub fn flip_x(&mut self) {
        if !self.state.placed {
            self.cells = flip_x(&self.cells);
        }
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.state.owner = Some(owner);
        self.state.placed = false;
    }

    pub(crate) fn mark_placed(&mut self, anchor: Cell, cells: Cells) {
        self.cells = cells;
        self.anchor = Some(anchor);
        self.state.placed = true;
    }
}
