//! Placement legality: bounds, overlap and the edge-adjacency rule.
//!
//! Interactive checks, committed placements and the legal-move scan all go
//! through [`check_placement`].

use crate::core::board::Board;
use crate::core::common::GameError;
use crate::core::shape::Cell;

/// Validate `cells` translated by `anchor` against the current occupancy.
///
/// Every cell must be inside the board and empty. On an empty board that is
/// enough; otherwise at least one cell must share an edge with an occupied
/// cell. The first failing cell decides the error.
pub fn check_placement(anchor: Cell, cells: &[Cell], board: &Board) -> Result<(), GameError> {
    let first_move = board.occupied_count() == 0;
    let mut touches_existing = false;

    for c in cells {
        let board_cell = match anchor.checked_add(*c) {
            Some(cell) if board.is_inside(cell) => cell,
            _ => return Err(GameError::PlacementOutOfBounds),
        };
        if !board.is_empty(board_cell) {
            return Err(GameError::PlacementOverlap);
        }
        if !first_move && board.has_orthogonal_neighbor_occupied(board_cell) {
            touches_existing = true;
        }
    }

    if first_move || touches_existing {
        Ok(())
    } else {
        Err(GameError::PlacementDisconnected)
    }
}

/// Boolean form of [`check_placement`].
#[inline]
pub fn is_legal(anchor: Cell, cells: &[Cell], board: &Board) -> bool {
    check_placement(anchor, cells, board).is_ok()
}

/// Mark every cell of a placement occupied. Callers validate first.
pub(crate) fn commit_placement(anchor: Cell, cells: &[Cell], board: &mut Board) {
    for c in cells {
        board.set_occupied(anchor + *c, true);
    }
}
