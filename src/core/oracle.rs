//! Exhaustive legal-move search, used as the win-condition check.
//!
//! The scan always starts from each piece's canonical catalog shape, never
//! from its current (possibly preview-rotated) orientation.

use alloc::vec::Vec;

use crate::core::board::Board;
use crate::core::catalog::ShapeCatalog;
use crate::core::common::PlayerId;
use crate::core::piece::{Piece, PieceId};
use crate::core::rules::is_legal;
use crate::core::shape::{Cell, ShapeKey};

/// A candidate move: which piece, which orientation of its canonical set,
/// and where its local origin lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub piece: PieceId,
    pub key: ShapeKey,
    pub orientation: usize,
    pub anchor: Cell,
}

/// Pieces `player` owns and has not placed yet.
pub fn remaining_pieces<'a, I>(player: PlayerId, pieces: I) -> impl Iterator<Item = &'a Piece>
where
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .filter(move |p| p.owner() == Some(player) && !p.is_placed())
}

/// Visit every legal placement of one piece, stopping early when `visit`
/// returns `false`. Anchors are scanned row by row, orientations innermost.
/// Returns `false` if the walk was stopped.
fn walk_piece<F>(piece: &Piece, board: &Board, catalog: &ShapeCatalog, visit: &mut F) -> bool
where
    F: FnMut(Placement) -> bool,
{
    let orientations = catalog.orientations(piece.key());
    for anchor in board.cells() {
        for (index, cells) in orientations.iter().enumerate() {
            if is_legal(anchor, cells, board) {
                let keep_going = visit(Placement {
                    piece: piece.id(),
                    key: piece.key(),
                    orientation: index,
                    anchor,
                });
                if !keep_going {
                    return false;
                }
            }
        }
    }
    true
}

/// First legal placement for `player`, in hand order, if any.
pub fn first_legal_placement<'a, I>(
    player: PlayerId,
    board: &Board,
    pieces: I,
    catalog: &ShapeCatalog,
) -> Option<Placement>
where
    I: IntoIterator<Item = &'a Piece>,
{
    let mut found = None;
    for piece in remaining_pieces(player, pieces) {
        let completed = walk_piece(piece, board, catalog, &mut |p| {
            found = Some(p);
            false
        });
        if !completed {
            break;
        }
    }
    found
}

/// True if any remaining piece of `player` fits somewhere on the board in
/// some orientation. An empty set of remaining pieces has no move.
pub fn has_any_legal_move<'a, I>(
    player: PlayerId,
    board: &Board,
    pieces: I,
    catalog: &ShapeCatalog,
) -> bool
where
    I: IntoIterator<Item = &'a Piece>,
{
    first_legal_placement(player, board, pieces, catalog).is_some()
}

/// Every legal placement of every remaining piece of `player`.
pub fn legal_placements<'a, I>(
    player: PlayerId,
    board: &Board,
    pieces: I,
    catalog: &ShapeCatalog,
) -> Vec<Placement>
where
    I: IntoIterator<Item = &'a Piece>,
{
    let mut out = Vec::new();
    for piece in remaining_pieces(player, pieces) {
        walk_piece(piece, board, catalog, &mut |p| {
            out.push(p);
            true
        });
    }
    out
}
