//! Pentomino Battle rules engine (no_std compatible)
//!
//! This module contains the pure game logic: shape catalog, orientation
//! generation, board occupancy, placement rules, the legal-move oracle and
//! the draft/turn state machine. It depends only on `alloc`, `num-traits`
//! and the `log` facade, so it can be embedded behind any frontend.

pub mod bitboard;
pub mod board;
pub mod catalog;
pub mod common;
pub mod config;
pub mod draft;
pub mod game;
pub mod oracle;
pub mod orientation;
pub mod piece;
pub mod rules;
pub mod shape;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardSnapshot};
pub use catalog::{ShapeCatalog, SHAPE_TABLE};
pub use common::{GameError, PlayerId};
pub use config::*;
pub use draft::{DraftSequencer, PickOutcome};
pub use game::{GameEngine, Phase, PlaceOutcome, PlacedPiece};
pub use oracle::{
    first_legal_placement, has_any_legal_move, legal_placements, remaining_pieces, Placement,
};
pub use orientation::{orientations_of, orientations_of_cells, Orientations};
pub use piece::{Piece, PieceId, PieceState};
pub use rules::{check_placement, is_legal};
pub use shape::{
    flip_x, is_connected, is_normalized, normalize, rotate_cw, Cell, Cells, Shape, ShapeKey,
    Signature,
};
