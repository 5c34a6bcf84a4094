//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    Cell, GameEngine, GameError, Phase, PieceId, Placement, PlayerId, ShapeKey,
};

#[cfg(feature = "std")]
pub use crate::player::{CliPlayer, Player, RandomPlayer};

#[cfg(feature = "std")]
pub use crate::ui::{print_board, print_hands, print_orientations};
