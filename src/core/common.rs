//! Common types for Pentomino Battle: players and engine errors.

use core::fmt;

use crate::core::bitboard::BitBoardError;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// The opponent of this player.
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Zero-based seat index, usable for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "P1"),
            PlayerId::P2 => write!(f, "P2"),
        }
    }
}

/// Errors returned by engine operations.
///
/// Every rejection leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g. board too large).
    BitBoard(BitBoardError),
    /// No catalog shape has this key.
    ShapeNotFound,
    /// Cell data does not describe a normalized, connected pentomino.
    InvalidShape,
    /// Piece index is outside the pool.
    InvalidPieceId,
    /// Draft pick of a piece that already has an owner.
    PieceAlreadyOwned,
    /// Draft pick after all pieces were distributed.
    DraftAlreadyFinished,
    /// Operation is not available in the current phase.
    WrongPhase,
    /// Placement attempted after the game ended.
    GameAlreadyOver,
    /// Placement of a piece the mover does not own.
    NotPieceOwner,
    /// Placement of a piece that is already on the board.
    PieceAlreadyPlaced,
    /// Orientation index outside the shape's orientation set.
    InvalidOrientation,
    /// A cell of the placement falls outside the board.
    PlacementOutOfBounds,
    /// A cell of the placement is already occupied.
    PlacementOverlap,
    /// No cell of the placement touches an occupied cell orthogonally.
    PlacementDisconnected,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::ShapeNotFound => write!(f, "Shape key not found in catalog"),
            GameError::InvalidShape => {
                write!(f, "Shape must be 5 distinct, connected, normalized cells")
            }
            GameError::InvalidPieceId => write!(f, "Piece id is out of range"),
            GameError::PieceAlreadyOwned => write!(f, "Piece was already picked"),
            GameError::DraftAlreadyFinished => write!(f, "Draft is already finished"),
            GameError::WrongPhase => write!(f, "Action is not allowed in the current phase"),
            GameError::GameAlreadyOver => write!(f, "Game is over"),
            GameError::NotPieceOwner => write!(f, "Piece belongs to the other player"),
            GameError::PieceAlreadyPlaced => write!(f, "Piece is already on the board"),
            GameError::InvalidOrientation => write!(f, "Orientation index is out of range"),
            GameError::PlacementOutOfBounds => write!(f, "Placement is out of bounds"),
            GameError::PlacementOverlap => write!(f, "Placement overlaps an occupied cell"),
            GameError::PlacementDisconnected => {
                write!(f, "Placement must touch an existing piece edge to edge")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
