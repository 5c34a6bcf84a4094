//! Player trait and implementations
//!
//! A frontend drives a [`GameEngine`] through [`Action`]s chosen by a
//! [`Player`]:
//! - CliPlayer: interactive terminal player
//! - RandomPlayer: seeded random legal actions, for simulations and tests
//! - Session: alternates two players over one engine until the game ends

use rand::rngs::SmallRng;

use crate::core::{Cell, GameEngine, GameError, PieceId};

/// One request from a player to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draft a pool piece.
    Pick(PieceId),
    /// Place a piece; `None` uses the piece's current preview orientation.
    Place {
        piece: PieceId,
        anchor: Cell,
        orientation: Option<usize>,
    },
    /// Turn a piece's preview orientation a quarter clockwise.
    Rotate(PieceId),
    /// Mirror a piece's preview orientation.
    Flip(PieceId),
    /// Leave the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next action for the seat that has to act.
    fn next_action(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Action;

    /// Inform the player that its last action was rejected.
    fn handle_rejection(&mut self, _action: Action, _err: GameError) {}
}

pub mod cli;
pub use cli::CliPlayer;

pub mod random;
pub use random::RandomPlayer;

pub mod session;
pub use session::{Session, SessionEnd};
