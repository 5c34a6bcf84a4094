use rand::rngs::SmallRng;

use crate::core::{GameEngine, GameError, Phase, PlayerId};

use super::{Action, Player};

/// How a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The engine reached game over.
    Finished { winner: PlayerId },
    /// A player quit before the game ended.
    Quit { by: PlayerId },
}

/// Two players taking turns on one engine.
pub struct Session<'a> {
    engine: GameEngine,
    players: [&'a mut dyn Player; 2],
    actions: usize,
}

impl<'a> Session<'a> {
    pub fn new(engine: GameEngine, p1: &'a mut dyn Player, p2: &'a mut dyn Player) -> Self {
        Self {
            engine,
            players: [p1, p2],
            actions: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Number of actions the engine accepted.
    pub fn accepted_actions(&self) -> usize {
        self.actions
    }

    /// Seat expected to act next.
    pub fn seat_to_act(&self) -> PlayerId {
        match self.engine.phase() {
            Phase::Drafting => self.engine.current_picker(),
            _ => self.engine.current_mover(),
        }
    }

    /// Apply one action to the engine.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Pick(id) => self.engine.pick_piece(id).map(|_| ()),
            Action::Place {
                piece,
                anchor,
                orientation: Some(o),
            } => self.engine.try_place(piece, anchor, o).map(|_| ()),
            Action::Place {
                piece,
                anchor,
                orientation: None,
            } => self.engine.try_place_current(piece, anchor).map(|_| ()),
            Action::Rotate(id) => self.engine.rotate_piece(id).map(|_| ()),
            Action::Flip(id) => self.engine.flip_piece(id).map(|_| ()),
            Action::Quit => Ok(()),
        }
    }

    /// Run until game over or a player quits.
    pub fn run(&mut self, rng: &mut SmallRng) -> SessionEnd {
        loop {
            if let Some(winner) = self.engine.winner() {
                return SessionEnd::Finished { winner };
            }
            let seat = self.seat_to_act();
            let action = self.players[seat.index()].next_action(rng, &self.engine);
            if action == Action::Quit {
                log::info!("{} quit", seat);
                return SessionEnd::Quit { by: seat };
            }
            match self.apply(action) {
                Ok(()) => self.actions += 1,
                Err(e) => {
                    log::debug!("{} action {:?} rejected: {}", seat, action, e);
                    self.players[seat.index()].handle_rejection(action, e);
                }
            }
        }
    }
}
