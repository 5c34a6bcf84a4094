use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{GameEngine, Phase};

use super::{Action, Player};

/// Picks a random pool piece during the draft and a random legal placement
/// afterwards. Drives simulations; it has no strategy.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn next_action(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Action {
        match engine.phase() {
            Phase::Drafting => {
                let pool: Vec<_> = engine
                    .pieces()
                    .iter()
                    .filter(|p| p.owner().is_none())
                    .map(|p| p.id())
                    .collect();
                if pool.is_empty() {
                    return Action::Quit;
                }
                Action::Pick(pool[rng.random_range(0..pool.len())])
            }
            Phase::Placing => {
                let moves = engine.legal_placements(engine.current_mover());
                if moves.is_empty() {
                    return Action::Quit;
                }
                let m = moves[rng.random_range(0..moves.len())];
                Action::Place {
                    piece: m.piece,
                    anchor: m.anchor,
                    orientation: Some(m.orientation),
                }
            }
            Phase::GameOver { .. } => Action::Quit,
        }
    }
}
