//! Alternating draft of the shared piece pool.

use alloc::vec::Vec;

use crate::core::common::{GameError, PlayerId};
use crate::core::piece::{Piece, PieceId};

/// Result of an accepted pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickOutcome {
    /// Player who made the pick.
    pub picker: PlayerId,
    /// True when this pick distributed the last piece of the pool.
    pub draft_finished: bool,
}

/// Draft turn order and the hands built so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSequencer {
    picker: PlayerId,
    hands: [Vec<PieceId>; 2],
    pool_size: usize,
    finished: bool,
}

impl DraftSequencer {
    /// A fresh draft over a pool of `pool_size` pieces, P1 picking first.
    pub fn new(pool_size: usize) -> Self {
        Self {
            picker: PlayerId::P1,
            hands: [Vec::new(), Vec::new()],
            pool_size,
            finished: pool_size == 0,
        }
    }

    /// Player whose pick is next.
    pub fn current_picker(&self) -> PlayerId {
        self.picker
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pieces drafted by `player`, in pick order.
    pub fn hand(&self, player: PlayerId) -> &[PieceId] {
        &self.hands[player.index()]
    }

    /// Total pieces picked by both players.
    pub fn picked_count(&self) -> usize {
        self.hands.iter().map(Vec::len).sum()
    }

    /// Give `id` to the current picker. Rejections leave everything as is.
    pub fn pick(&mut self, id: PieceId, pieces: &mut [Piece]) -> Result<PickOutcome, GameError> {
        if self.finished {
            return Err(GameError::DraftAlreadyFinished);
        }
        let piece = pieces.get_mut(id).ok_or(GameError::InvalidPieceId)?;
        if piece.owner().is_some() {
            return Err(GameError::PieceAlreadyOwned);
        }

        let picker = self.picker;
        piece.set_owner(picker);
        self.hands[picker.index()].push(id);
        self.picker = picker.other();
        log::debug!("{} picked {}", picker, piece.key());

        if self.picked_count() == self.pool_size {
            self.finished = true;
            log::info!("draft complete");
        }
        Ok(PickOutcome {
            picker,
            draft_finished: self.finished,
        })
    }
}
