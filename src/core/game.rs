use alloc::vec::Vec;

use crate::core::{
    board::{Board, BoardSnapshot},
    catalog::ShapeCatalog,
    common::{GameError, PlayerId},
    config::GameConfig,
    draft::{DraftSequencer, PickOutcome},
    oracle::{self, Placement},
    orientation::Orientations,
    piece::{Piece, PieceId},
    rules,
    shape::{Cell, Cells, ShapeKey},
};

/// Stage of a game. Exactly one holds at any time; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Drafting,
    Placing,
    GameOver { winner: PlayerId },
}

/// A committed placement, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedPiece {
    pub player: PlayerId,
    pub placement: Placement,
    pub cells: Cells,
}

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub placed: PlacedPiece,
    /// Phase after the turn advanced: `Placing` with a new mover, or
    /// `GameOver` when that mover has no legal move.
    pub phase: Phase,
}

/// Rules engine for one in-memory session: catalog, pool, board, draft and
/// turn state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    catalog: ShapeCatalog,
    board: Board,
    pieces: Vec<Piece>,
    draft: DraftSequencer,
    phase: Phase,
    mover: PlayerId,
    history: Vec<PlacedPiece>,
}

impl GameEngine {
    /// New game on the default 10×6 board.
    pub fn new() -> Result<Self, GameError> {
        Self::with_config(GameConfig::default())
    }

    /// New game with the given board size. Fails fast on a malformed
    /// catalog or an unsupported board.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let catalog = ShapeCatalog::standard()?;
        let board = Board::new(config.width, config.height)?;
        let pieces: Vec<Piece> = catalog
            .iter()
            .enumerate()
            .map(|(id, shape)| Piece::new(id, shape))
            .collect();
        let draft = DraftSequencer::new(pieces.len());
        log::info!(
            "new game on {}x{} board with {} pieces",
            config.width,
            config.height,
            pieces.len()
        );
        Ok(Self {
            catalog,
            board,
            pieces,
            draft,
            phase: Phase::Drafting,
            mover: PlayerId::P1,
            history: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only occupancy view for rendering.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// Pool piece for a shape key.
    pub fn piece_by_key(&self, key: ShapeKey) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.key() == key)
    }

    /// Pieces drafted by `player`, in pick order. Placed pieces stay listed.
    pub fn hand(&self, player: PlayerId) -> &[PieceId] {
        self.draft.hand(player)
    }

    /// Owned, unplaced pieces of `player`, in hand order.
    pub fn remaining_pieces(&self, player: PlayerId) -> impl Iterator<Item = &Piece> + '_ {
        oracle::remaining_pieces(player, self.hand_pieces(player))
    }

    fn hand_pieces(&self, player: PlayerId) -> impl Iterator<Item = &Piece> + '_ {
        self.draft
            .hand(player)
            .iter()
            .filter_map(move |id| self.pieces.get(*id))
    }

    /// Committed placements, oldest first.
    pub fn placements(&self) -> &[PlacedPiece] {
        &self.history
    }

    // ---- draft ----

    /// Give a pool piece to the current picker.
    pub fn pick_piece(&mut self, id: PieceId) -> Result<PickOutcome, GameError> {
        if self.phase != Phase::Drafting {
            return Err(GameError::DraftAlreadyFinished);
        }
        let outcome = self.draft.pick(id, &mut self.pieces)?;
        if outcome.draft_finished {
            self.start_placing();
        }
        Ok(outcome)
    }

    pub fn draft_finished(&self) -> bool {
        self.draft.is_finished()
    }

    pub fn current_picker(&self) -> PlayerId {
        self.draft.current_picker()
    }

    fn start_placing(&mut self) {
        self.phase = Phase::Placing;
        self.mover = PlayerId::P1;
        log::info!("placement phase started, {} to move", self.mover);
        self.check_mover_can_move();
    }

    // ---- placement ----

    pub fn current_mover(&self) -> PlayerId {
        self.mover
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Orientation set offered for previews of `key`.
    pub fn legal_orientations(&self, key: ShapeKey) -> &Orientations {
        self.catalog.orientations(key)
    }

    /// [`Self::legal_orientations`] by textual key.
    pub fn legal_orientations_for_name(&self, name: &str) -> Result<&Orientations, GameError> {
        let key = self.catalog.shape_for_name(name)?.key();
        Ok(self.catalog.orientations(key))
    }

    /// Validate a placement by the current mover without applying it.
    pub fn check_placement(
        &self,
        id: PieceId,
        anchor: Cell,
        orientation: usize,
    ) -> Result<(), GameError> {
        self.resolve_placement(id, anchor, orientation).map(|_| ())
    }

    /// An unplaced piece of the current mover during the placement phase.
    fn movable_piece(&self, id: PieceId) -> Result<&Piece, GameError> {
        match self.phase {
            Phase::Drafting => return Err(GameError::WrongPhase),
            Phase::GameOver { .. } => return Err(GameError::GameAlreadyOver),
            Phase::Placing => {}
        }
        let piece = self.pieces.get(id).ok_or(GameError::InvalidPieceId)?;
        if piece.owner() != Some(self.mover) {
            return Err(GameError::NotPieceOwner);
        }
        if piece.is_placed() {
            return Err(GameError::PieceAlreadyPlaced);
        }
        Ok(piece)
    }

    fn resolve_placement(
        &self,
        id: PieceId,
        anchor: Cell,
        orientation: usize,
    ) -> Result<Cells, GameError> {
        let piece = self.movable_piece(id)?;
        let cells = *self
            .catalog
            .orientations(piece.key())
            .get(orientation)
            .ok_or(GameError::InvalidOrientation)?;
        rules::check_placement(anchor, &cells, &self.board)?;
        Ok(cells)
    }

    /// Place a piece of the current mover. On success the board is updated,
    /// the turn passes, and the new mover is checked for a legal move.
    pub fn try_place(
        &mut self,
        id: PieceId,
        anchor: Cell,
        orientation: usize,
    ) -> Result<PlaceOutcome, GameError> {
        let cells = self.resolve_placement(id, anchor, orientation)?;
        let player = self.mover;
        let piece = &mut self.pieces[id];
        rules::commit_placement(anchor, &cells, &mut self.board);
        piece.mark_placed(anchor, cells);

        let placed = PlacedPiece {
            player,
            placement: Placement {
                piece: id,
                key: piece.key(),
                orientation,
                anchor,
            },
            cells: cells.map(|c| anchor + c),
        };
        self.history.push(placed);
        log::debug!("{} placed {} at {}", player, placed.placement.key, anchor);

        self.end_turn();
        Ok(PlaceOutcome {
            placed,
            phase: self.phase,
        })
    }

    /// Place a piece in its current preview orientation.
    pub fn try_place_current(
        &mut self,
        id: PieceId,
        anchor: Cell,
    ) -> Result<PlaceOutcome, GameError> {
        let orientation = self.current_orientation(id)?;
        self.try_place(id, anchor, orientation)
    }

    fn end_turn(&mut self) {
        self.mover = self.mover.other();
        log::debug!("turn passes to {}", self.mover);
        self.check_mover_can_move();
    }

    fn check_mover_can_move(&mut self) {
        if !self.has_any_legal_move(self.mover) {
            let winner = self.mover.other();
            self.phase = Phase::GameOver { winner };
            log::info!("no legal moves for {}, winner: {}", self.mover, winner);
        }
    }

    /// True if `player` can place any remaining piece anywhere.
    pub fn has_any_legal_move(&self, player: PlayerId) -> bool {
        oracle::has_any_legal_move(player, &self.board, self.hand_pieces(player), &self.catalog)
    }

    /// All legal placements available to `player` on the current board.
    pub fn legal_placements(&self, player: PlayerId) -> Vec<Placement> {
        oracle::legal_placements(player, &self.board, self.hand_pieces(player), &self.catalog)
    }

    // ---- preview orientation ----

    /// Index of a piece's current orientation within its orientation set.
    pub fn current_orientation(&self, id: PieceId) -> Result<usize, GameError> {
        let piece = self.pieces.get(id).ok_or(GameError::InvalidPieceId)?;
        self.catalog
            .orientations(piece.key())
            .position(piece.cells())
            .ok_or(GameError::InvalidOrientation)
    }

    /// Rotate the mover's unplaced piece a quarter turn; returns the new
    /// index. Rejected for the same reasons as a placement of that piece.
    pub fn rotate_piece(&mut self, id: PieceId) -> Result<usize, GameError> {
        self.transform_piece(id, Piece::rotate_cw)
    }

    /// Mirror the mover's unplaced piece; returns the new index.
    pub fn flip_piece(&mut self, id: PieceId) -> Result<usize, GameError> {
        self.transform_piece(id, Piece::flip_x)
    }

    fn transform_piece(&mut self, id: PieceId, op: fn(&mut Piece)) -> Result<usize, GameError> {
        self.movable_piece(id)?;
        let piece = self.pieces.get_mut(id).ok_or(GameError::InvalidPieceId)?;
        op(piece);
        self.current_orientation(id)
    }
}
