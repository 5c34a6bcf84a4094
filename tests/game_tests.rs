use pentomino_battle::{
    first_legal_placement, has_any_legal_move, legal_placements, Board, Cell, DraftSequencer,
    GameConfig, GameEngine, GameError, Phase, Piece, PieceId, Placement, PlayerId, ShapeCatalog,
    ShapeKey,
};

const F: PieceId = 0;
const I: PieceId = 1;
const L: PieceId = 2;
const X: PieceId = 9;

/// Draft order that gives P1 the I and L pieces.
const P1_GETS_I_AND_L: [PieceId; 12] = [I, F, L, 3, 4, 5, 6, 7, 8, 9, 10, 11];

fn drafted(width: usize, height: usize, order: &[PieceId]) -> GameEngine {
    let mut engine = GameEngine::with_config(GameConfig::new(width, height)).unwrap();
    for id in order {
        engine.pick_piece(*id).unwrap();
    }
    engine
}

#[test]
fn test_piece_ids_follow_catalog_order() {
    let engine = GameEngine::new().unwrap();
    for (id, key) in ShapeKey::ALL.iter().enumerate() {
        let piece = engine.piece_by_key(*key).unwrap();
        assert_eq!(piece.id(), id);
        assert_eq!(engine.piece(id).unwrap().key(), *key);
    }
    assert!(engine.piece(12).is_none());
}

#[test]
fn test_invalid_board_size_rejected() {
    assert!(matches!(
        GameEngine::with_config(GameConfig::new(0, 6)),
        Err(GameError::BitBoard(_))
    ));
    assert!(matches!(
        GameEngine::with_config(GameConfig::new(20, 20)),
        Err(GameError::BitBoard(_))
    ));
    // width * height overflows usize
    assert!(matches!(
        GameEngine::with_config(GameConfig::new(usize::MAX, 2)),
        Err(GameError::BitBoard(_))
    ));
    assert!(GameConfig::new(2, usize::MAX).validate().is_err());
}

#[test]
fn test_place_during_draft_is_wrong_phase() {
    let mut engine = GameEngine::new().unwrap();
    engine.pick_piece(I).unwrap();
    assert_eq!(
        engine.try_place(I, Cell::new(0, 0), 0).unwrap_err(),
        GameError::WrongPhase
    );
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn test_placement_rejections_leave_state_untouched() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);
    assert_eq!(engine.phase(), Phase::Placing);
    let before = engine.clone();

    assert_eq!(
        engine.try_place(F, Cell::new(0, 0), 0).unwrap_err(),
        GameError::NotPieceOwner
    );
    assert_eq!(
        engine.try_place(42, Cell::new(0, 0), 0).unwrap_err(),
        GameError::InvalidPieceId
    );
    assert_eq!(
        engine.try_place(I, Cell::new(0, 0), 2).unwrap_err(),
        GameError::InvalidOrientation
    );
    assert_eq!(
        engine.try_place(I, Cell::new(6, 0), 0).unwrap_err(),
        GameError::PlacementOutOfBounds
    );

    assert_eq!(engine.current_mover(), before.current_mover());
    assert_eq!(engine.pieces(), before.pieces());
    assert_eq!(engine.board(), before.board());
    assert!(engine.placements().is_empty());
}

#[test]
fn test_i_then_l_through_engine() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);

    let outcome = engine.try_place(I, Cell::new(0, 0), 0).unwrap();
    assert_eq!(outcome.phase, Phase::Placing);
    assert_eq!(outcome.placed.player, PlayerId::P1);
    assert_eq!(
        outcome.placed.cells,
        [0, 1, 2, 3, 4].map(|x| Cell::new(x, 0))
    );
    assert_eq!(engine.board().occupied_count(), 5);
    assert_eq!(engine.current_mover(), PlayerId::P2);

    let piece = engine.piece(I).unwrap();
    assert!(piece.is_placed());
    assert_eq!(piece.anchor(), Some(Cell::new(0, 0)));
    assert_eq!(piece.board_cells(), Some(outcome.placed.cells));

    // not P1's turn any more
    assert_eq!(
        engine.try_place(L, Cell::new(0, 1), 0).unwrap_err(),
        GameError::NotPieceOwner
    );

    // P2 must touch the I
    assert_eq!(
        engine.try_place(X, Cell::new(6, 3), 0).unwrap_err(),
        GameError::PlacementDisconnected
    );
    assert_eq!(
        engine.try_place(F, Cell::new(0, 0), 0).unwrap_err(),
        GameError::PlacementOverlap
    );
    engine.try_place(X, Cell::new(4, 0), 0).unwrap();
    assert_eq!(engine.board().occupied_count(), 10);

    // back to P1: I is gone, L goes next to it
    assert_eq!(
        engine.try_place(I, Cell::new(0, 1), 0).unwrap_err(),
        GameError::PieceAlreadyPlaced
    );
    engine.try_place(L, Cell::new(0, 1), 0).unwrap();
    assert_eq!(engine.board().occupied_count(), 15);

    let history: Vec<_> = engine.placements().iter().map(|p| p.placement.key).collect();
    assert_eq!(history, vec![ShapeKey::I, ShapeKey::X, ShapeKey::L]);
    assert_eq!(engine.remaining_pieces(PlayerId::P1).count(), 4);
    assert_eq!(engine.remaining_pieces(PlayerId::P2).count(), 5);
}

#[test]
fn test_mover_without_move_loses_after_placement() {
    // only I fits a 6x1 strip, and it fits once
    let mut engine = drafted(6, 1, &P1_GETS_I_AND_L);
    assert_eq!(engine.phase(), Phase::Placing);
    assert!(engine.has_any_legal_move(PlayerId::P1));
    assert!(!engine.has_any_legal_move(PlayerId::P2));

    let outcome = engine.try_place(I, Cell::new(1, 0), 0).unwrap();
    assert_eq!(outcome.phase, Phase::GameOver { winner: PlayerId::P1 });
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(PlayerId::P1));

    assert_eq!(
        engine.try_place(L, Cell::new(0, 0), 0).unwrap_err(),
        GameError::GameAlreadyOver
    );
    assert_eq!(
        engine.check_placement(L, Cell::new(0, 0), 0).unwrap_err(),
        GameError::GameAlreadyOver
    );
}

#[test]
fn test_first_mover_without_move_loses_immediately() {
    // P2 drafts I, the only piece that fits
    let order: Vec<PieceId> = (0..12).collect();
    let engine = drafted(5, 1, &order);
    assert_eq!(engine.phase(), Phase::GameOver { winner: PlayerId::P2 });
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn test_tiny_board_ends_at_draft_end() {
    let order: Vec<PieceId> = (0..12).collect();
    let engine = drafted(1, 1, &order);
    assert_eq!(engine.winner(), Some(PlayerId::P2));
}

#[test]
fn test_player_with_nothing_left_has_no_move() {
    let engine = GameEngine::new().unwrap();
    // nothing drafted yet
    assert!(!engine.has_any_legal_move(PlayerId::P1));
    assert!(engine.legal_placements(PlayerId::P2).is_empty());

    let catalog = ShapeCatalog::standard().unwrap();
    let board = Board::new(10, 6).unwrap();
    assert!(!has_any_legal_move(
        PlayerId::P1,
        &board,
        std::iter::empty::<&Piece>(),
        &catalog
    ));
}

#[test]
fn test_hostile_board_blocks_everything() {
    let catalog = ShapeCatalog::standard().unwrap();
    let mut pieces: Vec<Piece> = catalog
        .iter()
        .enumerate()
        .map(|(id, s)| Piece::new(id, s))
        .collect();
    let mut draft = DraftSequencer::new(pieces.len());
    for id in 0..pieces.len() {
        draft.pick(id, &mut pieces).unwrap();
    }

    // checkerboard: every empty cell is walled in
    let mut board = Board::new(10, 6).unwrap();
    for cell in board.cells().collect::<Vec<_>>() {
        if (cell.x + cell.y) % 2 == 0 {
            board.set_occupied(cell, true);
        }
    }
    assert_eq!(board.occupied_count(), 30);

    for player in [PlayerId::P1, PlayerId::P2] {
        assert!(!has_any_legal_move(player, &board, &pieces, &catalog));
        assert!(first_legal_placement(player, &board, &pieces, &catalog).is_none());
        assert!(legal_placements(player, &board, &pieces, &catalog).is_empty());
    }
}

#[test]
fn test_oracle_scan_order_and_count() {
    let catalog = ShapeCatalog::standard().unwrap();
    let mut pieces: Vec<Piece> = catalog
        .iter()
        .enumerate()
        .map(|(id, s)| Piece::new(id, s))
        .collect();
    let mut draft = DraftSequencer::new(pieces.len());
    draft.pick(I, &mut pieces).unwrap();
    let board = Board::new(10, 6).unwrap();

    assert_eq!(
        first_legal_placement(PlayerId::P1, &board, &pieces, &catalog),
        Some(Placement {
            piece: I,
            key: ShapeKey::I,
            orientation: 0,
            anchor: Cell::new(0, 0),
        })
    );
    // 6 columns x 6 rows lying down, 10 columns x 2 rows standing up
    assert_eq!(legal_placements(PlayerId::P1, &board, &pieces, &catalog).len(), 56);
    assert!(!has_any_legal_move(PlayerId::P2, &board, &pieces, &catalog));
}

#[test]
fn test_oracle_ignores_preview_orientation() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);
    let before = engine.legal_placements(PlayerId::P1);
    engine.rotate_piece(L).unwrap();
    engine.flip_piece(L).unwrap();
    assert_eq!(engine.legal_placements(PlayerId::P1), before);
}

#[test]
fn test_rotate_and_flip_preview() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);

    assert_eq!(engine.current_orientation(I), Ok(0));
    assert_eq!(engine.rotate_piece(I), Ok(1));
    assert_eq!(engine.rotate_piece(I), Ok(0));
    // a straight line is its own mirror
    assert_eq!(engine.flip_piece(I), Ok(0));

    assert_eq!(engine.flip_piece(L), Ok(4));
    assert_eq!(engine.flip_piece(L), Ok(0));
    for expected in [1, 2, 3, 0] {
        assert_eq!(engine.rotate_piece(L), Ok(expected));
    }
    assert_eq!(engine.rotate_piece(99), Err(GameError::InvalidPieceId));
}

#[test]
fn test_place_in_preview_orientation() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);
    engine.rotate_piece(I).unwrap();

    let outcome = engine.try_place_current(I, Cell::new(0, 0)).unwrap();
    assert_eq!(outcome.placed.placement.orientation, 1);
    assert_eq!(outcome.placed.cells, [0, 1, 2, 3, 4].map(|y| Cell::new(0, y)));

    // P2 answers next to the standing I
    engine.try_place(X, Cell::new(1, 0), 0).unwrap();
    assert_eq!(engine.current_mover(), PlayerId::P1);

    // committed orientation is frozen
    assert_eq!(engine.rotate_piece(I), Err(GameError::PieceAlreadyPlaced));
    assert_eq!(engine.flip_piece(I), Err(GameError::PieceAlreadyPlaced));
    assert_eq!(engine.current_orientation(I), Ok(1));
}

#[test]
fn test_preview_limited_to_movers_own_pieces() {
    let mut engine = GameEngine::new().unwrap();
    assert_eq!(engine.rotate_piece(I), Err(GameError::WrongPhase));
    for id in P1_GETS_I_AND_L {
        engine.pick_piece(id).unwrap();
    }

    // F belongs to P2 while P1 is to move
    assert_eq!(engine.rotate_piece(F), Err(GameError::NotPieceOwner));
    assert_eq!(engine.flip_piece(F), Err(GameError::NotPieceOwner));
    assert_eq!(engine.current_orientation(F), Ok(0));

    let mut finished = drafted(6, 1, &P1_GETS_I_AND_L);
    finished.try_place(I, Cell::new(0, 0), 0).unwrap();
    assert!(finished.is_game_over());
    assert_eq!(finished.rotate_piece(L), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_far_away_anchor_is_out_of_bounds() {
    let mut engine = drafted(10, 6, &P1_GETS_I_AND_L);
    let before = engine.clone();
    for anchor in [
        Cell::new(0, i32::MAX),
        Cell::new(i32::MAX, 0),
        Cell::new(i32::MAX, i32::MAX),
        Cell::new(i32::MIN, 0),
    ] {
        for orientation in 0..8 {
            assert_eq!(
                engine.try_place(L, anchor, orientation).unwrap_err(),
                GameError::PlacementOutOfBounds,
                "anchor {} orientation {}",
                anchor,
                orientation
            );
        }
    }
    assert_eq!(engine.board(), before.board());
    assert_eq!(engine.pieces(), before.pieces());
    assert_eq!(engine.current_mover(), PlayerId::P1);
}

#[test]
fn test_check_placement_is_read_only() {
    let engine = drafted(10, 6, &P1_GETS_I_AND_L);
    assert_eq!(engine.check_placement(I, Cell::new(0, 0), 0), Ok(()));
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.current_mover(), PlayerId::P1);
}

#[test]
fn test_legal_orientations_lookup() {
    let engine = GameEngine::new().unwrap();
    assert_eq!(engine.legal_orientations(ShapeKey::X).len(), 1);
    assert_eq!(engine.legal_orientations_for_name("n").unwrap().len(), 8);
    assert_eq!(
        engine.legal_orientations_for_name("?").unwrap_err(),
        GameError::ShapeNotFound
    );
}
