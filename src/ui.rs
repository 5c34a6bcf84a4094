//! Plain-text rendering of boards, hands and orientation sets.

use std::fmt::Write;
use std::string::String;

use crate::core::{Cell, Cells, GameEngine, Orientations, Phase, PlayerId, ShapeKey};

/// Letter shown for a placed piece: upper case for P1, lower case for P2.
fn piece_glyph(key: ShapeKey, player: PlayerId) -> char {
    match player {
        PlayerId::P1 => key.letter(),
        PlayerId::P2 => key.letter().to_ascii_lowercase(),
    }
}

/// The board with column labels on top and row labels on the left, highest
/// row first.
pub fn render_board(engine: &GameEngine) -> String {
    let snapshot = engine.board_snapshot();
    let (w, h) = (snapshot.width() as i32, snapshot.height() as i32);
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..w {
        let _ = write!(out, "{}", x % 10);
    }
    out.push('\n');
    for y in (0..h).rev() {
        let _ = write!(out, "{:2} ", y);
        for x in 0..w {
            let cell = Cell::new(x, y);
            let glyph = engine
                .placements()
                .iter()
                .find(|p| p.cells.contains(&cell))
                .map(|p| piece_glyph(p.placement.key, p.player))
                .unwrap_or(if snapshot.is_occupied(cell) { '#' } else { '.' });
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// A cell set drawn in its bounding box, highest row first.
pub fn render_cells(cells: &Cells) -> String {
    let w = cells.iter().map(|c| c.x).max().unwrap_or(0) + 1;
    let h = cells.iter().map(|c| c.y).max().unwrap_or(0) + 1;
    let mut out = String::new();
    for y in (0..h).rev() {
        for x in 0..w {
            out.push(if cells.contains(&Cell::new(x, y)) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Every orientation of `key`, numbered by orientation index.
pub fn render_orientations(key: ShapeKey, orientations: &Orientations) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {} orientations", key, orientations.len());
    for (i, cells) in orientations.iter().enumerate() {
        let _ = writeln!(out, "[{}]", i);
        out.push_str(&render_cells(cells));
    }
    out
}

/// Both hands; placed pieces are marked with `*`.
pub fn render_hands(engine: &GameEngine) -> String {
    let mut out = String::new();
    for player in [PlayerId::P1, PlayerId::P2] {
        let _ = write!(out, "{}:", player);
        for id in engine.hand(player) {
            if let Some(piece) = engine.piece(*id) {
                let mark = if piece.is_placed() { "*" } else { "" };
                let _ = write!(out, " {}{}", piece.key(), mark);
            }
        }
        out.push('\n');
    }
    out
}

/// Pool pieces nobody has picked yet.
pub fn render_pool(engine: &GameEngine) -> String {
    let mut out = String::from("Pool:");
    for piece in engine.pieces().iter().filter(|p| p.owner().is_none()) {
        let _ = write!(out, " {}", piece.key());
    }
    out.push('\n');
    out
}

/// One-line summary of whose action is next.
pub fn render_status(engine: &GameEngine) -> String {
    match engine.phase() {
        Phase::Drafting => format!("Draft: {} to pick", engine.current_picker()),
        Phase::Placing => format!("Placement: {} to move", engine.current_mover()),
        Phase::GameOver { winner } => format!(
            "Game over: {} has no legal move. Winner: {}",
            winner.other(),
            winner
        ),
    }
}

pub fn print_board(engine: &GameEngine) {
    print!("{}", render_board(engine));
}

pub fn print_hands(engine: &GameEngine) {
    print!("{}", render_hands(engine));
}

pub fn print_orientations(key: ShapeKey, orientations: &Orientations) {
    print!("{}", render_orientations(key, orientations));
}
