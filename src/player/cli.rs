use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::core::{Cell, GameEngine, GameError, Phase, PieceId, ShapeKey};
use crate::ui;

use super::{Action, Player};

/// A parsed line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the engine.
    Act(Action),
    /// Validate a placement without committing it.
    Check {
        piece: PieceId,
        anchor: Cell,
        orientation: Option<usize>,
    },
    /// Print the orientation set of a shape.
    Orientations(ShapeKey),
    Board,
    Hands,
    Pool,
    Help,
}

fn parse_piece(engine: &GameEngine, word: Option<&str>) -> Result<PieceId, String> {
    let word = word.ok_or("Missing piece letter (e.g. F)")?;
    let key: ShapeKey = word
        .parse()
        .map_err(|_| format!("Unknown piece '{}' - use one of FILNPTUVWXYZ", word))?;
    engine
        .piece_by_key(key)
        .map(|p| p.id())
        .ok_or_else(|| format!("Piece {} is not in this game", key))
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<T, String> {
    let word = word.ok_or_else(|| format!("Missing {}", what))?;
    word.parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number", what, word))
}

fn parse_target<'a, I>(
    engine: &GameEngine,
    words: &mut I,
) -> Result<(PieceId, Cell, Option<usize>), String>
where
    I: Iterator<Item = &'a str>,
{
    let piece = parse_piece(engine, words.next())?;
    let x: i32 = parse_number(words.next(), "x")?;
    let y: i32 = parse_number(words.next(), "y")?;
    let orientation = match words.next() {
        Some(w) => Some(parse_number(Some(w), "orientation")?),
        None => None,
    };
    Ok((piece, Cell::new(x, y), orientation))
}

/// Parse one line of input against the current game.
pub fn parse_command(engine: &GameEngine, line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or("Empty input")?.to_ascii_lowercase();
    let cmd = match verb.as_str() {
        "pick" => Command::Act(Action::Pick(parse_piece(engine, words.next())?)),
        "place" => {
            let (piece, anchor, orientation) = parse_target(engine, &mut words)?;
            Command::Act(Action::Place {
                piece,
                anchor,
                orientation,
            })
        }
        "check" => {
            let (piece, anchor, orientation) = parse_target(engine, &mut words)?;
            Command::Check {
                piece,
                anchor,
                orientation,
            }
        }
        "rotate" | "e" => Command::Act(Action::Rotate(parse_piece(engine, words.next())?)),
        "flip" | "q" => Command::Act(Action::Flip(parse_piece(engine, words.next())?)),
        "show" => {
            let word = words.next().ok_or("Missing piece letter (e.g. F)")?;
            let key: ShapeKey = word
                .parse()
                .map_err(|_| format!("Unknown piece '{}' - use one of FILNPTUVWXYZ", word))?;
            Command::Orientations(key)
        }
        "board" => Command::Board,
        "hands" => Command::Hands,
        "pool" => Command::Pool,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Act(Action::Quit),
        other => return Err(format!("Unknown command '{}' - type 'help'", other)),
    };
    if words.next().is_some() {
        return Err("Too many arguments - type 'help'".to_string());
    }
    Ok(cmd)
}

fn print_help() {
    println!("Commands:");
    println!("  pick <K>                 draft piece K (F I L N P T U V W X Y Z)");
    println!("  place <K> <x> <y> [o]    place K with its origin at (x, y)");
    println!("                           o = orientation index, default: current");
    println!("  check <K> <x> <y> [o]    test a placement without making it");
    println!("  rotate <K> | e <K>       rotate K a quarter turn");
    println!("  flip <K>   | q <K>       mirror K");
    println!("  show <K>                 list the orientations of K");
    println!("  board | hands | pool     show game state");
    println!("  quit                     leave the game");
}

enum Input {
    /// Process stdin; its buffer is shared, so both seats can read it.
    Stdin,
    Reader(Box<dyn BufRead>),
}

/// Interactive player reading commands line by line.
pub struct CliPlayer {
    input: Input,
}

impl CliPlayer {
    /// Read commands from standard input.
    pub fn new() -> Self {
        Self { input: Input::Stdin }
    }

    /// Read commands from any line source.
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self {
            input: Input::Reader(input),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        let read = match &mut self.input {
            Input::Stdin => io::stdin().read_line(&mut line),
            Input::Reader(r) => r.read_line(&mut line),
        };
        match read {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn check(&self, engine: &GameEngine, piece: PieceId, anchor: Cell, orientation: Option<usize>) {
        let result = orientation
            .map(Ok)
            .unwrap_or_else(|| engine.current_orientation(piece))
            .and_then(|o| engine.check_placement(piece, anchor, o));
        match result {
            Ok(()) => println!("✓ legal placement"),
            Err(e) => println!("✗ {}", e),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn next_action(&mut self, _rng: &mut SmallRng, engine: &GameEngine) -> Action {
        println!();
        match engine.phase() {
            Phase::Drafting => print!("{}", ui::render_pool(engine)),
            _ => ui::print_board(engine),
        }
        ui::print_hands(engine);
        println!("{}", ui::render_status(engine));
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let Some(line) = self.read_line() else {
                return Action::Quit;
            };
            if line.is_empty() {
                continue;
            }
            match parse_command(engine, &line) {
                Ok(Command::Act(action)) => return action,
                Ok(Command::Check {
                    piece,
                    anchor,
                    orientation,
                }) => self.check(engine, piece, anchor, orientation),
                Ok(Command::Orientations(key)) => {
                    ui::print_orientations(key, engine.legal_orientations(key))
                }
                Ok(Command::Board) => ui::print_board(engine),
                Ok(Command::Hands) => ui::print_hands(engine),
                Ok(Command::Pool) => print!("{}", ui::render_pool(engine)),
                Ok(Command::Help) => print_help(),
                Err(msg) => println!("✗ {}", msg),
            }
        }
    }

    fn handle_rejection(&mut self, _action: Action, err: GameError) {
        println!("✗ {}", err);
    }
}
