use std::io::Cursor;

use pentomino_battle::{
    player::{
        cli::{parse_command, Command},
        Action, Player, Session, SessionEnd,
    },
    Cell, CliPlayer, GameConfig, GameEngine, PlayerId, ShapeKey,
};
use rand::{rngs::SmallRng, SeedableRng};

fn scripted(lines: &str) -> CliPlayer {
    CliPlayer::with_input(Box::new(Cursor::new(lines.to_string())))
}

#[test]
fn test_parse_actions() {
    let engine = GameEngine::new().unwrap();
    assert_eq!(
        parse_command(&engine, "pick f"),
        Ok(Command::Act(Action::Pick(0)))
    );
    assert_eq!(
        parse_command(&engine, "PLACE L 3 4 2"),
        Ok(Command::Act(Action::Place {
            piece: 2,
            anchor: Cell::new(3, 4),
            orientation: Some(2),
        }))
    );
    assert_eq!(
        parse_command(&engine, "place z 0 0"),
        Ok(Command::Act(Action::Place {
            piece: 11,
            anchor: Cell::new(0, 0),
            orientation: None,
        }))
    );
    assert_eq!(parse_command(&engine, "e y"), Ok(Command::Act(Action::Rotate(10))));
    assert_eq!(parse_command(&engine, "flip w"), Ok(Command::Act(Action::Flip(8))));
    assert_eq!(parse_command(&engine, "quit"), Ok(Command::Act(Action::Quit)));
}

#[test]
fn test_parse_queries() {
    let engine = GameEngine::new().unwrap();
    assert_eq!(
        parse_command(&engine, "check i -1 0"),
        Ok(Command::Check {
            piece: 1,
            anchor: Cell::new(-1, 0),
            orientation: None,
        })
    );
    assert_eq!(
        parse_command(&engine, "show x"),
        Ok(Command::Orientations(ShapeKey::X))
    );
    assert_eq!(parse_command(&engine, "board"), Ok(Command::Board));
    assert_eq!(parse_command(&engine, "hands"), Ok(Command::Hands));
    assert_eq!(parse_command(&engine, "pool"), Ok(Command::Pool));
    assert_eq!(parse_command(&engine, "?"), Ok(Command::Help));
}

#[test]
fn test_parse_errors() {
    let engine = GameEngine::new().unwrap();
    assert!(parse_command(&engine, "").is_err());
    assert!(parse_command(&engine, "dance").is_err());
    assert!(parse_command(&engine, "pick").is_err());
    assert!(parse_command(&engine, "pick Q").is_err());
    assert!(parse_command(&engine, "place f 1").is_err());
    assert!(parse_command(&engine, "place f a 1").is_err());
    assert!(parse_command(&engine, "place f 1 1 x").is_err());
    assert!(parse_command(&engine, "pick f i").is_err());
}

#[test]
fn test_cli_player_skips_bad_lines() {
    let engine = GameEngine::new().unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut player = scripted("\nnonsense\nboard\npick t\n");
    assert_eq!(player.next_action(&mut rng, &engine), Action::Pick(5));
    // input exhausted
    assert_eq!(player.next_action(&mut rng, &engine), Action::Quit);
}

#[test]
fn test_hotseat_script_plays_to_the_end() {
    // P1 drafts I, then fills most of a 5x1 strip; P2 cannot answer
    let mut p1 = scripted("pick i\npick l\npick p\npick u\npick w\npick y\nplace i 0 0\n");
    let mut p2 = scripted("pick f\npick n\npick t\npick v\npick x\npick z\n");
    let engine = GameEngine::with_config(GameConfig::new(5, 1)).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    let mut session = Session::new(engine, &mut p1, &mut p2);
    let end = session.run(&mut rng);
    assert_eq!(end, SessionEnd::Finished { winner: PlayerId::P1 });
    assert_eq!(session.accepted_actions(), 13);
    assert_eq!(session.engine().board().occupied_count(), 5);
}

#[test]
fn test_rejected_action_asks_again() {
    let mut p1 = scripted("pick i\n");
    // second pick of I is refused, then P2 quits
    let mut p2 = scripted("pick i\nquit\n");
    let engine = GameEngine::new().unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    let mut session = Session::new(engine, &mut p1, &mut p2);
    let end = session.run(&mut rng);
    assert_eq!(end, SessionEnd::Quit { by: PlayerId::P2 });
    assert_eq!(session.accepted_actions(), 1);
    assert_eq!(session.seat_to_act(), PlayerId::P2);
}
