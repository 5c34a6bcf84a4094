use clap::Parser;
use pentomino_battle::{
    init_logging,
    player::{Session, SessionEnd},
    GameConfig, GameEngine, RandomPlayer, BOARD_HEIGHT, BOARD_WIDTH,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one seeded game between two random movers and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let engine = GameEngine::with_config(GameConfig::new(args.width, args.height))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut p1 = RandomPlayer::new();
    let mut p2 = RandomPlayer::new();

    let mut session = Session::new(engine, &mut p1, &mut p2);
    let end = session.run(&mut rng);
    let engine = session.into_engine();

    let winner = match end {
        SessionEnd::Finished { winner } => winner,
        SessionEnd::Quit { by } => return Err(anyhow::anyhow!("{} stopped before game over", by)),
    };

    let result = json!({
        "seed": args.seed,
        "board": { "width": args.width, "height": args.height },
        "winner": winner,
        "placements": engine.placements(),
        "occupied": engine.board().occupied_count(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
