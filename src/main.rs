#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pentomino_battle::{
    init_logging,
    player::{Session, SessionEnd},
    ui, CliPlayer, GameConfig, GameEngine, ShapeKey, BOARD_HEIGHT, BOARD_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game on one terminal, taking turns at the keyboard.
    Play {
        #[arg(long, default_value_t = BOARD_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = BOARD_HEIGHT)]
        height: usize,
    },
    /// Print every orientation of one pentomino.
    Orientations {
        /// Shape letter: F I L N P T U V W X Y Z
        key: String,
    },
    /// Print the twelve canonical pentominoes.
    Catalog,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { width, height } => {
            let engine = GameEngine::with_config(GameConfig::new(width, height))
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("Pentomino Battle on a {}x{} board. Type 'help' for commands.", width, height);

            let mut p1 = CliPlayer::new();
            let mut p2 = CliPlayer::new();
            let mut rng = SmallRng::seed_from_u64(0);
            let mut session = Session::new(engine, &mut p1, &mut p2);
            let end = session.run(&mut rng);

            println!();
            ui::print_board(session.engine());
            ui::print_hands(session.engine());
            match end {
                SessionEnd::Finished { winner } => {
                    println!("{}", ui::render_status(session.engine()));
                    println!("🎉 {} wins!", winner);
                }
                SessionEnd::Quit { by } => println!("{} left the game.", by),
            }
        }
        Commands::Orientations { key } => {
            let key: ShapeKey = key.parse().map_err(|e| anyhow::anyhow!("{}: {}", e, key))?;
            let engine = GameEngine::new().map_err(|e| anyhow::anyhow!(e))?;
            ui::print_orientations(key, engine.legal_orientations(key));
        }
        Commands::Catalog => {
            let engine = GameEngine::new().map_err(|e| anyhow::anyhow!(e))?;
            for shape in engine.catalog().iter() {
                println!("{}:", shape.key());
                print!("{}", ui::render_cells(shape.cells()));
            }
        }
    }
    Ok(())
}
