#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_hotseat::{cli::Console, cli::Settings, init_logging, MatchState};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player hot-seat Battleship on a single terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Nickname for Player 1 (prompted when omitted).
    #[arg(long)]
    player1: Option<String>,
    /// Nickname for Player 2 (prompted when omitted).
    #[arg(long)]
    player2: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Do not wait for Enter or clear the screen between turns.
    #[arg(long)]
    no_pause: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let settings = Settings {
        player1: cli.player1,
        player2: cli.player2,
        pause: !cli.no_pause,
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), rng, settings.pause);
    let game = console.run(&settings)?;

    if let MatchState::Finished { winner } = game.state() {
        let (winner, loser) = (game.player(winner), game.player(winner.other()));
        println!();
        println!("{} won!", winner.nickname());
        println!(
            "{}: {} shots, {} hits. {}: {} shots, {} hits.",
            winner.nickname(),
            winner.board().shots(),
            winner.board().hits(),
            loser.nickname(),
            loser.board().shots(),
            loser.board().hits(),
        );
    }
    Ok(())
}
