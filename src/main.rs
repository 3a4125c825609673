#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{
    console::run_console, http, init_logging, new_game, GameConfig, LogSink, DEFAULT_ARMOR,
    DEFAULT_BIND_ADDR, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sink one hidden ship, from the terminal or over HTTP.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Serve the game over HTTP instead of the console.
    #[arg(long)]
    http: bool,
    /// Hits the ship can take; 0 places a basic ship.
    #[arg(long, default_value_t = DEFAULT_ARMOR)]
    armor: u32,
    /// Edge length of the square board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u64, value_parser = clap::value_parser!(u64).range(1..=MAX_BOARD_SIZE as u64))]
    size: u64,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Address the HTTP server listens on.
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    bind: String,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LogSink::for_mode(cli.http));

    let mut rng = if let Some(s) = cli.seed {
        info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig {
        size: usize::try_from(cli.size)?,
        armor: cli.armor,
    };
    let mut game = new_game(&mut rng, &config).map_err(|e| anyhow::anyhow!(e))?;

    if cli.http {
        http::serve(cli.bind.as_str(), http::shared(game)).await?;
    } else {
        let stdin = std::io::stdin();
        run_console(&mut game, stdin.lock(), std::io::stdout())?;
    }
    Ok(())
}
