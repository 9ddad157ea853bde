use anyhow::Result;
use clap::Parser;
use hanoi::{
    console::Session,
    core::{Board, GameConfig, DEFAULT_DISKS, DISK_RANGE},
    utils::make_rng,
};
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line Tower of Hanoi game
#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Command-line Tower of Hanoi game")]
#[command(version)]
struct Args {
    /// The number of disks in the tower
    #[arg(short, long, default_value_t = DEFAULT_DISKS,
        value_parser = clap::value_parser!(u8)
            .range(*DISK_RANGE.start() as i64..=*DISK_RANGE.end() as i64))]
    number_of_disks: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr and stay silent unless RUST_LOG asks for them
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = GameConfig::new(args.number_of_disks)?;
    let board = Board::new(&config, &mut make_rng()?);

    let stdin = io::stdin();
    let mut session = Session::new(config, board, stdin.lock(), io::stdout())
        .with_color(io::stdout().is_terminal());
    let outcome = session.run()?;

    tracing::debug!(?outcome, "game over");
    Ok(())
}
