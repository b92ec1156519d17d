use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scotland_yard::board::Board;
use scotland_yard::domain::StationId;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the board data directory.
const DATA_DIR_VAR: &str = "SCOTLAND_YARD_DATA";

/// Calculate the possible positions of Mr. X.
///
/// The board is read from the directory in SCOTLAND_YARD_DATA (default: the
/// current directory).
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Station where Mr. X was last seen
    start: StationId,

    /// Tickets used since then, in order (taxi, bus, subway, black, ...)
    tickets: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the answer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data_dir = std::env::var_os(DATA_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let board = Board::load(&data_dir)
        .with_context(|| format!("failed to load board from {}", data_dir.display()))?;

    let positions = board.trace_named([args.start], &args.tickets)?;

    println!("Possible positions for Mr. X:");
    println!("{positions}");
    Ok(())
}
