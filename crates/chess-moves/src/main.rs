//! Prints the squares a knight, rook, or queen can reach in one move.
//!
//! ```text
//! chess-moves --piece knight --position g4
//! h6, h2, f6, f2, e5, e3
//! ```

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    match cli::run(&args) {
        Ok(moves) => {
            println!("{moves}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
