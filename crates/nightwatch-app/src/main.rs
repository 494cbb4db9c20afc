//! Night Watch terminal shell.
//!
//! Wires the simulation engine to a fixed-rate loop, keyboard sampling,
//! and a ratatui renderer. The simulation itself lives in nightwatch-sim
//! and knows nothing about any of this.

mod error;
mod game_loop;
mod input;
mod ui;

use std::process::ExitCode;

use clap::Parser;

/// Night Watch — hold the base through ever longer odds.
#[derive(Parser, Debug)]
#[command(name = "nightwatch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (default: derived from the system clock)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    match game_loop::run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nightwatch: {err}");
            ExitCode::FAILURE
        }
    }
}
