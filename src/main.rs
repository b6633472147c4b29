//! hyparam CLI
//!
//! Enumerates a declarative hyperparameter space.
//!
//! # Usage
//!
//! ```bash
//! # Print every combination
//! hyparam choices space.yaml
//!
//! # First 10 combinations as JSON lines
//! hyparam choices space.yaml --format json --limit 10
//!
//! # Show parameters and the number of combinations
//! hyparam info space.yaml
//!
//! # Check a spec file
//! hyparam validate space.yaml
//! ```

use clap::Parser;
use hyparam::cli::{init_tracing, run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
