//! CLI command implementations

mod choices;
mod info;
mod validate;


use crate::cli::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = cli.log_level();

    match cli.command {
        Command::Choices(args) => choices::run_choices(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
