//! Command-line front end for the `hyparam` binary

mod args;
mod commands;
mod logging;

pub use args::{parse_args, ChoicesArgs, Cli, Command, InfoArgs, OutputFormat, ValidateArgs};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
