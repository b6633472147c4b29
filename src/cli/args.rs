//! CLI argument parsing
//!
//! ```bash
//! hyparam choices space.yaml
//! hyparam choices space.yaml --format json --limit 10
//! hyparam info space.yaml
//! hyparam validate space.yaml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::logging::LogLevel;

/// hyparam: enumerate hyperparameter search spaces
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hyparam")]
#[command(version)]
#[command(about = "Enumerate every combination of a declarative hyperparameter space")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the global flags (`--quiet` wins)
    pub fn log_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Quiet
        } else if self.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every choice of the space
    Choices(ChoicesArgs),

    /// Describe the parameters of the space
    Info(InfoArgs),

    /// Check that a spec file loads
    Validate(ValidateArgs),
}

/// Arguments for the choices command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ChoicesArgs {
    /// Path to YAML spec file
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Stop after N choices
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML spec file
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML spec file
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

/// Output format for choices and info
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse command line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
