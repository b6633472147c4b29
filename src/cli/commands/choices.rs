//! Choices command implementation

use std::io::{self, BufWriter, Write};

use crate::cli::{ChoicesArgs, LogLevel, OutputFormat};
use crate::space::{Choice, ParameterSpace};

/// Write choices to `out` in the requested format.
///
/// Text and JSON write one choice per line as the space is enumerated;
/// YAML writes a single sequence.
pub fn write_choices<W: Write>(
    space: &ParameterSpace,
    format: OutputFormat,
    limit: Option<usize>,
    out: &mut W,
) -> io::Result<()> {
    let choices = space.choices().take(limit.unwrap_or(usize::MAX));

    match format {
        OutputFormat::Text => {
            for choice in choices {
                writeln!(out, "{choice}")?;
            }
        }
        OutputFormat::Json => {
            for choice in choices {
                serde_json::to_writer(&mut *out, &choice)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormat::Yaml => {
            let all: Vec<Choice> = choices.collect();
            serde_yaml::to_writer(&mut *out, &all)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        }
    }
    out.flush()
}

// Space summary goes to stderr through the loader's trace; stdout carries only choices.
pub fn run_choices(args: ChoicesArgs, _level: LogLevel) -> Result<(), String> {
    let space = ParameterSpace::from_file(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_choices(&space, args.format, args.limit, &mut out)
        .map_err(|e| format!("Output error: {e}"))
}
