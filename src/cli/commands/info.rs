//! Info command implementation

use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::space::{ParamValue, ParameterSpace};

/// Machine-readable summary of a space
#[derive(Debug, Serialize)]
struct SpaceSummary<'a> {
    parameters: IndexMap<&'a str, &'a [ParamValue]>,
    choices: usize,
}

/// Format one parameter line as `name (n values): [v1, v2]`
pub fn format_parameter(name: &str, values: &[ParamValue]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    let noun = if values.len() == 1 { "value" } else { "values" };
    format!(
        "  {name} ({} {noun}): [{}]",
        values.len(),
        rendered.join(", ")
    )
}

pub fn render_info(space: &ParameterSpace, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("Parameters: {}", space.len())];
            lines.extend(
                space
                    .iter()
                    .map(|(name, values)| format_parameter(name, values)),
            );
            lines.push(format!("Choices: {}", space.num_choices()));
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary(space))
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            Ok(json + "\n")
        }
        OutputFormat::Yaml => serde_yaml::to_string(&summary(space))
            .map_err(|e| format!("YAML serialization error: {e}")),
    }
}

fn summary(space: &ParameterSpace) -> SpaceSummary<'_> {
    SpaceSummary {
        parameters: space.iter().collect(),
        choices: space.num_choices(),
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let space = ParameterSpace::from_file(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    if args.format == OutputFormat::Text {
        log(
            level,
            LogLevel::Verbose,
            &format!("Spec: {}", args.spec.display()),
        );
    }
    print!("{}", render_info(&space, args.format)?);
    Ok(())
}
