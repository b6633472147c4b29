//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::space::ParameterSpace;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Validating: {}", args.spec.display()),
    );

    let space = ParameterSpace::from_file(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "✓ {} is valid: {} parameters, {} choices",
            args.spec.display(),
            space.len(),
            space.num_choices()
        ),
    );
    Ok(())
}
