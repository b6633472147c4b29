//! Declarative YAML spec for parameter spaces
//!
//! A spec document maps each parameter name to its kind and setup:
//!
//! ```yaml
//! learning_rate:
//!   type: linspace
//!   setup: {lower: 0.1, upper: 0.3, num: 3}
//! use_test_dataset:
//!   type: switch
//! epochs:
//!   type: range
//!   setup: {start: 10, stop: 30, step: 10}
//! myvar:
//!   type: list
//!   setup:
//!     values: [1.0, 12.0, 8.0]
//! ```
//!
//! Loading is all-or-nothing: every entry is parsed before any parameter
//! is registered, and any error discards the partially built space.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::space::{ParamValue, ParameterSpace};

/// Parameter kinds accepted in a spec document
pub const KINDS: [&str; 4] = ["switch", "range", "linspace", "list"];

/// One parsed spec entry, validated against its kind's setup keys
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSpec {
    /// `[true, false]`
    Switch,
    /// Integers in `start..stop` by `step`
    Range { start: i64, stop: i64, step: i64 },
    /// `num` samples over `[lower, upper]`
    Linspace { lower: f64, upper: f64, num: usize },
    /// Explicit values
    List { values: Vec<ParamValue> },
}

impl ParameterSpec {
    /// Kind name as written in the `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterSpec::Switch => "switch",
            ParameterSpec::Range { .. } => "range",
            ParameterSpec::Linspace { .. } => "linspace",
            ParameterSpec::List { .. } => "list",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    setup: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RangeSetup {
    start: i64,
    stop: i64,
    step: i64,
}

#[derive(Debug, Deserialize)]
struct LinspaceSetup {
    lower: f64,
    upper: f64,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct ListSetup {
    values: Vec<ParamValue>,
}

/// Parse a spec document into named entries, in document order.
pub fn parse_specs(yaml: &str) -> Result<Vec<(String, ParameterSpec)>> {
    if yaml.trim().is_empty() {
        return Err(Error::document("empty document"));
    }

    let document: Value = serde_yaml::from_str(yaml).map_err(|e| Error::Parse {
        message: e.to_string(),
    })?;

    let Value::Mapping(entries) = document else {
        return Err(Error::document(
            "expected a mapping of parameter names to definitions",
        ));
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(Error::document(format!(
                        "parameter names must be strings, found {other:?}"
                    )))
                }
            };
            let spec = parse_entry(&name, value)?;
            debug!(name = %name, kind = spec.kind(), "parsed spec entry");
            Ok((name, spec))
        })
        .collect()
}

fn parse_entry(name: &str, value: Value) -> Result<ParameterSpec> {
    let raw: RawEntry = serde_yaml::from_value(value)
        .map_err(|e| Error::schema(name, format!("invalid definition: {e}")))?;

    match raw.kind.as_deref() {
        None => Err(Error::schema(name, "missing 'type'")),
        Some("switch") => Ok(ParameterSpec::Switch),
        Some("range") => {
            let setup: RangeSetup = parse_setup(name, "range", raw.setup)?;
            Ok(ParameterSpec::Range {
                start: setup.start,
                stop: setup.stop,
                step: setup.step,
            })
        }
        Some("linspace") => {
            let setup: LinspaceSetup = parse_setup(name, "linspace", raw.setup)?;
            Ok(ParameterSpec::Linspace {
                lower: setup.lower,
                upper: setup.upper,
                num: setup.num,
            })
        }
        Some("list") => {
            let setup: ListSetup = parse_setup(name, "list", raw.setup)?;
            Ok(ParameterSpec::List {
                values: setup.values,
            })
        }
        Some(other) => Err(Error::schema(
            name,
            format!(
                "unknown type '{other}', expected one of: {}",
                KINDS.join(", ")
            ),
        )),
    }
}

fn parse_setup<T: DeserializeOwned>(name: &str, kind: &str, setup: Option<Value>) -> Result<T> {
    let setup = setup.ok_or_else(|| Error::schema(name, format!("missing 'setup' for {kind}")))?;
    serde_yaml::from_value(setup)
        .map_err(|e| Error::schema(name, format!("invalid {kind} setup: {e}")))
}

/// Build a parameter space from YAML text
pub fn load_str(yaml: &str) -> Result<ParameterSpace> {
    let specs = parse_specs(yaml)?;
    ParameterSpace::from_specs(specs)
}

/// Build a parameter space from a YAML file
pub fn load_file(path: &Path) -> Result<ParameterSpace> {
    let yaml = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let space = load_str(&yaml)?;
    info!(
        path = %path.display(),
        parameters = space.len(),
        choices = space.num_choices(),
        "loaded parameter space"
    );
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
learning_rate:
  type: linspace
  setup:
    lower: 0.1
    upper: 0.3
    num: 3
use_test_dataset:
  type: switch
epochs:
  type: range
  setup:
    start: 10
    stop: 30
    step: 10
myvar:
  type: list
  setup:
    values: [1.0, 12.0, 8.0]
"#;

    fn schema_entry(err: &Error) -> Option<&str> {
        match err {
            Error::Schema { entry, .. } => entry.as_deref(),
            other => panic!("Expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sample() {
        let specs = parse_specs(SAMPLE_YAML).expect("valid spec");
        let names: Vec<&str> = specs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["learning_rate", "use_test_dataset", "epochs", "myvar"]
        );
        assert_eq!(
            specs[0].1,
            ParameterSpec::Linspace {
                lower: 0.1,
                upper: 0.3,
                num: 3
            }
        );
        assert_eq!(specs[1].1, ParameterSpec::Switch);
        assert_eq!(
            specs[2].1,
            ParameterSpec::Range {
                start: 10,
                stop: 30,
                step: 10
            }
        );
        assert_eq!(specs[3].1.kind(), "list");
    }

    #[test]
    fn test_load_sample() {
        let space = load_str(SAMPLE_YAML).expect("valid spec");
        assert_eq!(space.len(), 4);
        assert_eq!(space.num_choices(), 36);
    }

    #[test]
    fn test_linspace_accepts_integer_bounds() {
        let specs = parse_specs("y: {type: linspace, setup: {lower: 0, upper: 1, num: 5}}")
            .expect("valid spec");
        assert_eq!(
            specs[0].1,
            ParameterSpec::Linspace {
                lower: 0.0,
                upper: 1.0,
                num: 5
            }
        );
    }

    #[test]
    fn test_switch_ignores_setup() {
        let specs =
            parse_specs("flag: {type: switch, setup: {unused: 1}}").expect("valid spec");
        assert_eq!(specs[0].1, ParameterSpec::Switch);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = parse_specs("lr: {type: grid}").unwrap_err();
        assert_eq!(schema_entry(&err), Some("lr"));
        assert!(err.to_string().contains("unknown type 'grid'"));
    }

    #[test]
    fn test_missing_type_rejected() {
        let err = parse_specs("lr: {setup: {values: [1]}}").unwrap_err();
        assert_eq!(schema_entry(&err), Some("lr"));
        assert!(err.to_string().contains("missing 'type'"));
    }

    #[test]
    fn test_missing_setup_rejected() {
        let err = parse_specs("epochs: {type: range}").unwrap_err();
        assert!(err.to_string().contains("missing 'setup'"));
    }

    #[test]
    fn test_missing_setup_key_rejected() {
        let err = parse_specs("epochs: {type: range, setup: {start: 0, stop: 10}}").unwrap_err();
        assert_eq!(schema_entry(&err), Some("epochs"));
        assert!(err.to_string().contains("step"));

        let err = parse_specs("y: {type: linspace, setup: {lower: 0.0, upper: 1.0}}").unwrap_err();
        assert!(err.to_string().contains("num"));

        let err = parse_specs("xs: {type: list, setup: {}}").unwrap_err();
        assert!(err.to_string().contains("values"));
    }

    #[test]
    fn test_wrong_setup_type_rejected() {
        let err = parse_specs("y: {type: linspace, setup: {lower: 0, upper: 1, num: -2}}")
            .unwrap_err();
        assert_eq!(schema_entry(&err), Some("y"));
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let err = parse_specs("- a\n- b\n").unwrap_err();
        assert_eq!(schema_entry(&err), None);

        let err = parse_specs("").unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_non_mapping_entry_rejected() {
        let err = parse_specs("lr: 0.1").unwrap_err();
        assert_eq!(schema_entry(&err), Some("lr"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_specs("lr: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_late_failure_returns_no_space() {
        let yaml = "a: {type: switch}\nb: {type: bogus}\n";
        assert!(load_str(yaml).is_err());
    }

    #[test]
    fn test_list_accepts_arbitrary_yaml_values() {
        let yaml = "m: {type: list, setup: {values: [{1: a}, 18446744073709551615]}}";
        let space = load_str(yaml).expect("valid spec");
        let values = space.get("m").expect("m");
        assert_eq!(values.len(), 2);
        assert!(matches!(values[0], ParamValue::Yaml(_)));
        assert_eq!(values[1], ParamValue::UInt(u64::MAX));

        let rendered: Vec<String> = space.choices().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["choice(m={1: 'a'})", "choice(m=18446744073709551615)"]
        );
    }

    #[test]
    fn test_add_errors_propagate() {
        let err = load_str("a b: {type: switch}\na-b: {type: switch}\n").unwrap_err();
        assert!(matches!(err, Error::DuplicateName { .. }));

        let err = load_str("xs: {type: list, setup: {values: []}}").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_load_file_missing() {
        let err = load_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
