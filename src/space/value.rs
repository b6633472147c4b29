//! Parameter value type

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single candidate value of a parameter.
///
/// Switches produce `Bool`, ranges produce `Int` and linspaces produce
/// `Float`. Lists accept any variant, including nested sequences and maps.
/// YAML that fits no typed variant, such as a mapping with non-string keys,
/// is kept verbatim in `Yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Map(IndexMap<String, ParamValue>),
    Yaml(serde_yaml::Value),
}

impl ParamValue {
    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            ParamValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Get as float (converts int to float if needed)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::UInt(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => f.write_str("None"),
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::UInt(v) => write!(f, "{v}"),
            ParamValue::Float(v) => fmt_float(*v, f),
            ParamValue::Str(s) => write!(f, "'{s}'"),
            ParamValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            ParamValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': {value}")?;
                }
                f.write_str("}")
            }
            ParamValue::Yaml(value) => fmt_yaml(value, f),
        }
    }
}

/// Python `repr` style: `1.0`, `0.25`, `1e-05`, `1.5e+20`, `inf`, `nan`.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{v:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    } else if v.fract() == 0.0 {
        // Keep a trailing `.0` so floats stay distinguishable from ints
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

fn fmt_yaml(value: &serde_yaml::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use serde_yaml::Value;

    match value {
        Value::Null => f.write_str("None"),
        Value::Bool(true) => f.write_str("True"),
        Value::Bool(false) => f.write_str("False"),
        Value::Number(n) => match (n.is_f64(), n.as_f64()) {
            (true, Some(v)) => fmt_float(v, f),
            _ => write!(f, "{n}"),
        },
        Value::String(s) => write!(f, "'{s}'"),
        Value::Sequence(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt_yaml(item, f)?;
            }
            f.write_str("]")
        }
        Value::Mapping(entries) => {
            f.write_str("{")?;
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt_yaml(key, f)?;
                f.write_str(": ")?;
                fmt_yaml(item, f)?;
            }
            f.write_str("}")
        }
        Value::Tagged(tagged) => fmt_yaml(&tagged.value, f),
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(ParamValue::UInt(v), ParamValue::Int)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(f64::from(v))
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_accessors() {
        let v = ParamValue::Float(0.5);
        assert_eq!(v.as_float(), Some(0.5));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.as_bool(), None);

        let v = ParamValue::Int(42);
        assert_eq!(v.as_float(), Some(42.0));
        assert_eq!(v.as_int(), Some(42));

        let v = ParamValue::from("relu");
        assert_eq!(v.as_str(), Some("relu"));
        assert_eq!(v.as_float(), None);

        assert_eq!(ParamValue::from(true).as_bool(), Some(true));
        assert!(ParamValue::Null.is_null());
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Bool(true).to_string(), "True");
        assert_eq!(ParamValue::Bool(false).to_string(), "False");
        assert_eq!(ParamValue::Int(10).to_string(), "10");
        assert_eq!(ParamValue::Float(1.0).to_string(), "1.0");
        assert_eq!(ParamValue::Float(0.25).to_string(), "0.25");
        assert_eq!(ParamValue::from("adam").to_string(), "'adam'");
        assert_eq!(ParamValue::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(ParamValue::Null.to_string(), "None");
    }

    #[test]
    fn test_param_value_from_yaml() {
        let values: Vec<ParamValue> =
            serde_yaml::from_str("[1, 2.5, true, relu, null, [1, 2], {depth: 3}]")
                .expect("valid yaml");

        assert_eq!(values[0], ParamValue::Int(1));
        assert_eq!(values[1], ParamValue::Float(2.5));
        assert_eq!(values[2], ParamValue::Bool(true));
        assert_eq!(values[3], ParamValue::from("relu"));
        assert_eq!(values[4], ParamValue::Null);
        assert_eq!(values[5], ParamValue::from(vec![1, 2]));
        match &values[6] {
            ParamValue::Map(m) => assert_eq!(m.get("depth"), Some(&ParamValue::Int(3))),
            other => panic!("Expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_float_display_uses_exponent_for_extreme_magnitudes() {
        assert_eq!(ParamValue::Float(1e-5).to_string(), "1e-05");
        assert_eq!(ParamValue::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(ParamValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(ParamValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(ParamValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(ParamValue::Float(1.5e20).to_string(), "1.5e+20");
        assert_eq!(ParamValue::Float(0.0).to_string(), "0.0");
        assert_eq!(ParamValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(ParamValue::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn test_large_unsigned_kept_exact() {
        let values: Vec<ParamValue> =
            serde_yaml::from_str("[18446744073709551615, 3]").expect("valid yaml");
        assert_eq!(values[0], ParamValue::UInt(u64::MAX));
        assert_eq!(values[0].to_string(), "18446744073709551615");
        assert_eq!(values[0].as_int(), None);
        assert_eq!(values[1], ParamValue::Int(3));
        assert_eq!(ParamValue::from(u64::MAX), ParamValue::UInt(u64::MAX));
        assert_eq!(ParamValue::from(7u64), ParamValue::Int(7));
    }

    #[test]
    fn test_non_string_keys_kept_as_yaml() {
        let values: Vec<ParamValue> =
            serde_yaml::from_str("[{1: a}, {true: [x, 2.5]}]").expect("valid yaml");
        assert!(matches!(values[0], ParamValue::Yaml(_)));
        assert_eq!(values[0].to_string(), "{1: 'a'}");
        assert_eq!(values[1].to_string(), "{True: ['x', 2.5]}");

        let yaml = serde_yaml::to_string(&values).expect("serializable");
        let back: Vec<ParamValue> = serde_yaml::from_str(&yaml).expect("valid yaml");
        assert_eq!(back, values);
    }

    #[test]
    fn test_param_value_to_json() {
        let json = serde_json::to_string(&ParamValue::from(vec![
            ParamValue::Int(1),
            ParamValue::Float(0.5),
            ParamValue::Bool(false),
            ParamValue::from("x"),
        ]))
        .expect("serializable");
        assert_eq!(json, r#"[1,0.5,false,"x"]"#);
    }
}
