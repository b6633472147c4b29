//! Hyperparameter search space
//!
//! Each `add_*` call resolves its parameter eagerly into a finite, ordered
//! value set. Enumeration walks the cartesian product of those sets in
//! insertion order.

mod choice;
mod sanitize;
mod value;

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::spec::{self, ParameterSpec};

pub use choice::{Choice, Choices};
pub use sanitize::sanitize_name;
pub use value::ParamValue;

/// Hyperparameter search space
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSpace {
    /// Sanitized name -> value set, in insertion order
    params: IndexMap<String, Vec<ParamValue>>,
}

impl ParameterSpace {
    /// Create an empty search space
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a parameter space from a YAML spec file.
    ///
    /// ```no_run
    /// use hyparam::ParameterSpace;
    ///
    /// let space = ParameterSpace::from_file("config.yaml")?;
    /// for choice in space.choices() {
    ///     println!("{choice}");
    /// }
    /// # Ok::<(), hyparam::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        spec::load_file(path.as_ref())
    }

    /// Load a parameter space from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        spec::load_str(yaml)
    }

    /// Build a space by applying named specs in order
    pub fn from_specs<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ParameterSpec)>,
        S: AsRef<str>,
    {
        let mut space = Self::new();
        for (name, spec) in specs {
            space.add_spec(name.as_ref(), spec)?;
        }
        Ok(space)
    }

    /// Add a parameter described by a [`ParameterSpec`]
    pub fn add_spec(&mut self, name: &str, spec: ParameterSpec) -> Result<()> {
        match spec {
            ParameterSpec::Switch => self.add_switch(name),
            ParameterSpec::Range { start, stop, step } => self.add_range(name, start, stop, step),
            ParameterSpec::Linspace { lower, upper, num } => {
                self.add_linspace(name, lower, upper, num)
            }
            ParameterSpec::List { values } => self.add_list(name, values),
        }
    }

    /// Add switch parameter: `[true, false]`
    pub fn add_switch(&mut self, name: &str) -> Result<()> {
        let key = self.ensure_name(name)?;
        self.insert(key, vec![ParamValue::Bool(true), ParamValue::Bool(false)]);
        Ok(())
    }

    /// Add range parameter: integers from `start` (inclusive) to `stop`
    /// (exclusive) by `step`.
    ///
    /// A step pointing away from `stop` gives an empty value set, which
    /// makes the whole space empty. A zero step is rejected.
    pub fn add_range(&mut self, name: &str, start: i64, stop: i64, step: i64) -> Result<()> {
        let key = self.ensure_name(name)?;
        if step == 0 {
            return Err(Error::Validation {
                name: key,
                message: "range step must not be zero".to_string(),
            });
        }
        self.insert(key, range_values(start, stop, step));
        Ok(())
    }

    /// Add linspace parameter: `num` evenly spaced samples over
    /// `[lower, upper]`, both endpoints included when `num >= 2`.
    pub fn add_linspace(&mut self, name: &str, lower: f64, upper: f64, num: usize) -> Result<()> {
        let key = self.ensure_name(name)?;
        self.insert(key, linspace_values(lower, upper, num));
        Ok(())
    }

    /// Add list parameter: values verbatim, order preserved.
    pub fn add_list<I, V>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        let key = self.ensure_name(name)?;
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::Validation {
                name: key,
                message: "values list must not be empty".to_string(),
            });
        }
        self.insert(key, values);
        Ok(())
    }

    /// Iterate over every combination of parameter values.
    ///
    /// The last-added parameter cycles fastest. Each call starts a fresh
    /// pass over the already materialized value sets.
    pub fn choices(&self) -> Choices<'_> {
        Choices::new(&self.params)
    }

    /// Total number of choices (1 for an empty space)
    pub fn num_choices(&self) -> usize {
        choice::product_len(self.params.values().map(Vec::len))
    }

    /// Get the value set of a parameter by its sanitized name
    pub fn get(&self, name: &str) -> Option<&[ParamValue]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Sanitized parameter names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterate over parameters
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParamValue])> {
        self.params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Check if space is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Sanitize `name` and reject it if the result is already taken.
    fn ensure_name(&self, name: &str) -> Result<String> {
        let sanitized = sanitize_name(name);
        if self.params.contains_key(sanitized.as_ref()) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
                sanitized: sanitized.into_owned(),
            });
        }
        Ok(sanitized.into_owned())
    }

    fn insert(&mut self, key: String, values: Vec<ParamValue>) {
        debug!(name = %key, values = values.len(), "registered parameter");
        self.params.insert(key, values);
    }
}

fn range_values(start: i64, stop: i64, step: i64) -> Vec<ParamValue> {
    let mut values = Vec::new();
    let mut v = start;
    while (step > 0 && v < stop) || (step < 0 && v > stop) {
        values.push(ParamValue::Int(v));
        match v.checked_add(step) {
            Some(next) => v = next,
            None => break,
        }
    }
    values
}

fn linspace_values(lower: f64, upper: f64, num: usize) -> Vec<ParamValue> {
    match num {
        0 => Vec::new(),
        1 => vec![ParamValue::Float(lower)],
        _ => {
            let divisor = (num - 1) as f64;
            (0..num)
                .map(|i| {
                    if i == num - 1 {
                        ParamValue::Float(upper)
                    } else {
                        ParamValue::Float(lower + i as f64 * (upper - lower) / divisor)
                    }
                })
                .collect()
        }
    }
}
