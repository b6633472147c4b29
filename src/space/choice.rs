//! Cartesian product enumeration over a parameter space

use std::fmt;
use std::iter::FusedIterator;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::ParamValue;

/// One point of the search space: a value for every parameter.
///
/// Fields keep the insertion order of the space they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Choice {
    fields: IndexMap<String, ParamValue>,
}

impl Choice {
    /// Value chosen for a (sanitized) parameter name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.fields.get(name)
    }

    /// Iterate over `(name, value)` pairs in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Parameter names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Take the underlying ordered map
    pub fn into_inner(self) -> IndexMap<String, ParamValue> {
        self.fields
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("choice(")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

/// Lazy iterator over every [`Choice`] of a parameter space.
///
/// Odometer order: the first parameter changes slowest, the last one
/// cycles fastest. Obtained from [`ParameterSpace::choices`].
///
/// [`ParameterSpace::choices`]: super::ParameterSpace::choices
#[derive(Debug, Clone)]
pub struct Choices<'a> {
    axes: Vec<(&'a str, &'a [ParamValue])>,
    /// Current index into each axis; `None` once exhausted
    cursor: Option<Vec<usize>>,
    remaining: usize,
}

impl<'a> Choices<'a> {
    pub(crate) fn new(params: &'a IndexMap<String, Vec<ParamValue>>) -> Self {
        let axes: Vec<(&str, &[ParamValue])> = params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
            .collect();
        let remaining = product_len(axes.iter().map(|(_, values)| values.len()));
        let cursor = (remaining > 0).then(|| vec![0; axes.len()]);

        Self {
            axes,
            cursor,
            remaining,
        }
    }

    fn current(&self, cursor: &[usize]) -> Choice {
        let fields = self
            .axes
            .iter()
            .zip(cursor)
            .map(|((name, values), &i)| ((*name).to_string(), values[i].clone()))
            .collect();
        Choice { fields }
    }

    /// Step the odometer, last axis first. `None` once every axis wrapped.
    fn advance(&self, mut cursor: Vec<usize>) -> Option<Vec<usize>> {
        for (axis, (_, values)) in self.axes.iter().enumerate().rev() {
            cursor[axis] += 1;
            if cursor[axis] < values.len() {
                return Some(cursor);
            }
            cursor[axis] = 0;
        }
        None
    }
}

impl Iterator for Choices<'_> {
    type Item = Choice;

    fn next(&mut self) -> Option<Choice> {
        let cursor = self.cursor.take()?;
        let choice = self.current(&cursor);
        self.remaining = self.remaining.saturating_sub(1);
        self.cursor = self.advance(cursor);
        Some(choice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Choices<'_> {}

impl FusedIterator for Choices<'_> {}

/// Number of combinations for the given axis sizes (1 for no axes).
pub(crate) fn product_len(sizes: impl Iterator<Item = usize>) -> usize {
    sizes.fold(1usize, usize::saturating_mul)
}
