//! Hyperparameter search spaces enumerated as cartesian products.
//!
//! Build a [`ParameterSpace`] from named parameters, each resolved into a
//! finite list of values, then iterate over every combination with
//! [`ParameterSpace::choices`]. The last-added parameter cycles fastest.
//!
//! # Example
//!
//! ```
//! use hyparam::ParameterSpace;
//!
//! let mut space = ParameterSpace::new();
//! space.add_linspace("learning_rate", 0.1, 0.3, 3)?;
//! space.add_switch("use_test_dataset")?;
//! space.add_range("epochs", 10, 30, 10)?;
//! space.add_list("myvar", [1.0, 12.0, 8.0])?;
//!
//! assert_eq!(space.num_choices(), 36);
//! for choice in space.choices() {
//!     let lr = choice.get("learning_rate").and_then(|v| v.as_float());
//!     assert!(lr.is_some());
//! }
//! # Ok::<(), hyparam::Error>(())
//! ```
//!
//! Spaces can also be declared in YAML and loaded with
//! [`ParameterSpace::from_file`]; see [`spec`] for the format.

pub mod cli;
pub mod error;
pub mod space;
pub mod spec;

pub use error::{Error, Result};
pub use space::{sanitize_name, Choice, Choices, ParamValue, ParameterSpace};
pub use spec::ParameterSpec;
