//! Parameter name sanitization

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid name regex"));

/// Replace every maximal run of non-word characters with a single `_`.
///
/// Word characters are Unicode alphanumerics and `_`, so `"learning rate"`,
/// `"learning-rate"` and `"learning -- rate"` all become `"learning_rate"`.
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    NON_WORD_RUN.replace_all(name, "_")
}
