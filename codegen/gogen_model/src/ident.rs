//! Identifier grammar and path helpers.

use std::sync::OnceLock;

use regex::Regex;

use crate::{ModelError, Result};

/// Same class as the scanner's identifier token.
const IDENTIFIER: &str = r"^[_\p{L}][_\p{L}\p{Nd}]*$";

static IDENTIFIER_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// A letter or `_`, followed by letters, decimal digits and `_`.
///
/// Letters are Unicode category L and digits category Nd, as in Go.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE
        .get_or_init(|| Regex::new(IDENTIFIER).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(s))
}

/// Final `/`-separated segment of an import path.
pub fn last_path_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(at) => &trimmed[at + 1..],
        None => trimmed,
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ModelError::invariant(field, "is required"));
    }
    Ok(())
}

/// A required identifier.
pub(crate) fn require_identifier(field: &'static str, value: &str) -> Result<()> {
    require(field, value)?;
    optional_identifier(field, value)
}

/// An identifier that may be left empty.
pub(crate) fn optional_identifier(field: &'static str, value: &str) -> Result<()> {
    if !value.is_empty() && !is_identifier(value) {
        return Err(ModelError::invariant(
            field,
            format!("`{value}` is not a valid identifier"),
        ));
    }
    Ok(())
}
