//! Package-qualifier substitution in free-form code.
//!
//! An alias counts as a package qualifier when it is followed by optional
//! whitespace and a `.`, and preceded by the start of the text or by one of
//! the boundary characters below. This is a regular-language approximation:
//! the text is never parsed.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Start of text, or a character that cannot be part of an operand name.
const BOUNDARY: &str = r"(^|[ \t\n&;,!~^=+\-*/()\[\]{}])";

/// Compile the qualifier pattern for `alias`.
pub(crate) fn pattern(alias: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{BOUNDARY}({})(\s*\.)", regex::escape(alias)))
}

/// Replace the alias token of every match, keeping boundary, whitespace
/// and the `.` as they were.
pub(crate) fn replace<'t>(pattern: &Regex, text: &'t str, new: &str) -> Cow<'t, str> {
    pattern.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{new}{}", &caps[1], &caps[3])
    })
}

/// Whether `text` uses `alias` as a package qualifier.
pub fn references(text: &str, alias: &str) -> bool {
    !alias.is_empty() && pattern(alias).is_ok_and(|re| re.is_match(text))
}

/// Rewrite every qualifier use of `old` in `text` to `new`.
pub fn rewrite_qualifier(text: &str, old: &str, new: &str) -> String {
    match pattern(old) {
        Ok(re) => replace(&re, text, new).into_owned(),
        Err(_) => text.to_owned(),
    }
}
