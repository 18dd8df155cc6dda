//! Model errors.
//!
//! Three kinds of failure, all abort the operation that detected them:
//! - [`ModelError::Invariant`]: a node violates a structural rule
//! - [`ModelError::Syntax`]: free-form code text failed the syntax check
//! - [`ModelError::Precondition`]: a public operation got a bad argument

use std::fmt;

use gogen_syntax::SyntaxError;
use thiserror::Error;

/// Location of the offending node, outermost segment first.
///
/// Built while an error propagates: each container prefixes the segment
/// under which it reached the failing child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(segment: impl Into<String>) -> Self {
        FieldPath(vec![segment.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn prefix(&mut self, segment: String) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{path}: {message}")]
    Invariant { path: FieldPath, message: String },

    /// Reported as the checker produced it, without a path.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("invalid argument `{argument}`: {message}")]
    Precondition {
        argument: &'static str,
        message: String,
    },
}

impl ModelError {
    pub fn invariant(field: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Invariant {
            path: FieldPath::new(field),
            message: message.into(),
        }
    }

    pub fn precondition(argument: &'static str, message: impl Into<String>) -> Self {
        ModelError::Precondition {
            argument,
            message: message.into(),
        }
    }

    /// Prefix the path of an invariant violation with `segment`.
    ///
    /// Other kinds pass through untouched.
    #[must_use]
    pub fn within(mut self, segment: impl Into<String>) -> Self {
        if let ModelError::Invariant { path, .. } = &mut self {
            path.prefix(segment.into());
        }
        self
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, ModelError::Invariant { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ModelError::Syntax(_))
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, ModelError::Precondition { .. })
    }
}

pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Path prefixing for results.
pub(crate) trait Within<T> {
    fn within<S: Into<String>>(self, segment: impl FnOnce() -> S) -> Result<T>;
}

impl<T> Within<T> for Result<T> {
    #[inline]
    fn within<S: Into<String>>(self, segment: impl FnOnce() -> S) -> Result<T> {
        self.map_err(|err| err.within(segment()))
    }
}
