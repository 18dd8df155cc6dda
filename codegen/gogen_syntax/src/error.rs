//! Syntax errors reported by the scanner and the structural checks.

use thiserror::Error;

/// What went wrong while checking a code fragment.
///
/// Doubles as the logos error type of [`TokenKind`](crate::TokenKind): input
/// no token pattern accepts is reported as the default, `InvalidToken`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Default)]
pub enum SyntaxErrorKind {
    #[default]
    #[error("invalid token")]
    InvalidToken,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("empty input")]
    Empty,
    #[error("unexpected `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("unclosed `{0}`")]
    Unclosed(char),
    #[error("unmatched `{0}`")]
    Unmatched(char),
}

/// A syntax error with the byte offset it was detected at.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("syntax error at offset {offset}: {kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    #[inline]
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        SyntaxError { kind, offset }
    }

    pub(crate) fn unexpected(found: &str, offset: usize, expected: &'static str) -> Self {
        Self::new(
            SyntaxErrorKind::UnexpectedToken {
                found: found.to_owned(),
                expected,
            },
            offset,
        )
    }

    pub(crate) fn eof(offset: usize, expected: &'static str) -> Self {
        Self::new(SyntaxErrorKind::UnexpectedEof { expected }, offset)
    }

    /// Shift the offset back by `prefix` bytes.
    ///
    /// Used when a fragment was checked inside a synthetic wrapper.
    pub(crate) fn rebase(mut self, prefix: usize) -> Self {
        self.offset = self.offset.saturating_sub(prefix);
        self
    }
}
