//! Literal classification for single-token initializers.

use crate::scanner::tokenize;
use crate::TokenKind;

/// The kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    Imaginary,
    Rune,
    String,
}

/// Classify `src` if it consists of exactly one basic literal.
///
/// Anything else, including signed numbers (`-1` is a unary expression),
/// `true`/`false` (identifiers in Go) and lexically invalid text, yields
/// `None`.
pub fn literal_kind(src: &str) -> Option<LiteralKind> {
    let tokens = tokenize(src).ok()?;
    let mut significant = tokens.iter().filter(|t| !t.implicit);
    let tok = significant.next()?;
    if significant.next().is_some() {
        return None;
    }
    match tok.kind {
        TokenKind::Int => Some(LiteralKind::Int),
        TokenKind::Float => Some(LiteralKind::Float),
        TokenKind::Imaginary => Some(LiteralKind::Imaginary),
        TokenKind::Rune => Some(LiteralKind::Rune),
        TokenKind::String | TokenKind::RawString => Some(LiteralKind::String),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_single_literals() {
        assert_eq!(literal_kind("42"), Some(LiteralKind::Int));
        assert_eq!(literal_kind(" 0x1F "), Some(LiteralKind::Int));
        assert_eq!(literal_kind("3.5"), Some(LiteralKind::Float));
        assert_eq!(literal_kind("2i"), Some(LiteralKind::Imaginary));
        assert_eq!(literal_kind("'a'"), Some(LiteralKind::Rune));
        assert_eq!(literal_kind("\"s\""), Some(LiteralKind::String));
        assert_eq!(literal_kind("`s`"), Some(LiteralKind::String));
    }

    #[test]
    fn everything_else_is_unclassified() {
        assert_eq!(literal_kind(""), None);
        assert_eq!(literal_kind("-1"), None);
        assert_eq!(literal_kind("true"), None);
        assert_eq!(literal_kind("1 + 2"), None);
        assert_eq!(literal_kind("\"open"), None);
    }
}
