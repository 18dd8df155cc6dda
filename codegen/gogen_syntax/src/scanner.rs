//! Token stream with Go's automatic semicolon insertion.

use std::ops::Range;

use logos::{Lexer, Logos};

use crate::{SyntaxError, TokenKind};

/// A significant token and its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
    /// `true` for a `;` produced by semicolon insertion.
    pub implicit: bool,
}

impl Token {
    #[inline]
    fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Token {
            kind,
            span,
            implicit: false,
        }
    }

    #[inline]
    fn inserted_semi(at: usize) -> Self {
        Token {
            kind: TokenKind::Semi,
            span: at..at,
            implicit: true,
        }
    }

    /// The source text of this token, empty for an inserted `;`.
    pub fn text<'src>(&self, src: &'src str) -> &'src str {
        src.get(self.span.clone()).unwrap_or("")
    }
}

/// Iterator over the significant tokens of a Go fragment.
///
/// Trivia is consumed here. A `;` is inserted at a line break (or at the end
/// of input) that follows a token which can end a statement, the same rule
/// the Go scanner applies.
pub struct Scanner<'src> {
    lexer: Lexer<'src, TokenKind>,
    insert_semi: bool,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Scanner {
            lexer: TokenKind::lexer(src),
            insert_semi: false,
            finished: false,
        }
    }

    fn semi_at(&mut self, at: usize) -> Option<Token> {
        if self.insert_semi {
            self.insert_semi = false;
            Some(Token::inserted_semi(at))
        } else {
            None
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            let Some(next) = self.lexer.next() else {
                self.finished = true;
                let end = self.lexer.source().len();
                return self.semi_at(end).map(Ok);
            };
            let span = self.lexer.span();
            let kind = match next {
                Ok(kind) => kind,
                Err(kind) => {
                    self.finished = true;
                    return Some(Err(SyntaxError::new(kind, span.start)));
                }
            };
            match kind {
                TokenKind::Newline => {
                    if let Some(semi) = self.semi_at(span.start) {
                        return Some(Ok(semi));
                    }
                }
                TokenKind::BlockComment => {
                    let text = self.lexer.slice();
                    if let Some(off) = text.find(['\n', '\r']) {
                        if let Some(semi) = self.semi_at(span.start + off) {
                            return Some(Ok(semi));
                        }
                    }
                }
                TokenKind::LineComment => {}
                _ => {
                    self.insert_semi = kind.ends_statement();
                    return Some(Ok(Token::new(kind, span)));
                }
            }
        }
    }
}

/// Scan `src` into significant tokens, stopping at the first lexical error.
pub fn tokenize(src: &str) -> Result<Vec<Token>, SyntaxError> {
    Scanner::new(src).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;
    use crate::SyntaxErrorKind;
    use pretty_assertions::assert_eq;

    fn kinds(src: &str) -> Vec<(TokenKind, bool)> {
        tokenize(src)
            .unwrap_or_default()
            .into_iter()
            .map(|t| (t.kind, t.implicit))
            .collect()
    }

    #[test]
    fn inserts_semicolon_after_identifier_at_newline() {
        assert_eq!(
            kinds("a\nb"),
            vec![
                (TokenKind::Ident, false),
                (TokenKind::Semi, true),
                (TokenKind::Ident, false),
                (TokenKind::Semi, true),
            ]
        );
    }

    #[test]
    fn no_semicolon_after_operator() {
        assert_eq!(
            kinds("a +\nb"),
            vec![
                (TokenKind::Ident, false),
                (TokenKind::Plus, false),
                (TokenKind::Ident, false),
                (TokenKind::Semi, true),
            ]
        );
    }

    #[test]
    fn line_comment_does_not_hide_the_line_break() {
        assert_eq!(
            kinds("return // done\n}"),
            vec![
                (TokenKind::KwReturn, false),
                (TokenKind::Semi, true),
                (TokenKind::RBrace, false),
                (TokenKind::Semi, true),
            ]
        );
    }

    #[test]
    fn multi_line_block_comment_acts_as_newline() {
        assert_eq!(
            kinds("x /* a\nb */ y"),
            vec![
                (TokenKind::Ident, false),
                (TokenKind::Semi, true),
                (TokenKind::Ident, false),
                (TokenKind::Semi, true),
            ]
        );
    }

    #[test]
    fn explicit_semicolon_is_not_implicit() {
        assert_eq!(
            kinds("a;"),
            vec![(TokenKind::Ident, false), (TokenKind::Semi, false)]
        );
    }

    #[test]
    fn lexical_error_stops_the_scan() {
        let err = tokenize("a $ b").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::InvalidToken);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn token_text() {
        let src = "fmt.Println";
        let tokens = tokenize(src).unwrap_or_default();
        assert_eq!(tokens[0].text(src), "fmt");
        assert_eq!(tokens[2].text(src), "Println");
    }
}
