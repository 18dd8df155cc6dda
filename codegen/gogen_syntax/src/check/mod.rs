//! Structural syntax checks over the token stream.
//!
//! These are not a Go parser. They accept every well-formed fragment of the
//! shapes the document model stores (an initializer expression, a function
//! body, a whole file) and reject the common ways such a fragment is broken:
//! lexical errors, unbalanced delimiters, dangling operators, statements where
//! an expression belongs and stray tokens between declarations.

use smallvec::SmallVec;

use crate::scanner::{tokenize, Token};
use crate::{SyntaxError, SyntaxErrorKind, TokenKind};

/// Syntax checks for the free-form code fragments held by the model.
pub trait SyntaxCheck {
    /// A single expression, such as a `const` or `var` initializer.
    fn check_expr(&self, src: &str) -> Result<(), SyntaxError>;

    /// A statement list, such as the body of a function.
    fn check_body(&self, src: &str) -> Result<(), SyntaxError>;

    /// A complete source file.
    fn check_file(&self, src: &str) -> Result<(), SyntaxError>;
}

/// The default checker, driven by the Go scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoSyntax;

const BODY_PREFIX: &str = "package p\nfunc _() {\n";

impl SyntaxCheck for GoSyntax {
    fn check_expr(&self, src: &str) -> Result<(), SyntaxError> {
        check_expr(src)
    }

    fn check_body(&self, src: &str) -> Result<(), SyntaxError> {
        let wrapped = format!("{BODY_PREFIX}{src}\n}}\n");
        check_file(&wrapped).map_err(|err| err.rebase(BODY_PREFIX.len()))
    }

    fn check_file(&self, src: &str) -> Result<(), SyntaxError> {
        check_file(src)
    }
}

/// Open delimiters, innermost last.
#[derive(Default)]
struct Nesting {
    open: SmallVec<[(TokenKind, usize); 16]>,
    braces: usize,
}

impl Nesting {
    #[inline]
    fn is_top(&self) -> bool {
        self.open.is_empty()
    }

    #[inline]
    fn in_braces(&self) -> bool {
        self.braces > 0
    }

    fn feed(&mut self, tok: &Token) -> Result<(), SyntaxError> {
        let opener = match tok.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                if tok.kind == TokenKind::LBrace {
                    self.braces += 1;
                }
                self.open.push((tok.kind, tok.span.start));
                return Ok(());
            }
            TokenKind::RParen => TokenKind::LParen,
            TokenKind::RBracket => TokenKind::LBracket,
            TokenKind::RBrace => TokenKind::LBrace,
            _ => return Ok(()),
        };
        match self.open.pop() {
            Some((kind, _)) if kind == opener => {
                if kind == TokenKind::LBrace {
                    self.braces -= 1;
                }
                Ok(())
            }
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::Unmatched(delimiter_char(tok.kind)),
                tok.span.start,
            )),
        }
    }

    fn finish(&self) -> Result<(), SyntaxError> {
        match self.open.last() {
            Some(&(kind, at)) => Err(SyntaxError::new(
                SyntaxErrorKind::Unclosed(delimiter_char(kind)),
                at,
            )),
            None => Ok(()),
        }
    }
}

fn delimiter_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::LParen => '(',
        TokenKind::RParen => ')',
        TokenKind::LBracket => '[',
        TokenKind::RBracket => ']',
        TokenKind::LBrace => '{',
        _ => '}',
    }
}

fn describe<'src>(tok: &Token, src: &'src str) -> &'src str {
    if tok.implicit {
        "newline"
    } else {
        tok.text(src)
    }
}

fn unexpected(tok: &Token, src: &str, expected: &'static str) -> SyntaxError {
    SyntaxError::unexpected(describe(tok, src), tok.span.start, expected)
}

/// Check how `tok` may follow `prev` at the top level of an expression.
fn check_sequence(prev: Option<TokenKind>, tok: &Token, src: &str) -> Result<(), SyntaxError> {
    let kind = tok.kind;
    match prev {
        None if kind.is_binary_only() || kind == TokenKind::Dot => {
            Err(unexpected(tok, src, "an operand"))
        }
        Some(p) if p.is_operand() && kind.is_operand() => {
            Err(unexpected(tok, src, "an operator"))
        }
        Some(p) if p.is_operator() && kind.is_binary_only() => {
            Err(unexpected(tok, src, "an operand"))
        }
        Some(TokenKind::Dot) if !matches!(kind, TokenKind::Ident | TokenKind::LParen) => {
            Err(unexpected(tok, src, "a selector"))
        }
        _ => Ok(()),
    }
}

fn check_expr(src: &str) -> Result<(), SyntaxError> {
    let mut tokens = tokenize(src)?;
    if tokens.last().is_some_and(|t| t.implicit) {
        tokens.pop();
    }
    let Some(last) = tokens.last().map(|t| t.kind) else {
        return Err(SyntaxError::new(SyntaxErrorKind::Empty, 0));
    };

    let mut nesting = Nesting::default();
    let mut prev = None;
    for tok in &tokens {
        // Function literal bodies may hold statements; everything else may not.
        if !nesting.in_braces() {
            if tok.kind.is_statement_keyword() || tok.kind.is_assignment() {
                return Err(unexpected(tok, src, "an expression"));
            }
            if tok.kind == TokenKind::Semi {
                return Err(unexpected(tok, src, "end of expression"));
            }
        }
        if nesting.is_top() {
            if tok.kind == TokenKind::Comma {
                return Err(unexpected(tok, src, "a single expression"));
            }
            check_sequence(prev, tok, src)?;
            prev = Some(tok.kind);
        }
        nesting.feed(tok)?;
        if nesting.is_top() {
            prev = Some(tok.kind);
        }
    }
    nesting.finish()?;

    if last.is_operator() || matches!(last, TokenKind::Dot | TokenKind::Comma | TokenKind::Colon) {
        return Err(SyntaxError::eof(src.len(), "an operand"));
    }
    Ok(())
}

fn expect<'t>(
    tok: Option<&'t Token>,
    kind: TokenKind,
    src: &str,
    expected: &'static str,
) -> Result<&'t Token, SyntaxError> {
    match tok {
        Some(tok) if tok.kind == kind => Ok(tok),
        Some(tok) => Err(unexpected(tok, src, expected)),
        None => Err(SyntaxError::eof(src.len(), expected)),
    }
}

fn check_file(src: &str) -> Result<(), SyntaxError> {
    let tokens = tokenize(src)?;
    let mut iter = tokens.iter();

    expect(iter.next(), TokenKind::KwPackage, src, "package clause")?;
    expect(iter.next(), TokenKind::Ident, src, "package name")?;
    expect(iter.next(), TokenKind::Semi, src, "newline after package clause")?;

    let mut past_imports = false;
    while let Some(head) = iter.next() {
        if !head.kind.starts_declaration() {
            return Err(unexpected(head, src, "a declaration"));
        }
        if head.kind == TokenKind::KwImport {
            if past_imports {
                return Err(unexpected(head, src, "imports before other declarations"));
            }
        } else {
            past_imports = true;
        }

        let mut nesting = Nesting::default();
        let mut body = 0usize;
        let mut terminated = false;
        for tok in iter.by_ref() {
            if matches!(tok.kind, TokenKind::KwPackage | TokenKind::KwImport) {
                return Err(unexpected(tok, src, "a statement"));
            }
            if tok.kind == TokenKind::Semi && nesting.is_top() {
                if body == 0 {
                    return Err(unexpected(tok, src, "a declaration body"));
                }
                terminated = true;
                break;
            }
            nesting.feed(tok)?;
            body += 1;
        }
        nesting.finish()?;
        if !terminated {
            return Err(SyntaxError::eof(src.len(), "end of declaration"));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
