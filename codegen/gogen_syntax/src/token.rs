//! Go token definitions.
//!
//! The scanner DFA is generated by logos. Trivia (newlines, comments) are
//! real tokens here; [`Scanner`](crate::Scanner) consumes them to drive
//! automatic semicolon insertion and never hands them out.

use logos::{Lexer, Logos};

use crate::SyntaxErrorKind;

/// Skip to the end of a `/* ... */` comment.
fn block_comment(lex: &mut Lexer<'_, TokenKind>) -> Result<(), SyntaxErrorKind> {
    let rem = lex.remainder().as_bytes();
    let mut from = 0;
    while let Some(star) = memchr::memchr(b'*', &rem[from..]) {
        let at = from + star;
        if rem.get(at + 1) == Some(&b'/') {
            lex.bump(at + 2);
            return Ok(());
        }
        from = at + 1;
    }
    lex.bump(rem.len());
    Err(SyntaxErrorKind::UnterminatedComment)
}

fn unterminated_string(_: &mut Lexer<'_, TokenKind>) -> Result<(), SyntaxErrorKind> {
    Err(SyntaxErrorKind::UnterminatedString)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = SyntaxErrorKind)]
#[logos(skip r"[ \t\f\u{FEFF}]+")]
#[rustfmt::skip]
pub enum TokenKind {
    // Trivia
    #[regex(r"\r\n|\n|\r")] Newline,
    #[regex(r"//[^\n\r]*")] LineComment,
    #[token("/*", block_comment)] BlockComment,

    // Keywords
    #[token("break")] KwBreak,
    #[token("case")] KwCase,
    #[token("chan")] KwChan,
    #[token("const")] KwConst,
    #[token("continue")] KwContinue,
    #[token("default")] KwDefault,
    #[token("defer")] KwDefer,
    #[token("else")] KwElse,
    #[token("fallthrough")] KwFallthrough,
    #[token("for")] KwFor,
    #[token("func")] KwFunc,
    #[token("go")] KwGo,
    #[token("goto")] KwGoto,
    #[token("if")] KwIf,
    #[token("import")] KwImport,
    #[token("interface")] KwInterface,
    #[token("map")] KwMap,
    #[token("package")] KwPackage,
    #[token("range")] KwRange,
    #[token("return")] KwReturn,
    #[token("select")] KwSelect,
    #[token("struct")] KwStruct,
    #[token("switch")] KwSwitch,
    #[token("type")] KwType,
    #[token("var")] KwVar,

    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")] Ident,

    // Literals
    #[regex(r"0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|0[0-7_]*|[1-9][0-9_]*")]
    Int,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?|[0-9][0-9_]*[eE][+-]?[0-9_]+|\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?|0[xX][0-9a-fA-F_]*\.?[0-9a-fA-F_]*[pP][+-]?[0-9_]+")]
    Float,
    #[regex(r"([0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9_]+)?|\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?)i")]
    Imaginary,
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])+'")] Rune,
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#)] String,
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*"#, unterminated_string)] UnterminatedString,
    #[regex(r"`[^`]*`")] RawString,
    #[regex(r"`[^`]*", unterminated_string)] UnterminatedRawString,

    // Operators
    #[token("...")] Ellipsis,
    #[token("<<=")] ShlAssign,
    #[token(">>=")] ShrAssign,
    #[token("&^=")] AndNotAssign,
    #[token("+=")] AddAssign,
    #[token("-=")] SubAssign,
    #[token("*=")] MulAssign,
    #[token("/=")] DivAssign,
    #[token("%=")] RemAssign,
    #[token("&=")] AndAssign,
    #[token("|=")] OrAssign,
    #[token("^=")] XorAssign,
    #[token("<<")] Shl,
    #[token(">>")] Shr,
    #[token("&^")] AndNot,
    #[token("&&")] LAnd,
    #[token("||")] LOr,
    #[token("==")] EqEq,
    #[token("!=")] NotEq,
    #[token("<=")] Le,
    #[token(">=")] Ge,
    #[token("++")] Inc,
    #[token("--")] Dec,
    #[token(":=")] Define,
    #[token("<-")] Arrow,
    #[token("=")] Assign,
    #[token("+")] Plus,
    #[token("-")] Minus,
    #[token("*")] Star,
    #[token("/")] Slash,
    #[token("%")] Percent,
    #[token("&")] Amp,
    #[token("|")] Pipe,
    #[token("^")] Caret,
    #[token("~")] Tilde,
    #[token("!")] Bang,
    #[token("<")] Lt,
    #[token(">")] Gt,

    // Delimiters
    #[token("(")] LParen,
    #[token(")")] RParen,
    #[token("[")] LBracket,
    #[token("]")] RBracket,
    #[token("{")] LBrace,
    #[token("}")] RBrace,
    #[token(",")] Comma,
    #[token(";")] Semi,
    #[token(":")] Colon,
    #[token(".")] Dot,
}

impl TokenKind {
    /// Newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Newline | Self::LineComment | Self::BlockComment)
    }

    /// A line break after this token terminates the statement.
    #[inline]
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::Int
                | Self::Float
                | Self::Imaginary
                | Self::Rune
                | Self::String
                | Self::RawString
                | Self::KwBreak
                | Self::KwContinue
                | Self::KwFallthrough
                | Self::KwReturn
                | Self::Inc
                | Self::Dec
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
        )
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::Imaginary | Self::Rune | Self::String | Self::RawString
        )
    }

    /// Identifiers and literals.
    #[inline]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Ident) || self.is_literal()
    }

    /// Operators that can only appear between two operands.
    #[inline]
    pub const fn is_binary_only(self) -> bool {
        matches!(
            self,
            Self::Slash
                | Self::Percent
                | Self::Shl
                | Self::Shr
                | Self::AndNot
                | Self::LAnd
                | Self::LOr
                | Self::EqEq
                | Self::NotEq
                | Self::Lt
                | Self::Le
                | Self::Gt
                | Self::Ge
                | Self::Pipe
        )
    }

    /// Operators that may also prefix an operand.
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Amp
                | Self::Caret
                | Self::Bang
                | Self::Arrow
                | Self::Tilde
        )
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        self.is_binary_only() || self.is_unary()
    }

    /// `=`, `:=`, compound assignments, `++` and `--`.
    #[inline]
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::Define
                | Self::AddAssign
                | Self::SubAssign
                | Self::MulAssign
                | Self::DivAssign
                | Self::RemAssign
                | Self::AndAssign
                | Self::OrAssign
                | Self::XorAssign
                | Self::ShlAssign
                | Self::ShrAssign
                | Self::AndNotAssign
                | Self::Inc
                | Self::Dec
        )
    }

    /// Keywords that only begin statements or declarations.
    #[inline]
    pub const fn is_statement_keyword(self) -> bool {
        matches!(
            self,
            Self::KwBreak
                | Self::KwCase
                | Self::KwConst
                | Self::KwContinue
                | Self::KwDefault
                | Self::KwDefer
                | Self::KwElse
                | Self::KwFallthrough
                | Self::KwFor
                | Self::KwGo
                | Self::KwGoto
                | Self::KwIf
                | Self::KwImport
                | Self::KwPackage
                | Self::KwRange
                | Self::KwReturn
                | Self::KwSelect
                | Self::KwSwitch
                | Self::KwType
                | Self::KwVar
        )
    }

    /// Keywords that start a top-level declaration.
    #[inline]
    pub const fn starts_declaration(self) -> bool {
        matches!(
            self,
            Self::KwImport | Self::KwConst | Self::KwVar | Self::KwType | Self::KwFunc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(src: &str) -> Vec<TokenKind> {
        TokenKind::lexer(src).filter_map(Result::ok).collect()
    }

    #[test]
    fn trivia_kinds() {
        let trivia: Vec<_> = kinds("x // note\n/* block */ y")
            .into_iter()
            .map(TokenKind::is_trivia)
            .collect();
        assert_eq!(trivia, vec![false, true, true, true, false]);
    }

    #[test]
    fn keywords_beat_identifiers() {
        assert_eq!(
            kinds("func funcs"),
            vec![TokenKind::KwFunc, TokenKind::Ident]
        );
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(kinds("héllo _x π2"), vec![TokenKind::Ident; 3]);
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(
            kinds("42 0x1F 0b101 0o17 1_000 3.14 1e9 .5 2i 1.5i"),
            vec![
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Imaginary,
                TokenKind::Imaginary,
            ]
        );
    }

    #[test]
    fn string_forms() {
        assert_eq!(
            kinds(r#""a\"b" `raw` 'x' '\n'"#),
            vec![
                TokenKind::String,
                TokenKind::RawString,
                TokenKind::Rune,
                TokenKind::Rune,
            ]
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let errors: Vec<_> = TokenKind::lexer("\"abc")
            .filter_map(Result::err)
            .collect();
        assert_eq!(errors, vec![SyntaxErrorKind::UnterminatedString]);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let errors: Vec<_> = TokenKind::lexer("a /* never closed")
            .filter_map(Result::err)
            .collect();
        assert_eq!(errors, vec![SyntaxErrorKind::UnterminatedComment]);
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(
            kinds("&^= &^ && &= & ..."),
            vec![
                TokenKind::AndNotAssign,
                TokenKind::AndNot,
                TokenKind::LAnd,
                TokenKind::AndAssign,
                TokenKind::Amp,
                TokenKind::Ellipsis,
            ]
        );
    }
}
