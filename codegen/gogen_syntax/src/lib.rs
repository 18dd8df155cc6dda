//! Gogen Syntax - Go scanning and fragment checks
//!
//! The document model keeps initializers, function bodies and pre-rendered
//! files as opaque text. This crate is the collaborator that decides whether
//! such text is syntactically acceptable Go, without building a tree for it.
//!
//! - [`TokenKind`]: logos-generated Go token set
//! - [`Scanner`]: significant tokens with automatic semicolon insertion
//! - [`SyntaxCheck`] / [`GoSyntax`]: expression, body and file checks
//! - [`literal_kind`]: classification of single-literal initializers

mod check;
mod error;
mod literal;
mod scanner;
mod token;

pub use check::{GoSyntax, SyntaxCheck};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use literal::{literal_kind, LiteralKind};
pub use scanner::{tokenize, Scanner, Token};
pub use token::TokenKind;
