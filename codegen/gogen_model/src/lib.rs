//! Gogen Model - in-memory document model for Go source
//!
//! A tree of files, declarations and type expressions that a code generator
//! builds, checks and writes out as Go text:
//!
//! - [`Spec`]: the closed family of type expressions
//! - [`Field`]: members of struct, interface and function types
//! - [`decl`]: `const`, `var`, `type`, `func` and `import` declarations
//!   and their groups
//! - [`File`], [`Namespace`], [`Storage`]: containers
//! - [`Node`]: validation, rendering and import resolution, implemented by
//!   every node
//!
//! Initializers, function bodies and pre-rendered file contents stay opaque
//! text. They are checked by a [`SyntaxCheck`] implementation and their
//! package qualifiers are found and renamed by a boundary rule on the text
//! (see [`imports::references`]).

pub mod annotation;
pub mod decl;
mod error;
mod field;
mod file;
pub mod ident;
pub mod imports;
mod namespace;
pub mod render;
pub mod spec;
mod traits;

pub use annotation::{Annotation, Annotations};
pub use decl::{
    Const, ConstGroup, Func, Group, Import, ImportGroup, Member, Type, TypeGroup, Var, VarGroup,
};
pub use error::{FieldPath, ModelError, Result};
pub use field::Field;
pub use file::File;
pub use gogen_syntax::{GoSyntax, SyntaxCheck, SyntaxError};
pub use imports::{AliasRename, ImportSet};
pub use namespace::{Namespace, Storage};
pub use spec::{
    ArraySpec, ExternalSpec, ForeignSpec, FuncSpec, InterfaceSpec, MapSpec, SimpleSpec, Spec,
    StructSpec,
};
pub use traits::Node;
