//! Type expressions.
//!
//! `Spec` is the closed set of type shapes a declaration can carry. Every
//! operation dispatches with an exhaustive match; the one open door is
//! [`Spec::Foreign`], which wraps an implementation supplied from outside
//! the model and fails every operation as an invalid type.

mod array;
mod composite;
mod func;
mod simple;

pub use array::{ArraySpec, MapSpec};
pub use composite::{InterfaceSpec, StructSpec};
pub use func::FuncSpec;
pub use simple::SimpleSpec;

use std::fmt;

use gogen_syntax::SyntaxCheck;

use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, File, ImportSet, ModelError, Node, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// `[*][pkg.]Name`
    Simple(SimpleSpec),
    /// `[]T`, `[N]T`, `[...]T`
    Array(ArraySpec),
    /// `map[K]V`
    Map(MapSpec),
    /// `struct { ... }`
    Struct(StructSpec),
    /// `interface { ... }`
    Interface(InterfaceSpec),
    /// `func(...) (...)`, rendered without the keyword
    Func(FuncSpec),
    /// A type shape the model does not know.
    Foreign(ForeignSpec),
}

impl Spec {
    /// Name of the variant, or the foreign type's own name.
    pub fn kind(&self) -> &str {
        match self {
            Spec::Simple(_) => "SimpleSpec",
            Spec::Array(_) => "ArraySpec",
            Spec::Map(_) => "MapSpec",
            Spec::Struct(_) => "StructSpec",
            Spec::Interface(_) => "InterfaceSpec",
            Spec::Func(_) => "FuncSpec",
            Spec::Foreign(foreign) => foreign.type_name(),
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleSpec> {
        match self {
            Spec::Simple(simple) => Some(simple),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&FuncSpec> {
        match self {
            Spec::Func(func) => Some(func),
            _ => None,
        }
    }

    /// A `*T` reference.
    pub fn is_pointer(&self) -> bool {
        matches!(self, Spec::Simple(simple) if simple.is_pointer)
    }

    /// Render in a type position, where function types take `func`.
    pub(crate) fn render_type<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if let Spec::Func(_) = self {
            ctx.emit("func ");
        }
        self.render_to(ctx)
    }
}

impl Node for Spec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        match self {
            Spec::Simple(spec) => spec.validate_with(syntax),
            Spec::Array(spec) => spec.validate_with(syntax),
            Spec::Map(spec) => spec.validate_with(syntax),
            Spec::Struct(spec) => spec.validate_with(syntax),
            Spec::Interface(spec) => spec.validate_with(syntax),
            Spec::Func(spec) => spec.validate_with(syntax),
            Spec::Foreign(foreign) => Err(foreign.invalid()),
        }
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        match self {
            Spec::Simple(spec) => spec.render_to(ctx),
            Spec::Array(spec) => spec.render_to(ctx),
            Spec::Map(spec) => spec.render_to(ctx),
            Spec::Struct(spec) => spec.render_to(ctx),
            Spec::Interface(spec) => spec.render_to(ctx),
            Spec::Func(spec) => spec.render_to(ctx),
            Spec::Foreign(foreign) => Err(foreign.invalid()),
        }
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        match self {
            Spec::Simple(spec) => spec.collect_imports(file, found),
            Spec::Array(spec) => spec.collect_imports(file, found),
            Spec::Map(spec) => spec.collect_imports(file, found),
            Spec::Struct(spec) => spec.collect_imports(file, found),
            Spec::Interface(spec) => spec.collect_imports(file, found),
            Spec::Func(spec) => spec.collect_imports(file, found),
            Spec::Foreign(foreign) => Err(foreign.invalid()),
        }
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        match self {
            Spec::Simple(spec) => spec.rewrite_alias(rename),
            Spec::Array(spec) => spec.rewrite_alias(rename),
            Spec::Map(spec) => spec.rewrite_alias(rename),
            Spec::Struct(spec) => spec.rewrite_alias(rename),
            Spec::Interface(spec) => spec.rewrite_alias(rename),
            Spec::Func(spec) => spec.rewrite_alias(rename),
            Spec::Foreign(foreign) => Err(foreign.invalid()),
        }
    }
}

macro_rules! spec_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for Spec {
            fn from(spec: $ty) -> Self {
                Spec::$variant(spec)
            }
        })*
    };
}

spec_from! {
    SimpleSpec => Simple,
    ArraySpec => Array,
    MapSpec => Map,
    StructSpec => Struct,
    InterfaceSpec => Interface,
    FuncSpec => Func,
    ForeignSpec => Foreign,
}

/// A type shape implemented outside the model.
pub trait ExternalSpec: fmt::Debug + Send + Sync + 'static {
    fn type_name(&self) -> &str;
    fn clone_spec(&self) -> Box<dyn ExternalSpec>;
}

/// Holder for an [`ExternalSpec`] found where a `Spec` is expected.
#[derive(Debug)]
pub struct ForeignSpec(Box<dyn ExternalSpec>);

impl ForeignSpec {
    pub fn new(spec: impl ExternalSpec) -> Self {
        ForeignSpec(Box::new(spec))
    }

    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    fn invalid(&self) -> ModelError {
        ModelError::invariant("Spec", format!("invalid type {}", self.type_name()))
    }
}

impl Clone for ForeignSpec {
    fn clone(&self) -> Self {
        ForeignSpec(self.0.clone_spec())
    }
}

impl PartialEq for ForeignSpec {
    fn eq(&self, other: &Self) -> bool {
        self.type_name() == other.type_name()
            && format!("{:?}", self.0) == format!("{:?}", other.0)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
