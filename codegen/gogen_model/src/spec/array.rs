use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, File, ImportSet, ModelError, Node, Result, Spec};

/// Slice or array type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySpec {
    pub value: Box<Spec>,
    /// Fixed length; 0 for a slice.
    pub length: i64,
    /// `[...]T`, length taken from the literal.
    pub is_ellipsis: bool,
}

impl ArraySpec {
    /// `[]T`
    pub fn slice(value: impl Into<Spec>) -> Self {
        ArraySpec {
            value: Box::new(value.into()),
            length: 0,
            is_ellipsis: false,
        }
    }

    /// `[N]T`
    pub fn fixed(value: impl Into<Spec>, length: i64) -> Self {
        ArraySpec {
            length,
            ..Self::slice(value)
        }
    }

    /// `[...]T`
    pub fn ellipsis(value: impl Into<Spec>) -> Self {
        ArraySpec {
            is_ellipsis: true,
            ..Self::slice(value)
        }
    }

    pub fn is_slice(&self) -> bool {
        self.length == 0 && !self.is_ellipsis
    }
}

impl Node for ArraySpec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        if self.length < 0 {
            return Err(ModelError::invariant(
                "Length",
                format!("must not be negative, got {}", self.length),
            ));
        }
        if self.length > 0 && self.is_ellipsis {
            return Err(ModelError::invariant(
                "IsEllipsis",
                format!("cannot be set together with Length {}", self.length),
            ));
        }
        self.value.validate_with(syntax).within(|| "Value")
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if self.is_ellipsis {
            ctx.emit("[...]");
        } else if self.length > 0 {
            ctx.emit(&format!("[{}]", self.length));
        } else {
            ctx.emit("[]");
        }
        self.value.render_type(ctx)
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.value.collect_imports(file, found)
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.value.rewrite_alias(rename)
    }
}

/// Map type.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSpec {
    pub key: Box<Spec>,
    pub value: Box<Spec>,
}

impl MapSpec {
    pub fn new(key: impl Into<Spec>, value: impl Into<Spec>) -> Self {
        MapSpec {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }
}

impl Node for MapSpec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        self.key.validate_with(syntax).within(|| "Key")?;
        self.value.validate_with(syntax).within(|| "Value")
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        ctx.emit("map[");
        self.key.render_type(ctx)?;
        ctx.emit("]");
        self.value.render_type(ctx)
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.key.collect_imports(file, found)?;
        self.value.collect_imports(file, found)
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.key.rewrite_alias(rename)?;
        self.value.rewrite_alias(rename)
    }
}
