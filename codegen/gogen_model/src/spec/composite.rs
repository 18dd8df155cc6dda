use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Field, File, ImportSet, ModelError, Node, Result, Spec};

/// Struct type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructSpec {
    pub fields: Vec<Field>,
}

impl StructSpec {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        StructSpec {
            fields: fields.into_iter().collect(),
        }
    }
}

impl Node for StructSpec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if !field.is_named() && field.spec.as_simple().is_none() {
                return Err(ModelError::invariant(
                    "Spec",
                    format!("embedded field must be a SimpleSpec, got {}", field.spec.kind()),
                )
                .within(format!("Fields[{i}]")));
            }
            field.validate_with(syntax).within(|| format!("Fields[{i}]"))?;
        }
        Ok(())
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if self.fields.is_empty() {
            ctx.emit("struct{}");
            return Ok(());
        }
        ctx.emit("struct {");
        ctx.newline();
        ctx.indented(|ctx| {
            for field in &self.fields {
                field.render_to(ctx)?;
                ctx.newline();
            }
            Ok::<_, ModelError>(())
        })?;
        ctx.emit("}");
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.fields
            .iter()
            .try_for_each(|field| field.collect_imports(file, found))
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.fields
            .iter_mut()
            .try_for_each(|field| field.rewrite_alias(rename))
    }
}

/// Interface type: embedded interfaces and methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterfaceSpec {
    pub fields: Vec<Field>,
}

impl InterfaceSpec {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        InterfaceSpec {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn methods(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_named())
    }

    pub fn embeds(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_named())
    }
}

fn check_interface_member(field: &Field) -> Result<()> {
    match (&field.spec, field.is_named()) {
        (Spec::Simple(simple), false) if simple.is_pointer => Err(ModelError::invariant(
            "Spec",
            "embedded interface must not be a pointer",
        )),
        (Spec::Simple(_), false) | (Spec::Func(_), true) => Ok(()),
        (Spec::Func(_), false) => Err(ModelError::invariant("Name", "method requires a name")),
        (spec, false) => Err(ModelError::invariant(
            "Spec",
            format!("embedded interface must be a SimpleSpec, got {}", spec.kind()),
        )),
        (spec, true) => Err(ModelError::invariant(
            "Spec",
            format!("method must be a FuncSpec, got {}", spec.kind()),
        )),
    }
}

impl Node for InterfaceSpec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        for (i, field) in self.fields.iter().enumerate() {
            check_interface_member(field)
                .and_then(|()| field.validate_with(syntax))
                .within(|| format!("Fields[{i}]"))?;
        }
        Ok(())
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if self.fields.is_empty() {
            ctx.emit("interface{}");
            return Ok(());
        }
        ctx.emit("interface {");
        ctx.newline();
        ctx.indented(|ctx| {
            for field in &self.fields {
                ctx.comment(&field.comment);
                // methods read `Name(...)`, without the func keyword
                ctx.emit(&field.name);
                field.spec.render_to(ctx)?;
                ctx.newline();
            }
            Ok::<_, ModelError>(())
        })?;
        ctx.emit("}");
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.fields
            .iter()
            .try_for_each(|field| field.collect_imports(file, found))
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.fields
            .iter_mut()
            .try_for_each(|field| field.rewrite_alias(rename))
    }
}
