use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::ident::require_identifier;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Annotations, Field, File, FuncSpec, ImportSet, ModelError, Node, Result, Spec};

/// Function or method declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Func {
    pub name: String,
    pub comment: String,
    pub annotations: Annotations,
    pub spec: FuncSpec,
    /// Method receiver.
    pub related: Option<Field>,
    /// Statements of the body, without the enclosing braces.
    pub content: String,
}

impl Func {
    pub fn new(name: impl Into<String>, spec: FuncSpec) -> Self {
        Func {
            name: name.into(),
            spec,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: Field) -> Self {
        self.related = Some(receiver);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn is_method(&self) -> bool {
        self.related.is_some()
    }

    fn check_receiver(receiver: &Field) -> Result<()> {
        match &receiver.spec {
            Spec::Simple(simple) if simple.is_qualified() => Err(ModelError::invariant(
                "PackageName",
                format!(
                    "receiver type must be declared locally, got {}.{}",
                    simple.package_name, simple.type_name
                ),
            )
            .within("Spec")),
            Spec::Simple(_) => Ok(()),
            spec => Err(ModelError::invariant(
                "Spec",
                format!("receiver must be a SimpleSpec, got {}", spec.kind()),
            )),
        }
    }
}

impl Node for Func {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        require_identifier("Name", &self.name)?;
        self.annotations.validate()?;
        if let Some(receiver) = &self.related {
            Self::check_receiver(receiver)
                .and_then(|()| receiver.validate_with(syntax))
                .within(|| "Related")?;
        }
        self.spec.validate_with(syntax).within(|| "Spec")?;
        if !self.content.is_empty() {
            syntax.check_body(&self.content)?;
        }
        Ok(())
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        ctx.comment(&self.comment);
        ctx.emit("func ");
        if let Some(receiver) = &self.related {
            ctx.emit("(");
            receiver.render_typed(ctx, false).within(|| "Related")?;
            ctx.emit(") ");
        }
        ctx.emit(&self.name);
        self.spec.render_to(ctx).within(|| "Spec")?;
        ctx.emit(" {");
        ctx.newline();
        if !self.content.is_empty() {
            ctx.emit_raw(&self.content);
            if !self.content.ends_with('\n') {
                ctx.newline();
            }
        }
        ctx.emit("}");
        ctx.newline();
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        if let Some(receiver) = &self.related {
            receiver.collect_imports(file, found)?;
        }
        self.spec.collect_imports(file, found)?;
        found.collect_text(file, &self.content);
        Ok(())
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        if let Some(receiver) = &mut self.related {
            receiver.rewrite_alias(rename)?;
        }
        self.spec.rewrite_alias(rename)?;
        rename.rewrite_text(&mut self.content);
        Ok(())
    }
}
