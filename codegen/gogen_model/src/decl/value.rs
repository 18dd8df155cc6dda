use gogen_syntax::{literal_kind, LiteralKind, SyntaxCheck};

use crate::decl::group::render_decl;
use crate::decl::Member;
use crate::error::Within;
use crate::ident::require_identifier;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Annotations, File, ImportSet, ModelError, Node, Result, SimpleSpec, Spec};

/// `const Name [Type] = Value`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Const {
    pub name: String,
    pub comment: String,
    pub annotations: Annotations,
    pub spec: Option<Spec>,
    /// Initializer expression, required when rendering.
    pub value: String,
}

/// `var Name [Type] [= Value]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Var {
    pub name: String,
    pub comment: String,
    pub annotations: Annotations,
    pub spec: Option<Spec>,
    pub value: String,
}

/// `type Name Type`
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: String,
    pub comment: String,
    pub annotations: Annotations,
    pub spec: Spec,
}

/// Spec of an untyped initializer: string, int and float literals only.
fn infer_spec(value: &str) -> Option<Spec> {
    let name = match literal_kind(value)? {
        LiteralKind::String => "string",
        LiteralKind::Int => "int",
        LiteralKind::Float => "float64",
        LiteralKind::Rune | LiteralKind::Imaginary => return None,
    };
    Some(SimpleSpec::new(name).into())
}

fn check_value(syntax: &dyn SyntaxCheck, value: &str) -> Result<()> {
    if !value.is_empty() {
        syntax.check_expr(value)?;
    }
    Ok(())
}

/// `Name[ Type][ = Value]`
fn render_binding<E: Emitter>(
    ctx: &mut RenderContext<E>,
    name: &str,
    spec: Option<&Spec>,
    value: &str,
) -> Result<()> {
    ctx.emit(name);
    if let Some(spec) = spec {
        ctx.emit(" ");
        spec.render_type(ctx).within(|| "Spec")?;
    }
    if !value.is_empty() {
        ctx.emit(" = ");
        ctx.emit(value);
    }
    Ok(())
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Const {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_spec(mut self, spec: impl Into<Spec>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The declared type, or the one implied by a literal initializer.
    pub fn default_spec(&self) -> Option<Spec> {
        self.spec.clone().or_else(|| infer_spec(&self.value))
    }
}

impl Node for Const {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        require_identifier("Name", &self.name)?;
        self.annotations.validate()?;
        if let Some(spec) = &self.spec {
            if spec.is_pointer() {
                return Err(ModelError::invariant("Spec", "constant cannot be a pointer"));
            }
            spec.validate_with(syntax).within(|| "Spec")?;
        }
        check_value(syntax, &self.value)
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_decl(self, ctx)
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        if let Some(spec) = &self.spec {
            spec.collect_imports(file, found)?;
        }
        found.collect_text(file, &self.value);
        Ok(())
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        if let Some(spec) = &mut self.spec {
            spec.rewrite_alias(rename)?;
        }
        rename.rewrite_text(&mut self.value);
        Ok(())
    }
}

impl Member for Const {
    const KEYWORD: &'static str = "const";
    const ITEMS: &'static str = "Consts";

    fn comment(&self) -> &str {
        &self.comment
    }

    fn render_member<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if self.value.is_empty() {
            return Err(ModelError::invariant(
                "Value",
                format!("constant {} has no value", self.name),
            ));
        }
        render_binding(ctx, &self.name, self.spec.as_ref(), &self.value)
    }
}

impl Var {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Var {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// A zero-valued variable of type `spec`.
    pub fn typed(name: impl Into<String>, spec: impl Into<Spec>) -> Self {
        Var {
            name: name.into(),
            spec: Some(spec.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_spec(mut self, spec: impl Into<Spec>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The declared type, or the one implied by a literal initializer.
    pub fn default_spec(&self) -> Option<Spec> {
        self.spec.clone().or_else(|| infer_spec(&self.value))
    }
}

impl Node for Var {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        require_identifier("Name", &self.name)?;
        self.annotations.validate()?;
        match &self.spec {
            Some(spec) => spec.validate_with(syntax).within(|| "Spec")?,
            None if self.value.is_empty() => {
                return Err(ModelError::invariant(
                    "Spec",
                    format!("variable {} needs a type or a value", self.name),
                ));
            }
            None => {}
        }
        check_value(syntax, &self.value)
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_decl(self, ctx)
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        if let Some(spec) = &self.spec {
            spec.collect_imports(file, found)?;
        }
        found.collect_text(file, &self.value);
        Ok(())
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        if let Some(spec) = &mut self.spec {
            spec.rewrite_alias(rename)?;
        }
        rename.rewrite_text(&mut self.value);
        Ok(())
    }
}

impl Member for Var {
    const KEYWORD: &'static str = "var";
    const ITEMS: &'static str = "Vars";

    fn comment(&self) -> &str {
        &self.comment
    }

    fn render_member<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_binding(ctx, &self.name, self.spec.as_ref(), &self.value)
    }
}

impl Type {
    pub fn new(name: impl Into<String>, spec: impl Into<Spec>) -> Self {
        Type {
            name: name.into(),
            comment: String::new(),
            annotations: Annotations::new(),
            spec: spec.into(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Node for Type {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        require_identifier("Name", &self.name)?;
        self.annotations.validate()?;
        self.spec.validate_with(syntax).within(|| "Spec")
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_decl(self, ctx)
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.spec.collect_imports(file, found)
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.spec.rewrite_alias(rename)
    }
}

impl Member for Type {
    const KEYWORD: &'static str = "type";
    const ITEMS: &'static str = "Types";

    fn comment(&self) -> &str {
        &self.comment
    }

    fn render_member<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_binding(ctx, &self.name, Some(&self.spec), "")
    }
}
