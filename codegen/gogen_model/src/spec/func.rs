use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Field, File, ImportSet, ModelError, Node, Result, Spec};

/// Function signature.
///
/// Renders as `(params) (results)`; callers add `func` or a method name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncSpec {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    /// The last parameter is a `[]T` rendered as `...T`.
    pub is_variadic: bool,
}

impl FuncSpec {
    pub fn new(
        params: impl IntoIterator<Item = Field>,
        results: impl IntoIterator<Item = Field>,
    ) -> Self {
        FuncSpec {
            params: params.into_iter().collect(),
            results: results.into_iter().collect(),
            is_variadic: false,
        }
    }

    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    fn check_variadic(&self) -> Result<()> {
        let Some(last) = self.params.last() else {
            return Err(ModelError::invariant(
                "IsVariadic",
                "requires at least one parameter",
            ));
        };
        let at = || format!("Params[{}]", self.params.len() - 1);
        match &last.spec {
            Spec::Array(array) if array.is_slice() => Ok(()),
            Spec::Array(array) => Err(ModelError::invariant(
                "Spec",
                format!(
                    "variadic parameter must be a slice, got length {} ellipsis {}",
                    array.length, array.is_ellipsis
                ),
            )
            .within(at())),
            spec => Err(ModelError::invariant(
                "Spec",
                format!("variadic parameter must be an ArraySpec, got {}", spec.kind()),
            )
            .within(at())),
        }
    }

    fn check_results(&self) -> Result<()> {
        let named = self.results.iter().filter(|field| field.is_named()).count();
        if named != 0 && named != self.results.len() {
            return Err(ModelError::invariant(
                "Results",
                "must be all named or all unnamed",
            ));
        }
        Ok(())
    }
}

/// Comma separated members, one per line once any of them carries a comment.
fn render_list<E: Emitter>(
    ctx: &mut RenderContext<E>,
    fields: &[Field],
    variadic: bool,
) -> Result<()> {
    let last = fields.len().saturating_sub(1);
    if fields.iter().all(|field| field.comment.is_empty()) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                ctx.emit(", ");
            }
            field.render_typed(ctx, variadic && i == last)?;
        }
        return Ok(());
    }
    ctx.newline();
    ctx.indented(|ctx| {
        for (i, field) in fields.iter().enumerate() {
            ctx.comment(&field.comment);
            field.render_typed(ctx, variadic && i == last)?;
            ctx.emit(",");
            ctx.newline();
        }
        Ok(())
    })
}

impl Node for FuncSpec {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        for (i, param) in self.params.iter().enumerate() {
            param.validate_with(syntax).within(|| format!("Params[{i}]"))?;
        }
        for (i, result) in self.results.iter().enumerate() {
            result.validate_with(syntax).within(|| format!("Results[{i}]"))?;
        }
        if self.is_variadic {
            self.check_variadic()?;
        }
        self.check_results()
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        ctx.emit("(");
        render_list(ctx, &self.params, self.is_variadic)?;
        ctx.emit(")");
        if !self.results.is_empty() {
            ctx.emit(" (");
            render_list(ctx, &self.results, false)?;
            ctx.emit(")");
        }
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.params
            .iter()
            .chain(&self.results)
            .try_for_each(|field| field.collect_imports(file, found))
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.params
            .iter_mut()
            .chain(&mut self.results)
            .try_for_each(|field| field.rewrite_alias(rename))
    }
}
