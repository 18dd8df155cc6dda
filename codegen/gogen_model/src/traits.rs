//! The operations every tree node supports.

use gogen_syntax::{GoSyntax, SyntaxCheck};

use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, File, ImportSet, Result};

/// Validation, rendering and import resolution for one node kind.
///
/// Deep copies are the derived `Clone`: children are owned, annotations are
/// copied entry by entry, so a clone shares nothing with its origin.
pub trait Node: Clone {
    /// Check this node and everything below it.
    ///
    /// Free-form code (initializers, bodies, pre-rendered files) goes through
    /// `syntax`.
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()>;

    /// [`validate_with`](Node::validate_with) using the Go scanner.
    fn validate(&self) -> Result<()> {
        self.validate_with(&GoSyntax)
    }

    /// Write the Go source text of this node.
    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()>;

    /// Render with the default configuration.
    fn render(&self) -> Result<String> {
        let mut ctx = RenderContext::new();
        self.render_to(&mut ctx)?;
        Ok(ctx.finish())
    }

    /// Add the imports of `file` that this subtree refers to.
    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()>;

    /// Imports of `file` referenced anywhere below this node.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
    fn fetch_imports<'f>(&self, file: &'f File) -> Result<ImportSet<'f>> {
        let mut found = ImportSet::new();
        self.collect_imports(file, &mut found)?;
        tracing::debug!(count = found.len(), "imports fetched");
        Ok(found)
    }

    /// Apply a prepared rename to this subtree.
    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()>;

    /// Rename package alias `old` to `new` in structure and in code text.
    ///
    /// The rename is applied to a copy that replaces `self` only once the
    /// whole subtree succeeded; on error `self` is unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(old = old, new = new))]
    fn rename_imports(&mut self, old: &str, new: &str) -> Result<()> {
        let rename = AliasRename::new(old, new)?;
        let mut renamed = self.clone();
        renamed.rewrite_alias(&rename)?;
        *self = renamed;
        tracing::debug!("imports renamed");
        Ok(())
    }
}
