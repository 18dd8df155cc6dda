use gogen_syntax::SyntaxCheck;

use crate::ident::{optional_identifier, require_identifier};
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, File, ImportSet, Node, Result};

/// Reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleSpec {
    /// Qualifying package alias, empty for local and builtin types.
    pub package_name: String,
    pub type_name: String,
    pub is_pointer: bool,
}

impl SimpleSpec {
    pub fn new(type_name: impl Into<String>) -> Self {
        SimpleSpec {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn qualified(package_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        SimpleSpec {
            package_name: package_name.into(),
            type_name: type_name.into(),
            is_pointer: false,
        }
    }

    #[must_use]
    pub fn pointer(mut self) -> Self {
        self.is_pointer = true;
        self
    }

    pub fn is_qualified(&self) -> bool {
        !self.package_name.is_empty()
    }
}

impl Node for SimpleSpec {
    fn validate_with(&self, _: &dyn SyntaxCheck) -> Result<()> {
        require_identifier("TypeName", &self.type_name)?;
        optional_identifier("PackageName", &self.package_name)
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if self.is_pointer {
            ctx.emit("*");
        }
        if self.is_qualified() {
            ctx.emit(&self.package_name);
            ctx.emit(".");
        }
        ctx.emit(&self.type_name);
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        if self.is_qualified() {
            found.collect_qualifier(file, &self.package_name);
        }
        Ok(())
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        rename.rewrite_name(&mut self.package_name);
        Ok(())
    }
}
