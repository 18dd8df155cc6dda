use gogen_syntax::SyntaxCheck;

use crate::decl::group::render_decl;
use crate::decl::Member;
use crate::ident::{last_path_segment, optional_identifier, require};
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Annotations, File, ImportSet, Node, Result};

/// `import [Alias] "Namespace"`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Import {
    /// Explicit local name; empty to use the last path segment.
    pub alias: String,
    /// Import path.
    pub namespace: String,
    pub comment: String,
    pub annotations: Annotations,
}

impl Import {
    pub fn new(namespace: impl Into<String>) -> Self {
        Import {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn aliased(alias: impl Into<String>, namespace: impl Into<String>) -> Self {
        Import {
            alias: alias.into(),
            ..Self::new(namespace)
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// The name code uses to qualify this import.
    pub fn real_alias(&self) -> &str {
        if self.alias.is_empty() {
            last_path_segment(&self.namespace)
        } else {
            &self.alias
        }
    }

    /// Equal alias, namespace and comment; annotations are not compared.
    pub fn same_import(&self, other: &Import) -> bool {
        self.alias == other.alias
            && self.namespace == other.namespace
            && self.comment == other.comment
    }
}

impl Node for Import {
    fn validate_with(&self, _: &dyn SyntaxCheck) -> Result<()> {
        optional_identifier("Alias", &self.alias)?;
        require("Namespace", &self.namespace)?;
        self.annotations.validate()
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        render_decl(self, ctx)
    }

    /// The entries of `file` equivalent to this import.
    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        for import in file.imports() {
            if import.same_import(self) {
                found.insert(import);
            }
        }
        Ok(())
    }

    /// Gives the import an explicit alias when its effective one matches.
    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        if self.real_alias() == rename.old() {
            self.alias = rename.new_alias().to_owned();
        }
        Ok(())
    }
}

impl Member for Import {
    const KEYWORD: &'static str = "import";
    const ITEMS: &'static str = "Imports";

    fn comment(&self) -> &str {
        &self.comment
    }

    fn render_member<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if !self.alias.is_empty() {
            ctx.emit(&self.alias);
            ctx.emit(" ");
        }
        ctx.emit(&quote(&self.namespace));
        Ok(())
    }
}

/// Interpreted string literal for an import path.
fn quote(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
