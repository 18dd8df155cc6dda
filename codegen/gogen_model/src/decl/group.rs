use std::fmt;

use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, File, ImportSet, ModelError, Node, Result};

use super::{Const, Import, Type, Var};

/// A declaration kind that can appear in a group.
pub trait Member: Node + Clone + PartialEq + fmt::Debug {
    /// Go keyword introducing the declaration.
    const KEYWORD: &'static str;
    /// Path segment naming the group's elements in errors.
    const ITEMS: &'static str;

    fn comment(&self) -> &str;

    /// The declaration without keyword or comment.
    fn render_member<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()>;
}

/// Standalone form: comment lines, then `keyword member`.
pub(crate) fn render_decl<M: Member, E: Emitter>(
    member: &M,
    ctx: &mut RenderContext<E>,
) -> Result<()> {
    ctx.comment(member.comment());
    ctx.emit(M::KEYWORD);
    ctx.emit(" ");
    member.render_member(ctx)?;
    ctx.newline();
    Ok(())
}

/// Same-kind declarations sharing one leading comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub comment: String,
    pub items: Vec<T>,
}

pub type ConstGroup = Group<Const>;
pub type VarGroup = Group<Var>;
pub type TypeGroup = Group<Type>;
pub type ImportGroup = Group<Import>;

impl<T> Default for Group<T> {
    fn default() -> Self {
        Group {
            comment: String::new(),
            items: Vec::new(),
        }
    }
}

impl<T: Member> Group<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(item: T) -> Self {
        Self::from_items([item])
    }

    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Group {
            comment: String::new(),
            items: items.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Rendered as a bare declaration rather than a parenthesized block.
    ///
    /// Depends on the element's own comment only; the group comment is
    /// written in either form.
    pub fn is_inline(&self) -> bool {
        matches!(self.items.as_slice(), [only] if only.comment().is_empty())
    }
}

impl<'g, T> IntoIterator for &'g Group<T> {
    type Item = &'g T;
    type IntoIter = std::slice::Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Member> Node for Group<T> {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        for (i, item) in self.items.iter().enumerate() {
            item.validate_with(syntax)
                .within(|| format!("{}[{i}]", T::ITEMS))?;
        }
        Ok(())
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        ctx.comment(&self.comment);
        if let (true, [only]) = (self.is_inline(), self.items.as_slice()) {
            return only.render_to(ctx);
        }
        ctx.emit(T::KEYWORD);
        ctx.emit(" (");
        ctx.newline();
        ctx.indented(|ctx| {
            for (i, item) in self.items.iter().enumerate() {
                ctx.comment(item.comment());
                item.render_member(ctx)
                    .within(|| format!("{}[{i}]", T::ITEMS))?;
                ctx.newline();
            }
            Ok::<_, ModelError>(())
        })?;
        ctx.emit(")");
        ctx.newline();
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.items
            .iter()
            .try_for_each(|item| item.collect_imports(file, found))
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.items
            .iter_mut()
            .try_for_each(|item| item.rewrite_alias(rename))
    }
}
