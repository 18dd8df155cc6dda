//! One Go source file.

use gogen_syntax::SyntaxCheck;

use crate::decl::{ConstGroup, Func, Import, ImportGroup, Type, TypeGroup, VarGroup};
use crate::error::Within;
use crate::ident::{require, require_identifier};
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Annotations, ImportSet, Node, Result};

/// Declarations of one file, in rendering order.
///
/// A non-empty `content` is the file's text: rendering returns it verbatim
/// and the declaration lists are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub name: String,
    pub package_name: String,
    pub content: String,
    pub comment: String,
    pub annotations: Annotations,
    pub import_groups: Vec<ImportGroup>,
    pub const_groups: Vec<ConstGroup>,
    pub var_groups: Vec<VarGroup>,
    pub type_groups: Vec<TypeGroup>,
    pub funcs: Vec<Func>,
}

impl File {
    pub fn new(name: impl Into<String>, package_name: impl Into<String>) -> Self {
        File {
            name: name.into(),
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Every import of every import group.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.import_groups.iter().flat_map(|group| group.iter())
    }

    pub fn find_func(&self, name: &str) -> Option<&Func> {
        self.funcs.iter().find(|func| func.name == name)
    }

    pub fn find_type(&self, name: &str) -> Option<&Type> {
        self.type_groups
            .iter()
            .flat_map(|group| group.iter())
            .find(|ty| ty.name == name)
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    pub fn set_annotations(&mut self, annotations: Annotations) {
        self.annotations = annotations;
    }

    fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        let imports = self.import_groups.iter().map(Section::Imports);
        let consts = self.const_groups.iter().map(Section::Consts);
        let vars = self.var_groups.iter().map(Section::Vars);
        let types = self.type_groups.iter().map(Section::Types);
        let funcs = self.funcs.iter().map(Section::Func);
        imports.chain(consts).chain(vars).chain(types).chain(funcs)
    }
}

/// One top-level block of a synthesized file.
#[derive(Clone, Copy)]
enum Section<'a> {
    Imports(&'a ImportGroup),
    Consts(&'a ConstGroup),
    Vars(&'a VarGroup),
    Types(&'a TypeGroup),
    Func(&'a Func),
}

impl Section<'_> {
    fn is_empty(self) -> bool {
        match self {
            Section::Imports(group) => group.is_empty(),
            Section::Consts(group) => group.is_empty(),
            Section::Vars(group) => group.is_empty(),
            Section::Types(group) => group.is_empty(),
            Section::Func(_) => false,
        }
    }

    fn render<E: Emitter>(self, ctx: &mut RenderContext<E>) -> Result<()> {
        match self {
            Section::Imports(group) => group.render_to(ctx),
            Section::Consts(group) => group.render_to(ctx),
            Section::Vars(group) => group.render_to(ctx),
            Section::Types(group) => group.render_to(ctx),
            Section::Func(func) => func.render_to(ctx),
        }
    }
}

impl Node for File {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        let at = || format!("File({})", self.name);
        require("Name", &self.name).within(at)?;
        require_identifier("PackageName", &self.package_name).within(at)?;
        self.annotations.validate().within(at)?;
        if !self.content.is_empty() {
            syntax.check_file(&self.content)?;
        }
        for (i, group) in self.import_groups.iter().enumerate() {
            group.validate_with(syntax)
                .within(|| format!("ImportGroups[{i}]"))
                .within(at)?;
        }
        for (i, group) in self.const_groups.iter().enumerate() {
            group.validate_with(syntax)
                .within(|| format!("ConstGroups[{i}]"))
                .within(at)?;
        }
        for (i, group) in self.var_groups.iter().enumerate() {
            group.validate_with(syntax)
                .within(|| format!("VarGroups[{i}]"))
                .within(at)?;
        }
        for (i, group) in self.type_groups.iter().enumerate() {
            group.validate_with(syntax)
                .within(|| format!("TypeGroups[{i}]"))
                .within(at)?;
        }
        for (i, func) in self.funcs.iter().enumerate() {
            func.validate_with(syntax)
                .within(|| format!("Funcs[{i}]"))
                .within(at)?;
        }
        Ok(())
    }

    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        if !self.content.is_empty() {
            ctx.emit_raw(&self.content);
            return Ok(());
        }
        ctx.comment(&self.comment);
        ctx.emit("package ");
        ctx.emit(&self.package_name);
        ctx.newline();
        for section in self.sections().filter(|section| !section.is_empty()) {
            ctx.newline();
            section.render(ctx)?;
        }
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        found.collect_text(file, &self.content);
        for section in self.sections() {
            match section {
                // declaring an import is not a use of it
                Section::Imports(_) => {}
                Section::Consts(group) => group.collect_imports(file, found)?,
                Section::Vars(group) => group.collect_imports(file, found)?,
                Section::Types(group) => group.collect_imports(file, found)?,
                Section::Func(func) => func.collect_imports(file, found)?,
            }
        }
        Ok(())
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        rename.rewrite_text(&mut self.content);
        for group in &mut self.import_groups {
            group.rewrite_alias(rename)?;
        }
        for group in &mut self.const_groups {
            group.rewrite_alias(rename)?;
        }
        for group in &mut self.var_groups {
            group.rewrite_alias(rename)?;
        }
        for group in &mut self.type_groups {
            group.rewrite_alias(rename)?;
        }
        for func in &mut self.funcs {
            func.rewrite_alias(rename)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
