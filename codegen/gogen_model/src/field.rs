//! Members of struct, interface and function types.

use gogen_syntax::SyntaxCheck;

use crate::error::Within;
use crate::ident::optional_identifier;
use crate::render::{Emitter, RenderContext};
use crate::{AliasRename, Annotations, File, ImportSet, ModelError, Node, Result, Spec};

/// A named or unnamed member pairing a type with its documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Empty for embedded members and unnamed parameters.
    pub name: String,
    /// Struct tag, without quotes.
    pub tag: String,
    pub comment: String,
    pub annotations: Annotations,
    pub spec: Spec,
}

impl Field {
    pub fn named(name: impl Into<String>, spec: impl Into<Spec>) -> Self {
        Field {
            name: name.into(),
            tag: String::new(),
            comment: String::new(),
            annotations: Annotations::new(),
            spec: spec.into(),
        }
    }

    /// An unnamed member: an embedded type or an unnamed parameter.
    pub fn embedded(spec: impl Into<Spec>) -> Self {
        Self::named("", spec)
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
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

    /// `[Name ]Type`, or `[Name ]...Elem` for a variadic parameter.
    pub(crate) fn render_typed<E: Emitter>(
        &self,
        ctx: &mut RenderContext<E>,
        variadic: bool,
    ) -> Result<()> {
        if self.is_named() {
            ctx.emit(&self.name);
            ctx.emit(" ");
        }
        match &self.spec {
            Spec::Array(array) if variadic => {
                ctx.emit("...");
                array.value.render_type(ctx)
            }
            _ if variadic => Err(ModelError::invariant(
                "Spec",
                format!("variadic parameter must be a slice, got {}", self.spec.kind()),
            )),
            spec => spec.render_type(ctx),
        }
    }
}

impl Node for Field {
    fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        optional_identifier("Name", &self.name)?;
        self.annotations.validate()?;
        self.spec.validate_with(syntax).within(|| "Spec")
    }

    /// Comment lines, then `[Name ]Type[ tag]` without a line break.
    fn render_to<E: Emitter>(&self, ctx: &mut RenderContext<E>) -> Result<()> {
        ctx.comment(&self.comment);
        self.render_typed(ctx, false)?;
        if !self.tag.is_empty() {
            ctx.emit(" ");
            ctx.emit(&quote_tag(&self.tag));
        }
        Ok(())
    }

    fn collect_imports<'f>(&self, file: &'f File, found: &mut ImportSet<'f>) -> Result<()> {
        self.spec.collect_imports(file, found)
    }

    fn rewrite_alias(&mut self, rename: &AliasRename) -> Result<()> {
        self.spec.rewrite_alias(rename)
    }
}

/// Interpreted string literal for a struct tag.
fn quote_tag(tag: &str) -> String {
    let mut quoted = String::with_capacity(tag.len() + 2);
    quoted.push('"');
    for c in tag.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArraySpec, SimpleSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn named_member_with_tag() {
        let field = Field::named("ID", SimpleSpec::new("int")).with_tag(r#"json:"id""#);
        assert_eq!(
            field.render().ok(),
            Some(r#"ID int "json:\"id\"""#.to_owned())
        );
        let plain = Field::named("ID", SimpleSpec::new("int")).with_tag("json");
        assert_eq!(plain.render().ok(), Some(r#"ID int "json""#.to_owned()));
    }

    #[test]
    fn tag_escapes() {
        assert_eq!(quote_tag("a`b\"c\\d\n"), r#""a`b\"c\\d\n""#);
    }

    #[test]
    fn comment_precedes_member() {
        let field = Field::embedded(SimpleSpec::qualified("io", "Reader"))
            .with_comment("Source of bytes.");
        assert_eq!(
            field.render().ok(),
            Some("// Source of bytes.\nio.Reader".to_owned())
        );
    }

    #[test]
    fn name_must_be_identifier() {
        let field = Field::named("a-b", SimpleSpec::new("int"));
        assert_eq!(
            field.validate().map_err(|e| e.to_string()),
            Err("Name: `a-b` is not a valid identifier".to_owned())
        );
    }

    #[test]
    fn spec_errors_are_located() {
        let field = Field::named("xs", ArraySpec::fixed(SimpleSpec::new("int"), -1));
        assert_eq!(
            field.validate().map_err(|e| e.to_string()),
            Err("Spec.Length: must not be negative, got -1".to_owned())
        );
    }
}
