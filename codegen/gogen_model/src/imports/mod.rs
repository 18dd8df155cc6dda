//! Import resolution: which of a file's imports a subtree uses, and
//! renaming an alias throughout a subtree.

mod qualifier;

pub use qualifier::{references, rewrite_qualifier};

use std::borrow::Cow;

use regex::Regex;

use crate::decl::Import;
use crate::ident::is_identifier;
use crate::{File, ModelError, Result};

/// Imports of one file, deduplicated.
///
/// Two entries are the same import when they are the same object or agree
/// on alias, namespace and comment.
#[derive(Debug, Clone, Default)]
pub struct ImportSet<'f> {
    imports: Vec<&'f Import>,
}

impl<'f> ImportSet<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `import` unless an equivalent entry is present.
    pub fn insert(&mut self, import: &'f Import) -> bool {
        if self.contains(import) {
            return false;
        }
        self.imports.push(import);
        true
    }

    pub fn contains(&self, import: &Import) -> bool {
        self.imports
            .iter()
            .any(|known| std::ptr::eq(*known, import) || known.same_import(import))
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'f Import> + '_ {
        self.imports.iter().copied()
    }

    /// Owned copies, e.g. for adding to another file.
    pub fn to_owned_imports(&self) -> Vec<Import> {
        self.imports.iter().map(|i| (*i).clone()).collect()
    }

    /// Record every import of `file` whose alias is `package`.
    pub(crate) fn collect_qualifier(&mut self, file: &'f File, package: &str) {
        for import in file.imports() {
            if import.real_alias() == package && self.insert(import) {
                tracing::trace!(alias = package, namespace = %import.namespace, "import matched");
            }
        }
    }

    /// Record every import of `file` used as a qualifier inside `text`.
    pub(crate) fn collect_text(&mut self, file: &'f File, text: &str) {
        if text.is_empty() {
            return;
        }
        for import in file.imports() {
            if references(text, import.real_alias()) && self.insert(import) {
                tracing::trace!(namespace = %import.namespace, "import referenced in code");
            }
        }
    }
}

impl<'f> IntoIterator for ImportSet<'f> {
    type Item = &'f Import;
    type IntoIter = std::vec::IntoIter<&'f Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.into_iter()
    }
}

/// A validated alias rename, compiled once for a whole traversal.
#[derive(Debug, Clone)]
pub struct AliasRename {
    old: String,
    new: String,
    pattern: Regex,
}

impl AliasRename {
    pub fn new(old: &str, new: &str) -> Result<Self> {
        for (argument, value) in [("old", old), ("new", new)] {
            if !is_identifier(value) {
                return Err(ModelError::precondition(
                    argument,
                    format!("`{value}` is not a valid identifier"),
                ));
            }
        }
        let pattern =
            qualifier::pattern(old).map_err(|err| ModelError::precondition("old", err.to_string()))?;
        Ok(AliasRename {
            old: old.to_owned(),
            new: new.to_owned(),
            pattern,
        })
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_alias(&self) -> &str {
        &self.new
    }

    /// Rename a structural package reference in place.
    pub(crate) fn rewrite_name(&self, name: &mut String) {
        if *name == self.old {
            name.clone_from(&self.new);
        }
    }

    /// Rewrite qualifier uses inside free-form code in place.
    pub(crate) fn rewrite_text(&self, text: &mut String) {
        if text.is_empty() {
            return;
        }
        let rewritten = match qualifier::replace(&self.pattern, text.as_str(), &self.new) {
            Cow::Owned(rewritten) => rewritten,
            Cow::Borrowed(_) => return,
        };
        tracing::trace!(old = %self.old, new = %self.new, "rewrote qualifiers in code");
        *text = rewritten;
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rename_arguments_must_be_identifiers() {
        let err = AliasRename::new("", "x").unwrap_err();
        assert!(err.is_precondition());
        let err = AliasRename::new("a", "b.c").unwrap_err();
        assert_eq!(
            err,
            ModelError::precondition("new", "`b.c` is not a valid identifier")
        );
    }

    #[test]
    fn rewrite_text_in_place() {
        let rename = AliasRename::new("old", "new").unwrap_or_else(|e| panic!("{e}"));
        let mut text = "old.A + gold.B".to_owned();
        rename.rewrite_text(&mut text);
        assert_eq!(text, "new.A + gold.B");
    }

    #[test]
    fn rewrite_name_only_on_exact_match() {
        let rename = AliasRename::new("old", "new").unwrap_or_else(|e| panic!("{e}"));
        let mut exact = "old".to_owned();
        let mut other = "older".to_owned();
        rename.rewrite_name(&mut exact);
        rename.rewrite_name(&mut other);
        assert_eq!((exact.as_str(), other.as_str()), ("new", "older"));
    }

    #[test]
    fn set_deduplicates_by_value() {
        let a = Import::new("a/b/pkg");
        let b = Import::new("a/b/pkg");
        let c = Import::aliased("p", "a/b/pkg");
        let mut set = ImportSet::new();
        assert!(set.insert(&a));
        assert!(!set.insert(&a));
        assert!(!set.insert(&b));
        assert!(set.insert(&c));
        assert_eq!(set.len(), 2);
    }
}
