//! Packages and the storage that holds them.

use std::path::Path;

use gogen_syntax::{GoSyntax, SyntaxCheck};
use rustc_hash::FxHashSet;

use crate::error::Within;
use crate::ident::{last_path_segment, require};
use crate::{File, ModelError, Node, Result};

/// Files sharing one package, located at an absolute path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Namespace {
    /// Import path of the package.
    pub name: String,
    /// Directory on disk.
    pub path: String,
    /// Excluded from generation; must hold no files.
    pub is_ignored: bool,
    pub files: Vec<File>,
}

fn require_key(argument: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ModelError::precondition(argument, "must not be empty"));
    }
    Ok(())
}

impl Namespace {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_with(&GoSyntax)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(namespace = %self.name))]
    pub fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        let at = || format!("Namespace({})", self.name);
        require("Name", &self.name).within(at)?;
        require("Path", &self.path).within(at)?;
        if !Path::new(&self.path).is_absolute() {
            return Err(ModelError::invariant(
                "Path",
                format!("`{}` is not absolute", self.path),
            )
            .within(at()));
        }
        if self.is_ignored && !self.files.is_empty() {
            return Err(ModelError::invariant(
                "IsIgnored",
                format!("ignored namespace holds {} files", self.files.len()),
            )
            .within(at()));
        }

        let mut names = FxHashSet::default();
        let mut package: Option<&str> = None;
        for (i, file) in self.files.iter().enumerate() {
            let in_file = || format!("Files[{i}]");
            if !names.insert(file.name.as_str()) {
                return Err(ModelError::invariant(
                    "Name",
                    format!("duplicate file name {}", file.name),
                )
                .within(in_file())
                .within(at()));
            }
            match package {
                Some(expected) if expected != file.package_name => {
                    return Err(ModelError::invariant(
                        "PackageName",
                        format!("{} differs from {expected}", file.package_name),
                    )
                    .within(in_file())
                    .within(at()));
                }
                Some(_) => {}
                None => package = Some(&file.package_name),
            }
            file.validate_with(syntax).within(at)?;
        }
        tracing::debug!(files = self.files.len(), "namespace valid");
        Ok(())
    }

    /// Package name of the files, or the last segment of the name when
    /// there are none.
    pub fn package_name(&self) -> &str {
        match self.files.first() {
            Some(file) => &file.package_name,
            None => last_path_segment(&self.name),
        }
    }

    pub fn find_file_by_name(&self, name: &str) -> Result<Option<&File>> {
        require_key("name", name)?;
        Ok(self.files.iter().find(|file| file.name == name))
    }

    pub fn find_file_by_name_mut(&mut self, name: &str) -> Result<Option<&mut File>> {
        require_key("name", name)?;
        Ok(self.files.iter_mut().find(|file| file.name == name))
    }
}

/// Root collection of namespaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Storage {
    pub namespaces: Vec<Namespace>,
}

impl Storage {
    pub fn new(namespaces: impl IntoIterator<Item = Namespace>) -> Self {
        Storage {
            namespaces: namespaces.into_iter().collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_with(&GoSyntax)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(namespaces = self.namespaces.len()))]
    pub fn validate_with(&self, syntax: &dyn SyntaxCheck) -> Result<()> {
        let mut names = FxHashSet::default();
        let mut paths = FxHashSet::default();
        for (i, namespace) in self.namespaces.iter().enumerate() {
            let at = || format!("Namespaces[{i}]");
            namespace.validate_with(syntax)?;
            if !names.insert(namespace.name.as_str()) {
                return Err(ModelError::invariant(
                    "Name",
                    format!("duplicate namespace name {}", namespace.name),
                )
                .within(at()));
            }
            if !paths.insert(namespace.path.as_str()) {
                return Err(ModelError::invariant(
                    "Path",
                    format!("duplicate namespace path {}", namespace.path),
                )
                .within(at()));
            }
        }
        Ok(())
    }

    pub fn find_namespace_by_name(&self, name: &str) -> Result<Option<&Namespace>> {
        require_key("name", name)?;
        Ok(self.namespaces.iter().find(|ns| ns.name == name))
    }

    pub fn find_namespace_by_name_mut(&mut self, name: &str) -> Result<Option<&mut Namespace>> {
        require_key("name", name)?;
        Ok(self.namespaces.iter_mut().find(|ns| ns.name == name))
    }

    pub fn find_namespace_by_path(&self, path: &str) -> Result<Option<&Namespace>> {
        require_key("path", path)?;
        Ok(self.namespaces.iter().find(|ns| ns.path == path))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
