//! Opaque metadata attached to declarations.
//!
//! Annotations come from an external comment parser. The model stores them,
//! validates them through their own hook and copies them, but never looks
//! inside. A cloned container holds fresh copies of every entry: a clone and
//! its origin never share an annotation value.

use std::any::Any;
use std::fmt;

use crate::{ModelError, Result};

/// A typed metadata value.
pub trait Annotation: fmt::Debug + Send + Sync + 'static {
    /// Name the annotation was written under, e.g. `di.constructor`.
    fn name(&self) -> &str;

    /// Self-check run by the owning node's validation.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Object-safe view used for storage.
trait Entry: Send + Sync {
    fn annotation(&self) -> &dyn Annotation;
    fn clone_entry(&self) -> Box<dyn Entry>;
    fn eq_entry(&self, other: &dyn Entry) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Annotation + Clone + PartialEq> Entry for T {
    fn annotation(&self) -> &dyn Annotation {
        self
    }

    fn clone_entry(&self) -> Box<dyn Entry> {
        Box::new(self.clone())
    }

    fn eq_entry(&self, other: &dyn Entry) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ordered annotation container.
#[derive(Default)]
pub struct Annotations {
    entries: Vec<Box<dyn Entry>>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Annotation + Clone + PartialEq>(&mut self, annotation: T) {
        self.entries.push(Box::new(annotation));
    }

    #[must_use]
    pub fn with<T: Annotation + Clone + PartialEq>(mut self, annotation: T) -> Self {
        self.push(annotation);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Annotation> {
        self.entries.iter().map(|e| e.annotation())
    }

    /// First annotation of type `T`.
    pub fn get<T: Annotation>(&self) -> Option<&T> {
        self.entries
            .iter()
            .find_map(|e| e.as_any().downcast_ref::<T>())
    }

    /// First annotation written under `name`.
    pub fn find(&self, name: &str) -> Option<&dyn Annotation> {
        self.iter().find(|a| a.name() == name)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (i, annotation) in self.iter().enumerate() {
            annotation.validate().map_err(|message| {
                ModelError::invariant(
                    format!("Annotations[{i}]"),
                    format!("{}: {message}", annotation.name()),
                )
            })?;
        }
        Ok(())
    }
}

impl Clone for Annotations {
    fn clone(&self) -> Self {
        Annotations {
            entries: self.entries.iter().map(|e| e.clone_entry()).collect(),
        }
    }
}

impl PartialEq for Annotations {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.eq_entry(b.as_ref()))
    }
}

impl fmt::Debug for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
