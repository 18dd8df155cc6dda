//! Top-level declarations and the groups that batch them.

mod func;
mod group;
mod import;
mod value;

pub use func::Func;
pub use group::{ConstGroup, Group, ImportGroup, Member, TypeGroup, VarGroup};
pub use import::Import;
pub use value::{Const, Type, Var};

/// Metadata accessors shared by every declaration kind.
macro_rules! annotated {
    ($($decl:ty),* $(,)?) => {
        $(impl $decl {
            pub fn annotations(&self) -> &$crate::Annotations {
                &self.annotations
            }

            pub fn annotations_mut(&mut self) -> &mut $crate::Annotations {
                &mut self.annotations
            }

            pub fn set_annotations(&mut self, annotations: $crate::Annotations) {
                self.annotations = annotations;
            }
        })*
    };
}

annotated!(Const, Var, Type, Func, Import);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
