use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Constructor {
    provides: String,
}

impl Annotation for Constructor {
    fn name(&self) -> &str {
        "di.constructor"
    }

    fn validate(&self) -> Result<(), String> {
        if self.provides.is_empty() {
            return Err("provides must be set".to_owned());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tag(u32);

impl Annotation for Tag {
    fn name(&self) -> &str {
        "tag"
    }
}

fn constructor(provides: &str) -> Constructor {
    Constructor {
        provides: provides.to_owned(),
    }
}

#[test]
fn lookup_by_type_and_name() {
    let annotations = Annotations::new().with(Tag(7)).with(constructor("Repo"));
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations.get::<Tag>(), Some(&Tag(7)));
    assert_eq!(annotations.find("di.constructor").unwrap().name(), "di.constructor");
    assert!(annotations.find("missing").is_none());
}

#[test]
fn clone_copies_every_entry() {
    let original = Annotations::new().with(constructor("Repo")).with(Tag(1));
    let copy = original.clone();
    assert_eq!(copy, original);
    for (a, b) in original.iter().zip(copy.iter()) {
        let a = a as *const dyn Annotation as *const u8;
        let b = b as *const dyn Annotation as *const u8;
        assert!(!std::ptr::eq(a, b));
    }
}

#[test]
fn equality_compares_type_and_value() {
    let a = Annotations::new().with(Tag(1));
    assert_ne!(a, Annotations::new().with(Tag(2)));
    assert_ne!(a, Annotations::new().with(constructor("x")));
    assert_ne!(a, Annotations::new());
}

#[test]
fn validation_reports_the_entry() {
    let annotations = Annotations::new().with(Tag(1)).with(constructor(""));
    let err = annotations.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Annotations[1]: di.constructor: provides must be set"
    );
}

#[test]
fn clear_empties_the_container() {
    let mut annotations = Annotations::new().with(Tag(1));
    annotations.clear();
    assert!(annotations.is_empty());
}
