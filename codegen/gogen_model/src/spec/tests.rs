use super::*;
use crate::Field;
use pretty_assertions::assert_eq;

fn int() -> SimpleSpec {
    SimpleSpec::new("int")
}

fn render(spec: impl Into<Spec>) -> String {
    let spec: Spec = spec.into();
    spec.render().unwrap()
}

fn failure(spec: impl Into<Spec>) -> String {
    let spec: Spec = spec.into();
    spec.validate().unwrap_err().to_string()
}

#[derive(Debug, Clone, PartialEq)]
struct Mock;

impl ExternalSpec for Mock {
    fn type_name(&self) -> &str {
        "MockSpec"
    }

    fn clone_spec(&self) -> Box<dyn ExternalSpec> {
        Box::new(Mock)
    }
}

#[test]
fn simple_forms() {
    assert_eq!(render(int()), "int");
    assert_eq!(render(SimpleSpec::qualified("http", "Client").pointer()), "*http.Client");
    assert!(SimpleSpec::new("T").pointer().is_pointer);
}

#[test]
fn simple_validation() {
    assert_eq!(failure(SimpleSpec::new("")), "TypeName: is required");
    assert_eq!(
        failure(SimpleSpec::qualified("a.b", "T")),
        "PackageName: `a.b` is not a valid identifier"
    );
    assert_eq!(
        failure(SimpleSpec::new("a½")),
        "TypeName: `a½` is not a valid identifier"
    );
}

#[test]
fn array_prefixes() {
    assert_eq!(render(ArraySpec::slice(int())), "[]int");
    assert_eq!(render(ArraySpec::fixed(int(), 4)), "[4]int");
    assert_eq!(render(ArraySpec::ellipsis(int())), "[...]int");
    assert_eq!(
        render(ArraySpec::slice(FuncSpec::new([], [Field::embedded(int())]))),
        "[]func () (int)"
    );
}

#[test]
fn array_length_laws() {
    assert!(Spec::from(ArraySpec::fixed(int(), 3)).validate().is_ok());
    assert!(Spec::from(ArraySpec::ellipsis(int())).validate().is_ok());
    assert_eq!(
        failure(ArraySpec::fixed(int(), -2)),
        "Length: must not be negative, got -2"
    );
    let mut both = ArraySpec::ellipsis(int());
    both.length = 2;
    assert_eq!(failure(both), "IsEllipsis: cannot be set together with Length 2");
}

#[test]
fn map_with_func_value() {
    let handler = FuncSpec::new([Field::embedded(SimpleSpec::new("string"))], []);
    assert_eq!(
        render(MapSpec::new(SimpleSpec::new("string"), handler)),
        "map[string]func (string)"
    );
    assert_eq!(
        failure(MapSpec::new(SimpleSpec::new(""), int())),
        "Key.TypeName: is required"
    );
}

#[test]
fn empty_composites() {
    assert_eq!(render(StructSpec::default()), "struct{}");
    assert_eq!(render(InterfaceSpec::default()), "interface{}");
}

#[test]
fn struct_members() {
    let spec = StructSpec::new([
        Field::named("ID", int()).with_tag(r#"json:"id""#),
        Field::embedded(SimpleSpec::qualified("sync", "Mutex")).with_comment("guards ID"),
        Field::named(
            "Inner",
            StructSpec::new([Field::named("N", int())]),
        ),
    ]);
    assert_eq!(
        render(spec),
        "struct {\n\tID int \"json:\\\"id\\\"\"\n\t// guards ID\n\tsync.Mutex\n\tInner struct {\n\t\tN int\n\t}\n}"
    );
}

#[test]
fn struct_embedding_rule() {
    let spec = StructSpec::new([Field::embedded(ArraySpec::slice(int()))]);
    assert_eq!(
        failure(spec),
        "Fields[0].Spec: embedded field must be a SimpleSpec, got ArraySpec"
    );
}

#[test]
fn interface_members() {
    let read = FuncSpec::new(
        [Field::named("p", ArraySpec::slice(SimpleSpec::new("byte")))],
        [
            Field::named("n", int()),
            Field::named("err", SimpleSpec::new("error")),
        ],
    );
    let spec = InterfaceSpec::new([
        Field::embedded(SimpleSpec::qualified("io", "Closer")),
        Field::named("Read", read).with_comment("Read fills p."),
    ]);
    assert_eq!(spec.methods().count(), 1);
    assert_eq!(
        render(spec),
        "interface {\n\tio.Closer\n\t// Read fills p.\n\tRead(p []byte) (n int, err error)\n}"
    );
}

#[test]
fn interface_member_rules() {
    let pointer = InterfaceSpec::new([Field::embedded(SimpleSpec::new("Base").pointer())]);
    assert_eq!(
        failure(pointer),
        "Fields[0].Spec: embedded interface must not be a pointer"
    );
    let unnamed = InterfaceSpec::new([Field::embedded(FuncSpec::default())]);
    assert_eq!(failure(unnamed), "Fields[0].Name: method requires a name");
    let field = InterfaceSpec::new([Field::named("Count", int())]);
    assert_eq!(
        failure(field),
        "Fields[0].Spec: method must be a FuncSpec, got SimpleSpec"
    );
}

#[test]
fn variadic_rendering() {
    let spec = FuncSpec::new(
        [
            Field::named("format", SimpleSpec::new("string")),
            Field::named("args", ArraySpec::slice(SimpleSpec::new("any"))),
        ],
        [],
    )
    .variadic();
    assert_eq!(render(spec), "(format string, args ...any)");
}

#[test]
fn variadic_laws() {
    assert_eq!(
        failure(FuncSpec::default().variadic()),
        "IsVariadic: requires at least one parameter"
    );
    let scalar = FuncSpec::new([Field::embedded(int())], []).variadic();
    assert_eq!(
        failure(scalar),
        "Params[0].Spec: variadic parameter must be an ArraySpec, got SimpleSpec"
    );
    let fixed = FuncSpec::new([Field::embedded(ArraySpec::fixed(int(), 2))], []).variadic();
    assert!(Spec::from(fixed).validate().unwrap_err().is_invariant());
    let ok = FuncSpec::new([Field::embedded(ArraySpec::slice(int()))], []).variadic();
    assert!(Spec::from(ok).validate().is_ok());
}

#[test]
fn results_are_uniformly_named() {
    let mixed = FuncSpec::new(
        [],
        [Field::named("n", int()), Field::embedded(SimpleSpec::new("error"))],
    );
    assert_eq!(failure(mixed), "Results: must be all named or all unnamed");
}

#[test]
fn single_result_is_parenthesized() {
    let spec = FuncSpec::new([], [Field::embedded(SimpleSpec::new("error"))]);
    assert_eq!(render(spec), "() (error)");
}

#[test]
fn commented_params_break_lines() {
    let spec = FuncSpec::new(
        [
            Field::named("ctx", SimpleSpec::qualified("context", "Context")),
            Field::named("id", int()).with_comment("row id"),
        ],
        [],
    );
    assert_eq!(
        render(spec),
        "(\n\tctx context.Context,\n\t// row id\n\tid int,\n)"
    );
}

#[test]
fn foreign_spec_is_an_invalid_type() {
    let spec = Spec::from(ForeignSpec::new(Mock));
    assert_eq!(spec.kind(), "MockSpec");
    assert_eq!(spec.validate().unwrap_err().to_string(), "Spec: invalid type MockSpec");
    assert!(spec.render().is_err());
    assert_eq!(spec.clone(), spec);
    let wrapped = ArraySpec::slice(spec);
    assert_eq!(
        failure(wrapped),
        "Value.Spec: invalid type MockSpec"
    );
}

#[test]
fn clones_are_independent() {
    let original = Spec::from(StructSpec::new([Field::named("A", int())]));
    let mut copy = original.clone();
    assert_eq!(copy, original);
    if let Spec::Struct(spec) = &mut copy {
        spec.fields[0].name = "B".to_owned();
    }
    assert_ne!(copy, original);
}

#[test]
fn failed_rename_leaves_tree_untouched() {
    let mut spec = Spec::from(StructSpec::new([
        Field::named("A", SimpleSpec::qualified("old", "T")),
        Field::named("B", ForeignSpec::new(Mock)),
    ]));
    let before = spec.clone();
    let err = spec.rename_imports("old", "new").unwrap_err();
    assert_eq!(err.to_string(), "Spec: invalid type MockSpec");
    assert_eq!(spec, before);
    let Spec::Struct(fields) = &spec else {
        panic!("expected a struct");
    };
    assert_eq!(fields.fields[0].spec.as_simple().unwrap().package_name, "old");
}

#[test]
fn variant_accessors() {
    let func = Spec::from(FuncSpec::new([Field::embedded(int())], []));
    assert_eq!(func.as_func().map(|f| f.params.len()), Some(1));
    assert!(func.as_simple().is_none());
    assert!(Spec::from(int()).as_func().is_none());

    let spec = InterfaceSpec::new([
        Field::embedded(SimpleSpec::qualified("io", "Reader")),
        Field::named("Close", FuncSpec::default()),
    ]);
    let embeds: Vec<_> = spec.embeds().map(|f| f.spec.kind()).collect();
    assert_eq!(embeds, ["SimpleSpec"]);
}
