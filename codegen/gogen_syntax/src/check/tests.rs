use super::*;
use pretty_assertions::assert_eq;

fn expr(src: &str) -> Result<(), SyntaxError> {
    GoSyntax.check_expr(src)
}

fn body(src: &str) -> Result<(), SyntaxError> {
    GoSyntax.check_body(src)
}

fn file(src: &str) -> Result<(), SyntaxError> {
    GoSyntax.check_file(src)
}

#[test]
fn accepts_common_initializers() {
    for src in [
        "5",
        "iota",
        "\"text\"",
        "`raw`",
        "(oldPackageName.value + 5) + iota",
        "-1 << 3",
        "time.Second * 10",
        "[]string{\"a\", \"b\"}",
        "map[string]int{\n\t\"a\": 1,\n}",
        "func(x int) bool {\n\treturn x > 0\n}",
        "errors.New(\"boom\")",
        "x.(fmt.Stringer)",
        "&Config{Name: \"x\"}",
        "<-ch",
        "!ok && *p != nil",
        "s[1:len(s)]",
        "struct{}{}",
    ] {
        assert_eq!(expr(src), Ok(()), "{src}");
    }
}

#[test]
fn rejects_empty_expression() {
    assert_eq!(expr("  \n").unwrap_err().kind, SyntaxErrorKind::Empty);
}

#[test]
fn rejects_dangling_operator() {
    let err = expr("a +").unwrap_err();
    assert_eq!(
        err.kind,
        SyntaxErrorKind::UnexpectedEof {
            expected: "an operand"
        }
    );
}

#[test]
fn rejects_adjacent_operands() {
    let err = expr("a b").unwrap_err();
    assert_eq!(err.offset, 2);
}

#[test]
fn rejects_statements_in_expressions() {
    assert!(expr("x = 1").is_err());
    assert!(expr("return x").is_err());
    assert!(expr("a; b").is_err());
    assert!(expr("a, b").is_err());
}

#[test]
fn rejects_unbalanced_delimiters() {
    assert_eq!(
        expr("(a + b").unwrap_err().kind,
        SyntaxErrorKind::Unclosed('(')
    );
    assert_eq!(expr("a)").unwrap_err().kind, SyntaxErrorKind::Unmatched(')'));
    assert_eq!(expr("[a)").unwrap_err().kind, SyntaxErrorKind::Unmatched(')'));
}

#[test]
fn rejects_binary_operator_at_start() {
    assert!(expr("/ 2").is_err());
    assert!(expr("a * / b").is_err());
}

#[test]
fn selector_needs_a_name() {
    assert!(expr("fmt.").is_err());
    assert!(expr("fmt.5").is_err());
}

#[test]
fn accepts_function_bodies() {
    for src in [
        "",
        "return nil",
        "if err != nil {\n\treturn err\n}\nreturn nil",
        "for i := 0; i < 10; i++ {\n\tfmt.Println(i)\n}",
        "x := map[string]int{}\nx[\"a\"]++",
    ] {
        assert_eq!(body(src), Ok(()), "{src:?}");
    }
}

#[test]
fn body_errors_are_reported_relative_to_the_fragment() {
    let err = body("return (").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::Unmatched('}'));
    assert_eq!(err.offset, 9);
}

#[test]
fn rejects_broken_bodies() {
    assert!(body("}").is_err());
    assert!(body("import \"fmt\"").is_err());
    assert!(body("\"unterminated").is_err());
}

#[test]
fn accepts_files() {
    let src = "// Package main.\npackage main\n\nimport (\n\t\"fmt\"\n)\n\nconst A = 1\n\ntype T struct {\n\tName string `json:\"name\"`\n}\n\nfunc main() {\n\tfmt.Println(A)\n}\n";
    assert_eq!(file(src), Ok(()));
}

#[test]
fn file_needs_package_clause() {
    assert_eq!(
        file("").unwrap_err().kind,
        SyntaxErrorKind::UnexpectedEof {
            expected: "package clause"
        }
    );
    assert!(file("func main() {}").is_err());
    assert!(file("package").is_err());
}

#[test]
fn imports_come_first() {
    let err = file("package p\nconst A = 1\nimport \"fmt\"\n").unwrap_err();
    assert_eq!(
        err.kind,
        SyntaxErrorKind::UnexpectedToken {
            found: "import".to_owned(),
            expected: "imports before other declarations",
        }
    );
}

#[test]
fn rejects_stray_top_level_tokens() {
    assert!(file("package p\nx := 1\n").is_err());
    assert!(file("package p\nfunc f() {\n").is_err());
    assert!(file("package p\nconst\n").is_err());
    assert!(file("package p\nvar x = 1 +").is_err());
}
