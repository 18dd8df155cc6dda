//! Property-based tests for the Go scanner and fragment checks.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use gogen_syntax::{literal_kind, tokenize, GoSyntax, LiteralKind, SyntaxCheck, TokenKind};
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-zA-Z0-9]{0,6}")
            .expect("valid regex")
            .prop_filter("not a keyword", |s| {
                !matches!(
                    s.as_str(),
                    "break" | "case" | "chan" | "const" | "continue" | "default" | "defer"
                        | "else" | "for" | "func" | "go" | "goto" | "if" | "import"
                        | "interface" | "map" | "package" | "range" | "return" | "select"
                        | "struct" | "switch" | "type" | "var"
                )
            }),
        (0u32..100_000).prop_map(|n| n.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("{s:?}")),
    ]
}

/// Binary expressions, possibly parenthesized and called.
fn expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "%", "<<", "&&", "||", "=="]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.prop_map(|e| format!("f({e})")),
        ]
    })
}

proptest! {
    #[test]
    fn checks_never_panic(src in "\\PC{0,40}") {
        let _ = GoSyntax.check_expr(&src);
        let _ = GoSyntax.check_body(&src);
        let _ = GoSyntax.check_file(&src);
        let _ = literal_kind(&src);
    }

    #[test]
    fn generated_expressions_are_accepted(expr in expression()) {
        prop_assert!(GoSyntax.check_expr(&expr).is_ok(), "{}: {:?}", expr, GoSyntax.check_expr(&expr));
        let body = format!("_ = {expr}");
        prop_assert!(GoSyntax.check_body(&body).is_ok(), "{}", body);
    }

    #[test]
    fn unbalanced_parentheses_are_rejected(expr in expression()) {
        let open = format!("({expr}");
        prop_assert!(GoSyntax.check_expr(&open).is_err());
    }

    #[test]
    fn decimal_literals_classify_as_int(n in any::<u32>()) {
        prop_assert_eq!(literal_kind(&n.to_string()), Some(LiteralKind::Int));
    }

    #[test]
    fn error_offsets_lie_within_input(src in "\\PC{0,40}") {
        if let Err(err) = GoSyntax.check_expr(&src) {
            prop_assert!(err.offset <= src.len());
        }
    }

    #[test]
    fn newline_after_identifier_inserts_semicolon(name in "[a-z][a-z0-9]{0,6}") {
        let tokens = tokenize(&format!("{name}\n")).unwrap();
        let last = tokens.last().unwrap();
        if tokens[0].kind == TokenKind::Ident {
            prop_assert_eq!(last.kind, TokenKind::Semi);
            prop_assert!(last.implicit);
        }
    }
}
