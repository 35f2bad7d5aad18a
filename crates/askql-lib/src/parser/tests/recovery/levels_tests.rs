use crate::parser::tests::{parse, parse_with, render};
use crate::{DiagnosticKind, ParserConfig};

#[test]
fn garbage_between_blocks() {
    let res = parse("[[A::B]] garbage [[C::D]]");

    insta::assert_snapshot!(render(&res), @r#"
    Conjunction
      SomeProperty A
        Value A = page "B" [ns 0]
      SomeProperty C
        Value C = page "D" [ns 0]
    ---
    error at 9..16: unexpected fragment `garbage`
    "#);
}

#[test]
fn only_garbage() {
    let res = parse("garbage");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 0..7: unexpected fragment `garbage`
    error at 7..7: empty subquery or alternative
    ");
}

#[test]
fn empty_query() {
    let res = parse("");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 0..0: empty subquery or alternative
    ");
}

#[test]
fn empty_alternative() {
    let res = parse("[[Category:A]] || || [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Class A
      Class B
    ---
    error at 18..20: empty subquery or alternative
    ");
}

#[test]
fn subquery_with_only_failed_blocks() {
    let res = parse("<q>[[Category:]]</q>");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 3..16: condition could not be understood
    error at 3..20: empty subquery or alternative
    error at 0..20: empty subquery or alternative
    ");
}

#[test]
fn stray_closing_brackets() {
    let res = parse("[[Category:A]] ]]");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 15..17: unexpected fragment `]]`
    ");
}

#[test]
fn unclosed_subquery_keeps_content() {
    let res = parse("<q>[[Category:A]]");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 3..17: missing closing `</q>`
    ");
}

#[test]
fn too_many_closing_drops_level() {
    let res = parse("[[Category:A]] </q> [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 15..19: too many closing `</q>`
    ");
}

#[test]
fn too_many_closing_after_subquery() {
    let res = parse("<q>[[Category:A]]</q></q>");

    assert_eq!(res.diagnostics.kinds(), vec![DiagnosticKind::TooManyClosing]);
}

#[test]
fn nesting_too_deep_is_skipped() {
    let config = ParserConfig::new().recursion_limit(2);
    let res = parse_with(config, "<q><q><q>[[Category:A]]</q></q></q> [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Class B
    ---
    error at 6..9: subqueries are nested too deeply
    error at 6..31: empty subquery or alternative
    error at 3..35: empty subquery or alternative
    ");
}

#[test]
fn nesting_within_limit() {
    let config = ParserConfig::new().recursion_limit(3);
    let res = parse_with(config, "<q><q><q>[[Category:A]]</q></q></q>");

    insta::assert_snapshot!(render(&res), @"Class A");
}

#[test]
fn recovery_is_per_call() {
    let parser = crate::QueryParser::new(ParserConfig::new()).expect("valid config");

    let bad = parser.parse("<q><q>[[Category:A]]");
    let good = parser.parse("[[Category:A]]");

    assert_eq!(bad.diagnostics.len(), 2);
    assert!(good.diagnostics.is_empty());
}
