use crate::DiagnosticKind;
use crate::parser::tests::{parse, render};

#[test]
fn empty_block() {
    let res = parse("[[]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 0..4: condition could not be understood
    error at 0..4: empty subquery or alternative
    ");
}

#[test]
fn missing_closing_brackets() {
    let res = parse("[[Category:A");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 0..12: missing closing `]]`
    ");
}

#[test]
fn misplaced_symbol_resyncs_on_brackets() {
    let res = parse("[[Knows::<q>[[Category:A]]</q> x]] [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      SomeProperty Knows
        Class A
      Class B
    ---
    error at 31..32: misplaced symbol `x`
    ");
}

#[test]
fn misplaced_symbol_without_brackets() {
    let res = parse("[[Knows::<q>[[Category:A]]</q> x y z");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Class A
    ---
    error at 31..36: misplaced symbol `x y z`
    error at 0..36: missing closing `]]`
    ");
}

#[test]
fn subquery_inside_article_block() {
    let res = parse("[[<q>[[Category:A]]</q>]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 2..5: subquery is not allowed here
    error at 0..25: condition could not be understood
    error at 0..25: empty subquery or alternative
    ");
}

#[test]
fn invalid_category_name() {
    let res = parse("[[Category:A{b]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 11..14: `A{b` is not a valid title
    error at 0..16: condition could not be understood
    error at 0..16: empty subquery or alternative
    ");
}

#[test]
fn unknown_namespace() {
    let res = parse("[[Nowhere:+]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 2..11: `Nowhere` is not a known namespace
    error at 0..13: condition could not be understood
    error at 0..13: empty subquery or alternative
    ");
}

#[test]
fn control_character_in_page_title() {
    let res = parse("[[\u{0}]]");

    assert_eq!(
        res.diagnostics.kinds(),
        vec![
            DiagnosticKind::InvalidTitle,
            DiagnosticKind::BadQueryAtom,
            DiagnosticKind::EmptySubquery,
        ]
    );
    assert_eq!(res.description, crate::Description::Thing);
}

#[test]
fn invalid_page_keeps_other_alternatives() {
    let res = parse("[[Ann||B{ob]]");

    insta::assert_snapshot!(render(&res), @r#"
    Value = page "Ann" [ns 0]
    ---
    error at 7..11: `B{ob` is not a valid title
    "#);
}

#[test]
fn diagnostics_render_against_source() {
    let res = parse("[[Category:A]] ]]");
    let rendered = res.diagnostics.printer().source(res.source()).render();

    assert!(rendered.contains("error: unexpected fragment `]]`"));
    assert!(rendered.contains("1 | [[Category:A]] ]]"));
    assert!(rendered.contains("^^"));
}
