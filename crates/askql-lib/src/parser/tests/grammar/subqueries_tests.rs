use crate::Description;
use crate::parser::tests::{parse, render, with_default_ns};

#[test]
fn conjunction_of_blocks() {
    let res = parse("[[Category:City]] [[Located in::Germany]]");

    insta::assert_snapshot!(render(&res), @r#"
    Conjunction
      Class City
      SomeProperty Located in
        Value Located in = page "Germany" [ns 0]
    "#);
}

#[test]
fn or_between_blocks() {
    let res = parse("[[Category:A]] OR [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Class A
      Class B
    ");
}

#[test]
fn double_bar_between_blocks() {
    let res = parse("[[Category:A]] || [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Class A
      Class B
    ");
}

#[test]
fn alternatives_are_flattened() {
    let res = parse("[[Category:A]] OR [[Category:B]] OR [[Category:C]]");

    assert_eq!(res.description.children().len(), 3);
    assert!(res.diagnostics.is_empty());
}

#[test]
fn conjunction_binds_tighter_than_or() {
    let res = parse("[[Category:A]] [[Category:B]] OR [[Category:C]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Conjunction
        Class A
        Class B
      Class C
    ");
}

#[test]
fn nested_subquery() {
    let res = parse("[[Category:A]] <q>[[Category:B]] OR [[Category:C]]</q>");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Class A
      Disjunction
        Class B
        Class C
    ");
    assert!(res.diagnostics.is_empty());
}

#[test]
fn nested_conjunction_is_flattened() {
    let res = parse("[[Category:A]] <q>[[Category:B]] [[Category:C]]</q>");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Class A
      Class B
      Class C
    ");
}

#[test]
fn plus_between_blocks_is_ignored() {
    let res = parse("[[Category:A]] +");

    insta::assert_snapshot!(render(&res), @"Class A");
    assert!(res.diagnostics.is_empty());
}

#[test]
fn delimiters_are_case_insensitive() {
    let res = parse("<Q>[[Category:A]]</Q>");

    insta::assert_snapshot!(render(&res), @"Class A");
    assert!(res.diagnostics.is_empty());
}

#[test]
fn labels_are_collected() {
    let res = parse("[[Category:A|Towns]] [[Category:B|, villages]]");

    assert_eq!(res.label, "Towns, villages");
    assert!(res.diagnostics.is_empty());
}

#[test]
fn whole_query_prints_back() {
    let res = parse("[[Category:Person]] [[Knows::<q>[[Age::>30]]</q>]]");

    insta::assert_snapshot!(res.description.to_string(), @"[[Category:Person]] [[Knows::<q>[[Age::>30]]</q>]]");
}

#[test]
fn printed_query_parses_to_same_description() {
    let res = parse("[[Category:A]] <q>[[Knows::Ann||Bob]] OR [[Help:+]]</q>");
    let again = parse(&res.description.to_string());

    assert!(again.diagnostics.is_empty());
    assert_eq!(again.description, res.description);
}

#[test]
fn plain_plus_is_thing() {
    let res = parse("+");

    assert_eq!(res.description, Description::Thing);
    assert!(res.diagnostics.is_empty());
}

#[test]
fn plus_as_alternative() {
    let res = parse("+ || [[Category:A]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Thing
      Class A
    ");
}

#[test]
fn plus_next_to_block_adds_nothing() {
    let res = parse("[[Category:A]] +");

    insta::assert_snapshot!(render(&res), @"Class A");
}

#[test]
fn plain_plus_takes_default_namespaces() {
    let res = with_default_ns(&[0], "+");

    insta::assert_snapshot!(render(&res), @"Namespace Main (0)");
}
