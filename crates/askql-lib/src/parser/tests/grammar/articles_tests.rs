use crate::parser::tests::{parse, render, with_default_ns};

#[test]
fn fixed_page() {
    let res = parse("[[Main Page]]");

    insta::assert_snapshot!(render(&res), @r#"Value = page "Main Page" [ns 0]"#);
    assert!(res.fixed_subject);
}

#[test]
fn fixed_page_in_namespace() {
    let res = parse("[[talk:Main_Page]]");

    insta::assert_snapshot!(render(&res), @r#"Value = page "Talk:Main Page" [ns 1]"#);
}

#[test]
fn page_alternatives() {
    let res = parse("[[Ann||Bob]]");

    insta::assert_snapshot!(render(&res), @r#"
    Disjunction
      Value = page "Ann" [ns 0]
      Value = page "Bob" [ns 0]
    "#);
}

#[test]
fn escaped_property_separator() {
    let res = parse("[[:Foo::Bar]]");

    insta::assert_snapshot!(render(&res), @r#"Value = page "Foo::Bar" [ns 0]"#);
}

#[test]
fn unknown_prefix_stays_in_title() {
    let res = parse("[[Star Wars: Episode IV]]");

    insta::assert_snapshot!(render(&res), @r#"Value = page "Star Wars: Episode IV" [ns 0]"#);
}

#[test]
fn namespace_restriction() {
    let res = parse("[[Help:+]]");

    insta::assert_snapshot!(render(&res), @"Namespace Help (12)");
    assert!(!res.fixed_subject);
}

#[test]
fn main_namespace_restriction() {
    let res = parse("[[:+]]");

    insta::assert_snapshot!(render(&res), @"Namespace Main (0)");
}

#[test]
fn namespace_alternatives() {
    let res = parse("[[Help:+||Talk:+]]");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Namespace Help (12)
      Namespace Talk (1)
    ");
}

#[test]
fn explicit_namespace_replaces_defaults() {
    let res = with_default_ns(&[0], "[[Help:+]]");

    insta::assert_snapshot!(render(&res), @"Namespace Help (12)");
    assert!(res.namespaces_constrained);
}
