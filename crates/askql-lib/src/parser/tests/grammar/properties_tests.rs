use crate::parser::tests::{parse, render, with_default_ns};

#[test]
fn page_value() {
    let res = parse("[[Located in::Germany]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Located in
      Value Located in = page "Germany" [ns 0]
    "#);
}

#[test]
fn property_names_are_normalized() {
    let res = parse("[[located_in::germany]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Located in
      Value Located in = page "Germany" [ns 0]
    "#);
}

#[test]
fn comparator_on_number() {
    let res = parse("[[Population::>100000]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Population
      Value Population >= 100000
    ");
}

#[test]
fn strict_comparators() {
    let res = parse("[[Age::<<18]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Age
      Value Age < 18
    ");
}

#[test]
fn value_alternatives() {
    let res = parse("[[Knows::Ann||Bob]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Knows
      Disjunction
        Value Knows = page "Ann" [ns 0]
        Value Knows = page "Bob" [ns 0]
    "#);
}

#[test]
fn bracketed_value_keeps_nested_link() {
    let res = parse("[[knows::[[John Smith]]]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Knows
      Value Knows = page "John Smith" [ns 0]
    "#);
    assert!(res.diagnostics.is_empty());
}

#[test]
fn value_with_namespace() {
    let res = parse("[[Discussed on::Talk:Main Page]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Discussed on
      Value Discussed on = page "Talk:Main Page" [ns 1]
    "#);
}

#[test]
fn text_and_boolean_values() {
    let res = parse("[[Name::~Jo*]] [[Alive::yes]]");

    insta::assert_snapshot!(render(&res), @r#"
    Conjunction
      SomeProperty Name
        Value Name ~ "Jo*"
      SomeProperty Alive
        Value Alive = true
    "#);
}

#[test]
fn assignment_separator() {
    let res = parse("[[Name:=Jo]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Name
      Value Name = "Jo"
    "#);
}

#[test]
fn property_chain() {
    let res = parse("[[author.age::30]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Author
      SomeProperty Age
        Value Age = 30
    ");
}

#[test]
fn leading_space_keeps_dotted_name() {
    let res = parse("[[ Has.dot::x]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Has.dot
      Value Has.dot = page "X" [ns 0]
    "#);
}

#[test]
fn inverse_property() {
    let res = parse("[[-Knows::Bob]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty -Knows
      Value Knows = page "Bob" [ns 0]
    "#);
}

#[test]
fn any_value() {
    let res = parse("[[Knows::+]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Thing
    ");
}

#[test]
fn any_value_uses_default_namespaces() {
    let res = with_default_ns(&[0], "[[Knows::+]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Namespace Main (0)
    ");
    assert!(res.namespaces_constrained);
}

#[test]
fn any_value_on_number_ignores_default_namespaces() {
    let res = with_default_ns(&[0], "[[Age::+]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Namespace Main (0)
      SomeProperty Age
        Thing
    ");
    assert!(!res.namespaces_constrained);
}

#[test]
fn subquery_value() {
    let res = parse("[[Knows::<q>[[Category:Person]]</q>]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Class Person
    ");
}

#[test]
fn subquery_value_gets_default_namespaces() {
    let res = with_default_ns(&[0], "[[Knows::<q>[[Category:Person]]</q>]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Namespace Main (0)
      SomeProperty Knows
        Conjunction
          Class Person
          Namespace Main (0)
    ");
}

#[test]
fn subquery_and_literal_alternatives() {
    let res = parse("[[Knows::<q>[[Category:Person]]</q>||Bob]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Knows
      Disjunction
        Class Person
        Value Knows = page "Bob" [ns 0]
    "#);
}

#[test]
fn labelled_property() {
    let res = parse("[[Knows::Bob|friends]]");

    insta::assert_snapshot!(render(&res), @r#"
    SomeProperty Knows
      Value Knows = page "Bob" [ns 0]
    "#);
    assert_eq!(res.label, "friends");
}
