use crate::parser::tests::{render, with_default_ns};

#[test]
fn defaults_conjoined_at_top() {
    let res = with_default_ns(&[0], "[[Category:City]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Namespace Main (0)
      Class City
    ");
    assert!(!res.namespaces_constrained);
}

#[test]
fn several_defaults_form_a_disjunction() {
    let res = with_default_ns(&[0, 12], "[[Category:City]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      Disjunction
        Namespace Main (0)
        Namespace Help (12)
      Class City
    ");
}

#[test]
fn defaults_wrap_all_alternatives() {
    let res = with_default_ns(&[0], "[[A::B]] OR [[C::D]]");

    insta::assert_snapshot!(render(&res), @r#"
    Conjunction
      Namespace Main (0)
      Disjunction
        SomeProperty A
          Value A = page "B" [ns 0]
        SomeProperty C
          Value C = page "D" [ns 0]
    "#);
    assert!(!res.namespaces_constrained);
}

#[test]
fn explicit_namespace_retrofits_earlier_alternatives() {
    let res = with_default_ns(&[0], "[[Foo::Bar]] OR [[Talk:Page]]");

    insta::assert_snapshot!(render(&res), @r#"
    Disjunction
      Conjunction
        SomeProperty Foo
          Value Foo = page "Bar" [ns 0]
        Namespace Main (0)
      Value = page "Talk:Page" [ns 1]
    "#);
    assert!(res.namespaces_constrained);
    assert!(
        res.description
            .children()
            .iter()
            .all(|branch| branch.has_namespace_condition())
    );
}

#[test]
fn later_alternatives_get_defaults_appended() {
    let res = with_default_ns(&[0], "[[A::B]] OR [[Talk:P]] OR [[C::D]]");

    insta::assert_snapshot!(render(&res), @r#"
    Disjunction
      Conjunction
        SomeProperty A
          Value A = page "B" [ns 0]
        Namespace Main (0)
      Value = page "Talk:P" [ns 1]
      Conjunction
        SomeProperty C
          Value C = page "D" [ns 0]
        Namespace Main (0)
    "#);
}

#[test]
fn retrofit_happens_once() {
    let res = with_default_ns(&[0], "[[A::B]] OR [[Talk:P]] OR [[Help:+]]");

    insta::assert_snapshot!(render(&res), @r#"
    Disjunction
      Conjunction
        SomeProperty A
          Value A = page "B" [ns 0]
        Namespace Main (0)
      Value = page "Talk:P" [ns 1]
      Namespace Help (12)
    "#);
}

#[test]
fn nested_level_inherits_retrofit_state() {
    let res = with_default_ns(&[0], "[[Help:+]] OR <q>[[Category:A]]</q>");

    insta::assert_snapshot!(render(&res), @r"
    Disjunction
      Namespace Help (12)
      Conjunction
        Class A
        Namespace Main (0)
    ");
}

#[test]
fn no_defaults_no_namespace_conditions() {
    let res = with_default_ns(&[], "[[Category:City]]");

    insta::assert_snapshot!(render(&res), @"Class City");
}

#[test]
fn retrofit_replaces_plain_plus() {
    let res = with_default_ns(&[0], "+ || [[Talk:Page]]");

    insta::assert_snapshot!(render(&res), @r#"
    Disjunction
      Namespace Main (0)
      Value = page "Talk:Page" [ns 1]
    "#);
    assert!(res.namespaces_constrained);
}
