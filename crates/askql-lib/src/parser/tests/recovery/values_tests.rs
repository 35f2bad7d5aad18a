use crate::parser::tests::{parse, render, schema};
use crate::{ParserConfig, QueryParser};

#[test]
fn invalid_number() {
    let res = parse("[[Age::old]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Age
      Thing
    ---
    error at 7..10: invalid value: `old` is not a number
    ");
}

#[test]
fn invalid_boolean_keeps_other_values() {
    let res = parse("[[Alive::maybe||no]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Alive
      Disjunction
        Thing
        Value Alive = false
    ---
    error at 9..14: invalid value: `maybe` is not a boolean
    ");
}

#[test]
fn missing_value() {
    let res = parse("[[Knows::]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Thing
    ---
    warning at 2..11: no usable value for `Knows`, matching any value
    ");
    assert!(res.is_valid());
}

#[test]
fn subproperty_of_value_property() {
    let res = parse("[[age.author::30]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Age
      Thing
    ---
    error at 2..12: cannot query sub-property `author` of a property without page values
    ");
}

#[test]
fn subquery_on_value_property() {
    let res = parse("[[Age::<q>[[Category:X]]</q>]] [[Category:Y]]");

    insta::assert_snapshot!(render(&res), @r"
    Conjunction
      SomeProperty Age
        Thing
      Class Y
    ---
    error at 7..10: `Age` does not have page values; subquery ignored
    ");
}

#[test]
fn unknown_property_with_strict_schema() {
    let parser = QueryParser::new(ParserConfig::new())
        .expect("valid config")
        .with_resolver(schema().default_type(None));
    let res = parser.parse("[[Editor::Bob]] [[Age::3]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Age
      Value Age = 3
    ---
    error at 2..8: unknown property: `Editor` is not declared
    error at 0..15: condition could not be understood
    ");
}

#[test]
fn chain_stops_before_undeclared_name() {
    let parser = QueryParser::new(ParserConfig::new())
        .expect("valid config")
        .with_resolver(schema().default_type(None));
    let res = parser.parse("[[Age.Editor::3]]");

    assert_eq!(res.diagnostics.len(), 1);
    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Age
      Thing
    ---
    error at 2..12: cannot query sub-property `Editor` of a property without page values
    ");
}

#[test]
fn invalid_property_name() {
    let res = parse("[[Has{brace::x]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 2..11: unknown property: `Has{brace` contains an illegal character
    error at 0..16: condition could not be understood
    error at 0..16: empty subquery or alternative
    ");
}

#[test]
fn unclosed_value_subquery() {
    let res = parse("[[Knows::<q>[[Category:A]]");

    insta::assert_snapshot!(render(&res), @r"
    SomeProperty Knows
      Class A
    ---
    error at 12..26: missing closing `</q>`
    error at 0..26: missing closing `]]`
    ");
}
