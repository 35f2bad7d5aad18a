use crate::parser::tests::{parse_with, render};
use crate::{DiagnosticKind, Feature, ParserConfig, QueryFeatures};

fn without(feature: Feature) -> ParserConfig {
    ParserConfig::new().features(QueryFeatures::ALL.without(feature))
}

#[test]
fn disjunction_disabled_keeps_first_alternative() {
    let res = parse_with(
        without(Feature::Disjunction),
        "[[Category:Cat1]] OR [[Category:Cat2]]",
    );

    insta::assert_snapshot!(render(&res), @r"
    Class Cat1
    ---
    error at 0..38: disjunctions are disabled, dropped `[[Category:Cat2]]`
    ");
}

#[test]
fn disjunction_disabled_inside_category_block() {
    let res = parse_with(without(Feature::Disjunction), "[[Category:A||B]]");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 14..15: disjunctions are disabled, dropped `[[Category:B]]`
    ");
}

#[test]
fn conjunction_disabled() {
    let res = parse_with(without(Feature::Conjunction), "[[Category:A]] [[Category:B]]");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 15..29: conjunctions are disabled, dropped `[[Category:B]]`
    ");
}

#[test]
fn property_disabled() {
    let res = parse_with(without(Feature::Property), "[[Knows::Bob]] [[Category:A]]");

    insta::assert_snapshot!(render(&res), @r"
    Class A
    ---
    error at 0..14: query feature is disabled, dropped `[[Knows::Bob]]`
    ");
}

#[test]
fn category_disabled_leaves_block_empty() {
    let res = parse_with(without(Feature::Category), "[[Category:A]]");

    insta::assert_snapshot!(render(&res), @r"
    Thing
    ---
    error at 11..12: query feature is disabled, dropped `[[Category:A]]`
    error at 0..14: condition could not be understood
    error at 0..14: empty subquery or alternative
    ");
}

#[test]
fn namespace_disabled() {
    let res = parse_with(without(Feature::Namespace), "[[Help:+]]");

    assert_eq!(
        res.diagnostics.kinds(),
        vec![
            DiagnosticKind::FeatureDisabled,
            DiagnosticKind::BadQueryAtom,
            DiagnosticKind::EmptySubquery,
        ]
    );
}

#[test]
fn nothing_enabled() {
    let res = parse_with(
        ParserConfig::new().features(QueryFeatures::NONE),
        "[[Category:A]] [[Knows::Bob]] [[Main Page]]",
    );

    insta::assert_snapshot!(render(&res), @r#"
    Value = page "Main Page" [ns 0]
    ---
    error at 11..12: query feature is disabled, dropped `[[Category:A]]`
    error at 0..14: condition could not be understood
    error at 15..29: query feature is disabled, dropped `[[Knows::Bob]]`
    "#);
}
