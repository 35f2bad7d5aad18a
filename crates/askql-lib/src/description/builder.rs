//! Combining fragments into conjunctions and disjunctions.

use super::Description;
use crate::diagnostics::DiagnosticKind;
use crate::features::{Feature, QueryFeatures};

/// A fragment that `combine` refused to add.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub kind: DiagnosticKind,
    /// Query-string form of the dropped fragment.
    pub fragment: String,
}

impl Rejection {
    fn new(kind: DiagnosticKind, fragment: &Description) -> Self {
        Self {
            kind,
            fragment: fragment.to_string(),
        }
    }
}

/// Adds `new` to `current`, conjunctively or disjunctively.
///
/// Containers of the requested kind are extended in place, and a `new`
/// container of that kind has its children absorbed, so repeated
/// combination never nests same-kind wrappers. When `new` (or the container
/// needed to hold it) is disabled in `features`, `current` comes back
/// unchanged together with the rejection.
///
/// `None` stands for an absent fragment; callers substitute [`Description::Thing`]
/// at their boundary.
pub fn combine(
    current: Option<Description>,
    new: Option<Description>,
    conjunctive: bool,
    features: QueryFeatures,
) -> (Option<Description>, Option<Rejection>) {
    let Some(new) = new else {
        return (current, None);
    };

    if let Some(feature) = new.feature()
        && !features.contains(feature)
    {
        let kind = match feature {
            Feature::Conjunction => DiagnosticKind::NoConjunctions,
            Feature::Disjunction => DiagnosticKind::NoDisjunctions,
            _ => DiagnosticKind::FeatureDisabled,
        };
        return (current, Some(Rejection::new(kind, &new)));
    }

    let Some(current) = current else {
        return (Some(new), None);
    };

    match (current, conjunctive) {
        (Description::Conjunction(mut children), true) => {
            absorb(&mut children, new, true);
            (Some(Description::Conjunction(children)), None)
        }
        (Description::Disjunction(mut children), false) => {
            absorb(&mut children, new, false);
            (Some(Description::Disjunction(children)), None)
        }
        (current, conjunctive) => {
            let (feature, kind) = if conjunctive {
                (Feature::Conjunction, DiagnosticKind::NoConjunctions)
            } else {
                (Feature::Disjunction, DiagnosticKind::NoDisjunctions)
            };
            if !features.contains(feature) {
                return (Some(current), Some(Rejection::new(kind, &new)));
            }

            let mut children = vec![current];
            absorb(&mut children, new, conjunctive);
            let container = if conjunctive {
                Description::Conjunction(children)
            } else {
                Description::Disjunction(children)
            };
            (Some(container), None)
        }
    }
}

fn absorb(children: &mut Vec<Description>, new: Description, conjunctive: bool) {
    match new {
        Description::Conjunction(inner) if conjunctive => children.extend(inner),
        Description::Disjunction(inner) if !conjunctive => children.extend(inner),
        other => children.push(other),
    }
}
