//! Query descriptions: the typed result of parsing.
//!
//! A [`Description`] is a condition on wiki pages. Leaves test category or
//! concept membership, the namespace, or a value; [`Description::SomeProperty`]
//! descends through a property; conjunctions and disjunctions combine
//! conditions and always hold at least two children.

mod builder;
mod printer;


use std::fmt;

use serde::Serialize;

pub use builder::{Rejection, combine};
pub use printer::DescriptionPrinter;

use crate::features::Feature;
use crate::resolve::PropertyRef;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Description {
    /// Matches every page.
    Thing,
    /// Member of the named category.
    Class(String),
    /// Satisfies the named concept.
    Concept(String),
    Namespace(NamespaceRef),
    Value(ValueDescription),
    SomeProperty(SomeProperty),
    Conjunction(Vec<Description>),
    Disjunction(Vec<Description>),
}

/// "Has `property` with a value matching `description`".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SomeProperty {
    pub property: PropertyRef,
    pub description: Box<Description>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceRef {
    pub id: i32,
    pub name: String,
}

/// Value condition. `property` is `None` when the subject itself is pinned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueDescription {
    pub property: Option<String>,
    pub comparator: Comparator,
    pub value: DataValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataValue {
    Page(PageRef),
    Text(String),
    Number(f64),
    Boolean(bool),
}

/// A page, split into namespace and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub namespace: i32,
    /// Namespace name as written before the title; empty for the main namespace.
    pub prefix: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    #[default]
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Like,
    NotLike,
}

impl Comparator {
    /// Prefix that selects this comparator in query text.
    pub fn prefix(self) -> &'static str {
        match self {
            Comparator::Equal => "",
            Comparator::NotEqual => "!",
            Comparator::Less => "<<",
            Comparator::Greater => ">>",
            Comparator::LessEqual => "<",
            Comparator::GreaterEqual => ">",
            Comparator::Like => "~",
            Comparator::NotLike => "!~",
        }
    }

    /// Operator used in tree dumps.
    pub fn operator(self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::Less => "<",
            Comparator::Greater => ">",
            Comparator::LessEqual => "<=",
            Comparator::GreaterEqual => ">=",
            Comparator::Like => "~",
            Comparator::NotLike => "!~",
        }
    }

    /// Splits a leading comparator off `text`. Longer prefixes win.
    pub fn split(text: &str) -> (Comparator, &str) {
        const PREFIXES: &[(&str, Comparator)] = &[
            ("!~", Comparator::NotLike),
            ("<<", Comparator::Less),
            (">>", Comparator::Greater),
            ("≤", Comparator::LessEqual),
            ("≥", Comparator::GreaterEqual),
            ("!", Comparator::NotEqual),
            ("<", Comparator::LessEqual),
            (">", Comparator::GreaterEqual),
            ("~", Comparator::Like),
        ];
        for (prefix, comparator) in PREFIXES {
            if let Some(rest) = text.strip_prefix(prefix) {
                return (*comparator, rest);
            }
        }
        (Comparator::Equal, text)
    }
}

impl Description {
    /// Feature a host must enable for this node; `None` for always-allowed nodes.
    pub fn feature(&self) -> Option<Feature> {
        match self {
            Description::SomeProperty(_) => Some(Feature::Property),
            Description::Class(_) => Some(Feature::Category),
            Description::Concept(_) => Some(Feature::Concept),
            Description::Namespace(_) => Some(Feature::Namespace),
            Description::Conjunction(_) => Some(Feature::Conjunction),
            Description::Disjunction(_) => Some(Feature::Disjunction),
            Description::Thing | Description::Value(_) => None,
        }
    }

    pub fn some_property(property: PropertyRef, description: Description) -> Self {
        Description::SomeProperty(SomeProperty {
            property,
            description: Box::new(description),
        })
    }

    /// Disjunction of `items`, collapsing to the single item or `None`.
    pub fn any_of(mut items: Vec<Description>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Description::Disjunction(items)),
        }
    }

    pub fn is_thing(&self) -> bool {
        matches!(self, Description::Thing)
    }

    pub fn children(&self) -> &[Description] {
        match self {
            Description::Conjunction(children) | Description::Disjunction(children) => children,
            _ => &[],
        }
    }

    /// Whether this node (or any conjunct of it) restricts the namespace.
    pub fn has_namespace_condition(&self) -> bool {
        match self {
            Description::Namespace(_) => true,
            Description::Value(ValueDescription {
                property: None,
                value: DataValue::Page(_),
                ..
            }) => true,
            Description::Conjunction(children) => {
                children.iter().any(Description::has_namespace_condition)
            }
            Description::Disjunction(children) => {
                children.iter().all(Description::has_namespace_condition)
            }
            _ => false,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Description::SomeProperty(p) => 1 + p.description.size(),
            Description::Conjunction(children) | Description::Disjunction(children) => {
                1 + children.iter().map(Description::size).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Nesting depth, counting property steps and containers.
    pub fn depth(&self) -> usize {
        match self {
            Description::SomeProperty(p) => 1 + p.description.depth(),
            Description::Conjunction(children) | Description::Disjunction(children) => {
                1 + children.iter().map(Description::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    pub fn printer(&self) -> DescriptionPrinter<'_> {
        DescriptionPrinter::new(self)
    }

    /// The value part of `[[property::...]]`.
    fn fmt_as_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Thing => f.write_str("+"),
            Description::Value(v) => write!(f, "{}{}", v.comparator.prefix(), v.value),
            Description::Disjunction(children)
                if children.iter().all(|c| matches!(c, Description::Value(_))) =>
            {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("||")?;
                    }
                    child.fmt_as_value(f)?;
                }
                Ok(())
            }
            other => write!(f, "<q>{other}</q>"),
        }
    }
}

/// Query-string form, used in diagnostics and for round-tripping.
impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Thing => f.write_str("+"),
            Description::Class(name) => write!(f, "[[Category:{name}]]"),
            Description::Concept(name) => write!(f, "[[Concept:{name}]]"),
            Description::Namespace(ns) => write!(f, "[[{}:+]]", ns.name),
            Description::Value(v) => match &v.property {
                None => write!(f, "[[{}{}]]", v.comparator.prefix(), v.value),
                Some(property) => {
                    write!(f, "[[{property}::{}{}]]", v.comparator.prefix(), v.value)
                }
            },
            Description::SomeProperty(p) => {
                write!(f, "[[{}::", p.property)?;
                p.description.fmt_as_value(f)?;
                f.write_str("]]")
            }
            Description::Conjunction(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    match child {
                        Description::Disjunction(_) => write!(f, "<q>{child}</q>")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
            Description::Disjunction(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" OR ")?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Page(page) => write!(f, "{page}"),
            DataValue::Text(text) => f.write_str(text),
            DataValue::Number(n) => write!(f, "{n}"),
            DataValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            f.write_str(&self.title)
        } else {
            write!(f, "{}:{}", self.prefix, self.title)
        }
    }
}
