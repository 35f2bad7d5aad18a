//! Indented tree dump of a description.

use std::fmt::Write;

use super::{DataValue, Description, ValueDescription};

pub struct DescriptionPrinter<'d> {
    description: &'d Description,
    with_types: bool,
}

impl<'d> DescriptionPrinter<'d> {
    pub fn new(description: &'d Description) -> Self {
        Self {
            description,
            with_types: false,
        }
    }

    /// Append the resolved value type to property nodes.
    pub fn with_types(mut self, value: bool) -> Self {
        self.with_types = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.description, 0, w)
    }

    fn format_node(&self, node: &Description, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match node {
            Description::Thing => writeln!(w, "{prefix}Thing"),
            Description::Class(name) => writeln!(w, "{prefix}Class {name}"),
            Description::Concept(name) => writeln!(w, "{prefix}Concept {name}"),
            Description::Namespace(ns) => {
                let name = if ns.name.is_empty() { "Main" } else { &ns.name };
                writeln!(w, "{prefix}Namespace {name} ({})", ns.id)
            }
            Description::Value(value) => {
                write!(w, "{prefix}Value ")?;
                format_value(value, w)?;
                writeln!(w)
            }
            Description::SomeProperty(p) => {
                write!(w, "{prefix}SomeProperty {}", p.property)?;
                if self.with_types {
                    write!(w, ": {}", p.property.type_id)?;
                }
                writeln!(w)?;
                self.format_node(&p.description, indent + 1, w)
            }
            Description::Conjunction(children) => {
                writeln!(w, "{prefix}Conjunction")?;
                for child in children {
                    self.format_node(child, indent + 1, w)?;
                }
                Ok(())
            }
            Description::Disjunction(children) => {
                writeln!(w, "{prefix}Disjunction")?;
                for child in children {
                    self.format_node(child, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }
}

fn format_value(value: &ValueDescription, w: &mut impl Write) -> std::fmt::Result {
    if let Some(property) = &value.property {
        write!(w, "{property} ")?;
    }
    write!(w, "{} ", value.comparator.operator())?;
    match &value.value {
        DataValue::Page(page) => write!(w, "page \"{page}\" [ns {}]", page.namespace),
        DataValue::Text(text) => write!(w, "\"{text}\""),
        DataValue::Number(n) => write!(w, "{n}"),
        DataValue::Boolean(b) => write!(w, "{b}"),
    }
}
