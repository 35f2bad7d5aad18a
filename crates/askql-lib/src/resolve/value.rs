use super::{PropertyRef, ValueParser, ValueType};
use crate::description::{Comparator, DataValue, Description, PageRef, ValueDescription};
use crate::namespaces::{MAIN, Namespaces};
use crate::title::valid_title;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("empty value")]
    Empty,

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("`{0}` is not a boolean")]
    NotABoolean(String),

    #[error("`{0}` is not a valid page title")]
    IllegalCharacter(String),
}

/// Parses literals by property type: pages, numbers, booleans, and plain
/// text for everything else.
#[derive(Debug, Clone, Default)]
pub struct LiteralValueParser {
    namespaces: Namespaces,
}

impl LiteralValueParser {
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    pub fn parse_page(&self, raw: &str) -> Result<PageRef, ValueError> {
        parse_page(&self.namespaces, raw)
    }
}

impl ValueParser for LiteralValueParser {
    fn parse_value(&self, property: &PropertyRef, raw: &str) -> Result<Description, ValueError> {
        let (comparator, rest) = Comparator::split(raw.trim());
        let literal = rest.trim();
        if literal.is_empty() {
            return Err(ValueError::Empty);
        }

        let value = if property.is_page_like() {
            DataValue::Page(self.parse_page(literal)?)
        } else {
            match property.type_id {
                ValueType::Number => DataValue::Number(parse_number(literal)?),
                ValueType::Boolean => DataValue::Boolean(parse_boolean(literal)?),
                _ => DataValue::Text(literal.to_string()),
            }
        };

        Ok(Description::Value(ValueDescription {
            property: Some(property.key.clone()),
            comparator,
            value,
        }))
    }
}

fn parse_number(literal: &str) -> Result<f64, ValueError> {
    let cleaned: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValueError::NotANumber(literal.to_string())),
    }
}

fn parse_boolean(literal: &str) -> Result<bool, ValueError> {
    match literal.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ValueError::NotABoolean(literal.to_string())),
    }
}

/// Reads `Talk:Page`, `[[Talk:Page]]` or `:Page` as a page in its namespace.
///
/// A prefix that is not a known namespace stays part of the title.
pub fn parse_page(namespaces: &Namespaces, raw: &str) -> Result<PageRef, ValueError> {
    let mut text = raw.trim();
    if let Some(inner) = text
        .strip_prefix("[[")
        .and_then(|rest| rest.strip_suffix("]]"))
    {
        text = inner.trim();
    }
    let text = text.strip_prefix(':').unwrap_or(text);

    let (namespace, prefix, title) = match text.split_once(':') {
        Some((prefix, rest)) => match namespaces.id(prefix) {
            Some(id) if id != MAIN => {
                let canonical = namespaces.name(id).unwrap_or(prefix).to_string();
                (id, canonical, rest)
            }
            _ => (MAIN, String::new(), text),
        },
        None => (MAIN, String::new(), text),
    };

    let title =
        valid_title(title).ok_or_else(|| ValueError::IllegalCharacter(raw.trim().to_string()))?;
    Ok(PageRef {
        namespace,
        prefix,
        title,
    })
}
