//! Collaborators the parser consults for property names and literal values.
//!
//! The parser only depends on the [`PropertyResolver`] and [`ValueParser`]
//! traits. [`SchemaResolver`] and [`LiteralValueParser`] are in-memory
//! defaults good enough for tooling and tests; a host with a real schema
//! plugs in its own.

mod property;
mod value;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use property::{ResolveError, SchemaResolver};
pub use value::{LiteralValueParser, ValueError, parse_page};

use crate::Error;
use crate::description::Description;

/// Datatype of a property's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Values are pages; the only type that can be followed in a chain.
    #[default]
    Page,
    Text,
    Number,
    Boolean,
    Date,
    Url,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Page => "page",
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Date => "date",
            ValueType::Url => "url",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" | "wikipage" => Ok(ValueType::Page),
            "text" | "string" => Ok(ValueType::Text),
            "number" => Ok(ValueType::Number),
            "boolean" | "bool" => Ok(ValueType::Boolean),
            "date" => Ok(ValueType::Date),
            "url" => Ok(ValueType::Url),
            _ => Err(Error::UnknownValueType(s.to_string())),
        }
    }
}

/// A resolved property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyRef {
    /// Normalized property name.
    pub key: String,
    pub type_id: ValueType,
    /// Queried from object to subject.
    pub inverse: bool,
}

impl PropertyRef {
    pub fn new(key: impl Into<String>, type_id: ValueType) -> Self {
        Self {
            key: key.into(),
            type_id,
            inverse: false,
        }
    }

    pub fn inverse(mut self, value: bool) -> Self {
        self.inverse = value;
        self
    }

    /// Whether values are pages, so `+`, `<q>` and chaining apply.
    ///
    /// Inverse properties always point back at pages.
    pub fn is_page_like(&self) -> bool {
        self.inverse || self.type_id == ValueType::Page
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverse {
            f.write_str("-")?;
        }
        f.write_str(&self.key)
    }
}

/// Maps a property name as written in a query to a [`PropertyRef`].
pub trait PropertyResolver {
    fn resolve(&self, name: &str) -> Result<PropertyRef, ResolveError>;
}

/// Turns literal value text into a value condition on `property`.
pub trait ValueParser {
    fn parse_value(&self, property: &PropertyRef, raw: &str) -> Result<Description, ValueError>;
}

impl<T: PropertyResolver + ?Sized> PropertyResolver for &T {
    fn resolve(&self, name: &str) -> Result<PropertyRef, ResolveError> {
        (**self).resolve(name)
    }
}

impl<T: ValueParser + ?Sized> ValueParser for &T {
    fn parse_value(&self, property: &PropertyRef, raw: &str) -> Result<Description, ValueError> {
        (**self).parse_value(property, raw)
    }
}
