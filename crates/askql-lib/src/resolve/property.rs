use indexmap::IndexMap;

use super::{PropertyRef, PropertyResolver, ValueType};
use crate::title::{is_illegal_title_char, normalize_title};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("empty property name")]
    Empty,

    #[error("`{0}` contains an illegal character")]
    IllegalCharacter(String),

    #[error("`{0}` is not declared")]
    NotFound(String),
}

/// In-memory property schema.
///
/// Names are normalized like titles before lookup. Undeclared names get
/// `default_type`, or fail when it is `None`. A leading `-` asks for the
/// inverse property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaResolver {
    types: IndexMap<String, ValueType>,
    default_type: Option<ValueType>,
}

impl Default for SchemaResolver {
    fn default() -> Self {
        Self {
            types: IndexMap::new(),
            default_type: Some(ValueType::Page),
        }
    }
}

impl SchemaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that only knows declared properties.
    pub fn strict() -> Self {
        Self::default().default_type(None)
    }

    pub fn default_type(mut self, value: Option<ValueType>) -> Self {
        self.default_type = value;
        self
    }

    pub fn with(mut self, name: &str, type_id: ValueType) -> Self {
        self.insert(name, type_id);
        self
    }

    pub fn insert(&mut self, name: &str, type_id: ValueType) {
        self.types.insert(normalize_title(name), type_id);
    }

    /// Adds a `NAME=TYPE` declaration.
    pub fn declare(&mut self, spec: &str) -> Result<()> {
        let Some((name, type_name)) = spec.split_once('=') else {
            return Err(Error::InvalidPropertySpec(spec.to_string()));
        };
        if name.trim().is_empty() {
            return Err(Error::InvalidPropertySpec(spec.to_string()));
        }
        let type_id = type_name.parse()?;
        self.insert(name, type_id);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ValueType> {
        self.types.get(&normalize_title(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl PropertyResolver for SchemaResolver {
    fn resolve(&self, name: &str) -> std::result::Result<PropertyRef, ResolveError> {
        let trimmed = name.trim();
        let (inverse, bare) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let key = normalize_title(bare);
        if key.is_empty() {
            return Err(ResolveError::Empty);
        }
        if key.contains(is_illegal_title_char) {
            return Err(ResolveError::IllegalCharacter(key));
        }

        let type_id = match self.types.get(&key) {
            Some(type_id) => *type_id,
            None => self
                .default_type
                .ok_or_else(|| ResolveError::NotFound(key.clone()))?,
        };

        Ok(PropertyRef::new(key, type_id).inverse(inverse))
    }
}
