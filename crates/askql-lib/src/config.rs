//! Parser configuration.

use serde::Deserialize;

use crate::description::Description;
use crate::features::QueryFeatures;
use crate::namespaces::Namespaces;

pub const DEFAULT_RECURSION_LIMIT: u32 = 16;

/// Settings for a [`crate::QueryParser`].
///
/// Loadable from JSON; every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Constructs the parser may produce.
    pub features: QueryFeatures,
    /// Namespaces a query is restricted to unless it names its own.
    pub default_namespaces: Option<Vec<i32>>,
    /// Localized category prefix; `Category` is always understood too.
    pub category_prefix: String,
    /// Localized concept prefix; `Concept` is always understood too.
    pub concept_prefix: String,
    pub namespaces: Namespaces,
    /// Maximum `<q>` nesting depth.
    pub recursion_limit: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            features: QueryFeatures::ALL,
            default_namespaces: None,
            category_prefix: "Category".to_string(),
            concept_prefix: "Concept".to_string(),
            namespaces: Namespaces::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(mut self, features: QueryFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn default_namespaces(mut self, ids: Option<Vec<i32>>) -> Self {
        self.default_namespaces = ids;
        self
    }

    pub fn category_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.category_prefix = prefix.into();
        self
    }

    pub fn concept_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.concept_prefix = prefix.into();
        self
    }

    pub fn namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// The description injected for default namespaces: one `Namespace`, or a
    /// disjunction of them. `None` when there is no restriction.
    pub fn default_namespace_description(&self) -> Option<Description> {
        let ids = self.default_namespaces.as_ref()?;
        let items = ids
            .iter()
            .map(|id| Description::Namespace(self.namespaces.reference(*id)))
            .collect();
        Description::any_of(items)
    }
}
