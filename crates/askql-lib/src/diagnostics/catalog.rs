//! Message catalogs turn diagnostic codes into display text.

use indexmap::IndexMap;

use super::message::{DiagnosticKind, DiagnosticMessage};

/// Source of message templates, looked up by [`DiagnosticKind::key`].
///
/// Templates use `{}` for the diagnostic's detail parameter.
pub trait MessageCatalog {
    fn template(&self, kind: DiagnosticKind, with_detail: bool) -> String;

    fn render(&self, message: &DiagnosticMessage) -> String {
        let template = self.template(message.kind, message.detail.is_some());
        match &message.detail {
            Some(detail) => template.replace("{}", detail),
            None => template,
        }
    }
}

/// Built-in English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn template(&self, kind: DiagnosticKind, with_detail: bool) -> String {
        if with_detail {
            kind.custom_message()
        } else {
            kind.fallback_message().to_string()
        }
    }
}

/// Catalog with per-key overrides, falling back to [`DefaultCatalog`].
///
/// The same template serves messages with and without detail; a template
/// without `{}` simply ignores the detail.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    templates: IndexMap<String, String>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MessageCatalog for MapCatalog {
    fn template(&self, kind: DiagnosticKind, with_detail: bool) -> String {
        match self.templates.get(kind.key()) {
            Some(template) => template.clone(),
            None => DefaultCatalog.template(kind, with_detail),
        }
    }
}

impl FromIterator<(String, String)> for MapCatalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}
