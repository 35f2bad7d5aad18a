//! Namespace name ↔ id table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::description::NamespaceRef;
use crate::title::normalize_title;
use crate::{Error, Result};

pub const MAIN: i32 = 0;

const STANDARD: &[(i32, &str)] = &[
    (0, ""),
    (1, "Talk"),
    (2, "User"),
    (3, "User talk"),
    (4, "Project"),
    (5, "Project talk"),
    (6, "File"),
    (7, "File talk"),
    (8, "MediaWiki"),
    (9, "MediaWiki talk"),
    (10, "Template"),
    (11, "Template talk"),
    (12, "Help"),
    (13, "Help talk"),
    (14, "Category"),
    (15, "Category talk"),
    (102, "Property"),
    (103, "Property talk"),
    (108, "Concept"),
    (109, "Concept talk"),
];

/// Known namespaces, keyed by canonical name.
///
/// Lookup is case-insensitive and treats `_` as a space. Aliases map extra
/// names onto an existing id without changing its canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, i32>", into = "IndexMap<String, i32>")]
pub struct Namespaces {
    canonical: IndexMap<i32, String>,
    by_name: IndexMap<String, i32>,
}

impl Default for Namespaces {
    fn default() -> Self {
        let mut table = Self::empty();
        for &(id, name) in STANDARD {
            table.insert(id, name);
        }
        table
    }
}

impl Namespaces {
    pub fn empty() -> Self {
        Self {
            canonical: IndexMap::new(),
            by_name: IndexMap::new(),
        }
    }

    /// Registers a namespace. The first name registered for an id is canonical.
    pub fn insert(&mut self, id: i32, name: &str) {
        let name = normalize_title(name);
        self.by_name.insert(name.to_lowercase(), id);
        self.canonical.entry(id).or_insert(name);
    }

    /// Adds another name for an already known id.
    pub fn alias(&mut self, alias: &str, id: i32) -> Result<()> {
        if !self.canonical.contains_key(&id) {
            return Err(Error::UnknownNamespace(id.to_string()));
        }
        self.by_name.insert(normalize_title(alias).to_lowercase(), id);
        Ok(())
    }

    pub fn id(&self, name: &str) -> Option<i32> {
        self.by_name
            .get(&normalize_title(name).to_lowercase())
            .copied()
    }

    pub fn name(&self, id: i32) -> Option<&str> {
        self.canonical.get(&id).map(String::as_str)
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.canonical.contains_key(&id)
    }

    /// Reference to the namespace `id`; unknown ids get a numeric name.
    pub fn reference(&self, id: i32) -> NamespaceRef {
        let name = self
            .name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Namespace {id}"));
        NamespaceRef { id, name }
    }

    /// Resolves an id written either as a number or as a namespace name.
    pub fn lookup(&self, text: &str) -> Result<i32> {
        let text = text.trim();
        if let Ok(id) = text.parse::<i32>() {
            return Ok(id);
        }
        if text.eq_ignore_ascii_case("main") {
            return Ok(MAIN);
        }
        self.id(text)
            .ok_or_else(|| Error::UnknownNamespace(text.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.canonical.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

impl From<IndexMap<String, i32>> for Namespaces {
    fn from(map: IndexMap<String, i32>) -> Self {
        let mut table = Self::empty();
        for (name, id) in map {
            table.insert(id, &name);
        }
        table
    }
}

impl From<Namespaces> for IndexMap<String, i32> {
    fn from(table: Namespaces) -> Self {
        let mut map: IndexMap<String, i32> = table
            .canonical
            .iter()
            .map(|(id, name)| (name.clone(), *id))
            .collect();
        for (key, id) in &table.by_name {
            let is_canonical = table
                .name(*id)
                .is_some_and(|name| name.to_lowercase() == *key);
            if !is_canonical {
                map.insert(key.clone(), *id);
            }
        }
        map
    }
}
