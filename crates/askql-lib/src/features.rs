//! Query feature set.
//!
//! Hosts restrict which constructs a query may use. A construct whose feature
//! is missing is dropped from the description with a diagnostic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// One query construct that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Property,
    Category,
    Concept,
    Namespace,
    Conjunction,
    Disjunction,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Property,
        Feature::Category,
        Feature::Concept,
        Feature::Namespace,
        Feature::Conjunction,
        Feature::Disjunction,
    ];

    /// Bit value, compatible with the integer masks used by wiki configuration.
    pub const fn bit(self) -> u32 {
        match self {
            Feature::Property => 1,
            Feature::Category => 2,
            Feature::Concept => 4,
            Feature::Namespace => 8,
            Feature::Conjunction => 16,
            Feature::Disjunction => 32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Property => "property",
            Feature::Category => "category",
            Feature::Concept => "concept",
            Feature::Namespace => "namespace",
            Feature::Conjunction => "conjunction",
            Feature::Disjunction => "disjunction",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| Error::UnknownFeature(s.trim().to_string()))
    }
}

/// Set of enabled [`Feature`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryFeatures(u32);

impl QueryFeatures {
    pub const NONE: Self = Self(0);
    pub const PROPERTY: Self = Self(Feature::Property.bit());
    pub const CATEGORY: Self = Self(Feature::Category.bit());
    pub const CONCEPT: Self = Self(Feature::Concept.bit());
    pub const NAMESPACE: Self = Self(Feature::Namespace.bit());
    pub const CONJUNCTION: Self = Self(Feature::Conjunction.bit());
    pub const DISJUNCTION: Self = Self(Feature::Disjunction.bit());
    pub const ALL: Self = Self(63);

    /// Builds a set from an integer mask, ignoring unknown bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub fn insert(&mut self, feature: Feature) {
        self.0 |= feature.bit();
    }

    pub fn remove(&mut self, feature: Feature) {
        self.0 &= !feature.bit();
    }

    /// Returns a copy with `feature` switched off.
    pub fn without(mut self, feature: Feature) -> Self {
        self.remove(feature);
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl Default for QueryFeatures {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::ops::BitOr for QueryFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Feature> for QueryFeatures {
    fn from(feature: Feature) -> Self {
        Self(feature.bit())
    }
}

impl FromIterator<Feature> for QueryFeatures {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        let mut set = Self::NONE;
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl fmt::Debug for QueryFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for QueryFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("all");
        }
        let names: Vec<&str> = self.iter().map(Feature::name).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses `all`, `none`, an integer mask, or a comma-separated list of names.
impl FromStr for QueryFeatures {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "all" => return Ok(Self::ALL),
            "none" | "" => return Ok(Self::NONE),
            _ => {}
        }
        if let Ok(bits) = s.parse::<u32>() {
            return Ok(Self::from_bits(bits));
        }
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Feature::from_str)
            .collect()
    }
}

impl Serialize for QueryFeatures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Feature::name))
    }
}

impl<'de> Deserialize<'de> for QueryFeatures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u32),
            Text(String),
            List(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) => Ok(Self::from_bits(bits)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Repr::List(names) => names
                .iter()
                .map(|n| n.parse::<Feature>())
                .collect::<Result<Self, _>>()
                .map_err(serde::de::Error::custom),
        }
    }
}
