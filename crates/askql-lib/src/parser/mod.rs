//! Query-string parser.
//!
//! # Architecture
//!
//! A hand-written recursive-descent parser over chunks: the chunk reader
//! splits the remaining input at the next delimiter, and the grammar decides
//! what to read next from each chunk it sees.
//!
//! - One [`QueryParser`] holds the configuration and the precompiled stop sets
//!   and can be shared; every `parse` call creates its own state, so nested
//!   subqueries never see another call's delimiter stack or diagnostics.
//! - Description fragments are combined through
//!   [`crate::description::combine`], which flattens same-kind containers
//!   and enforces the feature set.
//!
//! # Recovery
//!
//! The parser never fails. Each problem is recorded as a diagnostic and the
//! affected fragment is dropped or weakened:
//!
//! 1. Unexpected text between blocks is reported and skipped
//! 2. A block with no usable content is reported and contributes nothing
//! 3. A block that does not end in `]]` is resynchronized on the next `]]`
//! 4. A stray `</q>` aborts its level; an unclosed `<q>` keeps what it parsed
//! 5. Subqueries nested deeper than the recursion limit are skipped

pub mod chunks;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

use crate::config::ParserConfig;
use crate::description::Description;
use crate::diagnostics::Diagnostics;
use crate::resolve::{LiteralValueParser, PropertyResolver, SchemaResolver, ValueParser};
use crate::{Error, Result};
use self::chunks::Patterns;
use self::core::ParseState;

/// Parses query strings under one configuration.
#[derive(Debug, Clone)]
pub struct QueryParser<R = SchemaResolver, V = LiteralValueParser> {
    config: ParserConfig,
    patterns: Patterns,
    default_ns: Option<Description>,
    resolver: R,
    values: V,
}

/// Result of one parse. The description is always present; problems are in
/// `diagnostics`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    source: String,
    pub description: Description,
    pub diagnostics: Diagnostics,
    /// Text collected from `[[...|label]]` blocks.
    pub label: String,
    /// Default namespaces were already applied inside the query.
    pub namespaces_constrained: bool,
    /// The query pins its subject to explicit pages.
    pub fixed_subject: bool,
}

impl QueryParser {
    /// Parser with the default property schema and literal value parser.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let values = LiteralValueParser::new(config.namespaces.clone());
        Self::with_collaborators(config, SchemaResolver::default(), values)
    }
}

impl<R: PropertyResolver, V: ValueParser> QueryParser<R, V> {
    pub fn with_collaborators(config: ParserConfig, resolver: R, values: V) -> Result<Self> {
        let patterns = Patterns::new(&config)?;
        let default_ns = config.default_namespace_description();
        Ok(Self {
            config,
            patterns,
            default_ns,
            resolver,
            values,
        })
    }

    pub fn with_resolver<R2: PropertyResolver>(self, resolver: R2) -> QueryParser<R2, V> {
        QueryParser {
            config: self.config,
            patterns: self.patterns,
            default_ns: self.default_ns,
            resolver,
            values: self.values,
        }
    }

    pub fn with_value_parser<V2: ValueParser>(self, values: V2) -> QueryParser<R, V2> {
        QueryParser {
            config: self.config,
            patterns: self.patterns,
            default_ns: self.default_ns,
            resolver: self.resolver,
            values,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parses `input`. Never fails: malformed parts become diagnostics.
    pub fn parse(&self, input: &str) -> ParsedQuery {
        let span = tracing::debug_span!("parse", len = input.len());
        let _enter = span.enter();

        let mut state = ParseState::new(
            input,
            &self.patterns,
            &self.config,
            &self.resolver,
            &self.values,
            self.default_ns.as_ref(),
        );
        let (description, namespaces_constrained) = state.parse_query();

        tracing::debug!(
            errors = state.diagnostics.error_count(),
            warnings = state.diagnostics.warning_count(),
            nodes = description.size(),
            depth = description.depth(),
            "parsed query"
        );

        ParsedQuery {
            source: input.to_string(),
            description,
            diagnostics: state.diagnostics,
            label: state.label,
            namespaces_constrained,
            fixed_subject: state.fixed_subject,
        }
    }
}

impl ParsedQuery {
    /// The query text, for rendering diagnostics against.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// `Err` when any error-severity diagnostic was recorded.
    pub fn into_result(self) -> Result<Self> {
        if self.diagnostics.has_errors() {
            return Err(Error::QueryParseError(self.diagnostics));
        }
        Ok(self)
    }
}
