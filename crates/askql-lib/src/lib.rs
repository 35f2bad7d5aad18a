//! askql: parser for the bracket-delimited semantic ask query language.
//!
//! A query such as `[[Category:City]] [[located in::Germany]]` is turned into a
//! typed [`Description`] tree plus diagnostics. Evaluating the description
//! against a store is left to the caller.
//!
//! # Example
//!
//! ```
//! use askql_lib::{ParserConfig, QueryParser};
//!
//! let parser = QueryParser::new(ParserConfig::new()).expect("valid config");
//! let parsed = parser.parse("[[Category:City]] [[population::>100000]]");
//! println!("{}", parsed.description);
//! eprint!("{}", parsed.diagnostics.printer().source(parsed.source()).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod description;
pub mod diagnostics;
pub mod features;
pub mod namespaces;
pub mod parser;
pub mod resolve;
pub mod title;


pub use config::ParserConfig;
pub use description::{
    Comparator, DataValue, Description, DescriptionPrinter, NamespaceRef, PageRef,
    ValueDescription,
};
pub use diagnostics::{
    DefaultCatalog, DiagnosticKind, Diagnostics, DiagnosticsPrinter, MapCatalog, MessageCatalog,
    Severity,
};
pub use features::{Feature, QueryFeatures};
pub use namespaces::Namespaces;
pub use parser::{ParsedQuery, QueryParser};
pub use resolve::{
    LiteralValueParser, PropertyRef, PropertyResolver, ResolveError, SchemaResolver, ValueError,
    ValueParser, ValueType,
};

/// Errors raised while setting up a parser or interpreting its result.
///
/// Problems inside a query string are never errors: they are collected as
/// [`Diagnostics`] next to a best-effort description.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("unknown query feature `{0}`")]
    UnknownFeature(String),

    #[error("unknown namespace `{0}`")]
    UnknownNamespace(String),

    #[error("unknown value type `{0}`")]
    UnknownValueType(String),

    /// A `NAME=TYPE` property declaration without the `=`.
    #[error("invalid property declaration `{0}`, expected NAME=TYPE")]
    InvalidPropertySpec(String),

    #[error("failed to compile delimiter pattern: {0}")]
    Pattern(String),

    #[error("query parsing failed with {} errors", .0.error_count())]
    QueryParseError(Diagnostics),
}

/// Result type for setup operations.
pub type Result<T> = std::result::Result<T, Error>;
