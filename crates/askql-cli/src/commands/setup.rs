//! Builds a parser from the shared command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use askql_lib::{ParserConfig, QueryFeatures, QueryParser, SchemaResolver, ValueType};

/// Parser-shaping flags. Flags override values from the config file.
#[derive(Debug, Default)]
pub struct ParserArgs {
    pub features: Option<String>,
    pub default_ns: Option<Vec<String>>,
    pub properties: Vec<String>,
    pub unknown_properties: Option<String>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Parser(#[from] askql_lib::Error),
}

pub fn build_parser(args: &ParserArgs) -> Result<QueryParser, SetupError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ParserConfig::new(),
    };

    if let Some(features) = &args.features {
        config.features = QueryFeatures::from_str(features)?;
    }
    if let Some(names) = &args.default_ns {
        let ids = names
            .iter()
            .map(|name| config.namespaces.lookup(name))
            .collect::<askql_lib::Result<Vec<_>>>()?;
        config.default_namespaces = Some(ids);
    }

    let mut resolver = SchemaResolver::new();
    if let Some(mode) = &args.unknown_properties {
        let default_type = if mode.eq_ignore_ascii_case("reject") {
            None
        } else {
            Some(ValueType::from_str(mode)?)
        };
        resolver = resolver.default_type(default_type);
    }
    for spec in &args.properties {
        resolver.declare(spec)?;
    }

    tracing::debug!(
        features = %config.features,
        default_ns = ?config.default_namespaces,
        properties = resolver.len(),
        "parser configured"
    );
    Ok(QueryParser::new(config)?.with_resolver(resolver))
}

pub fn load_config(path: &Path) -> Result<ParserConfig, SetupError> {
    let text = fs::read_to_string(path).map_err(|source| SetupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SetupError::Config {
        path: path.to_path_buf(),
        source,
    })
}
