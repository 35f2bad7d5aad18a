//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::setup::ParserArgs;

/// Parser-shaping flags shared by all commands.
#[derive(Debug, Default)]
pub struct ParserParams {
    pub features: Option<String>,
    pub default_ns: Option<Vec<String>>,
    pub properties: Vec<String>,
    pub unknown_properties: Option<String>,
    pub config: Option<PathBuf>,
}

impl ParserParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            features: m.get_one::<String>("features").cloned(),
            default_ns: m
                .get_many::<String>("default_ns")
                .map(|ids| ids.cloned().collect()),
            properties: m
                .get_many::<String>("property")
                .map(|specs| specs.cloned().collect())
                .unwrap_or_default(),
            unknown_properties: m.get_one::<String>("unknown_properties").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<ParserParams> for ParserArgs {
    fn from(p: ParserParams) -> Self {
        Self {
            features: p.features,
            default_ns: p.default_ns,
            properties: p.properties,
            unknown_properties: p.unknown_properties,
            config: p.config,
        }
    }
}

pub struct AstParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub json: bool,
    pub types: bool,
    pub parser: ParserParams,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            json: m.get_flag("json"),
            types: m.get_flag("types"),
            parser: ParserParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            json: p.json,
            types: p.types,
            parser: p.parser.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub strict: bool,
    pub parser: ParserParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            strict: m.get_flag("strict"),
            parser: ParserParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_text: p.query_text,
            query_file: p.query_file,
            strict: p.strict,
            parser: p.parser.into(),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
