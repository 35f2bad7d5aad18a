//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `ast` and `check` declare the same
//! flags the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline query text (positional).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .value_name("QUERY")
        .help("Query text, e.g. '[[Category:City]]'")
}

/// Query from a file (-f/--file).
pub fn query_file_arg() -> Arg {
    Arg::new("query_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("query_text")
        .help("Read the query from a file (use \"-\" for stdin)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the description as JSON")
}

/// Property types in the tree (--types).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .long("types")
        .action(ArgAction::SetTrue)
        .help("Show resolved property types")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Enabled query features (--features).
pub fn features_arg() -> Arg {
    Arg::new("features")
        .long("features")
        .value_name("LIST")
        .help("Enabled features: all, none, or a list of property,category,concept,namespace,conjunction,disjunction")
}

/// Default namespaces (--default-ns).
pub fn default_ns_arg() -> Arg {
    Arg::new("default_ns")
        .long("default-ns")
        .value_name("IDS")
        .value_delimiter(',')
        .help("Namespaces applied when the query names none (ids or names, comma-separated)")
}

/// Declared property types (--property, repeatable).
pub fn property_arg() -> Arg {
    Arg::new("property")
        .long("property")
        .short('p')
        .value_name("NAME=TYPE")
        .action(ArgAction::Append)
        .help("Declare a property type (page, text, number, boolean, date, url)")
}

/// Handling of undeclared properties (--unknown-properties).
pub fn unknown_properties_arg() -> Arg {
    Arg::new("unknown_properties")
        .long("unknown-properties")
        .value_name("TYPE|reject")
        .help("Type assumed for undeclared properties, or `reject` [default: page]")
}

/// Parser configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Parser configuration as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log parser activity to stderr (-v debug, -vv trace)")
}
