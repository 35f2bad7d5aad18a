use std::path::PathBuf;

use askql_lib::Diagnostics;

use super::query_loader::load_query;
use super::setup::{ParserArgs, build_parser};

pub struct CheckArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub strict: bool,
    pub parser: ParserArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = match load_query(args.query_text.as_deref(), args.query_file.as_deref()) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let parser = match build_parser(&args.parser) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let parsed = parser.parse(&source);

    if !is_valid(&parsed.diagnostics, args.strict) {
        eprint!(
            "{}",
            parsed
                .diagnostics
                .printer()
                .source(parsed.source())
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub fn is_valid(diagnostics: &Diagnostics, strict: bool) -> bool {
    if strict {
        diagnostics.is_empty()
    } else {
        !diagnostics.has_errors()
    }
}
