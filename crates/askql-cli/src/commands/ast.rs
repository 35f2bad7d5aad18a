//! Show the description a query parses to.

use std::path::PathBuf;

use askql_lib::{Description, DiagnosticKind, ParsedQuery, Severity};
use serde::Serialize;

use super::query_loader::load_query;
use super::setup::{ParserArgs, build_parser};

pub struct AstArgs {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub json: bool,
    pub types: bool,
    pub parser: ParserArgs,
    pub color: bool,
}

pub fn run(args: AstArgs) {
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

    if !parsed.diagnostics.is_empty() {
        eprint!(
            "{}",
            parsed
                .diagnostics
                .printer()
                .source(parsed.source())
                .colored(args.color)
                .render()
        );
    }

    if args.json {
        match render_json(&parsed) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_tree(&parsed, args.types));
}

pub fn render_tree(parsed: &ParsedQuery, types: bool) -> String {
    let mut out = parsed.description.printer().with_types(types).dump();
    if !parsed.label.is_empty() {
        out.push_str(&format!("label: {}\n", parsed.label));
    }
    out
}

#[derive(Serialize)]
struct AstOutput<'a> {
    description: &'a Description,
    label: &'a str,
    namespaces_constrained: bool,
    fixed_subject: bool,
    diagnostics: Vec<DiagnosticOutput<'a>>,
}

#[derive(Serialize)]
struct DiagnosticOutput<'a> {
    kind: DiagnosticKind,
    severity: Severity,
    start: u32,
    end: u32,
    message: &'a str,
}

pub fn render_json(parsed: &ParsedQuery) -> serde_json::Result<String> {
    let diagnostics = parsed
        .diagnostics
        .iter()
        .map(|diag| DiagnosticOutput {
            kind: diag.kind(),
            severity: diag.severity(),
            start: diag.range().start().into(),
            end: diag.range().end().into(),
            message: diag.message(),
        })
        .collect();

    serde_json::to_string_pretty(&AstOutput {
        description: &parsed.description,
        label: &parsed.label,
        namespaces_constrained: parsed.namespaces_constrained,
        fixed_subject: parsed.fixed_subject,
        diagnostics,
    })
}
