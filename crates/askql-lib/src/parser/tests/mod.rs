mod grammar;
mod recovery;

use crate::{ParsedQuery, ParserConfig, QueryParser, SchemaResolver, ValueType};

fn schema() -> SchemaResolver {
    SchemaResolver::new()
        .with("Age", ValueType::Number)
        .with("Population", ValueType::Number)
        .with("Name", ValueType::Text)
        .with("Alive", ValueType::Boolean)
}

fn parse(input: &str) -> ParsedQuery {
    parse_with(ParserConfig::new(), input)
}

fn parse_with(config: ParserConfig, input: &str) -> ParsedQuery {
    QueryParser::new(config)
        .expect("valid config")
        .with_resolver(schema())
        .parse(input)
}

fn with_default_ns(ids: &[i32], input: &str) -> ParsedQuery {
    parse_with(
        ParserConfig::new().default_namespaces(Some(ids.to_vec())),
        input,
    )
}

/// Tree dump, then the plain diagnostics after a `---` line.
fn render(parsed: &ParsedQuery) -> String {
    let mut out = parsed.description.printer().dump();
    let diagnostics = parsed.diagnostics.printer().render();
    if !diagnostics.is_empty() {
        out.push_str("---\n");
        out.push_str(&diagnostics);
    }
    out
}
