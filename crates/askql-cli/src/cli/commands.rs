//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Flags that shape the parser, accepted by every command.
fn with_parser_args(cmd: Command) -> Command {
    cmd.arg(features_arg())
        .arg(default_ns_arg())
        .arg(property_arg())
        .arg(unknown_properties_arg())
        .arg(config_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("askql")
        .about("Parse and validate semantic ask queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(ast_command())
        .subcommand(check_command())
}

/// Print the parsed description.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the description a query parses to")
        .override_usage(
            "\
  askql ast <QUERY>
  askql ast -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  askql ast '[[Category:City]] [[Population::>100000]]'
  askql ast '[[Knows::<q>[[Category:Person]]</q>]]' --json
  askql ast -f query.txt --property Population=number --types
  askql ast '[[Category:City]]' --default-ns 0,Help"#,
        )
        .arg(query_text_arg())
        .arg(query_file_arg())
        .arg(json_arg())
        .arg(types_arg());

    with_parser_args(cmd)
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  askql check <QUERY>
  askql check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  askql check '[[Category:City]]'                # silent when valid
  askql check '[[Knows::]]' --strict             # warnings fail too
  askql check -f query.txt --unknown-properties reject -p Age=number"#,
        )
        .arg(query_text_arg())
        .arg(query_file_arg())
        .arg(strict_arg());

    with_parser_args(cmd)
}
