//! Command builders for the CLI.

use clap::Command;

use super::args::*;

fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg()).arg(sql_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ddlweave")
        .about("Reconstruct tables and indexes from SQLite DDL")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(color_arg())
        .arg(verbose_arg())
        .subcommand(parse_command())
        .subcommand(tokens_command())
        .subcommand(script_command())
        .subcommand(graph_command())
        .subcommand(keywords_command())
}

/// Parse a DDL script and print the clauses as JSON.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse DDL and print the resulting clauses as JSON")
        .after_help(
            r#"EXAMPLES:
  ddlweave parse schema.sql
  ddlweave parse schema.sql --compact
  ddlweave parse -s 'CREATE TABLE t(id integer)'
  cat schema.sql | ddlweave parse -"#,
        )
        .arg(compact_arg());

    with_input_args(cmd)
}

/// Print the token stream of every statement.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of every statement")
        .after_help(
            r#"EXAMPLES:
  ddlweave tokens schema.sql
  ddlweave tokens -s 'CREATE INDEX ix ON t([a] DESC)'"#,
        );

    with_input_args(cmd)
}

/// Parse and regenerate normalised DDL.
pub fn script_command() -> Command {
    let cmd = Command::new("script")
        .about("Parse DDL and print it back in normalised form")
        .after_help(
            r#"EXAMPLES:
  ddlweave script schema.sql
  ddlweave script schema.sql --no-constraints"#,
        )
        .arg(no_constraints_arg());

    with_input_args(cmd)
}

/// Dump the compiled SQLite grammar graph.
pub fn graph_command() -> Command {
    Command::new("graph")
        .about("Dump the compiled SQLite grammar graph")
        .arg(all_nodes_arg())
        .arg(no_hooks_arg())
}

/// List the reserved words derived from the grammar.
pub fn keywords_command() -> Command {
    Command::new("keywords").about("List the reserved words of the SQLite grammar")
}
