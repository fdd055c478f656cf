//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed into
//! several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// DDL script file (positional, `-` for stdin).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("sql_text")
        .help("DDL script file, or - for stdin")
}

/// Inline DDL text (-s/--sql).
pub fn sql_text_arg() -> Arg {
    Arg::new("sql_text")
        .short('s')
        .long("sql")
        .value_name("SQL")
        .help("Inline DDL text")
}

/// Color output control (--color). Global.
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, -vv). Global.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON instead of pretty-printed")
}

/// Leave out key constraints (--no-constraints).
pub fn no_constraints_arg() -> Arg {
    Arg::new("no_constraints")
        .long("no-constraints")
        .action(ArgAction::SetTrue)
        .help("Emit columns only, without primary and foreign keys")
}

/// Include nodes the root cannot reach (--all).
pub fn all_nodes_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Include nodes unreachable from the root")
}

/// Hide hook bindings (--no-hooks).
pub fn no_hooks_arg() -> Arg {
    Arg::new("no_hooks")
        .long("no-hooks")
        .action(ArgAction::SetTrue)
        .help("Hide semantic hook bindings")
}
