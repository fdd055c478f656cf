//! Dispatch logic: extract params from `ArgMatches` and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::graph::GraphArgs;
use crate::commands::input::InputArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::script::ScriptArgs;
use crate::commands::tokens::TokensArgs;

pub struct ParseParams {
    pub input_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            sql_text: m.get_one::<String>("sql_text").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            input: InputArgs {
                path: p.input_path,
                text: p.sql_text,
            },
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            sql_text: m.get_one::<String>("sql_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: InputArgs {
                path: p.input_path,
                text: p.sql_text,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct ScriptParams {
    pub input_path: Option<PathBuf>,
    pub sql_text: Option<String>,
    pub no_constraints: bool,
    pub color: ColorChoice,
}

impl ScriptParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            sql_text: m.get_one::<String>("sql_text").cloned(),
            no_constraints: m.get_flag("no_constraints"),
            color: parse_color(m),
        }
    }
}

impl From<ScriptParams> for ScriptArgs {
    fn from(p: ScriptParams) -> Self {
        Self {
            input: InputArgs {
                path: p.input_path,
                text: p.sql_text,
            },
            include_constraints: !p.no_constraints,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GraphParams {
    pub all: bool,
    pub no_hooks: bool,
    pub color: ColorChoice,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            all: m.get_flag("all"),
            no_hooks: m.get_flag("no_hooks"),
            color: parse_color(m),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            only_reachable: !p.all,
            show_hooks: !p.no_hooks,
            color: p.color.should_colorize(),
        }
    }
}

pub struct KeywordsParams;

impl KeywordsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
