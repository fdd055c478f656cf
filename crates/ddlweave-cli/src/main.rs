mod cli;
mod commands;
mod logging;

use cli::{GraphParams, KeywordsParams, ParseParams, ScriptParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("script", m)) => {
            let params = ScriptParams::from_matches(m);
            commands::script::run(params.into());
        }
        Some(("graph", m)) => {
            let params = GraphParams::from_matches(m);
            commands::graph::run(params.into());
        }
        Some(("keywords", m)) => {
            let _params = KeywordsParams::from_matches(m);
            commands::keywords::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
