use ddlweave_core::Clause;
use ddlweave_lib::ParsingResult;
use ddlweave_lib::sqlite::SqliteParser;

use super::input::{Input, InputArgs};
use super::report::{Failure, dialect, exit_with};

pub struct ParseArgs {
    pub input: InputArgs,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let input = Input::load(&args.input).unwrap_or_else(|err| exit_with(err));
    let parser = dialect(args.color);

    let clauses =
        parse_script(parser, &input).unwrap_or_else(|failure| failure.exit(&input, args.color));
    match to_json(&clauses, args.compact) {
        Ok(json) => println!("{json}"),
        Err(err) => exit_with(err),
    }
}

/// Parse every statement of the script into one result, stopping at the first failure.
pub fn parse_script(parser: &SqliteParser, input: &Input) -> Result<Vec<Clause>, Failure> {
    let mut result = ParsingResult::new();
    for range in input.statements() {
        tracing::debug!(start = range.start, end = range.end, "parsing statement");
        parser
            .parse_into(&input.text[range.clone()], &mut result)
            .map_err(|error| Failure::in_statement(error, range))?;
    }
    Ok(result.into_clauses())
}

pub fn to_json(clauses: &[Clause], compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(clauses)
    } else {
        serde_json::to_string_pretty(clauses)
    }
}
