use std::fmt::Write;

use ddlweave_lib::sqlite::SqliteParser;

use super::input::{Input, InputArgs};
use super::report::{Failure, dialect, exit_with};

pub struct TokensArgs {
    pub input: InputArgs,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let input = Input::load(&args.input).unwrap_or_else(|err| exit_with(err));
    let parser = dialect(args.color);

    match render_tokens(parser, &input) {
        Ok(out) => print!("{out}"),
        Err(failure) => failure.exit(&input, args.color),
    }
}

/// One line per token: byte range in the script, then the token.
/// Statements are separated by blank lines.
pub fn render_tokens(parser: &SqliteParser, input: &Input) -> Result<String, Failure> {
    let mut out = String::new();
    for (i, range) in input.statements().into_iter().enumerate() {
        let tokens = parser
            .tokenize(&input.text[range.clone()])
            .map_err(|error| Failure::in_statement(error, range.clone()))?;

        if i > 0 {
            out.push('\n');
        }
        for token in tokens {
            let start = range.start + token.span.start;
            let end = range.start + token.span.end;
            writeln!(out, "{start}..{end} {}", token.describe())
                .expect("String write never fails");
        }
    }
    Ok(out)
}
