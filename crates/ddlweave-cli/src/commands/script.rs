use ddlweave_core::Clause;
use ddlweave_lib::{Error, ScriptBuilder};

use super::input::{Input, InputArgs};
use super::parse::parse_script;
use super::report::{Failure, dialect, exit_with};

pub struct ScriptArgs {
    pub input: InputArgs,
    pub include_constraints: bool,
    pub color: bool,
}

pub fn run(args: ScriptArgs) {
    let input = Input::load(&args.input).unwrap_or_else(|err| exit_with(err));
    let parser = dialect(args.color);

    let clauses =
        parse_script(parser, &input).unwrap_or_else(|failure| failure.exit(&input, args.color));
    match render_script(&clauses, &ScriptBuilder::sqlite(), args.include_constraints) {
        Ok(script) => println!("{script}"),
        Err(err) => Failure::new(err).exit(&input, args.color),
    }
}

/// One `;`-terminated statement per clause, separated by blank lines.
pub fn render_script(
    clauses: &[Clause],
    builder: &ScriptBuilder,
    include_constraints: bool,
) -> Result<String, Error> {
    let mut statements = Vec::with_capacity(clauses.len());
    for clause in clauses {
        let sql = match clause {
            Clause::Table(table) => builder.build_create_table(table, include_constraints)?,
            Clause::Index(index) => builder.build_create_index(index)?,
        };
        statements.push(format!("{sql};"));
    }
    Ok(statements.join("\n\n"))
}
