use ddlweave_core::{Clause, TableDefinition};
use ddlweave_lib::{Error, ScriptBuilder, sqlite};
use indoc::indoc;

use super::input::{Input, InputArgs, InputError};
use super::parse::{parse_script, to_json};
use super::report::{Failure, dialect};
use super::script::render_script;
use super::tokens::render_tokens;

fn parse(script: &str) -> Result<Vec<Clause>, Failure> {
    parse_script(dialect(false), &Input::inline(script))
}

#[test]
fn parse_to_compact_json() {
    let clauses = parse(indoc! {"
        CREATE TABLE t(id integer NOT NULL PRIMARY KEY);
        CREATE INDEX ix ON t(id DESC);
    "})
    .unwrap();

    assert_eq!(
        to_json(&clauses, true).unwrap(),
        r#"[{"clause":"table","name":"t","columns":[{"name":"id","type":{"name":"integer"},"is_nullable":false}],"primary_key":{"columns":["id"]}},{"clause":"index","name":"ix","table_name":"t","is_unique":false,"columns":[{"name":"id","direction":"Descending"}]}]"#
    );
    assert!(to_json(&clauses, false).unwrap().starts_with("[\n  {\n    \"clause\": \"table\""));
}

#[test]
fn empty_script_parses_to_nothing() {
    let clauses = parse("-- nothing here\n;").unwrap();
    assert!(clauses.is_empty());
    assert_eq!(to_json(&clauses, true).unwrap(), "[]");
}

#[test]
fn failure_points_into_the_script() {
    let input = Input {
        text: "CREATE TABLE a(id int);\nCREATE TBL b(id int)".to_string(),
        path: Some("schema.sql".to_string()),
    };
    let failure = parse_script(dialect(false), &input).unwrap_err();
    assert_eq!(failure.statement, Some(24..44));

    let out = failure.render(&input, false);
    assert!(out.starts_with("error: unexpected 'TBL'"), "{out}");
    assert!(out.contains("--> schema.sql:2:8"), "{out}");
    assert!(out.contains("2 | CREATE TBL b(id int)"), "{out}");
}

#[test]
fn failure_without_location_is_one_line() {
    let clauses = [Clause::Table(TableDefinition::new("t"))];
    let err = render_script(&clauses, &ScriptBuilder::sqlite(), true).unwrap_err();
    assert!(matches!(err, Error::Script(_)));

    let failure = Failure::from(err);
    assert_eq!(
        failure.render(&Input::inline("CREATE TABLE t()"), false),
        "error: table of `t` has no columns"
    );
}

#[test]
fn script_round_trip() {
    let clauses = parse(indoc! {"
        create table t(id integer not null primary key, name text);
        create index ix on t(name desc)
    "})
    .unwrap();

    let builder = ScriptBuilder::sqlite();
    insta::assert_snapshot!(render_script(&clauses, &builder, true).unwrap(), @r"
    CREATE TABLE [t](
        [id] integer NOT NULL,
        [name] text NULL,
        PRIMARY KEY([id]));

    CREATE INDEX [ix] ON [t]([name] DESC);
    ");
    insta::assert_snapshot!(render_script(&clauses, &builder, false).unwrap(), @r"
    CREATE TABLE [t](
        [id] integer NOT NULL,
        [name] text NULL);

    CREATE INDEX [ix] ON [t]([name] DESC);
    ");
}

#[test]
fn tokens_per_statement() {
    let input = Input::inline("CREATE TABLE [b c](a int);  DROP 'x' 7");
    insta::assert_snapshot!(render_tokens(dialect(false), &input).unwrap(), @r#"
    0..6 'CREATE'
    7..12 'TABLE'
    13..18 identifier "b c"
    18..19 '('
    19..20 'a'
    21..24 'int'
    24..25 ')'

    28..32 'DROP'
    33..36 string 'x'
    37..38 integer 7
    "#);
}

#[test]
fn tokens_report_lex_errors() {
    let input = Input::inline("CREATE TABLE t(a int);\nCREATE TABLE u(a @ int)");
    let failure = render_tokens(dialect(false), &input).unwrap_err();
    assert!(matches!(failure.error, Error::Lex(_)));
    assert_eq!(failure.statement, Some(23..46));
}

#[test]
fn input_sources() {
    let args = InputArgs {
        path: Some("ignored.sql".into()),
        text: Some("CREATE TABLE t(a int)".to_string()),
    };
    let input = Input::load(&args).unwrap();
    assert_eq!(input.text, "CREATE TABLE t(a int)");
    assert_eq!(input.path, None);

    let missing = InputArgs {
        path: None,
        text: None,
    };
    assert!(matches!(Input::load(&missing), Err(InputError::Missing)));

    let unreadable = InputArgs {
        path: Some("does/not/exist.sql".into()),
        text: None,
    };
    let err = Input::load(&unreadable).err().unwrap();
    assert!(
        err.to_string().starts_with("failed to read 'does/not/exist.sql': "),
        "{err}"
    );
}

#[test]
fn dialect_is_the_shared_parser() {
    let parser = dialect(false);
    assert!(std::ptr::eq(parser, sqlite::parser().unwrap()));
    assert!(parser.reserved_words().contains("create"));
}
