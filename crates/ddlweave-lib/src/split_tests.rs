use indoc::indoc;

use super::split_statements;

#[test]
fn splits_and_trims() {
    let script = indoc! {"
        CREATE TABLE a(id int);
        CREATE INDEX ix ON a(id) ;

        ;CREATE TABLE b(id int)
    "};
    assert_eq!(
        split_statements(script),
        [
            "CREATE TABLE a(id int)",
            "CREATE INDEX ix ON a(id)",
            "CREATE TABLE b(id int)",
        ]
    );
}

#[test]
fn semicolons_inside_quotes_do_not_split() {
    let script = r#"CREATE TABLE [a;b]("c;d" text DEFAULT 'x;''y'); CREATE TABLE c(`e;f` int)"#;
    assert_eq!(
        split_statements(script),
        [
            r#"CREATE TABLE [a;b]("c;d" text DEFAULT 'x;''y')"#,
            "CREATE TABLE c(`e;f` int)",
        ]
    );
}

#[test]
fn comments_are_kept_but_do_not_split() {
    let script = indoc! {"
        -- first; not a split
        CREATE TABLE a(id int /* ; */);
        /* trailing; */
        -- only a comment;
    "};
    assert_eq!(
        split_statements(script),
        ["-- first; not a split\nCREATE TABLE a(id int /* ; */)"]
    );
}

#[test]
fn empty_script() {
    assert!(split_statements("").is_empty());
    assert!(split_statements(" ;\n; ").is_empty());
}

#[test]
fn unterminated_quote_swallows_the_rest() {
    assert_eq!(split_statements("SELECT 'a;b"), ["SELECT 'a;b"]);
}

#[test]
fn ranges_point_into_the_script() {
    let script = "  CREATE TABLE a(id int) ;\n CREATE TABLE b(id int)";
    let ranges = super::split_statement_ranges(script);
    assert_eq!(ranges, [2..24, 28..50]);
    assert_eq!(&script[ranges[1].clone()], "CREATE TABLE b(id int)");
}
