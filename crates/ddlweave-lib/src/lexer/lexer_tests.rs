use indoc::indoc;

use super::*;

fn snapshot(input: &str) -> String {
    snapshot_with(Lexer::sqlite(), input)
}

fn snapshot_with(lexer: Lexer, input: &str) -> String {
    let tokens = lexer.tokenize(input).unwrap();
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{} {:?}\n", token.span.position, token.kind));
    }
    out
}

fn error(input: &str) -> LexError {
    Lexer::sqlite().tokenize(input).unwrap_err()
}

#[test]
fn create_table() {
    insta::assert_snapshot!(snapshot("CREATE TABLE [Person]([Id] integer NOT NULL)"), @r#"
    1:1 Word("CREATE")
    1:8 Word("TABLE")
    1:14 Identifier { text: "Person", delimited: true }
    1:22 Punctuation('(')
    1:23 Identifier { text: "Id", delimited: true }
    1:28 Word("integer")
    1:36 Word("NOT")
    1:40 Word("NULL")
    1:44 Punctuation(')')
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(snapshot("DEFAULT 'it''s' -12 +7 0"), @r#"
    1:1 Word("DEFAULT")
    1:9 StringLiteral("it's")
    1:17 Integer(-12)
    1:21 Integer(7)
    1:24 Integer(0)
    "#);
}

#[test]
fn delimited_identifiers_with_spaces() {
    insta::assert_snapshot!(snapshot(r#"[Foo Bar] "Foo Bar" "say ""hi""""#), @r#"
    1:1 Identifier { text: "Foo Bar", delimited: true }
    1:11 Identifier { text: "Foo Bar", delimited: true }
    1:21 Identifier { text: "say \"hi\"", delimited: true }
    "#);
}

#[test]
fn brackets_do_not_escape() {
    let err = tokenize("[a]]").unwrap_err();
    assert!(matches!(err, LexError::UnexpectedCharacter { ch: '[', .. }));
}

#[test]
fn punctuation_terminates_runs() {
    insta::assert_snapshot!(snapshot("varchar(100,2)"), @r#"
    1:1 Word("varchar")
    1:8 Punctuation('(')
    1:9 Integer(100)
    1:12 Punctuation(',')
    1:13 Integer(2)
    1:14 Punctuation(')')
    "#);
}

#[test]
fn comments_are_trivia() {
    let input = indoc! {"
        -- leading comment
        CREATE /* inline */ TABLE
          t(a) -- trailing
    "};
    insta::assert_snapshot!(snapshot(input), @r#"
    2:1 Word("CREATE")
    2:21 Word("TABLE")
    3:3 Word("t")
    3:4 Punctuation('(')
    3:5 Word("a")
    3:6 Punctuation(')')
    "#);
}

#[test]
fn comments_can_be_disabled() {
    let lexer = Lexer::new(LexerConfig::sqlite().comments(false));
    let err = lexer.tokenize("a -- b").unwrap_err();
    assert!(matches!(err, LexError::UnexpectedCharacter { ch: '-', .. }));
}

#[test]
fn backticks_when_configured() {
    let lexer = Lexer::new(LexerConfig::default().delimiters([IdentifierDelimiter::Backticks]));
    insta::assert_snapshot!(snapshot_with(lexer, "`a``b` c"), @r#"
    1:1 Identifier { text: "a`b", delimited: true }
    1:8 Word("c")
    "#);
}

#[test]
fn integer_followed_by_letters_is_error() {
    assert_eq!(
        error("12ab"),
        LexError::UnexpectedCharacter {
            ch: '1',
            span: Span::new(0, 1, Position::new(1, 1)),
        }
    );
}

#[test]
fn string_followed_by_word_is_error() {
    assert!(matches!(
        error("'x'y"),
        LexError::UnexpectedCharacter { ch: '\'', .. }
    ));
}

#[test]
fn word_followed_by_quote_is_error() {
    let err = error("ab'c'");
    assert_eq!(err.span().position, Position::new(1, 1));
}

#[test]
fn unexpected_character_position() {
    let err = error("CREATE\n  TABLE ;");
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            ch: ';',
            span: Span::new(15, 16, Position::new(2, 9)),
        }
    );
    assert_eq!(err.to_string(), "unexpected character ';' at 2:9");
}

#[test]
fn unterminated_literals() {
    assert!(matches!(error("'abc"), LexError::UnterminatedString { .. }));
    assert!(matches!(error("[abc"), LexError::UnterminatedIdentifier { .. }));
    assert!(matches!(error("\"abc"), LexError::UnterminatedIdentifier { .. }));
    assert!(matches!(error("a /* b"), LexError::UnterminatedComment { .. }));
}

#[test]
fn empty_identifier() {
    assert_eq!(
        error("x []"),
        LexError::EmptyIdentifier {
            span: Span::new(2, 4, Position::new(1, 3)),
        }
    );
}

#[test]
fn integer_overflow() {
    assert_eq!(
        error("99999999999999999999"),
        LexError::IntegerOverflow {
            text: "99999999999999999999".to_string(),
            span: Span::new(0, 20, Position::new(1, 1)),
        }
    );
}

#[test]
fn empty_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n\t -- nothing").unwrap().is_empty());
}

#[test]
fn token_text_and_description() {
    let tokens = tokenize("name [x y] 'q' 5 ,").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text().into_owned()).collect();
    assert_eq!(texts, ["name", "x y", "q", "5", ","]);

    let described: Vec<_> = tokens.iter().map(Token::describe).collect();
    assert_eq!(
        described,
        ["'name'", "identifier \"x y\"", "string 'q'", "integer 5", "','"]
    );
}
