use pl0parse::errors::Pl0Result;
use pl0parse::frontend::lexer::tokenize;
use pl0parse::frontend::token::{Keyword, Position, Token, TokenKind};

fn kinds_and_text(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|token| (token.kind, token.text.as_str())).collect()
}

#[test]
fn test_write_number() -> Pl0Result<()> {
    let tokens = tokenize("!1.")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Bang, "!"),
            (TokenKind::Number, "1"),
            (TokenKind::FullStop, "."),
        ]
    );
    Ok(())
}

#[test]
fn test_number_literals() -> Pl0Result<()> {
    let tokens = tokenize("123 456 0 007 999999999999999999999999")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Number, "123"),
            (TokenKind::Number, "456"),
            (TokenKind::Number, "0"),
            (TokenKind::Number, "007"),
            (TokenKind::Number, "999999999999999999999999"),
        ]
    );
    Ok(())
}

#[test]
fn test_single_char_punctuation() -> Pl0Result<()> {
    let tokens = tokenize("= , ? ! ; + - * / { } ( ) .")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Equals, "="),
            (TokenKind::Comma, ","),
            (TokenKind::QuestionMark, "?"),
            (TokenKind::Bang, "!"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Mult, "*"),
            (TokenKind::Div, "/"),
            (TokenKind::ParenOpen, "{"),
            (TokenKind::ParenClose, "}"),
            (TokenKind::ParenOpen, "("),
            (TokenKind::ParenClose, ")"),
            (TokenKind::FullStop, "."),
        ]
    );
    Ok(())
}

#[test]
fn test_relational_operators() -> Pl0Result<()> {
    let tokens = tokenize("a<b<=c>d>=e=f")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::LessThan, "<"),
            (TokenKind::Identifier, "b"),
            (TokenKind::LessEqual, "<="),
            (TokenKind::Identifier, "c"),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::Identifier, "d"),
            (TokenKind::GreaterEqual, ">="),
            (TokenKind::Identifier, "e"),
            (TokenKind::Equals, "="),
            (TokenKind::Identifier, "f"),
        ]
    );
    Ok(())
}

#[test]
fn test_spaced_comparison_is_two_tokens() -> Pl0Result<()> {
    let tokens = tokenize("< = > =")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::LessThan, "<"),
            (TokenKind::Equals, "="),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::Equals, "="),
        ]
    );
    Ok(())
}

#[test]
fn test_assignment() -> Pl0Result<()> {
    let tokens = tokenize("x:=1")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Assignment, ":="),
            (TokenKind::Number, "1"),
        ]
    );
    Ok(())
}

#[test]
fn test_colon_without_equals() {
    let err = tokenize("x : 1.").unwrap_err();
    assert_eq!(err.message, "expected '=' after ':'");
    assert_eq!(err.position.offset, 3);
    assert!(err.token.is_none());
}

#[test]
fn test_colon_at_end_of_input() {
    let err = tokenize("x :").unwrap_err();
    assert_eq!(err.message, "expected '=' after ':'");
    assert_eq!(err.position.offset, 3);
}

#[test]
fn test_reserved_words_any_case() -> Pl0Result<()> {
    let tokens = tokenize("BEGIN Call odd wHiLe procedure")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Reserved(Keyword::Begin), "BEGIN"),
            (TokenKind::Reserved(Keyword::Call), "Call"),
            (TokenKind::Reserved(Keyword::Odd), "odd"),
            (TokenKind::Reserved(Keyword::While), "wHiLe"),
            (TokenKind::Reserved(Keyword::Procedure), "procedure"),
        ]
    );
    Ok(())
}

#[test]
fn test_identifiers_are_alphanumeric_runs() -> Pl0Result<()> {
    let tokens = tokenize("x1 beginning end2 12abc")?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Identifier, "x1"),
            (TokenKind::Identifier, "beginning"),
            (TokenKind::Identifier, "end2"),
            (TokenKind::Number, "12"),
            (TokenKind::Identifier, "abc"),
        ]
    );
    Ok(())
}

#[test]
fn test_unrecognized_character() {
    let err = tokenize("var @;").unwrap_err();
    assert_eq!(err.message, "unrecognized character '@'");
    assert_eq!(err.position, Position::new(4, 1, 5));
}

#[test]
fn test_underscore_is_not_an_identifier_character() {
    let err = tokenize("my_var").unwrap_err();
    assert_eq!(err.position.offset, 2);
}

#[test]
fn test_non_ascii_digits_are_rejected() {
    let err = tokenize("\u{0663}").unwrap_err();
    assert_eq!(err.message, "unrecognized character '\u{0663}'");
    assert_eq!(err.position.offset, 0);

    // an identifier run stops at the same digit a number would refuse
    let err = tokenize("a\u{0663}").unwrap_err();
    assert_eq!(err.position, Position::new(1, 1, 2));
}

#[test]
fn test_empty_and_whitespace_input() -> Pl0Result<()> {
    assert!(tokenize("")?.is_empty());
    assert!(tokenize(" \t\r\n\n ")?.is_empty());
    Ok(())
}

#[test]
fn test_positions_track_lines_and_columns() -> Pl0Result<()> {
    let source = "var x;\n  begin\n\tx := 10\nend.";
    let tokens = tokenize(source)?;
    let positions: Vec<(usize, usize, usize)> = tokens
        .iter()
        .map(|token| (token.position.offset, token.position.line, token.position.column))
        .collect();
    assert_eq!(
        positions,
        vec![
            (0, 1, 1),   // var
            (4, 1, 5),   // x
            (5, 1, 6),   // ;
            (9, 2, 3),   // begin
            (16, 3, 2),  // x
            (18, 3, 4),  // :=
            (21, 3, 7),  // 10
            (24, 4, 1),  // end
            (27, 4, 4),  // .
        ]
    );
    Ok(())
}

#[test]
fn test_procedures_and_io() -> Pl0Result<()> {
    let source = "
        var x;
        procedure p;
            ? x;
        begin
            call p;
            ! x
        end.
    ";
    let tokens = tokenize(source)?;
    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Reserved(Keyword::Var), "var"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Reserved(Keyword::Procedure), "procedure"),
            (TokenKind::Identifier, "p"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::QuestionMark, "?"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Reserved(Keyword::Begin), "begin"),
            (TokenKind::Reserved(Keyword::Call), "call"),
            (TokenKind::Identifier, "p"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Reserved(Keyword::End), "end"),
            (TokenKind::FullStop, "."),
        ]
    );
    Ok(())
}

#[test]
fn test_tokenize_is_repeatable() -> Pl0Result<()> {
    let source = "const a = 5; var b; begin b := a * (a - 1); ! b end.";
    assert_eq!(tokenize(source)?, tokenize(source)?);
    Ok(())
}
