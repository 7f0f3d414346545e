//! Template literal integration tests.

use jstok_core::SourceLocation;
use jstok_scanner::{
    scan_all, scan_all_with_options, ScanError, ScanState, ScannerOptions, Token, TokenKind,
    TokenPosition, TokenType, TokenValue, Tokenizer,
};
use pretty_assertions::assert_eq;

fn tok(token_type: impl Into<TokenType>, value: impl Into<TokenValue>, start: u32, end: u32) -> Token {
    Token::new(
        token_type.into(),
        value,
        TokenPosition {
            start,
            end,
            line: 1,
            column_start: start,
            column_end: end,
        },
    )
}

fn labels(tokens: &[Token]) -> Vec<&'static str> {
    tokens.iter().map(Token::label).collect()
}

fn balanced() -> ScannerOptions {
    ScannerOptions {
        balance_template_braces: true,
        ..ScannerOptions::default()
    }
}

#[test]
fn test_plain_template() {
    assert_eq!(
        scan_all("const a = `hello`;").unwrap(),
        vec![
            tok(TokenKind::Const, "const", 0, 5),
            tok(TokenKind::Identifier, "a", 6, 7),
            tok(TokenKind::Operator, "=", 8, 9),
            tok(TokenKind::TemplateStart, "`", 10, 11),
            tok(TokenKind::TemplateContent, "hello", 11, 16),
            tok(TokenKind::TemplateEnd, "`", 16, 17),
            tok(TokenKind::Punctuation, ";", 17, 18),
            Token::eof(),
        ]
    );
}

#[test]
fn test_template_with_expression() {
    assert_eq!(
        scan_all("`Count: ${a}`").unwrap(),
        vec![
            tok(TokenKind::TemplateStart, "`", 0, 1),
            tok(TokenKind::TemplateContent, "Count: ", 1, 8),
            tok(TokenKind::TemplateExpressionStart, "${", 8, 10),
            tok(TokenKind::Identifier, "a", 10, 11),
            tok(TokenKind::TemplateExpressionEnd, "}", 11, 12),
            tok(TokenKind::TemplateEnd, "`", 12, 13),
            Token::eof(),
        ]
    );
}

#[test]
fn test_empty_template() {
    assert_eq!(
        labels(&scan_all("``").unwrap()),
        vec!["templateStart", "templateEnd", "eof"]
    );
}

#[test]
fn test_adjacent_expressions_have_no_empty_content() {
    assert_eq!(
        labels(&scan_all("`${a}${b}`").unwrap()),
        vec![
            "templateStart",
            "templateExpressionStart",
            "identifier",
            "templateExpressionEnd",
            "templateExpressionStart",
            "identifier",
            "templateExpressionEnd",
            "templateEnd",
            "eof",
        ]
    );
}

#[test]
fn test_expression_tokens() {
    let tokens = scan_all("`x ${ a + 'b' * 0x10 } y`").unwrap();
    assert_eq!(
        labels(&tokens),
        vec![
            "templateStart",
            "templateContent",
            "templateExpressionStart",
            "identifier",
            "operator",
            "string",
            "operator",
            "number",
            "templateExpressionEnd",
            "templateContent",
            "templateEnd",
            "eof",
        ]
    );
    assert_eq!(tokens[5].value.as_str(), Some("b"));
    assert_eq!(tokens[7].value, TokenValue::Number(16.0));
    assert_eq!(tokens[9].value.as_str(), Some(" y"));
}

#[test]
fn test_content_escapes() {
    let tokens = scan_all(r"`a\`b\n\${c}`").unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind(), TokenKind::TemplateContent);
    assert_eq!(tokens[1].value.as_str(), Some("a`b\n${c}"));
    // The span keeps the raw escapes.
    assert_eq!(tokens[1].range().map(|r| r.len()), Some(11));
}

#[test]
fn test_lone_dollar_is_content() {
    let tokens = scan_all("`$x$ {y}`").unwrap();
    assert_eq!(tokens[1], tok(TokenKind::TemplateContent, "$x$ {y}", 1, 8));
}

#[test]
fn test_multi_line_content() {
    let tokens = scan_all("`a\nbc`").unwrap();
    assert_eq!(
        tokens[1],
        Token::new(
            TokenType::new(TokenKind::TemplateContent),
            "a\nbc",
            TokenPosition {
                start: 1,
                end: 5,
                line: 1,
                column_start: 1,
                column_end: 5,
            },
        )
    );
    assert_eq!(
        tokens[2].position,
        Some(TokenPosition {
            start: 5,
            end: 6,
            line: 2,
            column_start: 2,
            column_end: 3,
        })
    );
}

#[test]
fn test_code_after_template() {
    assert_eq!(
        labels(&scan_all("f(`a`, b)").unwrap()),
        vec![
            "identifier",
            "punctuation",
            "templateStart",
            "templateContent",
            "templateEnd",
            "punctuation",
            "identifier",
            "punctuation",
            "eof",
        ]
    );
}

#[test]
fn test_states_follow_template_nesting() {
    let mut tokenizer = Tokenizer::new("`a${b}c` d").unwrap();
    let mut states = Vec::new();
    while let Some(result) = tokenizer.next_token() {
        let token = result.unwrap();
        states.push((token.label(), tokenizer.state()));
    }
    assert_eq!(
        states,
        vec![
            ("templateStart", ScanState::InTemplate),
            ("templateContent", ScanState::InTemplate),
            ("templateExpressionStart", ScanState::InTemplate),
            ("identifier", ScanState::InTemplate),
            ("templateExpressionEnd", ScanState::InTemplate),
            ("templateContent", ScanState::InTemplate),
            ("templateEnd", ScanState::Scanning),
            ("identifier", ScanState::Scanning),
            ("eof", ScanState::Done),
        ]
    );
}

// ============================================================================
// Brace tracking
// ============================================================================

#[test]
fn test_flat_search_ends_at_first_close_brace() {
    let tokens = scan_all("`${ {a: 1} }`").unwrap();
    assert_eq!(
        labels(&tokens),
        vec![
            "templateStart",
            "templateExpressionStart",
            "punctuation",
            "identifier",
            "punctuation",
            "number",
            "templateExpressionEnd",
            "templateContent",
            "templateEnd",
            "eof",
        ]
    );
    assert_eq!(tokens[7].value.as_str(), Some(" }"));
}

#[test]
fn test_balanced_object_literal() {
    let tokens = scan_all_with_options("`${ {a: 1} }`", balanced()).unwrap();
    assert_eq!(
        labels(&tokens),
        vec![
            "templateStart",
            "templateExpressionStart",
            "punctuation",
            "identifier",
            "punctuation",
            "number",
            "punctuation",
            "templateExpressionEnd",
            "templateEnd",
            "eof",
        ]
    );
    assert!(tokens[6].is_punctuation("}"));
}

#[test]
fn test_nested_template_needs_balancing() {
    let mut tokenizer = Tokenizer::new("`${`x`}`").unwrap();
    let tokens: Vec<_> = tokenizer.tokenize().collect::<Result<_, _>>().unwrap();
    assert_eq!(
        labels(&tokens),
        vec!["templateStart", "templateExpressionStart", "eof"]
    );
    assert_eq!(tokenizer.diagnostics().diagnostics()[0].code, 6002);

    let tokens = scan_all_with_options("`${`x${y}`}`", balanced()).unwrap();
    assert_eq!(
        labels(&tokens),
        vec![
            "templateStart",
            "templateExpressionStart",
            "templateStart",
            "templateContent",
            "templateExpressionStart",
            "identifier",
            "templateExpressionEnd",
            "templateEnd",
            "templateExpressionEnd",
            "templateEnd",
            "eof",
        ]
    );
}

// ============================================================================
// Unterminated templates
// ============================================================================

#[test]
fn test_unterminated_template_is_lenient() {
    let mut tokenizer = Tokenizer::new("x = `abc").unwrap();
    let tokens: Vec<_> = tokenizer.tokenize().collect::<Result<_, _>>().unwrap();
    assert_eq!(
        labels(&tokens),
        vec!["identifier", "operator", "templateStart", "templateContent", "eof"]
    );
    let diagnostics = tokenizer.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics()[0].code, 6004);
    assert_eq!(diagnostics.diagnostics()[0].location, Some(SourceLocation::new(4, 1, 4)));
}

#[test]
fn test_unterminated_expression_is_lenient() {
    assert_eq!(
        labels(&scan_all("`${a").unwrap()),
        vec!["templateStart", "templateExpressionStart", "identifier", "eof"]
    );
}

#[test]
fn test_unterminated_template_is_an_error_when_requested() {
    let options = ScannerOptions {
        error_on_unterminated_literal: true,
        ..ScannerOptions::default()
    };
    for source in ["x = `abc", "x = `${a"] {
        assert_eq!(
            scan_all_with_options(source, options).unwrap_err(),
            ScanError::UnterminatedTemplateLiteral {
                location: SourceLocation::new(4, 1, 4)
            },
            "source: {}",
            source
        );
    }
}
