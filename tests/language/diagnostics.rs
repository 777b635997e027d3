//! Integration tests for diagnostics
//!
//! Tests error reporting, positions, and recovery.

use level::language::{
    Construct, ParserConfig, Severity, Span, SyntaxError, parse, parse_expression,
    parse_with_config,
};

// =============================================================================
// One Bad Token, One Diagnostic
// =============================================================================

/// Parses `source` and asserts a single diagnostic at `(line, column)`.
fn single_error_at(source: &str, line: u32, column: u32) -> SyntaxError {
    let result = parse(source);
    assert_eq!(
        result.diagnostics.len(),
        1,
        "source: {source:?}, diagnostics: {:?}",
        result.diagnostics
    );
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!((diagnostic.line(), diagnostic.column()), (line, column));
    diagnostic.error.clone()
}

#[test]
fn unrecognized_character() {
    let error = single_error_at("entity E {\n    move(1 $ 2);\n}", 2, 12);
    assert_eq!(error, SyntaxError::UnrecognizedToken { found: '$' });
}

#[test]
fn stray_closing_paren() {
    let error = single_error_at("func f() { wait(); ) wait; }", 1, 20);
    assert!(matches!(error, SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn stray_keyword_in_expression() {
    let error = single_error_at("func f() { x = 1 + else; }", 1, 20);
    assert_eq!(
        error.to_string(),
        "expected expression, found 'else'"
    );
}

#[test]
fn missing_semicolon_reports_next_token() {
    let error = single_error_at("func f() {\n    x = 1\n    wait;\n}", 3, 5);
    assert_eq!(error.to_string(), "expected ';', found 'wait'");
}

#[test]
fn single_ampersand() {
    let error = single_error_at("entity E { if (a & b) wait; }", 1, 18);
    assert_eq!(error, SyntaxError::UnrecognizedToken { found: '&' });
}

#[test]
fn invalid_escape_in_string() {
    let error = single_error_at("entity E { say(\"bad \\z\"); }", 1, 16);
    assert_eq!(error, SyntaxError::InvalidEscape { escape: 'z' });
}

#[test]
fn number_out_of_range() {
    let source = format!("number big = {};", "9".repeat(400));
    let error = single_error_at(&source, 1, 14);
    assert_eq!(error, SyntaxError::NumberOutOfRange);
}

// =============================================================================
// Unterminated Constructs
// =============================================================================

#[test]
fn unterminated_function_body() {
    let result = parse("func f() { ");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].error,
        SyntaxError::UnterminatedConstruct {
            kind: Construct::Block,
            opened_at: Span::new(9, 10, 1, 10),
        }
    );
    assert_eq!(result.program.declarations.len(), 1);
}

#[test]
fn unterminated_array() {
    let result = parse("number xs = [1, 2");
    assert_eq!(result.diagnostics.len(), 1);
    assert!(matches!(
        result.diagnostics[0].error,
        SyntaxError::UnterminatedConstruct {
            kind: Construct::Bracket,
            opened_at: Span { column: 13, .. },
        }
    ));
}

#[test]
fn input_ending_inside_arguments_names_the_opener() {
    for (source, column) in [
        ("entity E { move(1, ", 16),
        ("entity E { x = (1 + ", 16),
        ("func f(", 7),
    ] {
        let result = parse(source);
        assert_eq!(result.diagnostics.len(), 1, "{source:?}");
        assert!(
            matches!(
                result.diagnostics[0].error,
                SyntaxError::UnterminatedConstruct {
                    kind: Construct::Paren,
                    ..
                }
            ),
            "{source:?}"
        );
        assert_eq!(result.diagnostics[0].column(), column);
    }
}

#[test]
fn unterminated_comment() {
    let result = parse("entity E { wait; } /* trailing");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].column(), 20);
    assert_eq!(
        result.diagnostics[0].message(),
        "unterminated block comment opened at 1:20"
    );
    assert_eq!(result.program.declarations.len(), 1);
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn independent_errors_in_one_pass() {
    let source = "\
entity A {
    hp = ;
    wait;
}
entity B {
    move(1 2);
}
func c() {
    return 1 +;
}";
    let result = parse(source);
    let lines: Vec<u32> = result.diagnostics.iter().map(|d| d.line()).collect();
    assert_eq!(lines, [2, 6, 9]);
    assert_eq!(result.program.declarations.len(), 3);
}

#[test]
fn partial_tree_keeps_good_statements() {
    let result = parse("entity A { wait; 1 = 2; move(x); }");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].error, SyntaxError::InvalidAssignmentTarget);
    let level::language::Declaration::Entity(a) = &result.program.declarations[0] else {
        panic!("expected entity");
    };
    assert_eq!(a.body.statements.len(), 2);
}

#[test]
fn nesting_limit_is_configurable() {
    let source = "func f() { if (a) { if (b) { if (c) { wait; } } } }";
    assert!(parse(source).is_ok());

    let config = ParserConfig::default().with_max_depth(3);
    let result = parse_with_config(source, &config);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].error,
        SyntaxError::NestingTooDeep { limit: 3 }
    );
}

#[test]
fn pathological_nesting_does_not_overflow() {
    let source = format!("number x = {}1{};", "(".repeat(10_000), ")".repeat(10_000));
    let result = parse(&source);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(matches!(
        result.diagnostics[0].error,
        SyntaxError::NestingTooDeep { .. }
    ));
}

#[test]
fn long_operator_chain_does_not_overflow() {
    let source = format!("number x = {}1;", "1 + ".repeat(50_000));
    let result = parse(&source);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(matches!(
        result.diagnostics[0].error,
        SyntaxError::NestingTooDeep { .. }
    ));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn rendered_diagnostic() {
    let source = "entity Guard {\n    move(1 @ 2);\n}";
    let result = parse(source);
    let rendered = result.diagnostics[0].render(source);
    assert_eq!(
        rendered,
        "error at 2:12: unrecognized character '@'\n2 |     move(1 @ 2);\n  |            ^"
    );
}

#[test]
fn error_value_summarizes() {
    let err = parse("func a() { x = ; } func b() { y = ; }")
        .into_result()
        .unwrap_err();
    assert_eq!(err.diagnostics.len(), 2);
    assert!(err.to_string().ends_with("(and 1 more)"));

    let err = parse_expression("1 +").unwrap_err();
    assert_eq!(err.first().map(|d| d.column()), Some(4));
}
