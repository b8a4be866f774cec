// tests/integration_tests.rs

use serde_json::json;
use srcql::cli::{CheckOptions, CheckResult, execute_check, execute_tokens};
use srcql::output::query_to_json;
use srcql::parser::parse;

// ============================================================================
// End-to-end query dumps
// ============================================================================

#[test]
fn test_wildcard_dump() {
    let query = parse("SELECT * FROM users").unwrap();
    assert_eq!(
        query_to_json(&query),
        json!({
            "statement": "select",
            "table": "users",
            "fields": ["*"],
            "where": null,
        })
    );
}

#[test]
fn test_qualified_fields_dump() {
    let query = parse(r#"SELECT a, b.c FROM "my table""#).unwrap();
    assert_eq!(
        query_to_json(&query),
        json!({
            "statement": "select",
            "table": "my table",
            "fields": ["a", "b.c"],
            "where": null,
        })
    );
}

#[test]
fn test_where_dump_is_postfix() {
    let query = parse("SELECT a FROM t WHERE x = 1 AND y = 2").unwrap();
    assert_eq!(
        query_to_json(&query),
        json!({
            "statement": "select",
            "table": "t",
            "fields": ["a"],
            "where": ["x", "1", "=", "y", "2", "=", "AND"],
        })
    );
}

#[test]
fn test_complex_where_dump() {
    let query =
        parse("SELECT name FROM funcs WHERE NOT exported OR doc LIKE '%deprecated%'").unwrap();
    assert_eq!(
        query_to_json(&query),
        json!({
            "statement": "select",
            "table": "funcs",
            "fields": ["name"],
            "where": ["exported", "NOT", "doc", "'%deprecated%'", "LIKE", "OR"],
        })
    );
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn test_execute_check_valid() {
    let options = CheckOptions {
        query: "SELECT * FROM users".to_string(),
        dump_ast: false,
    };
    assert!(matches!(
        execute_check(&options).unwrap(),
        CheckResult::SyntaxValid
    ));
}

#[test]
fn test_execute_check_dumps_ast() {
    let options = CheckOptions {
        query: "SELECT a FROM t".to_string(),
        dump_ast: true,
    };
    match execute_check(&options).unwrap() {
        CheckResult::Ast(value) => assert_eq!(value["table"], "t"),
        other => panic!("Expected AST dump, got {:?}", other),
    }
}

#[test]
fn test_execute_check_rejects_bad_query() {
    let options = CheckOptions {
        query: "SELECT FROM t".to_string(),
        dump_ast: false,
    };
    let err = execute_check(&options).unwrap_err();
    assert!(err.to_string().contains("Syntax error"));
}

#[test]
fn test_execute_check_rejects_trailing_garbage() {
    let options = CheckOptions {
        query: "SELECT a FROM t SELECT".to_string(),
        dump_ast: false,
    };
    assert!(execute_check(&options).is_err());
}

#[test]
fn test_execute_tokens_dump() {
    let value = execute_tokens("SELECT *");
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 3); // SELECT, whitespace, *
    assert_eq!(tokens[0]["kind"], "select");
    assert_eq!(tokens[0]["pos"], 0);
    assert_eq!(tokens[1]["kind"], "whitespace");
    assert_eq!(tokens[2]["kind"], "wildcard");
    assert_eq!(tokens[2]["raw"], "*");
}

#[test]
fn test_execute_tokens_reports_lexical_faults() {
    let value = execute_tokens("a # b");
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens[2]["kind"], "error");
    assert!(
        tokens[2]["message"]
            .as_str()
            .unwrap()
            .contains("unexpected character")
    );
}

// ============================================================================
// Round trips through quoting
// ============================================================================

#[test]
fn test_quoted_names_flow_through() {
    let query = parse(r#"SELECT "first name" FROM "my table" WHERE "first name" = 'it\'s'"#)
        .unwrap();
    let value = query_to_json(&query);
    assert_eq!(value["table"], "my table");
    assert_eq!(value["fields"][0], "first name");
    assert_eq!(value["where"][1], r"'it\'s'");
}

// ============================================================================
// One query, one parser
// ============================================================================

#[test]
fn test_parsers_are_independent() {
    // Two queries parsed by separate instances never share pushback state
    let a = parse("SELECT a FROM t WHERE x = 1").unwrap();
    let b = parse("SELECT b FROM u").unwrap();
    assert_ne!(query_to_json(&a), query_to_json(&b));
}
