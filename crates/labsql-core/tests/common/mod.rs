#![allow(dead_code)]

use labsql_core::ast::{Expression, Insert};
use labsql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Insert {
    Parser::parse_sql(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::parse_sql(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Parses `sql` and returns its single value.
pub fn parse_value(sql: &str) -> Expression {
    let mut insert = parse(sql);
    assert_eq!(insert.values.len(), 1, "Expected one value in: {sql}");
    insert.values.remove(0)
}

pub fn id(name: &str) -> Expression {
    Expression::identifier(name)
}

pub fn num(literal: &str) -> Expression {
    Expression::number(literal)
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed into the same tree and
/// yields the same string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(ast1, ast2, "Round-trip changed the tree for: {sql}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
