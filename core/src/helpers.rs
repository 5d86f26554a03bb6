//! Statement assembly.
//!
//! Fragments are always joined in the order METHOD, PROJECTION, SOURCE, JOIN,
//! PREDICATE, ORDER, LIMIT, OFFSET; clauses a statement kind does not take
//! are skipped.

use crate::{
    SQL, Token,
    compile::{CompiledClauseSet, CompiledInsertion},
};

/// Helper function to create a FROM clause
pub fn from<'a>(table: &'a str) -> SQL<'a> {
    SQL::token(Token::FROM).append(SQL::ident(table))
}

fn tail<'a>(sql: SQL<'a>, clauses: &CompiledClauseSet<'a>, with_offset: bool) -> SQL<'a> {
    let mut sql = sql.append(clauses.predicate.clone());
    if let Some(ordering) = &clauses.ordering {
        sql.append_mut(ordering.clone());
    }
    if let Some(limit) = &clauses.limit {
        sql.append_mut(limit.clone());
    }
    if with_offset && let Some(offset) = &clauses.offset {
        sql.append_mut(offset.clone());
    }
    sql
}

/// `SELECT projection FROM table [join] WHERE ... [ORDER BY] [LIMIT] [OFFSET]`
pub fn select<'a>(
    table: &'a str,
    clauses: &CompiledClauseSet<'a>,
    join: Option<SQL<'a>>,
) -> SQL<'a> {
    let sql = SQL::token(Token::SELECT)
        .append(clauses.projection.clone())
        .append(from(table))
        .append(join.unwrap_or_default());
    tail(sql, clauses, true)
}

/// `DELETE FROM table WHERE ... [ORDER BY] [LIMIT]`
pub fn delete<'a>(table: &'a str, clauses: &CompiledClauseSet<'a>) -> SQL<'a> {
    let sql = SQL::token(Token::DELETE).append(from(table));
    tail(sql, clauses, false)
}

/// `UPDATE table SET ... WHERE ... [ORDER BY] [LIMIT]`
pub fn update<'a>(table: &'a str, assignment: SQL<'a>, clauses: &CompiledClauseSet<'a>) -> SQL<'a> {
    let sql = SQL::token(Token::UPDATE)
        .append(SQL::ident(table))
        .append(assignment);
    tail(sql, clauses, false)
}

/// `INSERT INTO table (keys) VALUES (values)`
pub fn insert<'a>(table: &'a str, insertion: CompiledInsertion<'a>) -> SQL<'a> {
    SQL::token(Token::INSERT)
        .push(Token::INTO)
        .append(SQL::ident(table))
        .append(insertion.keys)
        .push(Token::VALUES)
        .append(insertion.values)
}
