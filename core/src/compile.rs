//! Clause compiler.
//!
//! One pure function per clause kind. Each produces an independent [`SQL`]
//! fragment; statement assembly order is fixed by the helpers in
//! [`crate::helpers`], not here.

use std::borrow::Cow;

use crate::{
    SQL, SQLChunk, Token,
    descriptor::{OrderBy, Ordering, Predicate, Projection, QueryDescriptor, Record},
    error::{QuarryError, Result},
    expressions::conditions::and,
};

/// Names of the synthetic timestamp columns written on insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampColumns {
    pub created_at: Cow<'static, str>,
    pub updated_at: Cow<'static, str>,
}

impl Default for TimestampColumns {
    fn default() -> Self {
        Self {
            created_at: Cow::Borrowed("createdAt"),
            updated_at: Cow::Borrowed("updatedAt"),
        }
    }
}

/// Compiled fragments of one find/delete/update descriptor.
///
/// Immutable once produced. `ordering`, `limit` and `offset` are `None` when
/// the descriptor did not ask for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClauseSet<'a> {
    pub projection: SQL<'a>,
    pub predicate: SQL<'a>,
    pub ordering: Option<SQL<'a>>,
    pub limit: Option<SQL<'a>>,
    pub offset: Option<SQL<'a>>,
}

/// Parenthesized column and value lists for an insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledInsertion<'a> {
    pub keys: SQL<'a>,
    pub values: SQL<'a>,
}

/// Compiles every clause of `descriptor`.
pub fn compile(descriptor: &QueryDescriptor) -> CompiledClauseSet<'_> {
    CompiledClauseSet {
        projection: compile_projection(&descriptor.projection),
        predicate: compile_predicate(&descriptor.predicate),
        ordering: compile_ordering(&descriptor.ordering),
        limit: descriptor.limit.map(compile_limit),
        offset: descriptor.offset.map(compile_offset),
    }
}

/// `*` when nothing is included, else the included identifiers comma-joined.
pub fn compile_projection(projection: &Projection) -> SQL<'_> {
    let columns = SQL::join(
        projection
            .fields
            .iter()
            .filter(|(_, include)| *include)
            .map(|(field, _)| SQL::ident(field.as_str())),
        Token::COMMA,
    );
    if columns.is_empty() {
        SQL::token(Token::STAR)
    } else {
        columns
    }
}

/// `WHERE ...`. The match-all predicate compiles to `WHERE TRUE`; a raw
/// predicate is emitted verbatim.
pub fn compile_predicate(predicate: &Predicate) -> SQL<'_> {
    let conditions = and(predicate
        .fields
        .iter()
        .map(|(field, condition)| condition.to_sql(field)));

    let body = match (&predicate.raw, conditions.is_empty()) {
        (None, true) => SQL::token(Token::TRUE),
        (None, false) => conditions,
        (Some(raw), true) => SQL::raw(raw.as_str()),
        (Some(raw), false) => SQL::raw(raw.as_str())
            .parens()
            .push(Token::AND)
            .append(conditions),
    };

    SQL::token(Token::WHERE).append(body)
}

/// `ORDER BY field ASC|DESC, ...`, or `None` for an empty ordering.
pub fn compile_ordering(ordering: &Ordering) -> Option<SQL<'_>> {
    if ordering.is_empty() {
        return None;
    }

    let entries = ordering.fields.iter().map(|(field, direction)| {
        SQL::ident(field.as_str()).push(match direction {
            OrderBy::Asc => Token::ASC,
            OrderBy::Desc => Token::DESC,
        })
    });

    Some(
        SQL::token(Token::ORDER)
            .push(Token::BY)
            .append(SQL::join(entries, Token::COMMA)),
    )
}

pub fn compile_limit<'a>(limit: u64) -> SQL<'a> {
    SQL::token(Token::LIMIT).push(SQLChunk::Number(limit))
}

pub fn compile_offset<'a>(offset: u64) -> SQL<'a> {
    SQL::token(Token::OFFSET).push(SQLChunk::Number(offset))
}

/// Insertion with the default `createdAt`/`updatedAt` columns.
pub fn compile_insertion(record: &Record) -> CompiledInsertion<'_> {
    compile_insertion_with(record, &TimestampColumns::default())
}

/// `(k1, k2, created, updated)` and `(v1, v2, now, now)`.
pub fn compile_insertion_with<'a>(
    record: &'a Record,
    timestamps: &TimestampColumns,
) -> CompiledInsertion<'a> {
    let keys = record
        .fields
        .iter()
        .map(|(field, _)| SQL::ident(field.as_str()))
        .chain([
            SQL::ident(timestamps.created_at.clone().into_owned()),
            SQL::ident(timestamps.updated_at.clone().into_owned()),
        ]);
    let values = record
        .fields
        .iter()
        .map(|(_, value)| SQL::literal(value))
        .chain([SQL::now(), SQL::now()]);

    CompiledInsertion {
        keys: SQL::join(keys, Token::COMMA).parens(),
        values: SQL::join(values, Token::COMMA).parens(),
    }
}

/// Assignment with the default `updatedAt` column.
pub fn compile_assignment(record: &Record) -> SQL<'_> {
    compile_assignment_with(record, &TimestampColumns::default())
}

/// `SET k1 = v1, ..., updated = now`.
pub fn compile_assignment_with<'a>(record: &'a Record, timestamps: &TimestampColumns) -> SQL<'a> {
    let pairs = record
        .fields
        .iter()
        .map(|(field, value)| {
            SQL::ident(field.as_str())
                .push(Token::EQ)
                .append(SQL::literal(value))
        })
        .chain([SQL::ident(timestamps.updated_at.clone().into_owned())
            .push(Token::EQ)
            .push(SQLChunk::Now)]);

    SQL::token(Token::SET).append(SQL::join(pairs, Token::COMMA))
}

/// `INNER JOIN target ON source.left = target.right AND ...`.
///
/// Each pair is `"left:right"`. At least one pair is required.
pub fn compile_join<'a, S>(source: &'a str, target: &'a str, pairs: &'a [S]) -> Result<SQL<'a>>
where
    S: AsRef<str>,
{
    if target.is_empty() {
        return Err(QuarryError::MissingJoinTable);
    }
    if pairs.is_empty() {
        return Err(QuarryError::InvalidJoinSpec);
    }

    let mut conditions = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let pair = pair.as_ref();
        let (left, right) = pair
            .split_once(':')
            .filter(|(l, r)| !l.is_empty() && !r.is_empty() && !r.contains(':'))
            .ok_or_else(|| QuarryError::MalformedJoinPair(pair.to_string()))?;
        conditions.push(
            SQL::qualified(source, left)
                .push(Token::EQ)
                .append(SQL::qualified(target, right)),
        );
    }

    Ok(SQL::token(Token::INNER)
        .push(Token::JOIN)
        .append(SQL::ident(target))
        .push(Token::ON)
        .append(and(conditions)))
}
