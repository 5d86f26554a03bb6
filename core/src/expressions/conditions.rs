use std::borrow::Cow;

use crate::{SQL, Token, Value};

/// Format a SQL comparison with the given operator
fn internal_format_sql_comparison<'a>(
    left: SQL<'a>,
    operator: Token,
    right: impl Into<Cow<'a, Value>>,
) -> SQL<'a> {
    left.push(operator).append(SQL::literal(right))
}

/// Create an equality condition (=)
///
/// # Example
/// ```
/// # use quarry_core::{SQL, expressions::conditions::eq};
/// let condition = eq(SQL::ident("status"), "open");
/// assert_eq!(condition.to_string(), "\"status\" = 'open'");
/// ```
pub fn eq<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::EQ, right.into())
}

/// Create a not-equal condition (<>)
pub fn neq<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::NE, right.into())
}

/// Create a greater-than condition (>)
///
/// # Example
/// ```
/// # use quarry_core::{SQL, expressions::conditions::gt};
/// let condition = gt(SQL::ident("price"), 100);
/// assert_eq!(condition.to_string(), "\"price\" > 100");
/// ```
pub fn gt<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::GT, right.into())
}

/// Create a greater-than-or-equal condition (>=)
pub fn gte<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::GE, right.into())
}

/// Create a less-than condition (<)
pub fn lt<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::LT, right.into())
}

/// Create a less-than-or-equal condition (<=)
pub fn lte<'a>(left: SQL<'a>, right: impl Into<Value>) -> SQL<'a> {
    internal_format_sql_comparison(left, Token::LE, right.into())
}

/// Create an IS NULL condition
pub fn is_null(left: SQL<'_>) -> SQL<'_> {
    left.push(Token::IS).push(Token::NULL)
}

/// Create an IS NOT NULL condition
pub fn is_not_null(left: SQL<'_>) -> SQL<'_> {
    left.push(Token::IS).push(Token::NOT).push(Token::NULL)
}

/// Flat AND-conjunction, no parenthesization
pub fn and<'a, T>(conditions: T) -> SQL<'a>
where
    T: IntoIterator<Item = SQL<'a>>,
{
    SQL::join(conditions.into_iter().filter(|c| !c.is_empty()), Token::AND)
}

/// A single comparison against a literal operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Eq(Value),
    Ne(Value),
    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
}

impl Comparison {
    /// The comparison operator token.
    pub const fn operator(&self) -> Token {
        match self {
            Comparison::Eq(_) => Token::EQ,
            Comparison::Ne(_) => Token::NE,
            Comparison::Gt(_) => Token::GT,
            Comparison::Gte(_) => Token::GE,
            Comparison::Lt(_) => Token::LT,
            Comparison::Lte(_) => Token::LE,
        }
    }

    pub const fn operand(&self) -> &Value {
        match self {
            Comparison::Eq(v)
            | Comparison::Ne(v)
            | Comparison::Gt(v)
            | Comparison::Gte(v)
            | Comparison::Lt(v)
            | Comparison::Lte(v) => v,
        }
    }

    /// Compiles `left <op> operand`.
    ///
    /// Equality and inequality against `NULL` compile to `IS [NOT] NULL`.
    pub fn to_sql<'a>(&'a self, left: SQL<'a>) -> SQL<'a> {
        match self {
            Comparison::Eq(Value::Null) => is_null(left),
            Comparison::Ne(Value::Null) => is_not_null(left),
            other => internal_format_sql_comparison(left, other.operator(), other.operand()),
        }
    }
}

/// The condition attached to one predicate field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Plain literal, meaning equality
    Literal(Value),
    /// Operator list, AND-joined in declared order
    Compare(Vec<Comparison>),
}

impl Condition {
    /// Compiles the condition for `field`.
    pub fn to_sql<'a>(&'a self, field: &'a str) -> SQL<'a> {
        match self {
            Condition::Literal(Value::Null) => is_null(SQL::ident(field)),
            Condition::Literal(value) => {
                internal_format_sql_comparison(SQL::ident(field), Token::EQ, value)
            }
            Condition::Compare(comparisons) => and(comparisons
                .iter()
                .map(|comparison| comparison.to_sql(SQL::ident(field)))),
        }
    }
}

macro_rules! impl_condition_from_literal {
    ($($ty:ty),*) => { $(
        impl From<$ty> for Condition {
            fn from(value: $ty) -> Self {
                Condition::Literal(value.into())
            }
        }
    )* }
}

impl_condition_from_literal!(
    Value,
    i32,
    i64,
    u32,
    f64,
    bool,
    &str,
    String,
    chrono::NaiveDateTime
);

impl From<Comparison> for Condition {
    fn from(value: Comparison) -> Self {
        Condition::Compare(vec![value])
    }
}

impl From<Vec<Comparison>> for Condition {
    fn from(value: Vec<Comparison>) -> Self {
        Condition::Compare(value)
    }
}
