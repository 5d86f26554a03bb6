use core::fmt::Write;
use std::borrow::Cow;

use crate::{dialect::Dialect, sql::tokens::Token, value::Value};

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords and operators (SELECT, FROM, =, etc.)
/// - `Ident` - Quoted identifiers (`"status"`)
/// - `Qualified` - Table-qualified identifiers (`"users"."id"`)
/// - `Raw` - Unquoted raw SQL text, emitted verbatim
/// - `Literal` - Inline literal value (`'open'`, `2`, `TRUE`)
/// - `Number` - Unsigned integer literal for LIMIT/OFFSET
/// - `Now` - The dialect's server-time call
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk<'a> {
    /// Renders as: keyword with automatic spacing rules
    Token(Token),

    /// Renders as: "name" (quote character depends on dialect)
    Ident(Cow<'a, str>),

    /// Renders as: "table"."column"
    Qualified {
        table: Cow<'a, str>,
        column: Cow<'a, str>,
    },

    /// Renders as: text (no quotes, as-is)
    Raw(Cow<'a, str>),

    /// Renders as: the value's literal form
    Literal(Cow<'a, Value>),

    /// Renders as: decimal digits
    Number(u64),

    /// Renders as: CURRENT_TIMESTAMP or CURRENT_TIMESTAMP()
    Now,
}

impl<'a> SQLChunk<'a> {
    /// Creates a quoted identifier from a static string - const
    #[inline]
    pub const fn ident_static(name: &'static str) -> Self {
        Self::Ident(Cow::Borrowed(name))
    }

    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    /// Creates a literal chunk borrowing the value - const
    #[inline]
    pub const fn literal_borrowed(value: &'a Value) -> Self {
        Self::Literal(Cow::Borrowed(value))
    }

    /// Write chunk content to buffer
    pub(crate) fn write(&self, dialect: Dialect, buf: &mut impl Write) {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => dialect.write_ident(name, buf),
            SQLChunk::Qualified { table, column } => {
                dialect.write_ident(table, buf);
                let _ = buf.write_char('.');
                dialect.write_ident(column, buf);
            }
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Literal(value) => value.write_literal(buf),
            // Stores take signed 64-bit counts.
            SQLChunk::Number(n) => {
                let _ = write!(buf, "{}", (*n).min(i64::MAX as u64));
            }
            SQLChunk::Now => {
                let _ = buf.write_str(dialect.current_timestamp());
            }
        }
    }

    /// Check if this chunk is "word-like" (needs space separation from other word-like chunks)
    #[inline]
    pub(crate) const fn is_word_like(&self) -> bool {
        match self {
            SQLChunk::Token(t) => !t.is_punctuation() && !t.is_operator(),
            SQLChunk::Ident(_)
            | SQLChunk::Qualified { .. }
            | SQLChunk::Raw(_)
            | SQLChunk::Literal(_)
            | SQLChunk::Number(_)
            | SQLChunk::Now => true,
        }
    }
}

impl<'a> From<Token> for SQLChunk<'a> {
    #[inline]
    fn from(value: Token) -> Self {
        SQLChunk::Token(value)
    }
}

impl<'a> From<Value> for SQLChunk<'a> {
    #[inline]
    fn from(value: Value) -> Self {
        SQLChunk::Literal(Cow::Owned(value))
    }
}

impl<'a> From<&'a Value> for SQLChunk<'a> {
    #[inline]
    fn from(value: &'a Value) -> Self {
        SQLChunk::Literal(Cow::Borrowed(value))
    }
}
