//! Literal values carried by predicates, records, rows and cursors.

use chrono::NaiveDateTime;
use std::borrow::Cow;
use core::fmt::{self, Display, Write};

use crate::error::{QuarryError, Result};

/// Fixed textual form for timestamp literals and cursors.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl Value {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Writes the SQL literal form: quoted text and timestamps, bare numbers.
    pub fn write_literal(&self, buf: &mut impl Write) {
        match self {
            Value::Null => {
                let _ = buf.write_str("NULL");
            }
            Value::Bool(true) => {
                let _ = buf.write_str("TRUE");
            }
            Value::Bool(false) => {
                let _ = buf.write_str("FALSE");
            }
            Value::Integer(v) => {
                let _ = write!(buf, "{v}");
            }
            // SQL has no NaN or infinity literal.
            Value::Real(v) if !v.is_finite() => {
                let _ = buf.write_str("NULL");
            }
            Value::Real(v) => {
                let _ = write!(buf, "{v}");
            }
            Value::Text(text) => write_quoted(text, buf),
            Value::Timestamp(ts) => {
                let _ = write!(buf, "'{}'", ts.format(TIMESTAMP_FORMAT));
            }
        }
    }

    /// Returns the SQL literal form as a string.
    pub fn to_literal(&self) -> String {
        let mut buf = String::new();
        self.write_literal(&mut buf);
        buf
    }

    /// Parses a literal previously produced by [`Value::write_literal`].
    ///
    /// Quoted text matching [`TIMESTAMP_FORMAT`] comes back as a timestamp.
    pub fn parse_literal(text: &str) -> Result<Value> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("NULL") {
            return Ok(Value::Null);
        }
        if text.eq_ignore_ascii_case("TRUE") {
            return Ok(Value::Bool(true));
        }
        if text.eq_ignore_ascii_case("FALSE") {
            return Ok(Value::Bool(false));
        }
        if let Some(inner) = text
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            let unescaped = inner.replace("''", "'");
            return Ok(match NaiveDateTime::parse_from_str(&unescaped, TIMESTAMP_FORMAT) {
                Ok(ts) => Value::Timestamp(ts),
                Err(_) => Value::Text(unescaped),
            });
        }
        if let Ok(v) = text.parse::<i64>() {
            return Ok(Value::Integer(v));
        }
        if let Ok(v) = text.parse::<f64>() {
            return Ok(Value::Real(v));
        }
        Err(QuarryError::InvalidCursor(text.to_string()))
    }
}

fn write_quoted(text: &str, buf: &mut impl Write) {
    let _ = buf.write_char('\'');
    for ch in text.chars() {
        if ch == '\'' {
            let _ = buf.write_char('\'');
        }
        let _ = buf.write_char(ch);
    }
    let _ = buf.write_char('\'');
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_literal(f);
        Ok(())
    }
}

// ==================== conversions ====================

macro_rules! impl_from_integer {
    ($($ty:ty),*) => { $(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Integer(value as i64)
            }
        }
    )* }
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<'a> From<Value> for Cow<'a, Value> {
    fn from(value: Value) -> Self {
        Cow::Owned(value)
    }
}

impl<'a> From<&'a Value> for Cow<'a, Value> {
    fn from(value: &'a Value) -> Self {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn non_finite_reals_render_null() {
        assert_eq!(Value::Real(f64::NAN).to_literal(), "NULL");
        assert_eq!(Value::Real(f64::INFINITY).to_literal(), "NULL");
        assert_eq!(Value::Real(f64::NEG_INFINITY).to_literal(), "NULL");
        assert_eq!(Value::Real(2.5).to_literal(), "2.5");
    }

    #[test]
    fn literal_forms() {
        assert_eq!(Value::from("open").to_literal(), "'open'");
        assert_eq!(Value::from(2).to_literal(), "2");
        assert_eq!(Value::from(true).to_literal(), "TRUE");
        assert_eq!(Value::Null.to_literal(), "NULL");
        assert_eq!(Value::from("o'neil").to_literal(), "'o''neil'");
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(4, 5, 6)
            .unwrap();
        assert_eq!(Value::from(ts).to_literal(), "'2024-03-07 04:05:06'");
    }

    #[test]
    fn parse_literal_reads_back() {
        assert_eq!(Value::parse_literal("42").unwrap(), Value::Integer(42));
        assert_eq!(Value::parse_literal("1.5").unwrap(), Value::Real(1.5));
        assert_eq!(
            Value::parse_literal("'o''neil'").unwrap(),
            Value::Text("o'neil".into())
        );
        assert!(matches!(
            Value::parse_literal("'2024-03-07 04:05:06'").unwrap(),
            Value::Timestamp(_)
        ));
        assert!(Value::parse_literal("not a literal").is_err());
    }

    #[test]
    fn lone_quote_is_not_a_literal() {
        assert!(Value::parse_literal("'").is_err());
    }
}
