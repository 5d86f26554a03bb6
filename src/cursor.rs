use core::fmt;
use core::str::FromStr;

use chrono::Timelike;
use quarry_core::{QuarryError, Value};

/// Opaque resume point: the key of the first row of the next page.
///
/// Displays as the key's literal form (`42`, `'abc'`,
/// `'2024-03-07 04:05:06'`) and parses back from it, so a cursor can be
/// handed to a client as text and fed back as `since_id` or `max_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor(Value);

impl Cursor {
    /// Wraps a key value. Timestamps are truncated to whole seconds to match
    /// their textual form.
    pub fn from_key(key: Value) -> Self {
        match key {
            Value::Timestamp(ts) => Cursor(Value::Timestamp(ts.with_nanosecond(0).unwrap_or(ts))),
            other => Cursor(other),
        }
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Cursor {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::parse_literal(s).map(Cursor::from_key)
    }
}

macro_rules! impl_cursor_from {
    ($($ty:ty),*) => { $(
        impl From<$ty> for Cursor {
            fn from(value: $ty) -> Self {
                Cursor::from_key(value.into())
            }
        }
    )* }
}

impl_cursor_from!(Value, i32, i64, u32, &str, String, chrono::NaiveDateTime);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_cursor_drops_subseconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_nano_opt(3, 4, 5, 678_000_000)
            .unwrap();
        let cursor = Cursor::from_key(Value::Timestamp(ts));
        assert_eq!(cursor.to_string(), "'2024-01-02 03:04:05'");
    }

    #[test]
    fn text_form_round_trips() {
        for text in ["42", "'abc'", "'2024-01-02 03:04:05'"] {
            let cursor: Cursor = text.parse().unwrap();
            assert_eq!(cursor.to_string(), text);
            let again: Cursor = cursor.to_string().parse().unwrap();
            assert_eq!(again, cursor);
        }
    }
}
