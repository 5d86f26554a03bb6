//! SQL dialects the clause compiler can render for.

use core::fmt::Write;

use serde::Deserialize;

/// Target store flavour.
///
/// Only affects surface syntax: identifier quoting and the server-time call
/// used for the synthetic timestamp columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "sqlite3")]
    SQLite,
    #[serde(alias = "postgres")]
    PostgreSQL,
    MySQL,
}

impl Dialect {
    /// Character used to quote identifiers.
    #[inline]
    pub const fn quote_char(&self) -> char {
        match self {
            Dialect::SQLite | Dialect::PostgreSQL => '"',
            Dialect::MySQL => '`',
        }
    }

    /// Store-side function call returning the current server time.
    #[inline]
    pub const fn current_timestamp(&self) -> &'static str {
        match self {
            Dialect::SQLite | Dialect::PostgreSQL => "CURRENT_TIMESTAMP",
            Dialect::MySQL => "CURRENT_TIMESTAMP()",
        }
    }

    /// Writes `name` as a quoted identifier, doubling embedded quote characters.
    pub fn write_ident(&self, name: &str, buf: &mut impl Write) {
        let quote = self.quote_char();
        let _ = buf.write_char(quote);
        for ch in name.chars() {
            if ch == quote {
                let _ = buf.write_char(quote);
            }
            let _ = buf.write_char(ch);
        }
        let _ = buf.write_char(quote);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_per_dialect() {
        let mut sqlite = String::new();
        Dialect::SQLite.write_ident("status", &mut sqlite);
        assert_eq!(sqlite, "\"status\"");

        let mut mysql = String::new();
        Dialect::MySQL.write_ident("status", &mut mysql);
        assert_eq!(mysql, "`status`");
    }

    #[test]
    fn escapes_embedded_quote() {
        let mut buf = String::new();
        Dialect::PostgreSQL.write_ident("we\"ird", &mut buf);
        assert_eq!(buf, "\"we\"\"ird\"");
    }
}
