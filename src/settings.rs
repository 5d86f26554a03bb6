//! Model settings.
//!
//! Every field has a default, so an empty TOML document is valid:
//!
//! ```toml
//! dialect = "mysql"
//! page_size = 25
//! key_field = "id"
//! created_at = "createdAt"
//! updated_at = "updatedAt"
//! lookahead = "over-fetch"
//! ```

use quarry_core::{Dialect, QuarryError, Result, TimestampColumns};
use serde::Deserialize;

/// How the paginator decides whether a further page exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lookahead {
    /// Second single-row query for the first key past the page.
    #[default]
    Probe,
    /// Fetch `limit + 1` rows and trim the extra one.
    OverFetch,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dialect: Dialect,
    /// Page size used when a request does not set one
    pub page_size: u64,
    /// Cursor column used when a request does not set one
    pub key_field: String,
    pub created_at: String,
    pub updated_at: String,
    pub lookahead: Lookahead,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            page_size: 10,
            key_field: "id".to_string(),
            created_at: "createdAt".to_string(),
            updated_at: "updatedAt".to_string(),
            lookahead: Lookahead::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| QuarryError::Config(e.to_string()))
    }

    pub fn timestamps(&self) -> TimestampColumns {
        TimestampColumns {
            created_at: self.created_at.clone().into(),
            updated_at: self.updated_at.clone().into(),
        }
    }
}
