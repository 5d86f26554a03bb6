//! Tracing utilities for statement and pagination observability.
//!
//! Enable the `tracing` feature to emit spans and events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the statement text and target table.
///
/// ```ignore
/// quarry_trace_statement!(&statement, "users");
/// ```
#[macro_export]
macro_rules! quarry_trace_statement {
    ($sql:expr, $table:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, table = %$table, "quarry.statement");
    };
}

/// Emit a debug-level tracing event summarising one resolved page.
///
/// ```ignore
/// quarry_trace_page!("users", rows.len(), cursor.is_some());
/// ```
#[macro_export]
macro_rules! quarry_trace_page {
    ($table:expr, $rows:expr, $has_next:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %$table,
            rows = $rows,
            has_next = $has_next,
            "quarry.page"
        );
    };
}
