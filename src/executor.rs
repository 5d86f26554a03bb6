//! The executor capability: whatever actually talks to the store.

use std::future::Future;

use quarry_core::Result;

use crate::row::Row;

/// Runs rendered statements against a data store.
///
/// Implementations own connection handling, pooling, timeouts and retries.
/// Errors returned from [`Executor::execute`] reach the caller unchanged.
pub trait Executor: Send + Sync + 'static {
    /// Executes `statement` and returns the resulting rows, in store order.
    fn execute(&self, statement: &str) -> impl Future<Output = Result<Vec<Row>>> + Send;

    /// Releases any resource held for a one-shot `statement`.
    ///
    /// Called from a detached task after every statement; failures are
    /// logged and otherwise ignored.
    fn release(&self, statement: &str) -> impl Future<Output = Result<()>> + Send {
        let _ = statement;
        async { Ok(()) }
    }
}
