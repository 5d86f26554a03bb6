//! # quarry
//!
//! Descriptor-driven SQL clause compiler with stateless cursor pagination.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quarry::prelude::*;
//!
//! # async fn run() -> quarry::Result<()> {
//! let executor = Arc::new(RusqliteExecutor::open_in_memory()?);
//! let posts = Model::new("posts", executor)?;
//!
//! posts.insert(&Record::new().set("title", "hello")).await?;
//!
//! let first = posts.paginate(&PageRequest::new().limit(20)).await?;
//! if let Some(cursor) = first.next_cursor {
//!     let second = posts.paginate(&PageRequest::new().limit(20).since(cursor)).await?;
//! #   let _ = second;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Default | Enables                                   |
//! |------------|---------|-------------------------------------------|
//! | `tracing`  | yes     | debug events per statement and page       |
//! | `rusqlite` | yes     | [`sqlite::RusqliteExecutor`]              |

pub mod cursor;
pub mod executor;
pub mod json;
pub mod model;
pub mod paginate;
pub mod row;
pub mod settings;
#[cfg(feature = "rusqlite")]
pub mod sqlite;

pub use quarry_core::{
    CompiledClauseSet, CompiledInsertion, Comparison, Condition, Dialect, OrderBy, Ordering,
    Predicate, Projection, QuarryError, QueryDescriptor, Record, Result, SQL, TimestampColumns,
    Value, compile, helpers,
};

pub use cursor::Cursor;
pub use executor::Executor;
pub use model::{JoinRequest, Model};
pub use paginate::{Page, PageRequest};
pub use row::Row;
pub use settings::{Lookahead, Settings};

pub mod prelude {
    pub use crate::{
        Comparison, Cursor, Executor, JoinRequest, Lookahead, Model, OrderBy, Ordering, Page,
        PageRequest, Predicate, Projection, QueryDescriptor, Record, Row, Settings, Value,
    };

    #[cfg(feature = "rusqlite")]
    pub use crate::sqlite::RusqliteExecutor;
}
