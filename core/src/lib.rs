//! Clause compiler for quarry.
//!
//! Turns structured query descriptors into SQL fragments. Pure and stateless:
//! nothing in this crate performs I/O.

pub mod compile;
pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod expressions;
pub mod helpers;
pub mod json;
pub mod sql;
pub mod tracing;
pub mod value;

// Re-export key types
pub use compile::{CompiledClauseSet, CompiledInsertion, TimestampColumns};
pub use descriptor::{OrderBy, Ordering, Predicate, Projection, QueryDescriptor, Record};
pub use dialect::Dialect;
pub use error::{QuarryError, Result};
pub use expressions::conditions::{Comparison, Condition};
pub use sql::{SQL, SQLChunk, Token};
pub use value::{TIMESTAMP_FORMAT, Value};
