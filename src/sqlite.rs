//! rusqlite-backed [`Executor`].

use std::sync::{Arc, Mutex};

use quarry_core::{QuarryError, Result, Value};
use rusqlite::{Connection, types::ValueRef};

use crate::{executor::Executor, row::Row};

/// Runs statements on one shared connection from the blocking pool.
#[derive(Debug, Clone)]
pub struct RusqliteExecutor {
    conn: Arc<Mutex<Connection>>,
}

impl RusqliteExecutor {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// Runs `f` against the connection on the calling thread.
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| QuarryError::ExecutionError(e.to_string()))?;
        f(&conn)
    }
}

fn read_value(value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(bytes) => Value::Text(
            std::str::from_utf8(bytes)
                .map_err(|e| QuarryError::Mapping(e.to_string()))?
                .to_string(),
        ),
        ValueRef::Blob(_) => {
            return Err(QuarryError::Mapping(
                "blob columns are not supported".to_string(),
            ));
        }
    })
}

fn run(conn: &Connection, statement: &str) -> Result<Vec<Row>> {
    let mut stmt = conn.prepare(statement)?;
    if stmt.column_count() == 0 {
        stmt.execute([])?;
        return Ok(Vec::new());
    }

    let names: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut mapped = Row::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            mapped.push(name.as_str(), read_value(row.get_ref(idx)?)?);
        }
        out.push(mapped);
    }
    Ok(out)
}

impl Executor for RusqliteExecutor {
    async fn execute(&self, statement: &str) -> Result<Vec<Row>> {
        let conn = Arc::clone(&self.conn);
        let statement = statement.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| QuarryError::ExecutionError(e.to_string()))?;
            run(&conn, &statement)
        })
        .await
        .map_err(|e| QuarryError::ExecutionError(e.to_string()))?
    }
}
