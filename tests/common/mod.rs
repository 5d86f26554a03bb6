#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use quarry::{Executor, QuarryError, Result, Row};
use tokio::sync::mpsc;

/// Records every statement and answers from a queue of canned responses.
///
/// An empty queue answers with no rows.
#[derive(Debug)]
pub struct MockExecutor {
    responses: Mutex<VecDeque<Result<Vec<Row>>>>,
    statements: Mutex<Vec<String>>,
    released: mpsc::UnboundedSender<String>,
    fail_release: bool,
}

impl MockExecutor {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (released, rx) = mpsc::unbounded_channel();
        let executor = Self {
            responses: Mutex::new(VecDeque::new()),
            statements: Mutex::new(Vec::new()),
            released,
            fail_release: false,
        };
        (executor, rx)
    }

    pub fn failing_release(mut self) -> Self {
        self.fail_release = true;
        self
    }

    pub fn respond(self, rows: Vec<Row>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(QuarryError::ExecutionError(message.to_string())));
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

impl Executor for MockExecutor {
    async fn execute(&self, statement: &str) -> Result<Vec<Row>> {
        self.statements.lock().unwrap().push(statement.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn release(&self, statement: &str) -> Result<()> {
        let _ = self.released.send(statement.to_string());
        if self.fail_release {
            Err(QuarryError::ExecutionError("release failed".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn id_row(id: i64) -> Row {
    Row::new().with("id", id)
}

#[cfg(feature = "rusqlite")]
pub mod sqlite {
    use std::sync::Arc;

    use quarry::{Model, Result, sqlite::RusqliteExecutor};

    /// `posts` table with keys `1..=count`; even keys are `open`.
    pub fn posts(count: i64) -> Result<Model<RusqliteExecutor>> {
        let executor = RusqliteExecutor::open_in_memory()?;
        executor.with_connection(|conn| {
            conn.execute_batch(
                r#"CREATE TABLE posts (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    status TEXT NOT NULL,
                    published TEXT,
                    "createdAt" TEXT,
                    "updatedAt" TEXT
                );"#,
            )?;
            for id in 1..=count {
                let status = if id % 2 == 0 { "open" } else { "closed" };
                conn.execute(
                    "INSERT INTO posts (id, title, status, published) VALUES (?1, ?2, ?3, datetime('2024-01-01 00:00:00', ?4))",
                    rusqlite::params![id, format!("post {id}"), status, format!("+{id} hours")],
                )?;
            }
            Ok(())
        })?;
        Model::new("posts", Arc::new(executor))
    }
}
