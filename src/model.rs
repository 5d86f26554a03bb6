//! Table-bound entry points.
//!
//! Every operation compiles its statement completely before the executor is
//! called, so validation errors never reach the store.

use std::sync::Arc;

use quarry_core::{
    QuarryError, QueryDescriptor, Record, Result,
    compile::{compile, compile_assignment_with, compile_insertion_with, compile_join},
    helpers,
};

use crate::{
    executor::Executor,
    paginate::{Page, PagePlan, PageRequest},
    row::Row,
    settings::{Lookahead, Settings},
};

/// Inner join from the model's table onto `table`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinRequest {
    pub table: String,
    /// `"left:right"` column pairs, left on the model's table
    pub inner: Vec<String>,
    pub options: QueryDescriptor,
}

impl JoinRequest {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, pair: impl Into<String>) -> Self {
        self.inner.push(pair.into());
        self
    }

    pub fn options(mut self, options: QueryDescriptor) -> Self {
        self.options = options;
        self
    }
}

/// A table name bound to an executor.
#[derive(Debug)]
pub struct Model<E: Executor> {
    name: String,
    executor: Arc<E>,
    settings: Settings,
}

impl<E: Executor> Clone for Model<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            executor: Arc::clone(&self.executor),
            settings: self.settings.clone(),
        }
    }
}

impl<E: Executor> Model<E> {
    pub fn new(name: impl Into<String>, executor: Arc<E>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(QuarryError::MissingTableName);
        }
        Ok(Self {
            name,
            executor,
            settings: Settings::default(),
        })
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn executor(&self) -> &Arc<E> {
        &self.executor
    }

    /// `SELECT ... FROM table ...`
    pub async fn find(&self, descriptor: &QueryDescriptor) -> Result<Vec<Row>> {
        let clauses = compile(descriptor);
        let statement = helpers::select(&self.name, &clauses, None).render(self.settings.dialect);
        self.run(statement).await
    }

    /// `INSERT INTO table (...) VALUES (...)` with both timestamp columns set
    /// to the server's current time.
    pub async fn insert(&self, record: &Record) -> Result<Vec<Row>> {
        let insertion = compile_insertion_with(record, &self.settings.timestamps());
        let statement = helpers::insert(&self.name, insertion).render(self.settings.dialect);
        self.run(statement).await
    }

    /// `DELETE FROM table ...`. Projection and offset are ignored.
    pub async fn delete(&self, descriptor: &QueryDescriptor) -> Result<Vec<Row>> {
        let clauses = compile(descriptor);
        let statement = helpers::delete(&self.name, &clauses).render(self.settings.dialect);
        self.run(statement).await
    }

    /// `UPDATE table SET ...` touching the update timestamp column.
    pub async fn update(&self, record: &Record, descriptor: &QueryDescriptor) -> Result<Vec<Row>> {
        let assignment = compile_assignment_with(record, &self.settings.timestamps());
        let clauses = compile(descriptor);
        let statement =
            helpers::update(&self.name, assignment, &clauses).render(self.settings.dialect);
        self.run(statement).await
    }

    pub async fn join(&self, request: &JoinRequest) -> Result<Vec<Row>> {
        let join = compile_join(&self.name, &request.table, &request.inner)?;
        let clauses = compile(&request.options);
        let statement =
            helpers::select(&self.name, &clauses, Some(join)).render(self.settings.dialect);
        self.run(statement).await
    }

    /// Raw statement passthrough.
    pub async fn query(&self, statement: &str) -> Result<Vec<Row>> {
        self.run(statement.to_string()).await
    }

    /// One page of rows walking `key_field`, plus the cursor for the next.
    pub async fn paginate(&self, request: &PageRequest) -> Result<Page> {
        let plan = PagePlan::new(request, &self.settings.key_field, self.settings.page_size);

        let (objects, next_cursor) = match self.settings.lookahead {
            Lookahead::Probe => {
                let objects = self.find(&plan.page(0)).await?;
                let next_cursor = match objects.last() {
                    Some(last) => {
                        let last = plan.key_of(last)?;
                        let probed = self.find(&plan.probe(&last)).await?;
                        probed.first().map(|row| plan.key_of(row)).transpose()?
                    }
                    None => None,
                };
                (objects, next_cursor)
            }
            Lookahead::OverFetch => {
                let mut objects = self.find(&plan.page(1)).await?;
                let limit = usize::try_from(plan.limit()).unwrap_or(usize::MAX);
                let extra = objects.split_off(limit.min(objects.len()));
                // An empty page never yields a cursor, matching the probe.
                let next_cursor = match extra.first() {
                    Some(row) if limit > 0 => Some(plan.key_of(row)?),
                    _ => None,
                };
                (objects, next_cursor)
            }
        };

        quarry_core::quarry_trace_page!(self.name, objects.len(), next_cursor.is_some());
        Ok(Page {
            objects,
            next_cursor,
        })
    }

    async fn run(&self, statement: String) -> Result<Vec<Row>> {
        quarry_core::quarry_trace_statement!(statement, self.name);
        let rows = self.executor.execute(&statement).await;
        self.release_detached(statement);
        rows
    }

    /// Hands `statement` to [`Executor::release`] on a detached task.
    fn release_detached(&self, statement: String) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let executor = Arc::clone(&self.executor);
        handle.spawn(async move {
            if let Err(error) = executor.release(&statement).await {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, sql = %statement, "quarry.release failed");
                #[cfg(not(feature = "tracing"))]
                let _ = error;
            }
        });
    }
}
