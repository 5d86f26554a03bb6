//! Cursor pagination.
//!
//! Each call runs three phases: resolve the window predicate, fetch one page,
//! resolve the next cursor. Nothing is kept between calls; the cursor alone
//! carries the resume point, so pages stay stable under concurrent inserts
//! and deletes elsewhere in the key space.

use quarry_core::{
    Comparison, OrderBy, Ordering, Predicate, Projection, QuarryError, QueryDescriptor, Result,
    Value,
};

use crate::{cursor::Cursor, row::Row};

/// One `paginate` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    /// Inclusive resume point
    pub since_id: Option<Cursor>,
    /// Exclusive far bound
    pub max_id: Option<Cursor>,
    /// Page size, defaults to the model's `page_size`
    pub limit: Option<u64>,
    /// Base filter applied to every page
    pub predicate: Predicate,
    pub projection: Projection,
    /// Monotonic cursor column, defaults to the model's `key_field`
    pub key_field: Option<String>,
    /// Walk the key ascending instead of descending
    pub reverse: bool,
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, cursor: impl Into<Cursor>) -> Self {
        self.since_id = Some(cursor.into());
        self
    }

    pub fn max(mut self, cursor: impl Into<Cursor>) -> Self {
        self.max_id = Some(cursor.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = Some(key_field.into());
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// One window of rows plus the cursor for the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub objects: Vec<Row>,
    /// `None` once no row lies beyond this page
    pub next_cursor: Option<Cursor>,
}

/// Comparison set for one walking direction.
///
/// Forward (the default) walks the key descending; `reverse` walks it
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Direction {
    reverse: bool,
}

impl Direction {
    pub(crate) const fn new(reverse: bool) -> Self {
        Self { reverse }
    }

    /// `key <= since` forward, `key >= since` reversed.
    pub(crate) fn resume(&self, key: Value) -> Comparison {
        if self.reverse {
            Comparison::Gte(key)
        } else {
            Comparison::Lte(key)
        }
    }

    /// `key < last` forward, `key > last` reversed.
    pub(crate) fn beyond(&self, key: Value) -> Comparison {
        if self.reverse {
            Comparison::Gt(key)
        } else {
            Comparison::Lt(key)
        }
    }

    /// `key > max` forward, `key < max` reversed.
    pub(crate) fn bound(&self, key: Value) -> Comparison {
        if self.reverse {
            Comparison::Lt(key)
        } else {
            Comparison::Gt(key)
        }
    }

    pub(crate) const fn order(&self) -> OrderBy {
        if self.reverse {
            OrderBy::Asc
        } else {
            OrderBy::Desc
        }
    }
}

/// Descriptors for every query one `paginate` call may issue.
#[derive(Debug, Clone)]
pub(crate) struct PagePlan<'r> {
    key: &'r str,
    direction: Direction,
    limit: u64,
    /// Base predicate plus the far bound
    window: Predicate,
    projection: Projection,
    since: Option<&'r Cursor>,
}

impl<'r> PagePlan<'r> {
    pub(crate) fn new(request: &'r PageRequest, default_key: &'r str, default_limit: u64) -> Self {
        let key = request.key_field.as_deref().unwrap_or(default_key);
        let direction = Direction::new(request.reverse);

        let mut window = request.predicate.clone();
        if let Some(max) = &request.max_id {
            window.push(key, direction.bound(max.value().clone()));
        }

        // The cursor is read from every page row, so the key has to be selected.
        let mut projection = request.projection.clone();
        let includes_any = projection.fields.iter().any(|(_, include)| *include);
        let selects_key = projection
            .fields
            .iter()
            .any(|(field, include)| *include && field == key);
        if includes_any && !selects_key {
            projection = projection.include(key);
        }

        Self {
            key,
            direction,
            limit: request.limit.unwrap_or(default_limit),
            window,
            projection,
            since: request.since_id.as_ref(),
        }
    }

    pub(crate) const fn limit(&self) -> u64 {
        self.limit
    }

    fn ordering(&self) -> Ordering {
        Ordering {
            fields: vec![(self.key.to_string(), self.direction.order())],
        }
    }

    /// The page query, fetching `limit` rows (plus `extra` for over-fetching).
    pub(crate) fn page(&self, extra: u64) -> QueryDescriptor {
        let mut predicate = self.window.clone();
        if let Some(since) = self.since {
            predicate.push(self.key, self.direction.resume(since.value().clone()));
        }
        QueryDescriptor::new()
            .projection(self.projection.clone())
            .predicate(predicate)
            .ordering(self.ordering())
            .limit(self.limit.saturating_add(extra))
    }

    /// Single-row lookahead for the first key strictly past `last`.
    pub(crate) fn probe(&self, last: &Cursor) -> QueryDescriptor {
        let mut predicate = self.window.clone();
        predicate.push(self.key, self.direction.beyond(last.value().clone()));
        QueryDescriptor::new()
            .projection(Projection::new().include(self.key))
            .predicate(predicate)
            .ordering(self.ordering())
            .limit(1)
    }

    /// Reads the cursor key out of `row`.
    pub(crate) fn key_of(&self, row: &Row) -> Result<Cursor> {
        row.get(self.key)
            .cloned()
            .map(Cursor::from_key)
            .ok_or_else(|| QuarryError::MissingCursorKey(self.key.to_string()))
    }
}
