//! Structured query descriptors.
//!
//! Every mapping here is an ordered list: compiled clauses follow the order in
//! which fields were declared.

use crate::{expressions::conditions::Condition, value::Value};

/// Sort direction for one ordering entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    /// `Asc` when `ascending` is true, `Desc` otherwise.
    #[inline]
    pub const fn from_flag(ascending: bool) -> Self {
        if ascending { OrderBy::Asc } else { OrderBy::Desc }
    }
}

/// Field → include flag. Empty means every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub fields: Vec<(String, bool)>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), true));
        self
    }

    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), false));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Projection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|f| (f.into(), true)).collect(),
        }
    }
}

/// Row filter.
///
/// An optional trusted raw expression, emitted verbatim, followed by a flat
/// conjunction of per-field conditions in declared order. Both empty means
/// "match all rows".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    pub raw: Option<String>,
    pub fields: Vec<(String, Condition)>,
}

impl Predicate {
    /// The match-all predicate.
    pub fn new() -> Self {
        Self::default()
    }

    /// A raw textual predicate. No validation is done; callers own escaping.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw: Some(text.into()),
            fields: Vec::new(),
        }
    }

    /// Adds a field condition.
    pub fn field(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.push(field, condition);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, condition: impl Into<Condition>) {
        self.fields.push((field.into(), condition.into()));
    }

    /// `true` for the match-all predicate.
    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.fields.is_empty()
    }
}

/// Field → direction, in declared order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ordering {
    pub fields: Vec<(String, OrderBy)>,
}

impl Ordering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderBy::Asc));
        self
    }

    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderBy::Desc));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field → value list used by insert and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Everything a find/delete/update call may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDescriptor {
    pub projection: Projection,
    pub predicate: Predicate,
    pub ordering: Ordering,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::conditions::Comparison;

    #[test]
    fn empty_predicate_matches_all() {
        assert!(Predicate::new().is_empty());
        assert!(!Predicate::raw("1 = 1").is_empty());
        assert!(!Predicate::new().field("a", 1).is_empty());
    }

    #[test]
    fn raw_predicate_keeps_field_conditions() {
        let predicate = Predicate::raw("a = 1").field("id", Comparison::Lt(Value::from(5)));
        assert_eq!(predicate.raw.as_deref(), Some("a = 1"));
        assert_eq!(predicate.fields.len(), 1);
    }
}
