//! Object-shaped descriptor surface.
//!
//! Accepts the loose JSON shape callers send over the wire:
//!
//! ```json
//! {
//!   "columns": { "id": true, "name": true },
//!   "where":   { "status": "open", "price": { "$gt": 100 } },
//!   "order":   { "createdAt": false },
//!   "limit":   10,
//!   "offset":  20
//! }
//! ```
//!
//! `projection`, `predicate` and `ordering` are accepted as aliases. A string
//! `where` is a raw predicate.

use serde_json::{Map, Value as Json};

use crate::{
    descriptor::{OrderBy, Ordering, Predicate, Projection, QueryDescriptor, Record},
    error::{QuarryError, Result},
    expressions::conditions::{Comparison, Condition},
    value::Value,
};

/// Loose truthiness for include and direction flags.
pub fn truthy(value: &Json) -> bool {
    match value {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    }
}

pub fn expect_object<'j>(value: &'j Json, what: &str) -> Result<&'j Map<String, Json>> {
    value
        .as_object()
        .ok_or_else(|| QuarryError::InvalidParams(format!("{what} must be an object")))
}

pub fn expect_count(value: &Json, what: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| QuarryError::InvalidParams(format!("{what} must be a non-negative integer")))
}

/// Converts a JSON scalar into a literal.
pub fn literal_from_json(field: &str, value: &Json) -> Result<Value> {
    match value {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Real(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Array(_) | Json::Object(_) => Err(QuarryError::InvalidParams(format!(
            "value for `{field}` must be a literal"
        ))),
    }
}

fn comparison_from_json(field: &str, operator: &str, operand: &Json) -> Result<Comparison> {
    let operand = literal_from_json(field, operand)?;
    Ok(match operator {
        "$eq" => Comparison::Eq(operand),
        "$ne" => Comparison::Ne(operand),
        "$gt" => Comparison::Gt(operand),
        "$gte" => Comparison::Gte(operand),
        "$lt" => Comparison::Lt(operand),
        "$lte" => Comparison::Lte(operand),
        other => {
            return Err(QuarryError::UnknownOperator {
                field: field.to_string(),
                operator: other.to_string(),
            });
        }
    })
}

fn condition_from_json(field: &str, value: &Json) -> Result<Condition> {
    match value {
        Json::Object(operators) => {
            if operators.is_empty() {
                return Err(QuarryError::InvalidParams(format!(
                    "operator object for `{field}` is empty"
                )));
            }
            operators
                .iter()
                .map(|(operator, operand)| comparison_from_json(field, operator, operand))
                .collect::<Result<Vec<_>>>()
                .map(Condition::Compare)
        }
        other => literal_from_json(field, other).map(Condition::Literal),
    }
}

impl Predicate {
    pub fn from_json(value: &Json) -> Result<Self> {
        if let Json::String(raw) = value {
            return Ok(Predicate::raw(raw.clone()));
        }
        let mut predicate = Predicate::new();
        for (field, condition) in expect_object(value, "where")? {
            predicate.push(field.clone(), condition_from_json(field, condition)?);
        }
        Ok(predicate)
    }
}

impl Projection {
    pub fn from_json(value: &Json) -> Result<Self> {
        let fields = expect_object(value, "columns")?
            .iter()
            .map(|(field, flag)| (field.clone(), truthy(flag)))
            .collect();
        Ok(Projection { fields })
    }
}

impl Ordering {
    pub fn from_json(value: &Json) -> Result<Self> {
        let fields = expect_object(value, "order")?
            .iter()
            .map(|(field, flag)| (field.clone(), OrderBy::from_flag(truthy(flag))))
            .collect();
        Ok(Ordering { fields })
    }
}

impl Record {
    pub fn from_json(value: &Json) -> Result<Self> {
        let fields = expect_object(value, "record")?
            .iter()
            .map(|(field, value)| literal_from_json(field, value).map(|v| (field.clone(), v)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Record { fields })
    }
}

impl QueryDescriptor {
    /// Parses an options object. Unrecognised top-level keys are ignored.
    pub fn from_json(value: &Json) -> Result<Self> {
        let options = expect_object(value, "options")?;
        let get = |primary: &str, alias: &str| options.get(primary).or_else(|| options.get(alias));

        let mut descriptor = QueryDescriptor::new();
        if let Some(columns) = get("columns", "projection") {
            descriptor.projection = Projection::from_json(columns)?;
        }
        if let Some(predicate) = get("where", "predicate") {
            descriptor.predicate = Predicate::from_json(predicate)?;
        }
        if let Some(order) = get("order", "ordering") {
            descriptor.ordering = Ordering::from_json(order)?;
        }
        if let Some(limit) = options.get("limit") {
            descriptor.limit = Some(expect_count(limit, "limit")?);
        }
        if let Some(offset) = options.get("offset") {
            descriptor.offset = Some(expect_count(offset, "offset")?);
        }
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_declared_field_order() {
        let predicate = Predicate::from_json(&json!({"zeta": 1, "alpha": 2})).unwrap();
        let names: Vec<_> = predicate.fields.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn operator_objects_become_comparisons() {
        let predicate = Predicate::from_json(&json!({"price": {"$gte": 10, "$lt": 20}})).unwrap();
        assert_eq!(
            predicate.fields[0].1,
            Condition::Compare(vec![
                Comparison::Gte(Value::Integer(10)),
                Comparison::Lt(Value::Integer(20)),
            ])
        );
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let err = Predicate::from_json(&json!({"price": {"$between": 1}})).unwrap_err();
        assert!(matches!(
            err,
            QuarryError::UnknownOperator { ref field, ref operator }
                if field == "price" && operator == "$between"
        ));
    }

    #[test]
    fn non_object_options_are_invalid() {
        assert!(matches!(
            QueryDescriptor::from_json(&json!("SELECT 1")),
            Err(QuarryError::InvalidParams(_))
        ));
        assert!(matches!(
            QueryDescriptor::from_json(&json!({"limit": -1})),
            Err(QuarryError::InvalidParams(_))
        ));
    }

    #[test]
    fn truthiness_drives_projection_and_order() {
        let descriptor = QueryDescriptor::from_json(&json!({
            "columns": {"id": 1, "secret": 0},
            "order": {"id": "", "name": "yes"},
        }))
        .unwrap();
        assert_eq!(
            descriptor.projection.fields,
            vec![("id".to_string(), true), ("secret".to_string(), false)]
        );
        assert_eq!(
            descriptor.ordering.fields,
            vec![
                ("id".to_string(), OrderBy::Desc),
                ("name".to_string(), OrderBy::Asc)
            ]
        );
    }

    #[test]
    fn string_where_is_raw() {
        let predicate = Predicate::from_json(&json!("age > 3")).unwrap();
        assert_eq!(predicate, Predicate::raw("age > 3"));
    }
}
