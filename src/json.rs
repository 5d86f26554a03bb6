//! Object-shaped pagination and join requests.
//!
//! ```json
//! { "sinceId": "'2024-01-01 10:00:00'", "maxId": 3, "limit": 20,
//!   "where": { "status": "open" }, "keyField": "publishedAt", "reverse": true }
//!
//! { "table": "users", "inner": ["authorId:id"], "options": { "limit": 5 } }
//! ```
//!
//! Snake-case keys are accepted as aliases. Cursor strings are read in the
//! cursor's text form; anything that does not parse as one is taken as text.

use quarry_core::{
    Predicate, Projection, QuarryError, QueryDescriptor, Result,
    json::{expect_count, expect_object, literal_from_json, truthy},
};
use serde_json::Value as Json;

use crate::{cursor::Cursor, model::JoinRequest, paginate::PageRequest};

fn cursor_from_json(field: &str, value: &Json) -> Result<Cursor> {
    match value {
        Json::String(text) => Ok(text
            .parse()
            .unwrap_or_else(|_| Cursor::from(text.as_str()))),
        other => literal_from_json(field, other).map(Cursor::from_key),
    }
}

fn expect_str<'j>(value: &'j Json, what: &str) -> Result<&'j str> {
    value
        .as_str()
        .ok_or_else(|| QuarryError::InvalidParams(format!("{what} must be a string")))
}

impl PageRequest {
    pub fn from_json(value: &Json) -> Result<Self> {
        let options = expect_object(value, "page request")?;
        let get = |primary: &str, alias: &str| options.get(primary).or_else(|| options.get(alias));

        let mut request = PageRequest::new();
        if let Some(since) = get("sinceId", "since_id").filter(|v| !v.is_null()) {
            request.since_id = Some(cursor_from_json("sinceId", since)?);
        }
        if let Some(max) = get("maxId", "max_id").filter(|v| !v.is_null()) {
            request.max_id = Some(cursor_from_json("maxId", max)?);
        }
        if let Some(limit) = options.get("limit") {
            request.limit = Some(expect_count(limit, "limit")?);
        }
        if let Some(predicate) = get("where", "predicate") {
            request.predicate = Predicate::from_json(predicate)?;
        }
        if let Some(columns) = get("columns", "projection") {
            request.projection = Projection::from_json(columns)?;
        }
        if let Some(key) = get("keyField", "key_field") {
            request.key_field = Some(expect_str(key, "keyField")?.to_string());
        }
        if let Some(reverse) = options.get("reverse") {
            request.reverse = truthy(reverse);
        }
        Ok(request)
    }
}

impl JoinRequest {
    pub fn from_json(value: &Json) -> Result<Self> {
        let options = expect_object(value, "join request")?;

        let table = match options.get("table") {
            Some(table) => expect_str(table, "table")?.to_string(),
            None => String::new(),
        };
        let inner = match options.get("inner") {
            Some(Json::Array(pairs)) => pairs
                .iter()
                .map(|pair| expect_str(pair, "inner pair").map(str::to_string))
                .collect::<Result<Vec<_>>>()?,
            Some(Json::String(pair)) => vec![pair.clone()],
            Some(_) => {
                return Err(QuarryError::InvalidParams(
                    "inner must be a list of `left:right` pairs".to_string(),
                ));
            }
            None => Vec::new(),
        };
        let options = match options.get("options") {
            Some(descriptor) => QueryDescriptor::from_json(descriptor)?,
            None => QueryDescriptor::new(),
        };

        Ok(JoinRequest {
            table,
            inner,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::{Comparison, Condition, Value};
    use serde_json::json;

    #[test]
    fn page_request_reads_camel_and_snake_keys() {
        let request = PageRequest::from_json(&json!({
            "sinceId": 15,
            "max_id": "'2024-01-01 10:00:00'",
            "limit": 5,
            "where": { "status": "open" },
            "columns": { "title": true },
            "keyField": "seq",
            "reverse": 1
        }))
        .unwrap();

        assert_eq!(request.since_id, Some(Cursor::from(15)));
        assert!(matches!(
            request.max_id.as_ref().map(Cursor::value),
            Some(Value::Timestamp(_))
        ));
        assert_eq!(request.limit, Some(5));
        assert_eq!(
            request.predicate.fields,
            vec![("status".to_string(), Condition::Literal("open".into()))]
        );
        assert_eq!(request.projection, Projection::new().include("title"));
        assert_eq!(request.key_field.as_deref(), Some("seq"));
        assert!(request.reverse);
    }

    #[test]
    fn cursor_text_falls_back_to_plain_text() {
        let request = PageRequest::from_json(&json!({ "sinceId": "abc", "maxId": null })).unwrap();
        assert_eq!(request.since_id, Some(Cursor::from("abc")));
        assert_eq!(request.max_id, None);
    }

    #[test]
    fn page_request_rejects_bad_shapes() {
        assert!(matches!(
            PageRequest::from_json(&json!([1, 2])),
            Err(QuarryError::InvalidParams(_))
        ));
        assert!(matches!(
            PageRequest::from_json(&json!({ "limit": -1 })),
            Err(QuarryError::InvalidParams(_))
        ));
        assert!(matches!(
            PageRequest::from_json(&json!({ "sinceId": [1] })),
            Err(QuarryError::InvalidParams(_))
        ));
    }

    #[test]
    fn join_request_reads_table_pairs_and_options() {
        let request = JoinRequest::from_json(&json!({
            "table": "users",
            "inner": ["authorId:id", "tenant:tenant"],
            "options": { "where": { "id": { "$gt": 3 } }, "limit": 2 }
        }))
        .unwrap();

        assert_eq!(request.table, "users");
        assert_eq!(request.inner, vec!["authorId:id", "tenant:tenant"]);
        assert_eq!(request.options.limit, Some(2));
        assert_eq!(
            request.options.predicate.fields[0].1,
            Condition::Compare(vec![Comparison::Gt(Value::Integer(3))])
        );
    }

    #[test]
    fn join_request_rejects_non_string_pairs() {
        assert!(matches!(
            JoinRequest::from_json(&json!({ "table": "users", "inner": [1] })),
            Err(QuarryError::InvalidParams(_))
        ));
        assert!(matches!(
            JoinRequest::from_json(&json!({ "table": 7, "inner": ["a:b"] })),
            Err(QuarryError::InvalidParams(_))
        ));
    }
}
