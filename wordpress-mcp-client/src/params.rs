//! Query parameter normalization.
//!
//! Tool inputs arrive as heterogeneous JSON values (numbers, booleans, strings,
//! lists, absent fields). The REST API only understands flat string pairs, so
//! everything is folded into a [`QueryParams`] map before a request is built.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Flat, string-keyed query parameters.
///
/// Ordered by key so URLs are stable between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a parameter object.
    ///
    /// - `null` values are dropped entirely
    /// - lists are joined with `,`
    /// - booleans become `"true"` / `"false"`
    /// - everything else uses its plain string form
    pub fn normalize(params: &Map<String, Value>) -> Self {
        Self(
            params
                .iter()
                .filter_map(|(key, value)| to_query_value(value).map(|v| (key.clone(), v)))
                .collect(),
        )
    }

    /// Serialize `params` and normalize the resulting object.
    ///
    /// Fields skipped during serialization never reach the map.
    pub fn from_serializable<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        match serde_json::to_value(params) {
            Ok(Value::Object(map)) => Ok(Self::normalize(&map)),
            Ok(Value::Null) => Ok(Self::default()),
            Ok(other) => Err(ApiError::Serialization {
                detail: format!("query parameters must be an object, got {other}"),
            }),
            Err(e) => Err(ApiError::Serialization {
                detail: e.to_string(),
            }),
        }
    }

    /// Add or replace one parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// View the map as a JSON object of strings.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

fn to_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(to_query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn mixed_values() {
        let params = QueryParams::normalize(&object(json!({
            "page": 1,
            "tags": [3, 7],
            "sticky": true,
            "search": null,
        })));

        let expected: QueryParams = [("page", "1"), ("tags", "3,7"), ("sticky", "true")]
            .into_iter()
            .collect();
        assert_eq!(params, expected);
        assert_eq!(params.get("search"), None);
    }

    #[test]
    fn booleans_match_truth_value() {
        let params = QueryParams::normalize(&object(json!({ "a": true, "b": false })));
        assert_eq!(params.get("a"), Some("true"));
        assert_eq!(params.get("b"), Some("false"));
    }

    #[test]
    fn string_lists_and_plain_strings() {
        let params = QueryParams::normalize(&object(json!({
            "roles": ["editor", "author"],
            "order": "desc",
            "empty": [],
        })));
        assert_eq!(params.get("roles"), Some("editor,author"));
        assert_eq!(params.get("order"), Some("desc"));
        assert_eq!(params.get("empty"), Some(""));
    }

    #[test]
    fn normalizing_output_again_is_a_no_op() {
        let once = QueryParams::normalize(&object(json!({
            "per_page": 20,
            "include": [1, 2, 3],
            "hide_empty": false,
            "slug": "news",
        })));
        let twice = QueryParams::normalize(&once.to_json_map());
        assert_eq!(once, twice);
    }

    #[test]
    fn from_serializable_skips_absent_fields() {
        #[derive(Serialize)]
        struct Query {
            page: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            search: Option<String>,
            author: Option<u64>,
        }

        let params = QueryParams::from_serializable(&Query {
            page: 2,
            search: None,
            author: None,
        })
        .unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn from_serializable_rejects_non_objects() {
        let err = QueryParams::from_serializable(&[1, 2]).unwrap_err();
        assert!(matches!(err, ApiError::Serialization { .. }));
    }
}
