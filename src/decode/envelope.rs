//! Table envelope decoding.

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::record::{Record, RecordSet};
use crate::args::coerce::{is_numeric, numeric_prefix};

/// Result of one call as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Setter-style calls, empty tables, and (leniently) unreadable bodies.
    NoData,
    /// Check-style calls answering with a true-ish scalar.
    True,
    /// At least one row.
    Rows(RecordSet),
}

impl Decoded {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Decoded::NoData)
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Decoded::True)
    }

    pub fn rows(&self) -> Option<&RecordSet> {
        match self {
            Decoded::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn into_rows(self) -> Option<RecordSet> {
        match self {
            Decoded::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    /// Short label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Decoded::NoData => "no_data",
            Decoded::True => "true",
            Decoded::Rows(_) => "rows",
        }
    }
}

/// `null`, `true`, or the array of rows.
impl Serialize for Decoded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decoded::NoData => serializer.serialize_none(),
            Decoded::True => serializer.serialize_bool(true),
            Decoded::Rows(rows) => rows.serialize(serializer),
        }
    }
}

/// Failures reported by strict decoding only.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response has no TableData object")]
    MissingTable,
}

/// Decode a raw response body. Never fails.
pub fn decode_response(raw: &str) -> Decoded {
    if let Some(sentinel) = scalar_sentinel(raw) {
        return sentinel;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(tree) => match tree.get("TableData") {
            Some(table) => rows_from_table(table),
            None => Decoded::NoData,
        },
        Err(_) => Decoded::NoData,
    }
}

/// Like [`decode_response`], but unreadable bodies and bodies without a
/// `TableData` object are errors instead of `NoData`.
pub fn decode_response_strict(raw: &str) -> Result<Decoded, DecodeError> {
    if let Some(sentinel) = scalar_sentinel(raw) {
        return Ok(sentinel);
    }
    let tree: Value = serde_json::from_str(raw)?;
    match tree.get("TableData") {
        Some(table) if table.is_object() => Ok(rows_from_table(table)),
        _ => Err(DecodeError::MissingTable),
    }
}

/// False-ish: numeric strings equal to 0, `false`, `FALSE`.
/// True-ish: numeric strings equal to 1 or -1, `true`.
///
/// The -1 case is kept as the remote service has always been read this way.
/// An integer -11 was also listed as true-ish, but only as a strict
/// comparison against a number, which a response body never is.
fn scalar_sentinel(raw: &str) -> Option<Decoded> {
    let number = numeric_value(raw);
    if number == Some(0.0) || raw == "false" || raw == "FALSE" {
        return Some(Decoded::NoData);
    }
    if number == Some(1.0) || number == Some(-1.0) || raw == "true" {
        return Some(Decoded::True);
    }
    None
}

fn numeric_value(raw: &str) -> Option<f64> {
    if !is_numeric(raw) {
        return None;
    }
    numeric_prefix(raw).and_then(|n| n.parse::<f64>().ok())
}

fn rows_from_table(table: &Value) -> Decoded {
    let row = match table.get("Row") {
        Some(row) if !row.is_null() => row,
        _ => return Decoded::NoData,
    };
    if !row.is_array() && !row.is_object() {
        return Decoded::NoData;
    }

    // A lone row arrives as a bare object: its element count does not grow
    // when nested containers are counted too.
    let rows: Vec<Value> = if shallow_count(row) == recursive_count(row) {
        vec![row.clone()]
    } else {
        match row {
            Value::Array(items) => items.clone(),
            Value::Object(map) => {
                if !map.get("0").is_some_and(is_truthy) {
                    return Decoded::NoData;
                }
                map.values().cloned().collect()
            }
            _ => return Decoded::NoData,
        }
    };

    match rows.first() {
        Some(first) if is_truthy(first) => {
            Decoded::Rows(RecordSet::new(rows.into_iter().map(Record::new).collect()))
        }
        _ => Decoded::NoData,
    }
}

fn shallow_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

fn recursive_count(value: &Value) -> usize {
    let children: Box<dyn Iterator<Item = &Value>> = match value {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => return 0,
    };
    children.map(|child| 1 + recursive_count(child)).sum()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(decoded: Decoded) -> Value {
        serde_json::to_value(decoded.into_rows().expect("rows")).unwrap()
    }

    #[test]
    fn test_single_row_is_wrapped() {
        let decoded = decode_response(r#"{"TableData":{"Row":{"a":1}}}"#);
        assert_eq!(rows(decoded), json!([{"a": 1}]));
    }

    #[test]
    fn test_multiple_rows_unchanged() {
        let decoded = decode_response(r#"{"TableData":{"Row":[{"a":1},{"a":2}]}}"#);
        let set = decoded.rows().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.field(1, "a"), Some(&json!(2)));
    }

    #[test]
    fn test_false_sentinels() {
        for raw in ["0", "false", "FALSE", "0.0", " 0"] {
            assert_eq!(decode_response(raw), Decoded::NoData, "{raw:?}");
        }
    }

    #[test]
    fn test_true_sentinels() {
        for raw in ["1", "true", "1.0"] {
            assert_eq!(decode_response(raw), Decoded::True, "{raw:?}");
        }
    }

    #[test]
    fn test_minus_one_reads_as_true() {
        // Long-standing reading of the remote service, kept even though a
        // negative "true" looks like an upstream inconsistency.
        assert_eq!(decode_response("-1"), Decoded::True);
    }

    #[test]
    fn test_minus_eleven_body_is_not_a_sentinel() {
        // Only ever matched as an integer, never as body text.
        assert_eq!(decode_response("-11"), Decoded::NoData);
        assert!(matches!(decode_response_strict("-11"), Err(DecodeError::MissingTable)));
    }

    #[test]
    fn test_sentinel_words_are_case_sensitive() {
        assert_eq!(decode_response("False"), Decoded::NoData);
        assert!(decode_response_strict("False").is_err());
        assert!(decode_response_strict("TRUE").is_err());
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(decode_response(r#"{"TableData":{}}"#), Decoded::NoData);
        assert_eq!(decode_response(r#"{"TableData":{"Row":{}}}"#), Decoded::NoData);
        assert_eq!(decode_response(r#"{"TableData":{"Row":[]}}"#), Decoded::NoData);
        assert_eq!(decode_response(r#"{"TableData":{"Row":null}}"#), Decoded::NoData);
    }

    #[test]
    fn test_single_row_with_nested_field_is_dropped() {
        // Looks like a multi-row payload, but has no first row.
        let decoded = decode_response(r#"{"TableData":{"Row":{"a":1,"b":{"c":2}}}}"#);
        assert_eq!(decoded, Decoded::NoData);
    }

    #[test]
    fn test_nested_empty_container_still_single_row() {
        let decoded = decode_response(r#"{"TableData":{"Row":{"a":1,"tags":[]}}}"#);
        assert_eq!(rows(decoded), json!([{"a": 1, "tags": []}]));
    }

    #[test]
    fn test_falsy_first_row() {
        let decoded = decode_response(r#"{"TableData":{"Row":[{},{"a":2}]}}"#);
        assert_eq!(decoded, Decoded::NoData);
    }

    #[test]
    fn test_malformed_is_lenient() {
        assert_eq!(decode_response("{not json"), Decoded::NoData);
        assert_eq!(decode_response(""), Decoded::NoData);
        assert_eq!(decode_response(r#"[1,2,3]"#), Decoded::NoData);
        assert_eq!(decode_response(r#"{"TableData":"x"}"#), Decoded::NoData);
    }

    #[test]
    fn test_strict_mode_reports_malformed() {
        assert!(matches!(decode_response_strict("{not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode_response_strict(r#"{"Other":1}"#), Err(DecodeError::MissingTable)));
        assert_eq!(decode_response_strict(r#"{"TableData":{}}"#).unwrap(), Decoded::NoData);
        assert_eq!(decode_response_strict("0").unwrap(), Decoded::NoData);
    }

    #[test]
    fn test_column_order_follows_upstream() {
        let decoded = decode_response(r#"{"TableData":{"Row":[{"Zeta":1,"Alpha":2},{"Zeta":3,"Alpha":4}]}}"#);
        let set = decoded.rows().unwrap();
        let columns: Vec<&str> = set
            .first()
            .and_then(|row| row.as_value().as_object())
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap();
        assert_eq!(columns, ["Zeta", "Alpha"]);
        assert_eq!(
            serde_json::to_string(set).unwrap(),
            r#"[{"Zeta":1,"Alpha":2},{"Zeta":3,"Alpha":4}]"#
        );
    }

    #[test]
    fn test_numerically_keyed_rows_keep_upstream_order() {
        let entries: Vec<String> = (0..12).map(|i| format!(r#""{i}":{{"n":{i}}}"#)).collect();
        let raw = format!(r#"{{"TableData":{{"Row":{{{}}}}}}}"#, entries.join(","));
        let decoded = decode_response(&raw);
        let order: Vec<i64> = decoded
            .rows()
            .unwrap()
            .iter()
            .filter_map(|row| row.get("n").and_then(Value::as_i64))
            .collect();
        assert_eq!(order, (0..12).collect::<Vec<i64>>());
    }

    #[test]
    fn test_serialized_shapes() {
        assert_eq!(serde_json::to_value(Decoded::NoData).unwrap(), Value::Null);
        assert_eq!(serde_json::to_value(Decoded::True).unwrap(), json!(true));
    }
}
