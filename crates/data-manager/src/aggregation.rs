//! Recursive JSON-shape normalization into a frequency/sum table
//!
//! Every document accumulates into one shared table: arrays count their
//! scalar items, objects either sum their numeric entries (*metric
//! records*) or recurse through nested containers counting keys
//! (*structural records*). Aggregation never fails on shape: values the
//! rules don't cover simply contribute nothing.

use freq_charts_shared::{FrequencyTable, ParsedDocument};
use serde_json::{Map, Number, Value};

/// Aggregate every document into a single table.
///
/// Labels collide across documents and values accumulate; there is no
/// per-document namespacing. Top-level scalars and nulls are ignored.
pub fn aggregate(documents: &[ParsedDocument]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for document in documents {
        match &document.data {
            Value::Array(items) => process_array(items, &mut table),
            Value::Object(entries) => process_object(entries, &mut table),
            other => {
                log::debug!(
                    "{}: ignoring top-level {}",
                    document.name,
                    json_type_name(other)
                );
            }
        }
    }
    table
}

/// Arrays count scalar items by their string rendering; nested objects
/// and arrays recurse. Null items are skipped.
fn process_array(items: &[Value], table: &mut FrequencyTable) {
    for item in items {
        match item {
            Value::Object(entries) => process_object(entries, table),
            Value::Array(inner) => process_array(inner, table),
            Value::Null => {}
            Value::Bool(flag) => table.increment(if *flag { "true" } else { "false" }),
            Value::Number(number) => table.increment(&number_label(number)),
            Value::String(text) => table.increment(text),
        }
    }
}

/// An object with at least one numeric value is a metric record: every
/// numeric entry sums into its key and non-numeric siblings are dropped.
/// A single stray numeric field flips the whole object into sum mode;
/// surprising, but kept exactly for compatibility with existing exports.
/// Objects without numeric values are structural records: nested
/// containers recurse, every other entry counts its key once.
fn process_object(entries: &Map<String, Value>, table: &mut FrequencyTable) {
    let is_metric_record = entries.values().any(Value::is_number);

    if is_metric_record {
        for (key, value) in entries {
            if let Some(amount) = value.as_f64() {
                table.add(key, amount);
            }
        }
        return;
    }

    for (key, value) in entries {
        match value {
            Value::Object(inner) => process_object(inner, table),
            Value::Array(inner) => process_array(inner, table),
            _ => table.increment(key),
        }
    }
}

/// Integral numbers label without a fractional part, so `5`, `5.0` and
/// `5e0` all land on the label "5".
fn number_label(number: &Number) -> String {
    if let Some(value) = number.as_f64() {
        if value.fract() == 0.0 && value.is_finite() && value.abs() < 1.0e15 {
            return format!("{value:.0}");
        }
    }
    number.to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(name: &str, data: Value) -> ParsedDocument {
        ParsedDocument::new(name, data)
    }

    #[test]
    fn test_array_counts_scalars() {
        let table = aggregate(&[doc("f", json!(["x", "x", "y"]))]);
        assert_eq!(table.get("x"), Some(2.0));
        assert_eq!(table.get("y"), Some(1.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_array_counts_numbers_and_bools_by_rendering() {
        let table = aggregate(&[doc("f", json!([1, 1.0, true, false, true]))]);
        assert_eq!(table.get("1"), Some(2.0));
        assert_eq!(table.get("true"), Some(2.0));
        assert_eq!(table.get("false"), Some(1.0));
    }

    #[test]
    fn test_array_skips_nulls() {
        let table = aggregate(&[doc("f", json!([null, "a", null]))]);
        assert_eq!(table.get("a"), Some(1.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_nested_arrays_recurse_as_arrays() {
        let table = aggregate(&[doc("f", json!([["a", "b"], ["a"]]))]);
        assert_eq!(table.get("a"), Some(2.0));
        assert_eq!(table.get("b"), Some(1.0));
    }

    #[test]
    fn test_metric_records_sum_across_documents() {
        let table = aggregate(&[
            doc("f", json!({"a": 1, "b": 2})),
            doc("g", json!({"a": 3})),
        ]);
        assert_eq!(table.get("a"), Some(4.0));
        assert_eq!(table.get("b"), Some(2.0));
    }

    #[test]
    fn test_metric_record_drops_non_numeric_siblings() {
        let table = aggregate(&[doc("f", json!({"count": 2, "name": "widget"}))]);
        assert_eq!(table.get("count"), Some(2.0));
        assert_eq!(table.get("name"), None);
        assert_eq!(table.get("widget"), None);
    }

    #[test]
    fn test_structural_record_recurses_into_metric_child() {
        // {group: {x: 1}}: the outer object has no numeric value, so it
        // recurses; the inner object is a metric record.
        let table = aggregate(&[doc("f", json!({"group": {"x": 1}}))]);
        assert_eq!(table.get("x"), Some(1.0));
        assert_eq!(table.get("group"), None);
    }

    #[test]
    fn test_structural_record_recurses_into_structural_child() {
        // {group: {a: "x"}}: both levels are structural. The inner
        // object counts its own key, not its parent's.
        let table = aggregate(&[doc("f", json!({"group": {"a": "x"}}))]);
        assert_eq!(table.get("a"), Some(1.0));
        assert_eq!(table.get("group"), None);
    }

    #[test]
    fn test_structural_record_counts_scalar_and_null_keys() {
        let table = aggregate(&[doc("f", json!({"status": "on", "note": null}))]);
        assert_eq!(table.get("status"), Some(1.0));
        assert_eq!(table.get("note"), Some(1.0));
    }

    #[test]
    fn test_objects_inside_arrays() {
        let table = aggregate(&[doc("f", json!([{"score": 5}, {"score": 3}]))]);
        assert_eq!(table.get("score"), Some(8.0));
    }

    #[test]
    fn test_top_level_scalars_ignored() {
        let table = aggregate(&[
            doc("f", json!("just a string")),
            doc("g", json!(42)),
            doc("h", json!(null)),
        ]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_inputs_produce_empty_table() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[doc("f", json!([]))]).is_empty());
        assert!(aggregate(&[doc("f", json!({}))]).is_empty());
    }

    #[test]
    fn test_aggregation_is_additive_over_batches() {
        let batch_a = vec![doc("a", json!(["x", {"score": 2}]))];
        let batch_b = vec![doc("b", json!(["x", "y", {"score": 5}]))];

        let combined: Vec<_> = batch_a.iter().chain(batch_b.iter()).cloned().collect();
        let mut merged = aggregate(&batch_a);
        merged.merge(&aggregate(&batch_b));

        assert_eq!(aggregate(&combined), merged);
    }
}
