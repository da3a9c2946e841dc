//! Diagnostic text tests
//!
//! The diagnostic text shows up verbatim in test failure logs, so these tests
//! pin the exact wording for each kind of divergence.

use deepeq_compare::{compare, Category, PathSegment, Value};
use serde_json::json;

fn diff(expected: serde_json::Value, actual: serde_json::Value) -> Option<String> {
    compare(&expected.into(), &actual.into()).map(|d| d.to_string())
}

// ==================== equality ====================

#[test]
fn test_equal_documents() {
    let doc = json!({
        "entity_id": "light.kitchen",
        "state": "on",
        "attributes": {"brightness": 255, "rgb": [255, 200, 10], "effect": null},
    });
    assert_eq!(diff(doc.clone(), doc), None);
}

#[test]
fn test_key_order_is_irrelevant() {
    assert_eq!(diff(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1})), None);
}

#[test]
fn test_nil_nil() {
    assert_eq!(diff(json!(null), json!(null)), None);
}

// ==================== absence ====================

#[test]
fn test_nil_expected() {
    assert_eq!(
        diff(json!(null), json!(5)),
        Some("expected: nil, actual: 5".to_string())
    );
}

#[test]
fn test_nil_actual() {
    assert_eq!(
        diff(json!(5), json!(null)),
        Some("expected: 5, actual: nil".to_string())
    );
}

#[test]
fn test_nil_vs_empty_containers() {
    assert_eq!(
        diff(json!(null), json!({})),
        Some("expected: nil, actual: {}".to_string())
    );
    assert_eq!(
        diff(json!([]), json!(null)),
        Some("expected: [], actual: nil".to_string())
    );
}

// ==================== shapes ====================

#[test]
fn test_type_mismatch_precedence() {
    assert_eq!(
        diff(json!(1), json!("1")),
        Some("expected: 1 (type int), actual: \"1\" (type string)".to_string())
    );
}

#[test]
fn test_int_vs_float() {
    assert_eq!(
        diff(json!(1), json!(1.5)),
        Some("expected: 1 (type int), actual: 1.5 (type float)".to_string())
    );
}

#[test]
fn test_sequence_vs_mapping() {
    let d = compare(&json!([]).into(), &json!({}).into()).unwrap();
    assert_eq!(d.category(), Category::Shape);
    assert_eq!(
        d.to_string(),
        "expected: [] (type sequence), actual: {} (type mapping)"
    );
}

// ==================== mappings ====================

#[test]
fn test_mapping_extra_key() {
    assert_eq!(
        diff(json!({"a": 1}), json!({"a": 1, "b": 2})),
        Some("[\"b\"] shouldn't exist, actual: 2".to_string())
    );
}

#[test]
fn test_mapping_missing_key() {
    assert_eq!(
        diff(json!({"a": 1, "b": 2}), json!({"a": 1})),
        Some("[\"b\"] - expected: 2, actual: <notfound>".to_string())
    );
}

#[test]
fn test_mapping_nested_mappings() {
    assert_eq!(
        diff(
            json!({"outer": {"inner": {"leaf": true}}}),
            json!({"outer": {"inner": {"leaf": false}}})
        ),
        Some("[\"outer\"] [\"inner\"] [\"leaf\"] expected: true, actual: false".to_string())
    );
}

#[test]
fn test_mapping_nested_shape_mismatch_keeps_type_names() {
    assert_eq!(
        diff(json!({"a": {"b": 1}}), json!({"a": {"b": "1"}})),
        Some("[\"a\"] [\"b\"] expected: 1 (type int), actual: \"1\" (type string)".to_string())
    );
}

#[test]
fn test_mapping_missing_nested_value_prints_whole_value() {
    assert_eq!(
        diff(json!({"a": {"b": [1, 2]}}), json!({"a": {}})),
        Some("[\"a\"] [\"b\"] - expected: [1, 2], actual: <notfound>".to_string())
    );
}

// ==================== sequences ====================

#[test]
fn test_length_mismatch_short_circuit() {
    assert_eq!(
        diff(json!([1, 2, 3]), json!([1, 2])),
        Some("slice/array lengths don't match - expected: 3, actual: 2".to_string())
    );
    assert_eq!(
        diff(json!([1, 2, 3]), json!(["x", null])),
        Some("slice/array lengths don't match - expected: 3, actual: 2".to_string())
    );
}

#[test]
fn test_nested_path_reporting() {
    let d = compare(&json!({"x": [1, 2, 3]}).into(), &json!({"x": [1, 9, 3]}).into()).unwrap();
    assert_eq!(
        d.path(),
        &[PathSegment::Key("x".to_string()), PathSegment::Index(1)]
    );
    assert_eq!(d.path_string(), "[\"x\"][1]");
    assert_eq!(d.to_string(), "[\"x\"] [1] expected: 2, actual: 9");
}

#[test]
fn test_sequence_of_mappings_reports_elements() {
    assert_eq!(
        diff(json!([{"id": 1}, {"id": 2}]), json!([{"id": 1}, {"id": 3}])),
        Some("[1] expected: {\"id\": 2}, actual: {\"id\": 3}".to_string())
    );
}

#[test]
fn test_sequence_nil_element() {
    assert_eq!(
        diff(json!([1, null]), json!([1, 2])),
        Some("[1] expected: nil, actual: 2".to_string())
    );
    assert_eq!(
        diff(json!([1, 2]), json!([1, null])),
        Some("[1] expected: 2, actual: nil".to_string())
    );
    assert_eq!(diff(json!([null, null]), json!([null, null])), None);
}

#[test]
fn test_empty_sequences_equal() {
    assert_eq!(diff(json!([]), json!([])), None);
}

// ==================== rust data ====================

#[test]
fn test_rust_collections() {
    let expected = Value::from(vec![Some("a"), None]);
    let actual = Value::from(vec![Some("a"), Some("b")]);
    assert_eq!(
        compare(&expected, &actual).map(|d| d.to_string()),
        Some("[1] expected: nil, actual: \"b\"".to_string())
    );
}

#[test]
fn test_signed_vs_unsigned() {
    assert_eq!(
        compare(&Value::from(1i32), &Value::from(1u32)).map(|d| d.to_string()),
        Some("expected: 1 (type int), actual: 1 (type uint)".to_string())
    );
}
