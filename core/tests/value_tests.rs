use gander::{Record, Value};

#[test]
fn type_tags_cover_every_variant() {
    assert_eq!(Value::Null.type_of(), "NULL");
    assert_eq!(Value::Bool(true).type_of(), "boolean");
    assert_eq!(Value::Int(0).type_of(), "integer");
    assert_eq!(Value::Float(0.5).type_of(), "float");
    assert_eq!(Value::Str(String::new()).type_of(), "string");
    assert_eq!(Value::Array(Vec::new()).type_of(), "array");
    assert_eq!(Value::Map(Vec::new()).type_of(), "map");
    assert_eq!(Value::Record(Record::new("T")).type_of(), "object");
}

#[test]
fn json_values_convert_structurally() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"name": "ada", "scores": [1, 2.5, null], "active": true}"#,
    )
    .expect("valid JSON");

    let value = Value::from(json);

    let Value::Map(entries) = value else {
        panic!("JSON objects should become maps");
    };
    // serde_json iterates objects in sorted key order.
    assert_eq!(entries[0].0, "active");
    assert_eq!(entries[0].1, Value::Bool(true));
    assert_eq!(entries[1].1, Value::Str("ada".to_string()));
    assert_eq!(
        entries[2].1,
        Value::Array(vec![Value::Int(1), Value::Float(2.5), Value::Null])
    );
}

#[test]
fn json_objects_never_become_records() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"class_name": "Fake"}"#).expect("valid JSON");

    assert_eq!(Value::from(json).type_of(), "map");
}

#[test]
fn primitive_conversions_pick_the_natural_variant() {
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(0.25), Value::Float(0.25));
    assert_eq!(Value::from("text"), Value::Str("text".to_string()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    assert_eq!(
        Value::from(vec![1i64, 2]),
        Value::Array(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn display_is_compact_and_single_line() {
    let record = Record::new("Point").field("x", 1).field("y", 2);
    assert_eq!(Value::Record(record).to_string(), "Point { x: 1, y: 2 }");

    let map = Value::Map(vec![
        ("b".to_string(), Value::Int(2)),
        ("a".to_string(), Value::Int(1)),
    ]);
    // Maps keep insertion order.
    assert_eq!(map.to_string(), "{ b: 2, a: 1 }");

    let array = Value::Array(vec![Value::Null, Value::Bool(false)]);
    assert_eq!(array.to_string(), "[null, false]");
}

#[test]
fn records_build_fluently() {
    let record = Record::new("Session")
        .field("user", "ada")
        .method("refresh");

    assert_eq!(record.class_name, "Session");
    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.methods, ["refresh"]);
}
