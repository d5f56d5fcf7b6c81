//! Differential checks of the serde impls against serde_json.

#![cfg(feature = "serde")]

use arbor_json::Value;
use serde_json::json;

#[test]
fn value_serializes_into_the_serde_model() {
    let v = arbor_json::parse(r#"{"a":1.5,"b":[true,null,"x"],"c":{"d":-0.25}}"#).unwrap();
    let j = serde_json::to_value(&v).unwrap();
    assert_eq!(j, json!({"a":1.5,"b":[true,null,"x"],"c":{"d":-0.25}}));
}

#[test]
fn value_deserializes_from_the_serde_model() {
    let v: Value = serde_json::from_str(r#"{"n":2,"s":"hi","list":[1.5,false]}"#).unwrap();
    assert_eq!(v.get("n"), Some(&Value::Number(2.0)));
    assert_eq!(v.get("s").and_then(Value::as_str), Some("hi"));
    assert_eq!(
        v.get("list").and_then(|l| l.get_index(1)),
        Some(&Value::Bool(false))
    );
}

#[test]
fn entry_order_survives_serialization() {
    let v = arbor_json::parse(r#"{"z":1.5,"a":2.5}"#).unwrap();
    let out = serde_json::to_string(&v).unwrap();
    assert_eq!(out, r#"{"z":1.5,"a":2.5}"#);
}

#[test]
fn duplicate_keys_from_foreign_data_collapse() {
    // serde_json tolerates duplicate keys in its own parser; ours must
    // normalize them last-write-wins on the way in
    let v: Value = serde_json::from_str(r#"{"k":1,"k":2}"#).unwrap();
    assert_eq!(v.as_entries().map(<[(String, Value)]>::len), Some(1));
    assert_eq!(v.get("k"), Some(&Value::Number(2.0)));
}

#[test]
fn parsers_agree_with_serde_json_on_shallow_documents() {
    let docs = [
        r#"{"a":1.5,"b":[true,null,"x"]}"#,
        "[]",
        "[0.5,-0.5]",
        r#""text with \"escapes\"""#,
        "null",
    ];
    for doc in docs {
        let ours = arbor_json::parse(doc).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(doc).unwrap();
        assert_eq!(serde_json::to_value(&ours).unwrap(), theirs, "on {doc}");
    }
}
