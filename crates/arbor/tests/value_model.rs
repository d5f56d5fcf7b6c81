use arbor_json::Value;

#[test]
fn push_appends_to_arrays() {
    let mut arr = Value::array();
    arr.push(Value::from(1)).unwrap();
    arr.push(Value::from("two")).unwrap();

    assert_eq!(arr.get_index(0), Some(&Value::Number(1.0)));
    assert_eq!(arr.get_index(1), Some(&Value::String("two".into())));
    assert_eq!(arr.get_index(2), None);
}

#[test]
fn push_on_non_array_returns_the_value_unchanged() {
    let mut not_array = Value::from(3.5);
    let returned = not_array.push(Value::from(true)).unwrap_err();

    assert_eq!(returned, Value::Bool(true));
    assert_eq!(not_array, Value::Number(3.5));
}

#[test]
fn insert_replaces_in_place_and_appends_new_keys() {
    let mut obj = Value::object();
    obj.insert("a", Value::from(1)).unwrap();
    obj.insert("b", Value::from(2)).unwrap();

    let old = obj.insert("a", Value::from(10)).unwrap();
    assert_eq!(old, Some(Value::Number(1.0)));

    let keys: Vec<&str> = obj
        .as_entries()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(obj.get("a"), Some(&Value::Number(10.0)));
}

#[test]
fn insert_on_non_object_returns_the_value() {
    let mut arr = Value::array();
    let returned = arr.insert("key", Value::Null).unwrap_err();
    assert_eq!(returned, Value::Null);
    assert_eq!(arr, Value::Array(vec![]));
}

#[test]
fn lookups_are_absent_on_type_mismatch() {
    assert_eq!(Value::array().get("key"), None);
    assert_eq!(Value::object().get_index(0), None);
    assert_eq!(Value::Null.get("key"), None);
    assert_eq!(Value::from(1.0).get_index(0), None);
}

#[test]
fn get_mut_updates_in_place() {
    let mut obj = Value::object();
    obj.insert("n", Value::from(1)).unwrap();
    if let Some(slot) = obj.get_mut("n") {
        *slot = Value::from(2);
    }
    assert_eq!(obj.get("n"), Some(&Value::Number(2.0)));
}

#[test]
fn primitives_and_containers_classify() {
    assert!(Value::Null.is_primitive());
    assert!(Value::from(false).is_primitive());
    assert!(Value::from(0.5).is_primitive());
    assert!(Value::from("s").is_primitive());
    assert!(!Value::array().is_primitive());
    assert!(!Value::object().is_primitive());
}

#[test]
fn accessors_match_variants() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
    assert_eq!(Value::from("hi").as_str(), Some("hi"));
    assert_eq!(Value::from(2.5).as_str(), None);

    let arr: Value = vec![Value::Null].into_iter().collect();
    assert_eq!(arr.as_array().map(<[Value]>::len), Some(1));
}

#[test]
fn dropping_a_tree_releases_the_whole_subtree() {
    // construction then drop walks the whole owned subtree
    let mut v = Value::from(1);
    for _ in 0..32 {
        let mut arr = Value::array();
        arr.push(v).unwrap();
        v = arr;
    }
    drop(v);
}
