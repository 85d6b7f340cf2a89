use error_trail::{fields, FieldStore, FieldValue};

#[test]
fn set_appends_new_keys_in_insertion_order() {
    let mut store = FieldStore::new();
    store.set("code", 503);
    store.set("device", "sda1");
    store.set("retry", true);

    let keys: Vec<&str> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["code", "device", "retry"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn set_overwrites_in_place_without_moving_the_key() {
    let mut store = FieldStore::new();
    store.set("code", 503);
    store.set("device", "sda1");
    store.set("code", 507);

    let keys: Vec<&str> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["code", "device"]);
    assert_eq!(store.get("code"), Some(&FieldValue::from(507)));
}

#[test]
fn merge_overwrites_collisions_and_appends_new_keys() {
    let mut store = FieldStore::new().with("a", 1).with("b", 2);
    store.merge(FieldStore::new().with("b", 20).with("c", 30));

    let entries: Vec<(&str, String)> =
        store.iter().map(|(key, value)| (key, value.to_string())).collect();
    assert_eq!(
        entries,
        [("a", "1".to_owned()), ("b", "20".to_owned()), ("c", "30".to_owned())]
    );
}

#[test]
fn merge_into_empty_store_takes_other_order() {
    let mut store = FieldStore::new();
    store.merge(FieldStore::new().with("x", 1).with("y", 2));

    let keys: Vec<&str> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["x", "y"]);
}

#[test]
fn fields_macro_builds_a_store() {
    let store = fields!("code" => 503, "device" => "sda1", "retry" => true);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("retry"), Some(&FieldValue::from(true)));

    let empty = fields!();
    assert!(empty.is_empty());
}

#[test]
fn field_value_conversions_and_display() {
    assert_eq!(FieldValue::from("sda1").as_str(), Some("sda1"));
    assert_eq!(FieldValue::from(String::from("sda1")), FieldValue::from("sda1"));
    assert_eq!(FieldValue::from(-7).to_string(), "-7");
    assert_eq!(FieldValue::from(42u64).to_string(), "42");
    assert_eq!(FieldValue::from(false).to_string(), "false");
    assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
    assert_eq!(FieldValue::from(9).as_str(), None);
}

#[test]
fn get_on_missing_key_is_none() {
    let store = FieldStore::new().with("present", 1);
    assert!(store.get("absent").is_none());
    assert!(!store.contains_key("absent"));
    assert!(store.contains_key("present"));
}

#[test]
fn from_iterator_collects_with_set_semantics() {
    let store: FieldStore = vec![
        ("a".to_owned(), FieldValue::from(1)),
        ("b".to_owned(), FieldValue::from(2)),
        ("a".to_owned(), FieldValue::from(3)),
    ]
    .into_iter()
    .collect();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("a"), Some(&FieldValue::from(3)));
}

#[cfg(feature = "serde")]
#[test]
fn field_store_serde_round_trip() {
    let store = fields!("code" => 503, "retry" => true);
    let json = serde_json::to_string(&store).unwrap();
    let back: FieldStore = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store);
}
