//! Dictionary adapter tests
//!
//! String and integer keyed maps are stored as keyed containers; any other key
//! type falls back to an unkeyed container of alternating keys and values.

use std::collections::{BTreeMap, HashMap};

use carton::{
    codable::{KeyRepresentation, MapKey},
    hashing::SeededState,
    tree::{self, Value},
};

use crate::helpers::*;

// ===== STRING KEYS =====

#[test]
fn test_string_keyed_map_is_keyed_container() {
    let mut scores = BTreeMap::new();
    scores.insert("ada".to_string(), 3u32);
    scores.insert("grace".to_string(), 5u32);

    let encoded = tree::to_value(&scores).unwrap();
    assert_eq!(
        encoded,
        map_value(&[("ada", Value::Int(3)), ("grace", Value::Int(5))])
    );
    assert_eq!(roundtrip(&scores), scores);
}

#[test]
fn test_numeric_looking_string_keys_stay_strings() {
    let mut map = HashMap::new();
    map.insert("7".to_string(), true);
    map.insert("x".to_string(), false);
    assert_eq!(roundtrip(&map), map);
}

#[test]
fn test_map_of_records_round_trip() {
    let mut directory: HashMap<String, Person, SeededState> = HashMap::default();
    directory.insert("ada".to_string(), sample_person());
    let decoded: HashMap<String, Person, SeededState> = roundtrip(&directory);
    assert_eq!(decoded, directory);
}

// ===== INTEGER KEYS =====

#[test]
fn test_int_keyed_map_round_trip() {
    let map: BTreeMap<i32, String> = [(-5, "minus five"), (0, "zero"), (42, "answer")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

    let encoded = tree::to_value(&map).unwrap();
    assert!(encoded.is_map());
    assert_eq!(encoded.get("-5"), Some(&Value::from("minus five")));

    assert_eq!(roundtrip(&map), map);
    assert_eq!(roundtrip_json(&map), map);
}

#[test]
fn test_int_keyed_map_rejects_text_keys() {
    let value = map_value(&[("1", Value::Bool(true)), ("one", Value::Bool(false))]);
    let err = tree::from_value::<BTreeMap<u8, bool>>(&value).unwrap_err();

    assert!(err.is_type_mismatch());
    assert_eq!(err.coding_path().to_string(), "one");
}

#[test]
fn test_int_keyed_map_rejects_out_of_range_keys() {
    let value = map_value(&[("300", Value::Null)]);
    let err = tree::from_value::<BTreeMap<u8, Option<i32>>>(&value).unwrap_err();
    assert!(err.is_data_corrupted());
    assert_eq!(err.coding_path().to_string(), "300");
}

#[test]
fn test_u64_keys_beyond_i64_cannot_be_encoded() {
    let mut map = BTreeMap::new();
    map.insert(u64::MAX, 1);
    let err = tree::to_value(&map).unwrap_err();
    assert!(err.is_invalid_value());
}

// ===== ARBITRARY KEYS =====

#[test]
fn test_arbitrary_keys_use_alternating_list() {
    let mut map = BTreeMap::new();
    map.insert(false, "no".to_string());
    map.insert(true, "yes".to_string());

    let encoded = tree::to_value(&map).unwrap();
    assert_eq!(
        encoded,
        Value::List(vec![
            Value::Bool(false),
            Value::from("no"),
            Value::Bool(true),
            Value::from("yes"),
        ])
    );
    assert_eq!(roundtrip(&map), map);
}

#[test]
fn test_composite_keys_round_trip() {
    let mut map: HashMap<Vec<u8>, char> = HashMap::new();
    map.insert(vec![1, 2], 'a');
    map.insert(Vec::new(), 'b');
    assert_eq!(roundtrip(&map), map);
}

#[test]
fn test_odd_length_pairs_are_data_corrupted() {
    let value = Value::List(vec![Value::from("a"), Value::Int(1), Value::from("b")]);
    let err = tree::from_value::<BTreeMap<char, i32>>(&value).unwrap_err();

    assert!(err.is_data_corrupted());
    assert!(err.to_string().contains("odd-length array"));
}

#[test]
fn test_duplicate_keys_keep_last_value() {
    let value = Value::List(vec![
        Value::from("k"),
        Value::Int(1),
        Value::from("k"),
        Value::Int(2),
    ]);
    let map: BTreeMap<char, i32> = tree::from_value(&value).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&'k'), Some(&2));
}

#[test]
fn test_key_representations() {
    assert_eq!(<String as MapKey>::REPRESENTATION, KeyRepresentation::String);
    assert_eq!(<i16 as MapKey>::REPRESENTATION, KeyRepresentation::Int);
    assert_eq!(<usize as MapKey>::REPRESENTATION, KeyRepresentation::Int);
    assert_eq!(<char as MapKey>::REPRESENTATION, KeyRepresentation::Arbitrary);
    assert_eq!(
        <Option<bool> as MapKey>::REPRESENTATION,
        KeyRepresentation::Arbitrary
    );
}
