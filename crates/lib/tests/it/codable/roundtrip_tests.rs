//! Round-trip tests for primitives, adapters and user-defined types

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use carton::{
    hashing::SeededState,
    tree::{self, Value},
};

use crate::helpers::*;

// ===== PRIMITIVES =====

#[test]
fn test_integer_extremes_round_trip() {
    assert_eq!(roundtrip(&i8::MIN), i8::MIN);
    assert_eq!(roundtrip(&i16::MAX), i16::MAX);
    assert_eq!(roundtrip(&i32::MIN), i32::MIN);
    assert_eq!(roundtrip(&i64::MIN), i64::MIN);
    assert_eq!(roundtrip(&u8::MAX), u8::MAX);
    assert_eq!(roundtrip(&u16::MAX), u16::MAX);
    assert_eq!(roundtrip(&u32::MAX), u32::MAX);
    assert_eq!(roundtrip(&u64::MAX), u64::MAX);
    assert_eq!(roundtrip(&usize::MAX), usize::MAX);
    assert_eq!(roundtrip(&isize::MIN), isize::MIN);
}

#[test]
fn test_large_unsigned_stored_as_uint() {
    assert_eq!(tree::to_value(&u64::MAX).unwrap(), Value::UInt(u64::MAX));
    assert_eq!(tree::to_value(&7u64).unwrap(), Value::Int(7));
}

#[test]
fn test_floats_round_trip() {
    assert_eq!(roundtrip(&1.5f64), 1.5);
    assert_eq!(roundtrip(&-0.25f32), -0.25);
    assert_eq!(roundtrip(&f64::MAX), f64::MAX);
    assert_eq!(roundtrip(&Celsius(21.5)), Celsius(21.5));
}

#[test]
fn test_text_and_chars_round_trip() {
    assert_eq!(roundtrip(&String::new()), "");
    assert_eq!(roundtrip(&"héllo wörld".to_string()), "héllo wörld");
    assert_eq!(roundtrip(&'λ'), 'λ');
    assert!(roundtrip(&true));
    roundtrip(&());
}

// ===== OPTIONAL AND POINTERS =====

#[test]
fn test_option_round_trip() {
    assert_eq!(roundtrip(&Some(5i32)), Some(5));
    assert_eq!(roundtrip(&None::<i32>), None);
    assert_eq!(tree::to_value(&None::<String>).unwrap(), Value::Null);
}

#[test]
fn test_smart_pointers_are_transparent() {
    assert_eq!(tree::to_value(&Box::new(3u8)).unwrap(), Value::Int(3));
    assert_eq!(*roundtrip(&Box::new(3u8)), 3);
    assert_eq!(*roundtrip(&Rc::new("rc".to_string())), "rc");
    assert_eq!(*roundtrip(&Arc::new(vec![1, 2])), vec![1, 2]);
}

// ===== SEQUENCES =====

#[test]
fn test_vec_round_trip() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(roundtrip(&empty), empty);
    assert_eq!(tree::to_value(&empty).unwrap(), Value::List(Vec::new()));

    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(roundtrip(&values), values);
}

#[test]
fn test_nested_vec_round_trip() {
    let grid = vec![vec![1u8, 2], vec![], vec![3]];
    assert_eq!(roundtrip(&grid), grid);

    let optional = vec![Some("a".to_string()), None, Some("c".to_string())];
    assert_eq!(roundtrip(&optional), optional);
}

#[test]
fn test_vec_deque_and_array_round_trip() {
    let queue: VecDeque<i64> = (1..=5).collect();
    assert_eq!(roundtrip(&queue), queue);

    let array = [10u16, 20, 30];
    assert_eq!(roundtrip(&array), array);
}

#[test]
fn test_slices_encode_as_lists() {
    let values = [1, 2, 3];
    let encoded = tree::to_value(&values[..]).unwrap();
    assert_eq!(
        encoded,
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

// ===== SETS =====

#[test]
fn test_sets_round_trip_ignoring_order() {
    let hashed: HashSet<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
    assert_eq!(roundtrip(&hashed), hashed);

    let ordered: BTreeSet<i32> = [5, -1, 3].into_iter().collect();
    assert_eq!(roundtrip(&ordered), ordered);
    assert_eq!(
        tree::to_value(&ordered).unwrap(),
        Value::List(vec![Value::Int(-1), Value::Int(3), Value::Int(5)])
    );
}

#[test]
fn test_seeded_set_round_trip() {
    let mut set: HashSet<u32, SeededState> = HashSet::default();
    set.extend([1, 2, 3, 4]);
    let decoded: HashSet<u32, SeededState> = roundtrip(&set);
    assert_eq!(decoded, set);
}

#[test]
fn test_set_decode_collapses_duplicates() {
    let value = Value::List(vec![Value::Int(1), Value::Int(1), Value::Int(2)]);
    let set: BTreeSet<i32> = tree::from_value(&value).unwrap();
    assert_eq!(set.len(), 2);
}

// ===== USER TYPES =====

#[test]
fn test_person_round_trip() {
    let mut person = sample_person();
    assert_eq!(roundtrip(&person), person);

    person.nickname = Some("Countess".to_string());
    person.email = Some("ada@example.com".to_string());
    assert_eq!(roundtrip(&person), person);
}

#[test]
fn test_person_round_trip_through_json() {
    let person = sample_person();
    assert_eq!(roundtrip_json(&person), person);

    let points = vec![Point { x: 1, y: -2 }, Point { x: 0, y: 7 }];
    assert_eq!(roundtrip_json(&points), points);
}

#[test]
fn test_point_encodes_positionally() {
    let encoded = tree::to_value(&Point { x: 3, y: 4 }).unwrap();
    assert_eq!(encoded, Value::List(vec![Value::Int(3), Value::Int(4)]));
}

#[test]
fn test_person_layout() {
    let encoded = tree::to_value(&sample_person()).unwrap();

    assert_eq!(encoded.get("name"), Some(&Value::from("Ada")));
    assert_eq!(encoded.get("age"), Some(&Value::Int(36)));
    assert_eq!(encoded.get("nickname"), None);
    assert_eq!(encoded.get("email"), Some(&Value::Null));
    assert!(encoded.get("address").is_some_and(Value::is_map));
    assert_eq!(
        encoded.get("tags").and_then(|tags| tags.at(1)),
        Some(&Value::from("engines"))
    );
}
