//! Error taxonomy and coding path reporting

use carton::{
    Error,
    codable::{AnyKey, CodingPath, DecodingError, Encode, Encoder, EncodingError},
    tree::{self, Value},
};

use crate::helpers::*;

fn people_with_bad_city() -> Value {
    let good = tree::to_value(&sample_person()).unwrap();
    let mut bad = good.clone();
    if let Value::Map(person) = &mut bad
        && let Some(Value::Map(address)) = person.get_mut("address")
    {
        address.insert("city".to_string(), Value::Int(1843));
    }
    Value::List(vec![good, bad])
}

// ===== DECODING ERRORS =====

#[test]
fn test_type_mismatch_reports_full_path() {
    let err = tree::from_value::<Vec<Person>>(&people_with_bad_city()).unwrap_err();

    assert!(err.is_type_mismatch());
    assert_eq!(err.expected(), Some("String"));
    assert_eq!(err.coding_path().to_string(), "[1].address.city");
    assert!(err.coding_path()[0].is_index());
}

#[test]
fn test_key_not_found_reports_container_path() {
    let mut encoded = tree::to_value(&sample_person()).unwrap();
    if let Value::Map(map) = &mut encoded {
        map.remove("age");
    }

    let err = tree::from_value::<Person>(&encoded).unwrap_err();
    assert!(err.is_key_not_found());
    assert!(err.is_not_found());
    assert!(err.coding_path().is_empty());
    assert_eq!(err.key(), Some(&AnyKey::string("age")));
    assert!(err.to_string().contains("No value associated with key \"age\""));
}

#[test]
fn test_null_for_required_value() {
    let mut encoded = tree::to_value(&sample_person()).unwrap();
    if let Value::Map(map) = &mut encoded {
        map.insert("age".to_string(), Value::Null);
    }

    let err = tree::from_value::<Person>(&encoded).unwrap_err();
    assert!(err.is_value_not_found());
    assert_eq!(err.expected(), Some("u32"));
    assert_eq!(err.coding_path().to_string(), "age");
}

#[test]
fn test_shape_mismatch() {
    let err = tree::from_value::<Person>(&Value::List(Vec::new())).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("Expected to decode map but found list instead."));

    let err = tree::from_value::<Vec<i32>>(&Value::from("nope")).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.coding_path(), &CodingPath::new());
}

#[test]
fn test_unkeyed_container_at_end() {
    let err = tree::from_value::<Point>(&Value::List(vec![Value::Int(1)])).unwrap_err();
    assert!(err.is_value_not_found());
    assert_eq!(err.coding_path().to_string(), "[1]");
    assert!(err.to_string().contains("Unkeyed container is at end."));
}

#[test]
fn test_number_out_of_range_is_data_corrupted() {
    let err = tree::from_value::<i8>(&Value::Int(200)).unwrap_err();
    assert!(err.is_data_corrupted());
    assert!(err.to_string().contains("Parsed number <200> does not fit in i8."));

    let err = tree::from_value::<u16>(&Value::Float(1.5)).unwrap_err();
    assert!(err.is_data_corrupted());

    // An integral float is accepted for an integer request
    assert_eq!(tree::from_value::<u16>(&Value::Float(3.0)).unwrap(), 3);
}

#[test]
fn test_fixed_array_length_mismatch() {
    let value = Value::List(vec![Value::Int(1), Value::Int(2)]);
    let err = tree::from_value::<[i32; 3]>(&value).unwrap_err();
    assert!(err.is_data_corrupted());
    assert!(err.to_string().contains("Expected 3 elements but found 2."));
}

#[test]
fn test_char_requires_single_character() {
    let err = tree::from_value::<char>(&Value::from("ab")).unwrap_err();
    assert!(err.is_data_corrupted());
    assert!(tree::from_value::<char>(&Value::from("")).is_err());
}

#[test]
fn test_underlying_error_is_preserved() {
    let err = DecodingError::data_corrupted(CodingPath::new(), "bad payload")
        .with_underlying(std::fmt::Error);
    assert!(err.context().underlying_error.is_some());
}

// ===== ENCODING ERRORS =====

/// A value that claims no container at all.
struct Silent;

impl Encode for Silent {
    fn encode(&self, _encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        Ok(())
    }
}

#[test]
fn test_top_level_value_must_encode_something() {
    let err = tree::to_value(&Silent).unwrap_err();
    assert!(err.is_invalid_value());
    assert!(err.to_string().contains("did not encode any values"));
}

#[test]
fn test_silent_nested_value_encodes_as_empty_map() {
    let encoded = tree::to_value(&vec![Silent, Silent]).unwrap();
    assert_eq!(encoded, Value::List(vec![map_value(&[]), map_value(&[])]));
}

#[test]
fn test_non_finite_float_rejected_by_default() {
    let err = tree::to_value(&vec![1.0, f64::NAN]).unwrap_err();
    assert!(err.is_invalid_value());
    assert_eq!(err.coding_path().to_string(), "[1]");
}

// ===== TOP-LEVEL ERROR =====

#[test]
fn test_library_error_wraps_codable_errors() {
    let err: Error = tree::from_json_str::<Person>("[]").unwrap_err();
    assert_eq!(err.module(), "codable");
    assert!(err.is_type_mismatch());
    assert!(err.coding_path().is_some());

    let err = tree::from_json_str::<Person>("{not json").unwrap_err();
    assert_eq!(err.module(), "serialize");
    assert!(err.is_data_corrupted());

    let err = tree::to_json_string(&f32::INFINITY).unwrap_err();
    assert!(err.is_invalid_value());
}
