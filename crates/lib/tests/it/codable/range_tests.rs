//! Range adapter tests

use std::{
    collections::BTreeMap,
    ops::{Range, RangeInclusive},
};

use carton::tree::{self, NonFiniteFloatStrategy, TreeDecoder, TreeDecoderOptions, Value};

use crate::helpers::*;

#[test]
fn test_range_bounds_preserved() {
    assert_eq!(roundtrip(&(3..9)), 3..9);
    assert_eq!(roundtrip(&(-4i64..-4)), -4..-4);
    assert_eq!(roundtrip(&(0.5f64..2.5)), 0.5..2.5);
    assert_eq!(roundtrip(&('a'..='z')), 'a'..='z');
    assert_eq!(roundtrip(&(u64::MAX..=u64::MAX)), u64::MAX..=u64::MAX);
}

#[test]
fn test_range_layout() {
    let encoded = tree::to_value(&(1u8..4)).unwrap();
    assert_eq!(encoded, Value::List(vec![Value::Int(1), Value::Int(4)]));
}

#[test]
fn test_one_sided_ranges() {
    assert_eq!(roundtrip(&(5u32..)), 5..);
    assert_eq!(roundtrip(&(..7i16)), ..7);
    assert_eq!(roundtrip(&(..=7i16)), ..=7);
    assert_eq!(tree::to_value(&(5u32..)).unwrap(), Value::List(vec![Value::Int(5)]));
}

#[test]
fn test_inverted_range_is_data_corrupted() {
    let value = Value::List(vec![Value::Int(9), Value::Int(3)]);

    let err = tree::from_value::<Range<i32>>(&value).unwrap_err();
    assert!(err.is_data_corrupted());
    assert!(err.to_string().contains("lowerBound that is greater than upperBound"));

    let err = tree::from_value::<RangeInclusive<i32>>(&value).unwrap_err();
    assert!(err.is_data_corrupted());
    assert!(err.to_string().contains("ClosedRange"));
}

#[test]
fn test_unordered_float_bounds_are_data_corrupted() {
    let decoder = TreeDecoder::with_options(
        TreeDecoderOptions::default()
            .with_non_finite_floats(NonFiniteFloatStrategy::conventional_text()),
    );

    let nan_lower = Value::List(vec![Value::from("NaN"), Value::Float(1.0)]);
    let err = decoder.decode::<Range<f64>>(&nan_lower).unwrap_err();
    assert!(err.is_data_corrupted());

    let nan_upper = Value::List(vec![Value::Float(1.0), Value::from("NaN")]);
    assert!(decoder.decode::<RangeInclusive<f64>>(&nan_upper).unwrap_err().is_data_corrupted());

    // Infinite bounds are ordered and stay valid
    let open = Value::List(vec![Value::from("-Infinity"), Value::from("Infinity")]);
    assert_eq!(
        decoder.decode::<Range<f64>>(&open).unwrap(),
        f64::NEG_INFINITY..f64::INFINITY
    );
}

#[test]
fn test_range_missing_upper_bound() {
    let value = Value::List(vec![Value::Int(1)]);
    let err = tree::from_value::<Range<i32>>(&value).unwrap_err();
    assert!(err.is_value_not_found());
    assert_eq!(err.coding_path().to_string(), "[1]");
}

#[test]
fn test_range_inside_record_reports_path() {
    let value = map_value(&[("window", Value::List(vec![Value::Int(10), Value::Int(0)]))]);

    let err = tree::from_value::<BTreeMap<String, Range<u8>>>(&value).unwrap_err();
    assert!(err.is_data_corrupted());
    assert_eq!(err.coding_path().to_string(), "window");
}
