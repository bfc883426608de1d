//! An in-memory document format.
//!
//! The tree format stores keyed containers as [`Value::Map`], unkeyed
//! containers as [`Value::List`] and primitives as leaf values. It is the
//! reference format for the codable framework, and a bridge to JSON text
//! through serde.
//!
//! ```
//! use carton::tree;
//! use std::collections::BTreeMap;
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("ada".to_string(), 3u32);
//!
//! let value = tree::to_value(&scores).unwrap();
//! assert_eq!(value.to_json_string().unwrap(), r#"{"ada":3}"#);
//!
//! let back: BTreeMap<String, u32> = tree::from_value(&value).unwrap();
//! assert_eq!(back, scores);
//! ```

mod decoder;
mod encoder;
mod options;
mod value;

pub use decoder::TreeDecoder;
pub use encoder::TreeEncoder;
pub use options::{NonFiniteFloatStrategy, TreeDecoderOptions, TreeEncoderOptions};
pub use value::Value;

use crate::{
    Result,
    codable::{Decode, DecodingError, Encode, EncodingError},
};

/// Encodes `value` with default options.
pub fn to_value<T: Encode + ?Sized>(value: &T) -> std::result::Result<Value, EncodingError> {
    TreeEncoder::new().encode(value)
}

/// Decodes a `T` from `value` with default options.
pub fn from_value<T: Decode>(value: &Value) -> std::result::Result<T, DecodingError> {
    TreeDecoder::new().decode(value)
}

/// Encodes `value` and renders the document as JSON text.
pub fn to_json_string<T: Encode + ?Sized>(value: &T) -> Result<String> {
    to_value(value)?.to_json_string()
}

/// Parses JSON text and decodes a `T` from it.
pub fn from_json_str<T: Decode>(text: &str) -> Result<T> {
    let value = Value::from_json_str(text)?;
    Ok(from_value(&value)?)
}
