//! Decoding from a [`Value`] tree.

use std::collections::BTreeMap;

use crate::codable::{
    AnyKey, CodingPath, Decode, Decoder, DecodingError, KeyedDecoding, Scalar, ScalarKind,
    SingleValueDecoding, UnkeyedDecoding, UserInfo,
};

use super::{TreeDecoderOptions, Value};

/// Stands in for absent entries handed to a super decoder.
static NULL: Value = Value::Null;

/// Decodes values from [`Value`] trees.
#[derive(Debug, Clone, Default)]
pub struct TreeDecoder {
    options: TreeDecoderOptions,
}

impl TreeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeDecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TreeDecoderOptions {
        &self.options
    }

    /// Rebuilds a `T` from `value`.
    pub fn decode<T: Decode>(&self, value: &Value) -> Result<T, DecodingError> {
        let type_name = std::any::type_name::<T>();
        tracing::trace!(type_name, "Decoding value tree");

        let mut decoder = NodeDecoder::new(value, CodingPath::new(), &self.options);
        T::decode(&mut decoder).inspect_err(|err| {
            tracing::debug!(type_name, path = %err.coding_path(), error = %err, "Decoding failed");
        })
    }
}

/// The decoder handed to one value's `decode`, reading one node of the tree.
struct NodeDecoder<'a> {
    value: &'a Value,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
}

impl<'a> NodeDecoder<'a> {
    fn new(value: &'a Value, coding_path: CodingPath, options: &'a TreeDecoderOptions) -> Self {
        Self {
            value,
            coding_path,
            options,
        }
    }
}

impl Decoder for NodeDecoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn user_info(&self) -> &UserInfo {
        &self.options.user_info
    }

    fn keyed(&mut self) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError> {
        keyed_decoding(self.value, self.coding_path.clone(), self.options)
    }

    fn unkeyed(&mut self) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError> {
        unkeyed_decoding(self.value, self.coding_path.clone(), self.options)
    }

    fn single_value(&mut self) -> Result<Box<dyn SingleValueDecoding + '_>, DecodingError> {
        Ok(Box::new(SingleDecoder {
            value: self.value,
            coding_path: self.coding_path.clone(),
            options: self.options,
        }))
    }
}

fn keyed_decoding<'a>(
    value: &'a Value,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
) -> Result<Box<dyn KeyedDecoding + 'a>, DecodingError> {
    match value {
        Value::Map(map) => Ok(Box::new(MapDecoder {
            map,
            coding_path,
            options,
        })),
        Value::Null => Err(DecodingError::value_not_found(
            "map",
            coding_path,
            "Cannot get keyed decoding container -- found null value instead.",
        )),
        other => Err(DecodingError::type_mismatch(
            "map",
            coding_path,
            format!("Expected to decode map but found {} instead.", other.type_name()),
        )),
    }
}

fn unkeyed_decoding<'a>(
    value: &'a Value,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
) -> Result<Box<dyn UnkeyedDecoding + 'a>, DecodingError> {
    match value {
        Value::List(list) => Ok(Box::new(ListDecoder {
            list,
            current: 0,
            coding_path,
            options,
        })),
        Value::Null => Err(DecodingError::value_not_found(
            "list",
            coding_path,
            "Cannot get unkeyed decoding container -- found null value instead.",
        )),
        other => Err(DecodingError::type_mismatch(
            "list",
            coding_path,
            format!("Expected to decode list but found {} instead.", other.type_name()),
        )),
    }
}

/// Converts a stored node to the primitive `kind`.
///
/// Integers must fit the requested width exactly; an integral float is
/// accepted for an integer request. Floats accept any stored number, and the
/// configured non-finite markers.
fn decode_scalar_value(
    value: &Value,
    kind: ScalarKind,
    coding_path: &CodingPath,
    options: &TreeDecoderOptions,
) -> Result<Scalar, DecodingError> {
    if value.is_null() {
        return Err(DecodingError::value_not_found(
            kind.type_name(),
            coding_path.clone(),
            format!("Expected {kind} value but found null instead."),
        ));
    }
    let mismatch = || {
        DecodingError::type_mismatch(
            kind.type_name(),
            coding_path.clone(),
            format!("Expected to decode {kind} but found {} instead.", value.type_name()),
        )
    };
    let does_not_fit = || {
        DecodingError::data_corrupted(
            coding_path.clone(),
            format!("Parsed number <{value}> does not fit in {kind}."),
        )
    };

    match kind {
        ScalarKind::Bool => value.as_bool().map(Scalar::Bool).ok_or_else(mismatch),
        ScalarKind::Str => value
            .as_text()
            .map(|text| Scalar::Str(text.to_string()))
            .ok_or_else(mismatch),
        ScalarKind::F32 | ScalarKind::F64 => {
            let x = match value {
                Value::Float(x) => *x,
                Value::Int(n) => *n as f64,
                Value::UInt(n) => *n as f64,
                Value::Text(text) => options
                    .non_finite_floats
                    .float_for(text)
                    .ok_or_else(mismatch)?,
                _ => return Err(mismatch()),
            };
            if kind == ScalarKind::F64 {
                Ok(Scalar::F64(x))
            } else if x.is_finite() && x.abs() > f64::from(f32::MAX) {
                Err(does_not_fit())
            } else {
                Ok(Scalar::F32(x as f32))
            }
        }
        _ => {
            let scalar = match value {
                Value::Int(n) => Scalar::integer_from_i64(kind, *n),
                Value::UInt(n) => Scalar::integer_from_u64(kind, *n),
                Value::Float(x) => integral(*x).and_then(|n| Scalar::integer_from_i64(kind, n)),
                _ => return Err(mismatch()),
            };
            scalar.ok_or_else(does_not_fit)
        }
    }
}

/// `x` as an `i64` if it has no fractional part and is in range.
fn integral(x: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (x.fract() == 0.0 && (-LIMIT..LIMIT).contains(&x)).then_some(x as i64)
}

struct MapDecoder<'a> {
    map: &'a BTreeMap<String, Value>,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
}

impl<'a> MapDecoder<'a> {
    fn entry(&self, key: &AnyKey) -> Result<&'a Value, DecodingError> {
        self.map.get(key.as_str()).ok_or_else(|| {
            DecodingError::key_not_found(
                key.clone(),
                self.coding_path.clone(),
                format!("No value associated with key \"{key}\"."),
            )
        })
    }
}

impl KeyedDecoding for MapDecoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn all_keys(&self) -> Vec<AnyKey> {
        self.map.keys().map(|key| AnyKey::from_string(key.as_str())).collect()
    }

    fn contains(&self, key: &AnyKey) -> bool {
        self.map.contains_key(key.as_str())
    }

    fn decode_nil(&mut self, key: &AnyKey) -> Result<bool, DecodingError> {
        Ok(self.entry(key)?.is_null())
    }

    fn decode_scalar(&mut self, kind: ScalarKind, key: &AnyKey) -> Result<Scalar, DecodingError> {
        let value = self.entry(key)?;
        decode_scalar_value(
            value,
            kind,
            &self.coding_path.appending(key.clone()),
            self.options,
        )
    }

    fn value_decoder(&mut self, key: &AnyKey) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        let value = self.entry(key)?;
        Ok(Box::new(NodeDecoder::new(
            value,
            self.coding_path.appending(key.clone()),
            self.options,
        )))
    }

    fn nested_keyed(&mut self, key: &AnyKey) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError> {
        let value = self.entry(key)?;
        keyed_decoding(value, self.coding_path.appending(key.clone()), self.options)
    }

    fn nested_unkeyed(
        &mut self,
        key: &AnyKey,
    ) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError> {
        let value = self.entry(key)?;
        unkeyed_decoding(value, self.coding_path.appending(key.clone()), self.options)
    }

    /// An absent entry decodes as null, so a base type with only optional
    /// fields still decodes.
    fn super_decoder(&mut self, key: &AnyKey) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        let value = self.map.get(key.as_str()).unwrap_or(&NULL);
        Ok(Box::new(NodeDecoder::new(
            value,
            self.coding_path.appending(key.clone()),
            self.options,
        )))
    }
}

struct ListDecoder<'a> {
    list: &'a [Value],
    current: usize,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
}

impl<'a> ListDecoder<'a> {
    fn next_path(&self) -> CodingPath {
        self.coding_path.appending(AnyKey::index(self.current))
    }

    /// The next element, without consuming it.
    fn peek(&self, expected: &'static str) -> Result<&'a Value, DecodingError> {
        self.list.get(self.current).ok_or_else(|| {
            DecodingError::value_not_found(
                expected,
                self.next_path(),
                "Unkeyed container is at end.",
            )
        })
    }
}

impl UnkeyedDecoding for ListDecoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn count(&self) -> Option<usize> {
        Some(self.list.len())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.list.len()
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn decode_nil(&mut self) -> Result<bool, DecodingError> {
        if self.peek("null")?.is_null() {
            self.current += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn decode_scalar(&mut self, kind: ScalarKind) -> Result<Scalar, DecodingError> {
        let value = self.peek(kind.type_name())?;
        let scalar = decode_scalar_value(value, kind, &self.next_path(), self.options)?;
        self.current += 1;
        Ok(scalar)
    }

    fn value_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        let value = self.peek("value")?;
        let coding_path = self.next_path();
        self.current += 1;
        Ok(Box::new(NodeDecoder::new(value, coding_path, self.options)))
    }

    fn nested_keyed(&mut self) -> Result<Box<dyn KeyedDecoding + '_>, DecodingError> {
        let value = self.peek("map")?;
        let container = keyed_decoding(value, self.next_path(), self.options)?;
        self.current += 1;
        Ok(container)
    }

    fn nested_unkeyed(&mut self) -> Result<Box<dyn UnkeyedDecoding + '_>, DecodingError> {
        let value = self.peek("list")?;
        let container = unkeyed_decoding(value, self.next_path(), self.options)?;
        self.current += 1;
        Ok(container)
    }

    fn super_decoder(&mut self) -> Result<Box<dyn Decoder + '_>, DecodingError> {
        self.value_decoder()
    }
}

struct SingleDecoder<'a> {
    value: &'a Value,
    coding_path: CodingPath,
    options: &'a TreeDecoderOptions,
}

impl SingleValueDecoding for SingleDecoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn decode_nil(&mut self) -> bool {
        self.value.is_null()
    }

    fn decode_scalar(&mut self, kind: ScalarKind) -> Result<Scalar, DecodingError> {
        decode_scalar_value(self.value, kind, &self.coding_path, self.options)
    }

    fn value_decoder(&mut self) -> Box<dyn Decoder + '_> {
        Box::new(NodeDecoder::new(
            self.value,
            self.coding_path.clone(),
            self.options,
        ))
    }
}
