//! Encoding into a [`Value`] tree.
//!
//! Every encoder, container and nested container writes straight into a
//! mutable borrow of its slot in the output tree. A child scope therefore
//! cannot outlive or run concurrently with its parent, and there is nothing to
//! merge once encoding finishes.

use std::collections::BTreeMap;

use crate::codable::{
    AnyKey, CodingPath, Encode, Encoder, EncodingError, KeyedEncoding, Scalar,
    SingleValueEncoding, UnkeyedEncoding, UserInfo,
};

use super::{TreeEncoderOptions, Value};

/// Encodes values into [`Value`] trees.
///
/// ```
/// use carton::tree::{TreeEncoder, Value};
///
/// let encoder = TreeEncoder::new();
/// assert_eq!(encoder.encode(&vec![1u8, 2]).unwrap(), Value::List(vec![Value::Int(1), Value::Int(2)]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeEncoder {
    options: TreeEncoderOptions,
}

impl TreeEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeEncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TreeEncoderOptions {
        &self.options
    }

    /// Encodes `value` as a document.
    ///
    /// Fails with `InvalidValue` if `value` stores nothing: it requests no
    /// container, or leaves its single value container unwritten.
    pub fn encode<T: Encode + ?Sized>(&self, value: &T) -> Result<Value, EncodingError> {
        let type_name = std::any::type_name::<T>();
        tracing::trace!(type_name, "Encoding value tree");

        let mut root = Value::Null;
        let mut encoder = SlotEncoder::new(&mut root, CodingPath::new(), &self.options);
        if let Err(err) = value.encode(&mut encoder) {
            tracing::debug!(type_name, path = %err.coding_path(), error = %err, "Encoding failed");
            return Err(err);
        }
        if !encoder.stored_anything() {
            return Err(EncodingError::invalid_value(
                &type_name,
                CodingPath::new(),
                format!("Top-level {type_name} did not encode any values."),
            ));
        }
        Ok(root)
    }
}

/// Which container shape a slot has been bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Unclaimed,
    Keyed,
    Unkeyed,
    SingleValue { written: bool },
}

impl SlotState {
    fn shape(self) -> &'static str {
        match self {
            SlotState::Unclaimed => "no",
            SlotState::Keyed => "a keyed",
            SlotState::Unkeyed => "an unkeyed",
            SlotState::SingleValue { .. } => "a single value",
        }
    }
}

/// The encoder handed to one value's `encode`, bound to that value's slot.
struct SlotEncoder<'a> {
    slot: &'a mut Value,
    state: SlotState,
    coding_path: CodingPath,
    options: &'a TreeEncoderOptions,
}

impl<'a> SlotEncoder<'a> {
    fn new(slot: &'a mut Value, coding_path: CodingPath, options: &'a TreeEncoderOptions) -> Self {
        Self {
            slot,
            state: SlotState::Unclaimed,
            coding_path,
            options,
        }
    }

    /// False until a container is requested, and for a single value
    /// container that was never written.
    fn stored_anything(&self) -> bool {
        !matches!(
            self.state,
            SlotState::Unclaimed | SlotState::SingleValue { written: false }
        )
    }

    /// Binds the slot to `requested`. Requesting the bound shape again is
    /// allowed; requesting a different one is a bug in the caller.
    fn claim(&mut self, requested: SlotState) {
        match (self.state, requested) {
            (SlotState::Unclaimed, _) => self.state = requested,
            (SlotState::Keyed, SlotState::Keyed)
            | (SlotState::Unkeyed, SlotState::Unkeyed)
            | (SlotState::SingleValue { .. }, SlotState::SingleValue { .. }) => {}
            (current, _) => panic!(
                "Attempt to request {} container at {} after {} container was already requested",
                requested.shape(),
                self.coding_path,
                current.shape()
            ),
        }
    }
}

impl Encoder for SlotEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn user_info(&self) -> &UserInfo {
        &self.options.user_info
    }

    fn keyed(&mut self) -> Box<dyn KeyedEncoding + '_> {
        self.claim(SlotState::Keyed);
        Box::new(MapEncoder {
            map: ensure_map(self.slot),
            coding_path: self.coding_path.clone(),
            options: self.options,
        })
    }

    fn unkeyed(&mut self) -> Box<dyn UnkeyedEncoding + '_> {
        self.claim(SlotState::Unkeyed);
        Box::new(ListEncoder {
            list: ensure_list(self.slot),
            coding_path: self.coding_path.clone(),
            options: self.options,
        })
    }

    fn single_value(&mut self) -> Box<dyn SingleValueEncoding + '_> {
        self.claim(SlotState::SingleValue { written: false });
        Box::new(SingleEncoder {
            slot: self.slot,
            state: &mut self.state,
            coding_path: self.coding_path.clone(),
            options: self.options,
        })
    }
}

/// Runs `value.encode` against `slot`. A value that stores nothing, either by
/// requesting no container or by leaving its single value container unwritten,
/// is stored as an empty map.
fn encode_child(
    value: &dyn Encode,
    slot: &mut Value,
    coding_path: CodingPath,
    options: &TreeEncoderOptions,
) -> Result<(), EncodingError> {
    let mut encoder = SlotEncoder::new(slot, coding_path, options);
    value.encode(&mut encoder)?;
    if !encoder.stored_anything() {
        *encoder.slot = Value::Map(BTreeMap::new());
    }
    Ok(())
}

fn ensure_map(slot: &mut Value) -> &mut BTreeMap<String, Value> {
    if !slot.is_map() {
        *slot = Value::Map(BTreeMap::new());
    }
    match slot {
        Value::Map(map) => map,
        _ => unreachable!("slot was just set to a map"),
    }
}

fn ensure_list(slot: &mut Value) -> &mut Vec<Value> {
    if !slot.is_list() {
        *slot = Value::List(Vec::new());
    }
    match slot {
        Value::List(list) => list,
        _ => unreachable!("slot was just set to a list"),
    }
}

/// Replaces the entry under `key` with `initial` and returns it.
fn reset_entry<'m>(
    map: &'m mut BTreeMap<String, Value>,
    key: &AnyKey,
    initial: Value,
) -> &'m mut Value {
    let slot = map.entry(key.as_str().to_string()).or_default();
    *slot = initial;
    slot
}

fn push_slot(list: &mut Vec<Value>, initial: Value) -> &mut Value {
    list.push(initial);
    let last = list.len() - 1;
    &mut list[last]
}

fn scalar_value(
    scalar: Scalar,
    options: &TreeEncoderOptions,
    coding_path: impl FnOnce() -> CodingPath,
) -> Result<Value, EncodingError> {
    Ok(match scalar {
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::Str(s) => Value::Text(s),
        Scalar::F32(x) => float_value(f64::from(x), options, coding_path)?,
        Scalar::F64(x) => float_value(x, options, coding_path)?,
        Scalar::I8(n) => Value::Int(n.into()),
        Scalar::I16(n) => Value::Int(n.into()),
        Scalar::I32(n) => Value::Int(n.into()),
        Scalar::I64(n) => Value::Int(n),
        Scalar::Isize(n) => Value::Int(n as i64),
        Scalar::U8(n) => Value::Int(n.into()),
        Scalar::U16(n) => Value::Int(n.into()),
        Scalar::U32(n) => Value::Int(n.into()),
        Scalar::U64(n) => Value::from(n),
        Scalar::Usize(n) => Value::from(n as u64),
    })
}

fn float_value(
    x: f64,
    options: &TreeEncoderOptions,
    coding_path: impl FnOnce() -> CodingPath,
) -> Result<Value, EncodingError> {
    if x.is_finite() {
        return Ok(Value::Float(x));
    }
    match options.non_finite_floats.marker_for(x) {
        Some(marker) => Ok(Value::Text(marker.to_string())),
        None => Err(EncodingError::invalid_value(
            &x,
            coding_path(),
            format!("Unable to encode {x} directly. Use NonFiniteFloatStrategy::AsText to encode it as text."),
        )),
    }
}

struct MapEncoder<'a> {
    map: &'a mut BTreeMap<String, Value>,
    coding_path: CodingPath,
    options: &'a TreeEncoderOptions,
}

impl KeyedEncoding for MapEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn encode_nil(&mut self, key: &AnyKey) -> Result<(), EncodingError> {
        self.map.insert(key.as_str().to_string(), Value::Null);
        Ok(())
    }

    fn encode_scalar(&mut self, value: Scalar, key: &AnyKey) -> Result<(), EncodingError> {
        let value = scalar_value(value, self.options, || self.coding_path.appending(key.clone()))?;
        self.map.insert(key.as_str().to_string(), value);
        Ok(())
    }

    fn encode_value(&mut self, value: &dyn Encode, key: &AnyKey) -> Result<(), EncodingError> {
        let slot = reset_entry(self.map, key, Value::Null);
        encode_child(value, slot, self.coding_path.appending(key.clone()), self.options)
    }

    fn nested_keyed(&mut self, key: &AnyKey) -> Box<dyn KeyedEncoding + '_> {
        let slot = self.map.entry(key.as_str().to_string()).or_default();
        Box::new(MapEncoder {
            map: ensure_map(slot),
            coding_path: self.coding_path.appending(key.clone()),
            options: self.options,
        })
    }

    fn nested_unkeyed(&mut self, key: &AnyKey) -> Box<dyn UnkeyedEncoding + '_> {
        let slot = self.map.entry(key.as_str().to_string()).or_default();
        Box::new(ListEncoder {
            list: ensure_list(slot),
            coding_path: self.coding_path.appending(key.clone()),
            options: self.options,
        })
    }

    fn super_encoder(&mut self, key: &AnyKey) -> Box<dyn Encoder + '_> {
        let slot = reset_entry(self.map, key, Value::Map(BTreeMap::new()));
        Box::new(SlotEncoder::new(
            slot,
            self.coding_path.appending(key.clone()),
            self.options,
        ))
    }
}

struct ListEncoder<'a> {
    list: &'a mut Vec<Value>,
    coding_path: CodingPath,
    options: &'a TreeEncoderOptions,
}

impl ListEncoder<'_> {
    fn next_path(&self) -> CodingPath {
        self.coding_path.appending(AnyKey::index(self.list.len()))
    }
}

impl UnkeyedEncoding for ListEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn count(&self) -> usize {
        self.list.len()
    }

    fn encode_nil(&mut self) -> Result<(), EncodingError> {
        self.list.push(Value::Null);
        Ok(())
    }

    fn encode_scalar(&mut self, value: Scalar) -> Result<(), EncodingError> {
        let value = scalar_value(value, self.options, || self.next_path())?;
        self.list.push(value);
        Ok(())
    }

    fn encode_value(&mut self, value: &dyn Encode) -> Result<(), EncodingError> {
        let coding_path = self.next_path();
        let slot = push_slot(self.list, Value::Null);
        encode_child(value, slot, coding_path, self.options)
    }

    fn nested_keyed(&mut self) -> Box<dyn KeyedEncoding + '_> {
        let coding_path = self.next_path();
        let slot = push_slot(self.list, Value::Map(BTreeMap::new()));
        Box::new(MapEncoder {
            map: ensure_map(slot),
            coding_path,
            options: self.options,
        })
    }

    fn nested_unkeyed(&mut self) -> Box<dyn UnkeyedEncoding + '_> {
        let coding_path = self.next_path();
        let slot = push_slot(self.list, Value::List(Vec::new()));
        Box::new(ListEncoder {
            list: ensure_list(slot),
            coding_path,
            options: self.options,
        })
    }

    fn super_encoder(&mut self) -> Box<dyn Encoder + '_> {
        let coding_path = self.next_path();
        let slot = push_slot(self.list, Value::Map(BTreeMap::new()));
        Box::new(SlotEncoder::new(slot, coding_path, self.options))
    }
}

struct SingleEncoder<'a> {
    slot: &'a mut Value,
    state: &'a mut SlotState,
    coding_path: CodingPath,
    options: &'a TreeEncoderOptions,
}

impl SingleEncoder<'_> {
    fn mark_written(&mut self) {
        if *self.state == (SlotState::SingleValue { written: true }) {
            panic!(
                "Attempt to encode value through single value container at {} when previously value already encoded",
                self.coding_path
            );
        }
        *self.state = SlotState::SingleValue { written: true };
    }
}

impl SingleValueEncoding for SingleEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    fn encode_nil(&mut self) -> Result<(), EncodingError> {
        self.mark_written();
        *self.slot = Value::Null;
        Ok(())
    }

    fn encode_scalar(&mut self, value: Scalar) -> Result<(), EncodingError> {
        self.mark_written();
        *self.slot = scalar_value(value, self.options, || self.coding_path.clone())?;
        Ok(())
    }

    fn encode_value(&mut self, value: &dyn Encode) -> Result<(), EncodingError> {
        self.mark_written();
        encode_child(value, self.slot, self.coding_path.clone(), self.options)
    }
}
