//! Dictionary adapters.
//!
//! How a map is stored depends on its key type:
//!
//! - String keys: a keyed container, one entry per map entry
//! - Integer keys: a keyed container whose keys carry an integer identity
//! - Any other key: an unkeyed container of alternating key, value elements
//!
//! Duplicate keys on decode keep the last value.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use tracing::debug;

use crate::codable::{
    AnyKey, CodingKey, Decode, Decoder, DecoderExt, DecodingError, Encode, Encoder, EncoderExt,
    EncodingError, KeyedDecodingContainer,
};

/// How a map key type is laid out in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRepresentation {
    /// Keys become string coding keys
    String,
    /// Keys become coding keys with an integer identity
    Int,
    /// Keys are encoded as values alongside their entries
    Arbitrary,
}

/// A type usable as a map key in encoded form.
///
/// The default is [`KeyRepresentation::Arbitrary`], which accepts any
/// `Encode + Decode` key at the cost of a less compact layout.
pub trait MapKey: Encode + Decode {
    const REPRESENTATION: KeyRepresentation = KeyRepresentation::Arbitrary;

    /// This key as a coding key. Required for `String` and `Int`
    /// representations.
    fn to_coding_key(&self) -> Option<AnyKey> {
        None
    }

    /// Recovers a key from a decoded coding key.
    fn from_coding_key(_key: &AnyKey) -> Option<Self> {
        None
    }
}

impl MapKey for String {
    const REPRESENTATION: KeyRepresentation = KeyRepresentation::String;

    fn to_coding_key(&self) -> Option<AnyKey> {
        Some(AnyKey::string(self.as_str()))
    }

    fn from_coding_key(key: &AnyKey) -> Option<Self> {
        Some(key.as_str().to_string())
    }
}

macro_rules! impl_int_map_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MapKey for $ty {
                const REPRESENTATION: KeyRepresentation = KeyRepresentation::Int;

                fn to_coding_key(&self) -> Option<AnyKey> {
                    i64::try_from(*self).ok().map(AnyKey::int)
                }

                fn from_coding_key(key: &AnyKey) -> Option<Self> {
                    key.int_value().and_then(|value| <$ty>::try_from(value).ok())
                }
            }
        )*
    };
}

impl_int_map_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl MapKey for bool {}
impl MapKey for char {}

impl<T: MapKey> MapKey for Vec<T> {}
impl<T: MapKey> MapKey for Option<T> {}

fn encode_entries<'m, K, V, I>(entries: I, encoder: &mut dyn Encoder) -> Result<(), EncodingError>
where
    K: MapKey + 'm,
    V: Encode + 'm,
    I: Iterator<Item = (&'m K, &'m V)>,
{
    match K::REPRESENTATION {
        KeyRepresentation::String | KeyRepresentation::Int => {
            let mut container = encoder.container::<AnyKey>();
            for (key, value) in entries {
                let Some(coding_key) = key.to_coding_key() else {
                    return Err(EncodingError::invalid_value(
                        &std::any::type_name::<K>(),
                        container.coding_path().clone(),
                        "Map key has no coding key form.",
                    ));
                };
                container.encode(value, coding_key)?;
            }
            Ok(())
        }
        KeyRepresentation::Arbitrary => {
            let mut container = encoder.unkeyed_container();
            for (key, value) in entries {
                container.encode(key)?;
                container.encode(value)?;
            }
            Ok(())
        }
    }
}

/// Decodes every entry, calling `insert` for each. `insert` reports whether
/// an earlier entry with the same key was replaced.
fn decode_entries<K, V>(
    decoder: &mut dyn Decoder,
    mut insert: impl FnMut(K, V) -> bool,
) -> Result<(), DecodingError>
where
    K: MapKey,
    V: Decode,
{
    match K::REPRESENTATION {
        KeyRepresentation::String | KeyRepresentation::Int => {
            let mut container = decoder.container::<AnyKey>()?;
            for coding_key in container.all_any_keys() {
                let key = key_from_coding_key::<K>(&container, &coding_key)?;
                let value = container.decode::<V>(coding_key.clone())?;
                if insert(key, value) {
                    debug!(key = %coding_key, path = %container.coding_path(), "Duplicate map key, keeping last value");
                }
            }
            Ok(())
        }
        KeyRepresentation::Arbitrary => {
            let mut container = decoder.unkeyed_container()?;
            if let Some(count) = container.count()
                && count % 2 != 0
            {
                return Err(DecodingError::data_corrupted(
                    container.coding_path().clone(),
                    "Expected collection of key-value pairs; encountered odd-length array instead.",
                ));
            }
            while !container.is_at_end() {
                let key = container.decode::<K>()?;
                if container.is_at_end() {
                    return Err(DecodingError::data_corrupted_for_index(
                        container.current_index(),
                        container.coding_path(),
                        "Unkeyed container reached end before value in key-value pair.",
                    ));
                }
                let value = container.decode::<V>()?;
                if insert(key, value) {
                    debug!(path = %container.coding_path(), "Duplicate map key, keeping last value");
                }
            }
            Ok(())
        }
    }
}

fn key_from_coding_key<K: MapKey>(
    container: &KeyedDecodingContainer<'_, AnyKey>,
    coding_key: &AnyKey,
) -> Result<K, DecodingError> {
    if K::REPRESENTATION == KeyRepresentation::Int && coding_key.int_value().is_none() {
        return Err(DecodingError::type_mismatch(
            "Int",
            container.coding_path().appending(coding_key.clone()),
            "Expected Int key but found String key instead.",
        ));
    }
    K::from_coding_key(coding_key).ok_or_else(|| {
        DecodingError::data_corrupted_for_key(
            coding_key,
            container.coding_path(),
            format!("Key {coding_key} is out of range for the map's key type."),
        )
    })
}

impl<K, V, S> Encode for HashMap<K, V, S>
where
    K: MapKey,
    V: Encode,
{
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_entries(self.iter(), encoder)
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut map = HashMap::with_hasher(S::default());
        decode_entries(decoder, |key, value| map.insert(key, value).is_some())?;
        Ok(map)
    }
}

impl<K, V> Encode for BTreeMap<K, V>
where
    K: MapKey,
    V: Encode,
{
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_entries(self.iter(), encoder)
    }
}

impl<K, V> Decode for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Decode,
{
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut map = BTreeMap::new();
        decode_entries(decoder, |key, value| map.insert(key, value).is_some())?;
        Ok(map)
    }
}
