//! Format-agnostic encoding and decoding.
//!
//! A type opts in by implementing [`Encode`] and [`Decode`]. Its
//! implementation talks only to containers: keyed (named fields), unkeyed
//! (ordered elements) or single value. A format (see [`crate::tree`]) supplies
//! the containers by implementing [`Encoder`] and [`Decoder`].
//!
//! ## Core types
//!
//! - [`CodingKey`] / [`AnyKey`]: field names, with an optional integer identity
//! - [`CodingPath`]: the chain of keys from the root to the slot being processed
//! - [`EncodingError`] / [`DecodingError`]: failures, each carrying a [`Context`]
//! - [`UserInfo`]: caller-supplied configuration visible to every implementation
//!
//! ## Absence and null
//!
//! Decoding keeps absent keys and explicit nulls apart. `decode` on an absent
//! key fails with `KeyNotFound`, on a null with `ValueNotFound`.
//! `decode_if_present` maps both to `None`, but still reports a value of the
//! wrong type as `TypeMismatch`.

pub mod errors;
mod impls;
mod key;
mod keyed;
mod path;
pub mod scalar;
mod single;
mod traits;
mod unkeyed;
mod user_info;

pub use errors::{Context, DecodingError, EncodingError};
pub use impls::{KeyRepresentation, MapKey};
pub use key::{AnyKey, CodingKey, SUPER_KEY};
pub use keyed::{KeyedDecodingContainer, KeyedEncodingContainer};
pub use path::CodingPath;
pub use scalar::{Primitive, Scalar, ScalarKind};
pub use single::{SingleValueDecodingContainer, SingleValueEncodingContainer};
pub use traits::{
    Codable, Decode, Decoder, DecoderExt, Encode, Encoder, EncoderExt, KeyedDecoding,
    KeyedEncoding, SingleValueDecoding, SingleValueEncoding, UnkeyedDecoding, UnkeyedEncoding,
};
pub use unkeyed::{UnkeyedDecodingContainer, UnkeyedEncodingContainer};
pub use user_info::{UserInfo, UserInfoKey};
