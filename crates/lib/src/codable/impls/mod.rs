//! `Encode` and `Decode` for standard library types.

mod map;
mod option;
mod primitives;
mod range;
mod sequence;

pub use map::{KeyRepresentation, MapKey};
