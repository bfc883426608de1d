//!
//! Carton: format-agnostic encoding and decoding over position-based collections.
//!
//! ## Core Concepts
//!
//! * **Codable (`codable`)**: Types describe themselves to an encoder and rebuild themselves
//!   from a decoder through keyed, unkeyed and single value containers, without knowing the
//!   output format.
//!     * **Keys and paths (`codable::CodingKey`, `codable::CodingPath`)**: Every container slot is
//!       named by a key; every error carries the path of keys from the root.
//!     * **Errors (`codable::EncodingError`, `codable::DecodingError`)**: A fixed taxonomy that
//!       keeps "absent" and "null" apart.
//! * **Tree format (`tree`)**: The reference in-memory format, with a JSON bridge through serde.
//! * **Collections (`collection`)**: A capability-tiered collection model (forward,
//!   bidirectional, random access, mutable, range replaceable) with default algorithms and
//!   zero-copy views that share their owner's positions.
//! * **Hashing (`hashing`)**: A lazily chosen, process-wide hash seed.

pub mod codable;
pub mod collection;
pub mod hashing;
pub mod tree;

pub use codable::{Decode, DecodingError, Encode, EncodingError};

/// Result type used throughout the Carton library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Carton library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value could not be encoded
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// A value could not be decoded
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Encoding(_) | Error::Decoding(_) => "codable",
            Error::Serialize(_) => "serialize",
        }
    }

    /// The coding path of an encoding or decoding error.
    pub fn coding_path(&self) -> Option<&codable::CodingPath> {
        match self {
            Error::Encoding(err) => Some(err.coding_path()),
            Error::Decoding(err) => Some(err.coding_path()),
            Error::Serialize(_) => None,
        }
    }

    /// Check if this error reports a missing key or a null value.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Decoding(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error reports data of the wrong shape or type.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Decoding(err) => err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error reports malformed stored data.
    pub fn is_data_corrupted(&self) -> bool {
        match self {
            Error::Decoding(err) => err.is_data_corrupted(),
            Error::Serialize(err) => err.is_syntax() || err.is_data(),
            _ => false,
        }
    }

    /// Check if this error reports a value the format cannot represent.
    pub fn is_invalid_value(&self) -> bool {
        match self {
            Error::Encoding(err) => err.is_invalid_value(),
            _ => false,
        }
    }
}
