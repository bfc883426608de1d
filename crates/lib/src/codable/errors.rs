//! Error types for encoding and decoding.
//!
//! Encoding and decoding fail in disjoint ways, so each direction has its own
//! error enum. Every variant carries a [`Context`] naming the coding path at the
//! point of failure, a human-readable description, and optionally the error
//! that caused it.
//!
//! Contract violations by an `Encode`/`Decode` implementation (requesting two
//! different container shapes, writing twice to a single value container) are
//! not represented here; they panic.

use std::{error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

use super::{
    key::{AnyKey, CodingKey},
    path::CodingPath,
};

/// Diagnostic context attached to every encoding and decoding error.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path from the document root to the failing slot.
    pub coding_path: CodingPath,
    /// Description suitable for display.
    pub debug_description: String,
    /// The error that caused this one, if any.
    pub underlying_error: Option<Arc<dyn StdError + Send + Sync>>,
}

impl Context {
    pub fn new(coding_path: CodingPath, debug_description: impl Into<String>) -> Self {
        Self {
            coding_path,
            debug_description: debug_description.into(),
            underlying_error: None,
        }
    }

    /// Attaches the error that caused this one.
    pub fn with_underlying(mut self, error: impl StdError + Send + Sync + 'static) -> Self {
        self.underlying_error = Some(Arc::new(error));
        self
    }

    /// Returns this context with `prefix` placed in front of its coding path.
    pub fn prefixed_by(mut self, prefix: &CodingPath) -> Self {
        self.coding_path = self.coding_path.prefixed_by(prefix);
        self
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.debug_description, self.coding_path)?;
        if let Some(underlying) = &self.underlying_error {
            write!(f, ": {underlying}")?;
        }
        Ok(())
    }
}

/// Errors produced while encoding.
///
/// The only way encoding fails is that the format cannot represent a value.
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// The format cannot represent this value
    #[error("Invalid value {value}: {context}")]
    InvalidValue { value: String, context: Context },
}

impl EncodingError {
    /// Builds an `InvalidValue` error from the value's debug rendering.
    pub fn invalid_value(
        value: &dyn fmt::Debug,
        coding_path: CodingPath,
        description: impl Into<String>,
    ) -> Self {
        EncodingError::InvalidValue {
            value: format!("{value:?}"),
            context: Context::new(coding_path, description),
        }
    }

    pub fn context(&self) -> &Context {
        match self {
            EncodingError::InvalidValue { context, .. } => context,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.context().coding_path
    }

    /// Check if this error reports an unrepresentable value
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, EncodingError::InvalidValue { .. })
    }
}

/// Errors produced while decoding.
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum DecodingError {
    /// The stored shape or primitive type does not match the requested one
    #[error("Type mismatch, expected {expected}: {context}")]
    TypeMismatch {
        expected: &'static str,
        context: Context,
    },

    /// A non-optional value was requested but null was found
    #[error("Value not found, expected {expected}: {context}")]
    ValueNotFound {
        expected: &'static str,
        context: Context,
    },

    /// A keyed lookup found no entry for the key
    #[error("Key not found '{key}': {context}")]
    KeyNotFound { key: AnyKey, context: Context },

    /// The stored data is not valid for any shape
    #[error("Data corrupted: {context}")]
    DataCorrupted { context: Context },
}

impl DecodingError {
    pub fn type_mismatch(
        expected: &'static str,
        coding_path: CodingPath,
        description: impl Into<String>,
    ) -> Self {
        DecodingError::TypeMismatch {
            expected,
            context: Context::new(coding_path, description),
        }
    }

    pub fn value_not_found(
        expected: &'static str,
        coding_path: CodingPath,
        description: impl Into<String>,
    ) -> Self {
        DecodingError::ValueNotFound {
            expected,
            context: Context::new(coding_path, description),
        }
    }

    pub fn key_not_found(
        key: AnyKey,
        coding_path: CodingPath,
        description: impl Into<String>,
    ) -> Self {
        DecodingError::KeyNotFound {
            key,
            context: Context::new(coding_path, description),
        }
    }

    pub fn data_corrupted(coding_path: CodingPath, description: impl Into<String>) -> Self {
        DecodingError::DataCorrupted {
            context: Context::new(coding_path, description),
        }
    }

    /// A `DataCorrupted` error for the slot `key` of a keyed container at
    /// `container_path`.
    pub fn data_corrupted_for_key<K: CodingKey + ?Sized>(
        key: &K,
        container_path: &CodingPath,
        description: impl Into<String>,
    ) -> Self {
        Self::data_corrupted(container_path.appending(AnyKey::from_key(key)), description)
    }

    /// A `DataCorrupted` error for the slot at `current_index` of an unkeyed
    /// container at `container_path`.
    pub fn data_corrupted_for_index(
        current_index: usize,
        container_path: &CodingPath,
        description: impl Into<String>,
    ) -> Self {
        Self::data_corrupted(container_path.appending(AnyKey::index(current_index)), description)
    }

    /// A `DataCorrupted` error for a single value container at `container_path`.
    pub fn data_corrupted_for_single_value(
        container_path: &CodingPath,
        description: impl Into<String>,
    ) -> Self {
        Self::data_corrupted(container_path.clone(), description)
    }

    pub fn context(&self) -> &Context {
        match self {
            DecodingError::TypeMismatch { context, .. }
            | DecodingError::ValueNotFound { context, .. }
            | DecodingError::KeyNotFound { context, .. }
            | DecodingError::DataCorrupted { context } => context,
        }
    }

    fn context_mut(&mut self) -> &mut Context {
        match self {
            DecodingError::TypeMismatch { context, .. }
            | DecodingError::ValueNotFound { context, .. }
            | DecodingError::KeyNotFound { context, .. }
            | DecodingError::DataCorrupted { context } => context,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.context().coding_path
    }

    /// Attaches the error that caused this one.
    pub fn with_underlying(mut self, error: impl StdError + Send + Sync + 'static) -> Self {
        self.context_mut().underlying_error = Some(Arc::new(error));
        self
    }

    /// Places `prefix` in front of the error's coding path.
    ///
    /// Used when an error produced by a detached decoder is surfaced through
    /// an enclosing document.
    pub fn prefixed_by(mut self, prefix: &CodingPath) -> Self {
        let context = self.context_mut();
        context.coding_path = context.coding_path.prefixed_by(prefix);
        self
    }

    /// Check if this error is a shape or primitive type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DecodingError::TypeMismatch { .. })
    }

    /// Check if this error reports a null where a value was required
    pub fn is_value_not_found(&self) -> bool {
        matches!(self, DecodingError::ValueNotFound { .. })
    }

    /// Check if this error reports a missing key
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, DecodingError::KeyNotFound { .. })
    }

    /// Check if this error reports corrupted data
    pub fn is_data_corrupted(&self) -> bool {
        matches!(self, DecodingError::DataCorrupted { .. })
    }

    /// Check if this error indicates something was absent (missing key or null)
    pub fn is_not_found(&self) -> bool {
        self.is_key_not_found() || self.is_value_not_found()
    }

    /// Get the key if this is a missing-key error
    pub fn key(&self) -> Option<&AnyKey> {
        match self {
            DecodingError::KeyNotFound { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Get the expected type name for mismatch and null errors
    pub fn expected(&self) -> Option<&'static str> {
        match self {
            DecodingError::TypeMismatch { expected, .. }
            | DecodingError::ValueNotFound { expected, .. } => Some(expected),
            _ => None,
        }
    }
}
