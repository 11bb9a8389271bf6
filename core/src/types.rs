//! src/types.rs
//!
//! Key newtype and the unified codec error.
//!
//! Design notes:
//! - `Key` is validated at construction; an empty key is a configuration
//!   error, never a runtime branch inside the transform.
//! - `CrypterError` is the single error surface of the crate. Leaf modules
//!   keep their own error enums and convert via `From` so `?` works across
//!   the pipeline.
//! - `Debug` for `Key` redacts the key bytes; only the length is shown.

use std::fmt;

use thiserror::Error;

use crate::envelope::EnvelopeError;

/// Immutable, non-empty key bytes for the repeating-key XOR transform.
///
/// Contract and invariants:
/// - `len() >= 1`, enforced by [`Key::new`].
/// - Never mutated after construction; shared read-only by every call.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    /// Build a key from raw bytes, rejecting the empty sequence.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CrypterError::EmptyKey);
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty key cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({} bytes)", self.0.len())
    }
}

/// Unified codec error covering configuration, envelope, and text conversion.
#[derive(Debug, Error)]
pub enum CrypterError {
    /// Configuration error: the XOR key must hold at least one byte.
    #[error("key must not be empty")]
    EmptyKey,

    /// The envelope text could not be decoded back into cipher bytes.
    #[error("envelope decode error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Decrypted bytes were requested as text but are not valid UTF-8.
    /// Only reachable through the text convenience wrappers.
    #[error("decrypted data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Operation type character other than 'e' or 'd'.
    #[error("unknown operation type '{0}', expected 'e' or 'd'")]
    UnknownOperation(char),
}

/// Codec Result alias.
pub type Result<T> = std::result::Result<T, CrypterError>;
