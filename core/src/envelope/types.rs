//! src/envelope/types.rs
//!
//! Envelope error type.
//!
//! Design notes:
//! - The envelope is the only externally observable encrypted form, so its
//!   failures are the recoverable half of the error taxonomy: surfaced to
//!   the caller, input left unmodified, never retried.
//! - Malformed input must never decode successfully to a wrong-length
//!   buffer; both variants fail the whole decode.

use std::fmt;

/// Errors produced when decoding envelope text back into cipher bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Envelope length is not a multiple of 4, so it cannot be a padded
    /// base64 string.
    LengthNotMultipleOfFour { len: usize },

    /// The base64 engine rejected the input (invalid symbol, bad padding).
    Decode(base64::DecodeError),
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::LengthNotMultipleOfFour { len } => {
                write!(f, "envelope length {} is not a multiple of 4", len)
            }
            EnvelopeError::Decode(e) => write!(f, "invalid base64: {}", e),
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl From<base64::DecodeError> for EnvelopeError {
    fn from(e: base64::DecodeError) -> Self {
        EnvelopeError::Decode(e)
    }
}
