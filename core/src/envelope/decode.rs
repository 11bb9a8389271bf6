//! src/envelope/decode.rs
//!
//! Envelope decoding: base64 text back to raw cipher bytes.
//!
//! Design notes:
//! - The length gate runs before the engine so undersized or truncated
//!   input fails with the shape error every sibling implementation reports,
//!   not an engine-specific one.
//! - Symbol validation is strict: the standard engine rejects characters
//!   outside the alphabet and non-canonical padding. Accepting 0, 1, or 2
//!   trailing `=` characters (and shrinking the output accordingly) is the
//!   engine's normal padded behavior.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::envelope::types::EnvelopeError;

/// Decode envelope text into cipher bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)` of exactly `3 * (len / 4) - padding` bytes.
/// - `Err(EnvelopeError::LengthNotMultipleOfFour)` when the input length
///   is not a multiple of 4.
/// - `Err(EnvelopeError::Decode)` when the engine rejects a symbol or the
///   padding layout.
pub fn decode_envelope(envelope: &str) -> Result<Vec<u8>, EnvelopeError> {
    if envelope.len() % 4 != 0 {
        return Err(EnvelopeError::LengthNotMultipleOfFour {
            len: envelope.len(),
        });
    }
    Ok(STANDARD.decode(envelope)?)
}
