//! src/envelope/encode.rs
//!
//! Envelope encoding: raw cipher bytes to standard base64 text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode cipher bytes as an RFC 4648 standard-alphabet base64 string with
/// `=` padding. Output length is always a multiple of 4.
#[inline]
pub fn encode_envelope(cipher_bytes: &[u8]) -> String {
    STANDARD.encode(cipher_bytes)
}
