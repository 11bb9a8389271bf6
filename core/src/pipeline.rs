//! src/pipeline.rs
//!
//! The cipher pipeline and its caller-facing wrappers.
//!
//! Design notes:
//! - encrypt: salt -> concatenate -> XOR -> base64; decrypt runs the stages
//!   in reverse and strips the 32-character salt prefix.
//! - Each stage owns its buffer exclusively. The salted buffer is XORed in
//!   place and handed to the envelope encoder; nothing is aliased across
//!   calls.
//! - `StringCrypter` and `process_string` are thin wrappers over the free
//!   functions. No codec logic lives in the wrappers.

use crate::constants::{op_chars, DEFAULT_STATIC_KEY, SALT_HEX_LEN, SALT_LEN_BYTES};
use crate::envelope::{decode_envelope, encode_envelope};
use crate::salt::{generate_salt, SaltSource};
use crate::telemetry::{CodecCounters, CodecSnapshot};
use crate::types::{CrypterError, Key, Result};
use crate::xor::xor_in_place;

/// Encrypt plaintext bytes into envelope text.
///
/// Stages:
/// 1. draw a fresh 32-character hex salt,
/// 2. build the salted buffer (salt text ++ plaintext, no separator),
/// 3. XOR in place with the repeating key,
/// 4. wrap in the base64 envelope.
pub fn encrypt(key: &Key, plaintext: &[u8]) -> String {
    let salt_hex = generate_salt(SALT_LEN_BYTES);
    encrypt_salted(key, &salt_hex, plaintext)
}

/// Encrypt with an explicit salt source instead of the process-global one.
/// A seeded source makes the envelope reproducible in tests.
pub fn encrypt_with_source(key: &Key, plaintext: &[u8], source: &mut SaltSource) -> String {
    let salt_hex = source.salt_hex(SALT_LEN_BYTES);
    encrypt_salted(key, &salt_hex, plaintext)
}

fn encrypt_salted(key: &Key, salt_hex: &str, plaintext: &[u8]) -> String {
    debug_assert_eq!(salt_hex.len(), SALT_HEX_LEN, "salt must render to 32 hex chars");
    let mut salted = Vec::with_capacity(salt_hex.len() + plaintext.len());
    salted.extend_from_slice(salt_hex.as_bytes());
    salted.extend_from_slice(plaintext);
    xor_in_place(&mut salted, key);
    encode_envelope(&salted)
}

/// Decrypt envelope text back into plaintext bytes.
///
/// # Returns
/// - `Ok(plaintext)`: the bytes after the 32-character salt prefix,
///   verbatim. The salt itself is discarded and never validated.
/// - `Ok(vec![])` when the decoded buffer is 32 bytes or shorter: there is
///   no plaintext after the salt. Sibling implementations treat undersized
///   input the same way, so this stays a result, not an error.
/// - `Err(CrypterError::Envelope)` when the envelope text is malformed.
pub fn decrypt(key: &Key, envelope: &str) -> Result<Vec<u8>> {
    let mut salted = decode_envelope(envelope)?;
    xor_in_place(&mut salted, key);
    if salted.len() <= SALT_HEX_LEN {
        return Ok(Vec::new());
    }
    Ok(salted.split_off(SALT_HEX_LEN))
}

/// Codec operation selected by the legacy type character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Encrypt,
    Decrypt,
}

impl Op {
    /// Parse the 'e' / 'd' type character used by every sibling caller.
    pub fn from_type_char(c: char) -> Result<Self> {
        match c {
            op_chars::ENCRYPT => Ok(Op::Encrypt),
            op_chars::DECRYPT => Ok(Op::Decrypt),
            other => Err(CrypterError::UnknownOperation(other)),
        }
    }

    pub fn type_char(self) -> char {
        match self {
            Op::Encrypt => op_chars::ENCRYPT,
            Op::Decrypt => op_chars::DECRYPT,
        }
    }
}

/// Static entry point matching the sibling implementations' `process_string`:
/// fixed interop key, type character, text in, text out.
pub fn process_string(op_type: char, data: &str) -> Result<String> {
    let key = Key::new(DEFAULT_STATIC_KEY)?;
    match Op::from_type_char(op_type)? {
        Op::Encrypt => Ok(encrypt(&key, data.as_bytes())),
        Op::Decrypt => {
            let plaintext = decrypt(&key, data)?;
            Ok(String::from_utf8(plaintext)?)
        }
    }
}

/// Key-bound codec handle with call telemetry.
///
/// Owns its key for the lifetime of the handle and counts every call into
/// [`CodecCounters`]; [`StringCrypter::snapshot`] freezes the counters into
/// an immutable, serializable view.
#[derive(Debug)]
pub struct StringCrypter {
    key: Key,
    counters: CodecCounters,
}

impl StringCrypter {
    /// Bind a key to a new handle. Empty keys are rejected here so no
    /// handle can exist in a misconfigured state.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::from_key(Key::new(key)?))
    }

    /// Wrap an already-validated key.
    pub fn from_key(key: Key) -> Self {
        Self {
            key,
            counters: CodecCounters::default(),
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypt text. See [`encrypt`].
    pub fn encrypt(&mut self, plaintext: &str) -> String {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    /// Encrypt arbitrary bytes; embedded NUL bytes survive the round trip.
    pub fn encrypt_bytes(&mut self, plaintext: &[u8]) -> String {
        let envelope = encrypt(&self.key, plaintext);
        self.counters.add_encrypt(plaintext.len(), envelope.len());
        envelope
    }

    /// Decrypt envelope text into plaintext bytes. See [`decrypt`].
    pub fn decrypt(&mut self, envelope: &str) -> Result<Vec<u8>> {
        match decrypt(&self.key, envelope) {
            Ok(plaintext) => {
                self.counters.add_decrypt(envelope.len(), plaintext.len());
                if plaintext.is_empty() {
                    self.counters.add_empty_result();
                }
                Ok(plaintext)
            }
            Err(e) => {
                self.counters.add_decode_failure(envelope.len());
                Err(e)
            }
        }
    }

    /// Decrypt and convert to text. Fails with `InvalidUtf8` when the
    /// plaintext bytes are not UTF-8; the byte-level [`StringCrypter::decrypt`]
    /// never does.
    pub fn decrypt_text(&mut self, envelope: &str) -> Result<String> {
        Ok(String::from_utf8(self.decrypt(envelope)?)?)
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    /// Immutable telemetry view of everything this handle has processed.
    pub fn snapshot(&self) -> CodecSnapshot {
        CodecSnapshot::from_counters(&self.counters)
    }
}
