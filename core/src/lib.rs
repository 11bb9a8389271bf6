//! crypter-core
//!
//! Pure Rust string obfuscation codec: per-call hex salt, repeating-key XOR,
//! standard base64 envelope. Wire-compatible with the sibling implementations
//! in other languages that share the same key bytes.
//! No I/O, no async, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec leaves
pub mod envelope;
pub mod salt;
pub mod xor;

// Orchestration
pub mod pipeline;

// Observability
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::{DEFAULT_STATIC_KEY, SALT_HEX_LEN, SALT_LEN_BYTES};
    pub use crate::envelope::{decode_envelope, encode_envelope, EnvelopeError};
    pub use crate::pipeline::{
        decrypt, encrypt, encrypt_with_source, process_string, Op, StringCrypter,
    };
    pub use crate::salt::{generate_salt, SaltSource};
    pub use crate::telemetry::{CodecCounters, CodecSnapshot};
    pub use crate::types::{CrypterError, Key, Result};
    pub use crate::xor::{xor_bytes, xor_in_place};
}
