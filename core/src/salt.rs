//! src/salt.rs
//!
//! Per-call salt generation, rendered as lowercase hex text.
//!
//! Design notes:
//! - The salt only varies ciphertext for identical plaintexts; it is
//!   concatenated as visible text, never mixed cryptographically, and is
//!   discarded unvalidated on decrypt. A seedable PRNG is therefore enough.
//! - The random source is an explicit object (`SaltSource`) so tests can
//!   seed it deterministically instead of reaching into process globals.
//! - The process-global convenience source is initialized at most once;
//!   concurrent first calls cannot double-seed.

use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::SALT_LEN_BYTES;

/// Seedable random source owned by the salt generator.
///
/// One instance per owner; the pipeline's shared instance lives behind
/// [`generate_salt`]. Construction is the only seeding point.
pub struct SaltSource {
    rng: StdRng,
}

impl SaltSource {
    /// Source seeded from OS entropy. Used by the process-global generator.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for tests. Same seed, same salt sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `length_bytes` random bytes and render them as `2 * length_bytes`
    /// lowercase hex characters.
    ///
    /// Contract:
    /// - `length_bytes >= 1`.
    /// - The fill is infallible, so the rendered string is never short.
    pub fn salt_hex(&mut self, length_bytes: usize) -> String {
        debug_assert!(length_bytes > 0, "salt length must be positive");
        let mut raw = vec![0u8; length_bytes];
        self.rng.fill_bytes(&mut raw);
        hex::encode(raw)
    }

    /// Standard-size salt: [`SALT_LEN_BYTES`] raw bytes, 32 hex characters.
    #[inline]
    pub fn standard_salt_hex(&mut self) -> String {
        self.salt_hex(SALT_LEN_BYTES)
    }
}

static PROCESS_SOURCE: OnceLock<Mutex<SaltSource>> = OnceLock::new();

/// Generate a fresh salt from the process-wide source.
///
/// The shared source is lazily seeded exactly once; later calls only lock
/// and draw. A poisoned lock is unrecoverable misuse, so it aborts rather
/// than handing out a short or repeated salt.
pub fn generate_salt(length_bytes: usize) -> String {
    let source = PROCESS_SOURCE.get_or_init(|| Mutex::new(SaltSource::from_entropy()));
    let mut guard = source.lock().expect("process salt source lock poisoned");
    guard.salt_hex(length_bytes)
}
