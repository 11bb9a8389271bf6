//! telemetry/counters.rs
//! Mutable counters used while a codec handle processes calls.
//!
//! Summary: collects call counts and byte counts for encrypt/decrypt.
//! Converted into an immutable CodecSnapshot on demand.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected per codec handle.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub encrypt_calls: u64,
    pub decrypt_calls: u64,
    pub bytes_plaintext_in: u64,
    pub bytes_envelope_out: u64,
    pub bytes_envelope_in: u64,
    pub bytes_plaintext_out: u64,
    /// Decrypt attempts rejected by the envelope decoder.
    pub decode_failures: u64,
    /// Decrypt calls that produced the defined empty result (decoded buffer
    /// no longer than the salt prefix).
    pub empty_results: u64,
}

impl CodecCounters {
    /// Record one encrypt call.
    ///
    /// - `plaintext_len`: input length before salting
    /// - `envelope_len`: produced envelope text length
    pub fn add_encrypt(&mut self, plaintext_len: usize, envelope_len: usize) {
        self.encrypt_calls += 1;
        self.bytes_plaintext_in += plaintext_len as u64;
        self.bytes_envelope_out += envelope_len as u64;
    }

    /// Record one successful decrypt call.
    ///
    /// - `envelope_len`: consumed envelope text length
    /// - `plaintext_len`: recovered plaintext length after salt stripping
    pub fn add_decrypt(&mut self, envelope_len: usize, plaintext_len: usize) {
        self.decrypt_calls += 1;
        self.bytes_envelope_in += envelope_len as u64;
        self.bytes_plaintext_out += plaintext_len as u64;
    }

    /// Record one decrypt call rejected by the envelope decoder.
    pub fn add_decode_failure(&mut self, envelope_len: usize) {
        self.decrypt_calls += 1;
        self.decode_failures += 1;
        self.bytes_envelope_in += envelope_len as u64;
    }

    /// Mark a decrypt call that yielded the defined empty result.
    pub fn add_empty_result(&mut self) {
        self.empty_results += 1;
    }

    /// Fold another handle's counters into this one.
    pub fn merge(&mut self, other: &CodecCounters) {
        self.encrypt_calls += other.encrypt_calls;
        self.decrypt_calls += other.decrypt_calls;
        self.bytes_plaintext_in += other.bytes_plaintext_in;
        self.bytes_envelope_out += other.bytes_envelope_out;
        self.bytes_envelope_in += other.bytes_envelope_in;
        self.bytes_plaintext_out += other.bytes_plaintext_out;
        self.decode_failures += other.decode_failures;
        self.empty_results += other.empty_results;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
