//! telemetry/snapshot.rs
//! Immutable telemetry snapshot derived from codec counters.
//!
//! Design notes:
//! - The snapshot never mutates; derive it once per report.
//! - `expansion_ratio` captures the fixed envelope overhead (32 salt
//!   characters plus base64 growth) relative to plaintext volume.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;

/// Immutable view of a handle's processed volume and derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub encrypt_calls: u64,
    pub decrypt_calls: u64,
    pub bytes_plaintext_in: u64,
    pub bytes_envelope_out: u64,
    pub bytes_envelope_in: u64,
    pub bytes_plaintext_out: u64,
    pub decode_failures: u64,
    pub empty_results: u64,
    /// Envelope bytes produced per plaintext byte consumed; 0.0 until the
    /// first non-empty encrypt.
    pub expansion_ratio: f64,
}

impl CodecSnapshot {
    pub fn from_counters(counters: &CodecCounters) -> Self {
        let expansion_ratio = if counters.bytes_plaintext_in > 0 {
            counters.bytes_envelope_out as f64 / counters.bytes_plaintext_in as f64
        } else {
            0.0
        };

        Self {
            encrypt_calls: counters.encrypt_calls,
            decrypt_calls: counters.decrypt_calls,
            bytes_plaintext_in: counters.bytes_plaintext_in,
            bytes_envelope_out: counters.bytes_envelope_out,
            bytes_envelope_in: counters.bytes_envelope_in,
            bytes_plaintext_out: counters.bytes_plaintext_out,
            decode_failures: counters.decode_failures,
            empty_results: counters.empty_results,
            expansion_ratio,
        }
    }

    /// Validate internal invariants:
    /// - decode failures and empty results never exceed decrypt calls
    /// - the envelope always grows relative to its plaintext
    pub fn sanity_check(&self) -> bool {
        self.decode_failures <= self.decrypt_calls
            && self.empty_results <= self.decrypt_calls
            && (self.bytes_plaintext_in == 0 || self.expansion_ratio >= 1.0)
    }

    /// Serialize for reporting.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
