#[cfg(test)]
mod tests {
    use crypter_core::pipeline::StringCrypter;
    use crypter_core::telemetry::{CodecCounters, CodecSnapshot};

    #[test]
    fn handle_counts_calls_and_bytes() {
        let mut crypter = StringCrypter::new("test_key").unwrap();
        let envelope = crypter.encrypt("count me");
        let plaintext = crypter.decrypt(&envelope).unwrap();

        let counters = crypter.counters();
        assert_eq!(counters.encrypt_calls, 1);
        assert_eq!(counters.decrypt_calls, 1);
        assert_eq!(counters.bytes_plaintext_in, "count me".len() as u64);
        assert_eq!(counters.bytes_envelope_out, envelope.len() as u64);
        assert_eq!(counters.bytes_envelope_in, envelope.len() as u64);
        assert_eq!(counters.bytes_plaintext_out, plaintext.len() as u64);
        assert_eq!(counters.decode_failures, 0);
        assert_eq!(counters.empty_results, 0);
    }

    #[test]
    fn decode_failures_are_counted() {
        let mut crypter = StringCrypter::new("test_key").unwrap();
        assert!(crypter.decrypt("???").is_err());
        assert_eq!(crypter.counters().decrypt_calls, 1);
        assert_eq!(crypter.counters().decode_failures, 1);
        assert_eq!(crypter.counters().bytes_plaintext_out, 0);
    }

    #[test]
    fn empty_results_are_counted() {
        let mut crypter = StringCrypter::new("test_key").unwrap();
        assert_eq!(crypter.decrypt("").unwrap(), b"");
        assert_eq!(crypter.counters().empty_results, 1);
        assert_eq!(crypter.counters().decode_failures, 0);
    }

    #[test]
    fn merge_and_add_assign_fold_counters() {
        let mut a = CodecCounters::default();
        a.add_encrypt(10, 60);
        let mut b = CodecCounters::default();
        b.add_decrypt(60, 10);
        b.add_decode_failure(3);

        let mut merged = a.clone();
        merged.merge(&b);
        assert_eq!(merged.encrypt_calls, 1);
        assert_eq!(merged.decrypt_calls, 2);
        assert_eq!(merged.decode_failures, 1);
        assert_eq!(merged.bytes_envelope_in, 63);

        let mut folded = a;
        folded += b;
        assert_eq!(folded, merged);
    }

    #[test]
    fn snapshot_ratio_reflects_envelope_overhead() {
        let mut crypter = StringCrypter::new("test_key").unwrap();
        crypter.encrypt("some plaintext worth expanding");
        let snapshot = crypter.snapshot();
        // 32 salt characters plus base64 growth: always an expansion.
        assert!(snapshot.expansion_ratio > 1.0);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn snapshot_of_idle_handle_is_sane() {
        let crypter = StringCrypter::new("test_key").unwrap();
        let snapshot = crypter.snapshot();
        assert_eq!(snapshot.expansion_ratio, 0.0);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn snapshot_serializes_and_round_trips() {
        let mut counters = CodecCounters::default();
        counters.add_encrypt(5, 48);
        counters.add_decrypt(48, 5);
        let snapshot = CodecSnapshot::from_counters(&counters);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"encrypt_calls\": 1"));
        let back: CodecSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
