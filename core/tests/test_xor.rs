#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crypter_core::types::Key;
    use crypter_core::xor::{xor_bytes, xor_in_place};

    #[test]
    fn known_vector_single_byte_key() {
        let key = Key::new(vec![0xFF]).unwrap();
        let out = xor_bytes(&[0x00, 0x0F, 0xF0, 0xFF], &key);
        assert_eq!(out, vec![0xFF, 0xF0, 0x0F, 0x00]);
    }

    #[test]
    fn key_wraps_over_input() {
        let key = Key::new(vec![0xFF, 0x00]).unwrap();
        let out = xor_bytes(&[1, 2, 3, 4, 5], &key);
        // key repeats FF 00 FF 00 FF
        assert_eq!(out, vec![0xFE, 2, 0xFC, 4, 0xFA]);
    }

    #[test]
    fn output_length_matches_input() {
        let key = Key::new("abc").unwrap();
        for len in [0usize, 1, 2, 3, 7, 64] {
            let input = vec![0xA5u8; len];
            assert_eq!(xor_bytes(&input, &key).len(), len);
        }
    }

    #[test]
    fn in_place_matches_allocating_variant() {
        let key = Key::new("wrap").unwrap();
        let input = b"some bytes worth transforming".to_vec();
        let expected = xor_bytes(&input, &key);
        let mut buf = input;
        xor_in_place(&mut buf, &key);
        assert_eq!(buf, expected);
    }

    #[test]
    fn involution_fixed_vector() {
        let key = Key::new("test_key").unwrap();
        let input = b"Hello, World!".to_vec();
        let once = xor_bytes(&input, &key);
        assert_ne!(once, input);
        assert_eq!(xor_bytes(&once, &key), input);
    }

    // Property-based coverage: the transform is its own inverse for
    // arbitrary buffers and non-empty keys.
    proptest! {
        #[test]
        fn prop_involution(
            input in proptest::collection::vec(any::<u8>(), 0..256),
            key_bytes in proptest::collection::vec(any::<u8>(), 1..16),
        ) {
            let key = Key::new(key_bytes).unwrap();
            let twice = xor_bytes(&xor_bytes(&input, &key), &key);
            prop_assert_eq!(twice, input);
        }

        #[test]
        fn prop_output_length_preserved(
            input in proptest::collection::vec(any::<u8>(), 0..256),
            key_bytes in proptest::collection::vec(any::<u8>(), 1..16),
        ) {
            let key = Key::new(key_bytes).unwrap();
            prop_assert_eq!(xor_bytes(&input, &key).len(), input.len());
        }
    }
}
