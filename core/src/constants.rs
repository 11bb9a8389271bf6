/// Key bytes shared by the cross-language interop callers.
/// Every sibling implementation hard-codes the same value, so envelopes
/// produced through `process_string` stay decryptable everywhere.
pub const DEFAULT_STATIC_KEY: &str = "test_key";

/// Raw salt length drawn from the random source per encrypt call.
pub const SALT_LEN_BYTES: usize = 16;

/// Rendered salt length: 16 raw bytes become 32 lowercase hex characters.
/// This is the prefix stripped from every decrypted buffer.
pub const SALT_HEX_LEN: usize = SALT_LEN_BYTES * 2;

/// Operation type characters (mirrored by the non-Rust implementations).
pub mod op_chars {
    pub const ENCRYPT: char = 'e';
    pub const DECRYPT: char = 'd';
}
