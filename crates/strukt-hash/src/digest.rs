//! SHA-256 helpers shared by the hash and canonical-form modules.
//!
//! SHA-256 is used here purely as a deterministic mixing primitive; none of
//! the outputs carry a security claim.

use sha2::{Digest, Sha256};

/// First eight digest bytes of the UTF-8 text, little-endian.
pub(crate) fn text_word(s: &str) -> u64 {
    word_from_digest(&Sha256::digest(s.as_bytes()))
}

/// Fold words through SHA-256, eight little-endian bytes each, and take the
/// first eight digest bytes little-endian.
pub(crate) fn fold_words(words: &[u64]) -> u64 {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.to_le_bytes());
    }
    word_from_digest(&hasher.finalize())
}

/// Lowercase hex SHA-256 of raw bytes.
pub(crate) fn hex_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn word_from_digest(digest: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(word)
}
