//! Personal message hashing.
use sha3::{Digest, Keccak256};

use crate::{MessageDigest, DIGEST_SIZE};

/// Prefix for TRON personal messages: `0x19` followed by
/// `TRON Signed Message:\n32`, the trailing `32` being the
/// length of the signed digest.
pub const TRON_MESSAGE_PREFIX: &[u8; 24] = b"\x19TRON Signed Message:\n32";

/// Byte appended after the digest for compatibility with the
/// wallet signer. It has no meaning to the verifier and must
/// not be changed.
pub const COMPATIBILITY_SUFFIX: u8 = 0x04;

/// Compute the digest a wallet actually signs for `digest`.
///
/// `keccak256(TRON_MESSAGE_PREFIX || digest || COMPATIBILITY_SUFFIX)`
pub fn personal_hash(digest: &MessageDigest) -> MessageDigest {
    let mut hasher = Keccak256::new();
    hasher.update(TRON_MESSAGE_PREFIX);
    hasher.update(digest.as_bytes());
    hasher.update([COMPATIBILITY_SUFFIX]);
    let mut hash = [0u8; DIGEST_SIZE];
    hash.copy_from_slice(&hasher.finalize());
    MessageDigest::new(hash)
}
