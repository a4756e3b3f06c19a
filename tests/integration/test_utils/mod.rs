use anyhow::Result;
use k256::ecdsa::SigningKey;

use tron_sign_core::{
    derive_account_id, personal_hash, AccountId, LockBytes, MessageDigest,
    SIGNATURE_SIZE, UNCOMPRESSED_KEY_SIZE,
};

/// Private key used by the fixed vectors.
pub const PRIVATE_KEY: &str =
    "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Account identifier for `PRIVATE_KEY`.
pub const ACCOUNT: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";

/// TRON address for `PRIVATE_KEY`.
pub const TRON_ACCOUNT: &str = "TE2H9hWjzYdwzDFRJfx9BFhr4MmjH1CHaz";

/// Signature by `PRIVATE_KEY` over the personal hash of the
/// all zero digest.
pub const ZERO_DIGEST_LOCK: &str = "0xbb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb59ceee020d37cfd2b86a4cd9c83f328ce2274d9788074582efa9a35c28f76291bfbc2490d101";

pub fn known_key() -> Result<SigningKey> {
    Ok(SigningKey::from_slice(&hex::decode(PRIVATE_KEY)?)?)
}

pub fn random_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// Sign a 32 byte prehash and pack the lock bytes.
pub fn sign_prehash(
    key: &SigningKey,
    prehash: &[u8; 32],
) -> Result<LockBytes> {
    let (signature, recovery_id) = key.sign_prehash_recoverable(prehash)?;
    let signature: [u8; SIGNATURE_SIZE] =
        signature.to_bytes().as_slice().try_into()?;
    Ok(LockBytes::from_parts(&signature, recovery_id.to_byte()))
}

/// Sign the personal hash of a digest the way a wallet does.
pub fn sign_personal(
    key: &SigningKey,
    digest: &MessageDigest,
) -> Result<LockBytes> {
    sign_prehash(key, personal_hash(digest).as_bytes())
}

/// Account identifier for a signing key.
pub fn account_of(key: &SigningKey) -> Result<AccountId> {
    let point = key.verifying_key().to_encoded_point(false);
    let public_key: [u8; UNCOMPRESSED_KEY_SIZE] =
        point.as_bytes().try_into()?;
    Ok(derive_account_id(&public_key))
}

pub fn random_digest() -> MessageDigest {
    MessageDigest::new(rand::random())
}
