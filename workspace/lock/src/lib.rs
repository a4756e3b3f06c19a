//! Lock predicate that proves a transaction digest was signed with
//! a TRON personal message signature by the holder of an account
//! identifier.
//!
//! The pipeline is linear, each stage returns on the first failure:
//!
//! 1. [personal_hash] the host digest,
//! 2. [recover] the public key from the lock bytes,
//! 3. derive the [AccountId] of the recovered key,
//! 4. [compare] against the expected identifier.
use tron_sign_core::{
    personal_hash, AccountId, LockBytes, MessageDigest, ACCOUNT_ID_SIZE,
    DIGEST_SIZE, LOCK_SIZE,
};

mod error;
mod recover;

pub use error::{
    Error, ERROR_PUBKEY_HASH, ERROR_SECP_PARSE_PUBKEY,
    ERROR_SECP_PARSE_SIGNATURE, ERROR_SECP_RECOVER_PUBKEY,
    ERROR_SECP_SERIALIZE_PUBKEY, SUCCESS,
};
pub use recover::{recover, RecoveredPublicKey};

/// Result type for the lock library.
pub type Result<T> = std::result::Result<T, Error>;

/// Compare a derived account identifier with the expected one.
pub fn compare(derived: &AccountId, expected: &AccountId) -> Result<()> {
    if derived != expected {
        return Err(Error::IdentifierMismatch {
            expected: *expected,
            derived: *derived,
        });
    }
    Ok(())
}

/// Verify lock bytes against a message that has already been
/// through [personal_hash].
pub fn verify_prehashed(
    hashed: &MessageDigest,
    lock: &LockBytes,
    expected: &AccountId,
) -> Result<AccountId> {
    let public_key = recover(hashed, lock)?;
    let derived = public_key.account_id()?;
    tracing::debug!(
        derived = %derived,
        expected = %expected,
        "compare account"
    );
    compare(&derived, expected)?;
    Ok(derived)
}

/// Verify that `lock` is a personal message signature of `message`
/// made by the holder of `expected`.
pub fn verify(
    message: &MessageDigest,
    lock: &LockBytes,
    expected: &AccountId,
) -> Result<AccountId> {
    let hashed = personal_hash(message);
    tracing::debug!(
        message = %message,
        hashed = %hashed,
        lock = %lock,
        "verify personal signature"
    );
    verify_prehashed(&hashed, lock, expected)
}

/// Entry point for the host.
///
/// The `message` buffer is overwritten with the personal hash before
/// recovery. Returns [SUCCESS] or the code of the failed stage.
pub fn validate(
    kind: i32,
    message: &mut [u8; DIGEST_SIZE],
    lock_bytes: &[u8; LOCK_SIZE],
    account_identifier: &[u8; ACCOUNT_ID_SIZE],
) -> i32 {
    tracing::debug!(kind, "validate");

    let hashed = personal_hash(&MessageDigest::new(*message));
    *message = hashed.into();

    let lock = LockBytes::new(*lock_bytes);
    let expected = AccountId::new(*account_identifier);
    match verify_prehashed(&hashed, &lock, &expected) {
        Ok(_) => SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), error = %e, "validate failed");
            e.code()
        }
    }
}
