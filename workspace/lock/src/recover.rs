//! Public key recovery from compact recoverable signatures.
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use tron_sign_core::{
    derive_account_id, AccountId, LockBytes, MessageDigest,
    UNCOMPRESSED_KEY_SIZE, UNCOMPRESSED_TAG,
};

use crate::{Error, Result};

/// Public key recovered from a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredPublicKey(VerifyingKey);

impl RecoveredPublicKey {
    /// Parse a SEC1 encoded public key, compressed or uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|_| Error::PublicKey)?;
        Ok(Self(key))
    }

    /// Serialize to the 65 byte uncompressed form `0x04 || X || Y`.
    pub fn serialize_uncompressed(
        &self,
    ) -> Result<[u8; UNCOMPRESSED_KEY_SIZE]> {
        let point = self.0.to_encoded_point(false);
        let bytes = point.as_bytes();
        if bytes.len() != UNCOMPRESSED_KEY_SIZE || bytes[0] != UNCOMPRESSED_TAG
        {
            return Err(Error::Serialize);
        }
        let mut public_key = [0u8; UNCOMPRESSED_KEY_SIZE];
        public_key.copy_from_slice(bytes);
        Ok(public_key)
    }

    /// Derive the account identifier for this key.
    pub fn account_id(&self) -> Result<AccountId> {
        let public_key = self.serialize_uncompressed()?;
        tracing::debug!(
            public_key = %hex::encode(public_key),
            "serialized public key"
        );
        Ok(derive_account_id(&public_key))
    }

    /// The underlying verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for RecoveredPublicKey {
    fn from(value: VerifyingKey) -> Self {
        Self(value)
    }
}

/// Recover the public key that signed `message`.
///
/// The message is treated as a prehashed digest, it is not hashed
/// again. The recovery id must be in the range `0..=3`.
///
/// High-S signatures are accepted: `s` is normalized and the y parity
/// of the recovery id flipped, which recovers the same key.
pub fn recover(
    message: &MessageDigest,
    lock: &LockBytes,
) -> Result<RecoveredPublicKey> {
    tracing::debug!(recovery_id = lock.recovery_id(), "parse signature");

    let mut recovery_id = RecoveryId::from_byte(lock.recovery_id())
        .ok_or(Error::SignatureParse)?;
    let mut signature =
        Signature::from_slice(lock.signature()).map_err(|e| {
            tracing::debug!(error = %e, "invalid signature scalars");
            Error::SignatureParse
        })?;

    if let Some(normalized) = signature.normalize_s() {
        tracing::debug!("normalize high s");
        signature = normalized;
        recovery_id = RecoveryId::new(
            !recovery_id.is_y_odd(),
            recovery_id.is_x_reduced(),
        );
    }

    let key = VerifyingKey::recover_from_prehash(
        message.as_bytes(),
        &signature,
        recovery_id,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "recovery failed");
        Error::Recovery
    })?;

    Ok(RecoveredPublicKey(key))
}
