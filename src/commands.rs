//! Commands for the `tron-sign` executable.
use serde::Serialize;
use std::path::PathBuf;

use tron_sign_core::{
    personal_hash, AccountId, LockBytes, MessageDigest, VerificationVector,
};
use tron_sign_lock::{RecoveredPublicKey, SUCCESS};

use crate::{Error, Result};

/// Account identifier in both textual forms.
#[derive(Debug, Serialize)]
pub struct AccountReport {
    /// Hex encoded identifier.
    pub hex: AccountId,
    /// TRON base58check address.
    pub tron: String,
}

impl From<AccountId> for AccountReport {
    fn from(value: AccountId) -> Self {
        Self {
            tron: value.to_tron_address(),
            hex: value,
        }
    }
}

/// Outcome of a successful verification.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// Account that signed the message.
    pub account: AccountReport,
    /// Digest that was actually signed.
    pub personal_hash: MessageDigest,
}

/// Outcome of running a verification vector.
#[derive(Debug, Serialize)]
pub struct VectorReport {
    /// Vector file.
    pub file: PathBuf,
    /// Code returned by the verification.
    pub code: i32,
}

/// Verify a personal message signature.
pub fn verify(
    message: MessageDigest,
    lock: LockBytes,
    account: AccountId,
) -> Result<VerifyReport> {
    let account = tron_sign_lock::verify(&message, &lock, &account)?;
    Ok(VerifyReport {
        account: account.into(),
        personal_hash: personal_hash(&message),
    })
}

/// Run a verification vector file and check the expected code.
pub fn vector(file: PathBuf) -> Result<VectorReport> {
    let vector = VerificationVector::load(&file)?;
    let code = match tron_sign_lock::verify(
        &vector.message,
        &vector.lock,
        &vector.account,
    ) {
        Ok(_) => SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e);
            e.code()
        }
    };

    if code != vector.expect_code {
        return Err(Error::VectorMismatch {
            file,
            expected: vector.expect_code,
            actual: code,
        });
    }

    Ok(VectorReport { file, code })
}

/// Derive the account identifier for a hex encoded SEC1 public key.
pub fn address(public_key: &str) -> Result<AccountReport> {
    let public_key = public_key.strip_prefix("0x").unwrap_or(public_key);
    let bytes = hex::decode(public_key)?;
    let key = RecoveredPublicKey::from_sec1_bytes(&bytes)?;
    Ok(key.account_id()?.into())
}
