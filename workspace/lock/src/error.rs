use thiserror::Error;
use tron_sign_core::AccountId;

/// Return code for a successful verification.
pub const SUCCESS: i32 = 0;

/// Public key recovery failed.
pub const ERROR_SECP_RECOVER_PUBKEY: i32 = -11;

/// Public key bytes could not be parsed.
pub const ERROR_SECP_PARSE_PUBKEY: i32 = -13;

/// Signature bytes could not be parsed.
pub const ERROR_SECP_PARSE_SIGNATURE: i32 = -14;

/// Public key could not be serialized.
pub const ERROR_SECP_SERIALIZE_PUBKEY: i32 = -15;

/// Derived account identifier does not match.
pub const ERROR_PUBKEY_HASH: i32 = -31;

/// Errors generated by the verification pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse recoverable signature")]
    SignatureParse,

    #[error("failed to recover public key")]
    Recovery,

    #[error("failed to serialize public key")]
    Serialize,

    #[error("failed to parse public key")]
    PublicKey,

    #[error("account {derived} does not match expected {expected}")]
    IdentifierMismatch {
        expected: AccountId,
        derived: AccountId,
    },
}

impl Error {
    /// Code returned to the host for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::SignatureParse => ERROR_SECP_PARSE_SIGNATURE,
            Self::Recovery => ERROR_SECP_RECOVER_PUBKEY,
            Self::Serialize => ERROR_SECP_SERIALIZE_PUBKEY,
            Self::PublicKey => ERROR_SECP_PARSE_PUBKEY,
            Self::IdentifierMismatch { .. } => ERROR_PUBKEY_HASH,
        }
    }
}
