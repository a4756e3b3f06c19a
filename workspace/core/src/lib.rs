//! Fixed-size types, message hashing and account identifier
//! derivation for TRON personal message signatures.
mod address;
mod error;
mod message;
mod types;
mod vector;

pub use address::{
    derive_account_id, ACCOUNT_ID_OFFSET, TRON_ADDRESS_PREFIX,
    UNCOMPRESSED_TAG,
};
pub use error::Error;
pub use message::{personal_hash, COMPATIBILITY_SUFFIX, TRON_MESSAGE_PREFIX};
pub use types::{AccountId, LockBytes, MessageDigest};
pub use vector::VerificationVector;

/// Size of a message digest.
pub const DIGEST_SIZE: usize = 32;

/// Size of the `r || s` portion of a compact signature.
pub const SIGNATURE_SIZE: usize = 64;

/// Size of the lock bytes, a compact signature followed by
/// the recovery id.
pub const LOCK_SIZE: usize = SIGNATURE_SIZE + 1;

/// Size of an account identifier.
pub const ACCOUNT_ID_SIZE: usize = 20;

/// Size of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_KEY_SIZE: usize = 65;

/// Result type for the core library.
pub type Result<T> = std::result::Result<T, Error>;
