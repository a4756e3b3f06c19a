//! Fixed-size values passed through the verification pipeline.
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt, str::FromStr};

use crate::{
    address::{decode_tron_address, encode_tron_address},
    Error, Result, ACCOUNT_ID_SIZE, DIGEST_SIZE, LOCK_SIZE, SIGNATURE_SIZE,
};

/// Decode a hex string with an optional `0x` prefix into
/// a fixed-size array.
fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N]> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    bytes.as_slice().try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// A 32-byte message digest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct MessageDigest([u8; DIGEST_SIZE]);

impl MessageDigest {
    /// Create a digest from raw bytes.
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for MessageDigest {
    fn from(value: [u8; DIGEST_SIZE]) -> Self {
        Self(value)
    }
}

impl From<MessageDigest> for [u8; DIGEST_SIZE] {
    fn from(value: MessageDigest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for MessageDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for MessageDigest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(decode_fixed(s)?))
    }
}

/// Lock bytes taken from the witness, laid out as
/// `r(32) || s(32) || recovery_id(1)`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct LockBytes([u8; LOCK_SIZE]);

impl LockBytes {
    /// Create lock bytes from a raw buffer.
    pub const fn new(bytes: [u8; LOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create lock bytes from a compact signature and a recovery id.
    pub fn from_parts(
        signature: &[u8; SIGNATURE_SIZE],
        recovery_id: u8,
    ) -> Self {
        let mut bytes = [0u8; LOCK_SIZE];
        bytes[..SIGNATURE_SIZE].copy_from_slice(signature);
        bytes[SIGNATURE_SIZE] = recovery_id;
        Self(bytes)
    }

    /// The compact `r || s` signature.
    pub fn signature(&self) -> &[u8] {
        &self.0[..SIGNATURE_SIZE]
    }

    /// The trailing recovery id byte.
    pub fn recovery_id(&self) -> u8 {
        self.0[SIGNATURE_SIZE]
    }

    /// Borrow all the lock bytes.
    pub fn as_bytes(&self) -> &[u8; LOCK_SIZE] {
        &self.0
    }
}

impl From<[u8; LOCK_SIZE]> for LockBytes {
    fn from(value: [u8; LOCK_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for LockBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for LockBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for LockBytes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(decode_fixed(s)?))
    }
}

/// Account identifier; the low-order 20 bytes of the Keccak-256
/// hash of an uncompressed public key body.
///
/// Parses from hex (optionally `0x` prefixed) or from the TRON
/// base58check form that begins with `T`. Displays as hex, use
/// [AccountId::to_tron_address] for the base58check form.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct AccountId([u8; ACCOUNT_ID_SIZE]);

impl AccountId {
    /// Create an account identifier from raw bytes.
    pub const fn new(bytes: [u8; ACCOUNT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_SIZE] {
        &self.0
    }

    /// Encode as a TRON base58check address.
    pub fn to_tron_address(&self) -> String {
        encode_tron_address(self)
    }
}

impl From<[u8; ACCOUNT_ID_SIZE]> for AccountId {
    fn from(value: [u8; ACCOUNT_ID_SIZE]) -> Self {
        Self(value)
    }
}

impl From<AccountId> for [u8; ACCOUNT_ID_SIZE] {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('T') {
            decode_tron_address(s)
        } else {
            Ok(Self(decode_fixed(s)?))
        }
    }
}
