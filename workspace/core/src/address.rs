//! Account identifier derivation and the TRON address form.
use sha3::{Digest, Keccak256};

use crate::{
    AccountId, Error, Result, ACCOUNT_ID_SIZE, UNCOMPRESSED_KEY_SIZE,
};

/// SEC1 tag for an uncompressed public key.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Offset into the Keccak-256 hash of the public key body where
/// the account identifier starts; the identifier is the last
/// 20 bytes of the 32 byte hash.
pub const ACCOUNT_ID_OFFSET: usize = 12;

/// Network byte that precedes the identifier in a TRON address.
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Derive an account identifier from an uncompressed public key.
///
/// The tag byte is skipped, only the 64 bytes of coordinate data
/// are hashed.
pub fn derive_account_id(
    public_key: &[u8; UNCOMPRESSED_KEY_SIZE],
) -> AccountId {
    let hash = Keccak256::digest(&public_key[1..]);
    let mut id = [0u8; ACCOUNT_ID_SIZE];
    id.copy_from_slice(&hash[ACCOUNT_ID_OFFSET..]);
    AccountId::new(id)
}

/// Encode an identifier as `base58check(0x41 || id)`.
pub(crate) fn encode_tron_address(id: &AccountId) -> String {
    let mut payload = Vec::with_capacity(ACCOUNT_ID_SIZE + 1);
    payload.push(TRON_ADDRESS_PREFIX);
    payload.extend_from_slice(id.as_bytes());
    bs58::encode(payload).with_check().into_string()
}

/// Decode a base58check TRON address into an identifier.
pub(crate) fn decode_tron_address(address: &str) -> Result<AccountId> {
    let payload = bs58::decode(address).with_check(None).into_vec()?;
    if payload.len() != ACCOUNT_ID_SIZE + 1 {
        return Err(Error::InvalidLength {
            expected: ACCOUNT_ID_SIZE + 1,
            actual: payload.len(),
        });
    }
    if payload[0] != TRON_ADDRESS_PREFIX {
        return Err(Error::NetworkPrefix(payload[0]));
    }
    let mut id = [0u8; ACCOUNT_ID_SIZE];
    id.copy_from_slice(&payload[1..]);
    Ok(AccountId::new(id))
}
