use anyhow::Result;

use crate::test_utils::*;

use tron_sign_core::{AccountId, LockBytes, LOCK_SIZE};
use tron_sign_lock::{
    validate, ERROR_PUBKEY_HASH, ERROR_SECP_PARSE_SIGNATURE,
    ERROR_SECP_RECOVER_PUBKEY, SUCCESS,
};

#[test]
fn integration_single_bit_flips_fail() -> Result<()> {
    let lock: LockBytes = ZERO_DIGEST_LOCK.parse()?;
    let account: AccountId = ACCOUNT.parse()?;

    for index in 0..LOCK_SIZE {
        for bit in 0..8 {
            let mut corrupted = *lock.as_bytes();
            corrupted[index] ^= 1 << bit;

            let mut message = [0u8; 32];
            let code =
                validate(0, &mut message, &corrupted, account.as_bytes());
            assert_ne!(SUCCESS, code, "byte {} bit {}", index, bit);
            assert!(
                code == ERROR_SECP_PARSE_SIGNATURE
                    || code == ERROR_SECP_RECOVER_PUBKEY
                    || code == ERROR_PUBKEY_HASH,
                "unexpected code {} for byte {} bit {}",
                code,
                index,
                bit
            );
        }
    }
    Ok(())
}

#[test]
fn integration_recovery_id_high_bits_fail_parse() -> Result<()> {
    let lock: LockBytes = ZERO_DIGEST_LOCK.parse()?;
    let account: AccountId = ACCOUNT.parse()?;

    // Any bit above the two low bits pushes the id out of range
    for bit in 2..8 {
        let mut corrupted = *lock.as_bytes();
        corrupted[LOCK_SIZE - 1] ^= 1 << bit;

        let mut message = [0u8; 32];
        let code = validate(0, &mut message, &corrupted, account.as_bytes());
        assert_eq!(ERROR_SECP_PARSE_SIGNATURE, code);
    }
    Ok(())
}
