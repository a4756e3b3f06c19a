use anyhow::Result;
use k256::ecdsa::Signature;

use crate::test_utils::*;

use tron_sign_core::{LockBytes, SIGNATURE_SIZE};
use tron_sign_lock::{
    validate, verify, Error, ERROR_SECP_PARSE_SIGNATURE, SUCCESS,
};

#[test]
fn integration_recovery_id_out_of_range() -> Result<()> {
    let key = random_key();
    let digest = random_digest();
    let lock = sign_personal(&key, &digest)?;
    let account = account_of(&key)?;

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature.copy_from_slice(lock.signature());

    for recovery_id in 4..=u8::MAX {
        let lock = LockBytes::from_parts(&signature, recovery_id);
        let result = verify(&digest, &lock, &account);
        assert!(matches!(result, Err(Error::SignatureParse)));

        let mut message: [u8; 32] = digest.into();
        let code =
            validate(0, &mut message, lock.as_bytes(), account.as_bytes());
        assert_eq!(ERROR_SECP_PARSE_SIGNATURE, code);
    }
    Ok(())
}

#[test]
fn integration_flipped_parity_fails() -> Result<()> {
    let key = random_key();
    let digest = random_digest();
    let lock = sign_personal(&key, &digest)?;
    let account = account_of(&key)?;

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature.copy_from_slice(lock.signature());
    let flipped = LockBytes::from_parts(&signature, lock.recovery_id() ^ 1);

    let result = verify(&digest, &flipped, &account);
    assert!(matches!(
        result,
        Err(Error::IdentifierMismatch { .. }) | Err(Error::Recovery)
    ));
    Ok(())
}

#[test]
fn integration_high_s_signature_accepted() -> Result<()> {
    let key = random_key();
    let digest = random_digest();
    let lock = sign_personal(&key, &digest)?;
    let account = account_of(&key)?;

    // (r, n - s, v ^ 1) is the same signature with the other parity
    let signature = Signature::from_slice(lock.signature())?;
    let (r, s) = signature.split_scalars();
    let high = Signature::from_scalars(r, -s)?;
    assert!(high.normalize_s().is_some());

    let high: [u8; SIGNATURE_SIZE] = high.to_bytes().as_slice().try_into()?;
    let malleated = LockBytes::from_parts(&high, lock.recovery_id() ^ 1);

    assert_eq!(account, verify(&digest, &malleated, &account)?);

    let mut message: [u8; 32] = digest.into();
    let code =
        validate(0, &mut message, malleated.as_bytes(), account.as_bytes());
    assert_eq!(SUCCESS, code);
    Ok(())
}
