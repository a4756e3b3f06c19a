//! Verification vectors loaded from TOML files.
use serde::Deserialize;
use std::path::Path;

use crate::{AccountId, Error, LockBytes, MessageDigest, Result};

/// Inputs for a single verification and the expected outcome.
///
/// ```toml
/// message = "0x…"
/// lock = "0x…"
/// account = "T…"
/// expect_code = 0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationVector {
    /// Digest supplied by the host before personal hashing.
    pub message: MessageDigest,
    /// Compact signature and recovery id.
    pub lock: LockBytes,
    /// Expected account identifier, hex or TRON address.
    pub account: AccountId,
    /// Expected return code, zero for success.
    #[serde(default)]
    pub expect_code: i32,
}

impl VerificationVector {
    /// Load a verification vector file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let vector: VerificationVector = toml::from_str(&contents)?;
        Ok(vector)
    }
}
