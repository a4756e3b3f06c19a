use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected {expected} bytes but got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("address network prefix {0:#04x} is not a TRON address")]
    NetworkPrefix(u8),

    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Base58(#[from] bs58::decode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
