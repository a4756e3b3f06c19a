use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("vector {file} expected code {expected} but got {actual}")]
    VectorMismatch {
        file: PathBuf,
        expected: i32,
        actual: i32,
    },

    #[error(transparent)]
    Core(#[from] tron_sign_core::Error),

    #[error(transparent)]
    Lock(#[from] tron_sign_lock::Error),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
