use std::io;
use thiserror::Error;

/// Failures reading or writing persisted session tokens
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Token storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Token storage is corrupt: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode token storage: {0}")]
    Serialize(#[from] toml::ser::Error),
}
