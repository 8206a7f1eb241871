//! Error types for cipher and analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Invalid key {0:?}: must contain at least one letter A-Z")]
    InvalidKey(String),

    #[error("Invalid argument `{name}` = {value} (must be at least 1)")]
    InvalidArgument { name: &'static str, value: usize },

    #[error("Ciphertext too short for key length analysis ({letters} letters)")]
    InsufficientText { letters: usize },
}

pub type Result<T> = std::result::Result<T, VigenereError>;

/// Rejects zero for arguments that count key positions.
pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(VigenereError::InvalidArgument { name, value })
    } else {
        Ok(())
    }
}
