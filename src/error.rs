//! Error types for the cryptology library.

use thiserror::Error;

/// Errors produced by the cipher operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A required input is empty after normalisation, or an option
    /// value is unsupported for the chosen alphabet.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A key does not satisfy the cipher's requirements.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Ciphertext cannot be parsed back into plaintext.
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
