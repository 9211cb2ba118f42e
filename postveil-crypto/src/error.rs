//! Crypto layer error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the field encryption layer.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("key import failed: {0}")]
    KeyImport(String),

    /// Deliberately cause-free: wrong key, corrupted ciphertext, and
    /// padding failures must be indistinguishable to a caller, so this
    /// variant carries no detail (padding-oracle hygiene).
    #[error("decryption failed")]
    Decryption,

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("plaintext too long for key: {actual} bytes, limit {max}")]
    PlaintextTooLong { max: usize, actual: usize },
}
