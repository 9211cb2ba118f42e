//! Render pipeline error types.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while decrypting and rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("crypto error: {0}")]
    Crypto(#[from] postveil_crypto::CryptoError),
}
