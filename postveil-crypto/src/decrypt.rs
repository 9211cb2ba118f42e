//! Protected field decryption.

use crate::encoding::base64_decode;
use crate::error::{CryptoError, CryptoResult};
use crate::key::PrivateKeyHandle;

/// Decrypts one base64 ciphertext blob to its plaintext field.
///
/// The blob is decoded to the exact ciphertext byte sequence, decrypted
/// under OAEP/SHA-256 (no label), and the result decoded as UTF-8.
/// Malformed base64 is a [`CryptoError::Decoding`]; everything after
/// decoding (wrong length, wrong key, bad padding, non-text plaintext)
/// is the single [`CryptoError::Decryption`] signal.
pub fn decrypt_field(blob: &str, key: &PrivateKeyHandle) -> CryptoResult<String> {
    let ciphertext = base64_decode(blob)?;
    let plaintext = key.decrypt_raw(&ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::Decryption)
}
