//! Publisher side: encrypting post fields at build time.
//!
//! The generator encrypts the rendered body HTML, the title, and the
//! optional subtitle under the reader's public key, then embeds the
//! resulting base64 blobs in the published page. The in-page decryption
//! gate reverses this with [`crate::decrypt_field`].

use crate::encoding::base64_encode;
use crate::error::CryptoResult;
use crate::key::PrivateKeyHandle;
use serde::{Deserialize, Serialize};

/// The encrypted fields embedded in one protected page.
///
/// Every field is a base64 encoding of raw RSA-OAEP ciphertext bytes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtectedPost {
    /// Encrypted plain-text title.
    pub title: String,
    /// Encrypted body HTML (rendered as markup after decryption).
    pub body: String,
    /// Encrypted plain-text subtitle, when the post has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Encrypts one plaintext field to a base64 ciphertext blob.
pub fn encrypt_field(plaintext: &str, key: &PrivateKeyHandle) -> CryptoResult<String> {
    let ciphertext = key.encrypt_raw(plaintext.as_bytes())?;
    Ok(base64_encode(&ciphertext))
}

/// Encrypts a post's protected fields under the reader's key.
pub fn protect_post(
    title: &str,
    body: &str,
    subtitle: Option<&str>,
    key: &PrivateKeyHandle,
) -> CryptoResult<ProtectedPost> {
    Ok(ProtectedPost {
        title: encrypt_field(title, key)?,
        body: encrypt_field(body, key)?,
        subtitle: subtitle.map(|s| encrypt_field(s, key)).transpose()?,
    })
}
