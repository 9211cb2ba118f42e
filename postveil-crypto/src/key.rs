//! Private key import for the decryption gate.
//!
//! Keys travel as base64-encoded DER PKCS#8 (the body of an unencrypted
//! PEM `PRIVATE KEY` block) and are bound to RSA-OAEP with SHA-256 for
//! decryption only. A handle is imported fresh per page load and never
//! cached.

use crate::encoding::{base64_decode, base64_encode};
use crate::error::{CryptoError, CryptoResult};
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroize;

/// Default modulus size for newly generated keys, matching the publisher.
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Opaque handle to an imported RSA private key.
///
/// Usable only through OAEP/SHA-256 decryption (and re-export, since the
/// handle is extractable by contract). The inner key material zeroizes
/// on drop (from the rsa crate).
#[derive(Debug)]
pub struct PrivateKeyHandle {
    key: RsaPrivateKey,
}

impl PrivateKeyHandle {
    /// Generates a fresh keypair handle (e = 65537).
    ///
    /// Used by the publisher when a post is protected for the first time
    /// and no key exists yet.
    pub fn generate(bits: usize) -> CryptoResult<Self> {
        let key = RsaPrivateKey::new(&mut rand::rngs::OsRng, bits)
            .map_err(|e| CryptoError::Encryption(format!("key generation failed: {e}")))?;
        Ok(Self { key })
    }

    /// Modulus size in bytes; every ciphertext under this key has
    /// exactly this length.
    pub fn modulus_size(&self) -> usize {
        self.key.size()
    }

    /// The matching public (encryption) key.
    pub fn public_key(&self) -> RsaPublicKey {
        self.key.to_public_key()
    }

    /// Re-exports the key as single-line base64 PKCS#8 DER.
    pub fn export_pkcs8_b64(&self) -> CryptoResult<String> {
        let doc = self
            .key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::KeyImport(format!("PKCS#8 export failed: {e}")))?;
        Ok(base64_encode(doc.as_bytes()))
    }

    /// OAEP/SHA-256 encryption under the matching public key.
    pub(crate) fn encrypt_raw(&self, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        // OAEP overhead: 2 * hash length + 2
        let max = self.modulus_size().checked_sub(2 * 32 + 2).ok_or_else(|| {
            CryptoError::Encryption(format!(
                "{}-byte modulus cannot hold OAEP/SHA-256 overhead",
                self.modulus_size()
            ))
        })?;
        if plaintext.len() > max {
            return Err(CryptoError::PlaintextTooLong {
                max,
                actual: plaintext.len(),
            });
        }
        self.public_key()
            .encrypt(&mut rand::rngs::OsRng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| CryptoError::Encryption(format!("OAEP encryption failed: {e}")))
    }

    /// OAEP/SHA-256 decryption of one raw ciphertext.
    ///
    /// All failure causes collapse to [`CryptoError::Decryption`]; see
    /// the variant docs for why no detail is carried.
    pub(crate) fn decrypt_raw(&self, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        if ciphertext.len() != self.modulus_size() {
            return Err(CryptoError::Decryption);
        }
        self.key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CryptoError::Decryption)
    }
}

/// Imports a base64 PKCS#8 private key into a decryption-only handle.
///
/// Any malformation (bad base64, bad DER, non-RSA key) surfaces as
/// [`CryptoError::KeyImport`]. The intermediate DER bytes are wiped
/// after parsing.
pub fn import_private_key(encoded: &str) -> CryptoResult<PrivateKeyHandle> {
    let mut der = base64_decode(encoded)
        .map_err(|e| CryptoError::KeyImport(format!("key is not valid base64: {e}")))?;
    let parsed = RsaPrivateKey::from_pkcs8_der(&der);
    der.zeroize();

    let key =
        parsed.map_err(|e| CryptoError::KeyImport(format!("not a PKCS#8 RSA key: {e}")))?;
    Ok(PrivateKeyHandle { key })
}
