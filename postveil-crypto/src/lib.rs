//! Field encryption layer for postveil.
//!
//! Protected posts are published with their sensitive fields (title,
//! body, optional subtitle) pre-encrypted under a reader-held RSA key
//! pair:
//!
//! - RSA-OAEP with SHA-256 for field encryption/decryption
//! - PKCS#8 (DER, base64-encoded) as the private key transport format
//! - base64 as the ciphertext transport format
//!
//! Exactly one key pair per protected page; a private key handle is
//! imported fresh per page load and never cached or persisted. There is
//! no multi-recipient support and no key rotation.

pub mod encoding;

mod decrypt;
mod error;
mod key;
mod protect;

pub use decrypt::decrypt_field;
pub use error::{CryptoError, CryptoResult};
pub use key::{import_private_key, PrivateKeyHandle, DEFAULT_KEY_BITS};
pub use protect::{encrypt_field, protect_post, ProtectedPost};
