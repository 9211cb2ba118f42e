//! In-page decrypt-and-render pipeline for protected posts.
//!
//! A protected page ships with placeholder chrome and a
//! [`ProtectedPost`] bundle of RSA-OAEP ciphertext blobs. Given the
//! reader's encoded private key, [`PageRenderer`] decrypts the fields
//! and publishes them into a [`RenderSurface`]; on any failure the
//! placeholders stay and a diagnostic is logged.
//!
//! Decrypted body markup is publisher-origin and rendered as trusted
//! HTML. If the plaintext source is not fully trusted, wrap the
//! surface's content target in a sanitizer.

mod error;
mod pipeline;
mod surface;

pub use error::{RenderError, RenderResult};
pub use pipeline::PageRenderer;
pub use postveil_crypto::ProtectedPost;
pub use surface::{RenderSurface, StaticPage};
