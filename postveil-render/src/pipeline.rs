//! The decrypt-and-render pipeline.
//!
//! One forward pass per page load: import the private key, decrypt the
//! body, then the title, then the subtitle when present, and only after
//! every field has decrypted write them to the surface. Any failure
//! aborts before the first write, so the page keeps its placeholder
//! chrome.

use crate::error::RenderResult;
use crate::surface::RenderSurface;
use postveil_crypto::{decrypt_field, import_private_key, ProtectedPost};
use tracing::{debug, error};

/// Drives decryption of a protected post into one rendering surface.
pub struct PageRenderer<S: RenderSurface> {
    surface: S,
    // Captured once so the title append composes against the pristine
    // document title even if the pipeline runs more than once.
    base_document_title: String,
}

impl<S: RenderSurface> PageRenderer<S> {
    pub fn new(surface: S) -> Self {
        let base_document_title = surface.document_title();
        Self {
            surface,
            base_document_title,
        }
    }

    /// Decrypts all protected fields and publishes them to the surface.
    ///
    /// Steps run strictly in order: key import, body, title, subtitle.
    /// A failure at any step returns before anything is written; on
    /// success each target is written exactly once and the decrypted
    /// title is prefixed onto the pristine document title.
    pub fn try_render(&mut self, encoded_key: &str, post: &ProtectedPost) -> RenderResult<()> {
        let key = import_private_key(encoded_key)?;

        // Body first: its failure must short-circuit before the title
        // decryption is even attempted.
        let body = decrypt_field(&post.body, &key)?;
        let title = decrypt_field(&post.title, &key)?;
        let subtitle = post
            .subtitle
            .as_deref()
            .map(|blob| decrypt_field(blob, &key))
            .transpose()?;

        self.surface.set_content_html(&body);
        self.surface.set_title_text(&title);
        if let Some(subtitle) = &subtitle {
            self.surface.set_subtitle_text(subtitle);
        }
        self.surface
            .set_document_title(&format!("{title} {}", self.base_document_title));

        debug!("rendered protected post ({} bytes of markup)", body.len());
        Ok(())
    }

    /// Top-level entry point: render, or keep the placeholders.
    ///
    /// Any failure is logged once for operators; no error detail
    /// reaches the rendered page and the surface stays untouched.
    pub fn render(&mut self, encoded_key: &str, post: &ProtectedPost) {
        if let Err(e) = self.try_render(encoded_key, post) {
            error!("protected post left encrypted: {e}");
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
