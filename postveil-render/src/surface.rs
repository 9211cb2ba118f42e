//! Rendering surface abstraction.
//!
//! The pipeline writes decrypted fields into a hosting document through
//! this trait. The stable target identifiers mirror the published page
//! template: `post-content` (accepts markup), `post-title` and
//! `post-subtitle` (plain text), plus the document-level title.

/// A hosting document the pipeline can publish plaintext into.
///
/// Writes are infallible by contract; a host whose targets can fail
/// must buffer and surface that outside the pipeline.
pub trait RenderSurface {
    /// Replaces the `post-content` target with decrypted markup.
    ///
    /// The markup is publisher-origin and therefore trusted: it is
    /// rendered, not escaped. Hosts displaying plaintext from any
    /// less-trusted source must interpose a sanitizer here.
    fn set_content_html(&mut self, html: &str);

    /// Replaces the `post-title` target with plain text.
    fn set_title_text(&mut self, text: &str);

    /// Replaces the `post-subtitle` target with plain text.
    ///
    /// Default is a no-op for hosts whose template has no subtitle slot.
    fn set_subtitle_text(&mut self, _text: &str) {}

    /// Current document-level title.
    fn document_title(&self) -> String;

    /// Replaces the document-level title.
    fn set_document_title(&mut self, title: &str);
}

/// In-memory document holding placeholder chrome until decryption
/// succeeds.
///
/// This is the surface for string-rendering hosts and for tests; a
/// browser host would implement [`RenderSurface`] over live elements
/// instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticPage {
    content_html: String,
    title_text: String,
    subtitle_text: String,
    document_title: String,
}

impl StaticPage {
    /// Placeholder markup shown while the content is still encrypted.
    pub const PLACEHOLDER_HTML: &'static str = "<p>This post is protected.</p>";

    /// Creates a page with placeholder targets and the given site title.
    pub fn new(document_title: impl Into<String>) -> Self {
        Self {
            content_html: Self::PLACEHOLDER_HTML.to_string(),
            title_text: String::new(),
            subtitle_text: String::new(),
            document_title: document_title.into(),
        }
    }

    pub fn content_html(&self) -> &str {
        &self.content_html
    }

    pub fn title_text(&self) -> &str {
        &self.title_text
    }

    pub fn subtitle_text(&self) -> &str {
        &self.subtitle_text
    }
}

impl RenderSurface for StaticPage {
    fn set_content_html(&mut self, html: &str) {
        self.content_html = html.to_string();
    }

    fn set_title_text(&mut self, text: &str) {
        self.title_text = text.to_string();
    }

    fn set_subtitle_text(&mut self, text: &str) {
        self.subtitle_text = text.to_string();
    }

    fn document_title(&self) -> String {
        self.document_title.clone()
    }

    fn set_document_title(&mut self, title: &str) {
        self.document_title = title.to_string();
    }
}
