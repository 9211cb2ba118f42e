use postveil_crypto::{protect_post, PrivateKeyHandle, DEFAULT_KEY_BITS};
use postveil_render::{PageRenderer, ProtectedPost, RenderError, RenderSurface, StaticPage};
use pretty_assertions::assert_eq;

fn test_key() -> PrivateKeyHandle {
    PrivateKeyHandle::generate(DEFAULT_KEY_BITS).unwrap()
}

fn protected(key: &PrivateKeyHandle) -> ProtectedPost {
    protect_post("Hello World", "<p>Secret body</p>", None, key).unwrap()
}

#[test]
fn renders_decrypted_fields_into_targets() {
    let key = test_key();
    let post = protected(&key);

    let mut renderer = PageRenderer::new(StaticPage::new("Example Blog"));
    renderer
        .try_render(&key.export_pkcs8_b64().unwrap(), &post)
        .unwrap();

    let page = renderer.surface();
    assert_eq!(page.content_html(), "<p>Secret body</p>");
    assert_eq!(page.title_text(), "Hello World");
    assert_eq!(page.document_title(), "Hello World Example Blog");
}

#[test]
fn renders_subtitle_when_present() {
    let key = test_key();
    let post = protect_post("Hello World", "<p>Secret body</p>", Some("A quiet note"), &key)
        .unwrap();

    let mut renderer = PageRenderer::new(StaticPage::new("Example Blog"));
    renderer
        .try_render(&key.export_pkcs8_b64().unwrap(), &post)
        .unwrap();

    assert_eq!(renderer.surface().subtitle_text(), "A quiet note");
}

#[test]
fn wrong_key_leaves_every_target_at_placeholder() {
    let key = test_key();
    let unrelated = test_key();
    let post = protected(&key);

    let pristine = StaticPage::new("Example Blog");
    let mut renderer = PageRenderer::new(pristine.clone());
    renderer.render(&unrelated.export_pkcs8_b64().unwrap(), &post);

    assert_eq!(renderer.surface(), &pristine);
    assert_eq!(renderer.surface().content_html(), StaticPage::PLACEHOLDER_HTML);
}

#[test]
fn malformed_key_material_propagates_key_import() {
    let key = test_key();
    let post = protected(&key);

    let mut renderer = PageRenderer::new(StaticPage::new("Example Blog"));
    let err = renderer.try_render("@@corrupted key@@", &post).unwrap_err();

    assert!(matches!(
        err,
        RenderError::Crypto(postveil_crypto::CryptoError::KeyImport(_))
    ));
    assert_eq!(renderer.surface(), &StaticPage::new("Example Blog"));
}

#[test]
fn corrupted_body_blob_aborts_before_any_write() {
    let key = test_key();
    let mut post = protected(&key);
    post.body = postveil_crypto::encoding::base64_encode(&[0xAB; 256]);

    let pristine = StaticPage::new("Example Blog");
    let mut renderer = PageRenderer::new(pristine.clone());
    renderer.render(&key.export_pkcs8_b64().unwrap(), &post);

    // Title was decryptable, but the body failure must abort the whole
    // pass: no partial page.
    assert_eq!(renderer.surface(), &pristine);
}

#[test]
fn corrupted_title_blob_aborts_before_any_write() {
    let key = test_key();
    let mut post = protected(&key);
    post.title = postveil_crypto::encoding::base64_encode(&[0xCD; 256]);

    let pristine = StaticPage::new("Example Blog");
    let mut renderer = PageRenderer::new(pristine.clone());
    renderer.render(&key.export_pkcs8_b64().unwrap(), &post);

    assert_eq!(renderer.surface(), &pristine);
}

#[test]
fn rendering_twice_is_idempotent() {
    let key = test_key();
    let encoded = key.export_pkcs8_b64().unwrap();
    let post = protected(&key);

    let mut renderer = PageRenderer::new(StaticPage::new("Example Blog"));
    renderer.render(&encoded, &post);
    let first_pass = renderer.surface().clone();

    renderer.render(&encoded, &post);

    // Document title must not accumulate a second prefix
    assert_eq!(renderer.surface(), &first_pass);
    assert_eq!(renderer.surface().document_title(), "Hello World Example Blog");
}

#[test]
fn into_surface_returns_rendered_page() {
    let key = test_key();
    let post = protected(&key);

    let mut renderer = PageRenderer::new(StaticPage::new("Example Blog"));
    renderer.render(&key.export_pkcs8_b64().unwrap(), &post);

    let page = renderer.into_surface();
    assert_eq!(page.title_text(), "Hello World");
}
