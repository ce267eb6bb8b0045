//! Thumbnail previews for staged photos.
//!
//! Each staged [`ImageFile`] gets a Blob URL (`URL.createObjectURL`)
//! pointing at its bytes, usable directly as an `<img src>`. The URL
//! pins the bytes in browser memory until revoked, so [`BlobPreviews`]
//! revokes it when the staging store releases the handle.

use turntable_core::{ImageFile, PreviewAllocator, StagedFile, StagingSet};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// The staging store used by the upload page.
pub type UploadStaging = StagingSet<ImageFile, BlobPreviews>;

/// Errors that can occur during Blob URL creation.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A preview Blob URL. Empty if the browser refused to create one, in
/// which case the file is still staged but shows no thumbnail.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewUrl(Option<String>);

impl PreviewUrl {
    /// URL for an `<img src>`, if one was created.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Allocates Blob URL previews and revokes them on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobPreviews;

impl PreviewAllocator<ImageFile> for BlobPreviews {
    type Handle = PreviewUrl;

    fn acquire(&mut self, file: &ImageFile) -> PreviewUrl {
        match bytes_to_blob_url(file.bytes(), file.content_type()) {
            Ok(url) => PreviewUrl(Some(url)),
            Err(e) => {
                tracing::warn!("no preview for {}: {e}", file.name());
                PreviewUrl(None)
            }
        }
    }

    fn release(&mut self, handle: PreviewUrl) {
        if let Some(url) = handle.0 {
            revoke_blob_url(&url);
        }
    }
}

/// Create a Blob URL for raw bytes with the given MIME type.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, PreviewError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
pub fn revoke_blob_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::warn!("failed to revoke {url}: {e:?}");
    }
}
