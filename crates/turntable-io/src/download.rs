//! File download from a URL.
//!
//! Dioxus has no built-in file download API.  Downloads are triggered by
//! programmatically clicking a temporary `<a download>` element.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Start downloading `url`, suggesting `filename` and the `mime` type to
/// the browser.
///
/// Cross-origin URLs ignore the suggested name and may open in a new
/// navigation instead, depending on the server's headers.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the document is unavailable or
/// the anchor element cannot be created.
pub fn trigger_download(url: &str, filename: &str, mime: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.set_type(mime);
    anchor.set_rel("noopener");

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has started; a failed removal is not a failed download.
    let _ = body.remove_child(&anchor);

    Ok(())
}
