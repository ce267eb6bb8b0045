//! Clipboard writes via the browser Clipboard API.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target) and
//! a user-gesture context (i.e., called from a click handler).

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur when accessing the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// A browser API call returned an error or a required object was missing.
    #[error("clipboard API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Copy `text` to the system clipboard.
///
/// Wraps [`navigator.clipboard.writeText()`][mdn].
///
/// # Errors
///
/// Returns [`ClipboardError::JsError`] if the browser window is
/// unavailable or the write is refused (e.g., the page is not focused or
/// lacks clipboard-write permission).
///
/// [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/Clipboard/writeText
#[allow(clippy::future_not_send)] // WASM is single-threaded; Clipboard is !Send
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window =
        web_sys::window().ok_or_else(|| ClipboardError::JsError("no global window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
