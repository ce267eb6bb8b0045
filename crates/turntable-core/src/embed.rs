//! Embed snippet generation.
//!
//! Produces the `<iframe>` markup a merchant pastes into a Shopify theme
//! to show a job's 3D view page.

use crate::backend::MOCK_JOB_ID;
use crate::paths;
use crate::types::JobId;

/// Height of the embedded viewer, in pixels.
pub const EMBED_HEIGHT: u32 = 400;

/// Absolute URL of a job's view page under `app_url`.
///
/// Without a model the mock job is used, so the snippet is always
/// previewable.
#[must_use]
pub fn embed_url(app_url: &str, model: Option<&JobId>) -> String {
    let base = app_url.trim_end_matches('/');
    let id = model.filter(|id| !id.is_empty()).map_or(MOCK_JOB_ID, JobId::as_str);
    format!("{base}{}", paths::view(&JobId::new(id)))
}

/// The `<iframe>` snippet for an embed URL.
#[must_use]
pub fn iframe_snippet(embed_url: &str) -> String {
    let src = escape_attribute(embed_url);
    format!(
        r#"<iframe src="{src}" width="100%" height="{EMBED_HEIGHT}" frameborder="0" allow="autoplay; fullscreen; xr-spatial-tracking" allowfullscreen></iframe>"#
    )
}

/// Escape a value for a double-quoted HTML attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_for_model() {
        let id = JobId::new("abc123");
        assert_eq!(
            embed_url("https://app.example", Some(&id)),
            "https://app.example/view/abc123"
        );
    }

    #[test]
    fn embed_url_trims_trailing_slash() {
        let id = JobId::new("abc");
        assert_eq!(embed_url("https://app.example/", Some(&id)), "https://app.example/view/abc");
    }

    #[test]
    fn embed_url_defaults_to_mock_job() {
        assert_eq!(embed_url("http://localhost:3000", None), "http://localhost:3000/view/mock-id");
        assert_eq!(
            embed_url("http://localhost:3000", Some(&JobId::new(""))),
            "http://localhost:3000/view/mock-id"
        );
    }

    #[test]
    fn snippet_matches_template() {
        assert_eq!(
            iframe_snippet("http://localhost:3000/view/mock-id"),
            "<iframe src=\"http://localhost:3000/view/mock-id\" width=\"100%\" height=\"400\" \
             frameborder=\"0\" allow=\"autoplay; fullscreen; xr-spatial-tracking\" \
             allowfullscreen></iframe>"
        );
    }

    #[test]
    fn snippet_escapes_quotes_in_url() {
        let snippet = iframe_snippet("https://x.example/view/a\"onload=\"alert(1)");
        assert!(snippet.contains("src=\"https://x.example/view/a&quot;onload=&quot;alert(1)\""));
        assert!(!snippet.contains("a\"onload"));
    }

    #[test]
    fn escape_attribute_handles_ampersand_and_brackets() {
        assert_eq!(escape_attribute("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
