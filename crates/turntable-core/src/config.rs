//! Application configuration.
//!
//! The web bundle has no process environment at runtime, so overrides
//! are read at build time with `option_env!`.

use serde::{Deserialize, Serialize};

/// Runtime settings shared by the web app and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public base URL of the deployed app, used to build embed URLs.
    pub app_url: String,

    /// Script URL for the `<model-viewer>` web component.
    pub model_viewer_script: String,

    /// GLB returned by the mock backend for every job.
    pub sample_glb_url: String,

    /// Delay between job status polls, in milliseconds.
    pub poll_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_url: "http://localhost:3000".to_owned(),
            model_viewer_script: "https://unpkg.com/@google/model-viewer@4.1.0/dist/model-viewer.min.js"
                .to_owned(),
            sample_glb_url: "https://modelviewer.dev/shared-assets/models/Astronaut.glb".to_owned(),
            poll_interval_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `TURNTABLE_*` variables present at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("TURNTABLE_APP_URL"),
            option_env!("TURNTABLE_MODEL_VIEWER_SCRIPT"),
            option_env!("TURNTABLE_SAMPLE_GLB_URL"),
            option_env!("TURNTABLE_POLL_INTERVAL_MS"),
        )
    }

    /// Apply overrides; `None` and empty strings keep the current value.
    #[must_use]
    pub fn with_overrides(
        mut self,
        app_url: Option<&str>,
        model_viewer_script: Option<&str>,
        sample_glb_url: Option<&str>,
        poll_interval_ms: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);

        if let Some(url) = non_empty(app_url) {
            self.app_url = url;
        }
        if let Some(url) = non_empty(model_viewer_script) {
            self.model_viewer_script = url;
        }
        if let Some(url) = non_empty(sample_glb_url) {
            self.sample_glb_url = url;
        }
        if let Some(raw) = non_empty(poll_interval_ms) {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => self.poll_interval_ms = ms,
                _ => tracing::warn!("ignoring invalid poll interval {raw:?}"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app_url, "http://localhost:3000");
        assert!(config.sample_glb_url.ends_with("Astronaut.glb"));
        assert_eq!(config.poll_interval_ms, 2000);
    }

    #[test]
    fn overrides_replace_values() {
        let config = AppConfig::default().with_overrides(
            Some("https://shop.example"),
            None,
            Some(" https://cdn.example/m.glb "),
            Some("500"),
        );
        assert_eq!(config.app_url, "https://shop.example");
        assert_eq!(config.sample_glb_url, "https://cdn.example/m.glb");
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.model_viewer_script, AppConfig::default().model_viewer_script);
    }

    #[test]
    fn empty_and_invalid_overrides_are_ignored() {
        let config = AppConfig::default().with_overrides(Some(""), Some("  "), None, Some("soon"));
        assert_eq!(config, AppConfig::default());
        let config = AppConfig::default().with_overrides(None, None, None, Some("0"));
        assert_eq!(config.poll_interval_ms, 2000);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"app_url":"https://a.example"}"#).unwrap_or_default();
        assert_eq!(config.app_url, "https://a.example");
        assert_eq!(config.poll_interval_ms, 2000);
    }
}
