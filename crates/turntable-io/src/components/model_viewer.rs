//! Interactive 3D viewer built on the `<model-viewer>` web component.
//!
//! The custom element is not part of the Dioxus element set, so its
//! markup is rendered as raw HTML with every attribute value escaped.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCode;
use turntable_core::embed::escape_attribute;
use turntable_core::{JobId, paths};

/// `<model-viewer>` markup for a GLB URL.
#[must_use]
pub fn model_viewer_markup(glb_url: &str, alt: &str) -> String {
    let src = escape_attribute(glb_url);
    let alt = escape_attribute(alt);
    format!(
        r#"<model-viewer src="{src}" alt="{alt}" camera-controls auto-rotate shadow-intensity="1" style="width:100%;height:100%;background-color:#fff;"></model-viewer>"#
    )
}

/// Props for the [`ModelViewerScript`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ModelViewerScriptProps {
    /// URL of the `model-viewer` module script.
    src: String,
}

/// Loads the `model-viewer` element definition.
#[component]
pub fn ModelViewerScript(props: ModelViewerScriptProps) -> Element {
    rsx! {
        script { r#type: "module", src: "{props.src}" }
    }
}

/// Props for the [`ModelViewer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ModelViewerProps {
    /// URL of the GLB model to display.
    glb_url: String,
    /// Accessible description of the model.
    #[props(default = "3D model".to_string())]
    alt: String,
}

/// Rotatable, auto-spinning model.
#[component]
pub fn ModelViewer(props: ModelViewerProps) -> Element {
    let markup = model_viewer_markup(&props.glb_url, &props.alt);
    rsx! {
        div {
            class: "aspect-square w-full overflow-hidden rounded-xl border border-(--border) bg-white",
            dangerous_inner_html: "{markup}",
        }
    }
}

/// Props for the [`ViewerHeader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ViewerHeaderProps {
    #[props(default = "3D model".to_string())]
    title: String,
}

#[component]
pub fn ViewerHeader(props: ViewerHeaderProps) -> Element {
    rsx! {
        h1 { class: "mb-4 text-2xl font-semibold text-(--text-heading)", "{props.title}" }
    }
}

/// Props for the [`ViewerActions`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ViewerActionsProps {
    job_id: JobId,
    /// Extra controls rendered before the embed link.
    #[props(default)]
    children: Element,
}

/// Action row under the viewer, ending with the embed link.
#[component]
pub fn ViewerActions(props: ViewerActionsProps) -> Element {
    rsx! {
        div { class: "mt-4 flex flex-wrap gap-3",
            {props.children}
            Link {
                class: "inline-flex items-center gap-2 px-4 py-2 rounded border border-(--border) hover:bg-(--surface-active) font-medium transition-colors",
                to: paths::embed(&props.job_id),
                Icon { width: 16, height: 16, icon: LdCode }
                "Get embed code"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_escapes_attributes() {
        let html = model_viewer_markup("https://x/a.glb?a=1&b=\"2\"", "<Shoe>");
        assert!(html.contains(r#"src="https://x/a.glb?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r#"alt="&lt;Shoe&gt;""#));
        assert!(html.contains("camera-controls auto-rotate"));
    }

    #[test]
    fn viewer_background_is_white_in_any_theme() {
        assert!(model_viewer_markup("a.glb", "x").contains("background-color:#fff;"));

        let html = dioxus::ssr::render_element(rsx! {
            ModelViewer { glb_url: "a.glb" }
        });
        assert!(html.contains("bg-white"), "{html}");
        assert!(!html.contains("--preview-bg"), "{html}");
    }
}
