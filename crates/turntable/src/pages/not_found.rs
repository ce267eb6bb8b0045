use dioxus::prelude::*;
use turntable_core::paths;
use turntable_io::Page;

/// Catch-all route for unknown paths.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));
    rsx! {
        Page { NotFoundNotice {} }
    }
}

/// Shown for unknown paths and for jobs or models that do not exist.
#[component]
pub fn NotFoundNotice() -> Element {
    rsx! {
        div { class: "py-16 text-center",
            h1 { class: "text-2xl font-semibold text-(--text-heading)", "Not found" }
            p { class: "mt-2 text-(--muted)", "This page could not be found." }
            Link {
                class: "mt-6 inline-block text-sm font-medium underline",
                to: paths::HOME,
                "Go home"
            }
        }
    }
}
