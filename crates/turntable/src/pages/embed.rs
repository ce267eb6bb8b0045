use dioxus::prelude::*;
use turntable_core::embed::embed_url;
use turntable_core::{AppConfig, JobId, paths};
use turntable_io::{BackLink, Card, EmbedSnippet, Page};

/// Shopify embed code page for `?model=<job id>`.
///
/// Without a model the snippet points at the mock job.
#[component]
pub fn Embed(model: String) -> Element {
    let config = use_context::<AppConfig>();
    let model = (!model.is_empty()).then(|| JobId::new(model));
    let url = embed_url(&config.app_url, model.as_ref());
    let back = model.as_ref().map_or_else(|| paths::HOME.to_owned(), paths::view);

    rsx! {
        Page {
            BackLink { to: back }
            Card {
                title: "Shopify embed code",
                description: "Paste this snippet into your Shopify theme or product page to show the 3D model in an iframe.",
                EmbedSnippet { embed_url: url }
            }
        }
    }
}
