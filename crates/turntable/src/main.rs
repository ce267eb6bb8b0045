use dioxus::prelude::*;
use turntable_core::{AppConfig, MockBackend};

mod pages;

use pages::{Embed, JobProgress, Landing, PageNotFound, Upload, Viewer};

fn main() {
    dioxus::launch(app);
}

/// Application routes.
#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/upload")]
    Upload {},
    #[route("/jobs/:id")]
    JobProgress { id: String },
    #[route("/view/:id")]
    Viewer { id: String },
    #[route("/embed?:model")]
    Embed { model: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides the config and backend to every page and renders the router.
fn app() -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    use_context_provider(|| MockBackend::from_config(&config));

    rsx! {
        // Tailwind CSS utilities, generated in the browser from the
        // classes present in the DOM.
        script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }

        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Noto+Sans:wght@400;500;600&display=swap",
        }

        Router::<Route> {}
    }
}
