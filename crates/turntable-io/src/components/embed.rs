//! Embed code snippet with copy-to-clipboard.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdCopy};
use turntable_core::embed::iframe_snippet;

use crate::clipboard;

/// How long the "Copied!" confirmation stays up, in milliseconds.
const COPIED_RESET_MS: u32 = 2000;

/// Props for the [`EmbedSnippet`] component.
#[derive(Props, Clone, PartialEq)]
pub struct EmbedSnippetProps {
    /// Absolute URL the iframe points at.
    embed_url: String,
}

/// Read-only snippet plus a copy button.
#[component]
pub fn EmbedSnippet(props: EmbedSnippetProps) -> Element {
    let snippet = iframe_snippet(&props.embed_url);
    let mut copied = use_signal(|| false);
    let mut copy_error = use_signal(|| Option::<String>::None);

    let copy = {
        let snippet = snippet.clone();
        move |_| {
            let snippet = snippet.clone();
            spawn(async move {
                match clipboard::write_text(&snippet).await {
                    Ok(()) => {
                        copy_error.set(None);
                        copied.set(true);
                        gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
                        copied.set(false);
                    }
                    Err(e) => {
                        tracing::warn!("copy failed: {e}");
                        copy_error.set(Some("Could not copy. Select the code and copy it manually.".to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "space-y-3",
            pre {
                class: "overflow-x-auto whitespace-pre-wrap break-all rounded-md border border-(--border) bg-(--preview-bg) p-3 font-mono text-xs",
                aria_label: "Embed code",
                code { "{snippet}" }
            }
            button {
                r#type: "button",
                class: "inline-flex items-center gap-2 px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded text-white font-medium transition-colors cursor-pointer",
                aria_label: if copied() { "Copied to clipboard" } else { "Copy embed code" },
                onclick: copy,
                if copied() {
                    Icon { width: 16, height: 16, icon: LdCheck }
                    "Copied!"
                } else {
                    Icon { width: 16, height: 16, icon: LdCopy }
                    "Copy code"
                }
            }
            if let Some(err) = copy_error() {
                p { class: "text-sm text-(--text-error)", role: "alert", "{err}" }
            }
        }
    }
}
