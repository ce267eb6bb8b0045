//! Page shell, card, and back-link building blocks shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;

/// Props for the [`Page`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PageProps {
    /// Maximum content width as a Tailwind class, e.g. `max-w-2xl`.
    #[props(default = "max-w-2xl".to_string())]
    width: String,
    children: Element,
}

/// Full-height page with centered content.
#[component]
pub fn Page(props: PageProps) -> Element {
    rsx! {
        div { class: "min-h-screen bg-(--bg) text-(--text)",
            div { class: "mx-auto {props.width} px-6 py-10", {props.children} }
        }
    }
}

/// Props for the [`Card`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Optional heading.
    #[props(default, into)]
    title: Option<String>,
    /// Optional text under the heading.
    #[props(default, into)]
    description: Option<String>,
    children: Element,
}

/// Bordered surface with an optional header.
#[component]
pub fn Card(props: CardProps) -> Element {
    let has_header = props.title.is_some() || props.description.is_some();
    rsx! {
        div { class: "rounded-xl border border-(--border) bg-(--surface) shadow-sm",
            if has_header {
                div { class: "space-y-1 p-6 pb-0",
                    if let Some(ref title) = props.title {
                        h2 { class: "font-semibold text-lg text-(--text-heading)", "{title}" }
                    }
                    if let Some(ref description) = props.description {
                        p { class: "text-sm text-(--muted)", "{description}" }
                    }
                }
            }
            div { class: "space-y-6 p-6", {props.children} }
        }
    }
}

/// Props for the [`BackLink`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BackLinkProps {
    /// Internal path to navigate to.
    #[props(into)]
    to: String,
    /// Link text.
    #[props(default = "Back".to_string(), into)]
    label: String,
}

/// Arrow link back to the previous step of the flow.
#[component]
pub fn BackLink(props: BackLinkProps) -> Element {
    rsx! {
        Link {
            class: "mb-6 -ml-2 inline-flex h-8 items-center gap-2 rounded-md px-2.5 text-sm font-medium hover:bg-(--surface-active)",
            to: props.to,
            Icon { width: 16, height: 16, icon: LdArrowLeft }
            "{props.label}"
        }
    }
}
