use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdImage, LdSparkles, LdUpload};
use dioxus_free_icons::Icon;
use turntable_core::paths;

/// Marketing page with a call to action and the three-step overview.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "min-h-screen bg-(--bg) text-(--text)",
            main { class: "mx-auto max-w-4xl px-6 py-20 sm:py-28",
                div { class: "text-center",
                    h1 { class: "font-semibold text-4xl tracking-tight text-(--text-heading) sm:text-5xl md:text-6xl",
                        "Upload your product photos. Get a clean, realistic 3D model your customers can rotate."
                    }
                    p { class: "mt-6 text-lg text-(--muted) sm:text-xl",
                        "Built for e-commerce. No 3D skills required."
                    }
                    div { class: "mt-10",
                        Link {
                            class: "inline-flex items-center gap-2 px-6 py-3 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded-lg text-white font-medium transition-colors",
                            to: paths::UPLOAD,
                            Icon { width: 20, height: 20, icon: LdUpload }
                            "Start with your photos"
                        }
                    }
                }

                section { class: "mt-24 grid gap-10 sm:grid-cols-3",
                    FeatureCard {
                        title: "Upload 3–6 photos",
                        description: "JPG or PNG from different angles.",
                        Icon { width: 24, height: 24, icon: LdImage }
                    }
                    FeatureCard {
                        title: "We process",
                        description: "Background removal, 3D reconstruction, clean output.",
                        Icon { width: 24, height: 24, icon: LdSparkles }
                    }
                    FeatureCard {
                        title: "Embed or download",
                        description: "GLB for web and Shopify, USDZ for Apple.",
                        Icon { width: 24, height: 24, icon: LdDownload }
                    }
                }
            }
        }
    }
}

/// One step of the overview; `children` is the step's icon.
#[component]
fn FeatureCard(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "rounded-xl border border-(--border) bg-(--surface) p-6 text-center shadow-sm",
            div { class: "mx-auto flex size-12 items-center justify-center rounded-full bg-(--surface-active) text-(--btn-primary)",
                {children}
            }
            h2 { class: "mt-4 font-semibold text-(--text-heading)", "{title}" }
            p { class: "mt-2 text-sm text-(--muted)", "{description}" }
        }
    }
}
