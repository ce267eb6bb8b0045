//! GLB / USDZ download buttons.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use turntable_core::ExportFormat;

/// Props for the [`ExportButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportButtonProps {
    format: ExportFormat,
    /// Whether this format's request is in flight.
    #[props(default)]
    pending: bool,
    on_export: EventHandler<ExportFormat>,
}

/// One download button. Disabled while its request is in flight.
#[component]
pub fn ExportButton(props: ExportButtonProps) -> Element {
    let format = props.format;
    let label = if props.pending { "Preparing…" } else { format.label() };
    let aria_label = format!("Download {} format", format.name());

    let class = if props.pending {
        "inline-flex items-center gap-2 px-4 py-2 bg-(--btn-disabled) rounded text-(--text-disabled) cursor-not-allowed"
    } else {
        "inline-flex items-center gap-2 px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded text-white font-medium transition-colors cursor-pointer"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            aria_label,
            disabled: props.pending,
            onclick: move |_| props.on_export.call(format),
            Icon { width: 16, height: 16, icon: LdDownload }
            "{label}"
        }
    }
}

/// Props for the [`ExportButtons`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportButtonsProps {
    /// Formats with a request in flight.
    in_flight: Vec<ExportFormat>,
    on_export: EventHandler<ExportFormat>,
}

/// A button per export format.
#[component]
pub fn ExportButtons(props: ExportButtonsProps) -> Element {
    rsx! {
        for format in ExportFormat::ALL {
            ExportButton {
                key: "{format.slug()}",
                format,
                pending: props.in_flight.contains(&format),
                on_export: props.on_export,
            }
        }
    }
}
