//! Job status card: header, step progress, warnings, and actions.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircle, LdCircleCheck, LdLoader};
use turntable_core::{Job, StepState, paths};

/// Format a Unix-epoch millisecond timestamp in the browser's locale.
fn locale_time(millis: u64) -> String {
    #[allow(clippy::cast_precision_loss)] // timestamps fit in f64's mantissa
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Props for the [`JobStatusCard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct JobStatusCardProps {
    /// The job to describe.
    job: Job,
}

/// Everything the status page shows about one job.
#[component]
pub fn JobStatusCard(props: JobStatusCardProps) -> Element {
    let job = &props.job;
    let started = locale_time(job.created_at_ms);

    rsx! {
        div { class: "rounded-xl border border-(--border) bg-(--surface) shadow-sm",
            div { class: "space-y-1 p-6 pb-0",
                h1 { class: "font-semibold text-lg text-(--text-heading)", "Job {job.id}" }
                p { class: "text-sm text-(--muted)", "Started {started}" }
            }
            div { class: "space-y-6 p-6",
                StepProgress { job: job.clone() }
                if !job.warnings.is_empty() {
                    WarningList { warnings: job.warnings.clone() }
                }
                JobActions { job: job.clone() }
            }
        }
    }
}

/// Props for the [`StepProgress`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StepProgressProps {
    job: Job,
}

/// Uploaded / Processing / Ready indicator.
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    let steps = props.job.progress();

    rsx! {
        nav { aria_label: "Processing steps",
            ol { class: "flex items-center gap-2",
                for (step, state) in steps {
                    li {
                        key: "{step.status}",
                        class: "flex flex-1 items-center gap-2",
                        "data-state": state.as_str(),
                        aria_current: if state == StepState::Active { "step" },
                        StepIcon { state }
                        span { class: step_label_class(state), "{step.label}" }
                    }
                }
            }
        }
    }
}

const fn step_label_class(state: StepState) -> &'static str {
    match state {
        StepState::Pending => "text-sm text-(--muted)",
        StepState::Active | StepState::Completed => "text-sm font-medium",
    }
}

#[component]
fn StepIcon(state: StepState) -> Element {
    match state {
        StepState::Completed => rsx! {
            span { class: "text-(--text-success)", aria_hidden: "true",
                Icon { width: 20, height: 20, icon: LdCircleCheck }
            }
        },
        StepState::Active => rsx! {
            span { class: "animate-spin text-(--text-heading)", aria_hidden: "true",
                Icon { width: 20, height: 20, icon: LdLoader }
            }
        },
        StepState::Pending => rsx! {
            span { class: "text-(--muted)", aria_hidden: "true",
                Icon { width: 20, height: 20, icon: LdCircle }
            }
        },
    }
}

/// Props for the [`WarningList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct WarningListProps {
    warnings: Vec<String>,
}

/// Non-fatal processing warnings.
#[component]
pub fn WarningList(props: WarningListProps) -> Element {
    rsx! {
        div {
            class: "rounded-md border border-(--warn-border) bg-(--warn-bg) p-3",
            role: "alert",
            aria_live: "polite",
            p { class: "mb-1 text-sm font-medium", "Warnings" }
            ul { class: "list-disc space-y-0.5 pl-5 text-sm text-(--muted)",
                for (i, warning) in props.warnings.iter().enumerate() {
                    li { key: "{i}", "{warning}" }
                }
            }
        }
    }
}

#[component]
fn JobActions(job: Job) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-3",
            if job.is_viewable() {
                Link {
                    class: "px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded text-white font-medium transition-colors",
                    to: paths::view(&job.id),
                    "View 3D model"
                }
            }
            if job.shows_retry() {
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-(--btn-disabled) rounded text-(--text-disabled) cursor-not-allowed",
                    disabled: true,
                    "Retry (not implemented)"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_announced_politely() {
        let html = dioxus::ssr::render_element(rsx! {
            WarningList { warnings: vec!["Photo 2 is blurry".to_string()] }
        });
        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(html.contains(r#"aria-live="polite""#), "{html}");
        assert!(html.contains("Photo 2 is blurry"), "{html}");
    }
}
