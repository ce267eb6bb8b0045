use dioxus::prelude::*;
use turntable_core::{AppConfig, ExportFormat, JobBackend, JobId, MockBackend, paths};
use turntable_io::{
    BackLink, ExportButtons, ExportOutcome, ModelViewer, ModelViewerScript, Page, ViewerActions,
    ViewerHeader, run_export,
};

use super::not_found::NotFoundNotice;

/// 3D view page with export buttons and the embed link.
#[component]
pub fn Viewer(id: String) -> Element {
    let config = use_context::<AppConfig>();
    let backend = use_context::<MockBackend>();
    let job_id = JobId::new(id.clone());
    let lookup_backend = backend.clone();

    let model = use_resource(use_reactive!(|(id,)| {
        let backend = lookup_backend.clone();
        async move { backend.get_viewer_model(&JobId::new(id)).await }
    }));

    let mut in_flight = use_signal(Vec::<ExportFormat>::new);
    let mut export_error = use_signal(|| Option::<String>::None);

    let on_export = {
        let job_id = job_id.clone();
        move |format: ExportFormat| {
            if in_flight.read().contains(&format) {
                return;
            }
            in_flight.write().push(format);
            export_error.set(None);
            let backend = backend.clone();
            let job_id = job_id.clone();
            spawn(async move {
                match run_export(&backend, &job_id, format).await {
                    Ok(ExportOutcome::Downloaded) => {}
                    Ok(ExportOutcome::Unavailable) => {
                        export_error.set(Some(format!("{} is not available for this model yet.", format.name())));
                    }
                    Err(e) => {
                        tracing::warn!("{format} export for job {job_id} failed: {e}");
                        export_error.set(Some(format!("Export failed: {e}")));
                    }
                }
                in_flight.write().retain(|f| *f != format);
            });
        }
    };

    let body = match &*model.read() {
        None => rsx! {
            p { class: "text-(--muted) animate-pulse", "Loading model…" }
        },
        Some(Ok(None)) => rsx! {
            NotFoundNotice {}
        },
        Some(Err(e)) => rsx! {
            div { class: "bg-(--error-bg) border border-(--error-border) rounded p-3",
                p { class: "text-(--text-error) text-sm", "{e}" }
            }
        },
        Some(Ok(Some(viewer))) => rsx! {
            div { class: "rounded-xl border border-(--border) bg-(--surface) p-6 shadow-sm",
                ViewerHeader { title: "Your 3D model" }
                ModelViewer { glb_url: viewer.glb_url.clone(), alt: "Product 3D model" }
                ViewerActions { job_id: job_id.clone(),
                    ExportButtons { in_flight: in_flight(), on_export }
                }
                if let Some(err) = export_error() {
                    p { class: "mt-3 text-sm text-(--text-error)", role: "alert", "{err}" }
                }
            }
        },
    };

    rsx! {
        ModelViewerScript { src: config.model_viewer_script.clone() }
        Page { width: "max-w-3xl",
            BackLink { to: paths::job(&job_id), label: "Back to job" }
            {body}
        }
    }
}
