use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use turntable_core::{AppConfig, Job, JobBackend, JobId, MockBackend, paths};
use turntable_io::{BackLink, JobStatusCard, Page};

use super::not_found::NotFoundNotice;

/// What the status page currently knows about its job.
#[derive(Debug, Clone, PartialEq)]
enum Lookup {
    Loading,
    Found(Job),
    Missing,
    Failed(String),
}

/// Job status page.
///
/// Polls the backend every `poll_interval_ms` until the job reaches a
/// terminal status. Navigating to another job restarts polling.
#[component]
pub fn JobProgress(id: String) -> Element {
    let config = use_context::<AppConfig>();
    let backend = use_context::<MockBackend>();
    let mut lookup = use_signal(|| Lookup::Loading);
    let interval = config.poll_interval_ms;

    let _poll = use_resource(use_reactive!(|(id,)| {
        let backend = backend.clone();
        async move {
            let id = JobId::new(id);
            lookup.set(Lookup::Loading);
            loop {
                match backend.get_job(&id).await {
                    Ok(Some(job)) => {
                        let done = job.status.is_terminal();
                        tracing::debug!("job {id} is {}", job.status);
                        lookup.set(Lookup::Found(job));
                        if done {
                            break;
                        }
                    }
                    Ok(None) => {
                        lookup.set(Lookup::Missing);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("status check for job {id} failed: {e}");
                        lookup.set(Lookup::Failed(e.to_string()));
                        break;
                    }
                }
                TimeoutFuture::new(interval).await;
            }
        }
    }));

    let body = match lookup() {
        Lookup::Loading => rsx! {
            p { class: "text-(--muted) animate-pulse", "Loading job…" }
        },
        Lookup::Found(job) => rsx! {
            JobStatusCard { job }
        },
        Lookup::Missing => rsx! {
            NotFoundNotice {}
        },
        Lookup::Failed(err) => rsx! {
            div { class: "bg-(--error-bg) border border-(--error-border) rounded p-3",
                p { class: "text-(--text-error) text-sm", "{err}" }
            }
        },
    };

    rsx! {
        Page {
            BackLink { to: paths::UPLOAD, label: "Back to upload" }
            {body}
        }
    }
}
