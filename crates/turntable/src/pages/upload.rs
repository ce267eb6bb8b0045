use dioxus::prelude::*;
use turntable_core::{ImageFile, JobBackend, MockBackend, paths};
use turntable_io::{BackLink, BlobPreviews, Card, Page, UploadForm, UploadStaging};

use crate::Route;

/// Photo upload page.
///
/// Owns the staging store for as long as the page is mounted; leaving the
/// page releases every preview URL.
#[component]
pub fn Upload() -> Element {
    let backend = use_context::<MockBackend>();
    let mut staging = use_signal(|| UploadStaging::new(BlobPreviews));
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    use_drop(move || {
        if let Ok(mut set) = staging.try_write() {
            set.clear();
        }
    });

    let on_submit = move |images: Vec<ImageFile>| {
        if pending() {
            return;
        }
        pending.set(true);
        error.set(None);
        let backend = backend.clone();
        spawn(async move {
            match backend.create_job(images).await {
                Ok(id) => {
                    staging.write().clear();
                    navigator().push(Route::JobProgress { id: id.to_string() });
                }
                Err(e) => {
                    tracing::warn!("job creation failed: {e}");
                    error.set(Some(format!("Could not start processing: {e}")));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        Page {
            BackLink { to: paths::HOME }
            Card {
                title: "Upload product photos",
                description: "Add 3–6 JPG or PNG images from different angles. We’ll build a rotatable 3D model.",
                UploadForm { staging, pending: pending(), on_submit }
                if let Some(err) = error() {
                    p { class: "text-sm text-(--text-error)", role: "alert", "{err}" }
                }
            }
        }
    }
}
