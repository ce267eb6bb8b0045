//! Export requests: ask the backend for a download URL, then download it.

use turntable_core::{BackendError, ExportFormat, JobBackend, JobId};

use crate::download::{self, DownloadError};

/// Errors from an export request.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The backend refused the request.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The browser could not start the download.
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),
}

/// What an export request achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The download was started.
    Downloaded,
    /// The job has no output in this format yet.
    Unavailable,
}

/// Request `format` for `job` and start the download if a URL comes back.
///
/// # Errors
///
/// Returns [`ExportError::Backend`] if the request fails and
/// [`ExportError::Download`] if the browser cannot start the download.
#[allow(clippy::future_not_send)] // WASM is single-threaded
pub async fn run_export<B: JobBackend>(
    backend: &B,
    job: &JobId,
    format: ExportFormat,
) -> Result<ExportOutcome, ExportError> {
    let Some(url) = backend.request_export(job, format).await? else {
        tracing::info!("no {format} output for job {job}");
        return Ok(ExportOutcome::Unavailable);
    };
    download::trigger_download(&url, &format.filename(job), format.mime())?;
    Ok(ExportOutcome::Downloaded)
}
