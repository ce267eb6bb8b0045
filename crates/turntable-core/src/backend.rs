//! Job backend contract and the mock implementation used today.
//!
//! [`JobBackend`] is the boundary between the UI and whatever eventually
//! runs background removal and reconstruction. [`MockBackend`] stands in
//! for it: it validates submissions like a real server would, then
//! returns canned records.

use crate::config::AppConfig;
use crate::job::{Job, JobStatus, ViewerModel};
use crate::types::{ContentType, ExportFormat, ImageFile, JobId, StagedFile, now_millis};
use crate::validate::{MAX_FILES, MIN_FILES, ValidationIssue, validate};

/// Id returned by [`MockBackend::create_job`].
pub const MOCK_JOB_ID: &str = "mock-id";

/// Errors reported by a [`JobBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The submission had too few or too many images.
    #[error("expected {min} to {max} images, got {count}", min = MIN_FILES, max = MAX_FILES)]
    InvalidImageCount {
        /// Number of images received.
        count: usize,
    },

    /// An image was not JPEG or PNG.
    #[error("{name}: unsupported content type {content_type:?} (only JPG and PNG are allowed)")]
    UnsupportedContentType {
        /// Filename of the offending image.
        name: String,
        /// Content type it was sent with.
        content_type: String,
    },

    /// No job exists with this id.
    #[error("job {0} not found")]
    JobNotFound(JobId),
}

/// Operations the UI needs from the conversion service.
///
/// Client-side validation is not a security boundary: implementations
/// must re-check submissions in [`create_job`](Self::create_job).
#[allow(async_fn_in_trait)] // single-threaded WASM callers; Send bounds not needed
pub trait JobBackend {
    /// Submit an ordered photo set and create a job.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidImageCount`] or
    /// [`BackendError::UnsupportedContentType`] if the set breaks the
    /// submission policy.
    async fn create_job(&self, images: Vec<ImageFile>) -> Result<JobId, BackendError>;

    /// Fetch a job. `Ok(None)` means no such job.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn get_job(&self, id: &JobId) -> Result<Option<Job>, BackendError>;

    /// Fetch the model to show in the viewer. `Ok(None)` means no such job.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn get_viewer_model(&self, id: &JobId) -> Result<Option<ViewerModel>, BackendError>;

    /// Request a download URL for an export format.
    ///
    /// `Ok(None)` means the job exists but has no output in that format.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::JobNotFound`] if the job does not exist.
    async fn request_export(
        &self,
        id: &JobId,
        format: ExportFormat,
    ) -> Result<Option<String>, BackendError>;
}

/// Backend returning fixed data.
///
/// Every non-empty id names a completed job whose GLB output is the
/// configured sample model. No USDZ output is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockBackend {
    sample_glb_url: String,
}

impl MockBackend {
    /// Create a mock serving `sample_glb_url` as every job's model.
    #[must_use]
    pub fn new(sample_glb_url: impl Into<String>) -> Self {
        Self {
            sample_glb_url: sample_glb_url.into(),
        }
    }

    /// Create a mock from application config.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.sample_glb_url.clone())
    }

    fn canned_job(&self, id: &JobId) -> Job {
        Job {
            id: id.clone(),
            status: JobStatus::Completed,
            created_at_ms: now_millis(),
            output_glb_url: Some(self.sample_glb_url.clone()),
            output_usdz_url: None,
            warnings: Vec::new(),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl JobBackend for MockBackend {
    async fn create_job(&self, images: Vec<ImageFile>) -> Result<JobId, BackendError> {
        match validate(images.iter().map(StagedFile::content_type)).issue() {
            None => {}
            Some(ValidationIssue::TooFew { .. } | ValidationIssue::TooMany { .. }) => {
                return Err(BackendError::InvalidImageCount {
                    count: images.len(),
                });
            }
            Some(ValidationIssue::UnsupportedType) => {
                let bad = images
                    .iter()
                    .find(|f| ContentType::from_mime(f.content_type()).is_none());
                return Err(BackendError::UnsupportedContentType {
                    name: bad.map(|f| f.name().to_owned()).unwrap_or_default(),
                    content_type: bad.map(|f| f.content_type().to_owned()).unwrap_or_default(),
                });
            }
        }

        let total: usize = images.iter().map(ImageFile::size).sum();
        tracing::info!("created job {MOCK_JOB_ID} from {} images ({total} bytes)", images.len());
        Ok(JobId::new(MOCK_JOB_ID))
    }

    async fn get_job(&self, id: &JobId) -> Result<Option<Job>, BackendError> {
        if id.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.canned_job(id)))
    }

    async fn get_viewer_model(&self, id: &JobId) -> Result<Option<ViewerModel>, BackendError> {
        if id.is_empty() {
            return Ok(None);
        }
        Ok(Some(ViewerModel {
            glb_url: self.sample_glb_url.clone(),
        }))
    }

    async fn request_export(
        &self,
        id: &JobId,
        format: ExportFormat,
    ) -> Result<Option<String>, BackendError> {
        let job = self
            .get_job(id)
            .await?
            .ok_or_else(|| BackendError::JobNotFound(id.clone()))?;
        let url = job.output_url(format).map(str::to_owned);
        tracing::debug!("export {format} for job {id}: {url:?}");
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn photos(n: usize) -> Vec<ImageFile> {
        (0..n)
            .map(|i| ImageFile::new(format!("{i}.jpg"), "image/jpeg", vec![0u8; 8]))
            .collect()
    }

    #[test]
    fn create_job_accepts_three_to_six() {
        let backend = MockBackend::default();
        for n in 3..=6 {
            let id = block_on(backend.create_job(photos(n))).unwrap();
            assert_eq!(id.as_str(), MOCK_JOB_ID);
        }
    }

    #[test]
    fn create_job_rejects_bad_counts() {
        let backend = MockBackend::default();
        assert_eq!(
            block_on(backend.create_job(photos(2))),
            Err(BackendError::InvalidImageCount { count: 2 })
        );
        assert_eq!(
            block_on(backend.create_job(photos(7))),
            Err(BackendError::InvalidImageCount { count: 7 })
        );
    }

    #[test]
    fn create_job_rejects_unsupported_type() {
        let mut images = photos(3);
        images.push(ImageFile::new("clip.gif", "image/gif", vec![]));
        let err = block_on(MockBackend::default().create_job(images)).unwrap_err();
        assert_eq!(
            err,
            BackendError::UnsupportedContentType {
                name: "clip.gif".into(),
                content_type: "image/gif".into(),
            }
        );
        assert!(err.to_string().contains("only JPG and PNG"));
    }

    #[test]
    fn get_job_returns_completed_mock() {
        let backend = MockBackend::new("https://cdn.example/a.glb");
        let job = block_on(backend.get_job(&JobId::new("abc"))).unwrap().unwrap();
        assert_eq!(job.id.as_str(), "abc");
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.output_glb_url.as_deref(), Some("https://cdn.example/a.glb"));
        assert!(job.output_usdz_url.is_none());
        assert!(job.warnings.is_empty());
    }

    #[test]
    fn empty_id_is_not_found() {
        let backend = MockBackend::default();
        let empty = JobId::new("");
        assert_eq!(block_on(backend.get_job(&empty)), Ok(None));
        assert_eq!(block_on(backend.get_viewer_model(&empty)), Ok(None));
        assert_eq!(
            block_on(backend.request_export(&empty, ExportFormat::Glb)),
            Err(BackendError::JobNotFound(empty))
        );
    }

    #[test]
    fn viewer_model_uses_sample() {
        let backend = MockBackend::new("https://cdn.example/b.glb");
        let model = block_on(backend.get_viewer_model(&JobId::new("x"))).unwrap();
        assert_eq!(model.unwrap().glb_url, "https://cdn.example/b.glb");
    }

    #[test]
    fn export_returns_url_only_for_produced_formats() {
        let backend = MockBackend::new("https://cdn.example/c.glb");
        let id = JobId::new("x");
        assert_eq!(
            block_on(backend.request_export(&id, ExportFormat::Glb)),
            Ok(Some("https://cdn.example/c.glb".into()))
        );
        assert_eq!(block_on(backend.request_export(&id, ExportFormat::Usdz)), Ok(None));
    }
}
