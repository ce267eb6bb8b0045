//! turntable-core: upload staging, job model and backend contract (sans-IO).
//!
//! Product photos flow through:
//! staging (add / reorder / remove, validated) -> job creation ->
//! status polling -> 3D view -> export or embed.
//!
//! This crate has **no browser dependencies**. It operates on in-memory
//! files and returns plain data; all DOM, Blob URL and clipboard
//! interaction lives in `turntable-io`.

pub mod backend;
pub mod config;
pub mod embed;
pub mod job;
pub mod paths;
pub mod staging;
pub mod types;
pub mod validate;

pub use backend::{BackendError, JobBackend, MOCK_JOB_ID, MockBackend};
pub use config::AppConfig;
pub use job::{Job, JobStatus, STEPS, Step, StepState, ViewerModel};
pub use staging::{Direction, EntryId, NoPreviews, PreviewAllocator, StagedEntry, StagingSet};
pub use types::{ACCEPT, ContentType, ExportFormat, ImageFile, JobId, StagedFile};
pub use validate::{MAX_FILES, MIN_FILES, Validation, ValidationIssue};
