//! Dioxus UI components for turntable.
//!
//! Provides the upload form, job status card, 3D viewer, export buttons,
//! embed snippet, and the page shell they sit in.

mod embed;
mod export;
mod job_status;
mod layout;
mod model_viewer;
mod upload;

pub use embed::EmbedSnippet;
pub use export::{ExportButton, ExportButtons};
pub use job_status::{JobStatusCard, StepProgress, WarningList};
pub use layout::{BackLink, Card, Page};
pub use model_viewer::{ModelViewer, ModelViewerScript, ViewerActions, ViewerHeader, model_viewer_markup};
pub use upload::{Dropzone, FileList, SubmitButton, UploadForm, ValidationBanner};
