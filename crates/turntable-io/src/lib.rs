//! turntable-io: Browser I/O and Dioxus component library.
//!
//! Handles reading picked files, Blob URL previews, downloads and
//! clipboard writes, and provides the reusable UI components for the
//! turntable web application.

pub mod clipboard;
pub mod components;
pub mod download;
pub mod export;
pub mod files;
pub mod preview;

pub use components::{
    BackLink, Card, EmbedSnippet, ExportButton, ExportButtons, JobStatusCard, ModelViewer,
    ModelViewerScript, Page, UploadForm, ViewerActions, ViewerHeader,
};
pub use export::{ExportError, ExportOutcome, run_export};
pub use preview::{BlobPreviews, PreviewUrl, UploadStaging};
