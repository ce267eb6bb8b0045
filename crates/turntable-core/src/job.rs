//! Job records and the status progression shown on the job page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ExportFormat, JobId};

/// Lifecycle state of a conversion job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Photos received, work not started.
    Pending,
    /// Background removal and reconstruction running.
    Processing,
    /// Model ready to view and export.
    Completed,
    /// Conversion failed. Nothing produces this yet.
    Failed,
}

impl JobStatus {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether the status can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Index of this status in [`STEPS`], or `None` for [`Self::Failed`].
    #[must_use]
    pub const fn step_index(self) -> Option<usize> {
        match self {
            Self::Pending => Some(0),
            Self::Processing => Some(1),
            Self::Completed => Some(2),
            Self::Failed => None,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conversion job as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job identifier.
    pub id: JobId,
    /// Current status.
    pub status: JobStatus,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// URL of the GLB output, once available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_glb_url: Option<String>,
    /// URL of the USDZ output, once available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_usdz_url: Option<String>,
    /// Non-fatal issues found while processing (e.g. blurry photos).
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Job {
    /// Whether the 3D view is reachable.
    #[must_use]
    pub fn is_viewable(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Whether to show the (disabled) retry affordance.
    #[must_use]
    pub fn shows_retry(&self) -> bool {
        self.status == JobStatus::Failed
    }

    /// Output URL for an export format, if produced.
    #[must_use]
    pub fn output_url(&self, format: ExportFormat) -> Option<&str> {
        match format {
            ExportFormat::Glb => self.output_glb_url.as_deref(),
            ExportFormat::Usdz => self.output_usdz_url.as_deref(),
        }
    }

    /// Each progress step paired with its display state.
    #[must_use]
    pub fn progress(&self) -> [(Step, StepState); 3] {
        progress(self.status)
    }
}

/// What the viewer needs to render a job's model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerModel {
    /// URL of the GLB model.
    pub glb_url: String,
}

/// One entry in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Status this step represents.
    pub status: JobStatus,
    /// Label shown to the user.
    pub label: &'static str,
}

/// Progress steps in order. [`JobStatus::Failed`] is an outcome, not a step.
pub const STEPS: [Step; 3] = [
    Step {
        status: JobStatus::Pending,
        label: "Uploaded",
    },
    Step {
        status: JobStatus::Processing,
        label: "Processing",
    },
    Step {
        status: JobStatus::Completed,
        label: "Ready",
    },
];

/// Display state of a progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Not reached yet.
    Pending,
    /// In progress.
    Active,
    /// Done.
    Completed,
}

impl StepState {
    /// Value for the `data-state` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// State of the step at `index` when the job is at `active`.
#[must_use]
pub const fn step_state(index: usize, active: usize) -> StepState {
    if index < active {
        StepState::Completed
    } else if index == active {
        StepState::Active
    } else {
        StepState::Pending
    }
}

/// Map a job status onto the progress steps.
///
/// Steps before the current one are completed, the current one is
/// active, later ones are pending. A failed job has no step of its own
/// and is shown at the first step.
#[must_use]
pub fn progress(status: JobStatus) -> [(Step, StepState); 3] {
    let active = status.step_index().unwrap_or(0);
    let mut index = 0;
    STEPS.map(|step| {
        let state = step_state(index, active);
        index += 1;
        (step, state)
    })
}
