//! Internal page paths.
//!
//! Must agree with the `#[route]` attributes in the app crate.

use crate::types::JobId;

/// Landing page.
pub const HOME: &str = "/";

/// Upload page.
pub const UPLOAD: &str = "/upload";

/// Job status page.
#[must_use]
pub fn job(id: &JobId) -> String {
    format!("/jobs/{id}")
}

/// 3D view page.
#[must_use]
pub fn view(id: &JobId) -> String {
    format!("/view/{id}")
}

/// Embed snippet page for a model.
#[must_use]
pub fn embed(id: &JobId) -> String {
    format!("/embed?model={id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_paths() {
        let id = JobId::new("mock-id");
        assert_eq!(job(&id), "/jobs/mock-id");
        assert_eq!(view(&id), "/view/mock-id");
        assert_eq!(embed(&id), "/embed?model=mock-id");
    }
}
