//! Integration test: stage a photo set, submit it to the mock backend,
//! follow the job to the viewer, and build the embed snippet.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use futures::executor::block_on;
use turntable_core::job::progress;
use turntable_core::{
    AppConfig, Direction, ExportFormat, ImageFile, JobBackend, JobStatus, MockBackend, NoPreviews,
    StagedFile, StagingSet, StepState, embed, paths,
};

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

#[test]
fn photos_to_embed_snippet() {
    let config = AppConfig::default().with_overrides(Some("https://shop.example"), None, None, None);
    let backend = MockBackend::from_config(&config);

    // Sniffed types: the mislabelled PNG is kept, the text file is dropped.
    let mut staging = StagingSet::new(NoPreviews);
    let added = staging.add([
        ImageFile::sniffed("front.jpg", JPEG_HEADER.to_vec()),
        ImageFile::sniffed("notes.txt", b"front, side, back".to_vec()),
        ImageFile::sniffed("side.jpg", PNG_HEADER.to_vec()),
    ]);
    assert_eq!(added, 2);
    assert_eq!(
        staging.validation().message().as_deref(),
        Some("Add at least 3 images (1 more).")
    );

    staging.add([ImageFile::sniffed("back.png", PNG_HEADER.to_vec())]);
    assert!(staging.validation().is_valid());

    // Put the back shot second.
    let back = staging.entries()[2].id().clone();
    assert!(staging.move_entry(&back, Direction::Up));
    let order: Vec<_> = staging.files().map(|f| f.name().to_owned()).collect();
    assert_eq!(order, ["front.jpg", "back.png", "side.jpg"]);

    let images: Vec<ImageFile> = staging.files().cloned().collect();
    let job_id = block_on(backend.create_job(images)).expect("valid set should create a job");
    staging.clear();
    assert!(staging.is_empty());
    assert_eq!(paths::job(&job_id), "/jobs/mock-id");

    let job = block_on(backend.get_job(&job_id)).unwrap().expect("job exists");
    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.is_viewable());
    let states: Vec<StepState> = progress(job.status).iter().map(|&(_, s)| s).collect();
    assert_eq!(
        states,
        [StepState::Completed, StepState::Completed, StepState::Active],
        "a completed job shows Ready as the current step"
    );

    let model = block_on(backend.get_viewer_model(&job_id)).unwrap().expect("model exists");
    assert_eq!(Some(model.glb_url.as_str()), job.output_glb_url.as_deref());

    let glb = block_on(backend.request_export(&job_id, ExportFormat::Glb)).unwrap();
    assert_eq!(glb, Some(model.glb_url));
    let usdz = block_on(backend.request_export(&job_id, ExportFormat::Usdz)).unwrap();
    assert_eq!(usdz, None);

    let url = embed::embed_url(&config.app_url, Some(&job_id));
    let snippet = embed::iframe_snippet(&url);
    assert!(snippet.starts_with("<iframe src=\"https://shop.example/view/mock-id\""));
    assert!(snippet.ends_with("allowfullscreen></iframe>"));
}
