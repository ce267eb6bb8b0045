//! Reading picked or dropped files into memory.

use dioxus::html::FileData;
use turntable_core::ImageFile;

/// Read every file in a picker or drop event.
///
/// Content types are sniffed from the bytes rather than trusted from the
/// browser. Files that cannot be read are logged and skipped, matching
/// how the staging store silently drops unsupported files.
pub async fn read_image_files(files: Vec<FileData>) -> Vec<ImageFile> {
    let mut images = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => images.push(ImageFile::sniffed(name, bytes.to_vec())),
            Err(e) => tracing::warn!("failed to read {name}: {e}"),
        }
    }
    images
}
