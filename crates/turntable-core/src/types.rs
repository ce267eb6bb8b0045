//! Shared types for the turntable upload and job model.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Value for the file picker's `accept` attribute.
pub const ACCEPT: &str = "image/jpeg,image/png";

/// MIME type reported for files whose type cannot be determined.
const UNKNOWN_MIME: &str = "application/octet-stream";

/// An image content type accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
}

impl ContentType {
    /// Both accepted content types.
    pub const ALL: [Self; 2] = [Self::Jpeg, Self::Png];

    /// Parse a MIME string. Returns `None` for anything other than the
    /// two accepted image types.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.mime() == mime)
    }

    /// The canonical MIME string.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Determine the MIME type of a file.
///
/// The image header is checked first, so a PNG renamed to `.jpg` is
/// still reported as `image/png`. Files with no recognizable header fall
/// back to a guess from the extension.
#[must_use]
pub fn sniff_content_type(name: &str, bytes: &[u8]) -> String {
    image::guess_format(bytes).map_or_else(
        |_| mime_from_extension(name).to_owned(),
        |format| format.to_mime_type().to_owned(),
    )
}

/// Guess a MIME type from a filename extension.
fn mime_from_extension(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return UNKNOWN_MIME;
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => UNKNOWN_MIME,
    }
}

/// Anything the staging store can hold: it only needs a display name
/// and a content type.
pub trait StagedFile {
    /// Original filename as chosen by the user.
    fn name(&self) -> &str;

    /// MIME type of the file contents.
    fn content_type(&self) -> &str;
}

/// An in-memory image file.
///
/// This is the platform-neutral file handle: the browser reads picked or
/// dropped files into it, and the CLI reads files from disk into it.
/// The bytes are shared, so cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    content_type: String,
    bytes: Arc<[u8]>,
}

impl ImageFile {
    /// Create a file with an explicit content type.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a file, detecting its content type with [`sniff_content_type`].
    #[must_use]
    pub fn sniffed(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = sniff_content_type(&name, &bytes);
        Self::new(name, content_type, bytes)
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the file in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl StagedFile for ImageFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// Identifier of a conversion job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Wrap a job identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty identifier, which never names a job.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A downloadable 3D model format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Binary glTF, for the web and Shopify.
    Glb,
    /// Universal Scene Description archive, for Apple AR Quick Look.
    Usdz,
}

impl ExportFormat {
    /// Both formats, in button order.
    pub const ALL: [Self; 2] = [Self::Glb, Self::Usdz];

    /// Lowercase identifier, also the file extension.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Glb => "glb",
            Self::Usdz => "usdz",
        }
    }

    /// Uppercase name shown to users.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glb => "GLB",
            Self::Usdz => "USDZ",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Glb => "Download GLB",
            Self::Usdz => "Download USDZ",
        }
    }

    /// MIME type of the exported file.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Glb => "model/gltf-binary",
            Self::Usdz => "model/vnd.usdz+zip",
        }
    }

    /// Download filename for a job's export.
    #[must_use]
    pub fn filename(self, job: &JobId) -> String {
        format!("{job}.{}", self.slug())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Milliseconds since the Unix epoch.
///
/// Uses `web_time` so the same call works in the browser and natively.
#[must_use]
pub fn now_millis() -> u64 {
    web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn content_type_from_mime_accepts_only_jpeg_and_png() {
        assert_eq!(ContentType::from_mime("image/jpeg"), Some(ContentType::Jpeg));
        assert_eq!(ContentType::from_mime("image/png"), Some(ContentType::Png));
        assert_eq!(ContentType::from_mime("image/gif"), None);
        assert_eq!(ContentType::from_mime("image/jpg"), None);
        assert_eq!(ContentType::from_mime(""), None);
    }

    #[test]
    fn accept_lists_every_content_type() {
        for kind in ContentType::ALL {
            assert!(ACCEPT.split(',').any(|m| m == kind.mime()), "{kind} missing from ACCEPT");
        }
    }

    #[test]
    fn sniff_prefers_header_over_extension() {
        assert_eq!(sniff_content_type("front.jpg", PNG_HEADER), "image/png");
        assert_eq!(sniff_content_type("side.png", JPEG_HEADER), "image/jpeg");
    }

    #[test]
    fn sniff_falls_back_to_extension() {
        assert_eq!(sniff_content_type("top.JPEG", b"not an image"), "image/jpeg");
        assert_eq!(sniff_content_type("notes.txt", b"hello"), UNKNOWN_MIME);
        assert_eq!(sniff_content_type("no-extension", b""), UNKNOWN_MIME);
    }

    #[test]
    fn image_file_sniffed_sets_content_type() {
        let file = ImageFile::sniffed("back.bin", PNG_HEADER.to_vec());
        assert_eq!(file.name(), "back.bin");
        assert_eq!(file.content_type(), "image/png");
        assert_eq!(file.size(), PNG_HEADER.len());
    }

    #[test]
    fn image_file_clone_shares_bytes() {
        let file = ImageFile::new("a.png", "image/png", vec![1, 2, 3]);
        let copy = file.clone();
        assert_eq!(file.bytes().as_ptr(), copy.bytes().as_ptr());
    }

    #[test]
    fn export_format_filename_uses_slug() {
        let job = JobId::new("abc");
        assert_eq!(ExportFormat::Glb.filename(&job), "abc.glb");
        assert_eq!(ExportFormat::Usdz.filename(&job), "abc.usdz");
        assert_eq!(ExportFormat::Usdz.label(), "Download USDZ");
    }

    #[test]
    fn export_format_download_type_hint() {
        assert_eq!(ExportFormat::Glb.mime(), "model/gltf-binary");
        assert_eq!(ExportFormat::Usdz.mime(), "model/vnd.usdz+zip");
    }

    #[test]
    fn job_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&JobId::new("mock-id")).unwrap_or_default();
        assert_eq!(json, "\"mock-id\"");
    }

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
