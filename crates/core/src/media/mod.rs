//! Selected media and the preview references derived from it.
//!
//! A `MediaFile` is the raw upload: a name, a MIME type and the bytes. A
//! `PreviewRef` is the locally resolvable handle a frontend uses to play the
//! file back without reading it again.

mod preview;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub use preview::{PreviewRef, PreviewRegistry};

/// Errors raised while loading media from disk.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read media file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An uploaded file held in memory.
///
/// Cloning is cheap; the content is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl MediaFile {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self { name: name.into(), mime: mime.into(), bytes: Arc::from(bytes) }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    ///
    /// Unknown extensions map to `application/octet-stream`, which the
    /// controller will reject as not being a video.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MediaError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| MediaError::Read { path: path.to_path_buf(), source })?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let name = path
            .file_name()
            .and_then(|os_str| os_str.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(name, mime.essence_str(), bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the MIME type is in the `video/` family.
    pub fn is_video(&self) -> bool {
        self.mime.starts_with("video/")
    }
}

// Content is elided from debug output.
impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
