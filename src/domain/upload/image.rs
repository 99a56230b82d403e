// SPDX-License-Identifier: MPL-2.0
//! The image the user picked, as it will be uploaded.
//!
//! A file is first *probed* (name, MIME type, size) without reading its body,
//! validated, and only then read into memory. Oversized files are therefore
//! refused without being loaded.

use super::validator::FileValidator;
use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// MIME type reported when neither content nor extension identify the file.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Extensions offered by the file dialog filter.
pub const SUPPORTED_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// Enough leading bytes for every signature `image::guess_format` knows.
const SNIFF_LEN: u64 = 64;

/// Name, type and size of a file on disk, read without loading its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProbe {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

impl FileProbe {
    /// Inspects `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path cannot be read or is not a file.
    pub fn inspect(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::Io(format!("{} is not a file", path.display())));
        }

        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name: file_name_of(path),
            mime: detect_mime(path, &head).to_string(),
            size: metadata.len(),
        })
    }
}

/// Content sniffing first, extension second.
///
/// The extension lookup covers image types `image_rs` cannot decode
/// (SVG, HEIC, ...), so they still report an `image/*` type.
#[must_use]
pub fn detect_mime(path: &Path, head: &[u8]) -> &'static str {
    image_rs::guess_format(head)
        .map(|format| format.to_mime_type())
        .ok()
        .or_else(|| mime_guess::from_path(path).first_raw())
        .unwrap_or(UNKNOWN_MIME)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// A validated image held in memory until reset or replaced.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    path: PathBuf,
    file_name: String,
    mime: String,
    size: u64,
    bytes: Arc<Vec<u8>>,
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("path", &self.path)
            .field("mime", &self.mime)
            .field("size", &self.size)
            .finish()
    }
}

impl SelectedImage {
    /// Probes, validates and reads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the file is not an acceptable image
    /// and [`Error::Io`] if it cannot be read.
    pub fn load(path: &Path, validator: &FileValidator) -> Result<Self> {
        let probe = FileProbe::inspect(path)?;
        validator.validate(&probe.mime, probe.size)?;

        let bytes = std::fs::read(path)?;
        Ok(Self::from_parts(probe, bytes))
    }

    /// Builds a selection from an already probed file and its contents.
    ///
    /// The size reported afterwards is the length of `bytes`.
    #[must_use]
    pub fn from_parts(probe: FileProbe, bytes: Vec<u8>) -> Self {
        Self {
            path: probe.path,
            file_name: probe.file_name,
            mime: probe.mime,
            size: bytes.len() as u64,
            bytes: Arc::new(bytes),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
