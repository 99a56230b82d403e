// SPDX-License-Identifier: MPL-2.0
//! Local checks a file must pass before it is sent for analysis.

use crate::config::DEFAULT_MAX_FILE_SIZE;
use std::fmt;

/// Every accepted MIME type starts with this prefix.
pub const IMAGE_MIME_PREFIX: &str = "image/";

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Reasons a selected file is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The detected MIME type is not `image/*`.
    NotAnImage { mime: String },
    /// The file is larger than the configured ceiling.
    TooLarge { size: u64, limit: u64 },
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::NotAnImage { .. } => "error-invalid-image-type",
            ValidationError::TooLarge { .. } => "error-file-too-large",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnImage { .. } => write!(f, "Please select a valid image file"),
            ValidationError::TooLarge { limit, .. } => {
                write!(f, "File size exceeds {} limit", format_size_limit(*limit))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks MIME type and byte size of a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileValidator {
    max_file_size: u64,
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl FileValidator {
    #[must_use]
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Accepts `image/*` files no larger than the ceiling.
    ///
    /// The type is checked first, so an oversized non-image reports the
    /// type error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] describing the first failed check.
    pub fn validate(&self, mime: &str, size: u64) -> Result<(), ValidationError> {
        if !mime.starts_with(IMAGE_MIME_PREFIX) {
            return Err(ValidationError::NotAnImage {
                mime: mime.to_string(),
            });
        }
        if size > self.max_file_size {
            return Err(ValidationError::TooLarge {
                size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }
}

/// Renders a byte ceiling the way users read it: `10MB`, `1.5MB`, `512KB`.
#[must_use]
pub fn format_size_limit(bytes: u64) -> String {
    if bytes >= MIB {
        format_unit(bytes, MIB, "MB")
    } else if bytes >= KIB {
        format_unit(bytes, KIB, "KB")
    } else {
        format!("{bytes} bytes")
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_unit(bytes: u64, unit: u64, suffix: &str) -> String {
    if bytes % unit == 0 {
        format!("{}{suffix}", bytes / unit)
    } else {
        format!("{:.1}{suffix}", bytes as f64 / unit as f64)
    }
}
