// SPDX-License-Identifier: MPL-2.0
//! Selecting an image and deciding whether it may be uploaded.

pub mod image;
pub mod validator;

pub use image::{FileProbe, SelectedImage, SUPPORTED_EXTENSIONS};
pub use validator::{format_size_limit, FileValidator, ValidationError};
