// SPDX-License-Identifier: MPL-2.0
//! Domain layer - what gets uploaded and what comes back.
//!
//! Nothing in here knows about Iced or HTTP, so every rule can be tested
//! on its own.
//!
//! # Modules
//!
//! - [`upload`]: The selected file and the checks it must pass
//!   ([`SelectedImage`](upload::SelectedImage), [`FileValidator`](upload::FileValidator))
//! - [`prediction`]: The classifier's answer
//!   ([`PredictionResult`](prediction::PredictionResult), [`Classification`](prediction::Classification))

pub mod prediction;
pub mod upload;
