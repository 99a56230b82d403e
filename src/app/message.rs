// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::state::RequestId;
use crate::client::PredictionOutcome;
use crate::domain::upload::SelectedImage;
use crate::error::Error;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Browse Files" was pressed.
    OpenFileDialog,
    /// Result from the open file dialog.
    FileDialogResult(Option<PathBuf>),
    /// Files are being dragged over the window.
    FileHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A picked or dropped file was probed, validated and read.
    ImageLoaded(Result<SelectedImage, Error>),
    /// "Analyze Image" was pressed.
    Analyze,
    PredictionCompleted {
        request: RequestId,
        outcome: PredictionOutcome,
    },
    /// "Change Image" or "Analyze Another Image".
    Reset,
    ToggleTheme,
    /// Hide the startup notice (config could not be read).
    DismissNotice,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Image to preload as if it had been dropped.
    pub file_path: Option<String>,
    /// Base URL of the prediction service.
    pub api_url: Option<String>,
    /// Upload ceiling in bytes.
    pub max_file_size: Option<u64>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
