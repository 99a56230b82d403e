// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! `App::update` borrows the pieces of state a message may touch into an
//! [`UpdateContext`] and hands it to [`handle_message`]. Side effects (file
//! dialog, file reads, the prediction request) are returned as `Task`s whose
//! completions come back as messages.

use super::state::UploadState;
use super::Message;
use crate::client::PredictionClient;
use crate::config::{self, Config};
use crate::domain::upload::{FileValidator, SelectedImage, SUPPORTED_EXTENSIONS};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Mutable view over the application state used by the update loop.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub upload: &'a mut UploadState,
    pub client: &'a PredictionClient,
    pub validator: FileValidator,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    /// Whether preference changes are written to `settings.toml`.
    pub persist_preferences: bool,
    /// i18n key of the startup notice, if one is shown.
    pub notice: &'a mut Option<String>,
}

/// Applies `message` and returns the follow-up work.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::OpenFileDialog => open_file_dialog(ctx.i18n.tr("upload-dialog-filter")),
        Message::FileDialogResult(Some(path)) => load_image(path, ctx.validator),
        Message::FileDialogResult(None) => {
            debug!("file dialog closed without a selection");
            Task::none()
        }
        Message::FileHovered => {
            ctx.upload.set_drag_active(true);
            Task::none()
        }
        Message::FilesHoveredLeft => {
            ctx.upload.set_drag_active(false);
            Task::none()
        }
        Message::FileDropped(path) => {
            if ctx.upload.accept_drop() {
                load_image(path, ctx.validator)
            } else {
                debug!(path = %path.display(), "ignoring extra file from the same drop");
                Task::none()
            }
        }
        Message::ImageLoaded(result) => {
            handle_image_loaded(ctx, result);
            Task::none()
        }
        Message::Analyze => handle_analyze(ctx),
        Message::PredictionCompleted { request, outcome } => {
            if ctx.upload.finish(request, outcome) {
                log_prediction(ctx.upload);
            }
            Task::none()
        }
        Message::Reset => {
            debug!("resetting upload state");
            ctx.upload.reset();
            Task::none()
        }
        Message::ToggleTheme => {
            handle_toggle_theme(ctx);
            Task::none()
        }
        Message::DismissNotice => {
            *ctx.notice = None;
            Task::none()
        }
    }
}

fn log_prediction(upload: &UploadState) {
    if let Some(result) = upload.result() {
        info!(
            prediction = result.prediction().as_str(),
            confidence = result.confidence(),
            "prediction received"
        );
    } else if let Some(err) = upload.error() {
        warn!("prediction failed: {err}");
    }
}

/// Probes, validates and reads `path` off the UI thread.
pub fn load_image(path: PathBuf, validator: FileValidator) -> Task<Message> {
    debug!(path = %path.display(), "loading image");
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || SelectedImage::load(&path, &validator))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        Message::ImageLoaded,
    )
}

fn open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &SUPPORTED_EXTENSIONS[..])
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

fn handle_image_loaded(ctx: &mut UpdateContext<'_>, result: Result<SelectedImage, Error>) {
    match result {
        Ok(image) => {
            info!(
                file = image.file_name(),
                mime = image.mime(),
                size = image.size(),
                "image selected"
            );
            ctx.upload.select(image);
        }
        Err(err) => {
            warn!("image rejected: {err}");
            ctx.upload.reject(err);
        }
    }
}

fn handle_analyze(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some((request, image)) = ctx.upload.begin_submit() else {
        return Task::none();
    };

    let client = ctx.client.clone();
    Task::perform(
        async move { client.predict(&image).await },
        move |outcome| Message::PredictionCompleted { request, outcome },
    )
}

fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) {
    let next = ctx.theme_mode.toggled();
    *ctx.theme_mode = next;
    ctx.config.general.theme_mode = next;
    debug!(?next, "theme changed");

    if ctx.persist_preferences {
        if let Err(err) = config::save(ctx.config) {
            warn!("failed to save theme preference: {err}");
        }
    }
}
