// SPDX-License-Identifier: MPL-2.0
//! Upload state machine.
//!
//! Holds everything the upload screen shows: the selected image and its
//! preview, the last verdict, the last error, and the `loading` and
//! `drag_active` flags. The visible phase is derived from those fields.
//!
//! Every in-flight request carries a [`RequestId`]. A completion is accepted
//! only while loading and only for the latest request, so answers that arrive
//! after a reset or a new selection are dropped.

use crate::client::{PredictionError, PredictionOutcome};
use crate::domain::prediction::PredictionResult;
use crate::domain::upload::SelectedImage;
use crate::error::Error;
use iced::widget::image::Handle;
use tracing::debug;

/// What the upload screen currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected: drop zone and browse button.
    Idle,
    /// An image is selected and can be analyzed.
    Preview,
    /// A request is in flight.
    Loading,
    /// A verdict is on screen.
    Result,
}

/// Identifies one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestId(u64);

#[derive(Debug, Default)]
pub struct UploadState {
    selected: Option<SelectedImage>,
    preview: Option<Handle>,
    result: Option<PredictionResult>,
    error: Option<Error>,
    loading: bool,
    drag_active: bool,
    hover_seen: bool,
    current_request: RequestId,
}

impl UploadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::Result
        } else if self.selected.is_some() {
            Phase::Preview
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Replaces the selection and clears result and error.
    ///
    /// A request still in flight is abandoned.
    pub fn select(&mut self, image: SelectedImage) {
        self.preview = Some(Handle::from_bytes(image.bytes().to_vec()));
        self.selected = Some(image);
        self.result = None;
        self.error = None;
        self.abandon_request();
    }

    /// Shows `error` without touching the current selection.
    pub fn reject(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// Starts a submission.
    ///
    /// Returns the image to upload and the id its completion must carry.
    /// Returns `None` while a request is already in flight, and also when
    /// nothing is selected (the "select an image first" error is shown).
    pub fn begin_submit(&mut self) -> Option<(RequestId, SelectedImage)> {
        if self.loading {
            debug!("submit ignored, a request is already in flight");
            return None;
        }
        let Some(image) = self.selected.clone() else {
            self.error = Some(Error::NoImageSelected);
            return None;
        };

        self.current_request = RequestId(self.current_request.0 + 1);
        self.loading = true;
        self.error = None;
        Some((self.current_request, image))
    }

    /// Stores the verdict of request `id`.
    ///
    /// Returns `false` (and changes nothing) for stale or unexpected
    /// completions.
    pub fn complete(&mut self, id: RequestId, result: PredictionResult) -> bool {
        if !self.accepts(id) {
            return false;
        }
        self.loading = false;
        self.result = Some(result);
        self.error = None;
        true
    }

    /// Stores the failure of request `id`. Same acceptance rule as
    /// [`complete`](Self::complete).
    pub fn fail(&mut self, id: RequestId, error: PredictionError) -> bool {
        if !self.accepts(id) {
            return false;
        }
        self.loading = false;
        self.error = Some(Error::Prediction(error));
        true
    }

    /// Routes a finished request to [`complete`](Self::complete) or
    /// [`fail`](Self::fail).
    pub fn finish(&mut self, id: RequestId, outcome: PredictionOutcome) -> bool {
        match outcome {
            Ok(result) => self.complete(id, result),
            Err(error) => self.fail(id, error),
        }
    }

    /// Clears selection, preview, result and error together.
    pub fn reset(&mut self) {
        self.selected = None;
        self.preview = None;
        self.result = None;
        self.error = None;
        self.abandon_request();
    }

    /// Hover feedback while files are dragged over the window.
    pub fn set_drag_active(&mut self, active: bool) {
        if active {
            self.hover_seen = true;
        }
        self.drag_active = active;
    }

    /// Decides whether a dropped file should be loaded, and ends the drag.
    ///
    /// When several files are dropped at once only the first is taken: the
    /// hover flag is consumed by the first drop. Platforms that never report
    /// hovering accept every drop.
    pub fn accept_drop(&mut self) -> bool {
        let accept = self.drag_active || !self.hover_seen;
        self.drag_active = false;
        accept
    }

    fn accepts(&self, id: RequestId) -> bool {
        let accepted = self.loading && id == self.current_request;
        if !accepted {
            debug!(?id, "discarding stale prediction outcome");
        }
        accepted
    }

    fn abandon_request(&mut self) {
        if self.loading {
            debug!(id = ?self.current_request, "abandoning in-flight request");
        }
        self.loading = false;
    }
}
