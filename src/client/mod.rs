// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote classification service.
//!
//! One call per analysis: the selected image is posted as a multipart form
//! to `{base}/api/predict` under the `image` field, and the JSON answer is
//! turned into a [`PredictionResult`].
//!
//! # Wire format
//!
//! - success: `{ "prediction": "synthetic" | "real", "confidence": 0.0..=1.0 }`
//! - failure: any status, optionally with `{ "error": "message" }`
//!
//! There is no retry and no timeout policy; the caller's loading flag is the
//! only guard against duplicate submits.

use crate::config::PREDICT_PATH;
use crate::domain::prediction::{Classification, PredictionResult};
use crate::domain::upload::SelectedImage;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// Result type for prediction requests.
pub type PredictionOutcome = Result<PredictionResult, PredictionError>;

/// Errors that can occur while asking the service for a verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The service answered with a failure status or an `error` body.
    Server { status: u16, message: Option<String> },
    /// The request never got an answer (connection, DNS, TLS, body read).
    Transport(String),
    /// A success status with a body that is not a usable verdict.
    InvalidResponse(String),
}

impl PredictionError {
    /// The service's own explanation, if it sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            PredictionError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns the i18n message key for the generic fallback text.
    pub fn i18n_key(&self) -> &'static str {
        "error-prediction-failed"
    }
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::Server {
                status,
                message: Some(message),
            } => write!(f, "Server error ({status}): {message}"),
            PredictionError::Server {
                status,
                message: None,
            } => write!(f, "Server error ({status})"),
            PredictionError::Transport(msg) => write!(f, "Request failed: {msg}"),
            PredictionError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for PredictionError {}

/// Everything the service may put in a JSON body.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    prediction: Option<Classification>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

/// Client bound to one prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    /// Creates a client for the service rooted at `api_url`.
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("SynthLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!("falling back to default HTTP client: {err}");
                reqwest::Client::default()
            });

        Self {
            http,
            endpoint: endpoint_url(api_url),
        }
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Uploads `image` and waits for the verdict.
    ///
    /// # Errors
    ///
    /// See [`PredictionError`].
    pub async fn predict(&self, image: &SelectedImage) -> PredictionOutcome {
        info!(
            endpoint = %self.endpoint,
            file = image.file_name(),
            size = image.size(),
            "requesting prediction"
        );

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime())
            .map_err(|e| PredictionError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, "prediction response received");

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Appends the predict path to `api_url`, ignoring trailing slashes.
#[must_use]
pub fn endpoint_url(api_url: &str) -> String {
    format!("{}{PREDICT_PATH}", api_url.trim().trim_end_matches('/'))
}

/// Turns a raw status and body into a verdict or an error.
///
/// # Errors
///
/// Non-2xx statuses become [`PredictionError::Server`] (with the body's
/// `error` string when present). A 2xx body carrying `error` is treated the
/// same way. A 2xx body without a valid verdict is
/// [`PredictionError::InvalidResponse`].
pub fn interpret_response(status: u16, body: &[u8]) -> PredictionOutcome {
    let parsed = serde_json::from_slice::<PredictResponse>(body);

    if !(200..300).contains(&status) {
        let message = parsed.ok().and_then(|response| response.error);
        return Err(PredictionError::Server { status, message });
    }

    let response =
        parsed.map_err(|e| PredictionError::InvalidResponse(format!("malformed JSON: {e}")))?;

    if let Some(message) = response.error {
        return Err(PredictionError::Server {
            status,
            message: Some(message),
        });
    }

    let prediction = response
        .prediction
        .ok_or_else(|| PredictionError::InvalidResponse("missing prediction".to_string()))?;
    let confidence = response
        .confidence
        .ok_or_else(|| PredictionError::InvalidResponse("missing confidence".to_string()))?;

    PredictionResult::new(prediction, confidence)
        .map_err(|e| PredictionError::InvalidResponse(e.to_string()))
}
