// SPDX-License-Identifier: MPL-2.0
//! The classifier's verdict for one image.

use serde::Deserialize;
use std::fmt;

/// Which class the backend assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Classification {
    /// AI-generated.
    Synthetic,
    /// A real photograph.
    Real,
}

impl Classification {
    /// Maps a backend label. Only `synthetic` is special; any other label
    /// is shown as a real image.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("synthetic") {
            Classification::Synthetic
        } else {
            if !label.trim().eq_ignore_ascii_case("real") {
                tracing::warn!(label, "unknown prediction label, showing it as real");
            }
            Classification::Real
        }
    }

    /// Wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Synthetic => "synthetic",
            Classification::Real => "real",
        }
    }

    /// i18n key of the headline ("AI-Generated (Synthetic)" / "Real Image").
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Classification::Synthetic => "result-label-synthetic",
            Classification::Real => "result-label-real",
        }
    }

    /// i18n key of the one-line explanation under the score.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            Classification::Synthetic => "result-description-synthetic",
            Classification::Real => "result-description-real",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Classification::Synthetic => "🤖",
            Classification::Real => "✅",
        }
    }
}

impl From<String> for Classification {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a confidence is not a finite number in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceOutOfRange(pub f64);

impl fmt::Display for ConfidenceOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "confidence {} is outside [0, 1]", self.0)
    }
}

impl std::error::Error for ConfidenceOutOfRange {}

/// Classification plus the backend's probability for it.
///
/// `confidence` is always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    prediction: Classification,
    confidence: f64,
}

impl PredictionResult {
    /// # Errors
    ///
    /// Returns [`ConfidenceOutOfRange`] for NaN, infinities and values
    /// outside `[0, 1]`.
    pub fn new(prediction: Classification, confidence: f64) -> Result<Self, ConfidenceOutOfRange> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            prediction,
            // `-0.0 + 0.0` is `+0.0`
            confidence: confidence + 0.0,
        })
    }

    #[must_use]
    pub fn prediction(&self) -> Classification {
        self.prediction
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Confidence as shown to the user, e.g. `97.35%`.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// Formats a `[0, 1]` score as a percentage with two decimals.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0 + 0.0)
}
