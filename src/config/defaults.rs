// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Prediction API Defaults
// ==========================================================================

/// Base URL of the prediction service when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path appended to the base URL for classification requests.
pub const PREDICT_PATH: &str = "/api/predict";

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Largest file accepted for analysis, in bytes (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

// ==========================================================================
// Environment Variables
// ==========================================================================

/// Overrides the prediction service base URL.
pub const ENV_API_URL: &str = "API_URL";

/// Overrides the upload size ceiling (bytes).
pub const ENV_MAX_FILE_SIZE: &str = "MAX_FILE_SIZE";
