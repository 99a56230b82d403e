// SPDX-License-Identifier: MPL-2.0
use crate::client::PredictionError;
use crate::domain::upload::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The selected file was rejected before any request was made.
    Validation(ValidationError),
    /// The prediction request failed or returned an unusable answer.
    Prediction(PredictionError),
    /// Analyze was requested while nothing is selected.
    NoImageSelected,
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-read-file",
            Error::Config(_) => "error-config",
            Error::Validation(err) => err.i18n_key(),
            Error::Prediction(err) => err.i18n_key(),
            Error::NoImageSelected => "error-no-image-selected",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Validation(e) => write!(f, "{}", e),
            Error::Prediction(e) => write!(f, "{}", e),
            Error::NoImageSelected => write!(f, "Please select an image first"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<PredictionError> for Error {
    fn from(err: PredictionError) -> Self {
        Error::Prediction(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn validation_error_converts_and_keeps_key() {
        let err: Error = ValidationError::NotAnImage {
            mime: "text/plain".into(),
        }
        .into();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.i18n_key(), "error-invalid-image-type");
        assert_eq!(err.to_string(), "Please select a valid image file");
    }

    #[test]
    fn prediction_error_converts_and_keeps_key() {
        let err: Error = PredictionError::Transport("connection refused".into()).into();
        assert!(matches!(err, Error::Prediction(_)));
        assert_eq!(err.i18n_key(), "error-prediction-failed");
    }

    #[test]
    fn no_image_selected_message() {
        assert_eq!(
            Error::NoImageSelected.to_string(),
            "Please select an image first"
        );
        assert_eq!(Error::NoImageSelected.i18n_key(), "error-no-image-selected");
    }
}
