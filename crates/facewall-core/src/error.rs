//! Error types for Facewall

use thiserror::Error;

/// Main error type for Facewall operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// HTTP request to the profile API failed (connect, timeout, body read)
    #[error("Fetch error: {0}")]
    Http(#[from] reqwest::Error),

    /// Profile API answered with a non-success status code
    #[error("Profile API returned status {0}")]
    Api(reqwest::StatusCode),

    /// Response body was not the expected JSON envelope
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Date-of-birth field was too short or not dash-separated
    #[error("Malformed date of birth: {0:?}")]
    BadBirthday(String),

    /// Phone field did not contain a 3-3-4 digit grouping
    #[error("Malformed phone number: {0:?}")]
    BadPhone(String),

    /// Navigation requested over an empty batch
    #[error("Invalid state: cannot navigate an empty batch")]
    EmptyBatch,
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
