use thiserror::Error;

/// Error taxonomy for API calls. The service layer performs no recovery;
/// every variant is surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum IntercomError {
    #[error("resource not found: {message}")]
    NotFound { message: String },

    #[error("validation rejected by API: {message}")]
    Validation { message: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected API response ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, IntercomError>;
