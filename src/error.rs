use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Service error {status}")]
    Api { status: StatusCode },

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl AppError {
    /// The notification text shown to the user. The service gives us nothing
    /// actionable to surface, so every failure kind gets the same message.
    pub fn user_friendly_message(&self) -> String {
        "Something went wrong.".to_string()
    }
}
