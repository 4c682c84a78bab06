//! Error types for the Mailjet transport.

use thiserror::Error;

/// Result type for Mailjet payload operations.
pub type MailjetResult<T> = Result<T, MailjetError>;

/// Errors that can occur while translating a message into a Mailjet payload.
#[derive(Debug, Error)]
pub enum MailjetError {
    /// The message uses a feature the Send API cannot express.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A Mailjet header carries a value that cannot be coerced to its field type.
    #[error("Invalid value for header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Payload (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MailjetError {
    pub(crate) fn invalid_header(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for MailjetError {
    fn from(err: serde_json::Error) -> Self {
        MailjetError::Serialization(err.to_string())
    }
}
