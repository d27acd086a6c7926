//! Error types for the directory client.

use roster_core::RosterError;
use thiserror::Error;

/// Errors that can occur when talking to the directory service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to decode the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Form input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for RosterError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidInput(msg) => RosterError::Validation(msg),
            other => RosterError::network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_network() {
        let err: RosterError = ClientError::ServerError {
            status: 503,
            message: "down".into(),
        }
        .into();
        assert!(matches!(err, RosterError::Network(msg) if msg.contains("503")));
    }

    #[test]
    fn test_invalid_input_maps_to_validation() {
        let err: RosterError = ClientError::InvalidInput("name is required".into()).into();
        assert!(matches!(err, RosterError::Validation(_)));
    }
}
