/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// Every failure surfaced to the view layer falls into one of three
/// categories. Library crates keep their own richer errors and convert into
/// this one at the seam traits.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Transport or HTTP failure while talking to the directory service
    #[error("Network error: {0}")]
    Network(String),

    /// Local read/write/remove failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// A required form field was empty
    #[error("Validation error: {0}")]
    Validation(String),
}

impl RosterError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Short category name, safe to show to end users.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Storage(_) => "storage",
            Self::Validation(_) => "validation",
        }
    }
}
