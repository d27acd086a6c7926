//! User-facing notices
//!
//! Every failed action produces a notice naming the operation that failed.
//! The underlying error goes to the log, never into the notice text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action category a notice refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Initial directory load
    Load,
    /// Add-user form submission
    Add,
    /// Clear-all-favorites
    Clear,
}

/// Severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// The action succeeded
    Success,
    /// Input was rejected before anything happened
    Warning,
    /// The action failed
    Error,
}

/// A message for the end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub operation: Operation,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, operation: Operation, message: &str) -> Self {
        Self {
            level,
            operation,
            message: message.to_string(),
        }
    }

    pub fn load_failed() -> Self {
        Self::new(
            NoticeLevel::Error,
            Operation::Load,
            "Could not load users. Check your connection.",
        )
    }

    pub fn missing_fields() -> Self {
        Self::new(
            NoticeLevel::Warning,
            Operation::Add,
            "Please enter both a name and an email.",
        )
    }

    pub fn add_failed() -> Self {
        Self::new(NoticeLevel::Error, Operation::Add, "Could not add user.")
    }

    pub fn user_added(name: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            operation: Operation::Add,
            message: format!("Added {}.", name),
        }
    }

    pub fn favorites_cleared() -> Self {
        Self::new(NoticeLevel::Success, Operation::Clear, "Favorites cleared.")
    }

    pub fn clear_failed() -> Self {
        Self::new(
            NoticeLevel::Error,
            Operation::Clear,
            "Could not clear favorites.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Sink for notices, implemented by whatever renders the screen
pub trait Notifier: Send {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order; handy for tests and for batching redraws.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::clear_failed().to_string(),
            "[error] Could not clear favorites."
        );
        assert_eq!(Notice::user_added("Jane").to_string(), "[ok] Added Jane.");
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut sink: Vec<Notice> = Vec::new();
        sink.notify(Notice::load_failed());
        sink.notify(Notice::favorites_cleared());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].operation, Operation::Load);
        assert!(sink[0].is_error());
        assert!(!sink[1].is_error());
    }
}
