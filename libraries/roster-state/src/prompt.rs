//! Two-choice confirmation before destructive actions

use async_trait::async_trait;

/// What the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Cancel,
    Confirm,
}

/// Text of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    /// Label of the destructive choice
    pub confirm_label: &'static str,
}

/// Dialog shown before wiping all favorites
pub const CLEAR_FAVORITES_PROMPT: Prompt = Prompt {
    title: "Clear favorites",
    message: "Remove every user from your favorites?",
    cancel_label: "Cancel",
    confirm_label: "Clear",
};

/// Asks the user to confirm or cancel
#[async_trait]
pub trait Prompter: Send {
    async fn confirm(&mut self, prompt: &Prompt) -> Confirmation;
}

/// Fixed answer, for scripted flows and tests
#[async_trait]
impl Prompter for Confirmation {
    async fn confirm(&mut self, _prompt: &Prompt) -> Confirmation {
        *self
    }
}
