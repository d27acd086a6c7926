//! Roster terminal shell
//!
//! Renders the directory screen as text and feeds typed commands to
//! `roster_state::ViewController`.

pub mod commands;
pub mod config;
pub mod error;
pub mod screen;

pub use commands::{Command, ParseError, HELP};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use screen::{render, LinePrompter, TerminalNotifier};
