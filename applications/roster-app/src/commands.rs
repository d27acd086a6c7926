//! Screen commands typed at the prompt

use roster_core::UserId;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  f <id>              toggle favorite
  a <name>, <email>   add a user
  v                   toggle favorites-only view
  c                   clear all favorites
  r                   redraw
  h                   this help
  q                   quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleFavorite(UserId),
    Add { name: String, email: String },
    ToggleFilter,
    ClearFavorites,
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}' (h for help)")]
    Unknown(String),

    #[error("Usage: f <id>")]
    BadId,

    #[error("Usage: a <name>, <email>")]
    BadAdd,
}

impl Command {
    /// Parse one input line. A blank line means redraw.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "" | "r" => Ok(Self::Redraw),
            "f" => rest
                .parse::<i64>()
                .map(|id| Self::ToggleFavorite(UserId::new(id)))
                .map_err(|_| ParseError::BadId),
            // Blank fields are passed through; the controller owns validation
            "a" => match rest.split_once(',') {
                Some((name, email)) => Ok(Self::Add {
                    name: name.trim().to_string(),
                    email: email.trim().to_string(),
                }),
                None if rest.is_empty() => Ok(Self::Add {
                    name: String::new(),
                    email: String::new(),
                }),
                None => Err(ParseError::BadAdd),
            },
            "v" => Ok(Self::ToggleFilter),
            "c" => Ok(Self::ClearFavorites),
            "h" | "?" => Ok(Self::Help),
            "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}
