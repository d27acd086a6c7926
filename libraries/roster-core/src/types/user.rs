/// User domain types
use super::UserId;
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Phone number sent for users created from the add form
pub const PLACEHOLDER_PHONE: &str = "000-000-0000";

/// Website sent for users created from the add form
pub const PLACEHOLDER_WEBSITE: &str = "example.com";

/// Company name sent for users created from the add form
pub const PLACEHOLDER_COMPANY: &str = "Independent";

/// A user record as returned by the directory service
///
/// Only `id`, `name` and `email` are interpreted. The optional attributes are
/// carried through as-is, and anything else the service sends (addresses,
/// geo coordinates, ...) lands in `extra` so it survives a re-serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Service-assigned identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Login handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Phone number, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Personal website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Employer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,

    /// Attributes not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Company attached to a user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company name
    pub name: String,

    /// Attributes not modelled above (catch phrase, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    /// Company with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Payload for creating a user
///
/// Built from the two form fields; the rest is derived or filled with
/// placeholders because the service expects a complete record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    /// Display name, trimmed
    pub name: String,
    /// Contact email, trimmed
    pub email: String,
    /// Derived from `name`
    pub username: String,
    /// Always `PLACEHOLDER_PHONE`
    pub phone: String,
    /// Always `PLACEHOLDER_WEBSITE`
    pub website: String,
    /// Always `PLACEHOLDER_COMPANY`
    pub company: Company,
}

impl NewUser {
    /// Build a creation payload from the add-user form
    ///
    /// # Errors
    /// Returns `RosterError::Validation` if either field is blank
    pub fn from_form(name: &str, email: &str) -> Result<Self> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(RosterError::validation("name is required"));
        }
        if email.is_empty() {
            return Err(RosterError::validation("email is required"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            username: derive_username(name),
            phone: PLACEHOLDER_PHONE.to_string(),
            website: PLACEHOLDER_WEBSITE.to_string(),
            company: Company::named(PLACEHOLDER_COMPANY),
        })
    }
}

/// Lowercase `name` and drop all whitespace
pub fn derive_username(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
