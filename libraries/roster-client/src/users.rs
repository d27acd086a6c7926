//! `/users` resource operations.

use crate::error::{ClientError, Result};
use reqwest::{Client, Response};
use roster_core::{NewUser, User};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Users resource client.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get all users.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching users");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let users: Vec<User> = decode(response, "users").await?;

        debug!(users = users.len(), "Fetched users");
        Ok(users)
    }

    /// Create a user.
    ///
    /// Returns the record echoed by the server, including the id it
    /// assigned. No deduplication happens on this side.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, username = %new_user.username, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(new_user)
            .send()
            .await
            .map_err(transport_error)?;
        let user: User = decode(response, "created user").await?;

        debug!(id = %user.id, "User created");
        Ok(user)
    }
}

fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
