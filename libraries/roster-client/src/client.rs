//! Main directory service client.

use crate::error::{ClientError, Result};
use crate::types::DirectoryConfig;
use crate::users::UsersClient;
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{DirectoryApi, NewUser, User};
use tracing::debug;

/// Client for the remote user directory.
///
/// # Example
///
/// ```ignore
/// use roster_client::{DirectoryClient, DirectoryConfig};
///
/// let client = DirectoryClient::new(DirectoryConfig::default())?;
/// let users = client.list_users().await?;
/// println!("Fetched {} users", users.len());
///
/// let jane = client.create("Jane", "jane@example.com").await?;
/// println!("Server assigned id {}", jane.id);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    url: String,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(url = %url, "Directory client created");

        Ok(Self { http, url })
    }

    /// Get the normalized base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a client for the `/users` resource.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.url)
    }

    /// Fetch every user.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.users().list().await
    }

    /// Create a user from the two add-form fields.
    ///
    /// The payload is derived with [`NewUser::from_form`]; blank fields are
    /// rejected before any request is sent.
    pub async fn create(&self, name: &str, email: &str) -> Result<User> {
        let new_user =
            NewUser::from_form(name, email).map_err(|e| ClientError::InvalidInput(e.to_string()))?;
        self.users().create(&new_user).await
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn fetch_all(&self) -> roster_core::Result<Vec<User>> {
        Ok(self.users().list().await?)
    }

    async fn create_user(&self, new_user: &NewUser) -> roster_core::Result<User> {
        Ok(self.users().create(new_user).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(DirectoryClient::new(DirectoryConfig::new("https://example.com")).is_ok());
        assert!(DirectoryClient::new(DirectoryConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(DirectoryClient::new(DirectoryConfig::new("")).is_err());
        assert!(DirectoryClient::new(DirectoryConfig::new("not-a-url")).is_err());
        assert!(DirectoryClient::new(DirectoryConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            DirectoryClient::new(DirectoryConfig::new("https://example.com//")).expect("valid url");
        assert_eq!(client.url(), "https://example.com");
    }
}
