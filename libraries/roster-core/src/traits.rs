/// Core traits for Roster
use crate::error::Result;
use crate::types::{NewUser, User};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote user directory
///
/// Implementers talk to the REST service that owns the user records.
/// Identifiers are assigned by the service; callers never invent them.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch every user record the service knows about
    ///
    /// # Errors
    /// Returns `RosterError::Network` on transport failure, non-2xx status,
    /// or an undecodable body
    async fn fetch_all(&self) -> Result<Vec<User>>;

    /// Create a user and return the record echoed by the service
    ///
    /// # Errors
    /// Returns `RosterError::Network` if the request fails
    async fn create_user(&self, new_user: &NewUser) -> Result<User>;
}

/// String key-value persistence
///
/// A missing key is not an error: `get` returns `None` and `remove` succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`
    async fn remove(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}

#[async_trait]
impl<T: DirectoryApi + ?Sized> DirectoryApi for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<User>> {
        (**self).fetch_all().await
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        (**self).create_user(new_user).await
    }
}
