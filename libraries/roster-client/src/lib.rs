//! Roster Directory Client
//!
//! HTTP client for the REST user directory the app is built around.
//!
//! # Features
//!
//! - **List**: `GET <base>/users`
//! - **Create**: `POST <base>/users` with a payload derived from the add form
//!
//! No retries are attempted. Every failure is returned to the caller, which
//! decides what the user sees.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{DirectoryClient, DirectoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(DirectoryConfig::default())?;
//!     for user in client.list_users().await? {
//!         println!("{} <{}>", user.name, user.email);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

pub use client::DirectoryClient;
pub use error::{ClientError, Result};
pub use types::{DirectoryConfig, DEFAULT_BASE_URL};
pub use users::UsersClient;
