//! Roster Core
//!
//! Platform-agnostic types, traits, and error handling shared by every Roster
//! crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `FavoriteIds`
//! - **Core Traits**: `DirectoryApi` (remote user directory) and
//!   `KeyValueStore` (local persistence)
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{FavoriteIds, NewUser, UserId};
//!
//! let favorites = FavoriteIds::new().toggled(UserId::new(7));
//! assert!(favorites.contains(UserId::new(7)));
//!
//! let draft = NewUser::from_form("Jane Doe", "jane@example.com").unwrap();
//! assert_eq!(draft.username, "janedoe");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, RosterError};
pub use traits::{DirectoryApi, KeyValueStore};
pub use types::{Company, FavoriteIds, NewUser, User, UserId};
