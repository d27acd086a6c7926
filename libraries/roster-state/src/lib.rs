//! Roster - Session State
//!
//! Platform-agnostic state for the directory screen.
//!
//! This crate provides:
//! - Favorites Store (toggle, clear, load with malformed-data fallback)
//! - Directory Store (wholesale load, prepend on create)
//! - The favorites-only filter
//! - `ViewController`, which sequences startup and dispatches user actions
//!
//! # Architecture
//!
//! `roster-state` never renders anything. The shell supplies:
//! - a `DirectoryApi` (usually `roster_client::DirectoryClient`)
//! - a `KeyValueStore` (usually `roster_storage::RedbStore`)
//! - a `Notifier` that shows notices
//! - a `Prompter` for the clear-favorites confirmation
//!
//! Everything runs on one logical task. The controller is mutated through
//! `&mut self`, so no locking is involved.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::DirectoryApi;
//! use roster_state::{Confirmation, Notice, ViewController};
//! use roster_storage::{FavoritesRepository, MemoryStore};
//! # async fn example(client: impl DirectoryApi) {
//! let notices: Vec<Notice> = Vec::new();
//! let mut screen = ViewController::new(
//!     client,
//!     FavoritesRepository::new(MemoryStore::new()),
//!     notices,
//! );
//!
//! screen.start().await;
//! let first = screen.visible_users().next().map(|u| u.id);
//! if let Some(first) = first {
//!     screen.toggle_favorite(first).await;
//! }
//! screen.toggle_filter();
//! screen.clear_favorites(&mut Confirmation::Cancel).await;
//! # }
//! ```

mod controller;
mod directory;
mod favorites;
mod notice;
mod prompt;

pub use controller::{ClearOutcome, LoadState, ViewController};
pub use directory::{filter_users, DirectoryStore};
pub use favorites::{FavoritesStore, ToggleOutcome};
pub use notice::{Notice, NoticeLevel, Notifier, Operation};
pub use prompt::{Confirmation, Prompt, Prompter, CLEAR_FAVORITES_PROMPT};
