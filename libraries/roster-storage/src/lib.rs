//! Roster Storage
//!
//! Local persistence for the favorites list.
//!
//! Two `KeyValueStore` backends are provided:
//! - [`RedbStore`]: an embedded redb database on disk
//! - [`MemoryStore`]: process-local, for tests
//!
//! [`FavoritesRepository`] sits on top of either and owns the storage key
//! and the JSON encoding of the favorite set.

mod error;
mod favorites;
mod memory;
mod redb_store;

pub use error::{Result, StorageError};
pub use favorites::{FavoritesRepository, FAVORITES_KEY};
pub use memory::MemoryStore;
pub use redb_store::RedbStore;
