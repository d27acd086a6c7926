//! Favorites persistence
//!
//! Stores the favorite ID set as JSON text under a single well-known key.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{FavoriteIds, UserId};
//! use roster_storage::{FavoritesRepository, MemoryStore};
//!
//! # async fn example() -> roster_core::Result<()> {
//! let repo = FavoritesRepository::new(MemoryStore::new());
//! assert_eq!(repo.load().await?, None);
//!
//! repo.save(&FavoriteIds::from_ids([UserId::new(2), UserId::new(5)])).await?;
//! assert_eq!(repo.load().await?.as_deref(), Some("[2,5]"));
//!
//! repo.clear().await?;
//! assert_eq!(repo.load().await?, None);
//! # Ok(())
//! # }
//! ```

use roster_core::{FavoriteIds, KeyValueStore, Result};
use tracing::debug;

/// Key the favorite ID list is stored under
pub const FAVORITES_KEY: &str = "@my_favorites_ids";

/// Reads and writes the persisted favorite set
#[derive(Debug)]
pub struct FavoritesRepository<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesRepository<S> {
    /// Repository over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw stored JSON, or `None` if never written (or cleared)
    ///
    /// Decoding is left to the caller so that a malformed value can be
    /// handled without failing the read.
    pub async fn load(&self) -> Result<Option<String>> {
        let raw = self.store.get(FAVORITES_KEY).await?;
        debug!(present = raw.is_some(), "Loaded favorites");
        Ok(raw)
    }

    /// Overwrite the stored set
    pub async fn save(&self, ids: &FavoriteIds) -> Result<()> {
        self.store.set(FAVORITES_KEY, &ids.to_json()).await?;
        debug!(count = ids.len(), "Saved favorites");
        Ok(())
    }

    /// Remove the stored set. Clearing an absent key succeeds.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(FAVORITES_KEY).await?;
        debug!("Cleared favorites");
        Ok(())
    }
}
