//! Favorites Store
//!
//! In-memory favorite set mirrored to local storage on every mutation.
//!
//! The in-memory set is the observable state. It changes first, then the
//! write is issued. A failed write is logged and the in-memory set is kept,
//! so memory and disk can disagree until the next successful write.

use roster_core::{FavoriteIds, KeyValueStore, Result, UserId};
use roster_storage::FavoritesRepository;
use tracing::{debug, error, warn};

/// Result of a single toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub id: UserId,
    /// Membership after the toggle
    pub is_favorite: bool,
    /// Whether the new set reached storage
    pub persisted: bool,
}

/// Favorite IDs plus their persistence
#[derive(Debug)]
pub struct FavoritesStore<S> {
    ids: FavoriteIds,
    repo: FavoritesRepository<S>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Empty store writing through `repo`
    pub fn new(repo: FavoritesRepository<S>) -> Self {
        Self {
            ids: FavoriteIds::new(),
            repo,
        }
    }

    pub fn ids(&self) -> &FavoriteIds {
        &self.ids
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn repository(&self) -> &FavoritesRepository<S> {
        &self.repo
    }

    /// Replace the in-memory set from a persisted value.
    ///
    /// `None` and malformed JSON both leave the set empty; the latter is
    /// logged. Duplicate IDs in the stored value collapse to one.
    pub fn initialize_from(&mut self, raw: Option<&str>) {
        self.ids = match raw {
            None => FavoriteIds::new(),
            Some(raw) => match FavoriteIds::from_json(raw) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(error = %e, "Stored favorites are malformed, starting empty");
                    FavoriteIds::new()
                }
            },
        };
        debug!(count = self.ids.len(), "Favorites initialized");
    }

    /// Read the persisted set and initialize from it.
    ///
    /// On a storage error the set is left empty and the error returned.
    pub async fn load(&mut self) -> Result<()> {
        match self.repo.load().await {
            Ok(raw) => {
                self.initialize_from(raw.as_deref());
                Ok(())
            }
            Err(e) => {
                self.ids = FavoriteIds::new();
                Err(e)
            }
        }
    }

    /// Flip membership of `id` and persist the new set.
    ///
    /// Never fails: a storage error is logged and reported through
    /// `ToggleOutcome::persisted`, without rolling back.
    pub async fn toggle(&mut self, id: UserId) -> ToggleOutcome {
        self.ids = self.ids.toggled(id);
        let is_favorite = self.ids.contains(id);
        debug!(id = %id, is_favorite, "Favorite toggled");

        let persisted = match self.repo.save(&self.ids).await {
            Ok(()) => true,
            Err(e) => {
                error!(id = %id, error = %e, "Failed to persist favorites");
                false
            }
        };

        ToggleOutcome {
            id,
            is_favorite,
            persisted,
        }
    }

    /// Remove the persisted set, then empty the in-memory one.
    ///
    /// If storage fails nothing changes, so memory keeps matching disk.
    pub async fn clear_all(&mut self) -> Result<()> {
        self.repo.clear().await?;
        self.ids = FavoriteIds::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_storage::{MemoryStore, FAVORITES_KEY};

    fn store() -> FavoritesStore<MemoryStore> {
        FavoritesStore::new(FavoritesRepository::new(MemoryStore::new()))
    }

    #[test]
    fn test_initialize_from_absent() {
        let mut favorites = store();
        favorites.initialize_from(None);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_initialize_from_valid_json() {
        let mut favorites = store();
        favorites.initialize_from(Some("[2, 8, 2]"));
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains(UserId::new(2)));
        assert!(favorites.contains(UserId::new(8)));
    }

    #[test]
    fn test_initialize_from_malformed_json() {
        let mut favorites = store();
        favorites.initialize_from(Some("[1, 2"));
        assert!(favorites.is_empty());

        favorites.initialize_from(Some("\"oops\""));
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice() {
        let mut favorites = store();

        let first = favorites.toggle(UserId::new(7)).await;
        assert!(first.is_favorite);
        assert!(first.persisted);
        assert_eq!(
            favorites.repository().load().await.unwrap().as_deref(),
            Some("[7]")
        );

        let second = favorites.toggle(UserId::new(7)).await;
        assert!(!second.is_favorite);
        assert!(favorites.is_empty());
        assert_eq!(
            favorites.repository().load().await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_load_reads_persisted_value() {
        let repo = FavoritesRepository::new(MemoryStore::with_entries([(FAVORITES_KEY, "[4,5]")]));
        let mut favorites = FavoritesStore::new(repo);

        favorites.load().await.unwrap();
        assert_eq!(favorites.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let mut favorites = store();
        favorites.toggle(UserId::new(1)).await;
        favorites.toggle(UserId::new(2)).await;

        favorites.clear_all().await.unwrap();
        assert!(favorites.is_empty());
        assert_eq!(favorites.repository().load().await.unwrap(), None);
    }
}
