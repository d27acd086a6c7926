//! View Controller
//!
//! Owns all session state for the single screen and turns user actions into
//! store mutations, remote calls, and notices.
//!
//! Lifecycle:
//! 1. Created in [`LoadState::Loading`]
//! 2. [`ViewController::start`] fetches the directory, then loads favorites,
//!    then moves to [`LoadState::Ready`] whatever the outcome
//! 3. All later actions run against `Ready`; there is no way back
//!
//! Favorite toggles, adds, and clears issued while still `Loading` are
//! refused, since `start` would overwrite their effects.

use crate::directory::DirectoryStore;
use crate::favorites::{FavoritesStore, ToggleOutcome};
use crate::notice::{Notice, Notifier};
use crate::prompt::{Confirmation, Prompter, CLEAR_FAVORITES_PROMPT};
use roster_core::{
    DirectoryApi, FavoriteIds, KeyValueStore, NewUser, Result, RosterError, User, UserId,
};
use roster_storage::FavoritesRepository;
use tracing::{debug, error, info, warn};

/// Screen load state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Outcome of a clear-favorites request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// User backed out, or the screen was not ready; nothing changed
    Cancelled,
    Cleared,
    /// Storage refused; in-memory set untouched
    Failed,
}

/// Session state plus action dispatch
pub struct ViewController<A, S, N> {
    api: A,
    directory: DirectoryStore,
    favorites: FavoritesStore<S>,
    notifier: N,
    state: LoadState,
    show_favorites_only: bool,
}

impl<A, S, N> ViewController<A, S, N>
where
    A: DirectoryApi,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn new(api: A, favorites: FavoritesRepository<S>, notifier: N) -> Self {
        Self {
            api,
            directory: DirectoryStore::new(),
            favorites: FavoritesStore::new(favorites),
            notifier,
            state: LoadState::Loading,
            show_favorites_only: false,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn directory(&self) -> &DirectoryStore {
        &self.directory
    }

    pub fn favorites(&self) -> &FavoriteIds {
        self.favorites.ids()
    }

    pub fn is_favorite(&self, id: UserId) -> bool {
        self.favorites.contains(id)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Run the startup sequence once.
    ///
    /// A failed directory fetch shows a load notice; a failed favorites
    /// read is only logged. Either way the screen becomes ready.
    pub async fn start(&mut self) {
        if self.is_ready() {
            debug!("Startup already completed");
            return;
        }

        match self.api.fetch_all().await {
            Ok(users) => {
                info!(users = users.len(), "Directory loaded");
                self.directory.initialize_from(users);
            }
            Err(e) => {
                error!(error = %e, "Failed to load directory");
                self.notifier.notify(Notice::load_failed());
            }
        }

        if let Err(e) = self.favorites.load().await {
            warn!(error = %e, "Failed to load favorites, starting empty");
        }

        self.state = LoadState::Ready;
        info!(
            users = self.directory.len(),
            favorites = self.favorites.len(),
            "Screen ready"
        );
    }

    /// Users to display under the current filter
    pub fn visible_users(&self) -> impl Iterator<Item = &User> + '_ {
        self.directory
            .filtered(self.show_favorites_only, self.favorites.ids())
    }

    /// Flip the favorites-only filter, returning the new value
    pub fn toggle_filter(&mut self) -> bool {
        self.show_favorites_only = !self.show_favorites_only;
        debug!(show_favorites_only = self.show_favorites_only, "Filter toggled");
        self.show_favorites_only
    }

    /// Add or remove `id` from favorites. `None` while still loading.
    pub async fn toggle_favorite(&mut self, id: UserId) -> Option<ToggleOutcome> {
        if !self.is_ready() {
            warn!(id = %id, "Toggle ignored, screen still loading");
            return None;
        }
        Some(self.favorites.toggle(id).await)
    }

    /// Create a user from the add form and put it at the top of the list.
    ///
    /// Blank fields are rejected without any request being sent, as is any
    /// add issued before the screen is ready.
    pub async fn add_user(&mut self, name: &str, email: &str) -> Result<UserId> {
        if !self.is_ready() {
            warn!("Add ignored, screen still loading");
            return Err(RosterError::validation("Screen is still loading"));
        }

        let new_user = match NewUser::from_form(name, email) {
            Ok(new_user) => new_user,
            Err(e) => {
                debug!(error = %e, "Add form rejected");
                self.notifier.notify(Notice::missing_fields());
                return Err(e);
            }
        };

        match self.api.create_user(&new_user).await {
            Ok(user) => {
                let id = user.id;
                info!(id = %id, name = %user.name, "User added");
                self.notifier.notify(Notice::user_added(&user.name));
                self.directory.prepend(user);
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Failed to add user");
                self.notifier.notify(Notice::add_failed());
                Err(e)
            }
        }
    }

    /// Ask for confirmation, then wipe all favorites.
    pub async fn clear_favorites<P: Prompter>(&mut self, prompter: &mut P) -> ClearOutcome {
        if !self.is_ready() {
            warn!("Clear ignored, screen still loading");
            return ClearOutcome::Cancelled;
        }

        if prompter.confirm(&CLEAR_FAVORITES_PROMPT).await == Confirmation::Cancel {
            debug!("Clear favorites cancelled");
            return ClearOutcome::Cancelled;
        }

        match self.favorites.clear_all().await {
            Ok(()) => {
                info!("Favorites cleared");
                self.notifier.notify(Notice::favorites_cleared());
                ClearOutcome::Cleared
            }
            Err(e) => {
                error!(error = %e, "Failed to clear favorites");
                self.notifier.notify(Notice::clear_failed());
                ClearOutcome::Failed
            }
        }
    }
}
