//! Directory Store and the favorites filter

use roster_core::{FavoriteIds, User, UserId};

/// In-memory list of user records, newest additions first
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    users: Vec<User>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list
    pub fn initialize_from(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Put an already-created record at the front
    pub fn prepend(&mut self, user: User) {
        self.users.insert(0, user);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users to display; see [`filter_users`]
    pub fn filtered<'a>(
        &'a self,
        show_favorites_only: bool,
        favorites: &'a FavoriteIds,
    ) -> impl Iterator<Item = &'a User> + 'a {
        filter_users(&self.users, show_favorites_only, favorites)
    }
}

/// Lazy view over `users`.
///
/// With the flag off every user is yielded in order. With it on only users
/// whose id is in `favorites` are yielded, still in their original order.
pub fn filter_users<'a>(
    users: &'a [User],
    show_favorites_only: bool,
    favorites: &'a FavoriteIds,
) -> impl Iterator<Item = &'a User> + 'a {
    users
        .iter()
        .filter(move |user| !show_favorites_only || favorites.contains(user.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn user(id: i64) -> User {
        User {
            id: UserId::new(id),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            username: None,
            phone: None,
            website: None,
            company: None,
            extra: Map::new(),
        }
    }

    fn ids_of<'a>(users: impl Iterator<Item = &'a User>) -> Vec<i64> {
        users.map(|u| u.id.get()).collect()
    }

    #[test]
    fn test_prepend_puts_new_user_first() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1), user(2)]);
        directory.prepend(user(11));

        assert_eq!(ids_of(directory.users().iter()), vec![11, 1, 2]);
    }

    #[test]
    fn test_initialize_replaces_wholesale() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1)]);
        directory.initialize_from(vec![user(5), user(6)]);
        assert_eq!(ids_of(directory.users().iter()), vec![5, 6]);
    }

    #[test]
    fn test_filter_off_returns_everything() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1), user(2), user(3)]);
        let favorites = FavoriteIds::from_ids([UserId::new(2)]);

        assert_eq!(ids_of(directory.filtered(false, &favorites)), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_on_keeps_favorites_in_order() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1), user(2), user(3), user(4)]);
        let favorites = FavoriteIds::from_ids([UserId::new(4), UserId::new(2), UserId::new(99)]);

        assert_eq!(ids_of(directory.filtered(true, &favorites)), vec![2, 4]);
    }

    #[test]
    fn test_filter_on_with_no_favorites_is_empty() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1), user(2)]);

        assert_eq!(directory.filtered(true, &FavoriteIds::new()).count(), 0);
    }

    #[test]
    fn test_get() {
        let mut directory = DirectoryStore::new();
        directory.initialize_from(vec![user(1), user(2)]);
        assert_eq!(directory.get(UserId::new(2)).unwrap().name, "User 2");
        assert!(directory.get(UserId::new(3)).is_none());
    }
}
