/// Favorite identifier set
use super::UserId;
use serde::{Deserialize, Serialize};

/// Ordered set of favorite user IDs
///
/// Insertion order is kept so the persisted JSON array is stable, but the
/// collection behaves as a set: an ID appears at most once, and two sets
/// compare equal when they hold the same IDs in any order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<UserId>", into = "Vec<UserId>")]
pub struct FavoriteIds(Vec<UserId>);

impl FavoriteIds {
    /// Empty set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Collect IDs, keeping the first occurrence of any duplicate
    pub fn from_ids(ids: impl IntoIterator<Item = UserId>) -> Self {
        let mut out = Vec::new();
        for id in ids {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        Self(out)
    }

    /// Decode the persisted JSON form (an array of integers)
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Encode to the persisted JSON form
    pub fn to_json(&self) -> String {
        // A Vec of integers always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Membership test
    pub fn contains(&self, id: UserId) -> bool {
        self.0.contains(&id)
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is marked
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.0.iter().copied()
    }

    /// IDs as a slice, in insertion order
    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    /// New set with `id` removed if present, appended otherwise
    pub fn toggled(&self, id: UserId) -> Self {
        let mut next = self.0.clone();
        if let Some(pos) = next.iter().position(|&existing| existing == id) {
            next.remove(pos);
        } else {
            next.push(id);
        }
        Self(next)
    }
}

impl PartialEq for FavoriteIds {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for FavoriteIds {}

impl From<Vec<UserId>> for FavoriteIds {
    fn from(ids: Vec<UserId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<FavoriteIds> for Vec<UserId> {
    fn from(ids: FavoriteIds) -> Self {
        ids.0
    }
}

impl FromIterator<UserId> for FavoriteIds {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
