//! Domain types for Roster

mod favorites;
mod ids;
mod user;

pub use favorites::FavoriteIds;
pub use ids::UserId;
pub use user::{
    derive_username, Company, NewUser, User, PLACEHOLDER_COMPANY, PLACEHOLDER_PHONE,
    PLACEHOLDER_WEBSITE,
};
