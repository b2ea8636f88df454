//! Trait definitions for the data providers behind the detail screen.
//!
//! The UI is written against these contracts only; any backend (remote
//! document store, local session, test double) can stand behind them.

use std::future::Future;

use mikan_core::models::{Anime, AnimePosterResponse, AnimeReviews, User};

/// Supplies anime metadata records in the external API's wire shape.
pub trait MetadataProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the full detail record for one anime.
    fn get_anime(&self, anime_id: &str)
        -> impl Future<Output = Result<Anime, Self::Error>> + Send;

    /// Fetch the poster catalog in the API's envelope shape.
    fn get_catalog(&self)
        -> impl Future<Output = Result<AnimePosterResponse, Self::Error>> + Send;
}

/// Owns the current user's profile and keyed favorite/watched maps.
///
/// Every mutation returns the refreshed [`User`] snapshot; the view
/// re-renders purely from its inputs, never from retained copies.
pub trait UserStateProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn current_user(&self) -> impl Future<Output = Result<User, Self::Error>> + Send;

    fn add_favorite(&self, anime: Anime)
        -> impl Future<Output = Result<User, Self::Error>> + Send;

    fn remove_favorite(&self, anime_id: &str)
        -> impl Future<Output = Result<User, Self::Error>> + Send;

    fn add_watched(&self, anime: Anime)
        -> impl Future<Output = Result<User, Self::Error>> + Send;

    fn remove_watched(&self, anime_id: &str)
        -> impl Future<Output = Result<User, Self::Error>> + Send;
}

/// Stores reviews per anime, in caller-visible order.
pub trait ReviewStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reviews for an anime. Unknown ids yield an empty container,
    /// not an error.
    fn get_reviews(&self, anime_id: &str)
        -> impl Future<Output = Result<AnimeReviews, Self::Error>> + Send;

    /// Append a review; the store stamps author and creation time.
    /// Returns the refreshed review sequence.
    fn add_review(
        &self,
        anime_id: &str,
        text: String,
        rating: i64,
    ) -> impl Future<Output = Result<AnimeReviews, Self::Error>> + Send;
}
