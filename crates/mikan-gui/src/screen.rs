pub mod details;

use mikan_core::models::Anime;

/// Actions a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state; the app interprets them in one place and owns the
/// single source of truth for user state.
#[derive(Debug, Clone)]
pub enum Action {
    /// No side-effect.
    None,
    /// Add this anime to the user's favorites.
    AddFavorite(Anime),
    /// Remove the anime with this id from favorites.
    RemoveFavorite(String),
    /// Mark this anime as watched.
    AddWatched(Anime),
    /// Unmark the anime with this id as watched.
    RemoveWatched(String),
    /// Post a review for the current anime.
    SubmitReview { text: String, rating: i64 },
    /// Re-fetch the detail data after a failed load.
    Reload,
}
