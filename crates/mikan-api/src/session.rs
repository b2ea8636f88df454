//! Local session-backed implementation of the provider traits.
//!
//! Holds an anime catalog (embedded JSON in the metadata API's wire
//! shape) plus the user's profile and review store in memory. Cloneable
//! handle; all state lives behind one mutex so every mutation returns a
//! consistent snapshot.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use thiserror::Error;

use mikan_core::models::{
    Anime, AnimePosterNode, AnimePosterResponse, AnimeReview, AnimeReviews, User,
};

use crate::traits::{MetadataProvider, ReviewStore, UserStateProvider};

/// Built-in demo catalog, in the metadata API's record shape.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown anime id: {0}")]
    UnknownAnime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

struct SessionInner {
    catalog: Vec<Anime>,
    user: User,
    reviews: HashMap<String, AnimeReviews>,
}

/// Cloneable handle to the session state.
#[derive(Clone)]
pub struct SessionService {
    inner: Arc<Mutex<SessionInner>>,
}

impl SessionService {
    /// Open a session over the embedded catalog.
    pub fn embedded() -> Self {
        Self::from_catalog_json(EMBEDDED_CATALOG).expect("embedded catalog is valid JSON")
    }

    /// Open a session over a JSON array of anime records.
    pub fn from_catalog_json(json: &str) -> Result<Self, SessionError> {
        let catalog: Vec<Anime> = serde_json::from_str(json)?;
        tracing::debug!(count = catalog.len(), "catalog loaded");

        let user = User {
            uid: "local".into(),
            username: "guest".into(),
            ..User::default()
        };

        Ok(Self {
            inner: Arc::new(Mutex::new(SessionInner {
                catalog,
                user,
                reviews: HashMap::new(),
            })),
        })
    }

    /// Open a session over a catalog file on disk.
    pub fn from_catalog_file(path: &Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_catalog_json(&json)
    }

    /// Id of the first catalog entry, used as the default detail target.
    pub fn first_anime_id(&self) -> Option<String> {
        let inner = self.lock();
        inner.catalog.first().map(|a| a.id.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        // A poisoned lock means a panic mid-mutation; propagating the
        // poison here would only mask the original panic.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MetadataProvider for SessionService {
    type Error = SessionError;

    async fn get_anime(&self, anime_id: &str) -> Result<Anime, SessionError> {
        let inner = self.lock();
        inner
            .catalog
            .iter()
            .find(|a| a.id == anime_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownAnime(anime_id.to_string()))
    }

    async fn get_catalog(&self) -> Result<AnimePosterResponse, SessionError> {
        let inner = self.lock();
        Ok(AnimePosterResponse {
            data: inner.catalog.iter().map(AnimePosterNode::from).collect(),
        })
    }
}

impl UserStateProvider for SessionService {
    type Error = SessionError;

    async fn current_user(&self) -> Result<User, SessionError> {
        Ok(self.lock().user.clone())
    }

    async fn add_favorite(&self, anime: Anime) -> Result<User, SessionError> {
        let mut inner = self.lock();
        let node = AnimePosterNode::from(&anime);
        inner.user.anime_favorites.insert(anime.id, node);
        Ok(inner.user.clone())
    }

    async fn remove_favorite(&self, anime_id: &str) -> Result<User, SessionError> {
        let mut inner = self.lock();
        inner.user.anime_favorites.remove(anime_id);
        Ok(inner.user.clone())
    }

    async fn add_watched(&self, anime: Anime) -> Result<User, SessionError> {
        let mut inner = self.lock();
        let node = AnimePosterNode::from(&anime);
        inner.user.anime_watched.insert(anime.id, node);
        Ok(inner.user.clone())
    }

    async fn remove_watched(&self, anime_id: &str) -> Result<User, SessionError> {
        let mut inner = self.lock();
        inner.user.anime_watched.remove(anime_id);
        Ok(inner.user.clone())
    }
}

impl ReviewStore for SessionService {
    type Error = SessionError;

    async fn get_reviews(&self, anime_id: &str) -> Result<AnimeReviews, SessionError> {
        let inner = self.lock();
        Ok(inner.reviews.get(anime_id).cloned().unwrap_or_default())
    }

    async fn add_review(
        &self,
        anime_id: &str,
        text: String,
        rating: i64,
    ) -> Result<AnimeReviews, SessionError> {
        let mut inner = self.lock();

        let review = AnimeReview {
            review: text,
            rating,
            author: inner.user.uid.clone(),
            created_at: Utc::now().timestamp(),
        };

        let key = format!("{anime_id}:{}", review.created_at);
        inner.user.anime_reviews.insert(key, review.clone());

        let reviews = inner.reviews.entry(anime_id.to_string()).or_default();
        reviews.reviews.push(review);
        Ok(reviews.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CATALOG: &str = r#"[
        {
            "id": "20",
            "title": "Naruto",
            "main_picture": {"medium": "https://cdn.myanimelist.net/images/anime/13/17405.jpg"},
            "start_season": {"year": "2002", "season": "fall"},
            "synopsis": "Moments prior to Naruto Uzumaki's birth...",
            "num_episodes": "220"
        },
        {
            "id": "5114",
            "title": "Fullmetal Alchemist: Brotherhood",
            "start_season": {"year": "2009", "season": "spring"},
            "synopsis": "After a horrific alchemy experiment..."
        }
    ]"#;

    fn service() -> SessionService {
        SessionService::from_catalog_json(TEST_CATALOG).unwrap()
    }

    #[tokio::test]
    async fn test_get_anime() {
        let svc = service();
        let anime = svc.get_anime("20").await.unwrap();
        assert_eq!(anime.title, "Naruto");
        assert_eq!(anime.num_episodes.as_deref(), Some("220"));

        // Missing num_episodes parses as None.
        let fma = svc.get_anime("5114").await.unwrap();
        assert!(fma.num_episodes.is_none());

        assert!(matches!(
            svc.get_anime("999").await,
            Err(SessionError::UnknownAnime(_))
        ));
    }

    #[tokio::test]
    async fn test_catalog_envelope() {
        let svc = service();
        let catalog = svc.get_catalog().await.unwrap();
        assert_eq!(catalog.data.len(), 2);
        assert_eq!(catalog.data[0].node.id, "20");
    }

    #[tokio::test]
    async fn test_favorite_roundtrip() {
        let svc = service();
        let anime = svc.get_anime("20").await.unwrap();

        let user = svc.add_favorite(anime.clone()).await.unwrap();
        assert!(user.is_favorited("20"));
        assert!(!user.is_watched("20"));
        assert_eq!(user.anime_favorites["20"].node.title, "Naruto");

        let user = svc.remove_favorite("20").await.unwrap();
        assert!(!user.is_favorited("20"));
    }

    #[tokio::test]
    async fn test_watched_roundtrip() {
        let svc = service();
        let anime = svc.get_anime("5114").await.unwrap();

        let user = svc.add_watched(anime).await.unwrap();
        assert!(user.is_watched("5114"));

        let user = svc.remove_watched("5114").await.unwrap();
        assert!(!user.is_watched("5114"));
    }

    #[tokio::test]
    async fn test_reviews_empty_for_unknown_anime() {
        let svc = service();
        let reviews = svc.get_reviews("999").await.unwrap();
        assert!(reviews.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_add_review_stamps_author_and_time() {
        let svc = service();
        let reviews = svc
            .add_review("20", "Believe it.".into(), 8)
            .await
            .unwrap();

        assert_eq!(reviews.reviews.len(), 1);
        let review = &reviews.reviews[0];
        assert_eq!(review.review, "Believe it.");
        assert_eq!(review.rating, 8);
        assert_eq!(review.author, "local");
        assert!(review.created_at > 0);

        // Also mirrored into the user's keyed review map.
        let user = svc.current_user().await.unwrap();
        assert_eq!(user.anime_reviews.len(), 1);

        // Order is append order.
        let reviews = svc.add_review("20", "Second.".into(), 6).await.unwrap();
        assert_eq!(reviews.reviews[1].review, "Second.");
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let svc = SessionService::embedded();
        assert!(svc.first_anime_id().is_some());
    }
}
