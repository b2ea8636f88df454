use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::anime::AnimePosterNode;
use super::review::AnimeReview;

/// User profile as stored in the document database.
///
/// Collections are keyed by anime/review id so membership checks are O(1).
/// The store requires zero-argument construction, hence the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub username: String,
    pub profile_image: String,
    pub anime_favorites: HashMap<String, AnimePosterNode>,
    pub anime_watched: HashMap<String, AnimePosterNode>,
    pub anime_reviews: HashMap<String, AnimeReview>,
}

impl User {
    pub fn is_favorited(&self, anime_id: &str) -> bool {
        self.anime_favorites.contains_key(anime_id)
    }

    pub fn is_watched(&self, anime_id: &str) -> bool {
        self.anime_watched.contains_key(anime_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::anime::Anime;

    #[test]
    fn test_default_user() {
        let user = User::default();
        assert_eq!(user.uid, "");
        assert_eq!(user.username, "");
        assert_eq!(user.profile_image, "");
        assert!(user.anime_favorites.is_empty());
        assert!(user.anime_watched.is_empty());
        assert!(user.anime_reviews.is_empty());
    }

    #[test]
    fn test_membership() {
        let anime = Anime {
            id: "20".into(),
            title: "Naruto".into(),
            ..Anime::default()
        };

        let mut user = User::default();
        assert!(!user.is_favorited("20"));

        user.anime_favorites
            .insert(anime.id.clone(), AnimePosterNode::from(&anime));
        assert!(user.is_favorited("20"));
        assert!(!user.is_watched("20"));
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{
            "uid": "uid-42",
            "username": "madoka",
            "profileImage": "https://example.com/p.png",
            "animeFavorites": {
                "20": {"node": {"id": "20", "title": "Naruto"}}
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "madoka");
        assert!(user.is_favorited("20"));
        assert!(user.anime_watched.is_empty());
    }
}
