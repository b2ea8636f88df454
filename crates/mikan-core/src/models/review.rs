use serde::{Deserialize, Serialize};

/// A single user review.
///
/// `rating` and `created_at` use -1 as the "not yet set" sentinel rather
/// than an optional type; the document store fills them in on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimeReview {
    pub review: String,
    pub rating: i64,
    pub author: String,
    /// Unix epoch seconds.
    pub created_at: i64,
}

impl Default for AnimeReview {
    fn default() -> Self {
        Self {
            review: String::new(),
            rating: -1,
            author: String::new(),
            created_at: -1,
        }
    }
}

/// Ordered review container. Order is whatever the store supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeReviews {
    pub reviews: Vec<AnimeReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sentinels() {
        let review = AnimeReview::default();
        assert_eq!(review.review, "");
        assert_eq!(review.rating, -1);
        assert_eq!(review.author, "");
        assert_eq!(review.created_at, -1);
        assert!(AnimeReviews::default().reviews.is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "review": "Peak fiction.",
            "rating": 9,
            "author": "uid-42",
            "createdAt": 1705312800
        }"#;

        let review: AnimeReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.review, "Peak fiction.");
        assert_eq!(review.rating, 9);
        assert_eq!(review.created_at, 1705312800);
    }

    #[test]
    fn test_partial_document_keeps_sentinels() {
        let review: AnimeReview = serde_json::from_str(r#"{"review": "wip"}"#).unwrap();
        assert_eq!(review.review, "wip");
        assert_eq!(review.rating, -1);
        assert_eq!(review.created_at, -1);
    }
}
