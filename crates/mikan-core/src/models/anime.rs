use serde::{Deserialize, Serialize};

/// Image reference as served by the metadata API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimePicture {
    pub medium: String,
}

/// Premiere season. Both fields are textual on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeSeason {
    pub year: String,
    pub season: String,
}

/// Partial anime record used in list and grid displays.
///
/// The document store stores these inside the user's keyed maps, so the
/// whole chain must be constructible with no arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimePoster {
    pub id: String,
    pub title: String,
    pub main_picture: AnimePicture,
    /// Omitted upstream for unreleased anime.
    pub num_episodes: Option<String>,
    pub start_season: AnimeSeason,
}

/// Wrapper matching the metadata API's envelope shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimePosterNode {
    pub node: AnimePoster,
}

/// Top-level metadata API response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimePosterResponse {
    pub data: Vec<AnimePosterNode>,
}

/// Full anime record used on the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anime {
    pub id: String,
    pub title: String,
    pub main_picture: AnimePicture,
    pub start_season: AnimeSeason,
    pub synopsis: String,
    pub num_episodes: Option<String>,
}

impl Anime {
    /// The partial poster view of this anime, for list displays and the
    /// user's keyed favorite/watched maps.
    pub fn poster(&self) -> AnimePoster {
        AnimePoster {
            id: self.id.clone(),
            title: self.title.clone(),
            main_picture: self.main_picture.clone(),
            num_episodes: self.num_episodes.clone(),
            start_season: self.start_season.clone(),
        }
    }
}

impl From<&Anime> for AnimePosterNode {
    fn from(anime: &Anime) -> Self {
        Self {
            node: anime.poster(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_records() {
        let poster = AnimePoster::default();
        assert_eq!(poster.id, "");
        assert_eq!(poster.title, "");
        assert_eq!(poster.main_picture.medium, "");
        assert!(poster.num_episodes.is_none());
        assert_eq!(poster.start_season.year, "");
        assert_eq!(poster.start_season.season, "");

        let anime = Anime::default();
        assert_eq!(anime.synopsis, "");
        assert_eq!(AnimePosterResponse::default().data.len(), 0);
    }

    #[test]
    fn test_deserialize_poster_response() {
        let json = r#"{
            "data": [
                {
                    "node": {
                        "id": "52991",
                        "title": "Sousou no Frieren",
                        "main_picture": {
                            "medium": "https://cdn.myanimelist.net/images/anime/1/52991.jpg"
                        },
                        "num_episodes": "28",
                        "start_season": {"year": "2023", "season": "fall"}
                    }
                }
            ]
        }"#;

        let resp: AnimePosterResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);

        let poster = &resp.data[0].node;
        assert_eq!(poster.id, "52991");
        assert_eq!(poster.title, "Sousou no Frieren");
        assert_eq!(poster.num_episodes.as_deref(), Some("28"));
        assert_eq!(poster.start_season.season, "fall");
    }

    #[test]
    fn test_deserialize_full_anime() {
        let json = r#"{
            "id": "20",
            "title": "Naruto",
            "main_picture": {"medium": "https://cdn.myanimelist.net/images/anime/13/17405.jpg"},
            "start_season": {"year": "2002", "season": "fall"},
            "synopsis": "Moments prior to Naruto Uzumaki's birth...",
            "num_episodes": "220"
        }"#;

        let anime: Anime = serde_json::from_str(json).unwrap();
        assert_eq!(anime.id, "20");
        assert_eq!(anime.num_episodes.as_deref(), Some("220"));
        assert!(anime.synopsis.starts_with("Moments"));
    }

    #[test]
    fn test_missing_fields_substitute_defaults() {
        // Unreleased anime may omit num_episodes, pictures, or the season.
        // Parsing must not fail; it falls back to the defaults.
        let anime: Anime = serde_json::from_str(r#"{"id": "1", "title": "Test"}"#).unwrap();
        assert_eq!(anime.id, "1");
        assert_eq!(anime.main_picture.medium, "");
        assert_eq!(anime.start_season.year, "");
        assert!(anime.num_episodes.is_none());

        let empty: Anime = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Anime::default());
    }

    #[test]
    fn test_poster_view() {
        let anime = Anime {
            id: "5114".into(),
            title: "Fullmetal Alchemist: Brotherhood".into(),
            num_episodes: Some("64".into()),
            synopsis: "After a horrific alchemy experiment...".into(),
            ..Anime::default()
        };

        let node = AnimePosterNode::from(&anime);
        assert_eq!(node.node.id, "5114");
        assert_eq!(node.node.num_episodes.as_deref(), Some("64"));
    }
}
