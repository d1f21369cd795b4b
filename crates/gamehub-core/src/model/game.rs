use serde::{Deserialize, Serialize};

use super::{GameId, GenreId, PlatformId};

/// A parent platform family such as PC or PlayStation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub slug: String,
}

/// Wrapper the provider uses around each parent platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPlatform {
    pub platform: Platform,
}

/// The genre summary embedded in a game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: GenreId,
    pub name: String,
}

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,

    #[serde(default)]
    pub slug: String,

    /// Raw preview image URL; may be absent.
    #[serde(default)]
    pub background_image: Option<String>,

    #[serde(default)]
    pub parent_platforms: Vec<ParentPlatform>,

    /// Metacritic score, used as the popularity key.
    #[serde(default)]
    pub metacritic: Option<u32>,

    #[serde(default)]
    pub rating_top: u32,

    #[serde(default)]
    pub rating: f64,

    /// Release date as an ISO-8601 date string (`YYYY-MM-DD`).
    #[serde(default)]
    pub released: Option<String>,

    /// Number of users who added the game to a library.
    #[serde(default)]
    pub added: u32,

    #[serde(default)]
    pub genres: Vec<GenreRef>,

    #[serde(default)]
    pub description_raw: Option<String>,
}

impl Game {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: GameId::new(id),
            name: name.into(),
            slug: String::new(),
            background_image: None,
            parent_platforms: Vec::new(),
            metacritic: None,
            rating_top: 0,
            rating: 0.0,
            released: None,
            added: 0,
            genres: Vec::new(),
            description_raw: None,
        }
    }

    #[must_use]
    pub fn with_genre(mut self, id: i64, name: impl Into<String>) -> Self {
        self.genres.push(GenreRef {
            id: GenreId::new(id),
            name: name.into(),
        });
        self
    }

    /// Whether the game is tagged with `genre`.
    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genres.iter().any(|g| g.id == genre)
    }

    /// Names of the parent platforms, in provider order.
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.parent_platforms
            .iter()
            .map(|p| p.platform.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserialize_provider_payload() {
        let json = r#"{
            "id": 3498,
            "name": "Grand Theft Auto V",
            "slug": "grand-theft-auto-v",
            "background_image": "https://media.example.com/media/games/20a/a.jpg",
            "parent_platforms": [
                {"platform": {"id": 1, "name": "PC", "slug": "pc"}},
                {"platform": {"id": 2, "name": "PlayStation", "slug": "playstation"}}
            ],
            "metacritic": 92,
            "rating_top": 5,
            "rating": 4.47,
            "released": "2013-09-17",
            "added": 21000,
            "genres": [{"id": 4, "name": "Action"}]
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id.get(), 3498);
        assert_eq!(game.platform_names().collect::<Vec<_>>(), vec!["PC", "PlayStation"]);
        assert!(game.has_genre(GenreId::new(4)));
        assert!(!game.has_genre(GenreId::new(5)));
        assert!(game.description_raw.is_none());
    }

    #[test]
    fn test_game_minimal_payload() {
        let game: Game = serde_json::from_str(r#"{"id": 1, "name": "Tetris"}"#).unwrap();
        assert!(game.genres.is_empty());
        assert!(game.metacritic.is_none());
        assert_eq!(game.added, 0);
    }
}
