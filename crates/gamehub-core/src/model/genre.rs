use serde::{Deserialize, Serialize};

use super::GenreId;

/// A catalog tag attached to games.
///
/// `id` is unique within one listing; names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,

    /// Provider name (e.g. "Action", "Massively Multiplayer").
    pub name: String,

    /// Raw preview image URL; may be empty or absent.
    #[serde(default)]
    pub image_background: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub games_count: Option<u32>,
}

impl Genre {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: GenreId::new(id),
            name: name.into(),
            image_background: None,
            slug: None,
            games_count: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_background = Some(url.into());
        self
    }
}
