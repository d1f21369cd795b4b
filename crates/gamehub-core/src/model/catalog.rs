use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Game, Genre};
use crate::error::{Error, Result};

/// A locally stored catalog snapshot.
///
/// ```json
/// {
///   "genres": [{"id": 4, "name": "Action", "image_background": "..."}],
///   "games": [{"id": 3498, "name": "Grand Theft Auto V", "genres": [{"id": 4, "name": "Action"}]}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub genres: Vec<Genre>,

    #[serde(default)]
    pub games: Vec<Game>,
}

impl CatalogFile {
    /// Parse a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or if two genres share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog snapshot from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<()> {
        for (i, genre) in self.genres.iter().enumerate() {
            if self.genres[..i].iter().any(|other| other.id == genre.id) {
                return Err(Error::InvalidData(format!(
                    "duplicate genre id {} ({})",
                    genre.id, genre.name
                )));
            }
        }
        Ok(())
    }
}
