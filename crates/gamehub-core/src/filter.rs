//! Genre filtering and ordering of game listings.
//!
//! A [`GameQuery`] is derived from the browse selection and doubles as the
//! cache key for game listings. Sort keys are the opaque values from the
//! sort catalog: an optional leading `-` for descending order followed by a
//! field name. Empty or unknown keys keep the source (relevance) order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{Game, GenreId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameQuery {
    pub genre: Option<GenreId>,
    pub ordering: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Added,
    Name,
    Released,
    Metacritic,
    Rating,
}

impl SortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "added" => Some(Self::Added),
            "name" => Some(Self::Name),
            "released" => Some(Self::Released),
            "metacritic" => Some(Self::Metacritic),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    /// Compare two games on this field, with missing values last.
    fn compare(self, a: &Game, b: &Game, descending: bool) -> Ordering {
        let directed = |ord: Ordering| if descending { ord.reverse() } else { ord };
        match self {
            Self::Added => directed(a.added.cmp(&b.added)),
            Self::Name => directed(compare_names(&a.name, &b.name)),
            Self::Rating => directed(a.rating.total_cmp(&b.rating)),
            Self::Released => missing_last(a.released.as_ref(), b.released.as_ref(), directed),
            Self::Metacritic => missing_last(a.metacritic.as_ref(), b.metacritic.as_ref(), directed),
        }
    }
}

/// Case-insensitive title order, so "inside" sorts next to "Inscryption".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn missing_last<T: Ord>(
    a: Option<&T>,
    b: Option<&T>,
    directed: impl Fn(Ordering) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl GameQuery {
    #[must_use]
    pub fn new(genre: Option<GenreId>, ordering: impl Into<String>) -> Self {
        Self {
            genre,
            ordering: ordering.into(),
        }
    }

    fn sort_key(&self) -> Option<(SortField, bool)> {
        let (name, descending) = match self.ordering.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (self.ordering.as_str(), false),
        };
        SortField::parse(name).map(|field| (field, descending))
    }

    /// Whether `game` passes the genre filter.
    pub fn matches(&self, game: &Game) -> bool {
        self.genre.map_or(true, |genre| game.has_genre(genre))
    }

    /// Filter `games` by genre and order them by the sort key.
    ///
    /// The sort is stable, so ties keep their source order.
    #[must_use]
    pub fn apply(&self, games: &[Game]) -> Vec<Game> {
        let mut selected: Vec<Game> = games.iter().filter(|g| self.matches(g)).cloned().collect();
        if let Some((field, descending)) = self.sort_key() {
            selected.sort_by(|a, b| field.compare(a, b, descending));
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Game> {
        let mut portal = Game::new(1, "Portal 2").with_genre(4, "Action").with_genre(7, "Puzzle");
        portal.rating = 4.6;
        portal.metacritic = Some(95);
        portal.released = Some("2011-04-18".to_string());
        portal.added = 18000;

        let mut celeste = Game::new(2, "Celeste").with_genre(51, "Indie");
        celeste.rating = 4.4;
        celeste.released = Some("2018-01-25".to_string());
        celeste.added = 9000;

        let mut doom = Game::new(3, "DOOM").with_genre(4, "Action");
        doom.rating = 4.4;
        doom.metacritic = Some(85);
        doom.added = 15000;

        vec![portal, celeste, doom]
    }

    fn names(games: &[Game]) -> Vec<&str> {
        games.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_keeps_everything_in_order() {
        let games = sample();
        let result = GameQuery::default().apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "Celeste", "DOOM"]);
    }

    #[test]
    fn test_genre_filter() {
        let games = sample();
        let result = GameQuery::new(Some(GenreId::new(4)), "").apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "DOOM"]);
    }

    #[test]
    fn test_order_by_name() {
        let games = sample();
        let result = GameQuery::new(None, "name").apply(&games);
        assert_eq!(names(&result), vec!["Celeste", "DOOM", "Portal 2"]);
    }

    #[test]
    fn test_order_by_name_ignores_case() {
        let games = vec![
            Game::new(1, "inside"),
            Game::new(2, "Journey"),
            Game::new(3, "Inscryption"),
            Game::new(4, "abzu"),
        ];
        let result = GameQuery::new(None, "name").apply(&games);
        assert_eq!(names(&result), vec!["abzu", "Inscryption", "inside", "Journey"]);

        let result = GameQuery::new(None, "-name").apply(&games);
        assert_eq!(names(&result), vec!["Journey", "inside", "Inscryption", "abzu"]);
    }

    #[test]
    fn test_order_by_rating_descending_is_stable() {
        let games = sample();
        let result = GameQuery::new(None, "-rating").apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "Celeste", "DOOM"]);
    }

    #[test]
    fn test_order_by_metacritic_missing_last() {
        let games = sample();
        let result = GameQuery::new(None, "-metacritic").apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "DOOM", "Celeste"]);
    }

    #[test]
    fn test_order_by_release_date_descending() {
        let games = sample();
        let result = GameQuery::new(None, "-released").apply(&games);
        assert_eq!(names(&result), vec!["Celeste", "Portal 2", "DOOM"]);
    }

    #[test]
    fn test_order_by_added_descending() {
        let games = sample();
        let result = GameQuery::new(None, "-added").apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "DOOM", "Celeste"]);
    }

    #[test]
    fn test_unknown_ordering_keeps_source_order() {
        let games = sample();
        let result = GameQuery::new(None, "-bogus").apply(&games);
        assert_eq!(names(&result), vec!["Portal 2", "Celeste", "DOOM"]);
    }
}
