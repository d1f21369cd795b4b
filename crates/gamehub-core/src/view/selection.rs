use crate::filter::GameQuery;
use crate::model::{Genre, GenreId};
use crate::sort::DEFAULT_SORT_VALUE;

/// Browse selection state owned by the presentation layer.
///
/// Starts with no genre and the default sort value; changes only through
/// [`BrowseSelection::select_genre`] and [`BrowseSelection::set_sort_order`],
/// which are the receivers of the genre list and sort menu callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSelection {
    genre: Option<Genre>,
    sort_order: String,
}

impl BrowseSelection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            genre: None,
            sort_order: DEFAULT_SORT_VALUE.to_string(),
        }
    }

    pub fn select_genre(&mut self, genre: &Genre) {
        self.genre = Some(genre.clone());
    }

    pub fn clear_genre(&mut self) {
        self.genre = None;
    }

    pub fn set_sort_order(&mut self, value: &str) {
        value.clone_into(&mut self.sort_order);
    }

    pub fn selected_genre(&self) -> Option<&Genre> {
        self.genre.as_ref()
    }

    pub fn selected_genre_id(&self) -> Option<GenreId> {
        self.genre.as_ref().map(|g| g.id)
    }

    pub fn sort_order(&self) -> &str {
        &self.sort_order
    }

    /// The game listing query for the current selection.
    pub fn game_query(&self) -> GameQuery {
        GameQuery::new(self.selected_genre_id(), self.sort_order.clone())
    }
}

impl Default for BrowseSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::DisplayAliases;
    use crate::model::Page;
    use crate::query::QueryResult;
    use crate::sort::SortCatalog;
    use crate::view::{GenreList, SortMenu};

    #[test]
    fn test_initial_state() {
        let selection = BrowseSelection::new();
        assert!(selection.selected_genre().is_none());
        assert_eq!(selection.sort_order(), "");
        assert_eq!(selection.game_query(), GameQuery::default());
    }

    #[test]
    fn test_genre_list_callback_updates_selection() {
        let aliases = DisplayAliases::genres();
        let result = QueryResult::success(Page::new(vec![
            Genre::new(4, "Action"),
            Genre::new(5, "RPG"),
        ]));
        let mut selection = BrowseSelection::new();

        let view = GenreList::new(&aliases, selection.selected_genre_id()).render(&result);
        view.entries()[1].select(|genre| selection.select_genre(genre));

        assert_eq!(selection.selected_genre_id(), Some(GenreId::new(5)));
        assert_eq!(selection.selected_genre().map(|g| g.name.as_str()), Some("RPG"));

        let view = GenreList::new(&aliases, selection.selected_genre_id()).render(&result);
        assert!(view.entries()[1].emphasized);
    }

    #[test]
    fn test_sort_menu_callback_updates_query() {
        let mut selection = BrowseSelection::new();
        let active = selection.sort_order().to_string();
        SortMenu::new(SortCatalog::standard(), &active)
            .select(1, |value| selection.set_sort_order(value));

        assert_eq!(selection.sort_order(), "-added");
        assert_eq!(selection.game_query().ordering, "-added");
    }

    #[test]
    fn test_clear_genre() {
        let mut selection = BrowseSelection::new();
        selection.select_genre(&Genre::new(4, "Action"));
        selection.clear_genre();
        assert!(selection.selected_genre_id().is_none());
    }
}
