use std::borrow::Borrow;

use crate::labels::DisplayAliases;
use crate::media::{crop_image_url_with, CropSize};
use crate::model::{Genre, GenreId, Page};
use crate::query::QueryResult;

/// One row of the genre list.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreEntry<'a> {
    pub genre: &'a Genre,
    /// Display label after alias lookup.
    pub label: &'a str,
    /// Cropped preview image, or the placeholder.
    pub image_url: String,
    /// Set for the currently selected genre.
    pub emphasized: bool,
}

impl GenreEntry<'_> {
    /// Invoke `on_select` with the full genre behind this entry.
    pub fn select<F>(&self, on_select: F)
    where
        F: FnOnce(&Genre),
    {
        on_select(self.genre);
    }
}

/// What the genre list shows on a given render.
#[derive(Debug, Clone, PartialEq)]
pub enum GenreListView<'a> {
    /// The genre source reported an error; nothing is shown.
    Hidden,
    /// The genre source is still loading.
    Loading,
    Entries(Vec<GenreEntry<'a>>),
}

impl<'a> GenreListView<'a> {
    /// Rendered entries; empty unless the view is [`GenreListView::Entries`].
    pub fn entries(&self) -> &[GenreEntry<'a>] {
        match self {
            Self::Entries(entries) => entries,
            Self::Hidden | Self::Loading => &[],
        }
    }
}

/// The selectable list of genres.
#[derive(Debug, Clone)]
pub struct GenreList<'a> {
    aliases: &'a DisplayAliases,
    selected: Option<GenreId>,
    thumbnail: CropSize,
}

impl<'a> GenreList<'a> {
    #[must_use]
    pub fn new(aliases: &'a DisplayAliases, selected: Option<GenreId>) -> Self {
        Self {
            aliases,
            selected,
            thumbnail: CropSize::default(),
        }
    }

    #[must_use]
    pub fn with_thumbnail(mut self, size: CropSize) -> Self {
        self.thumbnail = size;
        self
    }

    /// Build the view for the current provider state.
    ///
    /// An error hides the list even if data is present; loading shows the
    /// loading placeholder; otherwise every genre becomes an entry.
    pub fn render<'r, P>(&self, result: &'r QueryResult<P>) -> GenreListView<'r>
    where
        P: Borrow<Page<Genre>>,
        'a: 'r,
    {
        if result.is_error() {
            return GenreListView::Hidden;
        }
        if result.is_loading {
            return GenreListView::Loading;
        }

        let genres: &[Genre] = result
            .data
            .as_ref()
            .map(|page| page.borrow().results.as_slice())
            .unwrap_or_default();

        let entries = genres
            .iter()
            .map(|genre| GenreEntry {
                genre,
                label: self.aliases.display_name(&genre.name),
                image_url: crop_image_url_with(genre.image_background.as_deref(), self.thumbnail),
                emphasized: self.selected == Some(genre.id),
            })
            .collect();

        GenreListView::Entries(entries)
    }
}
