//! The sort-order catalog offered to the user.
//!
//! Each option pairs an opaque sort key, passed unmodified to the query layer,
//! with a human-readable label. The empty key means "relevance", i.e. no
//! explicit ordering, and is the fallback for any value the catalog does not
//! know. Entry order is display order.

use serde::Serialize;

/// A single sort choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SortOption {
    /// Machine-readable sort key; `""` is the relevance sentinel.
    pub value: &'static str,
    /// Label shown in the sort menu.
    pub label: &'static str,
}

impl SortOption {
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Invoke `on_select` with this option's sort key.
    pub fn select<F>(&self, on_select: F)
    where
        F: FnOnce(&str),
    {
        on_select(self.value);
    }
}

/// Key of the default (relevance) option.
pub const DEFAULT_SORT_VALUE: &str = "";

const SORT_OPTIONS: &[SortOption] = &[
    SortOption::new(DEFAULT_SORT_VALUE, "Relevance"),
    SortOption::new("-added", "Date added"),
    SortOption::new("name", "Name"),
    SortOption::new("-released", "Release date"),
    SortOption::new("-metacritic", "Popularity"),
    SortOption::new("-rating", "Average rating"),
];

/// Fixed, ordered catalog of [`SortOption`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCatalog {
    options: &'static [SortOption],
}

impl SortCatalog {
    /// The catalog shown in the sort menu.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            options: SORT_OPTIONS,
        }
    }

    /// All options in display order.
    #[must_use]
    pub fn options(&self) -> &'static [SortOption] {
        self.options
    }

    /// The relevance option, shown when the active value matches nothing.
    #[must_use]
    pub fn default_option(&self) -> SortOption {
        self.options
            .iter()
            .copied()
            .find(|option| option.value == DEFAULT_SORT_VALUE)
            .unwrap_or(SortOption::new(DEFAULT_SORT_VALUE, "Relevance"))
    }

    /// Index of the option whose key is `value`, if any.
    #[must_use]
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Label of the option whose key equals `active`, or the default label.
    #[must_use]
    pub fn label_for(&self, active: &str) -> &'static str {
        for option in self.options {
            if option.value == active {
                return option.label;
            }
        }
        self.default_option().label
    }

    /// Select the option at `index`, invoking `on_select` with its key.
    ///
    /// Returns `false` without calling back when `index` is out of range.
    pub fn select<F>(&self, index: usize, on_select: F) -> bool
    where
        F: FnOnce(&str),
    {
        match self.options.get(index) {
            Some(option) => {
                option.select(on_select);
                true
            }
            None => false,
        }
    }
}

impl Default for SortCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
