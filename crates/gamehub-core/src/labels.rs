//! Presentation-only renames for catalog names.
//!
//! Some provider names are too long for the genre list. Aliases map a
//! catalog name to the label shown in its place; the underlying entity is
//! never modified.

use std::collections::BTreeMap;

/// Built-in genre aliases.
const GENRE_ALIASES: &[(&str, &str)] = &[("Massively Multiplayer", "Multiplayer")];

/// Lookup table from catalog name to display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAliases {
    aliases: BTreeMap<String, String>,
}

impl DisplayAliases {
    /// A table with no aliases; every name passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// The built-in genre aliases.
    #[must_use]
    pub fn genres() -> Self {
        GENRE_ALIASES
            .iter()
            .fold(Self::empty(), |table, &(name, label)| table.with_alias(name, label))
    }

    /// Add or replace the alias for `name`.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), label.into());
        self
    }

    /// Extend the table, replacing existing entries with the same name.
    #[must_use]
    pub fn extended<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |table, (name, label)| table.with_alias(name, label))
    }

    /// Label to display for `name`. Matching is exact.
    #[must_use]
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for DisplayAliases {
    fn default() -> Self {
        Self::genres()
    }
}
