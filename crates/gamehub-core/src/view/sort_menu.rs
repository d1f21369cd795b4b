use crate::sort::{SortCatalog, SortOption};

/// One selectable row of the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortMenuEntry {
    pub option: SortOption,
    /// Set for the option matching the caller's active sort value.
    pub active: bool,
}

/// The sort-order menu.
///
/// Purely reflects the caller-owned active sort value.
#[derive(Debug, Clone, Copy)]
pub struct SortMenu<'a> {
    catalog: SortCatalog,
    active: &'a str,
}

impl<'a> SortMenu<'a> {
    #[must_use]
    pub fn new(catalog: SortCatalog, active: &'a str) -> Self {
        Self { catalog, active }
    }

    /// Label of the active option, falling back to the default label.
    pub fn current_label(&self) -> &'static str {
        self.catalog.label_for(self.active)
    }

    /// Text of the menu button, e.g. `Order by: Relevance`.
    pub fn title(&self) -> String {
        format!("Order by: {}", self.current_label())
    }

    /// All catalog entries in display order.
    pub fn entries(&self) -> Vec<SortMenuEntry> {
        self.catalog
            .options()
            .iter()
            .map(|&option| SortMenuEntry {
                option,
                active: option.value == self.active,
            })
            .collect()
    }

    /// Index to place the menu cursor on when it opens.
    pub fn initial_cursor(&self) -> usize {
        self.catalog.position_of(self.active).unwrap_or(0)
    }

    /// Select the entry at `index`, invoking `on_select` with its sort key.
    pub fn select<F>(&self, index: usize, on_select: F) -> bool
    where
        F: FnOnce(&str),
    {
        self.catalog.select(index, on_select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_resolves_label() {
        let menu = SortMenu::new(SortCatalog::standard(), "-metacritic");
        assert_eq!(menu.title(), "Order by: Popularity");
    }

    #[test]
    fn test_title_for_unknown_value() {
        let menu = SortMenu::new(SortCatalog::standard(), "bogus");
        assert_eq!(menu.title(), "Order by: Relevance");
        assert_eq!(menu.initial_cursor(), 0);
        assert!(menu.entries().iter().all(|e| !e.active));
    }

    #[test]
    fn test_entries_mark_active_option() {
        let menu = SortMenu::new(SortCatalog::standard(), "name");
        let entries = menu.entries();
        assert_eq!(entries.len(), 6);
        let active: Vec<&str> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.option.label)
            .collect();
        assert_eq!(active, vec!["Name"]);
        assert_eq!(menu.initial_cursor(), 2);
    }

    #[test]
    fn test_select_invokes_callback_with_value() {
        let menu = SortMenu::new(SortCatalog::standard(), "");
        let mut changed = String::new();
        assert!(menu.select(5, |value| changed = value.to_string()));
        assert_eq!(changed, "-rating");
    }
}
