use gamehub_core::view::SortMenu;
use gamehub_core::SortCatalog;

/// Print the sort catalog, marking the option matching `active`.
pub fn show_sorts(active: &str) {
    let menu = SortMenu::new(SortCatalog::standard(), active);

    println!("{}\n", menu.title());
    for entry in menu.entries() {
        let marker = if entry.active { "*" } else { " " };
        let value = if entry.option.value.is_empty() {
            "(none)"
        } else {
            entry.option.value
        };
        println!("{} {:<16} {}", marker, entry.option.label, value);
    }
}
