//! View models for the presentation layer.
//!
//! These types decide *what* to show from raw catalog data and the caller's
//! selection state. They own no state and perform no rendering; a front end
//! draws them however it likes and forwards user actions back through the
//! callbacks they expose.

pub mod genre_list;
pub mod selection;
pub mod sort_menu;

pub use genre_list::{GenreEntry, GenreList, GenreListView};
pub use selection::BrowseSelection;
pub use sort_menu::{SortMenu, SortMenuEntry};
