//! Core domain model and display logic for gamehub.
//!
//! This crate defines the game catalog entities (Genre, Game, Page), the
//! media URL normalization used for preview images, the sort-order catalog,
//! display aliases, and the view models the presentation layer renders.
//! Everything here is synchronous and holds no state of its own.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod filter;
pub mod labels;
pub mod media;
pub mod model;
pub mod query;
pub mod sort;
pub mod view;

pub use error::{Error, Result};
pub use filter::GameQuery;
pub use labels::DisplayAliases;
pub use media::{crop_image_url, CropSize, PLACEHOLDER_IMAGE};
pub use model::{CatalogFile, Game, Genre, GenreId, Page};
pub use query::QueryResult;
pub use sort::{SortCatalog, SortOption};
