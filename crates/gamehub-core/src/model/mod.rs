pub mod catalog;
pub mod game;
pub mod genre;
pub mod ids;
pub mod page;

pub use catalog::CatalogFile;
pub use game::{Game, GenreRef, ParentPlatform, Platform};
pub use genre::Genre;
pub use ids::{GameId, GenreId, PlatformId};
pub use page::Page;
