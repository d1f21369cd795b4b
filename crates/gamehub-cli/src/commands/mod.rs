pub mod browse;
pub mod config;
pub mod crop;
pub mod genres;
pub mod sorts;

pub use browse::run_browse;
pub use crop::show_crop;
pub use genres::show_genres;
pub use sorts::show_sorts;
