//! Catalog data provider for gamehub.
//!
//! Supplies genre and game listings to the presentation layer as
//! synchronous [`QueryResult`](gamehub_core::QueryResult) snapshots, backed
//! by a keyed cache with configurable staleness. Loads run on tokio and are
//! cancelled when their last [`Subscription`] is dropped. Also hosts the
//! configuration and logging setup shared by the front ends.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod source;

pub use cache::{QueryClient, Subscription};
pub use catalog::{CatalogQueries, GameSubscription, GenreSubscription};
pub use config::Config;
pub use error::{QueryError, QueryOutcome};
pub use source::{CatalogSource, JsonCatalog, StaticCatalog};
