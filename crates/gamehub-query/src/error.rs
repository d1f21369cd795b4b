//! Error types for the catalog data provider.

use thiserror::Error;

/// Errors that can occur while loading catalog data.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A catalog source failed to produce data.
    #[error("{source_name} failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    /// Catalog data could not be read or parsed.
    #[error("catalog error: {0}")]
    Core(#[from] gamehub_core::Error),

    /// The load was aborted because nothing was subscribed to it anymore.
    #[error("query cancelled")]
    Cancelled,
}

impl QueryError {
    /// Returns `true` when the failure came from malformed catalog data
    /// rather than from the environment.
    pub fn is_invalid_data(&self) -> bool {
        matches!(
            self,
            Self::Core(gamehub_core::Error::Serialization(_) | gamehub_core::Error::InvalidData(_))
        )
    }
}

/// Convenience alias for query results.
pub type QueryOutcome<T> = std::result::Result<T, QueryError>;
