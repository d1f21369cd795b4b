//! The snapshot handed to the presentation layer by the data provider.

/// State of one query as observed on a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    /// Most recent successfully loaded value, if any.
    pub data: Option<T>,

    /// A load is in flight and there is nothing to show yet.
    pub is_loading: bool,

    /// Message of the most recent failed load.
    pub error: Option<String>,
}

impl<T> QueryResult<T> {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}
