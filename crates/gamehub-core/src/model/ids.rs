use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(GenreId, "Provider identifier for a genre.");
define_id!(GameId, "Provider identifier for a game.");
define_id!(
    PlatformId,
    "Provider identifier for a parent platform (PC, PlayStation, ...)."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_id_display() {
        assert_eq!(GenreId::new(4).to_string(), "4");
    }

    #[test]
    fn test_genre_id_serializes_as_integer() {
        let json = serde_json::to_string(&GenreId::new(51)).unwrap();
        assert_eq!(json, "51");
        let id: GenreId = serde_json::from_str("51").unwrap();
        assert_eq!(id.get(), 51);
    }
}
