//! Internal domain models for identifier resolution and genre aggregation.
//!
//! These types are OUR types - they don't change when the Goodreads or
//! ISBNdb response shapes change. XML documents get converted into these
//! types by the adapters.

use std::collections::BTreeSet;
use std::fmt;

/// Declares an opaque identifier newtype.
///
/// Identifiers are never validated beyond "present": blank text means the
/// service had nothing for us, so construction yields `None`.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wrap service text, returning `None` when it is blank.
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == text.len() {
                    Some(Self(text))
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(
    /// Goodreads book ID of the top-ranked match for a title query
    TitleId
);

identifier!(
    /// Goodreads author ID
    AuthorId
);

identifier!(
    /// ISBN as understood by the ISBNdb catalog
    Isbn
);

/// How `title_categories` locates the work it asks the catalog about.
#[derive(Debug, Clone, Copy)]
pub enum TitleQuery<'a> {
    /// Free-text title, resolved to an ISBN through the search service first
    Title(&'a str),
    /// ISBN already known (e.g. from an author's works list)
    Isbn(&'a Isbn),
}

/// Final output of a genre lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Genres {
    /// Cleaned, deduplicated genre names
    Found(BTreeSet<String>),
    /// No categories could be produced, for whatever reason
    NoneFound,
}

impl Genres {
    /// Wrap a genre set, collapsing an empty set into [`Genres::NoneFound`].
    pub fn from_set(genres: BTreeSet<String>) -> Self {
        if genres.is_empty() {
            Self::NoneFound
        } else {
            Self::Found(genres)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn contains(&self, genre: &str) -> bool {
        match self {
            Self::Found(genres) => genres.contains(genre),
            Self::NoneFound => false,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Found(genres) => genres.len(),
            Self::NoneFound => 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let set = match self {
            Self::Found(genres) => Some(genres),
            Self::NoneFound => None,
        };
        set.into_iter().flatten().map(String::as_str)
    }
}

impl fmt::Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(genres) => {
                let joined = genres.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
                write!(f, "[{}]", joined)
            }
            Self::NoneFound => f.write_str("None found"),
        }
    }
}

/// Errors that can occur while talking to the search or catalog services
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    ApiError(String),
}
