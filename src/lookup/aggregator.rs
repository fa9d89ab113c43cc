//! Category aggregator - the two-hop pipeline from free text to genres.
//!
//! Title lookups: title → ISBN (Goodreads) → subjects (ISBNdb) → genres.
//! Author lookups: author → author ID → first page of works → subjects of
//! the first few ISBNs → genres.
//!
//! `try_title_genre` / `try_author_genre` report failures precisely. The
//! plain `title_genre` / `author_genre` entry points are the outer
//! boundary: every failure there becomes [`Genres::NoneFound`], so their
//! callers cannot tell an unreachable service from a book without subjects.

use super::domain::{Genres, Isbn, LookupError, TitleQuery};
use super::isbndb::adapter as isbndb;
use super::normalize::{self, Exclusions};
use super::resolver::CatalogResolver;
use super::traits::{CatalogApi, SearchApi};

/// How many of an author's works are sampled by default
pub const DEFAULT_AUTHOR_SAMPLE_SIZE: usize = 5;

/// Combines the search and catalog services into genre lookups
pub struct CategoryAggregator<S, C> {
    resolver: CatalogResolver<S>,
    catalog: C,
    author_sample_size: usize,
}

impl<S: SearchApi, C: CatalogApi> CategoryAggregator<S, C> {
    pub fn new(resolver: CatalogResolver<S>, catalog: C) -> Self {
        Self {
            resolver,
            catalog,
            author_sample_size: DEFAULT_AUTHOR_SAMPLE_SIZE,
        }
    }

    /// Override how many of an author's works get aggregated
    pub fn with_author_sample_size(mut self, size: usize) -> Self {
        self.author_sample_size = size;
        self
    }

    pub fn resolver(&self) -> &CatalogResolver<S> {
        &self.resolver
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Cleaned subjects of one work, in document order, duplicates kept.
    ///
    /// A title that does not resolve to an ISBN has no subjects.
    pub(crate) async fn title_categories(
        &self,
        query: TitleQuery<'_>,
    ) -> Result<Vec<String>, LookupError> {
        let resolved;
        let isbn: &Isbn = match query {
            TitleQuery::Isbn(isbn) => isbn,
            TitleQuery::Title(title) => match self.resolver.resolve_isbn(title).await? {
                Some(isbn) => {
                    resolved = isbn;
                    &resolved
                }
                None => {
                    tracing::debug!(title, "No ISBN for title");
                    return Ok(Vec::new());
                }
            },
        };

        let Some(doc) = self.catalog.subjects(isbn).await? else {
            return Ok(Vec::new());
        };

        let categories: Vec<String> = isbndb::subjects(&doc)?
            .iter()
            .filter_map(|subject| normalize::clean_subject(subject))
            .collect();

        tracing::debug!(isbn = %isbn, count = categories.len(), "Fetched subjects");
        Ok(categories)
    }

    /// Title-cased subjects across the author's first few works.
    ///
    /// An author that does not resolve has no subjects. Placeholder
    /// subjects are skipped without cutting the loop short.
    pub(crate) async fn author_categories(&self, author: &str) -> Result<Vec<String>, LookupError> {
        let Some(author_id) = self.resolver.resolve_author_id(author).await? else {
            tracing::debug!(author, "No author ID");
            return Ok(Vec::new());
        };

        let isbns = self.resolver.author_work_isbns(&author_id).await?;

        let mut categories = Vec::new();
        for isbn in isbns.iter().take(self.author_sample_size) {
            for subject in self.title_categories(TitleQuery::Isbn(isbn)).await? {
                let subject = normalize::title_case(&subject);
                if normalize::is_placeholder(&subject) {
                    continue;
                }
                categories.push(subject);
            }
        }

        Ok(categories)
    }

    /// Genres of a title, with failures reported
    pub async fn try_title_genre(&self, title: &str) -> Result<Genres, LookupError> {
        let categories = self.title_categories(TitleQuery::Title(title)).await?;
        Ok(Genres::from_set(normalize::collect_genres(
            &categories,
            Exclusions::Title,
        )))
    }

    /// Genres of an author, with failures reported
    pub async fn try_author_genre(&self, author: &str) -> Result<Genres, LookupError> {
        let categories = self.author_categories(author).await?;
        Ok(Genres::from_set(normalize::collect_genres(
            &categories,
            Exclusions::Author,
        )))
    }

    /// Genres of a title; any failure yields [`Genres::NoneFound`]
    pub async fn title_genre(&self, title: &str) -> Genres {
        settle("title", title, self.try_title_genre(title).await)
    }

    /// Genres of an author; any failure yields [`Genres::NoneFound`]
    pub async fn author_genre(&self, author: &str) -> Genres {
        settle("author", author, self.try_author_genre(author).await)
    }
}

/// Collapse a lookup result at the public boundary
fn settle(kind: &str, query: &str, result: Result<Genres, LookupError>) -> Genres {
    match result {
        Ok(genres) => {
            tracing::info!(kind, query, count = genres.len(), "Genre lookup finished");
            genres
        }
        Err(e) => {
            tracing::warn!(kind, query, "Genre lookup failed: {}", e);
            Genres::NoneFound
        }
    }
}
