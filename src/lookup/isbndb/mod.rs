//! ISBNdb API integration
//!
//! ISBNdb has no search ranking worth trusting, but it carries the subject
//! headings (mostly Library of Congress and Amazon browse nodes) that
//! Goodreads lacks. We only ever ask it about a known ISBN.
//!
//! API docs: http://isbndb.com/docs/api/

pub mod adapter;
mod client;

pub use client::{DEFAULT_BASE_URL, IsbndbClient};
