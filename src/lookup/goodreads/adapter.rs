//! Adapter layer: extract identifiers from Goodreads XML documents
//!
//! This is the ONLY place that knows where Goodreads puts things. The rules
//! are positional, which is brittle by nature, so each one is a named
//! function pinned to a fixture in the contract tests below.
//!
//! "Top-ranked" always means first in document order: Goodreads already
//! sorts by popularity and we never re-rank.

use crate::lookup::domain::{AuthorId, Isbn, TitleId};
use crate::lookup::xml::XmlDocument;

/// Element wrapping the top-ranked book of a search result
pub const BEST_BOOK_ELEMENT: &str = "best_book";
/// Author element, both in search results and title details
pub const AUTHOR_ELEMENT: &str = "author";
/// ISBN element in title details and author works lists
pub const ISBN_ELEMENT: &str = "isbn";

/// Position of the `<id>` child inside `best_book` and `author`
pub const ID_CHILD_INDEX: usize = 0;
/// Position of the `<name>` child inside an `author` element
///
/// Goodreads emits `<id>` first and the display name second; the name is
/// read from the first `author` element in the document.
pub const AUTHOR_NAME_CHILD_INDEX: usize = 1;

/// Text of child `index` of the first `element` in the document
fn first_child_text<'a>(doc: &'a XmlDocument, element: &str, index: usize) -> Option<&'a str> {
    doc.first_named(element)
        .and_then(|e| e.child(index))
        .and_then(|child| child.text())
}

/// Title ID of the top-ranked search result
pub fn best_title_id(doc: &XmlDocument) -> Option<TitleId> {
    first_child_text(doc, BEST_BOOK_ELEMENT, ID_CHILD_INDEX).and_then(TitleId::new)
}

/// Author ID of the top-ranked search result
pub fn best_author_id(doc: &XmlDocument) -> Option<AuthorId> {
    first_child_text(doc, AUTHOR_ELEMENT, ID_CHILD_INDEX).and_then(AuthorId::new)
}

/// Display name of a title's author
pub fn author_name(doc: &XmlDocument) -> Option<String> {
    first_child_text(doc, AUTHOR_ELEMENT, AUTHOR_NAME_CHILD_INDEX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

/// ISBN of a title
///
/// Only the first `isbn` element counts: later ones belong to similar
/// books, so a blank first ISBN means "not found" rather than "keep looking".
pub fn title_isbn(doc: &XmlDocument) -> Option<Isbn> {
    doc.first_named(ISBN_ELEMENT)
        .and_then(|e| e.text())
        .and_then(Isbn::new)
}

/// Every non-blank ISBN in an author works list, in document order
pub fn work_isbns(doc: &XmlDocument) -> Vec<Isbn> {
    doc.elements_named(ISBN_ELEMENT)
        .into_iter()
        .filter_map(|e| e.text())
        .filter_map(Isbn::new)
        .collect()
}

// ============================================================================
// CONTRACT TESTS
// These pin the positional rules to real response shapes.
// If these fail, Goodreads moved something and the rules need updating.
// ============================================================================
