//! Subject cleanup and genre-set construction.
//!
//! Raw ISBNdb subjects look like `Amazon.com -- Mystery & Thrillers -- Mystery`.
//! Turning a pile of those into a genre set is three steps:
//! 1. [`clean_subject`]: drop the attribution prefix and navigational entries
//! 2. split compound headings on `--` and trim each part
//! 3. [`collect_genres`]: deduplicate and drop parts that are not genres
//!    (dates, qualifiers in parentheses, and so on)

use std::collections::BTreeSet;

/// Vendor attribution ISBNdb prepends to Amazon browse nodes
pub const ATTRIBUTION_PREFIX: &str = "Amazon.com -- ";
/// Amazon's alphabetical author index: navigation, not a genre
pub const NAVIGATION_MARKER: &str = "Authors, A-Z";
/// Separator inside compound subject headings
pub const COMPOUND_SEPARATOR: &str = "--";
/// Placeholder subject some records carry instead of real data
pub const PLACEHOLDER_SUBJECT: &str = "None";

/// Strip the attribution prefix and reject navigational subjects.
///
/// Returns `None` for subjects that carry no genre information at all.
pub fn clean_subject(raw: &str) -> Option<String> {
    let mut cleaned = raw.to_string();
    // Removal can splice two halves back into a prefix; repeat until gone.
    while cleaned.contains(ATTRIBUTION_PREFIX) {
        cleaned = cleaned.replace(ATTRIBUTION_PREFIX, "");
    }

    if cleaned.contains(NAVIGATION_MARKER) {
        return None;
    }

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether a subject is the "no data" placeholder
pub fn is_placeholder(subject: &str) -> bool {
    subject.trim() == PLACEHOLDER_SUBJECT
}

/// Title-case a subject the way author aggregation expects.
///
/// Every letter that follows a non-letter is uppercased and every other
/// letter lowercased, so `hard-boiled` becomes `Hard-Boiled` and
/// `Detective and mystery stories` becomes `Detective And Mystery Stories`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Split a compound heading into trimmed, non-empty parts
pub fn split_compound(subject: &str) -> impl Iterator<Item = &str> {
    subject
        .split(COMPOUND_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

/// Characters that disqualify a genre candidate.
///
/// Digits and parentheses are always rejected (`1920s`, `Los Angeles
/// (Calif.)`). Title lookups also reject hyphens; author lookups reject
/// ampersands instead, keeping entries like `Hard-Boiled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusions {
    Title,
    Author,
}

impl Exclusions {
    fn rejects_char(self, c: char) -> bool {
        if c.is_ascii_digit() || c == '(' || c == ')' {
            return true;
        }
        match self {
            Self::Title => c == '-',
            Self::Author => c == '&',
        }
    }

    /// Whether `genre` contains any excluded character
    pub fn rejects(self, genre: &str) -> bool {
        genre.chars().any(|c| self.rejects_char(c))
    }
}

/// Split, deduplicate and filter subjects into a genre set.
///
/// The filter reads the deduplicated set and writes survivors into a new
/// one, so every rejected entry is removed regardless of its neighbours.
pub fn collect_genres<I, S>(subjects: I, exclusions: Exclusions) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts = BTreeSet::new();
    for subject in subjects {
        for part in split_compound(subject.as_ref()) {
            parts.insert(part.to_string());
        }
    }

    parts
        .into_iter()
        .filter(|genre| !exclusions.rejects(genre))
        .collect()
}
