//! Adapter layer: extract subject headings from ISBNdb XML documents
//!
//! Subjects come back raw here. Cleaning (prefix stripping, placeholder
//! removal) belongs to the normalizer, not to the wire format.

use crate::lookup::domain::LookupError;
use crate::lookup::xml::XmlDocument;

/// Element carrying one subject heading
pub const SUBJECT_ELEMENT: &str = "Subject";
/// Element ISBNdb uses to report request failures (bad key, quota)
pub const ERROR_ELEMENT: &str = "ErrorMessage";

/// Raw subject strings, in document order, duplicates retained
pub fn subjects(doc: &XmlDocument) -> Result<Vec<String>, LookupError> {
    if let Some(error) = doc.first_named(ERROR_ELEMENT) {
        let message = error.text().unwrap_or("Unknown error");
        return Err(LookupError::ApiError(message.to_string()));
    }

    Ok(doc
        .elements_named(SUBJECT_ELEMENT)
        .into_iter()
        .filter_map(|e| e.text())
        .map(String::from)
        .collect())
}
