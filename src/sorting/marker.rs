//! Extraction marker parsing
//!
//! A class list can ask to be moved into a named constant by carrying
//! `extract-[Name]`. The marker is stripped before the list is tokenized.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `extract-[Identifier]`; an unclosed bracket never matches
pub static EXTRACT_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"extract-\[([^\]\s]+)\]").unwrap());

/// Class string with its extraction marker removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMarker<'a> {
    /// Input with the marker removed (not trimmed)
    pub cleaned: Cow<'a, str>,
    /// Name of the constant to extract into, if a marker was present
    pub identifier: Option<String>,
}

/// Find and strip the first extraction marker in `class_name`
///
/// Without a marker the input is handed back borrowed and unchanged.
pub fn extract_marker(class_name: &str) -> ExtractionMarker<'_> {
    match EXTRACT_IDENTIFIER_RE.captures(class_name) {
        Some(captures) => {
            let identifier = captures.get(1).map(|m| m.as_str().to_string());
            let cleaned = EXTRACT_IDENTIFIER_RE.replacen(class_name, 1, "");
            ExtractionMarker {
                cleaned: Cow::Owned(cleaned.into_owned()),
                identifier,
            }
        }
        None => ExtractionMarker {
            cleaned: Cow::Borrowed(class_name),
            identifier: None,
        },
    }
}
