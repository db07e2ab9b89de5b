//! Reorder & rewrite engine
//!
//! Takes one extracted fragment through marker stripping, tokenizing, ranking
//! and reassembly, and works out whether its class order changed.

use crate::extractors::base::{Fragment, Span};
use crate::ranking::{sort_class_list, RankOracle};

use super::builder::build_inline_class_name;
use super::marker::extract_marker;

/// Outcome of reordering one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    /// Range the replacement applies to
    pub span: Span,
    /// Classes in source order
    pub classes: Vec<String>,
    /// Classes in canonical order
    pub sorted_classes: Vec<String>,
    /// Rewritten text for `span`, delimiters and whitespace included
    pub replacement: String,
    /// Whether the class order differs from the source
    pub changed: bool,
    /// Extraction marker identifier, if the fragment carried one
    pub identifier: Option<String>,
}

/// Reorder the classes of one fragment
///
/// Returns `None` when the fragment holds no classes after the marker is
/// stripped. The original gaps are reused position by position, so only the
/// classes move and an already sorted list rebuilds byte-identical.
pub fn reorder(fragment: &mut Fragment, oracle: Option<&dyn RankOracle>) -> Option<Reordered> {
    let marker = extract_marker(fragment.value());
    let identifier = marker.identifier;
    if identifier.is_some() {
        let cleaned = marker.cleaned.into_owned();
        fragment.set_value(cleaned);
    }

    let split = fragment.split()?;
    if split.classes.is_empty() {
        return None;
    }

    let prefix = format!("{}{}", fragment.prefix, split.prefix);
    let suffix = format!("{}{}", split.suffix, fragment.suffix);

    let sorted_classes = sort_class_list(&split.classes, oracle);
    let changed = sorted_classes != split.classes;
    let replacement = build_inline_class_name(&sorted_classes, &split.whitespaces, &prefix, &suffix);

    Some(Reordered {
        span: fragment.span(),
        classes: split.classes.clone(),
        sorted_classes,
        replacement,
        changed,
        identifier,
    })
}
