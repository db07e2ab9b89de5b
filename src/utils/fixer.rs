// Fix applier
//
// Applies the edits carried by diagnostics to the source they were computed
// against. Every offset refers to the original text, so edits are ordered and
// spliced in a single pass.

use tracing::debug;

use crate::extractors::base::{Diagnostic, Edit, Span};

/// Apply every non-conflicting diagnostic's edits to `source`
///
/// A diagnostic is applied whole or not at all: if any of its edits overlaps
/// an edit of an earlier diagnostic, the diagnostic is skipped. Appends at the
/// same anchor land in the order they were reported.
pub fn apply_edits(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut accepted: Vec<&Edit> = Vec::new();

    for diagnostic in diagnostics {
        if diagnostic
            .edits
            .iter()
            .any(|edit| accepted.iter().any(|other| conflicts(edit, other)))
        {
            debug!(
                "Skipping {} at {}:{}: edits overlap an earlier fix",
                diagnostic.kind.as_str(),
                diagnostic.line,
                diagnostic.column
            );
            continue;
        }
        accepted.extend(diagnostic.edits.iter());
    }

    // Stable: equal keys keep report order
    accepted.sort_by_key(|edit| (edit.start(), matches!(edit, Edit::Replace { .. })));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in accepted {
        let (start, end) = match edit {
            Edit::Replace { start, end, .. } => (*start, *end),
            Edit::Append { anchor, .. } => (*anchor, *anchor),
        };
        let (Some(before), true) = (source.get(cursor..start), end <= source.len()) else {
            debug!("Skipping edit at {}..{}: outside of source", start, end);
            continue;
        };
        output.push_str(before);
        output.push_str(edit.text());
        cursor = end;
    }
    output.push_str(source.get(cursor..).unwrap_or_default());
    output
}

/// Whether two edits touch the same text
///
/// Replacements conflict when their ranges intersect (or are the same empty
/// range); an append conflicts with a replacement that strictly contains its
/// anchor. Appends never conflict with each other.
fn conflicts(a: &Edit, b: &Edit) -> bool {
    match (a, b) {
        (
            Edit::Replace {
                start: a_start,
                end: a_end,
                ..
            },
            Edit::Replace {
                start: b_start,
                end: b_end,
                ..
            },
        ) => {
            let (a_span, b_span) = (Span::new(*a_start, *a_end), Span::new(*b_start, *b_end));
            a_span.intersects(&b_span) || a_span == b_span
        }
        (Edit::Replace { start, end, .. }, Edit::Append { anchor, .. })
        | (Edit::Append { anchor, .. }, Edit::Replace { start, end, .. }) => {
            start < anchor && anchor < end
        }
        (Edit::Append { .. }, Edit::Append { .. }) => false,
    }
}
