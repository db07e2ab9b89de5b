//! Extraction emitter
//!
//! `<p className="p-4 flex extract-[Text]">` becomes `<p className={Text}>` and
//! a `const Text = \`...\`;` block is appended after the last top-level
//! statement of the file.

use crate::extractors::base::{Edit, ProgramTail, Span};
use crate::sorting::build_extracted_class_name;

/// The two edits that extract a class list into `identifier`
///
/// The whole attribute is replaced (its value may be a literal or a
/// template, so only the attribute bounds are reliable).
pub fn emit_extraction(
    site_span: Span,
    attribute_name: &str,
    identifier: &str,
    classes: &[String],
    tail: ProgramTail,
) -> [Edit; 2] {
    let reference = Edit::Replace {
        start: site_span.start,
        end: site_span.end,
        text: format!("{}={{{}}}", attribute_name, identifier),
    };
    let declaration = Edit::Append {
        anchor: tail.anchor,
        text: format!(
            "\n\n{}",
            build_extracted_class_name(classes, identifier, tail.column)
        ),
        indent: tail.column,
    };
    [reference, declaration]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_reference_and_declaration() {
        let classes = vec!["p-4".to_string(), "text-xl".to_string()];
        let tail = ProgramTail {
            anchor: 120,
            column: 2,
        };

        let [reference, declaration] =
            emit_extraction(Span::new(10, 40), "className", "Text1", &classes, tail);

        assert_eq!(
            reference,
            Edit::Replace {
                start: 10,
                end: 40,
                text: "className={Text1}".to_string(),
            }
        );
        assert_eq!(declaration.start(), 120);
        assert_eq!(
            declaration.text(),
            "\n\n  const Text1 = `\n    p-4\n    text-xl\n  `;"
        );
    }
}
