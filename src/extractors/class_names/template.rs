//! Template literal chunks
//!
//! tree-sitter gives a template string its substitutions as children but no
//! node for the literal text between them, so chunks are cut from byte
//! offsets here. A chunk's span reaches over its delimiters (the backtick or
//! the `}` before it, the `${` or backtick after it) while its value is only
//! the raw text in between; the delimiters become the fragment's prefix and
//! suffix.

use tree_sitter::Node;

use crate::extractors::base::{BaseExtractor, Fragment};

/// Pieces of a template literal in source order
#[derive(Debug, Clone, Copy)]
pub enum TemplatePart<'tree> {
    Chunk(TemplateChunk),
    /// Expression inside `${...}`, `None` for an empty substitution
    Expression(Option<Node<'tree>>),
}

/// Byte layout of one literal chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateChunk {
    /// Start of the opening delimiter
    pub start: usize,
    /// End of the closing delimiter
    pub end: usize,
    /// Raw text range between the delimiters
    pub raw_start: usize,
    pub raw_end: usize,
}

impl TemplateChunk {
    /// Turn the chunk into a fragment whose prefix/suffix are its delimiters
    pub fn into_fragment<'tree>(
        self,
        template: Node<'tree>,
        base: &BaseExtractor,
    ) -> Fragment<'tree> {
        let slice = base.slice(self.start, self.end);
        let raw = base.slice(self.raw_start, self.raw_end);

        // Everything in the span around the raw text is delimiter
        let raw_offset = self.raw_start - self.start;
        let prefix = slice.get(..raw_offset).unwrap_or_default();
        let suffix = slice.get(raw_offset + raw.len()..).unwrap_or_default();

        Fragment::new(
            template,
            self.start,
            self.end,
            raw.to_string(),
            prefix.to_string(),
            suffix.to_string(),
        )
    }
}

/// Split a `template_string` node into chunk, expr, chunk, ..., chunk
pub fn template_parts<'tree>(
    template: &Node<'tree>,
    base: &BaseExtractor,
) -> Vec<TemplatePart<'tree>> {
    let mut cursor = template.walk();
    let substitutions: Vec<Node<'tree>> = template
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "template_substitution")
        .collect();

    let mut parts = Vec::with_capacity(substitutions.len() * 2 + 1);

    // Opening backtick
    let mut chunk_start = template.start_byte();
    let mut raw_start = chunk_start + 1;

    for substitution in &substitutions {
        // Closing "${" belongs to the chunk
        let raw_end = substitution.start_byte();
        parts.push(TemplatePart::Chunk(TemplateChunk {
            start: chunk_start,
            end: raw_end + 2,
            raw_start,
            raw_end,
        }));
        parts.push(TemplatePart::Expression(base.first_named_child(substitution)));

        // Next chunk opens with this substitution's "}"
        chunk_start = substitution.end_byte().saturating_sub(1);
        raw_start = substitution.end_byte();
    }

    // Closing backtick
    let template_end = template.end_byte();
    parts.push(TemplatePart::Chunk(TemplateChunk {
        start: chunk_start,
        end: template_end,
        raw_start: raw_start.min(template_end.saturating_sub(1)),
        raw_end: template_end.saturating_sub(1),
    }));

    parts
}
