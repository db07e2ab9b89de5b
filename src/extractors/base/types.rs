// Base types for class-name extraction
//
// All data structures shared by the shape walker, the flattener, the reorder
// engine and the lint pass: source spans, extracted fragments, the transient
// extraction tree, edits and diagnostics.

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use tree_sitter::Node;

use crate::sorting::tokenizer::split_class_name;

/// Half-open byte range into the linted source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a whole tree-sitter node
    pub fn of(node: &Node) -> Self {
        Self {
            start: node.start_byte(),
            end: node.end_byte(),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A class-name string broken into tokens and the separators between them
///
/// `whitespaces[i]` sits between `classes[i]` and `classes[i + 1]`, so there is
/// always exactly one separator fewer than there are classes. Leading and
/// trailing separator runs are kept apart in `prefix` / `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    pub classes: Vec<String>,
    pub whitespaces: Vec<String>,
    pub prefix: String,
    pub suffix: String,
}

impl SplitResult {
    /// Reassemble the string this split was produced from
    pub fn join(&self) -> String {
        let mut result = self.prefix.clone();
        for (i, class) in self.classes.iter().enumerate() {
            result.push_str(class);
            if let Some(whitespace) = self.whitespaces.get(i) {
                result.push_str(whitespace);
            }
        }
        result.push_str(&self.suffix);
        result
    }
}

/// One contiguous run of class-name text found in the source
///
/// `start..end` is the exact rewritable range. For plain string literals it
/// excludes the quotes; for template chunks it includes the delimiters around
/// the raw text (backtick, `${` or `}`), which are carried in `prefix` and
/// `suffix` so a rewrite can re-emit them untouched.
#[derive(Debug, Clone)]
pub struct Fragment<'tree> {
    node: Node<'tree>,
    pub start: usize,
    pub end: usize,
    pub prefix: String,
    pub suffix: String,
    raw_value: String,
    value: String,
    usable: bool,
    split: OnceCell<Option<SplitResult>>,
}

impl<'tree> Fragment<'tree> {
    pub fn new(
        node: Node<'tree>,
        start: usize,
        end: usize,
        raw_value: String,
        prefix: String,
        suffix: String,
    ) -> Self {
        let usable = is_usable_class_value(&raw_value);
        Self {
            node,
            start,
            end,
            prefix,
            suffix,
            value: raw_value.clone(),
            raw_value,
            usable,
            split: OnceCell::new(),
        }
    }

    /// Node the fragment was extracted from
    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Text exactly as it was found in the source
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Current value (the raw value, or the cleaned one after `set_value`)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, recomputing usability and dropping the cached split
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.usable = is_usable_class_value(&self.value);
        self.split = OnceCell::new();
    }

    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Split the current value into classes and separators (cached)
    pub fn split(&self) -> Option<&SplitResult> {
        self.split
            .get_or_init(|| {
                if self.usable {
                    split_class_name(&self.value)
                } else {
                    None
                }
            })
            .as_ref()
    }
}

/// Whether a string can hold class names worth sorting
///
/// Blank strings and strings without a single ASCII letter are skipped, and so
/// is anything containing `{{` (templating-engine escapes, same as Prettier).
pub fn is_usable_class_value(value: &str) -> bool {
    !value.trim().is_empty()
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && !value.contains("{{")
}

/// Structural container produced by the shape walker
#[derive(Debug, Clone)]
pub struct ExtractionTree<'tree> {
    pub node: Node<'tree>,
    pub children: Vec<Extraction<'tree>>,
}

impl<'tree> ExtractionTree<'tree> {
    pub fn new(node: Node<'tree>) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }
}

/// Result of walking one expression: a container or a leaf fragment
#[derive(Debug, Clone)]
pub enum Extraction<'tree> {
    Tree(ExtractionTree<'tree>),
    Fragment(Fragment<'tree>),
}

impl<'tree> Extraction<'tree> {
    /// An empty container (unsupported or text-less node)
    pub fn empty(node: Node<'tree>) -> Self {
        Extraction::Tree(ExtractionTree::new(node))
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            Extraction::Tree(tree) => tree.node,
            Extraction::Fragment(fragment) => fragment.node(),
        }
    }
}

/// A single source rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Edit {
    /// Replace `start..end` with `text`
    Replace {
        start: usize,
        end: usize,
        text: String,
    },
    /// Insert `text` right after the last top-level statement (at `anchor`)
    ///
    /// `indent` is the column of that statement, which the text is laid out against.
    Append {
        anchor: usize,
        text: String,
        indent: usize,
    },
}

impl Edit {
    /// Position the edit starts at in the original source
    pub fn start(&self) -> usize {
        match self {
            Edit::Replace { start, .. } => *start,
            Edit::Append { anchor, .. } => *anchor,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Edit::Replace { text, .. } | Edit::Append { text, .. } => text,
        }
    }
}

/// Kinds of problems the lint pass reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Class names are not in canonical order
    InvalidOrder,
    /// Inline class names carry an extraction marker
    InvalidInline,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidOrder => "invalidOrder",
            DiagnosticKind::InvalidInline => "invalidInline",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidOrder => "Invalid TailwindCSS class names order!",
            DiagnosticKind::InvalidInline => {
                "Invalid inline TailwindCSS class names with extract identifier present!"
            }
        }
    }
}

/// A reported problem together with the edits that fix it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Span of the candidate site (attribute, call or tagged template)
    pub span: Span,
    /// Start line number (1-based)
    pub line: u32,
    /// Start column number (0-based)
    pub column: u32,
    pub edits: Vec<Edit>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, site: &Node, edits: Vec<Edit>) -> Self {
        let position = site.start_position();
        Self {
            kind,
            message: kind.message().to_string(),
            span: Span::of(site),
            line: position.row as u32 + 1,
            column: position.column as u32,
            edits,
        }
    }
}
