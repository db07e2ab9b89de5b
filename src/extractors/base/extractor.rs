// Source context shared by the class-name extractors
//
// Holds the file being linted and the text accessors every other module uses
// to turn tree-sitter byte ranges back into source text.

use tracing::debug;
use tree_sitter::Node;

/// Position where extracted declarations are appended
///
/// `anchor` is the end byte of the last top-level statement and `column` the
/// character column that statement starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramTail {
    pub anchor: usize,
    pub column: usize,
}

/// Read-only view over one source file
pub struct BaseExtractor<'a> {
    pub file_path: &'a str,
    pub content: &'a str,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(file_path: &'a str, content: &'a str) -> Self {
        Self { file_path, content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> &'a str {
        self.slice(node.start_byte(), node.end_byte())
    }

    /// Get text for a byte range, or "" when the range is not valid UTF-8 boundaries
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        match self.content.get(start..end) {
            Some(text) => text,
            None => {
                debug!(
                    "Invalid byte range {}..{} in '{}' (len {})",
                    start,
                    end,
                    self.file_path,
                    self.content.len()
                );
                ""
            }
        }
    }

    /// Column of a byte offset, counted in characters from the start of its line
    pub fn char_column(&self, byte_offset: usize) -> usize {
        let offset = byte_offset.min(self.content.len());
        let line_start = self
            .content
            .get(..offset)
            .and_then(|before| before.rfind('\n'))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.content
            .get(line_start..offset)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Where declarations get appended: after the last top-level statement
    ///
    /// Comments are not statements. An empty program anchors at the end of the
    /// file with column 0.
    pub fn program_tail(&self, root: &Node) -> ProgramTail {
        let mut cursor = root.walk();
        let last_statement = root
            .named_children(&mut cursor)
            .filter(|child| !is_trivia(child))
            .last();

        match last_statement {
            Some(statement) => ProgramTail {
                anchor: statement.end_byte(),
                column: self.char_column(statement.start_byte()),
            },
            None => ProgramTail {
                anchor: self.content.len(),
                column: 0,
            },
        }
    }
}

/// Nodes that carry no program meaning (comments, hashbang)
pub(crate) fn is_trivia(node: &Node) -> bool {
    matches!(node.kind(), "comment" | "hash_bang_line")
}
