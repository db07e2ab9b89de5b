//! Lint pass over a parsed source file
//!
//! - **class_order**: site handler reporting unsorted and extractable class lists
//! - **extraction**: edits that move a class list into a named constant

pub mod class_order;
pub mod extraction;

pub use class_order::lint_tree;
pub use extraction::emit_extraction;

use crate::extractors::base::Diagnostic;

/// Receives diagnostics as the lint pass finds them
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Switches for one lint pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOptions {
    /// Attribute sites may move marked class lists into constants
    pub extract: bool,
    /// Extracted constants list classes in canonical order
    pub sort_extracted: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            extract: true,
            sort_extracted: true,
        }
    }
}
