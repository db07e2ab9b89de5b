// Base types and tree helpers shared by the class-name extractors
//
// - types.rs: data model (Span, Fragment, SplitResult, ExtractionTree, Edit, Diagnostic)
// - extractor.rs: BaseExtractor, the read-only source view
// - tree_methods.rs: tree navigation helpers on BaseExtractor

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::{BaseExtractor, ProgramTail};
pub use types::{
    is_usable_class_value, Diagnostic, DiagnosticKind, Edit, Extraction, ExtractionTree,
    Fragment, Span, SplitResult,
};
