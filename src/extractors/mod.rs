//! Class-name extractors
//!
//! This module turns tree-sitter trees into the class-name fragments the
//! sorting engine works on.
//!
//! # Architecture
//!
//! - `base` - shared data model (spans, fragments, edits, diagnostics) and tree helpers
//! - `class_names` - shape walker, flattener and candidate site classifier

pub mod base;
pub mod class_names;

// Re-export the public API
pub use base::{
    BaseExtractor, Diagnostic, DiagnosticKind, Edit, Extraction, ExtractionTree, Fragment,
    ProgramTail, Span, SplitResult,
};
pub use class_names::{
    classify_site, extract_class_names_deep, flatten, CandidateSite, PatternSet, SiteMatcher,
    SiteMatchers,
};
