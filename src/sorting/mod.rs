//! Class list sorting
//!
//! - **tokenizer**: class string → classes, gaps, prefix, suffix
//! - **marker**: `extract-[Name]` detection and stripping
//! - **builder**: inline and extracted class string layout
//! - **reorder**: the per-fragment reorder & rewrite engine

pub mod builder;
pub mod marker;
pub mod reorder;
pub mod tokenizer;

pub use builder::{build_extracted_class_name, build_inline_class_name};
pub use marker::{extract_marker, ExtractionMarker, EXTRACT_IDENTIFIER_RE};
pub use reorder::{reorder, Reordered};
pub use tokenizer::split_class_name;
