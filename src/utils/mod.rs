// Utilities
//
// - fixer.rs: applies diagnostic edits to source text

pub mod fixer;

pub use fixer::apply_edits;
