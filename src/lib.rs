// classlint core - class-name ordering and extraction for TSX / JavaScript sources
//
// Architecture: tree-sitter parses, the extractors find class-name fragments in
// candidate sites, the sorting engine reorders them against a rank oracle, and
// the lint pass turns differences into diagnostics carrying byte-exact edits.

pub mod config;
pub mod extractors;
pub mod language;
pub mod manager;
pub mod ranking;
pub mod rules;
pub mod sorting;
pub mod utils;

pub use config::{ConfigError, LintConfig};
pub use extractors::base::{Diagnostic, DiagnosticKind, Edit, Span};
pub use manager::{ClassLinter, FileDiagnostics};
pub use ranking::{RankKey, RankOracle, RankTable, RankTableCache, Unranked};
pub use rules::{lint_tree, DiagnosticSink, LintOptions};
pub use utils::fixer::apply_edits;
