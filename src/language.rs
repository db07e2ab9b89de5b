//! Language Support - Shared tree-sitter language configuration
//!
//! Class names live in JSX attributes, helper calls and tagged templates, so the
//! only grammars we need are the JavaScript family. All grammar selection goes
//! through here so the manager and the tests agree on which parser reads what.

use anyhow::Result;

/// Languages the class-name linter can parse
pub const SUPPORTED_LANGUAGES: &[&str] = &["tsx", "typescript", "javascript", "jsx"];

/// Get tree-sitter language parser for a given language name
///
/// `jsx` is an alias for `javascript`: the JavaScript grammar parses JSX natively.
/// Plain `typescript` does NOT accept JSX, use `tsx` for component files.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "javascript" | "jsx" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: {}",
            language,
            SUPPORTED_LANGUAGES.join(", ")
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "tsx" => Some("tsx"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("jsx"),
        _ => None,
    }
}

/// Detect language from a file path, using its extension
pub fn detect_language_from_path(file_path: &str) -> Option<&'static str> {
    std::path::Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}
