//! ClassLinter - Public API for linting and fixing class names
//!
//! Handles file parsing and runs the lint pass with the compiled
//! configuration. This is the entry point for hosts: lint one file, fix one
//! file, or lint a batch of files in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use tree_sitter::Parser;

use crate::config::LintConfig;
use crate::extractors::base::{BaseExtractor, Diagnostic};
use crate::extractors::class_names::SiteMatchers;
use crate::language::{detect_language_from_path, get_tree_sitter_language};
use crate::ranking::{RankOracle, RankTable, RankTableCache};
use crate::rules::{lint_tree, LintOptions};
use crate::utils::fixer::apply_edits;

/// Upper bound on lint-and-fix rounds in [`ClassLinter::fix`]
pub const MAX_FIX_PASSES: usize = 10;

/// Diagnostics of one file in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiagnostics {
    pub file_path: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Linter with a compiled configuration
///
/// Site patterns are compiled once here; rank tables are cached across calls.
pub struct ClassLinter {
    config: LintConfig,
    matchers: SiteMatchers,
    options: LintOptions,
    rank_tables: RankTableCache,
}

impl ClassLinter {
    pub fn new(config: LintConfig) -> Result<Self> {
        let matchers = config
            .compile()
            .context("Failed to compile class name patterns")?;
        let options = config.lint_options();

        Ok(Self {
            config,
            matchers,
            options,
            rank_tables: RankTableCache::new(),
        })
    }

    /// Build from shared settings and rule options layered over the defaults
    pub fn from_layers(settings: Option<&Value>, options: Option<&Value>) -> Result<Self> {
        let config = LintConfig::from_layers(settings, options)
            .context("Failed to read linter configuration")?;
        Self::new(config)
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Rank table for files under `base_dir`
    ///
    /// Uses the configured table path, or the nearest `class-order.json`.
    /// `None` means sorting is disabled; extraction still works.
    pub fn rank_table(&self, base_dir: &Path) -> Option<Arc<RankTable>> {
        let table = self
            .rank_tables
            .resolve(self.config.rank_table_path.as_deref(), base_dir);
        if table.is_none() {
            warn!(
                "No rank table available for '{}', sorting disabled",
                base_dir.display()
            );
        }
        table
    }

    /// Lint one file
    ///
    /// The language is picked from the file extension. Without an oracle class
    /// order is never reported.
    pub fn lint(
        &self,
        file_path: &str,
        content: &str,
        oracle: Option<&dyn RankOracle>,
    ) -> Result<Vec<Diagnostic>> {
        let language = detect_language_from_path(file_path)
            .ok_or_else(|| anyhow::anyhow!("Unsupported file extension: {}", file_path))?;

        let mut parser = Parser::new();
        let tree_sitter_language = get_tree_sitter_language(language)?;
        parser.set_language(&tree_sitter_language).map_err(|e| {
            anyhow::anyhow!("Failed to set parser language for {}: {}", language, e)
        })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse file: {}", file_path))?;
        if tree.root_node().has_error() {
            debug!("Syntax errors in {}, linting what was parsed", file_path);
        }

        let base = BaseExtractor::new(file_path, content);
        let mut diagnostics = Vec::new();
        let sites = lint_tree(
            &tree,
            &base,
            &self.matchers,
            self.options,
            oracle,
            &mut diagnostics,
        );

        debug!(
            "Found {} diagnostics in {} candidate sites of {} file: {}",
            diagnostics.len(),
            sites,
            language,
            file_path
        );
        Ok(diagnostics)
    }

    /// Lint one file and apply fixes until nothing is left to fix
    ///
    /// Fixes that overlap an earlier one in the same round are skipped, so the
    /// file is linted again after each round, at most [`MAX_FIX_PASSES`] times.
    pub fn fix(
        &self,
        file_path: &str,
        content: &str,
        oracle: Option<&dyn RankOracle>,
    ) -> Result<String> {
        let mut output = content.to_string();

        for pass in 1..=MAX_FIX_PASSES {
            let diagnostics = self.lint(file_path, &output, oracle)?;
            if diagnostics.is_empty() {
                break;
            }

            let fixed = apply_edits(&output, &diagnostics);
            if fixed == output {
                break;
            }
            debug!(
                "Fix pass {} applied {} diagnostics to {}",
                pass,
                diagnostics.len(),
                file_path
            );
            output = fixed;
        }

        Ok(output)
    }

    /// Lint `(file_path, content)` pairs in parallel, keeping input order
    ///
    /// Files that cannot be linted are logged and reported with no diagnostics.
    pub fn lint_batch(
        &self,
        files: &[(String, String)],
        oracle: Option<&dyn RankOracle>,
    ) -> Vec<FileDiagnostics> {
        files
            .par_iter()
            .map(|(file_path, content)| {
                let diagnostics = self
                    .lint(file_path, content, oracle)
                    .unwrap_or_else(|e| {
                        warn!("Failed to lint {}: {}", file_path, e);
                        Vec::new()
                    });
                FileDiagnostics {
                    file_path: file_path.clone(),
                    diagnostics,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::DiagnosticKind;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> RankTable {
        RankTable::from_ordered([
            "container", "flex", "w-12", "p-0", "p-4", "text-xl", "font-bold", "sm:w-6", "sm:p-0",
            "lg:p-8",
        ])
    }

    fn linter() -> ClassLinter {
        ClassLinter::new(LintConfig::default()).unwrap()
    }

    #[test]
    fn test_lint_and_fix_tsx() {
        let code = r#"export const Card = () => <div className="sm:w-6 container w-12" />;"#;
        let table = table();
        let linter = linter();

        let diagnostics = linter.lint("Card.tsx", code, Some(&table)).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidOrder);

        let fixed = linter.fix("Card.tsx", code, Some(&table)).unwrap();
        assert_eq!(
            fixed,
            r#"export const Card = () => <div className="container w-12 sm:w-6" />;"#
        );

        // Fixing is idempotent
        assert!(linter.lint("Card.tsx", &fixed, Some(&table)).unwrap().is_empty());
    }

    #[test]
    fn test_fix_extracts_after_sorting_inner_fragment() {
        let code = r#"<p className={`w-12 ${a ? "p-4 flex" : ""} container extract-[X]`} />;"#;
        let table = table();
        let linter = linter();

        // The order fix and the extraction overlap, so they land in separate rounds
        let diagnostics = linter.lint("p.tsx", code, Some(&table)).unwrap();
        let kinds: Vec<DiagnosticKind> = diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::InvalidOrder, DiagnosticKind::InvalidInline]
        );

        let once = linter.fix("p.tsx", code, Some(&table)).unwrap();
        assert!(once.starts_with("<p className={X} />;"));
        assert!(once.contains("const X = `"));
        assert!(!once.contains("extract-["));

        let twice = linter.fix("p.tsx", &once, Some(&table)).unwrap();
        assert_eq!(once, twice);
        assert!(linter.lint("p.tsx", &once, Some(&table)).unwrap().is_empty());
    }

    #[test]
    fn test_lint_jsx_with_javascript_grammar() {
        let code = r#"const el = <p class="p-4 flex">{clsx("sm:p-0 p-0")}</p>;"#;
        let table = table();

        let fixed = linter().fix("view.jsx", code, Some(&table)).unwrap();
        assert_eq!(
            fixed,
            r#"const el = <p class="flex p-4">{clsx("p-0 sm:p-0")}</p>;"#
        );
    }

    #[test]
    fn test_plain_typescript_calls() {
        let code = "const classes: string = clsx('w-12 container');\n";
        let table = table();

        let fixed = linter().fix("classes.ts", code, Some(&table)).unwrap();
        assert_eq!(fixed, "const classes: string = clsx('container w-12');\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = linter().lint("styles.css", ".a { color: red; }", None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unsupported file extension"));
    }

    #[test]
    fn test_options_layering() {
        let linter = ClassLinter::from_layers(
            Some(&json!({ "classNameRegex": "\\b(tw)\\b" })),
            Some(&json!({ "sort": false })),
        )
        .unwrap();
        assert!(!linter.config().sort);

        let code = r#"const a = <div tw="text-xl p-4 extract-[Title]" className="w-12 container" />;"#;
        let fixed = linter.fix("a.tsx", code, Some(&table())).unwrap();
        assert_eq!(
            fixed,
            "const a = <div tw={Title} className=\"w-12 container\" />;\n\nconst Title = `\n  text-xl\n  p-4\n`;"
        );
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = ClassLinter::from_layers(None, Some(&json!({ "calleesRegex": "(" })));
        assert!(result.is_err());
    }

    #[test]
    fn test_lint_batch_keeps_order() {
        let files = vec![
            ("a.tsx".to_string(), r#"<b className="w-12 container" />"#.to_string()),
            ("b.css".to_string(), ".b {}".to_string()),
            ("c.tsx".to_string(), r#"<i className="container w-12" />"#.to_string()),
            ("d.js".to_string(), r#"clsx("flex container", "p-4 p-0");"#.to_string()),
        ];
        let table = table();

        let results = linter().lint_batch(&files, Some(&table));
        let summary: Vec<(&str, usize)> = results
            .iter()
            .map(|r| (r.file_path.as_str(), r.diagnostics.len()))
            .collect();
        assert_eq!(
            summary,
            vec![("a.tsx", 1), ("b.css", 0), ("c.tsx", 0), ("d.js", 2)]
        );
    }

    #[test]
    fn test_rank_table_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join("class-order.json"),
            r#"["container", "w-12", "sm:w-6"]"#,
        )
        .unwrap();

        let linter = linter();
        let table = linter.rank_table(&nested).unwrap();
        let fixed = linter
            .fix(
                "Card.tsx",
                r#"<div className="sm:w-6 w-12 container" />"#,
                Some(table.as_ref()),
            )
            .unwrap();
        assert_eq!(fixed, r#"<div className="container w-12 sm:w-6" />"#);

        // Configured paths are resolved against the base directory
        let config = LintConfig {
            rank_table_path: Some("missing.json".to_string()),
            ..LintConfig::default()
        };
        let linter = ClassLinter::new(config).unwrap();
        assert!(linter.rank_table(&nested).is_none());
    }
}
