//! Class order & extraction handler
//!
//! Visits every node of a tree, classifies candidate sites and runs each of
//! their fragments through the reorder engine:
//!
//! - no marker: `InvalidOrder` with one replace edit, only if the order changed
//! - marker on a site that supports extraction: `InvalidInline` with the two
//!   extraction edits, whether or not the order changed
//! - marker anywhere else: nothing

use tracing::debug;
use tree_sitter::Tree;

use crate::extractors::base::{BaseExtractor, Diagnostic, DiagnosticKind, Edit, ProgramTail, Span};
use crate::extractors::class_names::{classify_site, CandidateSite, SiteMatchers};
use crate::ranking::RankOracle;
use crate::sorting::reorder;

use super::extraction::emit_extraction;
use super::{DiagnosticSink, LintOptions};

/// Lint one parsed file, returning the number of candidate sites visited
pub fn lint_tree(
    tree: &Tree,
    base: &BaseExtractor,
    matchers: &SiteMatchers,
    options: LintOptions,
    oracle: Option<&dyn RankOracle>,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let root = tree.root_node();
    let tail = base.program_tail(&root);
    let mut sites = 0;

    base.walk_tree(&root, &mut |node| {
        if let Some(site) = classify_site(*node, base, matchers) {
            sites += 1;
            handle_site(&site, base, tail, options, oracle, sink);
        }
    });

    debug!("Linted {} candidate sites in '{}'", sites, base.file_path);
    sites
}

fn handle_site(
    site: &CandidateSite,
    base: &BaseExtractor,
    tail: ProgramTail,
    options: LintOptions,
    oracle: Option<&dyn RankOracle>,
    sink: &mut dyn DiagnosticSink,
) {
    let site_node = site.node();

    for mut fragment in site.fragments(base) {
        let Some(reordered) = reorder(&mut fragment, oracle) else {
            continue;
        };

        match reordered.identifier.as_deref() {
            None => {
                if reordered.changed {
                    let edit = Edit::Replace {
                        start: reordered.span.start,
                        end: reordered.span.end,
                        text: reordered.replacement.clone(),
                    };
                    sink.report(Diagnostic::new(
                        DiagnosticKind::InvalidOrder,
                        &site_node,
                        vec![edit],
                    ));
                }
            }
            Some(identifier) => {
                if !options.extract {
                    continue;
                }
                let Some(attribute_name) = site.attribute_name() else {
                    continue;
                };

                let classes = if options.sort_extracted {
                    &reordered.sorted_classes
                } else {
                    &reordered.classes
                };
                let edits = emit_extraction(
                    Span::of(&site_node),
                    attribute_name,
                    identifier,
                    classes,
                    tail,
                );
                sink.report(Diagnostic::new(
                    DiagnosticKind::InvalidInline,
                    &site_node,
                    edits.to_vec(),
                ));
            }
        }
    }
}
