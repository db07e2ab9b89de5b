//! Flatten an extraction tree into its usable fragments

use crate::extractors::base::{Extraction, Fragment};

/// Depth-first, left to right; unusable fragments are dropped
pub fn flatten(extraction: Extraction<'_>) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    collect(extraction, &mut fragments);
    fragments
}

fn collect<'tree>(extraction: Extraction<'tree>, fragments: &mut Vec<Fragment<'tree>>) {
    match extraction {
        Extraction::Fragment(fragment) => {
            if fragment.is_usable() {
                fragments.push(fragment);
            }
        }
        Extraction::Tree(tree) => {
            for child in tree.children {
                collect(child, fragments);
            }
        }
    }
}
