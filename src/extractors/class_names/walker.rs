//! Shape walker: builds the extraction tree for one expression
//!
//! Recurses through the expression shapes that can carry class names and
//! produces a tree whose leaves are fragments. The parent node is passed down
//! explicitly because one rule depends on it: objects given straight to
//! `classnames(...)` hold their class names in the keys, not the values.

use tree_sitter::Node;

use crate::extractors::base::{BaseExtractor, Extraction, ExtractionTree, Fragment};

use super::shapes::Shape;
use super::template::{template_parts, TemplatePart};

/// Callee whose object arguments map class names (keys) to conditions (values)
///
/// <https://www.npmjs.com/package/classnames>
pub const CLASSNAMES_CALLEE: &str = "classnames";

/// Extract class names deeply from `node`
///
/// `parent` is the node `node` was reached from (`None` at the top of an
/// attribute value). Unsupported shapes yield an empty container.
pub fn extract_class_names_deep<'tree>(
    node: Node<'tree>,
    parent: Option<Node<'tree>>,
    base: &BaseExtractor,
) -> Extraction<'tree> {
    let mut tree = ExtractionTree::new(node);

    match Shape::of(&node) {
        // "jeff" -> jeff
        Shape::Literal => {
            return match literal_fragment(node, base) {
                Some(fragment) => Extraction::Fragment(fragment),
                None => Extraction::Tree(tree),
            };
        }

        // `flex ${fullWidth ? 'w-4' : 'w-2'} container`
        // -> chunk "flex ", expression, chunk " container"
        Shape::TemplateLiteral => {
            for part in template_parts(&node, base) {
                let child = match part {
                    TemplatePart::Chunk(chunk) => {
                        Extraction::Fragment(chunk.into_fragment(node, base))
                    }
                    TemplatePart::Expression(Some(expression)) => {
                        extract_class_names_deep(expression, Some(node), base)
                    }
                    TemplatePart::Expression(None) => Extraction::empty(node),
                };
                tree.children.push(child);
            }
        }

        // fullWidth ? 'w-4' : 'w-2'
        Shape::Conditional {
            consequence,
            alternative,
        } => {
            for branch in [consequence, alternative].into_iter().flatten() {
                tree.children
                    .push(extract_class_names_deep(branch, Some(node), base));
            }
        }

        // hasError && 'bg-red'
        Shape::LogicalAnd { right } => {
            if let Some(right) = right {
                tree.children
                    .push(extract_class_names_deep(right, Some(node), base));
            }
        }

        // ['bg-green', 'w-4']
        Shape::Array => {
            for element in base.named_children_without_trivia(&node) {
                tree.children
                    .push(extract_class_names_deep(element, Some(node), base));
            }
        }

        // { background: 'red' } or, under classnames(), { 'flex p-4': isActive }
        Shape::Object => {
            let walk_keys = is_classnames_call(parent, base);
            for property in base.named_children_without_trivia(&node) {
                if property.kind() != "pair" {
                    continue;
                }
                let field = if walk_keys { "key" } else { "value" };
                if let Some(target) = property.child_by_field_name(field) {
                    tree.children
                        .push(extract_class_names_deep(target, Some(node), base));
                }
            }
        }

        // ("flex p-4") -> "flex p-4", keeping the enclosing parent
        Shape::Parenthesized => {
            if let Some(inner) = base.first_named_child(&node) {
                return extract_class_names_deep(inner, parent, base);
            }
        }

        Shape::Unsupported => {}
    }

    Extraction::Tree(tree)
}

/// Fragment for a string literal, quotes excluded from the span
fn literal_fragment<'tree>(node: Node<'tree>, base: &BaseExtractor) -> Option<Fragment<'tree>> {
    let start = node.start_byte() + 1;
    let end = node.end_byte().checked_sub(1)?;
    if end < start {
        return None;
    }

    Some(Fragment::new(
        node,
        start,
        end,
        base.slice(start, end).to_string(),
        String::new(),
        String::new(),
    ))
}

/// Whether `parent` is a direct `classnames(...)` call
fn is_classnames_call(parent: Option<Node>, base: &BaseExtractor) -> bool {
    let Some(parent) = parent else {
        return false;
    };
    if parent.kind() != "call_expression" {
        return false;
    }
    parent
        .child_by_field_name("function")
        .and_then(|callee| base.identifier_name(&callee))
        .is_some_and(|name| name == CLASSNAMES_CALLEE)
}
