// Tree navigation methods for BaseExtractor
//
// Kept apart from extractor.rs: navigation over tree shape, plus identifier lookup.

use super::extractor::{is_trivia, BaseExtractor};
use tree_sitter::Node;

impl BaseExtractor<'_> {
    /// Walk tree with visitor, parents before children, in document order
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn walk_tree<'tree, F>(&self, node: &Node<'tree>, visitor: &mut F)
    where
        F: FnMut(&Node<'tree>),
    {
        visitor(node);

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.walk_tree(&child, visitor);
            }
        }
    }

    /// Named children, skipping comments
    pub fn named_children_without_trivia<'tree>(&self, node: &Node<'tree>) -> Vec<Node<'tree>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !is_trivia(child))
            .collect()
    }

    /// First named child that is not a comment
    pub fn first_named_child<'tree>(&self, node: &Node<'tree>) -> Option<Node<'tree>> {
        let mut cursor = node.walk();
        let first = node
            .named_children(&mut cursor)
            .find(|child| !is_trivia(child));
        first
    }

    /// Identifier text of a node, if it is a plain identifier
    ///
    /// Member expressions (`utils.clsx`) are not identifiers.
    pub fn identifier_name(&self, node: &Node) -> Option<&str> {
        match node.kind() {
            "identifier" | "property_identifier" => Some(self.get_node_text(node)),
            _ => None,
        }
    }
}
