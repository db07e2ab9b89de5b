//! Expression shapes the walker understands
//!
//! tree-sitter node kinds are mapped once onto a closed enum so the walker is a
//! single exhaustive `match`. New shapes are new variants.

use tree_sitter::Node;

/// Shape of an expression node, with the children each shape walks
#[derive(Debug, Clone, Copy)]
pub enum Shape<'tree> {
    /// `"flex p-4"` / `'flex p-4'`
    Literal,
    /// `` `flex ${cond ? "a" : "b"} p-4` ``
    TemplateLiteral,
    /// `cond ? "a" : "b"`; the condition is never scanned
    Conditional {
        consequence: Option<Node<'tree>>,
        alternative: Option<Node<'tree>>,
    },
    /// `cond && "a"`; the guard is never scanned
    LogicalAnd { right: Option<Node<'tree>> },
    /// `["a", cond && "b"]`
    Array,
    /// `{ key: value }`
    Object,
    /// `( expr )`, kept by tree-sitter, transparent for class names
    Parenthesized,
    /// Anything else contributes nothing
    Unsupported,
}

impl<'tree> Shape<'tree> {
    pub fn of(node: &Node<'tree>) -> Self {
        match node.kind() {
            "string" => Shape::Literal,
            "template_string" => Shape::TemplateLiteral,
            "ternary_expression" => Shape::Conditional {
                consequence: node.child_by_field_name("consequence"),
                alternative: node.child_by_field_name("alternative"),
            },
            "binary_expression" if is_logical_and(node) => Shape::LogicalAnd {
                right: node.child_by_field_name("right"),
            },
            "array" => Shape::Array,
            "object" => Shape::Object,
            "parenthesized_expression" => Shape::Parenthesized,
            _ => Shape::Unsupported,
        }
    }
}

fn is_logical_and(node: &Node) -> bool {
    node.child_by_field_name("operator")
        .map(|operator| operator.kind() == "&&")
        .unwrap_or(false)
}
