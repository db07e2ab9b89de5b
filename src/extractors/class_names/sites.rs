//! Candidate site classification
//!
//! A candidate site is a node whose value may hold class names:
//!
//! - `<div className="...">` attributes, matched by attribute name
//! - `clsx("...", cond && "...")` calls, matched by callee identifier
//! - ``tss`...` `` tagged templates, matched by tag identifier

use regex::Regex;
use tree_sitter::Node;

use crate::extractors::base::{BaseExtractor, Fragment};

use super::flatten::flatten;
use super::walker::extract_class_names_deep;

/// Decides whether an attribute name, callee or tag is relevant
pub trait SiteMatcher: Send + Sync {
    fn matches(&self, name: &str) -> bool;
}

impl<F> SiteMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// Compiled patterns; a name matches if any pattern finds a match in it
#[derive(Debug, Clone, Default)]
pub struct PatternSet(pub Vec<Regex>);

impl PatternSet {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self(patterns)
    }
}

impl SiteMatcher for PatternSet {
    fn matches(&self, name: &str) -> bool {
        self.0.iter().any(|pattern| pattern.is_match(name))
    }
}

/// The three matchers a lint pass classifies sites with
pub struct SiteMatchers {
    pub attributes: Box<dyn SiteMatcher>,
    pub callees: Box<dyn SiteMatcher>,
    pub tags: Box<dyn SiteMatcher>,
}

impl SiteMatchers {
    pub fn new(
        attributes: impl SiteMatcher + 'static,
        callees: impl SiteMatcher + 'static,
        tags: impl SiteMatcher + 'static,
    ) -> Self {
        Self {
            attributes: Box::new(attributes),
            callees: Box::new(callees),
            tags: Box::new(tags),
        }
    }
}

impl std::fmt::Debug for SiteMatchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteMatchers").finish_non_exhaustive()
    }
}

/// A node that was classified as holding class names
#[derive(Debug, Clone)]
pub enum CandidateSite<'tree> {
    /// `name="..."` / `name={...}` on a JSX element
    Attribute {
        node: Node<'tree>,
        name: String,
        value: Option<Node<'tree>>,
    },
    /// `callee(arg, arg, ...)`
    CallArguments {
        node: Node<'tree>,
        arguments: Node<'tree>,
    },
    /// ``tag`...` ``
    TaggedTemplate {
        node: Node<'tree>,
        template: Node<'tree>,
    },
}

impl<'tree> CandidateSite<'tree> {
    /// Node diagnostics for this site are reported on
    pub fn node(&self) -> Node<'tree> {
        match self {
            CandidateSite::Attribute { node, .. }
            | CandidateSite::CallArguments { node, .. }
            | CandidateSite::TaggedTemplate { node, .. } => *node,
        }
    }

    /// Only attributes can be replaced by an identifier reference
    pub fn supports_extraction(&self) -> bool {
        matches!(self, CandidateSite::Attribute { .. })
    }

    /// Attribute name, for attribute sites
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            CandidateSite::Attribute { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Usable fragments of every walked expression, in source order
    pub fn fragments(&self, base: &BaseExtractor) -> Vec<Fragment<'tree>> {
        match self {
            CandidateSite::Attribute { value, .. } => attribute_literal(*value, base)
                .map(|literal| flatten(extract_class_names_deep(literal, None, base)))
                .unwrap_or_default(),
            CandidateSite::CallArguments { node, arguments } => base
                .named_children_without_trivia(arguments)
                .into_iter()
                .flat_map(|argument| flatten(extract_class_names_deep(argument, Some(*node), base)))
                .collect(),
            CandidateSite::TaggedTemplate { node, template } => {
                flatten(extract_class_names_deep(*template, Some(*node), base))
            }
        }
    }
}

/// Classify `node` as a candidate site, if it is one
pub fn classify_site<'tree>(
    node: Node<'tree>,
    base: &BaseExtractor,
    matchers: &SiteMatchers,
) -> Option<CandidateSite<'tree>> {
    match node.kind() {
        "jsx_attribute" => classify_attribute(node, base, matchers),
        "call_expression" => classify_call(node, base, matchers),
        _ => None,
    }
}

fn classify_attribute<'tree>(
    node: Node<'tree>,
    base: &BaseExtractor,
    matchers: &SiteMatchers,
) -> Option<CandidateSite<'tree>> {
    let mut children = base.named_children_without_trivia(&node).into_iter();

    // Namespaced names (xlink:href) are never class attributes
    let name_node = children.next()?;
    if name_node.kind() != "property_identifier" {
        return None;
    }
    let name = base.get_node_text(&name_node);
    if !matchers.attributes.matches(name) {
        return None;
    }

    Some(CandidateSite::Attribute {
        node,
        name: name.to_string(),
        value: children.next(),
    })
}

fn classify_call<'tree>(
    node: Node<'tree>,
    base: &BaseExtractor,
    matchers: &SiteMatchers,
) -> Option<CandidateSite<'tree>> {
    let function = node.child_by_field_name("function")?;
    let name = base.identifier_name(&function)?;
    let arguments = node.child_by_field_name("arguments")?;

    match arguments.kind() {
        "arguments" if matchers.callees.matches(name) => {
            Some(CandidateSite::CallArguments { node, arguments })
        }
        "template_string" if matchers.tags.matches(name) => Some(CandidateSite::TaggedTemplate {
            node,
            template: arguments,
        }),
        _ => None,
    }
}

/// The literal an attribute value walks from
///
/// `"..."` itself, or the string / template inside `{...}`. Other expressions
/// in braces (calls in particular) are reached as their own sites.
fn attribute_literal<'tree>(value: Option<Node<'tree>>, base: &BaseExtractor) -> Option<Node<'tree>> {
    let value = value?;
    match value.kind() {
        "string" => Some(value),
        "jsx_expression" => base
            .first_named_child(&value)
            .filter(|expression| matches!(expression.kind(), "string" | "template_string")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&crate::language::get_tree_sitter_language("tsx").unwrap())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    fn matchers() -> SiteMatchers {
        SiteMatchers::new(
            PatternSet::new(vec![Regex::new(r"\b(class|className)\b").unwrap()]),
            PatternSet::new(vec![Regex::new(r"\b(clsx|cls|classnames)\b").unwrap()]),
            PatternSet::new(vec![Regex::new(r"\b(tss)\b").unwrap()]),
        )
    }

    fn sites<'tree>(tree: &'tree Tree, base: &BaseExtractor) -> Vec<CandidateSite<'tree>> {
        let matchers = matchers();
        let mut sites = Vec::new();
        base.walk_tree(&tree.root_node(), &mut |node| {
            if let Some(site) = classify_site(*node, base, &matchers) {
                sites.push(site);
            }
        });
        sites
    }

    fn values(fragments: &[Fragment]) -> Vec<String> {
        fragments.iter().map(|f| f.value().to_string()).collect()
    }

    #[test]
    fn test_attribute_sites() {
        let code = r#"const a = <div className="flex p-4" id="main" class={'grid'} />;"#;
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let sites = sites(&tree, &base);
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].attribute_name(), Some("className"));
        assert!(sites[0].supports_extraction());
        assert_eq!(values(&sites[0].fragments(&base)), vec!["flex p-4"]);
        assert_eq!(sites[1].attribute_name(), Some("class"));
        assert_eq!(values(&sites[1].fragments(&base)), vec!["grid"]);
    }

    #[test]
    fn test_attribute_call_value_is_its_own_site() {
        let code = r#"const a = <div className={clsx("p-4 flex", active && "grid")} />;"#;
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let sites = sites(&tree, &base);
        assert_eq!(sites.len(), 2);
        assert!(sites[0].fragments(&base).is_empty());

        let call = &sites[1];
        assert!(matches!(call, CandidateSite::CallArguments { .. }));
        assert!(!call.supports_extraction());
        assert_eq!(values(&call.fragments(&base)), vec!["p-4 flex", "grid"]);
    }

    #[test]
    fn test_valueless_attribute_yields_nothing() {
        let code = "const a = <input className disabled />;";
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let sites = sites(&tree, &base);
        assert_eq!(sites.len(), 1);
        assert!(sites[0].fragments(&base).is_empty());
    }

    #[test]
    fn test_classnames_call_walks_object_keys() {
        let code = r#"classnames("p-4", { "flex container": isError });"#;
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let sites = sites(&tree, &base);
        assert_eq!(sites.len(), 1);
        assert_eq!(
            values(&sites[0].fragments(&base)),
            vec!["p-4", "flex container"]
        );
    }

    #[test]
    fn test_tagged_template_site() {
        let code = "const styles = tss`\n  p-4 flex\n`;\nconst other = css`p-4`;";
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let sites = sites(&tree, &base);
        assert_eq!(sites.len(), 1);
        assert!(matches!(sites[0], CandidateSite::TaggedTemplate { .. }));
        assert_eq!(values(&sites[0].fragments(&base)), vec!["\n  p-4 flex\n"]);
    }

    #[test]
    fn test_unmatched_and_member_callees_are_ignored() {
        let code = r#"format("p-4 flex"); utils.clsx("p-4 flex"); tss("p-4");"#;
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        assert!(sites(&tree, &base).is_empty());
    }

    #[test]
    fn test_closure_matcher() {
        let matchers = SiteMatchers::new(
            |name: &str| name == "tw",
            PatternSet::default(),
            PatternSet::default(),
        );
        let code = r#"const a = <div tw="p-4" className="flex" />;"#;
        let tree = parse(code);
        let base = BaseExtractor::new("test.tsx", code);

        let mut names = Vec::new();
        base.walk_tree(&tree.root_node(), &mut |node| {
            if let Some(site) = classify_site(*node, &base, &matchers) {
                names.push(site.attribute_name().map(str::to_string));
            }
        });
        assert_eq!(names, vec![Some("tw".to_string())]);
    }
}
