// Class-name extraction from TSX / TypeScript / JavaScript trees
//
// - shapes.rs: node kind → Shape mapping
// - template.rs: template literal chunk layout
// - walker.rs: recursive shape walker building the extraction tree
// - flatten.rs: extraction tree → usable fragments
// - sites.rs: candidate site classification (attributes, calls, tagged templates)

pub mod flatten;
pub mod shapes;
pub mod sites;
pub mod template;
pub mod walker;

pub use flatten::flatten;
pub use shapes::Shape;
pub use sites::{classify_site, CandidateSite, PatternSet, SiteMatcher, SiteMatchers};
pub use template::{template_parts, TemplateChunk, TemplatePart};
pub use walker::{extract_class_names_deep, CLASSNAMES_CALLEE};
