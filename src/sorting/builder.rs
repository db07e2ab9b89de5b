//! Class-name string builders
//!
//! Rebuilds an inline class list after sorting, and lays out the constant
//! declaration an extracted class list is moved into.

/// Build an inline class string from classes, the gaps between them and the
/// surrounding prefix/suffix
///
/// Gaps are filled in order: `whitespaces[i]` follows `classes[i]`.
pub fn build_inline_class_name(
    classes: &[String],
    whitespaces: &[String],
    prefix: &str,
    suffix: &str,
) -> String {
    let mut result = String::from(prefix);
    for (i, class) in classes.iter().enumerate() {
        result.push_str(class);
        if let Some(whitespace) = whitespaces.get(i) {
            result.push_str(whitespace);
        }
    }
    result.push_str(suffix);
    result
}

/// Build the constant declaration an extracted class list is moved into
///
/// ```text
/// {indent}const Identifier = `
/// {indent}  class-a
/// {indent}  class-b
/// {indent}`;
/// ```
pub fn build_extracted_class_name(classes: &[String], identifier: &str, column: usize) -> String {
    let const_indent = " ".repeat(column);
    let class_indent = " ".repeat(column + 2);

    let mut result = format!("{}const {} = `\n", const_indent, identifier);
    for class in classes {
        result.push_str(&class_indent);
        result.push_str(class);
        result.push('\n');
    }
    result.push_str(&const_indent);
    result.push_str("`;");
    result
}
