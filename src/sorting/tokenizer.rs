//! Class-name tokenizer
//!
//! Splits a class string into class tokens and the separators between them.
//! Separators are whitespace runs and `${...}` placeholders; a placeholder is
//! never a class, it only ever fills a gap.

use regex::Regex;
use std::sync::LazyLock;

use crate::extractors::base::SplitResult;

/// Whitespace runs or interpolation placeholders (`${...}`)
pub(crate) static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}|\s+").unwrap());

/// Split a class string into classes, separators, prefix and suffix
///
/// Returns `None` for empty or whitespace-only input. Neighbouring separators
/// are merged, so `"a ${b} c"` yields classes `["a", "c"]` with the single gap
/// `" ${b} "`. A string made only of separators yields no classes.
pub fn split_class_name(class_name: &str) -> Option<SplitResult> {
    if class_name.trim().is_empty() {
        return None;
    }

    // (text, is_separator), empty parts never pushed
    let mut parts: Vec<(String, bool)> = Vec::new();
    let mut last = 0;
    for separator in SEPARATOR_RE.find_iter(class_name) {
        if separator.start() > last {
            parts.push((class_name[last..separator.start()].to_string(), false));
        }
        match parts.last_mut() {
            Some((text, true)) => text.push_str(separator.as_str()),
            _ => parts.push((separator.as_str().to_string(), true)),
        }
        last = separator.end();
    }
    if last < class_name.len() {
        parts.push((class_name[last..].to_string(), false));
    }

    // Head & tail separators matter when every class sits on its own line
    let mut prefix = String::new();
    if matches!(parts.first(), Some((_, true))) {
        prefix = parts.remove(0).0;
    }
    let mut suffix = String::new();
    if matches!(parts.last(), Some((_, true))) {
        if let Some((text, _)) = parts.pop() {
            suffix = text;
        }
    }

    let mut classes = Vec::with_capacity(parts.len() / 2 + 1);
    let mut whitespaces = Vec::with_capacity(parts.len() / 2);
    for (text, is_separator) in parts {
        if is_separator {
            whitespaces.push(text);
        } else {
            classes.push(text);
        }
    }

    Some(SplitResult {
        classes,
        whitespaces,
        prefix,
        suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_not_split() {
        assert!(split_class_name("").is_none());
        assert!(split_class_name("   \n\t ").is_none());
    }

    #[test]
    fn test_single_class() {
        let split = split_class_name("flex").unwrap();
        assert_eq!(split.classes, vec!["flex"]);
        assert!(split.whitespaces.is_empty());
        assert_eq!(split.prefix, "");
        assert_eq!(split.suffix, "");
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let input = "\n  fixed\n  right-0   top-0\t\n";
        let split = split_class_name(input).unwrap();
        assert_eq!(split.classes, vec!["fixed", "right-0", "top-0"]);
        assert_eq!(split.whitespaces, vec!["\n  ", "   "]);
        assert_eq!(split.prefix, "\n  ");
        assert_eq!(split.suffix, "\t\n");
        assert_eq!(split.join(), input);
    }

    #[test]
    fn test_placeholder_is_a_separator() {
        let input = "p-4 ${size} flex";
        let split = split_class_name(input).unwrap();
        assert_eq!(split.classes, vec!["p-4", "flex"]);
        assert_eq!(split.whitespaces, vec![" ${size} "]);
        assert_eq!(split.join(), input);
    }

    #[test]
    fn test_placeholder_glued_to_class() {
        let input = "a${b}c";
        let split = split_class_name(input).unwrap();
        assert_eq!(split.classes, vec!["a", "c"]);
        assert_eq!(split.whitespaces, vec!["${b}"]);
        assert_eq!(split.join(), input);
    }

    #[test]
    fn test_separators_only_yield_no_classes() {
        let split = split_class_name("  ${x}  ").unwrap();
        assert!(split.classes.is_empty());
        assert!(split.whitespaces.is_empty());
        assert_eq!(split.prefix, "  ${x}  ");
        assert_eq!(split.suffix, "");
    }

    #[test]
    fn test_round_trip_on_assorted_inputs() {
        let inputs = [
            "sm:w-6 container w-12",
            "  leading",
            "trailing  ",
            " both ",
            "a\n\n\tb  c",
            "${x} a ${y}",
            "w-[10px] bg-[url('a b')]",
        ];
        for input in inputs {
            let split = split_class_name(input).unwrap();
            assert_eq!(split.join(), input, "round trip failed for {:?}", input);
            if !split.classes.is_empty() {
                assert_eq!(split.whitespaces.len(), split.classes.len() - 1);
            }
        }
    }
}
