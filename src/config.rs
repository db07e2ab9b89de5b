//! Lint configuration
//!
//! Options come in three layers, later ones winning key by key:
//! built-in defaults, shared settings, then the rule's own options.
//!
//! ```json
//! {
//!   "classNameRegex": "\\b(class|className)\\b",
//!   "calleesRegex": "\\b(clsx|cls|classnames)\\b",
//!   "tagsRegex": "\\b(tss)\\b",
//!   "rankTablePath": "class-order.json",
//!   "sort": true,
//!   "extract": true
//! }
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extractors::class_names::{PatternSet, SiteMatchers};
use crate::rules::LintOptions;

pub const DEFAULT_CLASS_NAME_REGEX: &str = r"\b(class|className)\b";
pub const DEFAULT_CALLEES_REGEX: &str = r"\b(clsx|cls|classnames)\b";
pub const DEFAULT_TAGS_REGEX: &str = r"\b(tss)\b";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration layer must be a JSON object, got {0}")]
    NotAnObject(String),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Resolved configuration of one linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LintConfig {
    /// Attribute names holding class names
    pub class_name_regex: String,
    /// Callees whose arguments hold class names
    pub callees_regex: String,
    /// Template tags whose template holds class names
    pub tags_regex: String,
    /// Rank table file; searched for upwards when unset
    pub rank_table_path: Option<String>,
    /// Sort classes moved into extracted constants
    pub sort: bool,
    /// Let attributes move marked class lists into constants
    pub extract: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            class_name_regex: DEFAULT_CLASS_NAME_REGEX.to_string(),
            callees_regex: DEFAULT_CALLEES_REGEX.to_string(),
            tags_regex: DEFAULT_TAGS_REGEX.to_string(),
            rank_table_path: None,
            sort: true,
            extract: true,
        }
    }
}

impl LintConfig {
    /// Layer shared `settings` and rule `options` over the defaults
    ///
    /// Each layer is a JSON object; its keys replace the ones below. `null`
    /// layers are skipped.
    pub fn from_layers(settings: Option<&Value>, options: Option<&Value>) -> Result<Self, ConfigError> {
        let mut merged = match serde_json::to_value(Self::default())? {
            Value::Object(map) => map,
            other => return Err(ConfigError::NotAnObject(other.to_string())),
        };

        for layer in [settings, options].into_iter().flatten() {
            merge_layer(&mut merged, layer)?;
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    /// Compile the site patterns
    pub fn compile(&self) -> Result<SiteMatchers, ConfigError> {
        Ok(SiteMatchers::new(
            compile_pattern(&self.class_name_regex)?,
            compile_pattern(&self.callees_regex)?,
            compile_pattern(&self.tags_regex)?,
        ))
    }

    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            extract: self.extract,
            sort_extracted: self.sort,
        }
    }
}

fn merge_layer(merged: &mut Map<String, Value>, layer: &Value) -> Result<(), ConfigError> {
    match layer {
        Value::Null => Ok(()),
        Value::Object(map) => {
            for (key, value) in map {
                merged.insert(key.clone(), value.clone());
            }
            Ok(())
        }
        other => Err(ConfigError::NotAnObject(other.to_string())),
    }
}

fn compile_pattern(pattern: &str) -> Result<PatternSet, ConfigError> {
    let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(PatternSet::new(vec![regex]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = LintConfig::from_layers(None, None).unwrap();
        assert_eq!(config, LintConfig::default());
        assert!(config.sort);
        assert!(config.extract);
        assert!(config.rank_table_path.is_none());

        let matchers = config.compile().unwrap();
        assert!(matchers.attributes.matches("className"));
        assert!(matchers.attributes.matches("class"));
        assert!(!matchers.attributes.matches("id"));
        assert!(matchers.callees.matches("classnames"));
        assert!(matchers.tags.matches("tss"));
        assert!(!matchers.tags.matches("css"));
    }

    #[test]
    fn test_options_override_settings() {
        let settings = json!({ "calleesRegex": "\\b(ctl)\\b", "rankTablePath": "order.json" });
        let options = json!({ "calleesRegex": "\\b(jeff)\\b", "sort": false });

        let config = LintConfig::from_layers(Some(&settings), Some(&options)).unwrap();
        assert_eq!(config.callees_regex, "\\b(jeff)\\b");
        assert_eq!(config.rank_table_path.as_deref(), Some("order.json"));
        assert_eq!(config.class_name_regex, DEFAULT_CLASS_NAME_REGEX);
        assert_eq!(
            config.lint_options(),
            LintOptions {
                extract: true,
                sort_extracted: false,
            }
        );
    }

    #[test]
    fn test_null_layer_is_skipped() {
        let config = LintConfig::from_layers(Some(&Value::Null), None).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_invalid_layers() {
        let result = LintConfig::from_layers(Some(&json!(["sort"])), None);
        assert!(matches!(result, Err(ConfigError::NotAnObject(_))));

        let result = LintConfig::from_layers(None, Some(&json!({ "sort": "yes" })));
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = LintConfig::from_layers(Some(&json!({ "calleeRegex": "\\b(ctl)\\b" })), None);
        match result {
            Err(ConfigError::Json(e)) => assert!(e.to_string().contains("calleeRegex")),
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let config = LintConfig {
            tags_regex: "(unclosed".to_string(),
            ..LintConfig::default()
        };
        match config.compile() {
            Err(ConfigError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got {:?}", other.map(|_| ())),
        }
    }
}
