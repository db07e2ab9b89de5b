//! File-backed rank table
//!
//! The simplest useful oracle: a JSON file listing classes in canonical order
//! (`["container", "flex", ...]`, rank = index) or mapping classes to explicit
//! ranks (`{"container": 0, "sm:flex": "18446744073709551616"}`). Ranks above
//! `u64::MAX` must be written as strings.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use super::oracle::RankOracle;
use super::rank_key::RankKey;

#[derive(Debug, thiserror::Error)]
pub enum RankTableError {
    #[error("failed to read rank table '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rank table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankTableFile {
    Ordered(Vec<String>),
    Keyed(HashMap<String, RankKey>),
}

/// Class → rank lookup loaded from a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankTable {
    ranks: HashMap<String, RankKey>,
}

impl RankTable {
    /// Rank classes by their position; a repeated class keeps its first rank
    pub fn from_ordered<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for (index, class) in classes.into_iter().enumerate() {
            ranks.entry(class.into()).or_insert_with(|| RankKey::from(index));
        }
        Self { ranks }
    }

    pub fn from_ranks(ranks: HashMap<String, RankKey>) -> Self {
        Self { ranks }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RankTableError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Parse raw file bytes; invalid UTF-8 is a JSON error
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, RankTableError> {
        let table = match serde_json::from_slice::<RankTableFile>(bytes)? {
            RankTableFile::Ordered(classes) => Self::from_ordered(classes),
            RankTableFile::Keyed(ranks) => Self::from_ranks(ranks),
        };
        Ok(table)
    }

    pub fn get(&self, class: &str) -> Option<&RankKey> {
        self.ranks.get(class)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl RankOracle for RankTable {
    fn rank(&self, classes: &[&str]) -> Vec<(String, Option<RankKey>)> {
        classes
            .iter()
            .map(|class| (class.to_string(), self.get(class).cloned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_table() {
        let table = RankTable::from_json_str(r#"["container", "p-4", "container"]"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("container"), Some(&RankKey::from(0u64)));
        assert_eq!(table.get("p-4"), Some(&RankKey::from(1u64)));
        assert_eq!(table.get("unknown"), None);
    }

    #[test]
    fn test_keyed_table_with_huge_ranks() {
        let table = RankTable::from_json_str(
            r#"{"flex": 3, "sm:flex": "340282366920938463463374607431768211456"}"#,
        )
        .unwrap();
        assert!(table.get("flex").unwrap() < table.get("sm:flex").unwrap());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            RankTable::from_json_str("{\"flex\": -1}"),
            Err(RankTableError::Json(_))
        ));
        assert!(RankTable::from_json_str("not json").is_err());
    }

    #[test]
    fn test_invalid_utf8_is_a_json_error() {
        let bytes = b"[\"flex\", \"p-\xff\"]";
        assert!(matches!(
            RankTable::from_json_slice(bytes),
            Err(RankTableError::Json(_))
        ));
    }

    #[test]
    fn test_table_as_oracle() {
        let table = RankTable::from_ordered(["a", "b"]);
        let ranked = table.rank(&["b", "x", "a"]);
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), Some(RankKey::from(1u64))),
                ("x".to_string(), None),
                ("a".to_string(), Some(RankKey::from(0u64))),
            ]
        );
    }
}
