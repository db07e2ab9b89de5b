//! Rank table resolution and caching
//!
//! Tables are re-read on every load but only re-parsed when their content
//! changed (blake3 hash), so a long-running host picks up edits to the table
//! without paying the parse on every file it lints.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use super::table::{RankTable, RankTableError};

/// File name searched for when no table path is configured
pub const DEFAULT_RANK_TABLE_FILE_NAME: &str = "class-order.json";

/// Resolve the rank table path
///
/// A configured path is resolved against `base_dir` (absolute paths win).
/// Otherwise `base_dir` and then each of its ancestors is searched for
/// [`DEFAULT_RANK_TABLE_FILE_NAME`].
pub fn resolve_rank_table_path(configured: Option<&str>, base_dir: &Path) -> Option<PathBuf> {
    if let Some(configured) = configured {
        return Some(base_dir.join(configured));
    }

    let found = base_dir
        .ancestors()
        .map(|dir| dir.join(DEFAULT_RANK_TABLE_FILE_NAME))
        .find(|candidate| candidate.is_file());

    if found.is_none() {
        warn!(
            "Failed to resolve path to '{}' from '{}'",
            DEFAULT_RANK_TABLE_FILE_NAME,
            base_dir.display()
        );
    }
    found
}

struct CachedTable {
    hash: String,
    table: Arc<RankTable>,
}

/// Rank tables keyed by resolved path, invalidated by content hash
#[derive(Default)]
pub struct RankTableCache {
    entries: Mutex<HashMap<PathBuf, CachedTable>>,
}

impl RankTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table at `path`, reusing the cached parse if the bytes are unchanged
    pub fn load(&self, path: &Path) -> Result<Arc<RankTable>, RankTableError> {
        let bytes = std::fs::read(path).map_err(|source| RankTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let hash = blake3::hash(&bytes).to_hex().to_string();

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = entries.get(path) {
            if cached.hash == hash {
                debug!("Rank table cache hit: {}", path.display());
                return Ok(Arc::clone(&cached.table));
            }
        }

        debug!("Rank table cache miss: {}", path.display());
        let table = Arc::new(RankTable::from_json_slice(&bytes)?);
        entries.insert(
            path.to_path_buf(),
            CachedTable {
                hash,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Resolve and load a table, degrading to `None` (with a warning) on any failure
    pub fn resolve(&self, configured: Option<&str>, base_dir: &Path) -> Option<Arc<RankTable>> {
        let path = resolve_rank_table_path(configured, base_dir)?;
        match self.load(&path) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Failed to load rank table from '{}': {}", path.display(), e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
