//! Canonical class order
//!
//! - **rank_key**: arbitrary-size rank keys and their ordering
//! - **oracle**: the `RankOracle` seam and the stable canonical sort
//! - **table**: JSON rank tables implementing the oracle
//! - **cache**: table path resolution and a content-hash keyed cache

pub mod cache;
pub mod oracle;
pub mod rank_key;
pub mod table;

pub use cache::{resolve_rank_table_path, RankTableCache, DEFAULT_RANK_TABLE_FILE_NAME};
pub use oracle::{compare_rank, sort_class_list, RankOracle, Unranked};
pub use rank_key::{ParseRankKeyError, RankKey};
pub use table::{RankTable, RankTableError};
