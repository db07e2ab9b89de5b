//! Rank oracle: the external source of canonical class order
//!
//! The engine never decides what "canonical" means. It asks an oracle for a
//! key per class and sorts by it. Without an oracle every class is unranked
//! and nothing moves.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::rank_key::RankKey;

/// Maps class tokens to canonical order keys
///
/// `None` means the class is unknown to the oracle. Implementations must be
/// shareable across threads so batch linting can fan out.
pub trait RankOracle: Send + Sync {
    fn rank(&self, classes: &[&str]) -> Vec<(String, Option<RankKey>)>;
}

/// Per-class functions are oracles too
impl<F> RankOracle for F
where
    F: Fn(&str) -> Option<RankKey> + Send + Sync,
{
    fn rank(&self, classes: &[&str]) -> Vec<(String, Option<RankKey>)> {
        classes
            .iter()
            .map(|class| (class.to_string(), self(class)))
            .collect()
    }
}

/// Oracle that knows no class; sorting with it is the identity
#[derive(Debug, Clone, Copy, Default)]
pub struct Unranked;

impl RankOracle for Unranked {
    fn rank(&self, classes: &[&str]) -> Vec<(String, Option<RankKey>)> {
        classes.iter().map(|class| (class.to_string(), None)).collect()
    }
}

/// Compare two optional keys: unranked first, then ascending key
pub fn compare_rank(a: Option<&RankKey>, b: Option<&RankKey>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Sort a class list into canonical order
///
/// The sort is stable: equal keys keep their input order, and unranked classes
/// stay in front in the order they came. A missing oracle returns the input
/// order unchanged.
pub fn sort_class_list(classes: &[String], oracle: Option<&dyn RankOracle>) -> Vec<String> {
    let Some(oracle) = oracle else {
        return classes.to_vec();
    };

    let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
    let ranked: HashMap<String, Option<RankKey>> = oracle.rank(&class_refs).into_iter().collect();

    let mut keyed: Vec<(&String, Option<&RankKey>)> = classes
        .iter()
        .map(|class| (class, ranked.get(class).and_then(Option::as_ref)))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| compare_rank(*a, *b));

    keyed.into_iter().map(|(class, _)| class.clone()).collect()
}
