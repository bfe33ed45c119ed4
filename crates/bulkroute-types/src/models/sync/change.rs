use crate::models::Route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What should happen to one alias.
///
/// On the wire `Set` is the route object and `Delete` is `null`, which is how
/// the bulk route endpoint expects removals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RouteChange {
    /// Create or update the alias with this route.
    Set(Route),
    /// Remove the alias.
    Delete,
}

impl RouteChange {
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Set(route) => Some(route),
            Self::Delete => None,
        }
    }
}

impl fmt::Display for RouteChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(route) => write!(f, "-> {route}"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Per-alias delta against some baseline. An alias missing from the set is
/// left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    changes: BTreeMap<String, RouteChange>,
}

/// Breakdown of a change set by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    pub sets: usize,
    pub deletes: usize,
}

impl ChangeStats {
    pub fn total(&self) -> usize {
        self.sets + self.deletes
    }
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: impl Into<String>, change: RouteChange) -> Option<RouteChange> {
        self.changes.insert(alias.into(), change)
    }

    pub fn get(&self, alias: &str) -> Option<&RouteChange> {
        self.changes.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.changes.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RouteChange)> {
        self.changes.iter()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    pub fn stats(&self) -> ChangeStats {
        self.changes.values().fold(ChangeStats::default(), |mut stats, change| {
            match change {
                RouteChange::Set(_) => stats.sets += 1,
                RouteChange::Delete => stats.deletes += 1,
            }
            stats
        })
    }
}

impl FromIterator<(String, RouteChange)> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = (String, RouteChange)>>(iter: I) -> Self {
        Self { changes: iter.into_iter().collect() }
    }
}

impl IntoIterator for ChangeSet {
    type Item = (String, RouteChange);
    type IntoIter = std::collections::btree_map::IntoIter<String, RouteChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (&'a String, &'a RouteChange);
    type IntoIter = std::collections::btree_map::Iter<'a, String, RouteChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
