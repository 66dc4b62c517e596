// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mutable multi-index mapping each edge to the multiset of paths currently covering it.

use crate::path::{CoverageSink, Path, PathId};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;

/// `EdgeId -> multiset<PathId>`, maintained as a [`Path`] listener.
///
/// Built on `indexmap::IndexMap` (rather than `std::HashMap`) for deterministic iteration order,
/// which matters here because
/// `ExtensionChooser::filter` is required to be deterministic and anything that iterates the
/// coverage map (diagnostics, the scaffold histogram) should not silently depend on hash seed.
#[derive(Debug, Default)]
pub struct CoverageMap<E: Eq + Hash> {
    edge_coverage: IndexMap<E, Vec<PathId>>,
}

impl<E: Copy + Eq + Hash + std::fmt::Debug> CoverageMap<E> {
    pub fn new() -> Self {
        CoverageMap {
            edge_coverage: IndexMap::new(),
        }
    }

    /// Subscribes `path` to this map and replays its current edges into it as `back_edge_added`
    /// events, per the covering driver's "subscribe both clones ... and replay their current
    /// edges into it" step.
    pub fn subscribe(&mut self, path: &Path<E>) {
        for &(edge, gap) in path.edges() {
            self.back_edge_added(edge, path.id(), gap);
        }
    }

    /// Total occurrences of `edge` across all covering paths, counted with multiplicity.
    pub fn coverage(&self, edge: E) -> usize {
        self.edge_coverage.get(&edge).map_or(0, |v| v.len())
    }

    /// Distinct paths covering `edge`.
    pub fn unique_coverage(&self, edge: E) -> usize {
        self.covering_paths(edge).len()
    }

    pub fn is_covered(&self, edge: E) -> bool {
        self.coverage(edge) > 0
    }

    /// `min` over the path's edges of [`CoverageMap::coverage`]; zero for an empty path.
    pub fn path_coverage(&self, path: &Path<E>) -> usize {
        path.edge_ids()
            .map(|e| self.coverage(e))
            .min()
            .unwrap_or(0)
    }

    pub fn path_is_covered(&self, path: &Path<E>) -> bool {
        if path.is_empty() {
            return false;
        }
        path.edge_ids().all(|e| self.is_covered(e))
    }

    /// Distinct paths covering `edge`, as a set.
    pub fn covering_paths(&self, edge: E) -> HashSet<PathId> {
        self.edge_coverage
            .get(&edge)
            .map(|v| v.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Distinct paths covering every edge of `path` (the intersection of each edge's covering
    /// set). Used by subpath removal to find the other paths that fully subsume a seed.
    pub fn covering_paths_of(&self, path: &Path<E>) -> HashSet<PathId> {
        let mut edges = path.edge_ids();
        let first = match edges.next() {
            Some(e) => e,
            None => return HashSet::new(),
        };
        let mut result = self.covering_paths(first);
        for edge in edges {
            if result.is_empty() {
                break;
            }
            let this_edge = self.covering_paths(edge);
            result.retain(|id| this_edge.contains(id));
        }
        result
    }

    fn edge_added(&mut self, edge: E, path: PathId) {
        self.edge_coverage.entry(edge).or_insert_with(Vec::new).push(path);
    }

    fn edge_removed(&mut self, edge: E, path: PathId) {
        match self.edge_coverage.get_mut(&edge) {
            Some(paths) => match paths.iter().position(|&p| p == path) {
                Some(pos) => {
                    paths.remove(pos);
                }
                None => {
                    log::warn!(
                        "coverage map: path {:?} is not registered against edge {:?}, ignoring removal",
                        path,
                        edge
                    );
                }
            },
            None => {
                log::warn!(
                    "coverage map: no coverage entry for edge {:?}, ignoring removal of path {:?}",
                    edge,
                    path
                );
            }
        }
    }
}

impl<E: Copy + Eq + Hash + std::fmt::Debug> CoverageSink<E> for CoverageMap<E> {
    fn front_edge_added(&mut self, edge: E, path: PathId, _gap: i64) {
        self.edge_added(edge, path);
    }

    fn back_edge_added(&mut self, edge: E, path: PathId, _gap: i64) {
        self.edge_added(edge, path);
    }

    fn front_edge_removed(&mut self, edge: E, path: PathId) {
        self.edge_removed(edge, path);
    }

    fn back_edge_removed(&mut self, edge: E, path: PathId) {
        self.edge_removed(edge, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{NullSink, PathStore};

    #[test]
    fn coverage_and_unique_coverage() {
        let mut store: PathStore<char> = PathStore::new();
        let mut cov = CoverageMap::new();

        let p1 = store.insert(false);
        let p2 = store.insert(false);
        store.get_mut(p1).push_back('a', 0, &mut cov);
        store.get_mut(p1).push_back('b', 0, &mut cov);
        store.get_mut(p2).push_back('a', 0, &mut cov);

        assert_eq!(cov.coverage('a'), 2);
        assert_eq!(cov.unique_coverage('a'), 2);
        assert_eq!(cov.coverage('b'), 1);
        assert_eq!(cov.coverage('z'), 0);
    }

    #[test]
    fn removing_unregistered_path_warns_and_self_heals() {
        let mut store: PathStore<char> = PathStore::new();
        let mut cov = CoverageMap::new();
        let p1 = store.insert(false);
        store.get_mut(p1).push_back('a', 0, &mut NullSink);

        // 'a' was never registered with the coverage map (we used NullSink above), so this
        // removal finds nothing to remove and must not panic.
        store.get_mut(p1).pop_back(&mut cov);
        assert_eq!(cov.coverage('a'), 0);
    }

    #[test]
    fn path_coverage_is_minimum_over_edges() {
        let mut store: PathStore<char> = PathStore::new();
        let mut cov = CoverageMap::new();
        let p1 = store.insert(false);
        let p2 = store.insert(false);
        store.get_mut(p1).push_back('a', 0, &mut cov);
        store.get_mut(p1).push_back('b', 0, &mut cov);
        store.get_mut(p2).push_back('a', 0, &mut cov);

        assert_eq!(cov.path_coverage(store.get(p1)), 1);

        let empty = store.insert(false);
        assert_eq!(cov.path_coverage(store.get(empty)), 0);
    }

    #[test]
    fn covering_paths_of_intersects_across_edges() {
        let mut store: PathStore<char> = PathStore::new();
        let mut cov = CoverageMap::new();
        let seed = store.insert(true);
        let extended = store.insert(false);

        store.get_mut(seed).push_back('a', 0, &mut cov);
        store.get_mut(seed).push_back('b', 0, &mut cov);

        store.get_mut(extended).push_back('a', 0, &mut cov);
        store.get_mut(extended).push_back('b', 0, &mut cov);
        store.get_mut(extended).push_back('c', 0, &mut cov);

        let covering = cov.covering_paths_of(store.get(seed));
        assert_eq!(covering.len(), 2);
        assert!(covering.contains(&seed));
        assert!(covering.contains(&extended));
    }
}
