// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The top-level fixed-point loop: turn a set of seed paths into a covering set of extended
//! paths, deduplicating subpaths and filtering by length along the way.

use crate::config::Config;
use crate::coverage_map::CoverageMap;
use crate::graph::AssemblyGraph;
use crate::path::{PathId, PathStore};
use crate::path_extend::PathExtender;
use fixedbitset::FixedBitSet;
use std::hash::Hash;

/// An input seed: a forward path and its conjugate, each given as the sequence of `(edge, gap)`
/// pairs the original assembler's graph-construction step already resolved.
#[derive(Clone, Debug)]
pub struct Seed<E> {
    pub forward: Vec<(E, i64)>,
    pub conjugate: Vec<(E, i64)>,
}

impl<E> Seed<E> {
    pub fn new(forward: Vec<(E, i64)>, conjugate: Vec<(E, i64)>) -> Self {
        Seed { forward, conjugate }
    }
}

/// Everything the driver produced: the arena owning every cloned/extended path, the coverage map
/// built up as they grew, and the `(forward, conjugate)` id pairs in seed order.
///
/// A cleared path (see [`crate::path::Path::clear`]) is a normal element of this result, not a
/// sentinel absence -- downstream consumers must skip empty paths rather than treat their
/// presence as an error.
pub struct CoveringResult<E: Copy + Eq + Hash> {
    pub store: PathStore<E>,
    pub coverage: CoverageMap<E>,
    pub pairs: Vec<(PathId, PathId)>,
}

/// Turns a seed set into a covering set of extended paths.
///
/// ## The `check_previous` open question
///
/// The inner growth loop's stopping condition is, per the design notes this crate was built
/// from, "repeat until neither [clone] reports further growth" -- but the precise meaning of
/// consulting the *sibling's* progress (`check_previous`) before deciding whether to keep
/// growing was never pinned down upstream. This implementation takes the narrowest reading that
/// satisfies the documented stopping condition literally: alternate growing the forward clone and
/// its conjugate, and stop the pass once a full round grows neither. This is weaker than a
/// "did the other side's advance expose a new front-extension opportunity on this side" contract
/// would be, but every such opportunity is still visible to the growing side by construction: it
/// simply shows up as ordinary outgoing-edge evidence and coverage at its own head on the next
/// round, since both clones share the same `CoverageMap`.
pub struct CoveringDriver<'g, G: AssemblyGraph> {
    graph: &'g G,
    config: Config,
}

impl<'g, G: AssemblyGraph> CoveringDriver<'g, G> {
    pub fn new(graph: &'g G, config: Config) -> Self {
        CoveringDriver { graph, config }
    }

    pub fn run<PE: PathExtender<G>>(
        &self,
        seeds: &[Seed<G::EdgeId>],
        extender: &mut PE,
    ) -> CoveringResult<G::EdgeId> {
        let mut store: PathStore<G::EdgeId> = PathStore::new();
        let mut coverage: CoverageMap<G::EdgeId> = CoverageMap::new();
        let mut pairs: Vec<(PathId, PathId)> = Vec::new();
        let mut used = FixedBitSet::with_capacity(seeds.len());

        let outer_bound = seeds.len().max(1);
        for _ in 0..outer_bound {
            let mut processed_any = false;

            for (i, seed) in seeds.iter().enumerate() {
                if used.contains(i) {
                    continue;
                }
                used.insert(i);
                processed_any = true;

                let fwd_id = store.insert_with_edges(true, seed.forward.clone());
                let conj_id = store.insert_with_edges(true, seed.conjugate.clone());
                coverage.subscribe(store.get(fwd_id));
                coverage.subscribe(store.get(conj_id));
                pairs.push((fwd_id, conj_id));

                loop {
                    let grew_forward =
                        extender.grow_path(self.graph, store.get_mut(fwd_id), &mut coverage);
                    let grew_conjugate =
                        extender.grow_path(self.graph, store.get_mut(conj_id), &mut coverage);
                    if !grew_forward && !grew_conjugate {
                        break;
                    }
                }
            }

            self.remove_subpaths(&mut store, &coverage, &pairs);

            if !processed_any || used.count_ones(..) == seeds.len() {
                break;
            }
        }

        self.apply_min_length_filter(&mut store, &pairs);

        CoveringResult {
            store,
            coverage,
            pairs,
        }
    }

    /// Clears any path in `pairs` that is fully subsumed by some other covering path -- one that
    /// is neither the path itself nor its own conjugate.
    fn remove_subpaths(
        &self,
        store: &mut PathStore<G::EdgeId>,
        coverage: &CoverageMap<G::EdgeId>,
        pairs: &[(PathId, PathId)],
    ) {
        for &(fwd_id, conj_id) in pairs {
            self.remove_if_subsumed(fwd_id, conj_id, store, coverage);
            self.remove_if_subsumed(conj_id, fwd_id, store, coverage);
        }
    }

    fn remove_if_subsumed(
        &self,
        id: PathId,
        sibling_id: PathId,
        store: &mut PathStore<G::EdgeId>,
        coverage: &CoverageMap<G::EdgeId>,
    ) {
        let path = store.get(id);
        if path.is_empty() {
            return;
        }
        let covering = coverage.covering_paths_of(path);
        if covering.len() <= 1 {
            return;
        }

        let other_seed_found = covering.iter().any(|&p| p != id && p != sibling_id);
        if !other_seed_found {
            return;
        }

        for &other in &covering {
            if other != id && other != sibling_id && !store.get(other).contains_path(path) {
                log::warn!(
                    "path {:?} covers every edge of subsumed path {:?} without containing it as a \
                     contiguous subsequence",
                    other,
                    id
                );
            }
        }

        log::debug!("clearing path {:?}, subsumed by another covering path", id);
        store.get_mut(id).clear();
    }

    fn apply_min_length_filter(
        &self,
        store: &mut PathStore<G::EdgeId>,
        pairs: &[(PathId, PathId)],
    ) {
        let threshold = self.config.min_path_length();
        if threshold == 0 {
            return;
        }
        for &(fwd_id, conj_id) in pairs {
            let too_short = store.get(fwd_id).length(self.graph) < threshold
                || store.get(conj_id).length(self.graph) < threshold;
            if too_short {
                store.get_mut(fwd_id).clear();
                store.get_mut(conj_id).clear();
            }
        }
    }
}
