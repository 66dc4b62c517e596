// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::PairedLibrary;
use crate::extension_chooser::ExtensionChooser;
use crate::graph::{AssemblyGraph, EdgeWithDistance};
use crate::path::Path;
use std::collections::HashMap;
use std::hash::Hash;

/// Observed paired-read weight between an ordered pair of edges.
///
/// Keyed by direction: `(e1, e2)` and `(e2, e1)` are independent entries, since the evidence for
/// "e2 follows e1 at some distance" is not generally the same as for the reverse. An absent entry
/// means zero evidence: a weight of 0 is read as "no evidence" by loop resolution.
#[derive(Debug, Default)]
pub struct PairedInfoIndex<E: Eq + Hash> {
    weights: HashMap<(E, E), f64>,
}

impl<E: Copy + Eq + Hash> PairedInfoIndex<E> {
    pub fn new() -> Self {
        PairedInfoIndex {
            weights: HashMap::new(),
        }
    }

    pub fn insert(&mut self, from: E, to: E, weight: f64) {
        self.weights.insert((from, to), weight);
    }

    pub fn get(&self, from: E, to: E) -> f64 {
        self.weights.get(&(from, to)).copied().unwrap_or(0.0)
    }
}

/// Scores candidates with paired-read evidence against a summarized library, accumulated over a
/// sliding window of the path's recent edges (how far back evidence remains informative is
/// [`PairedLibrary::evidence_window`]).
pub struct PairedLibraryExtensionChooser<'g, G: AssemblyGraph> {
    graph: &'g G,
    library: PairedLibrary,
    paired_info: PairedInfoIndex<G::EdgeId>,
    weight_threshold: f64,
}

impl<'g, G: AssemblyGraph> PairedLibraryExtensionChooser<'g, G> {
    pub fn new(
        graph: &'g G,
        library: PairedLibrary,
        paired_info: PairedInfoIndex<G::EdgeId>,
    ) -> Self {
        PairedLibraryExtensionChooser {
            graph,
            library,
            paired_info,
            weight_threshold: 0.0,
        }
    }

    pub fn with_weight_threshold(mut self, threshold: f64) -> Self {
        self.weight_threshold = threshold;
        self
    }
}

impl<'g, G: AssemblyGraph> ExtensionChooser<G> for PairedLibraryExtensionChooser<'g, G> {
    fn filter(
        &self,
        path: &Path<G::EdgeId>,
        candidates: Vec<EdgeWithDistance<G::EdgeId>>,
    ) -> Vec<EdgeWithDistance<G::EdgeId>> {
        if candidates.len() <= 1 {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| self.count_weight(path, candidate.edge) > self.weight_threshold)
            .collect()
    }

    fn count_weight(&self, path: &Path<G::EdgeId>, edge: G::EdgeId) -> f64 {
        let window = self.library.evidence_window() as i64;
        let mut cumulative_len: i64 = 0;
        let mut weight = 0.0;
        for &(prior_edge, gap) in path.edges().iter().rev() {
            cumulative_len += gap + self.graph.length(prior_edge) as i64;
            if cumulative_len > window {
                break;
            }
            weight += self.paired_info.get(prior_edge, edge);
        }
        weight
    }
}
