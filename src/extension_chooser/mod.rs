// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable policies for narrowing a candidate edge set down to the edges a path should
//! actually grow into, and for scoring edges during short-loop resolution.

mod paired;
mod trivial;

pub use paired::{PairedInfoIndex, PairedLibraryExtensionChooser};
pub use trivial::TrivialExtensionChooser;

use crate::graph::{AssemblyGraph, EdgeWithDistance};
use crate::path::Path;

/// A policy for filtering candidate edges and scoring them with paired-read evidence.
///
/// Implementations must be deterministic (`filter` and `count_weight` are pure functions of
/// their inputs) and must never return an edge that wasn't present in `candidates`.
pub trait ExtensionChooser<G: AssemblyGraph> {
    /// Narrows `candidates` down to the edges the path should actually consider extending into.
    /// May return zero, one, or several edges; never invents an edge absent from `candidates`.
    fn filter(
        &self,
        path: &Path<G::EdgeId>,
        candidates: Vec<EdgeWithDistance<G::EdgeId>>,
    ) -> Vec<EdgeWithDistance<G::EdgeId>>;

    /// The paired-read evidence weight for extending `path` with `edge`, used internally by
    /// short-loop resolution. A weight of zero means "no evidence"; loop resolution treats
    /// zero-weight edges as non-viable.
    fn count_weight(&self, path: &Path<G::EdgeId>, edge: G::EdgeId) -> f64;
}
