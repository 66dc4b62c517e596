// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::extension_chooser::ExtensionChooser;
use crate::graph::{AssemblyGraph, EdgeWithDistance};
use crate::path::Path;
use std::marker::PhantomData;

/// The no-evidence chooser: passes every candidate through unchanged and always reports zero
/// weight. Used wherever no paired-read library is available -- tests, single-outgoing-edge
/// topologies, and as the safe default.
#[derive(Debug)]
pub struct TrivialExtensionChooser<G> {
    _graph: PhantomData<G>,
}

impl<G> TrivialExtensionChooser<G> {
    pub fn new() -> Self {
        TrivialExtensionChooser {
            _graph: PhantomData,
        }
    }
}

impl<G> Default for TrivialExtensionChooser<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AssemblyGraph> ExtensionChooser<G> for TrivialExtensionChooser<G> {
    fn filter(
        &self,
        _path: &Path<G::EdgeId>,
        candidates: Vec<EdgeWithDistance<G::EdgeId>>,
    ) -> Vec<EdgeWithDistance<G::EdgeId>> {
        candidates
    }

    fn count_weight(&self, _path: &Path<G::EdgeId>, _edge: G::EdgeId) -> f64 {
        0.0
    }
}
