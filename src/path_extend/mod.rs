// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-path growth: repeatedly choosing a next edge until a stopping condition fires.

mod scaffolding;
mod simple;

pub use scaffolding::{ScaffoldingOnlyPathExtender, ScaffoldingPathExtender};
pub use simple::SimplePathExtender;

use crate::coverage_map::CoverageMap;
use crate::graph::AssemblyGraph;
use crate::path::Path;

/// Grows a single path forward by one edge at a time until a stopping condition fires (no
/// candidates, ambiguous candidates, or a cycled suffix). Every mutation is routed through
/// `coverage`, so the [`crate::coverage_map::CoverageMap`] stays in sync as the path grows.
///
/// Returns whether the path grew by at least one edge during this call -- the covering driver
/// uses this to decide whether another growth pass is warranted.
pub trait PathExtender<G: AssemblyGraph> {
    fn grow_path(
        &mut self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) -> bool;
}

/// Grows `sizes[k]` histogram entries on demand, the way the original assembler's
/// `std::vector<int> sizes_` grows via `resize`.
pub(crate) fn record_histogram(sizes: &mut Vec<usize>, k: usize) {
    if k >= sizes.len() {
        sizes.resize(k + 1, 0);
    }
    sizes[k] += 1;
}
