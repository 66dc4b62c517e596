// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolving the 2-edge short-loop motif a path's head can land on: one outgoing edge that
//! closes back to the head edge's start (the "loop" edge), and one that leaves (the "exit").

use crate::coverage_map::CoverageMap;
use crate::extension_chooser::ExtensionChooser;
use crate::graph::AssemblyGraph;
use crate::loop_detector::LoopDetector;
use crate::path::{NullSink, Path, PathId};

const MAX_SEARCH_ITERS: usize = 10;

/// Consumes a path whose head is in a short-loop configuration and emits the edges needed to
/// traverse it. A no-op if the head isn't in that configuration.
pub trait ShortLoopResolver<G: AssemblyGraph> {
    fn resolve_short_loop(
        &self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    );
}

/// Always traverses the loop exactly once: appends `[loop, e, exit]` unconditionally.
#[derive(Debug, Default)]
pub struct SimpleLoopResolver;

impl<G: AssemblyGraph> ShortLoopResolver<G> for SimpleLoopResolver {
    fn resolve_short_loop(
        &self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) {
        if let Some((loop_edge, exit_edge)) = LoopDetector::loop_and_exit(graph, path) {
            log::debug!("resolving short loop at path {:?} (simple)", path.id());
            let head = path.head().expect("loop_and_exit implies a head edge");
            path.push_back(loop_edge, 0, coverage);
            path.push_back(head, 0, coverage);
            path.push_back(exit_edge, 0, coverage);
        }
    }
}

/// Chooses the number of additional loop traversals with a bounded search (`i` in `0..=10`) over
/// paired-read evidence, picking the iteration count that maximizes `(exit weight, exit weight -
/// next-loop weight)`, both descending, with the earliest iteration winning ties.
pub struct WeightedLoopResolver<'a, G: AssemblyGraph, C: ExtensionChooser<G>> {
    chooser: &'a C,
    _graph: std::marker::PhantomData<G>,
}

impl<'a, G: AssemblyGraph, C: ExtensionChooser<G>> WeightedLoopResolver<'a, G, C> {
    pub fn new(chooser: &'a C) -> Self {
        WeightedLoopResolver {
            chooser,
            _graph: std::marker::PhantomData,
        }
    }

    fn make_best_choice(
        &self,
        path: &mut Path<G::EdgeId>,
        loop_edge: G::EdgeId,
        exit_edge: G::EdgeId,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) {
        let mut trial: Path<G::EdgeId> = Path::from_edges(
            PathId::scratch(),
            path.is_seed(),
            path.edges().to_vec(),
        );

        let mut max_weight = self.chooser.count_weight(&trial, exit_edge);
        let mut diff = max_weight - self.chooser.count_weight(&trial, loop_edge);
        let mut max_iter = 0usize;

        for i in 1..=MAX_SEARCH_ITERS {
            let loop_weight = self.chooser.count_weight(&trial, loop_edge);
            if loop_weight <= 0.0 {
                break;
            }

            let head = trial.head().expect("trial path has a head edge");
            trial.push_back(loop_edge, 0, &mut NullSink);
            trial.push_back(head, 0, &mut NullSink);

            let w = self.chooser.count_weight(&trial, exit_edge);
            let w_next_loop = self.chooser.count_weight(&trial, loop_edge);
            if w > max_weight || (w == max_weight && w - w_next_loop > diff) {
                max_weight = w;
                max_iter = i;
                diff = w - w_next_loop;
            }
        }

        for _ in 0..max_iter {
            let head = path.head().expect("path has a head edge");
            path.push_back(loop_edge, 0, coverage);
            path.push_back(head, 0, coverage);
        }
        path.push_back(exit_edge, 0, coverage);
    }
}

impl<'a, G: AssemblyGraph, C: ExtensionChooser<G>> ShortLoopResolver<G>
    for WeightedLoopResolver<'a, G, C>
{
    fn resolve_short_loop(
        &self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) {
        if let Some((loop_edge, exit_edge)) = LoopDetector::loop_and_exit(graph, path) {
            log::debug!("resolving short loop at path {:?} (weighted)", path.id());
            self.make_best_choice(path, loop_edge, exit_edge, coverage);
        }
    }
}
