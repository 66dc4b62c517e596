// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::Config;
use crate::coverage_map::CoverageMap;
use crate::extension_chooser::ExtensionChooser;
use crate::graph::{AssemblyGraph, EdgeWithDistance};
use crate::loop_detector::LoopDetector;
use crate::path::Path;
use crate::path_extend::{record_histogram, PathExtender};
use crate::short_loop_resolver::ShortLoopResolver;

fn gather_sources<G: AssemblyGraph>(graph: &G) -> Vec<EdgeWithDistance<G::EdgeId>> {
    graph
        .source_edges()
        .into_iter()
        .map(|e| EdgeWithDistance::new(e, 0))
        .collect()
}

fn candidates_at_head<G: AssemblyGraph>(
    graph: &G,
    path: &Path<G::EdgeId>,
) -> Vec<EdgeWithDistance<G::EdgeId>> {
    match path.head() {
        Some(head) => graph
            .outgoing(graph.end(head))
            .into_iter()
            .map(|e| EdgeWithDistance::new(e, 0))
            .collect(),
        None => Vec::new(),
    }
}

/// Extends [`SimplePathExtender`](super::SimplePathExtender)'s per-step algorithm with a jump:
/// when the path's normal chooser finds nothing and the head has dead-ended at a sink, it
/// consults a second, scaffolding-specific chooser over every source edge in the graph, and if
/// exactly one is a plausible jump target, bridges to it with a scaffold gap.
pub struct ScaffoldingPathExtender<'g, G: AssemblyGraph, C, SC, R> {
    graph: &'g G,
    chooser: C,
    scaffolding_chooser: SC,
    short_loop_resolver: R,
    config: Config,
    sources: Vec<EdgeWithDistance<G::EdgeId>>,
    /// Histogram of how many scaffold candidates survived the scaffolding chooser's filter,
    /// indexed by candidate count, growing on demand.
    sizes: Vec<usize>,
}

impl<'g, G, C, SC, R> ScaffoldingPathExtender<'g, G, C, SC, R>
where
    G: AssemblyGraph,
    C: ExtensionChooser<G>,
    SC: ExtensionChooser<G>,
    R: ShortLoopResolver<G>,
{
    pub fn new(
        graph: &'g G,
        chooser: C,
        scaffolding_chooser: SC,
        short_loop_resolver: R,
        config: Config,
    ) -> Self {
        ScaffoldingPathExtender {
            graph,
            chooser,
            scaffolding_chooser,
            short_loop_resolver,
            config,
            sources: gather_sources(graph),
            sizes: Vec::new(),
        }
    }

    /// Histogram of scaffold-candidate-set sizes observed across every jump attempted so far.
    pub fn scaffold_candidate_sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl<'g, G, C, SC, R> PathExtender<G> for ScaffoldingPathExtender<'g, G, C, SC, R>
where
    G: AssemblyGraph,
    C: ExtensionChooser<G>,
    SC: ExtensionChooser<G>,
    R: ShortLoopResolver<G>,
{
    fn grow_path(
        &mut self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) -> bool {
        let mut grew = false;
        loop {
            let head = match path.head() {
                Some(head) => head,
                None => break,
            };
            let mut candidates = self.chooser.filter(path, candidates_at_head(graph, path));

            if candidates.len() == 1 {
                path.push_back(candidates[0].edge, candidates[0].distance, coverage);
                grew = true;
                if self.config.investigate_short_loops()
                    && LoopDetector::edge_in_short_loop(graph, path)
                {
                    self.short_loop_resolver.resolve_short_loop(graph, path, coverage);
                }
            } else if graph.is_sink(graph.end(head)) {
                let scaffolded = self.scaffolding_chooser.filter(path, self.sources.clone());
                record_histogram(&mut self.sizes, scaffolded.len());
                if scaffolded.len() == 1 {
                    path.push_back(scaffolded[0].edge, scaffolded[0].distance, coverage);
                    grew = true;
                }
                candidates = scaffolded;
            }

            if LoopDetector::is_cycled(path, self.config.max_loops()) {
                log::debug!("path {:?} hit the loop cap, trimming", path.id());
                LoopDetector::remove_loop(path, coverage);
                break;
            }

            if candidates.len() != 1 {
                break;
            }
        }
        grew
    }
}

/// A pure scaffolding extender: never consults a normal chooser, only ever attempts jumps from a
/// sink. Used for libraries whose read pairs are too sparse to support adjacent-edge extension at
/// all, only long-range bridging.
pub struct ScaffoldingOnlyPathExtender<'g, G: AssemblyGraph, SC> {
    graph: &'g G,
    scaffolding_chooser: SC,
    config: Config,
    sources: Vec<EdgeWithDistance<G::EdgeId>>,
    sizes: Vec<usize>,
}

impl<'g, G, SC> ScaffoldingOnlyPathExtender<'g, G, SC>
where
    G: AssemblyGraph,
    SC: ExtensionChooser<G>,
{
    pub fn new(graph: &'g G, scaffolding_chooser: SC, config: Config) -> Self {
        ScaffoldingOnlyPathExtender {
            graph,
            scaffolding_chooser,
            config,
            sources: gather_sources(graph),
            sizes: Vec::new(),
        }
    }

    pub fn scaffold_candidate_sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl<'g, G, SC> PathExtender<G> for ScaffoldingOnlyPathExtender<'g, G, SC>
where
    G: AssemblyGraph,
    SC: ExtensionChooser<G>,
{
    fn grow_path(
        &mut self,
        graph: &G,
        path: &mut Path<G::EdgeId>,
        coverage: &mut CoverageMap<G::EdgeId>,
    ) -> bool {
        let mut grew = false;
        loop {
            let head = match path.head() {
                Some(head) => head,
                None => break,
            };

            let mut candidates: Vec<EdgeWithDistance<G::EdgeId>> = Vec::new();
            if graph.is_sink(graph.end(head)) {
                candidates = self.scaffolding_chooser.filter(path, self.sources.clone());
                record_histogram(&mut self.sizes, candidates.len());
                if candidates.len() == 1 {
                    path.push_back(candidates[0].edge, candidates[0].distance, coverage);
                    grew = true;
                }
            }

            if LoopDetector::is_cycled(path, self.config.max_loops()) {
                LoopDetector::remove_loop(path, coverage);
                break;
            }

            if candidates.len() != 1 {
                break;
            }
        }
        grew
    }
}
