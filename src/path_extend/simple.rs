// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::Config;
use crate::coverage_map::CoverageMap;
use crate::extension_chooser::ExtensionChooser;
use crate::graph::{AssemblyGraph, EdgeWithDistance};
use crate::loop_detector::LoopDetector;
use crate::path::Path;
use crate::path_extend::PathExtender;
use crate::short_loop_resolver::ShortLoopResolver;

/// Grows a path one adjacent edge at a time: at each step, gather the edges leaving the path's
/// current head, narrow them with an [`ExtensionChooser`], and either append the sole survivor or
/// stop.
pub struct SimplePathExtender<'g, G: AssemblyGraph, C, R> {
    graph: &'g G,
    chooser: C,
    short_loop_resolver: R,
    config: Config,
}

impl<'g, G, C, R> SimplePathExtender<'g, G, C, R>
where
    G: AssemblyGraph,
    C: ExtensionChooser<G>,
    R: ShortLoopResolver<G>,
{
    pub fn new(graph: &'g G, chooser: C, short_loop_resolver: R, config: Config) -> Self {
        SimplePathExtender {
            graph,
            chooser,
            short_loop_resolver,
            config,
        }
    }

    fn candidates_at_head(&self, path: &Path<G::EdgeId>) -> Vec<EdgeWithDistance<G::EdgeId>> {
        match path.head() {
            Some(head) => self
                .graph
                .outgoing(self.graph.end(head))
                .into_iter()
                .map(|e| EdgeWithDistance::new(e, 0))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<'g, G, C, R> PathExtender<G> for SimplePathExtender<'g, G, C, R>
where
    G: AssemblyGraph,
    C: ExtensionChooser<G>,
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
            if path.head().is_none() {
                break;
            }
            let raw = self.candidates_at_head(path);
            let candidates = self.chooser.filter(path, raw);

            if candidates.len() == 1 {
                path.push_back(candidates[0].edge, candidates[0].distance, coverage);
                grew = true;
                if self.config.investigate_short_loops()
                    && LoopDetector::edge_in_short_loop(graph, path)
                {
                    self.short_loop_resolver.resolve_short_loop(graph, path, coverage);
                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage_map::CoverageMap;
    use crate::extension_chooser::TrivialExtensionChooser;
    use crate::graph::simple::SimpleAssemblyGraph;
    use crate::path::PathStore;
    use crate::short_loop_resolver::SimpleLoopResolver;

    #[test]
    fn stops_at_a_dead_end() {
        let mut builder = SimpleAssemblyGraph::builder();
        let (v0, v0c) = builder.add_vertex_pair();
        let (v1, v1c) = builder.add_vertex_pair();
        let _ = (v0c, v1c);
        let (a, _) = builder.add_edge_pair(v0, v1, 5).unwrap();
        let graph = builder.build();

        let mut store: PathStore<_> = PathStore::new();
        let mut coverage = CoverageMap::new();
        let id = store.insert(true);
        store.get_mut(id).push_back(a, 0, &mut coverage);

        let chooser: TrivialExtensionChooser<SimpleAssemblyGraph> = TrivialExtensionChooser::new();
        let mut extender =
            SimplePathExtender::new(&graph, chooser, SimpleLoopResolver::default(), Config::default());
        let grew = extender.grow_path(&graph, store.get_mut(id), &mut coverage);
        assert!(!grew);
        assert_eq!(store.get(id).len(), 1);
    }

    #[test]
    fn walks_a_linear_chain_to_its_end() {
        let mut builder = SimpleAssemblyGraph::builder();
        let (v0, v0c) = builder.add_vertex_pair();
        let (v1, v1c) = builder.add_vertex_pair();
        let (v2, v2c) = builder.add_vertex_pair();
        let _ = (v0c, v1c, v2c);
        let (a, _) = builder.add_edge_pair(v0, v1, 5).unwrap();
        let (b, _) = builder.add_edge_pair(v1, v2, 5).unwrap();
        let graph = builder.build();

        let mut store: PathStore<_> = PathStore::new();
        let mut coverage = CoverageMap::new();
        let id = store.insert(true);
        store.get_mut(id).push_back(a, 0, &mut coverage);

        let chooser: TrivialExtensionChooser<SimpleAssemblyGraph> = TrivialExtensionChooser::new();
        let mut extender =
            SimplePathExtender::new(&graph, chooser, SimpleLoopResolver::default(), Config::default());
        let grew = extender.grow_path(&graph, store.get_mut(id), &mut coverage);
        assert!(grew);
        let edges: Vec<_> = store.get(id).edge_ids().collect();
        assert_eq!(edges, vec![a, b]);
    }

    #[test]
    fn stops_at_a_branch_with_no_evidence() {
        let mut builder = SimpleAssemblyGraph::builder();
        let (v0, v0c) = builder.add_vertex_pair();
        let (v1, v1c) = builder.add_vertex_pair();
        let (v2, v2c) = builder.add_vertex_pair();
        let _ = (v0c, v1c, v2c);
        let (a, _) = builder.add_edge_pair(v0, v1, 5).unwrap();
        let (_b, _) = builder.add_edge_pair(v1, v2, 5).unwrap();
        let (_c, _) = builder.add_edge_pair(v1, v2, 5).unwrap();
        let graph = builder.build();

        let mut store: PathStore<_> = PathStore::new();
        let mut coverage = CoverageMap::new();
        let id = store.insert(true);
        store.get_mut(id).push_back(a, 0, &mut coverage);

        let chooser: TrivialExtensionChooser<SimpleAssemblyGraph> = TrivialExtensionChooser::new();
        let mut extender =
            SimplePathExtender::new(&graph, chooser, SimpleLoopResolver::default(), Config::default());
        let grew = extender.grow_path(&graph, store.get_mut(id), &mut coverage);
        assert!(!grew);
        assert_eq!(store.get(id).len(), 1);
    }
}
