// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small in-memory [`AssemblyGraph`] built on `petgraph`, used by the unit tests, the scenario
//! tests, and the demo runner. Upstream graph construction would ship its own implementation of
//! the trait instead -- this one exists only because the core needs *something* concrete to
//! exercise.

use crate::errors::Error;
use crate::graph::AssemblyGraph;
use once_cell::sync::OnceCell;
use petgraph::prelude::*;
use std::collections::HashMap;

/// Stable identifier for an edge in a [`SimpleAssemblyGraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EdgeId(EdgeIndex<u32>);

/// Stable identifier for a vertex in a [`SimpleAssemblyGraph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct VertexId(NodeIndex<u32>);

/// A directed multigraph with an explicit conjugate (reverse-complement) involution, backed by
/// `petgraph::graph::Graph`.
///
/// Built via [`SimpleAssemblyGraphBuilder`]; immutable once constructed, matching the contract
/// every [`AssemblyGraph`] implementation must uphold.
#[derive(Debug)]
pub struct SimpleAssemblyGraph {
    graph: Graph<(), usize, Directed, u32>,
    edge_conjugate: HashMap<EdgeIndex<u32>, EdgeIndex<u32>>,
    vertex_conjugate: HashMap<NodeIndex<u32>, NodeIndex<u32>>,
    sources: OnceCell<Vec<EdgeId>>,
}

impl SimpleAssemblyGraph {
    pub fn builder() -> SimpleAssemblyGraphBuilder {
        SimpleAssemblyGraphBuilder::new()
    }
}

impl AssemblyGraph for SimpleAssemblyGraph {
    type EdgeId = EdgeId;
    type VertexId = VertexId;

    fn start(&self, edge: EdgeId) -> VertexId {
        let (source, _) = self
            .graph
            .edge_endpoints(edge.0)
            .expect("EdgeId from this graph always resolves");
        VertexId(source)
    }

    fn end(&self, edge: EdgeId) -> VertexId {
        let (_, target) = self
            .graph
            .edge_endpoints(edge.0)
            .expect("EdgeId from this graph always resolves");
        VertexId(target)
    }

    fn length(&self, edge: EdgeId) -> usize {
        *self
            .graph
            .edge_weight(edge.0)
            .expect("EdgeId from this graph always resolves")
    }

    fn outgoing(&self, vertex: VertexId) -> Vec<EdgeId> {
        let mut out: Vec<_> = self
            .graph
            .edges_directed(vertex.0, Direction::Outgoing)
            .map(|edge_ref| EdgeId(edge_ref.id()))
            .collect();
        out.sort();
        out
    }

    fn incoming(&self, vertex: VertexId) -> Vec<EdgeId> {
        let mut incoming: Vec<_> = self
            .graph
            .edges_directed(vertex.0, Direction::Incoming)
            .map(|edge_ref| EdgeId(edge_ref.id()))
            .collect();
        incoming.sort();
        incoming
    }

    fn conjugate(&self, edge: EdgeId) -> EdgeId {
        EdgeId(
            *self
                .edge_conjugate
                .get(&edge.0)
                .expect("every edge has a conjugate"),
        )
    }

    fn conjugate_vertex(&self, vertex: VertexId) -> VertexId {
        VertexId(
            *self
                .vertex_conjugate
                .get(&vertex.0)
                .expect("every vertex has a conjugate"),
        )
    }

    fn edges(&self) -> Vec<EdgeId> {
        let mut all: Vec<_> = self.graph.edge_indices().map(EdgeId).collect();
        all.sort();
        all
    }

    fn source_edges(&self) -> Vec<EdgeId> {
        self.sources
            .get_or_init(|| {
                self.edges()
                    .into_iter()
                    .filter(|&e| self.is_source(self.start(e)))
                    .collect()
            })
            .clone()
    }
}

/// Builds a [`SimpleAssemblyGraph`] edge by edge, pairing each added edge and vertex with an
/// explicit conjugate.
#[derive(Default)]
pub struct SimpleAssemblyGraphBuilder {
    graph: Graph<(), usize, Directed, u32>,
    edge_conjugate: HashMap<EdgeIndex<u32>, EdgeIndex<u32>>,
    vertex_conjugate: HashMap<NodeIndex<u32>, NodeIndex<u32>>,
}

impl SimpleAssemblyGraphBuilder {
    pub fn new() -> Self {
        SimpleAssemblyGraphBuilder {
            graph: Graph::new(),
            edge_conjugate: HashMap::new(),
            vertex_conjugate: HashMap::new(),
        }
    }

    /// Adds a vertex and its conjugate (pass the same call's first return value twice for a
    /// self-conjugate vertex, e.g. in tests that don't care about strand symmetry).
    pub fn add_vertex_pair(&mut self) -> (VertexId, VertexId) {
        let v = self.graph.add_node(());
        let v_conj = self.graph.add_node(());
        self.vertex_conjugate.insert(v, v_conj);
        self.vertex_conjugate.insert(v_conj, v);
        (VertexId(v), VertexId(v_conj))
    }

    /// Adds an edge `from -> to` of the given length, plus its conjugate `conjugate(to) ->
    /// conjugate(from)`. Returns (edge, conjugate edge).
    pub fn add_edge_pair(
        &mut self,
        from: VertexId,
        to: VertexId,
        length: usize,
    ) -> Result<(EdgeId, EdgeId), Error> {
        let from_conj = *self.vertex_conjugate.get(&from.0).ok_or_else(|| {
            Error::GraphInconsistent {
                message: "vertex has no registered conjugate".to_string(),
            }
        })?;
        let to_conj = *self
            .vertex_conjugate
            .get(&to.0)
            .ok_or_else(|| Error::GraphInconsistent {
                message: "vertex has no registered conjugate".to_string(),
            })?;

        let e = self.graph.add_edge(from.0, to.0, length);
        let e_conj = self.graph.add_edge(to_conj, from_conj, length);
        self.edge_conjugate.insert(e, e_conj);
        self.edge_conjugate.insert(e_conj, e);
        Ok((EdgeId(e), EdgeId(e_conj)))
    }

    pub fn build(self) -> SimpleAssemblyGraph {
        SimpleAssemblyGraph {
            graph: self.graph,
            edge_conjugate: self.edge_conjugate,
            vertex_conjugate: self.vertex_conjugate,
            sources: OnceCell::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_chain() -> (SimpleAssemblyGraph, Vec<EdgeId>, Vec<EdgeId>) {
        let mut builder = SimpleAssemblyGraph::builder();
        let (v0, v0c) = builder.add_vertex_pair();
        let (v1, v1c) = builder.add_vertex_pair();
        let (v2, v2c) = builder.add_vertex_pair();
        let _ = (v0c, v1c, v2c);
        let (a, a_conj) = builder.add_edge_pair(v0, v1, 10).unwrap();
        let (b, b_conj) = builder.add_edge_pair(v1, v2, 10).unwrap();
        (builder.build(), vec![a, b], vec![a_conj, b_conj])
    }

    #[test]
    fn degrees_and_endpoints() {
        let (g, edges, _) = linear_chain();
        let a = edges[0];
        let b = edges[1];
        assert_eq!(g.end(a), g.start(b));
        assert_eq!(g.out_degree(g.start(a)), 1);
        assert_eq!(g.in_degree(g.start(a)), 0);
        assert!(g.is_source(g.start(a)));
        assert!(g.is_sink(g.end(b)));
    }

    #[test]
    fn conjugate_is_an_involution() {
        let (g, edges, _) = linear_chain();
        for &e in &edges {
            assert_eq!(g.conjugate(g.conjugate(e)), e);
            assert_ne!(g.conjugate(e), e);
        }
    }

    #[test]
    fn source_edges_finds_every_in_degree_zero_start() {
        // the forward chain's first edge, and the conjugate chain's own first edge (which is the
        // conjugate of the forward chain's *last* edge) are both sources.
        let (g, edges, conjugates) = linear_chain();
        let mut sources = g.source_edges();
        sources.sort();
        let mut expected = vec![edges[0], conjugates[1]];
        expected.sort();
        assert_eq!(sources, expected);
    }
}
