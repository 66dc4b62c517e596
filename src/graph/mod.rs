// Copyright (c) The Contigraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The graph this crate extends paths over.
//!
//! [`AssemblyGraph`] is the interface the core uses; graph construction, k-mer hashing, and
//! serialization are treated as external collaborators that are never implemented here. The one
//! concrete implementation this crate ships, [`simple::SimpleAssemblyGraph`], exists so the unit
//! and scenario tests (and the demo runner) have something real to extend paths over.

pub mod simple;

use std::fmt::Debug;
use std::hash::Hash;

/// A candidate edge with the gap distance that would be recorded if it were appended to a path.
/// Adjacent edges carry distance 0; a scaffold jump carries a positive distance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EdgeWithDistance<E> {
    pub edge: E,
    pub distance: i64,
}

impl<E> EdgeWithDistance<E> {
    pub fn new(edge: E, distance: i64) -> Self {
        EdgeWithDistance { edge, distance }
    }
}

/// A directed multigraph with a reverse-complement involution on vertices and edges.
///
/// Implementations are expected to be read-only and stable for the lifetime of an extension run:
/// nothing in this crate ever calls a mutating method on the graph.
pub trait AssemblyGraph {
    type EdgeId: Copy + Eq + Hash + Debug + Ord;
    type VertexId: Copy + Eq + Hash + Debug;

    fn start(&self, edge: Self::EdgeId) -> Self::VertexId;
    fn end(&self, edge: Self::EdgeId) -> Self::VertexId;
    fn length(&self, edge: Self::EdgeId) -> usize;

    fn outgoing(&self, vertex: Self::VertexId) -> Vec<Self::EdgeId>;
    fn incoming(&self, vertex: Self::VertexId) -> Vec<Self::EdgeId>;

    fn out_degree(&self, vertex: Self::VertexId) -> usize {
        self.outgoing(vertex).len()
    }

    fn in_degree(&self, vertex: Self::VertexId) -> usize {
        self.incoming(vertex).len()
    }

    fn conjugate(&self, edge: Self::EdgeId) -> Self::EdgeId;
    fn conjugate_vertex(&self, vertex: Self::VertexId) -> Self::VertexId;

    /// All edges in the graph, in a stable, deterministic order.
    fn edges(&self) -> Vec<Self::EdgeId>;

    /// True if `vertex` has no outgoing edges -- a dead end for a normal extender.
    fn is_sink(&self, vertex: Self::VertexId) -> bool {
        self.out_degree(vertex) == 0
    }

    /// True if `vertex` has no incoming edges -- a candidate scaffolding source.
    fn is_source(&self, vertex: Self::VertexId) -> bool {
        self.in_degree(vertex) == 0
    }

    /// All edges `e` with `in_degree(start(e)) == 0`, in the same deterministic order as
    /// [`AssemblyGraph::edges`]. Used by the scaffolding extenders to build their sources list.
    fn source_edges(&self) -> Vec<Self::EdgeId> {
        self.edges()
            .into_iter()
            .filter(|&e| self.is_source(self.start(e)))
            .collect()
    }
}
