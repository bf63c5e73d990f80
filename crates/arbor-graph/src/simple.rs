// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Bitset adjacency-matrix graphs.
//!
//! `SimpleGraph` stores one `FixedBitSet` row per vertex. Adjacency tests are a
//! single bit lookup and `degree_within` is a word-wise intersection count,
//! which is what the independent set bound and choice heuristic call in their
//! inner loops. Graphs are built through `GraphBuilder`, which keeps the rows
//! symmetric and free of self-loops.

use crate::{graph::Graph, index::VertexIndex};
use fixedbitset::FixedBitSet;

/// An undirected simple graph backed by a symmetric bitset adjacency matrix.
///
/// Invariants:
/// - `adjacency.len() == num_vertices` and every row has length `num_vertices`.
/// - `adjacency[u].contains(v) == adjacency[v].contains(u)`.
/// - `!adjacency[v].contains(v)` (no self-loops).
/// - `num_edges` equals the number of unordered adjacent pairs.
#[derive(Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: Vec<FixedBitSet>,
    num_edges: usize,
}

impl SimpleGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    #[inline]
    pub fn empty(num_vertices: usize) -> Self {
        GraphBuilder::new(num_vertices).build()
    }

    /// Creates the complete graph on `num_vertices` vertices.
    pub fn complete(num_vertices: usize) -> Self {
        SimpleGraph::empty(num_vertices).complement()
    }

    /// Creates the cycle graph `C_n`. For `n < 3` this degenerates to a path
    /// (a single edge for `n == 2`, no edge for `n < 2`).
    pub fn cycle(num_vertices: usize) -> Self {
        let mut builder = GraphBuilder::new(num_vertices);
        for v in 1..num_vertices {
            builder.add_edge(VertexIndex::new(v - 1), VertexIndex::new(v));
        }
        if num_vertices >= 3 {
            builder.add_edge(VertexIndex::new(num_vertices - 1), VertexIndex::new(0));
        }
        builder.build()
    }

    /// Creates a graph from a list of `(u, v)` pairs of raw vertex indices.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of bounds or an edge is a self-loop.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut builder = GraphBuilder::new(num_vertices);
        for &(u, v) in edges {
            builder.add_edge(VertexIndex::new(u), VertexIndex::new(v));
        }
        builder.build()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the degree of `v` in the whole graph.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[inline]
    pub fn degree(&self, v: VertexIndex) -> usize {
        self.row(v, "degree").count_ones(..)
    }

    /// Iterates every edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, row)| {
            row.ones()
                .filter(move |&v| v > u)
                .map(move |v| (VertexIndex::new(u), VertexIndex::new(v)))
        })
    }

    /// Returns the complement graph: `u != v` are adjacent in the result iff
    /// they are not adjacent in `self`.
    pub fn complement(&self) -> SimpleGraph {
        let n = self.num_vertices();
        let mut adjacency = Vec::with_capacity(n);
        for (v, row) in self.adjacency.iter().enumerate() {
            let mut complement_row = FixedBitSet::with_capacity(n);
            complement_row.insert_range(..);
            complement_row.difference_with(row);
            complement_row.set(v, false);
            adjacency.push(complement_row);
        }

        let max_edges = n * n.saturating_sub(1) / 2;
        SimpleGraph {
            adjacency,
            num_edges: max_edges - self.num_edges,
        }
    }

    #[inline(always)]
    fn row(&self, v: VertexIndex, caller: &str) -> &FixedBitSet {
        let index = v.get();
        assert!(
            index < self.adjacency.len(),
            "called `SimpleGraph::{}` with vertex index out of bounds: the len is {} but the index is {}",
            caller,
            self.adjacency.len(),
            index
        );
        &self.adjacency[index]
    }
}

impl Graph for SimpleGraph {
    #[inline]
    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn is_adjacent(&self, u: VertexIndex, v: VertexIndex) -> bool {
        self.row(u, "is_adjacent").contains(v.get())
    }

    #[inline]
    fn degree_within(&self, v: VertexIndex, subset: &FixedBitSet) -> usize {
        self.row(v, "degree_within").intersection(subset).count()
    }

    #[inline]
    fn neighbors(&self, v: VertexIndex) -> &FixedBitSet {
        self.row(v, "neighbors")
    }
}

impl std::fmt::Debug for SimpleGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleGraph")
            .field("num_vertices", &self.num_vertices())
            .field("num_edges", &self.num_edges)
            .finish()
    }
}

impl std::fmt::Display for SimpleGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SimpleGraph(vertices: {}, edges: {})",
            self.num_vertices(),
            self.num_edges
        )
    }
}

/// Incremental builder for [`SimpleGraph`].
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    adjacency: Vec<FixedBitSet>,
    num_edges: usize,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![FixedBitSet::with_capacity(num_vertices); num_vertices],
            num_edges: 0,
        }
    }

    /// Returns the number of vertices of the graph under construction.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct edges added so far.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the edge `{u, v}` has already been added.
    #[inline]
    pub fn has_edge(&self, u: VertexIndex, v: VertexIndex) -> bool {
        u.get() < self.adjacency.len() && self.adjacency[u.get()].contains(v.get())
    }

    /// Adds the undirected edge `{u, v}`. Adding an existing edge again is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of bounds or if `u == v`.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex) -> &mut Self {
        let n = self.adjacency.len();
        assert!(
            u.get() < n && v.get() < n,
            "called `GraphBuilder::add_edge` with vertex index out of bounds: the len is {} but the indices are {} and {}",
            n,
            u.get(),
            v.get()
        );
        assert!(
            u != v,
            "called `GraphBuilder::add_edge` with a self-loop on vertex {}",
            u.get()
        );

        if !self.adjacency[u.get()].put(v.get()) {
            self.adjacency[v.get()].insert(u.get());
            self.num_edges += 1;
        }
        self
    }

    /// Finalizes the graph.
    pub fn build(self) -> SimpleGraph {
        SimpleGraph {
            adjacency: self.adjacency,
            num_edges: self.num_edges,
        }
    }
}
