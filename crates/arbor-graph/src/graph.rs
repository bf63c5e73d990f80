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


//! The minimal graph interface required by the search instantiations.
//!
//! Vertices are identified by dense `VertexIndex` values in `0..num_vertices()`.
//! Subsets of vertices are passed around as `FixedBitSet`s whose bit `i`
//! stands for vertex `i`.

use crate::index::VertexIndex;
use arbor_core::index::IndexRange;
use fixedbitset::FixedBitSet;

/// An undirected simple graph as seen by a problem instantiation.
pub trait Graph {
    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns `true` if `u` and `v` are joined by an edge.
    ///
    /// A vertex is never adjacent to itself.
    fn is_adjacent(&self, u: VertexIndex, v: VertexIndex) -> bool;

    /// Returns the number of neighbours of `v` that are contained in `subset`.
    ///
    /// `v` itself is never counted, whether or not it is part of `subset`.
    fn degree_within(&self, v: VertexIndex, subset: &FixedBitSet) -> usize;

    /// Returns the adjacency row of `v` as a bitset over all vertices.
    fn neighbors(&self, v: VertexIndex) -> &FixedBitSet;

    /// Enumerates all vertices in ascending index order.
    #[inline]
    fn vertices(&self) -> IndexRange<crate::index::VertexIndexTag> {
        VertexIndex::range(self.num_vertices())
    }
}

impl<G> Graph for &G
where
    G: Graph + ?Sized,
{
    #[inline]
    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }

    #[inline]
    fn is_adjacent(&self, u: VertexIndex, v: VertexIndex) -> bool {
        (**self).is_adjacent(u, v)
    }

    #[inline]
    fn degree_within(&self, v: VertexIndex, subset: &FixedBitSet) -> usize {
        (**self).degree_within(v, subset)
    }

    #[inline]
    fn neighbors(&self, v: VertexIndex) -> &FixedBitSet {
        (**self).neighbors(v)
    }
}
