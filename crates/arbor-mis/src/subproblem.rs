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


//! Search-tree nodes of the maximum independent set search.
//!
//! `MisSubproblem` is the single node value the engine mutates in place. It
//! consists of
//! - the instance view `MisInstance`: the graph, the set of vertices that
//!   may still join the solution (the eligible set) and its size,
//! - the partial solution, an `IndependentSet`,
//! - an `UndoTrail` of removed vertices, one frame per transition on the
//!   current path.
//!
//! Every vertex leaves the eligible set at most once along a path, so the trail
//! never holds more entries than the graph has vertices.

use arbor_bnb::{subproblem::Subproblem, trail::UndoTrail};
use arbor_graph::{graph::Graph, index::VertexIndex};
use fixedbitset::FixedBitSet;

/// A set of pairwise non-adjacent vertices, iterated in ascending order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndependentSet {
    members: FixedBitSet,
    len: usize,
}

impl IndependentSet {
    /// Creates an empty set over a graph with `num_vertices` vertices.
    #[inline]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            members: FixedBitSet::with_capacity(num_vertices),
            len: 0,
        }
    }

    /// Returns the number of vertices in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `v` is a member of the set.
    #[inline]
    pub fn contains(&self, v: VertexIndex) -> bool {
        self.members.contains(v.get())
    }

    /// Iterates the members in ascending index order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.members.ones().map(VertexIndex::new)
    }

    /// Returns the members as a sorted vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<VertexIndex> {
        self.iter().collect()
    }

    /// Returns `true` if every member is a vertex of `graph` and no two
    /// members are adjacent in it.
    pub fn is_independent_in<G>(&self, graph: &G) -> bool
    where
        G: Graph + ?Sized,
    {
        let num_vertices = graph.num_vertices();
        self.iter().all(|v| {
            v.get() < num_vertices && graph.neighbors(v).is_disjoint(&self.members)
        })
    }

    #[inline]
    pub(crate) fn insert(&mut self, v: VertexIndex) -> bool {
        let added = !self.members.put(v.get());
        if added {
            self.len += 1;
        }
        added
    }

    #[inline]
    pub(crate) fn remove(&mut self, v: VertexIndex) -> bool {
        let index = v.get();
        let removed = self.members.contains(index);
        if removed {
            self.members.set(index, false);
            self.len -= 1;
        }
        removed
    }
}

impl std::fmt::Debug for IndependentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.members.ones()).finish()
    }
}

impl std::fmt::Display for IndependentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IndependentSet(size: {}, vertices: {:?})", self.len, self)
    }
}

/// The remaining search space: a graph and the vertices still eligible.
pub struct MisInstance<'g, G: ?Sized> {
    graph: &'g G,
    eligible: FixedBitSet,
    num_eligible: usize,
}

impl<'g, G> MisInstance<'g, G>
where
    G: Graph + ?Sized,
{
    /// Returns the underlying graph.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the eligible set as a bitset over all vertices.
    #[inline]
    pub fn eligible(&self) -> &FixedBitSet {
        &self.eligible
    }

    /// Returns the number of eligible vertices.
    #[inline]
    pub fn num_eligible(&self) -> usize {
        self.num_eligible
    }

    /// Returns `true` if `v` is still eligible.
    #[inline]
    pub fn is_eligible(&self, v: VertexIndex) -> bool {
        self.eligible.contains(v.get())
    }

    /// Iterates the eligible vertices in ascending index order.
    #[inline]
    pub fn eligible_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.eligible.ones().map(VertexIndex::new)
    }

    #[inline]
    fn remove(&mut self, v: VertexIndex) -> bool {
        let index = v.get();
        let removed = self.eligible.contains(index);
        if removed {
            self.eligible.set(index, false);
            self.num_eligible -= 1;
        }
        removed
    }

    #[inline]
    fn insert(&mut self, v: VertexIndex) {
        let was_eligible = self.eligible.put(v.get());
        debug_assert!(
            !was_eligible,
            "called `MisInstance::insert` with vertex {} that is already eligible",
            v
        );
        self.num_eligible += 1;
    }
}

impl<'g, G> std::fmt::Debug for MisInstance<'g, G>
where
    G: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MisInstance")
            .field("num_eligible", &self.num_eligible)
            .field("eligible", &self.eligible.ones().collect::<Vec<_>>())
            .finish()
    }
}

/// A node of the maximum independent set search tree.
pub struct MisSubproblem<'g, G: ?Sized> {
    instance: MisInstance<'g, G>,
    solution: IndependentSet,
    trail: UndoTrail<VertexIndex>,
}

impl<'g, G> MisSubproblem<'g, G>
where
    G: Graph + ?Sized,
{
    /// Creates the root node: every vertex eligible, nothing chosen.
    pub fn new(graph: &'g G) -> Self {
        let n = graph.num_vertices();
        let mut eligible = FixedBitSet::with_capacity(n);
        eligible.insert_range(..);
        Self {
            instance: MisInstance {
                graph,
                eligible,
                num_eligible: n,
            },
            solution: IndependentSet::new(n),
            trail: UndoTrail::preallocated(n, n),
        }
    }

    /// Returns the undo trail of the current path.
    #[inline]
    pub fn trail(&self) -> &UndoTrail<VertexIndex> {
        &self.trail
    }

    /// Adds `v` to the solution and removes it and its eligible neighbours
    /// from the eligible set.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `v` is not eligible.
    pub(crate) fn take(&mut self, v: VertexIndex) {
        debug_assert!(
            self.instance.is_eligible(v),
            "called `MisSubproblem::take` with vertex {} that is not eligible",
            v
        );
        let graph = self.instance.graph;
        self.trail.push_frame();
        if self.instance.remove(v) {
            self.trail.push(v);
        }
        for u in graph.neighbors(v).ones().map(VertexIndex::new) {
            if self.instance.remove(u) {
                self.trail.push(u);
            }
        }
        self.solution.insert(v);
    }

    /// Removes `v` from the eligible set without adding it to the solution.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `v` is not eligible.
    pub(crate) fn exclude(&mut self, v: VertexIndex) {
        debug_assert!(
            self.instance.is_eligible(v),
            "called `MisSubproblem::exclude` with vertex {} that is not eligible",
            v
        );
        self.trail.push_frame();
        if self.instance.remove(v) {
            self.trail.push(v);
        }
    }

    /// Reverts the last `take(v)` or `exclude(v)`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if no transition is recorded.
    pub(crate) fn undo(&mut self, v: VertexIndex) {
        debug_assert!(
            !self.trail.is_empty(),
            "called `MisSubproblem::undo` for vertex {} without a recorded transition",
            v
        );
        if let Some(removed) = self.trail.pop_frame() {
            for u in removed {
                self.instance.insert(u);
            }
        }
        self.solution.remove(v);
    }
}

impl<'g, G> Subproblem for MisSubproblem<'g, G>
where
    G: Graph + ?Sized,
{
    type Instance = MisInstance<'g, G>;
    type Solution = IndependentSet;
    type Value = i64;
    type Aux = [VertexIndex];

    #[inline]
    fn instance(&self) -> &MisInstance<'g, G> {
        &self.instance
    }

    #[inline]
    fn partial_sol(&self) -> &IndependentSet {
        &self.solution
    }

    #[inline]
    fn partial_sol_val(&self) -> i64 {
        self.solution.len() as i64
    }

    #[inline]
    fn aux(&self) -> &[VertexIndex] {
        self.trail.current_frame()
    }

    #[inline]
    fn clone_sol(&self) -> IndependentSet {
        self.solution.clone()
    }
}

impl<'g, G> std::fmt::Debug for MisSubproblem<'g, G>
where
    G: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MisSubproblem")
            .field("instance", &self.instance)
            .field("solution", &self.solution)
            .field("trail", &self.trail)
            .finish()
    }
}

impl<'g, G> std::fmt::Display for MisSubproblem<'g, G>
where
    G: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MisSubproblem(eligible: {}, chosen: {}, depth: {})",
            self.instance.num_eligible,
            self.solution.len(),
            self.trail.depth()
        )
    }
}
