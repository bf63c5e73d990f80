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


//! Maximum independent set as a branch-and-bound problem.
//!
//! Every node branches on a single eligible vertex: either it joins the
//! solution, which makes its eligible neighbours ineligible, or it is dropped
//! from the eligible set. A node is complete once nothing is eligible.
//!
//! Bounds
//! - `MisBound::MinDegree`: `|S| + |E| - d`, where `E` is the eligible set and
//!   `d` the minimum degree inside `E`. Any non-empty independent subset of
//!   `E` excludes at least the `d` neighbours of one of its members.
//! - `MisBound::EligibleCount`: `|S| + |E|`, looser but cheaper.
//!
//! Choice heuristics
//! - `ChoiceHeuristic::MinDegree`: the eligible vertex with the fewest
//!   eligible neighbours, lowest index on ties.
//! - `ChoiceHeuristic::FirstEligible`: the lowest-index eligible vertex.

use crate::subproblem::{IndependentSet, MisSubproblem};
use arbor_bnb::{
    problem::{BranchAndBound, Choices, Derivation},
    sense::ObjectiveSense,
    subproblem::Subproblem,
};
use arbor_graph::{graph::Graph, index::VertexIndex};
use smallvec::smallvec;

/// Upper bound used to prune subproblems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MisBound {
    /// Solution size plus eligible count minus the minimum eligible degree.
    #[default]
    MinDegree,
    /// Solution size plus eligible count.
    EligibleCount,
}

impl std::fmt::Display for MisBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MisBound::MinDegree => write!(f, "MinDegree"),
            MisBound::EligibleCount => write!(f, "EligibleCount"),
        }
    }
}

/// Rule selecting the vertex to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChoiceHeuristic {
    /// The eligible vertex of minimum degree within the eligible set.
    #[default]
    MinDegree,
    /// The eligible vertex with the lowest index.
    FirstEligible,
}

impl std::fmt::Display for ChoiceHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChoiceHeuristic::MinDegree => write!(f, "MinDegree"),
            ChoiceHeuristic::FirstEligible => write!(f, "FirstEligible"),
        }
    }
}

/// Bound and heuristic selection for [`MaxIndependentSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MisOptions {
    pub bound: MisBound,
    pub heuristic: ChoiceHeuristic,
}

impl MisOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_bound(mut self, bound: MisBound) -> Self {
        self.bound = bound;
        self
    }

    #[inline]
    pub fn with_heuristic(mut self, heuristic: ChoiceHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

impl std::fmt::Display for MisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MisOptions(bound: {}, heuristic: {})",
            self.bound, self.heuristic
        )
    }
}

/// The maximum independent set problem on a borrowed graph.
pub struct MaxIndependentSet<'g, G: ?Sized> {
    graph: &'g G,
    options: MisOptions,
}

impl<'g, G> MaxIndependentSet<'g, G>
where
    G: Graph + ?Sized,
{
    /// Creates the problem with the default bound and heuristic.
    #[inline]
    pub fn new(graph: &'g G) -> Self {
        Self::with_options(graph, MisOptions::default())
    }

    #[inline]
    pub fn with_options(graph: &'g G, options: MisOptions) -> Self {
        Self { graph, options }
    }

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    #[inline]
    pub fn options(&self) -> &MisOptions {
        &self.options
    }

    /// Returns the eligible vertex of minimum degree within the eligible set
    /// together with that degree; the lowest index wins ties.
    pub fn min_degree_vertex(&self, sp: &MisSubproblem<'g, G>) -> Option<(VertexIndex, usize)> {
        let eligible = sp.instance().eligible();
        let mut best: Option<(VertexIndex, usize)> = None;
        for v in sp.instance().eligible_vertices() {
            let degree = self.graph.degree_within(v, eligible);
            if best.is_none_or(|(_, min)| degree < min) {
                best = Some((v, degree));
                if degree == 0 {
                    break;
                }
            }
        }
        best
    }

    #[inline]
    fn select_vertex(&self, sp: &MisSubproblem<'g, G>) -> Option<VertexIndex> {
        match self.options.heuristic {
            ChoiceHeuristic::MinDegree => self.min_degree_vertex(sp).map(|(v, _)| v),
            ChoiceHeuristic::FirstEligible => sp.instance().eligible_vertices().next(),
        }
    }
}

impl<'g, G> std::fmt::Debug for MaxIndependentSet<'g, G>
where
    G: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxIndependentSet")
            .field("options", &self.options)
            .finish()
    }
}

impl<'g, G> BranchAndBound for MaxIndependentSet<'g, G>
where
    G: Graph + ?Sized,
{
    type Subproblem = MisSubproblem<'g, G>;
    type Choice = VertexIndex;

    fn name(&self) -> &str {
        "MaxIndependentSet"
    }

    #[inline]
    fn sense(&self) -> ObjectiveSense {
        ObjectiveSense::Maximize
    }

    fn root_subproblem(&self) -> MisSubproblem<'g, G> {
        MisSubproblem::new(self.graph)
    }

    fn initial_incumbent(&self) -> (IndependentSet, i64) {
        (IndependentSet::new(self.graph.num_vertices()), 0)
    }

    fn bound(&self, sp: &MisSubproblem<'g, G>) -> i64 {
        let optimistic = sp.partial_sol_val() + sp.instance().num_eligible() as i64;
        match self.options.bound {
            MisBound::EligibleCount => optimistic,
            MisBound::MinDegree => match self.min_degree_vertex(sp) {
                Some((_, degree)) => optimistic - degree as i64,
                None => optimistic,
            },
        }
    }

    #[inline]
    fn is_legal(&self, _: &MisSubproblem<'g, G>) -> bool {
        true
    }

    #[inline]
    fn is_complete(&self, sp: &MisSubproblem<'g, G>) -> bool {
        sp.instance().num_eligible() == 0
    }

    #[inline]
    fn extra_prune(&self, _: &MisSubproblem<'g, G>, _: &IndependentSet, _: i64) -> bool {
        false
    }

    /// # Panics
    ///
    /// Panics if no vertex is eligible.
    fn next_choices(&self, sp: &MisSubproblem<'g, G>) -> Choices<VertexIndex> {
        match self.select_vertex(sp) {
            Some(v) => smallvec![v],
            None => panic!(
                "called `MaxIndependentSet::next_choices` with an empty eligible set"
            ),
        }
    }

    #[inline]
    fn derive_with_choice(&self, sp: &mut MisSubproblem<'g, G>, &v: &VertexIndex) {
        sp.take(v);
    }

    #[inline]
    fn derive_without_choice(&self, sp: &mut MisSubproblem<'g, G>, &v: &VertexIndex) -> Derivation {
        sp.exclude(v);
        Derivation::Derived
    }

    #[inline]
    fn restore_subproblem(&self, sp: &mut MisSubproblem<'g, G>, &v: &VertexIndex) {
        sp.undo(v);
    }
}
