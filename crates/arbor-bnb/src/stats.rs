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


use crate::monitor::tree_search_monitor::PruneReason;
use std::time::Duration;

/// Statistics collected during a branch-and-bound search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbSolverStatistics<V> {
    /// Total nodes visited, including the root.
    pub nodes_explored: u64,
    /// Total restorations of the subproblem back to a parent.
    pub backtracks: u64,
    /// The deepest level reached in the tree; the root has depth 0.
    pub max_depth: u64,
    /// Total branching choices generated.
    pub choices_generated: u64,
    /// Exclusion branches skipped because the problem reported them as not applicable.
    pub exclusions_skipped: u64,
    /// Pruned because the partial solution cannot be extended.
    pub prunings_complete: u64,
    /// Pruned by the problem-specific pruning hook.
    pub prunings_extra: u64,
    /// Pruned because the partial solution is illegal.
    pub prunings_infeasible: u64,
    /// Pruned because the bound cannot beat the incumbent.
    pub prunings_bound: u64,
    /// Total incumbent improvements during the search.
    pub solutions_found: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The bound of the root subproblem, if it was computed.
    pub root_bound: Option<V>,
}

impl<V> Default for BnbSolverStatistics<V> {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            backtracks: 0,
            max_depth: 0,
            choices_generated: 0,
            exclusions_skipped: 0,
            prunings_complete: 0,
            prunings_extra: 0,
            prunings_infeasible: 0,
            prunings_bound: 0,
            solutions_found: 0,
            time_total: Duration::ZERO,
            root_bound: None,
        }
    }
}

impl<V> BnbSolverStatistics<V> {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_choices_generated(&mut self, count: usize) {
        self.choices_generated = self.choices_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_exclusion_skipped(&mut self) {
        self.exclusions_skipped = self.exclusions_skipped.saturating_add(1);
    }

    /// Records a pruning event in the counter matching `reason`.
    #[inline]
    pub fn on_prune(&mut self, reason: PruneReason) {
        let counter = match reason {
            PruneReason::Complete => &mut self.prunings_complete,
            PruneReason::ExtraPrune => &mut self.prunings_extra,
            PruneReason::Infeasible => &mut self.prunings_infeasible,
            PruneReason::BoundDominated => &mut self.prunings_bound,
        };
        *counter = counter.saturating_add(1);
    }

    /// Returns the total number of pruned subproblems over all reasons.
    #[inline]
    pub fn total_prunings(&self) -> u64 {
        self.prunings_complete
            .saturating_add(self.prunings_extra)
            .saturating_add(self.prunings_infeasible)
            .saturating_add(self.prunings_bound)
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_bound(&mut self, bound: V) {
        self.root_bound = Some(bound);
    }
}

impl<V> std::fmt::Display for BnbSolverStatistics<V>
where
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Arbor-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:            {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Choices generated:     {}", self.choices_generated)?;
        writeln!(f, "  Exclusions skipped:    {}", self.exclusions_skipped)?;
        writeln!(f, "  Prunings (complete):   {}", self.prunings_complete)?;
        writeln!(f, "  Prunings (extra):      {}", self.prunings_extra)?;
        writeln!(f, "  Prunings (infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        match &self.root_bound {
            Some(bound) => writeln!(f, "  Root bound:            {}", bound)?,
            None => writeln!(f, "  Root bound:            n/a")?,
        }
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}
