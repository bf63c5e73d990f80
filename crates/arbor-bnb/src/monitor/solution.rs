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


//! Solution limit monitor for tree search
//!
//! `SolutionLimitMonitor` stops the search once the incumbent has been
//! improved a configured number of times. It reads the count from the solver
//! statistics and stays unobtrusive otherwise.

use crate::{
    monitor::tree_search_monitor::{BranchKind, PruneReason, SearchCommand, TreeSearchMonitor},
    problem::{BranchAndBound, SolutionOf, ValueOf},
    stats::BnbSolverStatistics,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionLimitMonitor {
    solution_limit: u64,
}

impl SolutionLimitMonitor {
    /// Creates a new `SolutionLimitMonitor` with the specified solution limit.
    pub fn new(solution_limit: u64) -> Self {
        Self { solution_limit }
    }

    /// Returns the configured solution limit.
    pub fn solution_limit(&self) -> u64 {
        self.solution_limit
    }
}

impl std::fmt::Display for SolutionLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolutionLimitMonitor(limit: {})", self.solution_limit)
    }
}

impl<P> TreeSearchMonitor<P> for SolutionLimitMonitor
where
    P: BranchAndBound + ?Sized,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _root: &P::Subproblem, _: &BnbSolverStatistics<ValueOf<P>>) {}

    fn on_exit_search(&mut self, _: &BnbSolverStatistics<ValueOf<P>>) {}

    fn search_command(
        &mut self,
        _subproblem: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) -> SearchCommand {
        if statistics.solutions_found >= self.solution_limit {
            SearchCommand::Terminate("Solution limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }

    fn on_node(&mut self, _: &P::Subproblem, _: u64, _: &BnbSolverStatistics<ValueOf<P>>) {}

    fn on_bound_computed(
        &mut self,
        _: &P::Subproblem,
        _: ValueOf<P>,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }

    fn on_prune(
        &mut self,
        _: &P::Subproblem,
        _: PruneReason,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }

    fn on_choices_generated(
        &mut self,
        _: &P::Subproblem,
        _: usize,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }

    fn on_descend(
        &mut self,
        _: &P::Subproblem,
        _: &P::Choice,
        _: BranchKind,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }

    fn on_backtrack(
        &mut self,
        _: &P::Subproblem,
        _: &P::Choice,
        _: BranchKind,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }

    fn on_solution_found(
        &mut self,
        _: &SolutionOf<P>,
        _: ValueOf<P>,
        _: &BnbSolverStatistics<ValueOf<P>>,
    ) {
    }
}
