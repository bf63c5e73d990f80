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


//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait together with `PruneReason`,
//! `BranchKind` and `SearchCommand` for observing and controlling the
//! branch-and-bound engine. Callbacks track the search lifecycle, and a
//! monitor can stop the search via `search_command` (default: Continue).
//!
//! Lifecycle
//! - enter → node → {solution} → {bound | prune} → choices →
//!   descend → ... → backtrack → exit
//! - `on_descend` sees the child subproblem, `on_backtrack` sees the parent
//!   after restoration.
//! - `BnbSolverStatistics` is provided to every callback for telemetry.
//!
//! Monitors are generic over the problem, so they can inspect the concrete
//! subproblem and choice types without downcasting.

use crate::{
    problem::{BranchAndBound, SolutionOf, ValueOf},
    stats::BnbSolverStatistics,
};

/// The action the search should take after consulting a monitor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop the search, unwinding and restoring the subproblem.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for pruning a subproblem, in the order the engine checks them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PruneReason {
    /// The partial solution cannot be extended further.
    Complete,
    /// The problem-specific pruning hook fired.
    ExtraPrune,
    /// The partial solution is illegal.
    Infeasible,
    /// The bound cannot beat the incumbent.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Complete => write!(f, "Complete"),
            PruneReason::ExtraPrune => write!(f, "ExtraPrune"),
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Which of the two branches of a choice is being explored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BranchKind {
    /// The choice is taken.
    WithChoice,
    /// The choice is excluded.
    WithoutChoice,
}

impl std::fmt::Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchKind::WithChoice => write!(f, "WithChoice"),
            BranchKind::WithoutChoice => write!(f, "WithoutChoice"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor<P>
where
    P: BranchAndBound + ?Sized,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts, with the root subproblem.
    fn on_enter_search(
        &mut self,
        root: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called when the search ends, after the root has been restored.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<ValueOf<P>>);
    /// Called once per node to determine whether the search continues.
    fn search_command(
        &mut self,
        _subproblem: &P::Subproblem,
        _statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when a node is visited. The root has depth 0.
    fn on_node(
        &mut self,
        subproblem: &P::Subproblem,
        depth: u64,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called when the bound of a subproblem has been computed.
    fn on_bound_computed(
        &mut self,
        subproblem: &P::Subproblem,
        bound: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called when a subproblem is pruned.
    fn on_prune(
        &mut self,
        subproblem: &P::Subproblem,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called when the choices of a subproblem have been generated.
    fn on_choices_generated(
        &mut self,
        subproblem: &P::Subproblem,
        count: usize,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called after descending into a child subproblem.
    fn on_descend(
        &mut self,
        child: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called after the parent subproblem has been restored.
    fn on_backtrack(
        &mut self,
        parent: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
    /// Called when a new incumbent has been installed.
    fn on_solution_found(
        &mut self,
        solution: &SolutionOf<P>,
        value: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    );
}

impl<P, M> TreeSearchMonitor<P> for &mut M
where
    P: BranchAndBound + ?Sized,
    M: TreeSearchMonitor<P> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(
        &mut self,
        root: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_enter_search(root, statistics)
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<ValueOf<P>>) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        subproblem: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) -> SearchCommand {
        (**self).search_command(subproblem, statistics)
    }

    #[inline(always)]
    fn on_node(
        &mut self,
        subproblem: &P::Subproblem,
        depth: u64,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_node(subproblem, depth, statistics)
    }

    #[inline(always)]
    fn on_bound_computed(
        &mut self,
        subproblem: &P::Subproblem,
        bound: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_bound_computed(subproblem, bound, statistics)
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        subproblem: &P::Subproblem,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_prune(subproblem, reason, statistics)
    }

    #[inline(always)]
    fn on_choices_generated(
        &mut self,
        subproblem: &P::Subproblem,
        count: usize,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_choices_generated(subproblem, count, statistics)
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        child: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_descend(child, choice, branch, statistics)
    }

    #[inline(always)]
    fn on_backtrack(
        &mut self,
        parent: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_backtrack(parent, choice, branch, statistics)
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        solution: &SolutionOf<P>,
        value: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        (**self).on_solution_found(solution, value, statistics)
    }
}

impl<P> std::fmt::Debug for dyn TreeSearchMonitor<P> + '_
where
    P: BranchAndBound + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<P> std::fmt::Display for dyn TreeSearchMonitor<P> + '_
where
    P: BranchAndBound + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
