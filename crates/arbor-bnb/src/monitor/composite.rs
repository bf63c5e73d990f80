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


//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, limits and custom
//! instrumentation without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::tree_search_monitor::{BranchKind, PruneReason, SearchCommand, TreeSearchMonitor},
    problem::{BranchAndBound, SolutionOf, ValueOf},
    stats::BnbSolverStatistics,
};

/// A tree search monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<P> + 'a>>,
}

impl<'a, P> Default for CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P> CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeTreeSearchMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<P> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<P> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<P> + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, P> FromIterator<Box<dyn TreeSearchMonitor<P> + 'a>> for CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<P> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, P> std::fmt::Debug for CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeTreeSearchMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<'a, P> TreeSearchMonitor<P> for CompositeTreeSearchMonitor<'a, P>
where
    P: BranchAndBound + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(
        &mut self,
        root: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(root, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<ValueOf<P>>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        subproblem: &P::Subproblem,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(subproblem, statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_node(
        &mut self,
        subproblem: &P::Subproblem,
        depth: u64,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_node(subproblem, depth, statistics);
        }
    }

    #[inline(always)]
    fn on_bound_computed(
        &mut self,
        subproblem: &P::Subproblem,
        bound: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_bound_computed(subproblem, bound, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        subproblem: &P::Subproblem,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_prune(subproblem, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_choices_generated(
        &mut self,
        subproblem: &P::Subproblem,
        count: usize,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_choices_generated(subproblem, count, statistics);
        }
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        child: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_descend(child, choice, branch, statistics);
        }
    }

    #[inline(always)]
    fn on_backtrack(
        &mut self,
        parent: &P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_backtrack(parent, choice, branch, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        solution: &SolutionOf<P>,
        value: ValueOf<P>,
        statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(solution, value, statistics);
        }
    }
}
