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


use crate::{
    monitor::tree_search_monitor::{BranchKind, PruneReason, SearchCommand, TreeSearchMonitor},
    problem::{BranchAndBound, SolutionOf, ValueOf},
    stats::BnbSolverStatistics,
};
use std::time::{Duration, Instant};

/// A monitor that terminates the search after a specified duration.
///
/// Checks the clock only every `check_interval` nodes to minimize overhead.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Option<Instant>,
    check_interval: u64,
    ops_since_last_check: u64,
}

impl TimeLimitMonitor {
    /// Creates a new `TimeLimitMonitor` with the specified duration and check interval.
    /// `check_interval` specifies how many nodes to visit between time checks.
    /// A higher value reduces overhead but may lead to slightly exceeding the time limit.
    pub fn new(duration: Duration, check_interval: u64) -> Self {
        Self {
            time_limit: duration,
            start_time: None,
            check_interval: check_interval.max(1),
            ops_since_last_check: 0,
        }
    }

    /// Creates a new `TimeLimitMonitor` with the specified duration and a default check interval of 10,000.
    pub fn with_default_check_interval(duration: Duration) -> Self {
        Self::new(duration, 10_000)
    }

    /// Returns the configured time limit.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl std::fmt::Display for TimeLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimeLimitMonitor(time_limit: {:.2?}, check_interval: {})",
            self.time_limit, self.check_interval
        )
    }
}

impl<P> TreeSearchMonitor<P> for TimeLimitMonitor
where
    P: BranchAndBound + ?Sized,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _root: &P::Subproblem, _: &BnbSolverStatistics<ValueOf<P>>) {
        self.start_time = Some(Instant::now());
        self.ops_since_last_check = 0;
    }

    fn on_exit_search(&mut self, _: &BnbSolverStatistics<ValueOf<P>>) {
        self.start_time = None;
    }

    fn search_command(
        &mut self,
        _subproblem: &P::Subproblem,
        _statistics: &BnbSolverStatistics<ValueOf<P>>,
    ) -> SearchCommand {
        self.ops_since_last_check = self.ops_since_last_check.saturating_add(1);

        if self.ops_since_last_check >= self.check_interval {
            self.ops_since_last_check = 0;

            if let Some(start) = self.start_time
                && start.elapsed() >= self.time_limit
            {
                return SearchCommand::Terminate(format!(
                    "Time limit of {:.2?} exceeded",
                    self.time_limit
                ));
            }
        }

        SearchCommand::Continue
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
