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


//! Progress logging for tree search
//!
//! `LogTreeSearchMonitor` emits a throttled progress table through the `log`
//! facade at `info` level. The clock is read only when the node counter
//! matches `clock_check_mask`, so the per-node overhead is a bitwise test.
//! Incumbent improvements are logged at `debug` level as they happen.

use crate::{
    monitor::tree_search_monitor::{BranchKind, PruneReason, TreeSearchMonitor},
    problem::{BranchAndBound, SolutionOf, ValueOf},
    stats::BnbSolverStatistics,
    subproblem::Subproblem,
};
use arbor_core::num::ObjectiveValue;
use log::{debug, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<V> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_value: Option<V>,
}

impl<V> LogTreeSearchMonitor<V>
where
    V: ObjectiveValue,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_value: None,
        }
    }

    /// Returns the best objective value seen so far in the current search.
    #[inline]
    pub fn best_value(&self) -> Option<V> {
        self.best_value
    }

    #[inline(always)]
    fn log_header(&self) {
        info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<17} | {:<10} | {:<10}",
            "Elapsed", "Nodes", "Depth", "Best Value", "Current Value", "Backtracks", "Pruned"
        );
        info!("{}", "-".repeat(97));
    }

    #[inline(always)]
    fn log_line(&mut self, depth: u64, current: V, stats: &BnbSolverStatistics<V>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_str = match &self.best_value {
            Some(value) => format!("{}", value),
            None => "-".to_string(),
        };

        info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<17} | {:<10} | {:<10}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            depth,
            best_str,
            current,
            stats.backtracks,
            stats.total_prunings()
        );

        self.last_log_time = now;
    }
}

impl<V> Default for LogTreeSearchMonitor<V>
where
    V: ObjectiveValue,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<V> std::fmt::Display for LogTreeSearchMonitor<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {:.2?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

impl<P, V> TreeSearchMonitor<P> for LogTreeSearchMonitor<V>
where
    P: BranchAndBound + ?Sized,
    P::Subproblem: Subproblem<Value = V>,
    V: ObjectiveValue,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, _root: &P::Subproblem, _: &BnbSolverStatistics<V>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_value = None;
        self.log_header();
    }

    fn on_exit_search(&mut self, stats: &BnbSolverStatistics<V>) {
        info!("{}", "-".repeat(97));
        info!(
            "Search finished after {:.2?}: {} nodes, {} solutions, {} prunings",
            self.start_time.elapsed(),
            stats.nodes_explored,
            stats.solutions_found,
            stats.total_prunings()
        );
    }

    fn on_node(&mut self, subproblem: &P::Subproblem, depth: u64, stats: &BnbSolverStatistics<V>) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(depth, subproblem.partial_sol_val(), stats);
        }
    }

    fn on_bound_computed(&mut self, _: &P::Subproblem, _: V, _: &BnbSolverStatistics<V>) {}

    fn on_prune(&mut self, _: &P::Subproblem, _: PruneReason, _: &BnbSolverStatistics<V>) {}

    fn on_choices_generated(&mut self, _: &P::Subproblem, _: usize, _: &BnbSolverStatistics<V>) {}

    fn on_descend(
        &mut self,
        _: &P::Subproblem,
        _: &P::Choice,
        _: BranchKind,
        _: &BnbSolverStatistics<V>,
    ) {
    }

    fn on_backtrack(
        &mut self,
        _: &P::Subproblem,
        _: &P::Choice,
        _: BranchKind,
        _: &BnbSolverStatistics<V>,
    ) {
    }

    fn on_solution_found(
        &mut self,
        _solution: &SolutionOf<P>,
        value: ValueOf<P>,
        stats: &BnbSolverStatistics<V>,
    ) {
        debug!(
            "New incumbent with value {} after {} nodes",
            value, stats.nodes_explored
        );
        self.best_value = Some(value);
    }
}
