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


//! Depth-first branch-and-bound engine.
//!
//! `BnbSolver` drives any [`BranchAndBound`] instantiation. It owns a single
//! subproblem per run and explores the tree by mutating it in place: every
//! transition is followed by the matching restoration in strict LIFO order,
//! so when `solve_from` returns, the subproblem is observably identical to
//! the one passed in. This holds for aborted searches too; an abort unwinds
//! through the same restorations.
//!
//! At every node the engine
//! 1. installs the partial solution as incumbent if it is strictly better,
//! 2. consults the monitor's `search_command`,
//! 3. prunes if the node is complete, the problem's extra hook fires, the
//!    partial solution is illegal, or the bound is dominated by the
//!    incumbent (checked in that order, the bound only computed last),
//! 4. otherwise branches on each generated choice, first with the choice
//!    taken and then, if applicable, with the choice excluded.
//!
//! A search session object encapsulates per-run state, statistics and
//! timing; the solver itself only holds configuration and can be reused.

use crate::{
    config::BnbSolverConfig,
    incumbent::Incumbent,
    monitor::tree_search_monitor::{BranchKind, PruneReason, SearchCommand, TreeSearchMonitor},
    problem::{BranchAndBound, Derivation, SolutionOf, ValueOf},
    result::BnbSolverOutcome,
    stats::BnbSolverStatistics,
    subproblem::Subproblem,
};
use log::{debug, trace};

/// A reusable depth-first branch-and-bound solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BnbSolver {
    config: BnbSolverConfig,
}

impl BnbSolver {
    /// Creates a solver with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    #[inline]
    pub fn with_config(config: BnbSolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> &BnbSolverConfig {
        &self.config
    }

    /// Solves `problem` starting from its root subproblem.
    pub fn solve<P, M>(
        &self,
        problem: &P,
        monitor: M,
    ) -> BnbSolverOutcome<SolutionOf<P>, ValueOf<P>>
    where
        P: BranchAndBound,
        M: TreeSearchMonitor<P>,
    {
        let mut root = problem.root_subproblem();
        self.solve_from(problem, &mut root, monitor)
    }

    /// Solves `problem` starting from a caller-provided subproblem.
    ///
    /// The subproblem is mutated during the search and restored to its
    /// original state before this returns, whether the search completed or
    /// was aborted.
    pub fn solve_from<P, M>(
        &self,
        problem: &P,
        root: &mut P::Subproblem,
        mut monitor: M,
    ) -> BnbSolverOutcome<SolutionOf<P>, ValueOf<P>>
    where
        P: BranchAndBound,
        M: TreeSearchMonitor<P>,
    {
        BnbSolverSearchSession::new(problem, self.config, &mut monitor).run(root)
    }
}

impl std::fmt::Display for BnbSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BnbSolver({})", self.config)
    }
}

/// A search session for the branch-and-bound solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, P, M>
where
    P: BranchAndBound,
{
    problem: &'a P,
    config: BnbSolverConfig,
    monitor: &'a mut M,
    incumbent: Incumbent<SolutionOf<P>, ValueOf<P>>,
    stats: BnbSolverStatistics<ValueOf<P>>,
    depth: u64,
    abort: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, P, M> std::fmt::Debug for BnbSolverSearchSession<'a, P, M>
where
    P: BranchAndBound,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BnbSolverSearchSession")
            .field("problem", &self.problem.name())
            .field("config", &self.config)
            .field("best_value", &self.incumbent.value())
            .field("depth", &self.depth)
            .field("abort", &self.abort)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, P, M> BnbSolverSearchSession<'a, P, M>
where
    P: BranchAndBound,
    M: TreeSearchMonitor<P>,
{
    #[inline]
    fn new(problem: &'a P, config: BnbSolverConfig, monitor: &'a mut M) -> Self {
        let (solution, value) = problem.initial_incumbent();
        Self {
            problem,
            config,
            monitor,
            incumbent: Incumbent::new(solution, value),
            stats: BnbSolverStatistics::default(),
            depth: 0,
            abort: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    fn run(mut self, root: &mut P::Subproblem) -> BnbSolverOutcome<SolutionOf<P>, ValueOf<P>> {
        debug!(
            "Starting branch-and-bound on '{}' ({}) with {}",
            self.problem.name(),
            self.problem.sense(),
            self.config
        );

        if !self.problem.is_complete(root) {
            let root_bound = self.problem.bound(root);
            self.stats.set_root_bound(root_bound);
            debug!("Root bound of '{}': {}", self.problem.name(), root_bound);
        }

        self.monitor.on_enter_search(root, &self.stats);
        self.search(root);

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result()
    }

    /// Finalize the solver result based on the incumbent
    /// and whether the search was aborted.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize_result(self) -> BnbSolverOutcome<SolutionOf<P>, ValueOf<P>> {
        match self.abort {
            None => {
                debug!(
                    "Search on '{}' proved optimality with value {} after {} nodes",
                    self.problem.name(),
                    self.incumbent.value(),
                    self.stats.nodes_explored
                );
                BnbSolverOutcome::optimal(self.incumbent, self.stats)
            }
            Some(reason) => {
                debug!(
                    "Search on '{}' aborted ({}) with value {} after {} nodes",
                    self.problem.name(),
                    reason,
                    self.incumbent.value(),
                    self.stats.nodes_explored
                );
                BnbSolverOutcome::aborted(self.incumbent, reason, self.stats)
            }
        }
    }

    /// Explores the subtree rooted at the current state of `subproblem`.
    fn search(&mut self, subproblem: &mut P::Subproblem) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.depth);
        self.monitor.on_node(subproblem, self.depth, &self.stats);

        if self.problem.is_better(subproblem, self.incumbent.value()) {
            self.install_incumbent(subproblem);
        }

        // An abort here already reflects this node in the incumbent.
        if let SearchCommand::Terminate(reason) =
            self.monitor.search_command(subproblem, &self.stats)
        {
            self.abort = Some(reason);
            return;
        }

        if let Some(reason) = self.prune_reason(subproblem) {
            self.stats.on_prune(reason);
            self.monitor.on_prune(subproblem, reason, &self.stats);
            return;
        }

        let choices = self.problem.next_choices(subproblem);
        debug_assert!(
            !choices.is_empty(),
            "called `BranchAndBound::next_choices` on an incomplete subproblem of '{}' and got no choices",
            self.problem.name()
        );
        self.stats.on_choices_generated(choices.len());
        self.monitor
            .on_choices_generated(subproblem, choices.len(), &self.stats);

        for choice in &choices {
            self.problem.derive_with_choice(subproblem, choice);
            self.explore_child(subproblem, choice, BranchKind::WithChoice);
            if self.abort.is_some() {
                return;
            }

            match self.problem.derive_without_choice(subproblem, choice) {
                Derivation::Derived => {
                    self.explore_child(subproblem, choice, BranchKind::WithoutChoice);
                    if self.abort.is_some() {
                        return;
                    }
                }
                Derivation::NotApplicable => self.stats.on_exclusion_skipped(),
            }
        }
    }

    /// Searches a freshly derived child and restores the parent afterwards.
    #[inline]
    fn explore_child(
        &mut self,
        subproblem: &mut P::Subproblem,
        choice: &P::Choice,
        branch: BranchKind,
    ) {
        self.depth += 1;
        self.monitor
            .on_descend(subproblem, choice, branch, &self.stats);

        self.search(subproblem);

        self.depth -= 1;
        self.problem.restore_subproblem(subproblem, choice);
        self.stats.on_backtrack();
        self.monitor
            .on_backtrack(subproblem, choice, branch, &self.stats);
    }

    /// Returns the first pruning rule that applies to `subproblem`, if any.
    /// The incumbent must already reflect `subproblem`.
    #[inline]
    fn prune_reason(&mut self, subproblem: &P::Subproblem) -> Option<PruneReason> {
        if self.problem.is_complete(subproblem) {
            return Some(PruneReason::Complete);
        }

        if self.config.extra_pruning
            && self.problem.extra_prune(
                subproblem,
                self.incumbent.solution(),
                self.incumbent.value(),
            )
        {
            return Some(PruneReason::ExtraPrune);
        }

        if !self.problem.is_legal(subproblem) {
            return Some(PruneReason::Infeasible);
        }

        if self.config.bound_pruning {
            let bound = self.problem.bound(subproblem);
            self.monitor
                .on_bound_computed(subproblem, bound, &self.stats);
            if self
                .problem
                .sense()
                .is_dominated(bound, self.incumbent.value())
            {
                return Some(PruneReason::BoundDominated);
            }
        }

        None
    }

    #[inline]
    fn install_incumbent(&mut self, subproblem: &P::Subproblem) {
        let value = subproblem.partial_sol_val();
        self.incumbent.replace(subproblem.clone_sol(), value);
        self.stats.on_solution_found();
        trace!(
            "New incumbent for '{}' with value {} at depth {}",
            self.problem.name(),
            value,
            self.depth
        );
        self.monitor
            .on_solution_found(self.incumbent.solution(), value, &self.stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        monitor::{
            composite::CompositeTreeSearchMonitor, no_op::NoOperationMonitor,
            solution::SolutionLimitMonitor, time_limit::TimeLimitMonitor,
        },
        problem::Choices,
        result::{SolverResult, TerminationReason},
        sense::ObjectiveSense,
    };
    use smallvec::smallvec;
    use std::time::Duration;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // 0/1 knapsack: one binary decision per item, in index order. An
    // overweight selection is worth nothing.
    #[derive(Debug, Clone)]
    struct Knapsack {
        weights: Vec<i64>,
        values: Vec<i64>,
        capacity: i64,
        prune_everything: bool,
    }

    impl Knapsack {
        fn new(items: &[(i64, i64)], capacity: i64) -> Self {
            Self {
                weights: items.iter().map(|&(w, _)| w).collect(),
                values: items.iter().map(|&(_, v)| v).collect(),
                capacity,
                prune_everything: false,
            }
        }

        fn brute_force(&self) -> i64 {
            let n = self.weights.len();
            (0u32..(1 << n))
                .filter_map(|mask| {
                    let (w, v) = (0..n)
                        .filter(|&i| mask & (1 << i) != 0)
                        .fold((0, 0), |(w, v), i| (w + self.weights[i], v + self.values[i]));
                    (w <= self.capacity).then_some(v)
                })
                .max()
                .unwrap_or(0)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct KnapsackNode {
        next: usize,
        taken: Vec<usize>,
        history: Vec<bool>,
        weight: i64,
        value: i64,
        capacity: i64,
    }

    impl Subproblem for KnapsackNode {
        type Instance = usize;
        type Solution = Vec<usize>;
        type Value = i64;
        type Aux = [bool];

        fn instance(&self) -> &usize {
            &self.next
        }

        fn partial_sol(&self) -> &Vec<usize> {
            &self.taken
        }

        fn partial_sol_val(&self) -> i64 {
            if self.weight <= self.capacity {
                self.value
            } else {
                0
            }
        }

        fn aux(&self) -> &[bool] {
            &self.history
        }

        fn clone_sol(&self) -> Vec<usize> {
            self.taken.clone()
        }
    }

    impl BranchAndBound for Knapsack {
        type Subproblem = KnapsackNode;
        type Choice = usize;

        fn name(&self) -> &str {
            "knapsack"
        }

        fn sense(&self) -> ObjectiveSense {
            ObjectiveSense::Maximize
        }

        fn root_subproblem(&self) -> KnapsackNode {
            KnapsackNode {
                next: 0,
                taken: Vec::new(),
                history: Vec::new(),
                weight: 0,
                value: 0,
                capacity: self.capacity,
            }
        }

        fn initial_incumbent(&self) -> (Vec<usize>, i64) {
            (Vec::new(), 0)
        }

        fn bound(&self, sp: &KnapsackNode) -> i64 {
            sp.value + self.values[sp.next..].iter().sum::<i64>()
        }

        fn is_legal(&self, sp: &KnapsackNode) -> bool {
            sp.weight <= self.capacity
        }

        fn is_complete(&self, sp: &KnapsackNode) -> bool {
            sp.next == self.weights.len()
        }

        fn extra_prune(&self, _: &KnapsackNode, _: &Vec<usize>, _: i64) -> bool {
            self.prune_everything
        }

        fn next_choices(&self, sp: &KnapsackNode) -> Choices<usize> {
            smallvec![sp.next]
        }

        fn derive_with_choice(&self, sp: &mut KnapsackNode, &item: &usize) {
            sp.taken.push(item);
            sp.history.push(true);
            sp.weight += self.weights[item];
            sp.value += self.values[item];
            sp.next = item + 1;
        }

        fn derive_without_choice(&self, sp: &mut KnapsackNode, &item: &usize) -> Derivation {
            sp.history.push(false);
            sp.next = item + 1;
            Derivation::Derived
        }

        fn restore_subproblem(&self, sp: &mut KnapsackNode, &item: &usize) {
            if sp.history.pop() == Some(true) {
                sp.taken.pop();
                sp.weight -= self.weights[item];
                sp.value -= self.values[item];
            }
            sp.next = item;
        }
    }

    // Assignment of n jobs to n workers at minimum cost. Each node assigns
    // the next job to one of the free workers; exclusion is not a branch.
    // An incomplete assignment is worth nothing to a minimizer.
    #[derive(Debug, Clone)]
    struct Assignment {
        costs: Vec<Vec<i64>>,
    }

    impl Assignment {
        fn brute_force(&self) -> i64 {
            fn go(costs: &[Vec<i64>], job: usize, used: &mut Vec<bool>, acc: i64) -> i64 {
                if job == costs.len() {
                    return acc;
                }
                let mut best = i64::MAX;
                for w in 0..costs.len() {
                    if !used[w] {
                        used[w] = true;
                        best = best.min(go(costs, job + 1, used, acc + costs[job][w]));
                        used[w] = false;
                    }
                }
                best
            }
            go(&self.costs, 0, &mut vec![false; self.costs.len()], 0)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct AssignmentNode {
        workers: Vec<usize>,
        used: Vec<bool>,
        cost: i64,
    }

    impl Subproblem for AssignmentNode {
        type Instance = [bool];
        type Solution = Vec<usize>;
        type Value = i64;
        type Aux = ();

        fn instance(&self) -> &[bool] {
            &self.used
        }

        fn partial_sol(&self) -> &Vec<usize> {
            &self.workers
        }

        fn partial_sol_val(&self) -> i64 {
            if self.workers.len() == self.used.len() {
                self.cost
            } else {
                i64::MAX
            }
        }

        fn aux(&self) -> &() {
            &()
        }

        fn clone_sol(&self) -> Vec<usize> {
            self.workers.clone()
        }
    }

    impl BranchAndBound for Assignment {
        type Subproblem = AssignmentNode;
        type Choice = usize;

        fn name(&self) -> &str {
            "assignment"
        }

        fn sense(&self) -> ObjectiveSense {
            ObjectiveSense::Minimize
        }

        fn root_subproblem(&self) -> AssignmentNode {
            AssignmentNode {
                workers: Vec::new(),
                used: vec![false; self.costs.len()],
                cost: 0,
            }
        }

        fn initial_incumbent(&self) -> (Vec<usize>, i64) {
            (Vec::new(), ObjectiveSense::Minimize.worst())
        }

        fn bound(&self, sp: &AssignmentNode) -> i64 {
            let remaining: i64 = self.costs[sp.workers.len()..]
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|&(w, _)| !sp.used[w])
                        .map(|(_, &c)| c)
                        .min()
                        .unwrap_or(0)
                })
                .sum();
            sp.cost + remaining
        }

        fn is_legal(&self, _: &AssignmentNode) -> bool {
            true
        }

        fn is_complete(&self, sp: &AssignmentNode) -> bool {
            sp.workers.len() == self.costs.len()
        }

        fn extra_prune(&self, _: &AssignmentNode, _: &Vec<usize>, _: i64) -> bool {
            false
        }

        fn next_choices(&self, sp: &AssignmentNode) -> Choices<usize> {
            (0..self.costs.len()).filter(|&w| !sp.used[w]).collect()
        }

        fn derive_with_choice(&self, sp: &mut AssignmentNode, &worker: &usize) {
            let job = sp.workers.len();
            sp.workers.push(worker);
            sp.used[worker] = true;
            sp.cost += self.costs[job][worker];
        }

        fn derive_without_choice(&self, _: &mut AssignmentNode, _: &usize) -> Derivation {
            Derivation::NotApplicable
        }

        fn restore_subproblem(&self, sp: &mut AssignmentNode, &worker: &usize) {
            sp.workers.pop();
            sp.used[worker] = false;
            let job = sp.workers.len();
            sp.cost -= self.costs[job][worker];
        }
    }

    // Records the event sequence of a knapsack search.
    #[derive(Debug, Default)]
    struct RecordingMonitor {
        entered: bool,
        exited: bool,
        incumbent_values: Vec<i64>,
        descends: u64,
        backtracks: u64,
        prunes: Vec<PruneReason>,
        bounds: u64,
        max_depth: u64,
    }

    impl TreeSearchMonitor<Knapsack> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&mut self, root: &KnapsackNode, _: &BnbSolverStatistics<i64>) {
            assert_eq!(root.next, 0);
            self.entered = true;
        }

        fn on_exit_search(&mut self, _: &BnbSolverStatistics<i64>) {
            self.exited = true;
        }

        fn on_node(&mut self, sp: &KnapsackNode, depth: u64, _: &BnbSolverStatistics<i64>) {
            assert_eq!(sp.history.len() as u64, depth);
            self.max_depth = self.max_depth.max(depth);
        }

        fn on_bound_computed(&mut self, _: &KnapsackNode, _: i64, _: &BnbSolverStatistics<i64>) {
            self.bounds += 1;
        }

        fn on_prune(
            &mut self,
            _: &KnapsackNode,
            reason: PruneReason,
            _: &BnbSolverStatistics<i64>,
        ) {
            self.prunes.push(reason);
        }

        fn on_choices_generated(
            &mut self,
            _: &KnapsackNode,
            count: usize,
            _: &BnbSolverStatistics<i64>,
        ) {
            assert_eq!(count, 1);
        }

        fn on_descend(
            &mut self,
            child: &KnapsackNode,
            &item: &usize,
            branch: BranchKind,
            _: &BnbSolverStatistics<i64>,
        ) {
            assert_eq!(child.next, item + 1);
            assert_eq!(
                child.history.last().copied(),
                Some(branch == BranchKind::WithChoice)
            );
            self.descends += 1;
        }

        fn on_backtrack(
            &mut self,
            parent: &KnapsackNode,
            &item: &usize,
            _: BranchKind,
            _: &BnbSolverStatistics<i64>,
        ) {
            assert_eq!(parent.next, item);
            self.backtracks += 1;
        }

        fn on_solution_found(&mut self, solution: &Vec<usize>, value: i64, _: &BnbSolverStatistics<i64>) {
            assert!(!solution.is_empty());
            self.incumbent_values.push(value);
        }
    }

    fn classic_knapsack() -> Knapsack {
        Knapsack::new(&[(5, 10), (4, 40), (6, 30), (3, 50)], 10)
    }

    #[test]
    fn test_knapsack_optimum() {
        init_logger();
        let problem = classic_knapsack();
        let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());

        assert!(outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.incumbent().value(), 90);
        assert_eq!(outcome.incumbent().solution(), &vec![1, 3]);
        assert_eq!(outcome.statistics().root_bound, Some(130));
    }

    #[test]
    fn test_knapsack_matches_brute_force() {
        init_logger();
        let instances = [
            (vec![(2, 3), (3, 4), (4, 5), (5, 6)], 5),
            (vec![(1, 1), (3, 4), (4, 5), (5, 7)], 7),
            (vec![(10, 5), (20, 10), (30, 15)], 5),
            (vec![(1, 8), (2, 4), (3, 0), (2, 5), (2, 3)], 4),
            (vec![(4, 4), (4, 4), (4, 4), (4, 4), (4, 4), (4, 4)], 12),
        ];
        for (items, capacity) in instances {
            let problem = Knapsack::new(&items, capacity);
            let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
            assert!(outcome.is_optimal());
            assert_eq!(
                outcome.incumbent().value(),
                problem.brute_force(),
                "wrong optimum for items {:?} with capacity {}",
                items,
                capacity
            );
        }
    }

    #[test]
    fn test_disabling_bound_pruning_keeps_optimum_and_visits_more_nodes() {
        init_logger();
        let problem = classic_knapsack();
        let pruned = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
        let exhaustive = BnbSolver::with_config(BnbSolverConfig::new().with_bound_pruning(false))
            .solve(&problem, NoOperationMonitor::new());

        assert_eq!(pruned.incumbent().value(), exhaustive.incumbent().value());
        assert_eq!(exhaustive.statistics().prunings_bound, 0);
        assert!(pruned.statistics().prunings_bound > 0);
        assert!(exhaustive.statistics().nodes_explored > pruned.statistics().nodes_explored);
    }

    #[test]
    fn test_solve_from_restores_root() {
        init_logger();
        let problem = classic_knapsack();
        let mut root = problem.root_subproblem();
        let before = root.clone();

        let outcome = BnbSolver::new().solve_from(&problem, &mut root, NoOperationMonitor::new());

        assert!(outcome.is_optimal());
        assert_eq!(root, before);
    }

    #[test]
    fn test_recording_monitor_sees_consistent_events() {
        init_logger();
        let problem = classic_knapsack();
        let mut monitor = RecordingMonitor::default();
        let outcome = BnbSolver::new().solve(&problem, &mut monitor);
        let stats = outcome.statistics();

        assert!(monitor.entered && monitor.exited);
        assert_eq!(monitor.descends, monitor.backtracks);
        assert_eq!(monitor.backtracks, stats.backtracks);
        assert_eq!(stats.nodes_explored, stats.backtracks + 1);
        assert_eq!(monitor.max_depth, stats.max_depth);
        assert_eq!(monitor.prunes.len() as u64, stats.total_prunings());
        assert_eq!(monitor.incumbent_values.len() as u64, stats.solutions_found);
        assert!(monitor.bounds > 0);
        assert!(
            monitor
                .incumbent_values
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        );
        assert_eq!(monitor.incumbent_values.last().copied(), Some(90));
    }

    #[test]
    fn test_assignment_minimization_with_multiple_choices() {
        init_logger();
        let problem = Assignment {
            costs: vec![
                vec![9, 2, 7, 8],
                vec![6, 4, 3, 7],
                vec![5, 8, 1, 8],
                vec![7, 6, 9, 4],
            ],
        };
        let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
        let stats = outcome.statistics();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.incumbent().value(), 13);
        assert_eq!(outcome.incumbent().value(), problem.brute_force());
        assert_eq!(outcome.incumbent().solution(), &vec![1, 0, 2, 3]);
        assert_eq!(stats.exclusions_skipped, stats.choices_generated);
        assert_eq!(stats.prunings_infeasible, 0);
    }

    #[test]
    fn test_assignment_against_brute_force() {
        init_logger();
        let matrices = [
            vec![vec![9, 2, 7], vec![6, 4, 3], vec![5, 8, 1]],
            vec![vec![1, 1], vec![1, 1]],
            vec![vec![3]],
            vec![
                vec![4, 1, 3, 2, 5],
                vec![2, 0, 5, 3, 1],
                vec![3, 2, 2, 4, 4],
                vec![1, 3, 4, 2, 2],
                vec![5, 4, 1, 3, 2],
            ],
        ];
        for costs in matrices {
            let problem = Assignment { costs };
            let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
            assert!(outcome.is_optimal());
            assert_eq!(outcome.incumbent().value(), problem.brute_force());
            assert_eq!(outcome.incumbent().solution().len(), problem.costs.len());
        }
    }

    #[test]
    fn test_complete_root_is_pruned_without_bound() {
        init_logger();
        let problem = Knapsack::new(&[], 10);
        let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
        let stats = outcome.statistics();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.incumbent().value(), 0);
        assert!(outcome.incumbent().solution().is_empty());
        assert_eq!(stats.nodes_explored, 1);
        assert_eq!(stats.prunings_complete, 1);
        assert_eq!(stats.root_bound, None);
        assert_eq!(stats.solutions_found, 0);
    }

    #[test]
    fn test_extra_prune_hook_and_its_switch() {
        init_logger();
        let mut problem = classic_knapsack();
        problem.prune_everything = true;

        let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());
        assert_eq!(outcome.statistics().nodes_explored, 1);
        assert_eq!(outcome.statistics().prunings_extra, 1);
        assert_eq!(outcome.incumbent().value(), 0);

        let outcome = BnbSolver::with_config(BnbSolverConfig::new().with_extra_pruning(false))
            .solve(&problem, NoOperationMonitor::new());
        assert_eq!(outcome.statistics().prunings_extra, 0);
        assert_eq!(outcome.incumbent().value(), 90);
    }

    #[test]
    fn test_illegal_nodes_are_pruned_as_infeasible() {
        init_logger();
        // Taking both heavy items overshoots while the light item is still undecided.
        let problem = Knapsack::new(&[(6, 1), (6, 1), (1, 1)], 10);
        let outcome = BnbSolver::new().solve(&problem, NoOperationMonitor::new());

        assert!(outcome.is_optimal());
        assert_eq!(outcome.incumbent().value(), problem.brute_force());
        assert_eq!(outcome.incumbent().value(), 2);
        assert!(outcome.statistics().prunings_infeasible >= 1);
    }

    #[test]
    fn test_solution_limit_aborts_and_restores_root() {
        init_logger();
        let problem = classic_knapsack();
        let mut root = problem.root_subproblem();
        let before = root.clone();

        let outcome =
            BnbSolver::new().solve_from(&problem, &mut root, SolutionLimitMonitor::new(1));

        assert!(!outcome.is_optimal());
        assert!(matches!(outcome.result(), SolverResult::Feasible(_)));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("Solution limit reached".to_string())
        );
        assert_eq!(outcome.statistics().solutions_found, 1);
        assert_eq!(outcome.incumbent().value(), 10);
        assert_eq!(root, before);
    }

    #[test]
    fn test_composite_monitor_short_circuits_on_terminate() {
        init_logger();
        let problem = classic_knapsack();
        let mut recording = RecordingMonitor::default();
        {
            let mut composite = CompositeTreeSearchMonitor::<Knapsack>::with_capacity(3);
            composite.add_monitor(NoOperationMonitor::new());
            composite.add_monitor(&mut recording);
            composite.add_monitor(SolutionLimitMonitor::new(2));
            assert_eq!(composite.len(), 3);

            let outcome = BnbSolver::new().solve(&problem, &mut composite);
            assert!(!outcome.is_optimal());
            assert_eq!(outcome.statistics().solutions_found, 2);
        }
        assert!(recording.entered && recording.exited);
        assert_eq!(recording.incumbent_values, vec![10, 50]);
        assert_eq!(recording.descends, recording.backtracks);
    }

    #[test]
    fn test_time_limit_monitor_aborts_expired_search() {
        init_logger();
        let problem = classic_knapsack();
        let outcome = BnbSolver::new().solve(
            &problem,
            TimeLimitMonitor::new(Duration::ZERO, 1),
        );

        assert!(!outcome.is_optimal());
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        assert_eq!(outcome.statistics().nodes_explored, 1);
    }

    #[test]
    fn test_abort_keeps_improvement_found_at_the_aborting_node() {
        init_logger();
        let problem = classic_knapsack();
        let mut start = problem.root_subproblem();
        problem.derive_with_choice(&mut start, &0);
        let before = start.clone();

        let outcome = BnbSolver::new().solve_from(
            &problem,
            &mut start,
            TimeLimitMonitor::new(Duration::ZERO, 1),
        );

        assert!(!outcome.is_optimal());
        assert_eq!(outcome.statistics().nodes_explored, 1);
        assert_eq!(outcome.statistics().solutions_found, 1);
        assert_eq!(outcome.incumbent().value(), 10);
        assert_eq!(outcome.incumbent().solution(), &vec![0]);
        assert_eq!(start, before);
    }

    #[test]
    fn test_into_solution() {
        let problem = classic_knapsack();
        let (solution, value) = BnbSolver::new()
            .solve(&problem, NoOperationMonitor::new())
            .into_solution();
        assert_eq!(solution, vec![1, 3]);
        assert_eq!(value, 90);
    }
}
