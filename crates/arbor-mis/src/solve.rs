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


//! Entry points.
//!
//! `solve` is the one-call path: default options, default solver
//! configuration and no monitoring. `solve_with` exposes every knob and
//! returns the full outcome with statistics. `max_clique` reduces maximum
//! clique to maximum independent set on the complement graph.

use crate::{
    problem::{MaxIndependentSet, MisOptions},
    subproblem::IndependentSet,
};
use arbor_bnb::{
    bnb::BnbSolver, config::BnbSolverConfig, monitor::no_op::NoOperationMonitor,
    monitor::tree_search_monitor::TreeSearchMonitor, result::BnbSolverOutcome,
};
use arbor_graph::{graph::Graph, simple::SimpleGraph};
use log::debug;

/// Outcome of a maximum independent set search.
pub type MisOutcome = BnbSolverOutcome<IndependentSet, i64>;

/// Returns a maximum independent set of `graph`.
pub fn solve<G>(graph: &G) -> IndependentSet
where
    G: Graph + ?Sized,
{
    let (solution, _) = solve_with(
        graph,
        MisOptions::default(),
        BnbSolverConfig::default(),
        NoOperationMonitor::new(),
    )
    .into_solution();
    solution
}

/// Searches for a maximum independent set of `graph` with explicit options,
/// solver configuration and monitor.
///
/// Unless the monitor aborts the search, the reported set is optimal.
pub fn solve_with<'g, G, M>(
    graph: &'g G,
    options: MisOptions,
    config: BnbSolverConfig,
    monitor: M,
) -> MisOutcome
where
    G: Graph + ?Sized,
    M: TreeSearchMonitor<MaxIndependentSet<'g, G>>,
{
    debug!(
        "Solving maximum independent set on {} vertices with {}",
        graph.num_vertices(),
        options
    );
    let problem = MaxIndependentSet::with_options(graph, options);
    BnbSolver::with_config(config).solve(&problem, monitor)
}

/// Returns a maximum clique of `graph`.
///
/// The result is a maximum independent set of the complement graph, so every
/// two of its vertices are adjacent in `graph`.
pub fn max_clique(graph: &SimpleGraph) -> IndependentSet {
    let complement = graph.complement();
    solve(&complement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_bnb::result::TerminationReason;
    use arbor_graph::{index::VertexIndex, loading::GraphLoader};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn is_clique(graph: &SimpleGraph, set: &IndependentSet) -> bool {
        let members = set.to_vec();
        members.iter().enumerate().all(|(i, &u)| {
            members[i + 1..]
                .iter()
                .all(|&v| graph.is_adjacent(u, v))
        })
    }

    #[test]
    fn test_solve_small_scenarios() {
        init_logger();
        assert_eq!(solve(&SimpleGraph::empty(0)).len(), 0);
        assert_eq!(solve(&SimpleGraph::empty(2)).len(), 2);
        assert_eq!(solve(&SimpleGraph::from_edges(2, &[(0, 1)])).len(), 1);
        assert_eq!(solve(&SimpleGraph::cycle(5)).len(), 2);
        for n in 1..=6 {
            assert_eq!(solve(&SimpleGraph::complete(n)).len(), 1, "K_{}", n);
        }
    }

    #[test]
    fn test_solve_with_reports_optimal_outcome() {
        init_logger();
        let g = SimpleGraph::cycle(7);
        let outcome = solve_with(
            &g,
            MisOptions::default(),
            BnbSolverConfig::default(),
            NoOperationMonitor::new(),
        );

        assert!(outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.incumbent().value(), 3);
        assert!(outcome.incumbent().solution().is_independent_in(&g));
        assert_eq!(outcome.statistics().root_bound, Some(5));
    }

    #[test]
    fn test_solve_accepts_trait_objects() {
        init_logger();
        let g = SimpleGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let dyn_graph: &dyn Graph = &g;
        let set = solve(dyn_graph);
        assert_eq!(set.len(), 2);
        assert!(set.is_independent_in(dyn_graph));
    }

    #[test]
    fn test_max_clique() {
        init_logger();
        for n in 1..=6 {
            let clique = max_clique(&SimpleGraph::complete(n));
            assert_eq!(clique.len(), n, "K_{}", n);
        }
        assert_eq!(max_clique(&SimpleGraph::cycle(5)).len(), 2);
        assert_eq!(max_clique(&SimpleGraph::empty(3)).len(), 1);
        assert!(max_clique(&SimpleGraph::empty(0)).is_empty());
    }

    #[test]
    fn test_max_clique_finds_embedded_clique() {
        init_logger();
        // K4 on {1, 3, 4, 6} plus a sparse tail.
        let g = SimpleGraph::from_edges(
            8,
            &[
                (1, 3),
                (1, 4),
                (1, 6),
                (3, 4),
                (3, 6),
                (4, 6),
                (0, 1),
                (2, 3),
                (5, 6),
                (6, 7),
                (0, 2),
            ],
        );
        let clique = max_clique(&g);
        assert_eq!(
            clique.to_vec(),
            [1, 3, 4, 6].map(VertexIndex::new).to_vec()
        );
        assert!(is_clique(&g, &clique));
    }

    #[test]
    fn test_solve_loaded_dimacs_instance() {
        init_logger();
        // Petersen graph: independence number 4, clique number 2.
        let input = "\
c petersen graph
p edge 10 15
e 1 2
e 2 3
e 3 4
e 4 5
e 5 1
e 1 6
e 2 7
e 3 8
e 4 9
e 5 10
e 6 8
e 8 10
e 10 7
e 7 9
e 9 6
";
        let g = GraphLoader::new()
            .strict_edge_count(true)
            .from_str(input)
            .expect("valid instance");

        let set = solve(&g);
        assert_eq!(set.len(), 4);
        assert!(set.is_independent_in(&g));
        assert_eq!(max_clique(&g).len(), 2);
    }
}
