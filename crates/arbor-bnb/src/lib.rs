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


//! Arbor-BnB: a generic branch-and-bound engine
//!
//! High-level crate that implements a deterministic, depth-first
//! branch-and-bound search over any problem that can describe its subproblems
//! and transitions. The engine owns the search; a problem only answers
//! questions about a subproblem and performs reversible in-place transitions.
//!
//! Core flow
//! - Implement `subproblem::Subproblem` for the node representation.
//! - Implement `problem::BranchAndBound` (bound, legality, completeness,
//!   choices, transitions and their restoration).
//! - Optionally pick a `config::BnbSolverConfig` and monitors.
//! - Run `bnb::BnbSolver::solve`.
//!
//! Design highlights
//! - Tight inner loop: one subproblem is mutated in place and restored after
//!   each child, so no node is ever copied. `trail::UndoTrail` is the helper
//!   problems use to record what a transition changed.
//! - Monitors observe every event and may abort the search; an aborted search
//!   still restores the subproblem and reports the best incumbent found.
//! - Deterministic given a deterministic problem.
//!
//! Assumptions and guarantees
//! - Bounds must be optimistic; an optimistic bound yields a proven optimum.
//! - Restoration must exactly undo the transition it follows.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `problem`: the problem callback trait, choice sequences and derivations.
//! - `subproblem`: the search-tree node contract.
//! - `sense`: maximization and minimization.
//! - `trail`: frame-structured undo log for transitions.
//! - `monitor`: tree-search monitors (log, composite, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.
//! - `config`: pruning switches.
//! - `incumbent`: the best known solution.

pub mod bnb;
pub mod config;
pub mod incumbent;
pub mod monitor;
pub mod problem;
pub mod result;
pub mod sense;
pub mod stats;
pub mod subproblem;
pub mod trail;
