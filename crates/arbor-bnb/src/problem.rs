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


//! The problem-specific callback set driven by the engine.
//!
//! A problem instantiation implements [`BranchAndBound`]; the engine in
//! [`crate::bnb`] is generic over it and owns all search logic. The
//! instantiation only answers questions about a subproblem (bound, legality,
//! completeness, next choices) and performs the in-place transitions and
//! their exact inverses.
//!
//! Correctness contract
//! - `bound` is optimistic: for maximization it never undercuts the best
//!   value reachable from the subproblem, for minimization it never exceeds
//!   it. A bound that is too tight does not crash anything, it silently
//!   prunes optimal solutions away; the engine cannot detect this.
//! - `derive_with_choice` / `derive_without_choice` followed by
//!   `restore_subproblem` with the same choice leaves the subproblem
//!   observably identical to its state before the transition. The engine
//!   calls these in strict LIFO order.
//! - `is_legal` prevents expansion of illegal nodes but does not keep them
//!   from becoming the incumbent; a problem whose transitions can produce
//!   illegal partial solutions must give them an objective value that never
//!   beats a legal one.

use crate::{sense::ObjectiveSense, subproblem::Subproblem};
use smallvec::SmallVec;

/// The solution type of a problem.
pub type SolutionOf<P> = <<P as BranchAndBound>::Subproblem as Subproblem>::Solution;

/// The objective value type of a problem.
pub type ValueOf<P> = <<P as BranchAndBound>::Subproblem as Subproblem>::Value;

/// An ordered, non-empty sequence of choices to branch on.
///
/// A single choice is stored inline without allocating.
pub type Choices<C> = SmallVec<[C; 1]>;

/// Result of deriving the exclusion branch of a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Derivation {
    /// The subproblem was transformed into the child and must be restored.
    Derived,
    /// Exclusion is not a meaningful branch for this choice; the subproblem
    /// was left untouched and the branch is skipped.
    NotApplicable,
}

impl std::fmt::Display for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Derivation::Derived => write!(f, "Derived"),
            Derivation::NotApplicable => write!(f, "NotApplicable"),
        }
    }
}

/// Problem-specific callbacks for the branch-and-bound engine.
pub trait BranchAndBound {
    /// The search-tree node representation.
    type Subproblem: Subproblem;
    /// A single branching decision.
    type Choice: Clone + std::fmt::Debug;

    /// Returns the name of the problem, used in logs.
    fn name(&self) -> &str;

    /// Returns the direction of optimization.
    fn sense(&self) -> ObjectiveSense;

    /// Builds the root subproblem from the problem instance.
    fn root_subproblem(&self) -> Self::Subproblem;

    /// Returns the incumbent the search starts from, e.g. an empty solution
    /// with the worst possible value.
    fn initial_incumbent(&self) -> (SolutionOf<Self>, ValueOf<Self>);

    /// Returns an optimistic estimate of the best value reachable from
    /// `subproblem`. See the module documentation for the contract.
    fn bound(&self, subproblem: &Self::Subproblem) -> ValueOf<Self>;

    /// Returns `true` iff the partial solution is feasible. Problems that keep
    /// legality implicitly through their transitions return `true`.
    fn is_legal(&self, subproblem: &Self::Subproblem) -> bool;

    /// Returns `true` iff no choice can extend the partial solution further.
    fn is_complete(&self, subproblem: &Self::Subproblem) -> bool;

    /// Additional problem-specific pruning against the current incumbent.
    /// Return `false` if unused.
    fn extra_prune(
        &self,
        subproblem: &Self::Subproblem,
        best_sol: &SolutionOf<Self>,
        best_val: ValueOf<Self>,
    ) -> bool;

    /// Returns the choices to branch on next, in exploration order.
    ///
    /// The engine only calls this on subproblems that are not complete; the
    /// returned sequence must not be empty.
    fn next_choices(&self, subproblem: &Self::Subproblem) -> Choices<Self::Choice>;

    /// Transforms `subproblem` in place into the child in which `choice` is taken.
    fn derive_with_choice(&self, subproblem: &mut Self::Subproblem, choice: &Self::Choice);

    /// Transforms `subproblem` in place into the child in which `choice` is
    /// excluded, or returns [`Derivation::NotApplicable`] without touching it.
    fn derive_without_choice(
        &self,
        subproblem: &mut Self::Subproblem,
        choice: &Self::Choice,
    ) -> Derivation;

    /// Undoes the last transition, which was derived from `choice`.
    fn restore_subproblem(&self, subproblem: &mut Self::Subproblem, choice: &Self::Choice);

    /// Returns `true` iff the partial solution of `subproblem` is strictly
    /// better than `best_val`.
    #[inline]
    fn is_better(&self, subproblem: &Self::Subproblem, best_val: ValueOf<Self>) -> bool {
        self.sense()
            .is_better(subproblem.partial_sol_val(), best_val)
    }
}
