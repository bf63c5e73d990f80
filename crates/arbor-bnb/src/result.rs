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


//! Search outcomes.
//!
//! A search always ends with an incumbent: the problem's initial incumbent is
//! a valid (if poor) answer. What differs is whether the search proved it
//! optimal by exhausting the tree, or stopped early because a monitor asked
//! it to.

use crate::{incumbent::Incumbent, stats::BnbSolverStatistics};

/// The incumbent reported by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<S, V> {
    /// The search space was exhausted; no better solution exists.
    Optimal(Incumbent<S, V>),
    /// The search was aborted; this is the best solution found so far.
    Feasible(Incumbent<S, V>),
}

impl<S, V> SolverResult<S, V> {
    /// Returns the contained incumbent.
    #[inline]
    pub fn incumbent(&self) -> &Incumbent<S, V> {
        match self {
            SolverResult::Optimal(incumbent) | SolverResult::Feasible(incumbent) => incumbent,
        }
    }

    /// Consumes the result and returns the contained incumbent.
    #[inline]
    pub fn into_incumbent(self) -> Incumbent<S, V> {
        match self {
            SolverResult::Optimal(incumbent) | SolverResult::Feasible(incumbent) => incumbent,
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The whole tree was explored or pruned.
    OptimalityProven,
    /// A monitor requested termination with the given message.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "OptimalityProven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted({})", reason),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<S, V> {
    result: SolverResult<S, V>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics<V>,
}

impl<S, V> BnbSolverOutcome<S, V>
where
    V: Copy,
{
    #[inline]
    pub fn optimal(incumbent: Incumbent<S, V>, statistics: BnbSolverStatistics<V>) -> Self {
        Self {
            result: SolverResult::Optimal(incumbent),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        incumbent: Incumbent<S, V>,
        reason: R,
        statistics: BnbSolverStatistics<V>,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(incumbent),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<S, V> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics<V> {
        &self.statistics
    }

    /// Returns the reported incumbent, optimal or not.
    #[inline]
    pub fn incumbent(&self) -> &Incumbent<S, V> {
        self.result.incumbent()
    }

    /// Returns `true` iff the search proved the incumbent optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    /// Consumes the outcome and returns the reported solution and its value.
    #[inline]
    pub fn into_solution(self) -> (S, V) {
        self.result.into_incumbent().into_parts()
    }
}
