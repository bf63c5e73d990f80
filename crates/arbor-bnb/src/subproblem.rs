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


//! The subproblem contract.
//!
//! A subproblem is one node of the search tree: a view of the remaining
//! instance, the partial solution built along the path from the root, the
//! objective value of that partial solution, and the auxiliary data needed
//! to undo the transition that produced the node.
//!
//! The engine owns exactly one subproblem value per search and mutates it in
//! place through the problem's transitions; "child" and "parent" are states
//! of the same value separated by a transition and its restoration. Because
//! the live partial solution keeps changing, the engine only ever retains it
//! through [`Subproblem::clone_sol`].

use arbor_core::num::ObjectiveValue;

/// One node of a branch-and-bound search tree.
///
/// Accessors must be free of side effects.
///
/// Invariant: `partial_sol_val()` equals the problem's objective function
/// applied to `partial_sol()` whenever the engine inspects the subproblem.
pub trait Subproblem {
    /// The problem-defined view of the remaining search space.
    type Instance: ?Sized;
    /// The representation of a (partial) solution.
    type Solution;
    /// The objective value type.
    type Value: ObjectiveValue;
    /// The undo record of the transition that produced this node.
    type Aux: ?Sized;

    /// Returns the view of the remaining search space.
    fn instance(&self) -> &Self::Instance;

    /// Returns the partial solution built so far.
    fn partial_sol(&self) -> &Self::Solution;

    /// Returns the objective value of the partial solution.
    fn partial_sol_val(&self) -> Self::Value;

    /// Returns the undo record of the transition that produced this node.
    fn aux(&self) -> &Self::Aux;

    /// Returns a snapshot of the partial solution that stays valid after the
    /// live partial solution is mutated again.
    fn clone_sol(&self) -> Self::Solution;
}
