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


//! Optimization direction.
//!
//! The engine normalizes every comparison into "prefer the larger scaled
//! value", where the scale is `+1` for maximization and `-1` for minimization.
//! The comparisons below are written per direction instead of multiplying by
//! the scale so that sentinel incumbents such as `i64::MIN` never overflow.

use arbor_core::num::ObjectiveValue;

/// The direction of optimization of a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectiveSense {
    /// Larger objective values are better.
    Maximize,
    /// Smaller objective values are better.
    Minimize,
}

impl ObjectiveSense {
    /// Returns the scale factor, `+1` for maximization and `-1` for minimization.
    #[inline]
    pub fn scale<V>(self) -> V
    where
        V: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Maximize => V::one(),
            ObjectiveSense::Minimize => -V::one(),
        }
    }

    /// Returns `true` iff `candidate` is strictly better than `incumbent`,
    /// i.e. `scale * candidate > scale * incumbent`. Ties are not better.
    #[inline]
    pub fn is_better<V>(self, candidate: V, incumbent: V) -> bool
    where
        V: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Maximize => candidate > incumbent,
            ObjectiveSense::Minimize => candidate < incumbent,
        }
    }

    /// Returns `true` iff an optimistic `bound` cannot beat `incumbent`,
    /// i.e. `scale * bound < scale * incumbent`.
    ///
    /// A bound equal to the incumbent is not dominated: the subtree may still
    /// contain an alternative optimum, and the engine keeps exploring it.
    #[inline]
    pub fn is_dominated<V>(self, bound: V, incumbent: V) -> bool
    where
        V: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Maximize => bound < incumbent,
            ObjectiveSense::Minimize => bound > incumbent,
        }
    }

    /// Returns the worst representable value for this direction, a convenient
    /// "no solution yet" incumbent value.
    #[inline]
    pub fn worst<V>(self) -> V
    where
        V: ObjectiveValue,
    {
        match self {
            ObjectiveSense::Maximize => V::min_value(),
            ObjectiveSense::Minimize => V::max_value(),
        }
    }
}

impl std::fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveSense::Maximize => write!(f, "Maximize"),
            ObjectiveSense::Minimize => write!(f, "Minimize"),
        }
    }
}
