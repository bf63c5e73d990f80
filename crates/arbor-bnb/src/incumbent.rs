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


//! The best solution found so far.
//!
//! `Incumbent<S, V>` pairs a solution snapshot with its objective value. The
//! engine starts from the problem's initial incumbent and replaces it only
//! with strictly better partial solutions, so the recorded value changes
//! monotonically in the direction of optimization.

/// The best known solution and its objective value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Incumbent<S, V> {
    solution: S,
    value: V,
}

impl<S, V> Incumbent<S, V>
where
    V: Copy,
{
    /// Creates a new incumbent.
    #[inline]
    pub fn new(solution: S, value: V) -> Self {
        Self { solution, value }
    }

    /// Returns the solution.
    #[inline]
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Returns the objective value of the solution.
    #[inline]
    pub fn value(&self) -> V {
        self.value
    }

    /// Installs a new solution and value, returning the previous solution.
    #[inline]
    pub fn replace(&mut self, solution: S, value: V) -> S {
        self.value = value;
        std::mem::replace(&mut self.solution, solution)
    }

    /// Consumes the incumbent and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (S, V) {
        (self.solution, self.value)
    }
}

impl<S, V> std::fmt::Display for Incumbent<S, V>
where
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(value: {})", self.value)
    }
}
