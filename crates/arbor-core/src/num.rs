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


//! # Objective Values
//!
//! `ObjectiveValue` collects the integer capabilities the branch-and-bound
//! engine requires from objective values and bounds: ordering, the `Bounded`
//! extremes used as "worst possible" incumbent defaults, saturating
//! arithmetic (`PrimInt` brings `Saturating`), and a sign so that maximization
//! and minimization can be normalized against each other.
//!
//! These are usually the signed integer types `i8`, `i16`, `i32`, `i64` and
//! `isize`.

use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types usable as objective values.
pub trait ObjectiveValue:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + std::hash::Hash
{
}

impl<T> ObjectiveValue for T where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display + std::hash::Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worst_for_maximization<T: ObjectiveValue>() -> T {
        T::min_value()
    }

    fn saturating_step<T: ObjectiveValue>(value: T) -> T {
        value.saturating_add(T::one())
    }

    #[test]
    fn test_signed_integers_are_objective_values() {
        assert_eq!(worst_for_maximization::<i64>(), i64::MIN);
        assert_eq!(worst_for_maximization::<i32>(), i32::MIN);
        assert_eq!(worst_for_maximization::<isize>(), isize::MIN);
    }

    #[test]
    fn test_saturating_arithmetic_is_available() {
        assert_eq!(saturating_step(i64::MAX), i64::MAX);
        assert_eq!(saturating_step(41i32), 42);
    }
}
