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


//! Solver configuration.
//!
//! The switches only disable pruning rules; they never change the optimal
//! value the search reports, only how much of the tree is visited. Turning
//! bound pruning off is mainly useful for validating a bound against an
//! exhaustive search.

/// Configuration of the branch-and-bound solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BnbSolverConfig {
    /// Prune subproblems whose bound is dominated by the incumbent.
    pub bound_pruning: bool,
    /// Consult the problem's `extra_prune` hook.
    pub extra_pruning: bool,
}

impl Default for BnbSolverConfig {
    fn default() -> Self {
        Self {
            bound_pruning: true,
            extra_pruning: true,
        }
    }
}

impl BnbSolverConfig {
    /// Creates the default configuration with every pruning rule enabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables bound-based pruning.
    #[inline]
    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }

    /// Enables or disables the problem-specific pruning hook.
    #[inline]
    pub fn with_extra_pruning(mut self, enabled: bool) -> Self {
        self.extra_pruning = enabled;
        self
    }
}

impl std::fmt::Display for BnbSolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BnbSolverConfig(bound_pruning: {}, extra_pruning: {})",
            self.bound_pruning, self.extra_pruning
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_pruning() {
        let config = BnbSolverConfig::default();
        assert!(config.bound_pruning);
        assert!(config.extra_pruning);
        assert_eq!(config, BnbSolverConfig::new());
    }

    #[test]
    fn test_builder_methods() {
        let config = BnbSolverConfig::new()
            .with_bound_pruning(false)
            .with_extra_pruning(false);
        assert!(!config.bound_pruning);
        assert!(!config.extra_pruning);
        assert_eq!(
            format!("{}", config),
            "BnbSolverConfig(bound_pruning: false, extra_pruning: false)"
        );
    }
}
