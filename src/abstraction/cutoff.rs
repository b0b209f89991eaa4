// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the `Cutoff` heuristic which is used to impose an
//! early stopping criterion on the subgradient optimization of the
//! Lagrangian multipliers.

/// A snapshot of the subgradient optimization, taken at the end of one
/// iteration (once the multipliers have been updated).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Progress {
    /// The (0-based) index of the iteration which just completed
    pub iteration: usize,
    /// The value of the Lagrangian dual at the multipliers that were used
    /// during this iteration
    pub dual_value: f64,
    /// The euclidean norm of the subgradient computed during this iteration
    pub subgradient_norm: f64,
}

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop improving the multipliers before the configured number of
/// iterations is reached.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the optimization must stop.
    fn must_stop(&self, progress: &Progress) -> bool;
    /// Forgets whatever was observed during a previous optimization. This is
    /// called at the start of each run.
    fn reset(&self) {}
}
