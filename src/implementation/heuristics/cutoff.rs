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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to stop the subgradient optimization of a Lagrangian solver before
//! it has gone through all of its iterations.

use std::cell::Cell;

use crate::{Cutoff, Progress};

/// _This is the default cutoff heuristic._ It imposes that the solver goes
/// through all of its configured iterations before it stops.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self, _: &Progress) -> bool {false}
}

/// This cutoff stops the optimization as soon as the subgradient becomes
/// small enough. A null subgradient means the relaxed solution saturates
/// every relaxed constraint: the multipliers would not move anymore.
///
/// # Example
/// ```
/// # use frontier_kp::*;
/// let problem = MultiKnapsack::new(vec![
///     MultiItem::new(vec![2, 1], 5.0),
///     MultiItem::new(vec![3, 1], 2.0),
/// ], vec![2, 2]).unwrap();
/// let cutoff = SubgradientTolerance(1e-6);
/// let mut solver = LagrangianSolver::custom(&problem, LagrangianConfig::default(), &cutoff);
/// solver.maximize();
/// // the very first relaxed solution saturates the relaxed constraint
/// assert_eq!(1, solver.bound().unwrap().iterations);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct SubgradientTolerance(pub f64);
impl Cutoff for SubgradientTolerance {
    fn must_stop(&self, progress: &Progress) -> bool {
        progress.subgradient_norm <= self.0
    }
}

/// This cutoff stops the optimization once the dual value has not improved
/// (decreased) during `patience` consecutive iterations.
#[derive(Debug, Clone)]
pub struct Stagnation {
    patience: usize,
    best: Cell<f64>,
    since: Cell<usize>,
}
impl Stagnation {
    pub fn new(patience: usize) -> Self {
        Stagnation { patience, best: Cell::new(f64::INFINITY), since: Cell::new(0) }
    }
}
impl Cutoff for Stagnation {
    fn must_stop(&self, progress: &Progress) -> bool {
        if progress.dual_value < self.best.get() {
            self.best.set(progress.dual_value);
            self.since.set(0);
        } else {
            self.since.set(self.since.get() + 1);
        }
        self.since.get() >= self.patience
    }
    fn reset(&self) {
        self.best.set(f64::INFINITY);
        self.since.set(0);
    }
}
