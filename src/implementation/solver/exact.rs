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

//! This module provides the implementation of the exact solver for the single
//! constraint knapsack problem. It develops the frontiers of all prefixes of
//! the items and backtracks from the best outcome of the last one. Its running
//! time is bounded by the number of non dominated outcomes rather than by the
//! capacity of the sack; which is why it never allocates anything whose size
//! depends on the capacity.

use log::debug;

use crate::{Completion, FrontierSequence, Knapsack, Price, Solution, Solver};

/// The exact solver for the 0/1 knapsack problem.
///
/// # Example
/// ```
/// # use frontier_kp::*;
/// let problem = Knapsack::new(vec![
///     Item::new(2, 3.0),
///     Item::new(3, 4.0),
///     Item::new(4, 5.0),
///     Item::new(5, 6.0),
/// ], 5).unwrap();
/// let mut solver = FrontierSolver::new(&problem);
/// let outcome = solver.maximize();
/// assert!(outcome.is_exact);
/// assert_eq!(Some(7.0), outcome.best_value);
///
/// let solution = solver.best_solution().unwrap();
/// assert_eq!(vec![0, 1], solution.selected().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct FrontierSolver<'a> {
    /// A reference to the problem being solved
    problem: &'a Knapsack,
    /// If set, this keeps the info about the optimal solution.
    best_sol: Option<Solution>,
}

impl<'a> FrontierSolver<'a> {
    pub fn new(problem: &'a Knapsack) -> Self {
        FrontierSolver { problem, best_sol: None }
    }

    /// Solves the given problem to optimality. The frontiers that were
    /// developed in the process are released before this function returns.
    pub fn solve(problem: &Knapsack) -> Solution {
        let frontiers = FrontierSequence::compile(problem);
        let best = *frontiers.best();
        let decisions = frontiers.backtrack();

        debug!("{} items, capacity {}, peak frontier width {}",
            problem.nb_items(), problem.capacity(), frontiers.peak_width());

        Solution { decisions, value: best.price, weight: best.weight }
    }
}

impl Solver for FrontierSolver<'_> {
    fn maximize(&mut self) -> Completion {
        let solution = Self::solve(self.problem);
        let best_value = Some(solution.value);
        self.best_sol = Some(solution);

        Completion { is_exact: true, best_value }
    }
    /// Returns the value of the optimal solution (once `maximize` was called)
    fn best_value(&self) -> Option<Price> {
        self.best_sol.as_ref().map(|sol| sol.value)
    }
    /// Returns the optimal solution (once `maximize` was called)
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
    fn best_upper_bound(&self) -> Price {
        self.best_value().unwrap_or(f64::INFINITY)
    }
}
