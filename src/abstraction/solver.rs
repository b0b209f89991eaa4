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

//! This module defines the `Solver` trait.

use crate::{Completion, Price, Solution};

/// This is the solver abstraction. It is implemented by the structures that
/// either solve a knapsack problem exactly (then the best value and the upper
/// bound coincide) or that derive a bound on its optimal value (and possibly
/// stumble upon a feasible solution while doing so).
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted maximization. Such a `Completion` is marked **exact**
    /// when the returned `best_value` was proved optimal.
    ///
    /// When the completion is not exact, the `best_value` is the value of
    /// the best feasible solution that was encountered (if any). The
    /// `best_upper_bound` then tells how far from optimality it might be.
    fn maximize(&mut self) -> Completion;
    /// This method returns the value of the objective function for the best
    /// feasible solution that has been found. It returns `None` when no
    /// such solution is known.
    fn best_value(&self) -> Option<Price>;
    /// This method returns the best feasible solution that has been found.
    fn best_solution(&self) -> Option<Solution>;

    /// Returns the best lower bound that has been identified so far.
    /// In case where no solution has been found, it returns -inf.
    fn best_lower_bound(&self) -> Price {
        self.best_value().unwrap_or(f64::NEG_INFINITY)
    }
    /// Returns the tightest upper bound that can be guaranteed so far.
    /// In case where no upper bound has been computed, it returns +inf.
    fn best_upper_bound(&self) -> Price;

    /// Computes the optimality gap
    fn gap(&self) -> f64 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        if !ub.is_finite() || !lb.is_finite() {
            1.0
        } else {
            let aub = ub.abs();
            let alb = lb.abs();
            let u = aub.max(alb);
            let l = aub.min(alb);

            if u == 0.0 { 0.0 } else { (u - l) / u }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Completion, Price, Solution, Solver};

    struct DummySolver {
        lb: Option<Price>,
        ub: Price,
    }
    impl Solver for DummySolver {
        fn maximize(&mut self) -> Completion {
            Completion { is_exact: false, best_value: self.lb }
        }
        fn best_value(&self) -> Option<Price> {
            self.lb
        }
        fn best_solution(&self) -> Option<Solution> {
            None
        }
        fn best_upper_bound(&self) -> Price {
            self.ub
        }
    }

    #[test]
    fn by_default_the_lower_bound_is_the_best_value() {
        let solver = DummySolver { lb: Some(12.0), ub: 20.0 };
        assert_eq!(12.0, solver.best_lower_bound());
    }
    #[test]
    fn by_default_the_lower_bound_is_minus_infinity_without_solution() {
        let solver = DummySolver { lb: None, ub: 20.0 };
        assert_eq!(f64::NEG_INFINITY, solver.best_lower_bound());
    }
    #[test]
    fn gap_is_one_when_a_bound_is_missing() {
        let solver = DummySolver { lb: None, ub: 20.0 };
        assert_eq!(1.0, solver.gap());
        let solver = DummySolver { lb: Some(3.0), ub: f64::INFINITY };
        assert_eq!(1.0, solver.gap());
    }
    #[test]
    fn gap_is_the_relative_distance_between_bounds() {
        let solver = DummySolver { lb: Some(15.0), ub: 20.0 };
        assert!((solver.gap() - 0.25).abs() < 1e-12);
    }
    #[test]
    fn gap_is_zero_when_bounds_coincide() {
        let solver = DummySolver { lb: Some(0.0), ub: 0.0 };
        assert_eq!(0.0, solver.gap());
        let solver = DummySolver { lb: Some(7.0), ub: 7.0 };
        assert_eq!(0.0, solver.gap());
    }
}
