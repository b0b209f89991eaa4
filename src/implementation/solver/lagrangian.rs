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

//! This module provides the implementation of the approximate solver for the
//! multidimensional knapsack problem. It relaxes all constraints but the last
//! one: these are moved into the objective function where each unit of weight
//! they consume is penalized by some Lagrangian multiplier. The resulting
//! single constraint problem is solved exactly with the frontier solver, and
//! the multipliers are then adjusted with a subgradient step.
//!
//! The outcome of this process is an upper bound on the optimal value of the
//! multidimensional problem. Whenever the relaxed selection of some iteration
//! happens to respect all of the constraints, it is also kept as a feasible
//! solution.

use derive_builder::Builder;
use log::{debug, info, trace};

use crate::{Completion, Cutoff, FrontierSolver, MultiKnapsack, NoCutoff, Price, Progress, Solution, Solver};

/// The number of subgradient iterations performed by default
pub const DEFAULT_ITERATIONS: usize = 100_000;
/// The subgradient norm below which the multipliers are not updated anymore
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
/// The value initially given to each multiplier
pub const DEFAULT_INITIAL_MULTIPLIER: f64 = 1.0;

/// Two values whose difference is below this threshold are considered equal
/// when deciding whether a feasible solution closes the gap.
const EPSILON: f64 = 1e-9;

/// This is how you configure the subgradient optimization of a
/// `LagrangianSolver`.
///
/// # Example
/// ```
/// # use frontier_kp::*;
/// let config = LagrangianConfigBuilder::default()
///     .iterations(500_usize)
///     .build()
///     .unwrap();
/// assert_eq!(500, config.iterations);
/// assert_eq!(1e-4, config.tolerance);
/// assert_eq!(1.0,  config.initial_multiplier);
///
/// let invalid = LagrangianConfigBuilder::default()
///     .tolerance(-1.0)
///     .build();
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct LagrangianConfig {
    /// The maximum number of subgradient iterations. The optimization only
    /// stops earlier when the cutoff says so.
    #[builder(default = "DEFAULT_ITERATIONS")]
    pub iterations: usize,
    /// The multipliers are left untouched during an iteration whose
    /// subgradient norm does not exceed this value.
    #[builder(default = "DEFAULT_TOLERANCE")]
    pub tolerance: f64,
    /// The value of all the multipliers before the first iteration
    #[builder(default = "DEFAULT_INITIAL_MULTIPLIER")]
    pub initial_multiplier: f64,
}

impl LagrangianConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.iterations {
            return Err("at least one iteration is required".to_string());
        }
        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(format!("invalid tolerance {tolerance}"));
            }
        }
        if let Some(initial) = self.initial_multiplier {
            if !initial.is_finite() || initial < 0.0 {
                return Err(format!("invalid initial multiplier {initial}"));
            }
        }
        Ok(())
    }
}

impl Default for LagrangianConfig {
    fn default() -> Self {
        LagrangianConfig {
            iterations: DEFAULT_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            initial_multiplier: DEFAULT_INITIAL_MULTIPLIER,
        }
    }
}

/// What the subgradient optimization has to tell about a multidimensional
/// knapsack instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangianBound {
    /// The total reduced price of the items selected during the last
    /// iteration, plus the capacity of each relaxed constraint weighted by
    /// its final multiplier.
    pub bound: f64,
    /// The smallest value of the Lagrangian dual that has been observed over
    /// all iterations. Each of these values is an upper bound on the optimal
    /// value of the problem.
    pub best_bound: f64,
    /// The final value of the multipliers (one per relaxed constraint)
    pub multipliers: Vec<f64>,
    /// The number of iterations that were actually performed
    pub iterations: usize,
    /// The norm of the subgradient computed during the last iteration
    pub subgradient_norm: f64,
}

/// The approximate solver for the multidimensional knapsack problem.
///
/// # Example
/// ```
/// # use frontier_kp::*;
/// let problem = MultiKnapsack::new(vec![
///     MultiItem::new(vec![3, 2], 10.0),
///     MultiItem::new(vec![2, 3], 8.0),
///     MultiItem::new(vec![2, 2], 7.0),
/// ], vec![4, 4]).unwrap();
///
/// let config = LagrangianConfigBuilder::default().iterations(200_usize).build().unwrap();
/// let mut solver = LagrangianSolver::custom(&problem, config, &NoCutoff);
/// solver.maximize();
///
/// let outcome = solver.bound().unwrap();
/// assert_eq!(200, outcome.iterations);
/// assert_eq!(1, outcome.multipliers.len());
/// // no two items fit together: the optimum is 10
/// assert!(outcome.best_bound >= 10.0 - 1e-9);
/// ```
pub struct LagrangianSolver<'a> {
    /// A reference to the problem being solved
    problem: &'a MultiKnapsack,
    /// How the subgradient optimization is parameterized
    config: LagrangianConfig,
    /// The early stopping criterion
    cutoff: &'a dyn Cutoff,
    /// The current value of the multipliers
    multipliers: Vec<f64>,
    /// The outcome of the last call to `maximize`
    outcome: Option<LagrangianBound>,
    /// The best feasible solution stumbled upon while optimizing
    best_sol: Option<Solution>,
}

impl<'a> LagrangianSolver<'a> {
    /// Creates a solver with the default configuration, which goes through
    /// all of its iterations.
    pub fn new(problem: &'a MultiKnapsack) -> Self {
        Self::custom(problem, LagrangianConfig::default(), &NoCutoff)
    }
    pub fn custom(problem: &'a MultiKnapsack, config: LagrangianConfig, cutoff: &'a dyn Cutoff) -> Self {
        let multipliers = vec![config.initial_multiplier; problem.nb_relaxed()];
        LagrangianSolver {
            problem,
            config,
            cutoff,
            multipliers,
            outcome: None,
            best_sol: None,
        }
    }

    /// The current value of the multipliers
    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }
    /// The outcome of the last optimization (once `maximize` was called)
    pub fn bound(&self) -> Option<&LagrangianBound> {
        self.outcome.as_ref()
    }

    /// Returns the penalty of using the full capacity of each relaxed
    /// constraint under the current multipliers.
    fn capacity_term(&self) -> f64 {
        self.multipliers.iter()
            .zip(self.problem.capacities())
            .map(|(lambda, c)| lambda * *c as f64)
            .sum()
    }

    /// Moves the multipliers one step along the (normalized) subgradient.
    /// The step size diminishes with the iteration count. The multipliers
    /// are clamped at zero in any case.
    fn update_multipliers(&mut self, slack: &[f64], norm: f64, iteration: usize) {
        if norm > self.config.tolerance {
            let step = (iteration + 1) as f64;
            for (lambda, d) in self.multipliers.iter_mut().zip(slack) {
                *lambda -= (d / norm) / step;
            }
        }
        for lambda in self.multipliers.iter_mut() {
            *lambda = lambda.max(0.0);
        }
    }

    /// Keeps the relaxed selection if it is feasible and better than the
    /// best known solution.
    fn offer(&mut self, relaxed: &Solution) {
        if !self.problem.is_feasible(&relaxed.decisions) {
            return;
        }
        let value = self.problem.value(&relaxed.decisions);
        if self.best_sol.as_ref().map_or(true, |best| value > best.value) {
            trace!("feasible relaxed solution of value {value}");
            self.best_sol = Some(Solution {
                decisions: relaxed.decisions.clone(),
                value,
                weight: relaxed.weight,
            });
        }
    }
}

impl Solver for LagrangianSolver<'_> {
    fn maximize(&mut self) -> Completion {
        self.multipliers = vec![self.config.initial_multiplier; self.problem.nb_relaxed()];
        self.best_sol = None;
        self.cutoff.reset();

        debug!("lagrangian relaxation of {} items over {} dimensions",
            self.problem.nb_items(), self.problem.nb_dimensions());

        let iterations = self.config.iterations.max(1);
        let mut best_bound = f64::INFINITY;
        let mut performed = 0;
        let (relaxed, norm) = loop {
            let reduced = self.problem.reduce(&self.multipliers);
            let relaxed = FrontierSolver::solve(&reduced);

            let dual_value = relaxed.value + self.capacity_term();
            best_bound = best_bound.min(dual_value);
            self.offer(&relaxed);

            let slack = self.problem.slack(&relaxed.decisions);
            let norm = slack.iter().map(|d| d * d).sum::<f64>().sqrt();
            self.update_multipliers(&slack, norm, performed);

            let progress = Progress { iteration: performed, dual_value, subgradient_norm: norm };
            trace!("{progress:?}");
            performed += 1;

            if performed >= iterations {
                break (relaxed, norm);
            }
            if self.cutoff.must_stop(&progress) {
                debug!("cutoff reached after {performed} iterations");
                break (relaxed, norm);
            }
        };

        let bound = relaxed.value + self.capacity_term();
        info!("lagrangian bound {bound} (best {best_bound}) after {performed} iterations");

        self.outcome = Some(LagrangianBound {
            bound,
            best_bound,
            multipliers: self.multipliers.clone(),
            iterations: performed,
            subgradient_norm: norm,
        });

        let best_value = self.best_value();
        let is_exact = best_value.map_or(false, |v| best_bound - v <= EPSILON * v.abs().max(1.0));
        Completion { is_exact, best_value }
    }
    /// Returns the value of the best feasible solution encountered
    fn best_value(&self) -> Option<Price> {
        self.best_sol.as_ref().map(|sol| sol.value)
    }
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
    /// Returns the best dual value (once `maximize` was called)
    fn best_upper_bound(&self) -> Price {
        self.outcome.as_ref().map_or(f64::INFINITY, |o| o.best_bound)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
