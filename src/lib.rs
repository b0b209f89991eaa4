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

//! # Frontier KP
//! This crate provides an exact solver for the 0/1 knapsack problem along
//! with an approximate solver for its multidimensional counterpart.
//!
//! The exact solver does not fill the usual (items x capacity) table of the
//! textbook dynamic program. Instead, it develops the *frontier* of each
//! prefix of the items: the set of all the (weight, price) outcomes that are
//! not dominated by any other reachable outcome. Its cost is thus governed by
//! the number of such outcomes, which makes it usable even when the capacity
//! is huge.
//!
//! The approximate solver moves all constraints but the last one into the
//! objective (Lagrangian relaxation) and repeatedly solves the resulting
//! single constraint problem with the exact solver while adjusting the
//! multipliers with a subgradient method. It yields an upper bound on the
//! optimal value of the multidimensional problem.
//!
//! ## Quick Example
//! ```
//! # use frontier_kp::*;
//! // 1. Create an instance of the knapsack problem
//! let problem = Knapsack::new(vec![
//!     Item::new(10,  60.0),
//!     Item::new(20, 100.0),
//!     Item::new(30, 120.0),
//! ], 50).unwrap();
//! // 2. Maximize the total price of the items in the sack
//! let mut solver = FrontierSolver::new(&problem);
//! let outcome = solver.maximize();
//! assert!(outcome.is_exact);
//! assert_eq!(Some(220.0), outcome.best_value);
//! // 3. Do whatever you like with the optimal solution
//! let solution = solver.best_solution().unwrap();
//! for item in solution.selected() {
//!     println!("{item}");
//! }
//! ```
//!
//! ## Bounding a multidimensional knapsack
//! ```
//! # use frontier_kp::*;
//! let problem = MultiKnapsack::new(vec![
//!     MultiItem::new(vec![3, 2], 10.0),
//!     MultiItem::new(vec![2, 3],  8.0),
//!     MultiItem::new(vec![2, 2],  7.0),
//! ], vec![4, 4]).unwrap();
//!
//! let config = LagrangianConfigBuilder::default()
//!     .iterations(1_000_usize)
//!     .build()
//!     .unwrap();
//! let mut solver = LagrangianSolver::custom(&problem, config, &NoCutoff);
//! solver.maximize();
//!
//! let outcome = solver.bound().unwrap();
//! println!("bound {}", outcome.bound);
//! for lambda in outcome.multipliers.iter() {
//!     println!("{lambda}");
//! }
//! ```

mod common;
mod model;
mod abstraction;
mod implementation;

pub use common::*;
pub use model::*;
pub use abstraction::*;
pub use implementation::*;
