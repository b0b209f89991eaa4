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

//! This module checks the exact solver against an exhaustive enumeration of
//! all the selections of randomly generated instances.

use rand::{rngs::StdRng, Rng, SeedableRng};

use frontier_kp::*;

fn random_instance(rng: &mut StdRng, max_items: usize, max_weight: u64) -> Knapsack {
    let n = rng.gen_range(0..=max_items);
    let items = (0..n)
        .map(|_| Item::new(rng.gen_range(0..=max_weight), rng.gen_range(0..=50) as f64))
        .collect::<Vec<_>>();
    let total = items.iter().map(|it| it.weight).sum::<u64>();
    let capacity = rng.gen_range(0..=total);
    Knapsack::new(items, capacity).unwrap()
}

/// Same as `random_instance` but the prices are reduced the way a Lagrangian
/// relaxation would: they are fractional and many of them are zero.
fn fractional_instance(rng: &mut StdRng, max_items: usize, max_weight: u64) -> Knapsack {
    let n = rng.gen_range(0..=max_items);
    let lambda = rng.gen_range(0.0..2.0);
    let items = (0..n)
        .map(|_| {
            let weight = rng.gen_range(0..=max_weight);
            let penalty = lambda * rng.gen_range(0..=20) as f64;
            Item::new(weight, (rng.gen_range(0.0..50.0) - penalty).max(0.0))
        })
        .collect::<Vec<_>>();
    let total = items.iter().map(|it| it.weight).sum::<u64>();
    let capacity = rng.gen_range(0..=total);
    Knapsack::new(items, capacity).unwrap()
}

/// Returns the best value of a feasible selection by enumerating them all
fn brute_force(problem: &Knapsack) -> f64 {
    let n = problem.nb_items();
    let mut best = 0.0_f64;
    for mask in 0_u32..(1 << n) {
        let mut weight = 0_u64;
        let mut price = 0.0;
        for (i, item) in problem.items().iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight;
                price += item.price;
            }
        }
        if weight <= problem.capacity() {
            best = best.max(price);
        }
    }
    best
}

#[test]
fn the_frontier_solver_is_optimal() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let problem = random_instance(&mut rng, 14, 20);
        let mut solver = FrontierSolver::new(&problem);
        let Completion { is_exact, best_value } = solver.maximize();

        assert!(is_exact);
        assert_eq!(Some(brute_force(&problem)), best_value);
    }

    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..300 {
        let problem = fractional_instance(&mut rng, 14, 20);
        let solution = FrontierSolver::solve(&problem);

        assert!(problem.is_feasible(&solution.decisions));
        assert!((brute_force(&problem) - solution.value).abs() < 1e-9);
    }
}

#[test]
fn the_frontier_solver_is_optimal_with_huge_weights() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let problem = random_instance(&mut rng, 12, 1_000_000_000_000);
        let solution = FrontierSolver::solve(&problem);
        assert_eq!(brute_force(&problem), solution.value);
    }
}

#[test]
fn the_solution_is_feasible_and_consistent() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..300 {
        let problem = random_instance(&mut rng, 20, 30);
        let solution = FrontierSolver::solve(&problem);

        assert_eq!(problem.nb_items(), solution.decisions.len());
        assert!(solution.decisions.iter().all(|d| *d != Decision::Unset));
        assert!(problem.is_feasible(&solution.decisions));
        assert_eq!((solution.weight, solution.value), problem.evaluate(&solution.decisions));
    }
}

fn assert_sorted_and_non_dominated(problem: &Knapsack) {
    let frontiers = FrontierSequence::compile(problem);

    assert_eq!(problem.nb_items() + 1, frontiers.layers().len());
    for frontier in frontiers.layers() {
        assert!(!frontier.is_empty());
        for pair in frontier.points().windows(2) {
            assert!(pair[0].weight < pair[1].weight);
            assert!(pair[0].price < pair[1].price);
        }
        assert!(frontier.points().iter().all(|p| p.weight <= problem.capacity()));
    }
}

#[test]
fn every_frontier_is_sorted_and_free_of_dominated_points() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        assert_sorted_and_non_dominated(&random_instance(&mut rng, 16, 25));
    }
    let mut rng = StdRng::seed_from_u64(100);
    for _ in 0..200 {
        assert_sorted_and_non_dominated(&fractional_instance(&mut rng, 16, 25));
    }
}

#[test]
fn backtracking_leads_to_the_best_point() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let problem = random_instance(&mut rng, 16, 25);
        let frontiers = FrontierSequence::compile(&problem);
        let decisions = frontiers.backtrack();
        let best = frontiers.best();

        assert_eq!((best.weight, best.price), problem.evaluate(&decisions));
    }
}
