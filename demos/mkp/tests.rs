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

//! This module is meant to tests the correctness of our multidimensional
//! knapsack example

use std::{fs::File, path::PathBuf};

use frontier_kp::*;

use crate::{cutoff, io_utils::{parse_instance, read_instance, write_bound, Error}};

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("resources/mkp/")
        .join(id)
}

fn bound_id(id: &str, iterations: usize) -> (MultiKnapsack, LagrangianBound) {
    let problem = read_instance(File::open(locate(id)).unwrap()).unwrap();
    let config = LagrangianConfigBuilder::default().iterations(iterations).build().unwrap();
    let mut solver = LagrangianSolver::custom(&problem, config, &NoCutoff);
    solver.maximize();
    let outcome = solver.bound().cloned().unwrap();
    (problem, outcome)
}

fn assert_bounds(id: &str, optimum: f64) {
    let iterations = 2_000;
    let (problem, outcome) = bound_id(id, iterations);
    let step = problem.capacities()[..problem.nb_relaxed()].iter()
        .map(|c| *c as f64)
        .sum::<f64>() / iterations as f64;

    assert_eq!(iterations, outcome.iterations);
    assert_eq!(problem.nb_relaxed(), outcome.multipliers.len());
    assert!(outcome.best_bound >= optimum - 1e-6);
    assert!(outcome.bound >= optimum - step - 1e-6);
}

#[test]
fn mkp_10_3() {
    assert_bounds("mkp_10_3.txt", 208.0);
}
#[test]
fn mkp_15_2() {
    assert_bounds("mkp_15_2.txt", 326.0);
}
#[test]
fn mkp_12_5() {
    assert_bounds("mkp_12_5.txt", 154.0);
}
#[test]
fn mkp_2_2() {
    let (_, outcome) = bound_id("mkp_2_2.txt", DEFAULT_ITERATIONS);
    let mut out = vec![];
    write_bound(&mut out, &outcome).unwrap();
    assert_eq!("5\n1\n", String::from_utf8(out).unwrap());
}
#[test]
fn fractional_values_are_written_without_rounding() {
    let outcome = LagrangianBound {
        bound: 1234.56789,
        best_bound: 1234.5,
        multipliers: vec![0.1, 0.0],
        iterations: 3,
        subgradient_norm: 0.0,
    };
    let mut out = vec![];
    write_bound(&mut out, &outcome).unwrap();
    assert_eq!("1234.56789\n0.1\n0\n", String::from_utf8(out).unwrap());
}

#[test]
fn the_instance_is_read_in_order() {
    let problem = parse_instance("2 3\n10 20 30\n5 6\n1 2 3\n4 5 6\n").unwrap();
    assert_eq!(&[10_u64, 20, 30], problem.capacities());
    assert_eq!(&[MultiItem::new(vec![1, 2, 3], 5.0), MultiItem::new(vec![4, 5, 6], 6.0)], problem.items());
}
#[test]
fn truncated_instances_are_rejected() {
    assert!(matches!(parse_instance("2 2\n10 20\n5 6\n1 2\n4"), Err(Error::Format)));
}
#[test]
fn instances_without_constraint_are_rejected() {
    assert!(matches!(parse_instance("1 0\n5\n"), Err(Error::Model(frontier_kp::Error::NoConstraint))));
}
#[test]
fn negative_numbers_are_rejected() {
    assert!(matches!(parse_instance("1 1\n-3\n5\n1"), Err(Error::Model(frontier_kp::Error::NegativeCapacity(-3)))));
    assert!(matches!(parse_instance("1 1\n3\n5\n-1"), Err(Error::Model(frontier_kp::Error::NegativeWeight(-1)))));
}
#[test]
fn the_cutoff_follows_the_options() {
    let progress = Progress { iteration: 0, dual_value: 1.0, subgradient_norm: 0.5 };
    assert!(cutoff(Some(1.0), None).must_stop(&progress));
    assert!(!cutoff(Some(0.1), Some(0)).must_stop(&progress));
    assert!(cutoff(None, Some(0)).must_stop(&progress));
    assert!(!cutoff(None, None).must_stop(&progress));
}
