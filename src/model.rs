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

//! This module defines the two problems our solvers work on: the classic
//! (single constraint) 0/1 knapsack, and its multidimensional counterpart
//! where each item consumes some of every capacity.
//!
//! Both problems are validated upon construction. Hence, once you hold a
//! `Knapsack` or a `MultiKnapsack`, the solvers can no longer fail.

use crate::common::is_valid_price;
use crate::{Decision, Error, Item, MultiItem, Price, Weight};

/// A single constraint 0/1 knapsack instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: Weight,
}
impl Knapsack {
    /// Creates a new instance after having checked that all prices are
    /// finite and non-negative.
    pub fn new(items: Vec<Item>, capacity: Weight) -> Result<Self, Error> {
        if let Some((item, it)) = items.iter().enumerate().find(|(_, it)| !is_valid_price(it.price)) {
            return Err(Error::InvalidPrice { item, price: it.price });
        }
        Ok(Self { items, capacity })
    }
    /// Builds an instance whose prices are known to be valid
    pub(crate) fn from_valid_parts(items: Vec<Item>, capacity: Weight) -> Self {
        debug_assert!(items.iter().all(|it| is_valid_price(it.price)));
        Self { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn capacity(&self) -> Weight {
        self.capacity
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// Returns the total weight and price of the items selected by `decisions`
    pub fn evaluate(&self, decisions: &[Decision]) -> (Weight, Price) {
        self.items.iter()
            .zip(decisions)
            .filter(|(_, d)| d.is_included())
            .fold((0, 0.0), |(w, p), (it, _)| (w.saturating_add(it.weight), p + it.price))
    }
    /// Returns true iff the selection fits in the sack
    pub fn is_feasible(&self, decisions: &[Decision]) -> bool {
        self.evaluate(decisions).0 <= self.capacity
    }
}

/// A multidimensional knapsack instance: each item has one weight per
/// dimension and the selection must respect all of the capacities at once.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiKnapsack {
    items: Vec<MultiItem>,
    capacities: Vec<Weight>,
}
impl MultiKnapsack {
    /// Creates a new instance. This fails when there is no capacity at all,
    /// when some item does not have exactly one weight per capacity or when
    /// one of the prices is invalid.
    pub fn new(items: Vec<MultiItem>, capacities: Vec<Weight>) -> Result<Self, Error> {
        if capacities.is_empty() {
            return Err(Error::NoConstraint);
        }
        for (item, it) in items.iter().enumerate() {
            if it.weights.len() != capacities.len() {
                return Err(Error::MalformedInput {
                    item,
                    expected: capacities.len(),
                    found: it.weights.len(),
                });
            }
            if !is_valid_price(it.price) {
                return Err(Error::InvalidPrice { item, price: it.price });
            }
        }
        Ok(Self { items, capacities })
    }

    pub fn items(&self) -> &[MultiItem] {
        &self.items
    }
    pub fn capacities(&self) -> &[Weight] {
        &self.capacities
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    pub fn nb_dimensions(&self) -> usize {
        self.capacities.len()
    }
    /// The number of constraints that get relaxed by a Lagrangian relaxation.
    /// All constraints but the last one are relaxed.
    pub fn nb_relaxed(&self) -> usize {
        self.nb_dimensions() - 1
    }
    /// The capacity of the constraint that is kept as a hard bound
    pub fn retained_capacity(&self) -> Weight {
        self.capacities[self.nb_relaxed()]
    }

    /// Builds the single constraint instance in which the relaxed dimensions
    /// have been moved to the objective with the given `multipliers`.
    /// The price of each item is reduced by its penalty (never going below
    /// zero) and its weight is the one of the retained dimension.
    pub fn reduce(&self, multipliers: &[f64]) -> Knapsack {
        debug_assert_eq!(multipliers.len(), self.nb_relaxed());
        let last = self.nb_relaxed();
        let items = self.items.iter()
            .map(|it| {
                let penalty = multipliers.iter()
                    .zip(&it.weights)
                    .map(|(lambda, w)| lambda * *w as f64)
                    .sum::<f64>();
                Item::new(it.weights[last], (it.price - penalty).max(0.0))
            })
            .collect();
        Knapsack::from_valid_parts(items, self.retained_capacity())
    }

    /// Computes the subgradient of the Lagrangian dual at the point where the
    /// relaxed problem selected `decisions`. That is, the slack of each
    /// relaxed constraint (negative when the constraint is violated).
    pub fn slack(&self, decisions: &[Decision]) -> Vec<f64> {
        let mut slack = self.capacities[..self.nb_relaxed()].iter()
            .map(|c| *c as f64)
            .collect::<Vec<_>>();
        for (it, _) in self.items.iter().zip(decisions).filter(|(_, d)| d.is_included()) {
            for (s, w) in slack.iter_mut().zip(&it.weights) {
                *s -= *w as f64;
            }
        }
        slack
    }
    /// Returns the total price of the selected items
    pub fn value(&self, decisions: &[Decision]) -> Price {
        self.items.iter()
            .zip(decisions)
            .filter(|(_, d)| d.is_included())
            .map(|(it, _)| it.price)
            .sum()
    }
    /// Returns true iff the selection respects every capacity
    pub fn is_feasible(&self, decisions: &[Decision]) -> bool {
        (0..self.nb_dimensions()).all(|dim| {
            let used = self.items.iter()
                .zip(decisions)
                .filter(|(_, d)| d.is_included())
                .fold(0 as Weight, |acc, (it, _)| acc.saturating_add(it.weights[dim]));
            used <= self.capacities[dim]
        })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
