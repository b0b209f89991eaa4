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

//! This module provides the frontiers which are at the heart of the exact
//! knapsack solver. A frontier is the set of all the non dominated (weight,
//! price) outcomes that can be reached after having decided about a prefix of
//! the items. Because these points are kept sorted by increasing weight (and
//! hence by increasing price), the frontier of the next prefix can be derived
//! with one single merge pass.
//!
//! The frontiers of all prefixes are kept in a `FrontierSequence` which acts
//! as an arena: each point remembers the index of its parent in the previous
//! frontier. This is what makes it possible to backtrack from the best point
//! of the last frontier and to recover the optimal decision about each item.

use log::trace;

use crate::{Decision, Dominance, Item, Knapsack, Price, WeightPriceDominance, Weight};

/// One point of a frontier: a non dominated outcome of a partial selection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrontierPoint {
    /// The decision that was made about the last item to reach this point
    pub decision: Decision,
    /// The index of the point from which this one was derived, in the
    /// previous frontier. Only the root point has no parent.
    pub parent: Option<usize>,
    /// The total weight of the partial selection
    pub weight: Weight,
    /// The total price of the partial selection
    pub price: Price,
}
impl FrontierPoint {
    /// The point standing for the empty selection
    pub fn root() -> Self {
        FrontierPoint { decision: Decision::Unset, parent: None, weight: 0, price: 0.0 }
    }
}

/// The Pareto optimal (weight, price) outcomes for one prefix of the items,
/// sorted by increasing weight.
///
/// # Note:
/// A frontier is never empty. The outcome of excluding all items is always
/// reachable and it can only ever be replaced by an outcome at least as good.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontier {
    points: Vec<FrontierPoint>,
}
impl Frontier {
    /// The frontier of the empty prefix. It only comprises the root point.
    pub fn root() -> Self {
        Frontier { points: vec![FrontierPoint::root()] }
    }
    pub fn points(&self) -> &[FrontierPoint] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns the heaviest point of this frontier, which is also the one
    /// having the highest price.
    pub fn best(&self) -> &FrontierPoint {
        &self.points[self.points.len() - 1]
    }

    /// Derives the frontier of the next prefix: the one which also decides
    /// about `item`. The outcomes that would exceed the `capacity` are
    /// discarded and so are the dominated ones.
    pub fn expand(&self, item: &Item, capacity: Weight) -> Frontier {
        let excluded = self.points.iter()
            .enumerate()
            .map(|(i, p)| FrontierPoint {
                decision: Decision::Excluded,
                parent: Some(i),
                weight: p.weight,
                price: p.price,
            })
            .collect::<Vec<_>>();

        // points are sorted by weight: once one is too heavy, all next ones are
        let included = self.points.iter()
            .enumerate()
            .map_while(|(i, p)| {
                let weight = p.weight.checked_add(item.weight).filter(|w| *w <= capacity)?;
                Some(FrontierPoint {
                    decision: Decision::Included,
                    parent: Some(i),
                    weight,
                    price: p.price + item.price,
                })
            })
            .collect::<Vec<_>>();

        Frontier { points: merge(&WeightPriceDominance, &excluded, &included) }
    }
}

/// Merges two lists of points sorted by increasing weight into one single
/// list of non dominated points, still sorted by increasing weight.
///
/// When two points dominate one another (same weight and price), the one
/// from `included` is kept.
fn merge<D>(dominance: &D, excluded: &[FrontierPoint], included: &[FrontierPoint]) -> Vec<FrontierPoint>
where D: Dominance<Point = FrontierPoint>
{
    let mut merged = Vec::with_capacity(excluded.len() + included.len());
    let mut x = 0;
    let mut i = 0;

    while x < excluded.len() && i < included.len() {
        let exc = &excluded[x];
        let inc = &included[i];

        if dominance.is_dominated_by(exc, inc) {
            x += 1;
        } else if dominance.is_dominated_by(inc, exc) {
            i += 1;
        } else if exc.weight < inc.weight {
            merged.push(*exc);
            x += 1;
        } else {
            merged.push(*inc);
            i += 1;
        }
    }

    merged.extend_from_slice(&excluded[x..]);
    merged.extend_from_slice(&included[i..]);
    merged
}

/// The frontiers of all prefixes of the items of some knapsack instance.
/// The frontier at index `k` is the one obtained after deciding about the
/// `k` first items.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierSequence {
    layers: Vec<Frontier>,
}
impl FrontierSequence {
    /// Develops all the frontiers of the given problem.
    pub fn compile(problem: &Knapsack) -> Self {
        let mut layers = Vec::with_capacity(problem.nb_items() + 1);
        layers.push(Frontier::root());

        for (depth, item) in problem.items().iter().enumerate() {
            let next = layers[depth].expand(item, problem.capacity());
            trace!("frontier {} has {} points", depth + 1, next.len());
            layers.push(next);
        }

        FrontierSequence { layers }
    }

    pub fn layers(&self) -> &[Frontier] {
        &self.layers
    }
    /// The frontier that decides about all the items
    pub fn last(&self) -> &Frontier {
        &self.layers[self.layers.len() - 1]
    }
    /// The size of the largest frontier
    pub fn peak_width(&self) -> usize {
        self.layers.iter().map(Frontier::len).max().unwrap_or(0)
    }
    /// The optimal outcome
    pub fn best(&self) -> &FrontierPoint {
        self.last().best()
    }

    /// Walks the parent links back from the optimal outcome up to the root
    /// and returns the decision that was made about each item (in the order
    /// of the items).
    pub fn backtrack(&self) -> Vec<Decision> {
        let mut decisions = Vec::with_capacity(self.layers.len() - 1);
        let mut depth = self.layers.len() - 1;
        let mut point = self.best();

        while let Some(parent) = point.parent {
            decisions.push(point.decision);
            depth -= 1;
            point = &self.layers[depth].points[parent];
        }

        decisions.reverse();
        decisions
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_frontier {
    use crate::*;
    use crate::Decision::{Excluded as X, Included as I};

    fn knapsack(items: &[(u64, f64)], capacity: u64) -> Knapsack {
        Knapsack::new(items.iter().map(|(w, p)| Item::new(*w, *p)).collect(), capacity).unwrap()
    }
    fn outcomes(frontier: &Frontier) -> Vec<(u64, f64)> {
        frontier.points().iter().map(|p| (p.weight, p.price)).collect()
    }

    #[test]
    fn the_root_frontier_only_has_the_root_point() {
        let root = Frontier::root();
        assert_eq!(1, root.len());
        assert!(!root.is_empty());
        assert_eq!(&FrontierPoint::root(), root.best());
        assert_eq!(Decision::Unset, root.best().decision);
        assert_eq!(None, root.best().parent);
    }

    #[test]
    fn expanding_the_root_yields_both_outcomes() {
        let next = Frontier::root().expand(&Item::new(2, 3.0), 5);
        assert_eq!(vec![(0, 0.0), (2, 3.0)], outcomes(&next));
        assert_eq!(X, next.points()[0].decision);
        assert_eq!(I, next.points()[1].decision);
        assert_eq!(Some(0), next.points()[0].parent);
        assert_eq!(Some(0), next.points()[1].parent);
    }

    #[test]
    fn items_heavier_than_the_capacity_are_never_included() {
        let next = Frontier::root().expand(&Item::new(6, 3.0), 5);
        assert_eq!(vec![(0, 0.0)], outcomes(&next));
        assert_eq!(X, next.best().decision);
    }

    #[test]
    fn weights_overflowing_are_considered_too_heavy() {
        let next = Frontier::root().expand(&Item::new(u64::MAX, 3.0), u64::MAX);
        let next = next.expand(&Item::new(1, 2.0), u64::MAX);
        assert_eq!(vec![(0, 0.0), (1, 2.0), (u64::MAX, 3.0)], outcomes(&next));
    }

    #[test]
    fn zero_weight_items_replace_the_outcome_they_improve() {
        let next = Frontier::root().expand(&Item::new(0, 3.0), 0);
        assert_eq!(vec![(0, 3.0)], outcomes(&next));
        assert_eq!(I, next.best().decision);
    }

    #[test]
    fn equivalent_outcomes_prefer_the_inclusion() {
        let next = Frontier::root().expand(&Item::new(0, 0.0), 10);
        assert_eq!(1, next.len());
        assert_eq!(I, next.best().decision);
    }

    #[test]
    fn dominated_outcomes_are_pruned() {
        let pb = knapsack(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)], 5);
        let seq = FrontierSequence::compile(&pb);
        // (5, 6) = item 3 alone is dominated by (5, 7) = items 0 and 1
        assert_eq!(vec![(0, 0.0), (2, 3.0), (3, 4.0), (4, 5.0), (5, 7.0)], outcomes(seq.last()));
    }

    #[test]
    fn a_sequence_has_one_frontier_per_prefix() {
        let pb = knapsack(&[(2, 3.0), (3, 4.0), (4, 5.0)], 5);
        let seq = FrontierSequence::compile(&pb);
        assert_eq!(4, seq.layers().len());
        assert_eq!(&Frontier::root(), &seq.layers()[0]);
    }

    #[test]
    fn the_sequence_of_an_empty_problem_is_the_root() {
        let pb = knapsack(&[], 5);
        let seq = FrontierSequence::compile(&pb);
        assert_eq!(1, seq.layers().len());
        assert_eq!(1, seq.peak_width());
        assert!(seq.backtrack().is_empty());
    }

    #[test]
    fn the_best_point_is_the_last_of_the_final_frontier() {
        let pb = knapsack(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)], 5);
        let seq = FrontierSequence::compile(&pb);
        assert_eq!(5, seq.best().weight);
        assert_eq!(7.0, seq.best().price);
    }

    #[test]
    fn backtracking_recovers_the_optimal_decisions() {
        let pb = knapsack(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)], 5);
        let seq = FrontierSequence::compile(&pb);
        assert_eq!(vec![I, I, X, X], seq.backtrack());
    }

    #[test]
    fn backtracking_with_null_capacity_excludes_everything() {
        let pb = knapsack(&[(2, 3.0), (3, 4.0)], 0);
        let seq = FrontierSequence::compile(&pb);
        assert_eq!(vec![X, X], seq.backtrack());
        assert_eq!(1, seq.peak_width());
    }

    #[test]
    fn peak_width_is_the_size_of_the_largest_frontier() {
        let pb = knapsack(&[(1, 1.0), (2, 2.0), (4, 4.0)], 100);
        let seq = FrontierSequence::compile(&pb);
        // all subset sums 0..=7 are distinct and non dominated
        assert_eq!(8, seq.peak_width());
        assert_eq!(8, seq.last().len());
    }
}
