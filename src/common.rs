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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- WEIGHT & PRICE ---------------------------------------------------------
// ----------------------------------------------------------------------------
/// The weight of an item (or the capacity of a sack). Weights are never
/// negative, which is why they are unsigned.
pub type Weight = u64;
/// The price (profit) of an item. Prices must be finite and non-negative.
pub type Price = f64;

/// Converts a signed capacity (as read from some input) into a `Weight`.
///
/// # Examples:
/// ```
/// # use frontier_kp::{checked_capacity, Error};
/// assert_eq!(Ok(12), checked_capacity(12));
/// assert_eq!(Err(Error::NegativeCapacity(-1)), checked_capacity(-1));
/// ```
pub fn checked_capacity(capacity: i64) -> Result<Weight, Error> {
    Weight::try_from(capacity).map_err(|_| Error::NegativeCapacity(capacity))
}

fn checked_weight(weight: i64) -> Result<Weight, Error> {
    Weight::try_from(weight).map_err(|_| Error::NegativeWeight(weight))
}

/// Returns true iff the given price can be used in a knapsack instance
pub(crate) fn is_valid_price(price: Price) -> bool {
    price.is_finite() && price >= 0.0
}

// ----------------------------------------------------------------------------
// --- ITEMS ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item of a single constraint knapsack instance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Item {
    /// How much of the capacity gets consumed when this item is selected
    pub weight: Weight,
    /// How much is earned when this item is selected
    pub price: Price,
}
impl Item {
    pub fn new(weight: Weight, price: Price) -> Self {
        Self { weight, price }
    }
    /// Creates an item from a signed weight, failing when that weight is
    /// negative.
    ///
    /// # Examples:
    /// ```
    /// # use frontier_kp::{Item, Error};
    /// assert_eq!(Ok(Item::new(3, 4.0)), Item::try_new(3, 4.0));
    /// assert_eq!(Err(Error::NegativeWeight(-3)), Item::try_new(-3, 4.0));
    /// ```
    pub fn try_new(weight: i64, price: Price) -> Result<Self, Error> {
        Ok(Self::new(checked_weight(weight)?, price))
    }
}

/// An item of a multidimensional knapsack instance. It has one weight per
/// constraint of the problem.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiItem {
    /// The weight of this item in each dimension
    pub weights: Vec<Weight>,
    /// How much is earned when this item is selected
    pub price: Price,
}
impl MultiItem {
    pub fn new(weights: Vec<Weight>, price: Price) -> Self {
        Self { weights, price }
    }
    /// Creates a multi item from signed weights, failing as soon as one of
    /// these is negative.
    pub fn try_new(weights: Vec<i64>, price: Price) -> Result<Self, Error> {
        let weights = weights.into_iter()
            .map(checked_weight)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(weights, price))
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes the decision that was made about one item. The `Unset` value
/// is only ever found at the root of a frontier sequence: it stands for the
/// empty selection before any item was considered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Decision {
    Unset,
    Included,
    Excluded,
}
impl Decision {
    #[inline]
    pub fn is_included(self) -> bool {
        self == Decision::Included
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution assigns one decision to each item of the problem (in input
/// order) and remembers the total weight and price of the selected items.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// One decision per item
    pub decisions: Vec<Decision>,
    /// The total price of the selected items
    pub value: Price,
    /// The total weight of the selected items
    pub weight: Weight,
}
impl Solution {
    /// Iterates over the (0-based) indices of the selected items
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.decisions.iter()
            .enumerate()
            .filter(|(_, d)| d.is_included())
            .map(|(i, _)| i)
    }
    /// Returns the number of selected items
    pub fn nb_selected(&self) -> usize {
        self.selected().count()
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a maximization
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal for the given problem)?
    /// or is it an approximation ?
    pub is_exact: bool,
    /// if present the value of the best feasible solution that was found
    pub best_value: Option<Price>,
}

// ----------------------------------------------------------------------------
// --- Errors -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups the kind of errors that might occur when building
/// a knapsack instance. Once an instance was successfully built, solving it
/// can no longer fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A capacity bound was negative
    #[error("negative capacity {0}")]
    NegativeCapacity(i64),
    /// The weight of some item was negative
    #[error("negative weight {0}")]
    NegativeWeight(i64),
    /// The price of some item is negative, infinite or not a number
    #[error("item {item} has an invalid price {price}")]
    InvalidPrice { item: usize, price: Price },
    /// The number of weights of some item does not match the number of
    /// capacity bounds
    #[error("item {item} has {found} weights but there are {expected} constraints")]
    MalformedInput { item: usize, expected: usize, found: usize },
    /// A multidimensional instance needs at least one capacity bound
    #[error("at least one capacity constraint is required")]
    NoConstraint,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_common {
    use crate::*;
    use super::is_valid_price;

    #[test]
    fn negative_weights_are_rejected() {
        assert_eq!(Err(Error::NegativeWeight(-1)), Item::try_new(-1, 1.0));
        assert_eq!(Err(Error::NegativeWeight(-7)), MultiItem::try_new(vec![1, -7, 2], 1.0));
    }
    #[test]
    fn non_negative_weights_are_accepted() {
        assert_eq!(Ok(Item::new(0, 1.0)), Item::try_new(0, 1.0));
        assert_eq!(Ok(MultiItem::new(vec![1, 0, 2], 1.0)), MultiItem::try_new(vec![1, 0, 2], 1.0));
    }
    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(Err(Error::NegativeCapacity(-5)), checked_capacity(-5));
        assert_eq!(Ok(0), checked_capacity(0));
    }
    #[test]
    fn only_finite_non_negative_prices_are_valid() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(12.5));
        assert!(!is_valid_price(-0.5));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }
    #[test]
    fn selected_yields_the_indices_of_included_items_in_order() {
        let solution = Solution {
            decisions: vec![Decision::Included, Decision::Excluded, Decision::Included],
            value: 10.0,
            weight: 4,
        };
        assert_eq!(vec![0, 2], solution.selected().collect::<Vec<_>>());
        assert_eq!(2, solution.nb_selected());
    }
}
