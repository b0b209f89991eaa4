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

//! This module provides the dominance relation that prunes the frontiers of
//! the exact knapsack solver.

use std::cmp::Ordering;

use crate::{combine_orderings, Dominance, FrontierPoint};

/// The dominance relation between two outcomes of a partial selection: a
/// point dominates another one when it weighs at most as much while earning
/// at least as much.
///
/// # Note:
/// A price that is not a number is incomparable with any other price. Such
/// prices are however rejected when building a problem instance.
#[derive(Debug, Default, Copy, Clone)]
pub struct WeightPriceDominance;

impl Dominance for WeightPriceDominance {
    type Point = FrontierPoint;

    fn partial_cmp(&self, a: &FrontierPoint, b: &FrontierPoint) -> Option<Ordering> {
        // lighter is better
        let weight = b.weight.cmp(&a.weight);
        let price = a.price.partial_cmp(&b.price)?;
        combine_orderings(Some(weight), price)
    }
}
