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

use std::cmp::Ordering;

/// This trait gives the possibility to model a dominance relation between the
/// points (partial outcomes) of a problem. A point dominates another one when
/// it is at least as good in every dimension.
pub trait Dominance {
    type Point;

    /// Compares `a` and `b` with respect to dominance:
    ///
    /// * `Some(Greater)` when `a` strictly dominates `b`,
    /// * `Some(Less)` when `b` strictly dominates `a`,
    /// * `Some(Equal)` when both points are equally good in every dimension,
    /// * `None` when the two points are not comparable.
    fn partial_cmp(&self, a: &Self::Point, b: &Self::Point) -> Option<Ordering>;

    /// Returns true iff `a` is dominated by `b`. That is, iff `b` is at least
    /// as good as `a` in every dimension.
    fn is_dominated_by(&self, a: &Self::Point, b: &Self::Point) -> bool {
        matches!(self.partial_cmp(a, b), Some(Ordering::Less | Ordering::Equal))
    }
}

/// Combines the ordering of one more dimension with the ordering accumulated
/// so far. The combination is `None` as soon as two dimensions disagree.
pub fn combine_orderings(acc: Option<Ordering>, dim: Ordering) -> Option<Ordering> {
    match (acc?, dim) {
        (Ordering::Equal, o) => Some(o),
        (o, Ordering::Equal) => Some(o),
        (a, b) if a == b => Some(a),
        _ => None,
    }
}
