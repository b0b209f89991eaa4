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

use std::{io::{Read, Write}, num::{ParseFloatError, ParseIntError}};

use frontier_kp::{checked_capacity, LagrangianBound, LagrangianConfigBuilderError, MultiItem, MultiKnapsack};

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// multidimensional knapsack instance or configuring the solver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The parser expected to read something that was a number but got some garbage
    #[error("parse float {0}")]
    ParseFloat(#[from] ParseFloatError),
    /// The file was not properly formatted.
    #[error("ill formed instance")]
    Format,
    /// The numbers do not describe a valid instance
    #[error("invalid instance: {0}")]
    Model(#[from] frontier_kp::Error),
    /// The solver options are invalid
    #[error("invalid configuration: {0}")]
    Config(#[from] LagrangianConfigBuilderError),
}

/// This function is used to read a multidimensional knapsack instance. It returns
/// either an instance if everything went on well or an error describing the problem.
pub fn read_instance<R: Read>(mut input: R) -> Result<MultiKnapsack, Error> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Parses an instance from its textual description: the number of items `n`
/// and of constraints `m`, then the `m` capacities, then the `n` prices and
/// finally the `m` weights of each of the `n` items.
pub fn parse_instance(text: &str) -> Result<MultiKnapsack, Error> {
    let mut tokens = text.split_ascii_whitespace();

    let n: usize = next(&mut tokens)?.parse()?;
    let m: usize = next(&mut tokens)?.parse()?;

    let mut capacities = Vec::with_capacity(m);
    for _ in 0..m {
        capacities.push(checked_capacity(next(&mut tokens)?.parse()?)?);
    }
    let mut prices = Vec::with_capacity(n);
    for _ in 0..n {
        prices.push(next(&mut tokens)?.parse::<f64>()?);
    }
    let mut items = Vec::with_capacity(n);
    for price in prices {
        let mut weights = Vec::with_capacity(m);
        for _ in 0..m {
            weights.push(next(&mut tokens)?.parse::<i64>()?);
        }
        items.push(MultiItem::try_new(weights, price)?);
    }

    Ok(MultiKnapsack::new(items, capacities)?)
}

/// Writes the bound and then the value of each multiplier (one per line).
pub fn write_bound<W: Write>(out: &mut W, outcome: &LagrangianBound) -> Result<(), Error> {
    writeln!(out, "{}", outcome.bound)?;
    for lambda in outcome.multipliers.iter() {
        writeln!(out, "{lambda}")?;
    }
    Ok(())
}

fn next<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, Error> {
    tokens.next().ok_or(Error::Format)
}
