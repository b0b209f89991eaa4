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

use frontier_kp::{checked_capacity, Item, Knapsack, Solution};

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// knapsack instance. There can be io errors (file unavailable ?), format error
/// (e.g. the file ends before all items are described), parse errors (the parser
/// expected a number but got ... something else), or model errors when the numbers
/// do not make a valid instance (negative weight for instance).
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
}

/// This function is used to read a knapsack instance. It returns either a
/// knapsack instance if everything went on well or an error describing the problem.
pub fn read_instance<R: Read>(mut input: R) -> Result<Knapsack, Error> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Parses an instance from its textual description: `n C` followed by `n`
/// pairs `weight price`. Any whitespace separates two numbers.
pub fn parse_instance(text: &str) -> Result<Knapsack, Error> {
    let mut tokens = text.split_ascii_whitespace();

    let n: usize = next(&mut tokens)?.parse()?;
    let capacity = checked_capacity(next(&mut tokens)?.parse()?)?;

    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        let weight = next(&mut tokens)?.parse()?;
        let price = next(&mut tokens)?.parse()?;
        items.push(Item::try_new(weight, price)?);
    }

    Ok(Knapsack::new(items, capacity)?)
}

/// Writes the total price and number of selected items, then the index of
/// each selected item (one per line).
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> Result<(), Error> {
    writeln!(out, "{} {}", solution.value, solution.nb_selected())?;
    for item in solution.selected() {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

fn next<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, Error> {
    tokens.next().ok_or(Error::Format)
}
