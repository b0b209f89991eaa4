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

//! This example uses the frontier solver to solve 0/1 knapsack instances.
//! The instance is read from the given file (or from the standard input when
//! no file is given). It consists of the number of items `n` and the capacity
//! of the sack, followed by the weight and price of each of the `n` items.
//!
//! The output gives the total price of the optimal selection along with the
//! number of selected items. It then lists the (0-based) index of each
//! selected item, one per line.

use std::{fs::File, io::{self, Read, Write}, time::Instant};

use clap::Parser;
use frontier_kp::*;
use log::info;

use crate::io_utils::{read_instance, write_solution, Error};

mod io_utils;


/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file. The instance is read from the standard
    /// input when this is omitted.
    fname: Option<String>,
}

/// Opens the source of the instance
fn input(fname: Option<&str>) -> Result<Box<dyn Read>, Error> {
    match fname {
        Some(fname) => Ok(Box::new(File::open(fname)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();
    let problem = read_instance(input(args.fname.as_deref())?)?;

    let start = Instant::now();
    let mut solver = FrontierSolver::new(&problem);
    solver.maximize();
    info!("solved {} items in {:.3} seconds", problem.nb_items(), start.elapsed().as_secs_f32());

    let solution = solver.best_solution().ok_or(Error::Format)?;
    let mut out = io::stdout().lock();
    write_solution(&mut out, &solution)?;
    out.flush()?;
    Ok(())
}
