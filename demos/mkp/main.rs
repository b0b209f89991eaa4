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

//! This example uses the Lagrangian solver to derive an upper bound on the
//! optimal value of multidimensional knapsack instances. The instance is read
//! from the given file (or from the standard input when no file is given).
//!
//! The output gives the Lagrangian bound followed by the final value of each
//! multiplier, one per line.

use std::{fs::File, io::{self, Read, Write}, time::Instant};

use clap::Parser;
use frontier_kp::*;
use log::info;

use crate::io_utils::{read_instance, write_bound, Error};

mod io_utils;

#[cfg(test)]
mod tests;

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file. The instance is read from the standard
    /// input when this is omitted.
    fname: Option<String>,
    /// The maximum number of subgradient iterations
    #[clap(short, long, default_value = "100000")]
    iterations: usize,
    /// The subgradient norm below which the multipliers are left untouched
    #[clap(short, long, default_value = "1e-4")]
    tolerance: f64,
    /// Stop as soon as the subgradient norm drops below this value
    #[clap(short, long)]
    epsilon: Option<f64>,
    /// Stop once the dual value has not improved during that many iterations
    #[clap(short, long)]
    patience: Option<usize>,
}

/// An utility function to return a cutoff heuristic that can either stop when the
/// subgradient vanishes, when the optimization stagnates or never.
fn cutoff(epsilon: Option<f64>, patience: Option<usize>) -> Box<dyn Cutoff> {
    match (epsilon, patience) {
        (Some(eps), _) => Box::new(SubgradientTolerance(eps)),
        (None, Some(patience)) => Box::new(Stagnation::new(patience)),
        (None, None) => Box::new(NoCutoff),
    }
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
    let config = LagrangianConfigBuilder::default()
        .iterations(args.iterations)
        .tolerance(args.tolerance)
        .build()?;
    let cutoff = cutoff(args.epsilon, args.patience);

    let start = Instant::now();
    let mut solver = LagrangianSolver::custom(&problem, config, cutoff.as_ref());
    let Completion { is_exact, best_value } = solver.maximize();
    info!("duration {:.3} seconds, feasible value {:?}, proved optimal {}",
        start.elapsed().as_secs_f32(), best_value, is_exact);

    let outcome = solver.bound().ok_or(Error::Format)?;
    let mut out = io::stdout().lock();
    write_bound(&mut out, outcome)?;
    out.flush()?;
    Ok(())
}
