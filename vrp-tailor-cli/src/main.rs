//! A command line interface to *Vehicle Routing Problem* solver.
//!

mod commands;

use clap::Command;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Vehicle Routing Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Vehicle Routing Problem solver")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
