// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod formatter;
pub mod generator;
pub mod moves;
pub mod solver;

use crate::board::Board;
use crate::config::Method;
use crate::solver::SolverOk;

pub trait Solve {
    fn solve(&self, goal: &Board, method: Method, print_status: bool) -> SolverOk;
}
