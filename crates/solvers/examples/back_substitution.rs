//! Solves a small upper-triangular system by back-substitution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p numera-solvers --example back_substitution
//! ```
//!
//! The system is
//!
//! ```text
//! 2x -  y      = 1
//!      3y +  z = 2
//!           4z = 3
//! ```
//!
//! whose exact solution is `x = 17/24`, `y = 5/12`, `z = 3/4`.

use std::process::ExitCode;

use ndarray::array;
use numera_solvers::linear::back_substitution;

fn main() -> ExitCode {
    let a = array![[2.0, -1.0, 0.0], [0.0, 3.0, 1.0], [0.0, 0.0, 4.0]];
    let b = array![1.0, 2.0, 3.0];

    println!("A =\n{a}");
    println!("b = {b}");

    match back_substitution::solve(a.view(), b.view()) {
        Ok(x) => {
            println!("x = {x:.4}");
            println!("A·x = {:.4}", a.dot(&x));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
