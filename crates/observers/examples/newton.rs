//! Newton's method on two classic problems, with per-iteration progress.
//!
//! # Usage
//!
//! ```text
//! cargo run -p numera-observers --example newton
//! ```
//!
//! - **√2** solves `x² - 2 = 0` from `x0 = 1.5`.
//! - **Dottie number** solves `cos(x) = x` from `x0 = 0.5`.
//!
//! Each run prints its first iterations, a status line, and the error against
//! the known root.

use std::{error::Error, io};

use numera_observers::Progress;
use numera_solvers::equation::newton;

/// The unique real solution of `cos(x) = x`.
const DOTTIE: f64 = 0.739_085_133_215_160_6;

fn main() -> Result<(), Box<dyn Error>> {
    let config = newton::Config::with_step_tol(1e-12)?;

    println!("Newton: x² - 2 = 0, x0 = 1.5");
    run(
        |x| x * x - 2.0,
        |x| 2.0 * x,
        1.5,
        &config,
        std::f64::consts::SQRT_2,
    )?;

    println!();
    println!("Newton: cos(x) - x = 0, x0 = 0.5");
    run(|x| x.cos() - x, |x| -x.sin() - 1.0, 0.5, &config, DOTTIE)?;

    Ok(())
}

fn run(
    f: impl Fn(f64) -> f64,
    f_prime: impl Fn(f64) -> f64,
    x0: f64,
    config: &newton::Config,
    exact: f64,
) -> io::Result<()> {
    let mut progress = Progress::new(io::stdout().lock());
    let solution = newton::solve(f, f_prime, x0, config, &mut progress);
    progress.finish(&solution)?;

    match solution.root {
        Some(root) => {
            println!("root     = {root:.15}");
            println!("exact    = {exact:.15}");
            println!("|error|  = {:.2e}", (root - exact).abs());
        }
        None => println!("no root found"),
    }
    Ok(())
}
