//! Interactive convergence charts for Newton's method.
//!
//! Each mode solves a simple equation and opens a window with the iterates
//! on the left and the step sizes on a log scale on the right.
//!
//! # Usage
//!
//! ```text
//! cargo run -p numera-observers --example plot --features plot -- sqrt2
//! cargo run -p numera-observers --example plot --features plot -- dottie
//! ```
//!
//! # Modes
//!
//! - **sqrt2**: Solve x² = 2 from x0 = 1.5. The step size roughly squares
//!   each iteration, so the right panel falls off ever more steeply.
//!
//! - **dottie**: Solve cos(x) = x from x0 = 0.5, converging to the Dottie
//!   number ≈ 0.7391.

use std::error::Error;

use numera_observers::{ConvergencePlot, Progress, ShowConfig};
use numera_solvers::equation::newton;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sqrt2".into());
    match mode.as_str() {
        "sqrt2" => sqrt2(),
        "dottie" => dottie(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [sqrt2|dottie]");
            std::process::exit(1);
        }
    }
}

fn config() -> Result<newton::Config, newton::ConfigError> {
    newton::Config::with_step_tol(1e-12)
}

fn sqrt2() -> Result<(), Box<dyn Error>> {
    let mut progress = Progress::new(std::io::stdout());
    let solution = newton::solve(|x| x * x - 2.0, |x| 2.0 * x, 1.5, &config()?, &mut progress);
    progress.finish(&solution)?;

    ConvergencePlot::from_trace(&solution.trace)
        .exact_root(std::f64::consts::SQRT_2)
        .show(
            ShowConfig::new()
                .title("Newton: x² = 2  →  √2 ≈ 1.4142")
                .legend(),
        )?;

    Ok(())
}

fn dottie() -> Result<(), Box<dyn Error>> {
    let mut progress = Progress::new(std::io::stdout());
    let solution = newton::solve(
        |x| x.cos() - x,
        |x| -x.sin() - 1.0,
        0.5,
        &config()?,
        &mut progress,
    );
    progress.finish(&solution)?;

    ConvergencePlot::from_trace(&solution.trace)
        .exact_root(0.739_085_133_215_160_6)
        .show(
            ShowConfig::new()
                .title("Newton: cos(x) = x  →  Dottie number ≈ 0.7391")
                .legend(),
        )?;

    Ok(())
}
