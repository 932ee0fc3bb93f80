//! Progress reporting for the Newton solver.

use std::io::{self, Write};

use numera_core::Observer;
use numera_solvers::equation::newton::{Action, Event, Solution, Status};

/// Number of iterations reported when no limit is given.
const DEFAULT_LIMIT: usize = 10;

/// An observer that writes one line per Newton iteration.
///
/// Only the first `limit` iterations are written, so long runs stay readable.
/// After the solve, [`finish`][Progress::finish] writes a summary line for the
/// returned [`Solution`] and hands the writer back.
///
/// Observers cannot return errors to the solver, so the first write error is
/// held and reported by `finish`.
///
/// # Example
///
/// ```
/// use numera_observers::Progress;
/// use numera_solvers::equation::newton;
///
/// let mut progress = Progress::new(Vec::new());
/// let solution = newton::solve(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.5,
///     &newton::Config::default(),
///     &mut progress,
/// );
///
/// let out = String::from_utf8(progress.finish(&solution)?).unwrap();
/// assert!(out.starts_with("iteration  1: x = 1.416666666666667"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Progress<W> {
    out: W,
    limit: usize,
    error: Option<io::Error>,
}

impl<W: Write> Progress<W> {
    /// Creates a reporter that writes the first 10 iterations to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            limit: DEFAULT_LIMIT,
            error: None,
        }
    }

    /// Sets how many iterations are written.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Writes the summary line for `solution` and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or the error from
    /// writing the summary.
    pub fn finish(mut self, solution: &Solution) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        let iters = solution.iters;
        match solution.status {
            Status::Converged => writeln!(self.out, "converged in {iters} iterations"),
            Status::DerivativeZero => {
                writeln!(self.out, "stopped: zero derivative at iteration {iters}")
            }
            Status::MaxIters => writeln!(self.out, "maximum iterations reached ({iters})"),
            Status::StoppedByObserver => {
                writeln!(self.out, "stopped by observer after {iters} iterations")
            }
        }?;
        Ok(self.out)
    }

    fn record(&mut self, event: &Event) {
        let Event::Stepped {
            iter, next, step, ..
        } = *event
        else {
            return;
        };
        if iter > self.limit || self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(
            self.out,
            "iteration {iter:>2}: x = {next:.15}  |dx| = {step:.2e}"
        ) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Observer<Event, Action> for Progress<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.record(event);
        None
    }
}

/// Allows `&mut Progress` to be passed to solvers that take an observer by
/// value, so [`Progress::finish`] can be called after the solve completes.
impl<W: Write> Observer<Event, Action> for &mut Progress<W> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numera_solvers::equation::newton::{self, Config};

    fn run(progress: &mut Progress<Vec<u8>>, x0: f64, config: &Config) -> Solution {
        newton::solve(|x| x * x - 2.0, |x| 2.0 * x, x0, config, progress)
    }

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .expect("utf-8 output")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_iterations_then_summary() {
        let mut progress = Progress::new(Vec::new());
        let config = Config::with_step_tol(1e-12).expect("valid tolerance");
        let solution = run(&mut progress, 1.5, &config);

        let lines = lines(progress.finish(&solution).expect("in-memory writer"));

        assert_eq!(lines.len(), solution.iters + 1);
        assert_eq!(lines[0], "iteration  1: x = 1.416666666666667  |dx| = 8.33e-2");
        assert_eq!(
            lines.last().map(String::as_str),
            Some(format!("converged in {} iterations", solution.iters).as_str())
        );
    }

    #[test]
    fn stops_writing_after_limit() {
        let mut progress = Progress::new(Vec::new()).with_limit(2);
        let solution = run(&mut progress, 1.5, &Config::default());

        let lines = lines(progress.finish(&solution).expect("in-memory writer"));

        assert!(solution.iters > 2);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("iteration  2: "));
    }

    #[test]
    fn default_limit_is_ten_iterations() {
        let mut progress = Progress::new(Vec::new());
        let solution = newton::solve(
            |x| x.powi(3) - 2.0 * x + 2.0,
            |x| 3.0 * x * x - 2.0,
            0.0,
            &Config::default(),
            &mut progress,
        );

        let lines = lines(progress.finish(&solution).expect("in-memory writer"));

        assert_eq!(lines.len(), 11);
        assert!(lines[9].starts_with("iteration 10: "));
        assert_eq!(lines[10], "maximum iterations reached (100)");
    }

    #[test]
    fn reports_zero_derivative() {
        let mut progress = Progress::new(Vec::new());
        let solution = run(&mut progress, 0.0, &Config::default());

        let lines = lines(progress.finish(&solution).expect("in-memory writer"));

        assert_eq!(lines, ["stopped: zero derivative at iteration 0"]);
    }

    #[test]
    fn reports_observer_stop() {
        let solution = Solution {
            status: Status::StoppedByObserver,
            ..run(&mut Progress::new(Vec::new()), 1.5, &Config::default())
        };

        let out = Progress::new(Vec::new())
            .finish(&solution)
            .expect("in-memory writer");

        assert_eq!(
            lines(out),
            [format!("stopped by observer after {} iterations", solution.iters)]
        );
    }

    /// A writer that always fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn finish_returns_first_write_error() {
        let mut progress = Progress::new(Broken);
        let solution = newton::solve(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.5,
            &Config::default(),
            &mut progress,
        );

        let err = progress.finish(&solution).err().expect("write error");

        assert_eq!(err.to_string(), "broken pipe");
    }
}
