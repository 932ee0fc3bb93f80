use super::Trace;

/// Indicates how the Newton solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A step fell below the configured step tolerance.
    Converged,

    /// The derivative became too small to take a step.
    DerivativeZero,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
///
/// `root` is `None` only for [`Status::DerivativeZero`]. For
/// [`Status::MaxIters`] it holds the last iterate, which is a best effort and
/// not a converged root, so check `status` before trusting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The root estimate, if the solver produced one.
    pub root: Option<f64>,

    /// Number of Newton updates performed.
    pub iters: usize,

    /// Every iterate and step size, for reporting and plotting.
    pub trace: Trace,
}

impl Solution {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
