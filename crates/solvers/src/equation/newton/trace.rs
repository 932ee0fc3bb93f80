/// The iterates and step sizes recorded during a Newton solve.
///
/// `iterates` starts with the initial guess and gains one entry per completed
/// iteration; `step_sizes[k]` is `|iterates[k + 1] - iterates[k]|`. There is
/// always exactly one more iterate than step size.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    iterates: Vec<f64>,
    step_sizes: Vec<f64>,
}

impl Trace {
    /// Starts a trace at the initial guess.
    pub(super) fn new(x0: f64) -> Self {
        Self {
            iterates: vec![x0],
            step_sizes: Vec::new(),
        }
    }

    /// Records a completed iteration.
    pub(super) fn push(&mut self, next: f64, step: f64) {
        self.iterates.push(next);
        self.step_sizes.push(step);
    }

    /// Returns all iterates, starting with the initial guess.
    #[must_use]
    pub fn iterates(&self) -> &[f64] {
        &self.iterates
    }

    /// Returns the step size of each completed iteration.
    #[must_use]
    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    /// Returns the initial guess.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.iterates[0]
    }

    /// Returns the most recent iterate.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.iterates[self.iterates.len() - 1]
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.step_sizes.len()
    }

    /// Returns true if no iteration completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.step_sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_trace_holds_only_initial_guess() {
        let trace = Trace::new(1.5);

        assert_eq!(trace.iterates(), [1.5]);
        assert!(trace.step_sizes().is_empty());
        assert!(trace.is_empty());
        assert_relative_eq!(trace.initial(), 1.5);
        assert_relative_eq!(trace.last(), 1.5);
    }

    #[test]
    fn push_keeps_lengths_in_step() {
        let mut trace = Trace::new(2.0);
        trace.push(1.5, 0.5);
        trace.push(1.25, 0.25);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.iterates(), [2.0, 1.5, 1.25]);
        assert_eq!(trace.step_sizes(), [0.5, 0.25]);
        assert_relative_eq!(trace.last(), 1.25);
    }
}
