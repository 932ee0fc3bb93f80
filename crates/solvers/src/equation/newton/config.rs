use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    step_tol: f64,
    derivative_tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_tol must be finite and non-negative")]
    StepTol,

    #[error("derivative_tol must be finite and non-negative")]
    DerivativeTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-10, 1e-15).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// The solver converges once a step `|x_{n+1} - x_n|` is strictly below
    /// `step_tol`, and stops when `|f'(x)|` is strictly below
    /// `derivative_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, step_tol: f64, derivative_tol: f64) -> Result<Self, ConfigError> {
        if !step_tol.is_finite() || step_tol < 0.0 {
            return Err(ConfigError::StepTol);
        }
        if !derivative_tol.is_finite() || derivative_tol < 0.0 {
            return Err(ConfigError::DerivativeTol);
        }

        Ok(Self {
            max_iters,
            step_tol,
            derivative_tol,
        })
    }

    /// Returns a copy of the default config with a different step tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_tol` is negative or non-finite.
    pub fn with_step_tol(step_tol: f64) -> Result<Self, ConfigError> {
        let default = Self::default();
        Self::new(default.max_iters, step_tol, default.derivative_tol)
    }

    /// Returns the maximum number of Newton updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step size below which the solver has converged.
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    /// Returns the derivative magnitude below which the solver gives up.
    #[must_use]
    pub fn derivative_tol(&self) -> f64 {
        self.derivative_tol
    }
}
