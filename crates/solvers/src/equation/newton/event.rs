/// Event emitted by the Newton solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A Newton update was taken from `x` to `next`.
    ///
    /// An observer action is ignored when this step already converged.
    Stepped {
        /// The 1-based iteration that produced `next`.
        iter: usize,

        /// The iterate the update started from.
        x: f64,

        /// `f(x)`.
        residual: f64,

        /// `f'(x)`.
        derivative: f64,

        /// The new iterate, `x - f(x) / f'(x)`.
        next: f64,

        /// The step size, `|next - x|`.
        step: f64,
    },

    /// The derivative at `x` is too small to take an update.
    ///
    /// The solver stops after emitting this event, whatever the observer returns.
    FlatDerivative {
        /// Number of iterations completed before the flat derivative was hit.
        iter: usize,

        /// The iterate where the derivative vanished.
        x: f64,

        /// `f(x)`.
        residual: f64,

        /// `f'(x)`.
        derivative: f64,
    },
}

impl Event {
    /// Returns the iteration counter carried by the event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Stepped { iter, .. } | Self::FlatDerivative { iter, .. } => *iter,
        }
    }

    /// Returns the iterate the solver evaluated.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Stepped { x, .. } | Self::FlatDerivative { x, .. } => *x,
        }
    }

    /// Returns `f(x)` at the evaluated iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Self::Stepped { residual, .. } | Self::FlatDerivative { residual, .. } => *residual,
        }
    }

    /// Returns the step size, or `None` if no step was taken.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::Stepped { step, .. } => Some(*step),
            Self::FlatDerivative { .. } => None,
        }
    }
}
