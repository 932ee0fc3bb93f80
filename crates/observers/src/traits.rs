//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can watch any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasStep`]: events that may carry a step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numera_core::Observer;
//! use numera_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use numera_solvers::equation::newton;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that may carry a step size.
pub trait HasStep {
    /// Returns the step size, or `None` when the event took no step.
    fn step(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        newton::Event::residual(self)
    }
}

impl HasStep for newton::Event {
    fn step(&self) -> Option<f64> {
        newton::Event::step(self)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
