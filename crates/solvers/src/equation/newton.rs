//! Newton's method for scalar root finding.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration replaces `f` by its tangent line and
//! jumps to the tangent's root:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The solver stops when:
//!
//! - a step `|x_{n+1} - x_n|` is below [`Config::step_tol`] ([`Status::Converged`]),
//! - `|f'(x_n)|` is below [`Config::derivative_tol`] ([`Status::DerivativeZero`]),
//! - [`Config::max_iters`] updates have been taken ([`Status::MaxIters`]), or
//! - the observer returns [`Action::StopEarly`] ([`Status::StoppedByObserver`]).
//!
//! # When to Use
//!
//! Newton's method converges quadratically near a simple root when `f` is
//! twice continuously differentiable and `x0` is close enough. None of this is
//! checked, and there is no bracketing fallback: a poor starting point can
//! diverge or cycle, which only the iteration limit or the derivative guard
//! will catch.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration: [`Event::Stepped`] after each
//! update, or [`Event::FlatDerivative`] right before giving up on a vanishing
//! derivative. Every solve returns a [`Trace`] of the iterates and step sizes,
//! whatever the observer does.

mod action;
mod config;
mod event;
mod solution;
mod trace;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};
pub use trace::Trace;

use numera_core::Observer;

/// Finds a root of `f` with Newton's method.
///
/// `f_prime` must return the derivative of `f`. The observer receives an
/// [`Event`] for each iteration; see the [module docs](self) for stop
/// conditions.
pub fn solve<F, D, Obs>(f: F, f_prime: D, x0: f64, config: &Config, mut observer: Obs) -> Solution
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut trace = Trace::new(x0);
    let mut x = x0;

    for n in 0..config.max_iters() {
        let residual = f(x);
        let derivative = f_prime(x);

        if derivative.abs() < config.derivative_tol() {
            // No update is possible, so the action is ignored.
            observer.observe(&Event::FlatDerivative {
                iter: n,
                x,
                residual,
                derivative,
            });
            return Solution {
                status: Status::DerivativeZero,
                root: None,
                iters: n,
                trace,
            };
        }

        let next = x - residual / derivative;
        let step = (next - x).abs();
        trace.push(next, step);

        let iter = n + 1;
        let event = Event::Stepped {
            iter,
            x,
            residual,
            derivative,
            next,
            step,
        };

        if step < config.step_tol() {
            observer.observe(&event);
            return Solution {
                status: Status::Converged,
                root: Some(next),
                iters: iter,
                trace,
            };
        }

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution {
                status: Status::StoppedByObserver,
                root: Some(next),
                iters: iter,
                trace,
            };
        }

        x = next;
    }

    Solution {
        status: Status::MaxIters,
        root: Some(x),
        iters: config.max_iters(),
        trace,
    }
}

/// Finds a root of `f` with Newton's method without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<F, D>(f: F, f_prime: D, x0: f64, config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, f_prime, x0, config, ())
}
