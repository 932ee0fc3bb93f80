//! Solvers for scalar equations, finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton's method using the analytic derivative

pub mod newton;
