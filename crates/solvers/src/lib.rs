//! Numerical solvers for the Numera workspace.
//!
//! # Modules
//!
//! - [`linear`]: direct solvers for triangular linear systems
//! - [`equation`]: iterative root finding for scalar equations

pub mod equation;
pub mod linear;
