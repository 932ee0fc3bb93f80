//! Solvers for linear systems `A · x = b`.
//!
//! Matrices and vectors are [`ndarray`] views, so callers can pass owned
//! arrays, slices of larger arrays, or transposed views without copying.
//!
//! # Solvers
//!
//! - [`back_substitution`]: upper-triangular systems, solved bottom-up

pub mod back_substitution;
