//! Core traits for the Numera numerical methods.
//!
//! This crate holds the abstraction that solvers and observers share:
//!
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;

pub use observer::Observer;
