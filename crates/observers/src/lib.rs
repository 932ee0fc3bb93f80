//! Reusable observers for Numera solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! reporting on iterative solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Progress`]: writes per-iteration progress and a final status line
//!
//! # Features
//!
//! - `plot`: Enables [`ConvergencePlot`] for viewing a Newton trace via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: numera_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;

pub use progress::Progress;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{ConvergencePlot, ShowConfig};
