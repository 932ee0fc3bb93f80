//! Convergence chart for Newton solves.
//!
//! See [`ConvergencePlot`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Points};
use numera_solvers::equation::newton::Trace;

/// Configuration for rendering a [`ConvergencePlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Newton: x² = 2").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend on both panels.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-panel chart of a Newton [`Trace`].
///
/// - Left panel: each iterate `x_n` against its iteration `n`, plus a
///   horizontal line at the exact root when one is given.
/// - Right panel: `log₁₀ |x_{n+1} - x_n|` against `n`, starting at 1, which
///   shows the quadratic convergence as a steepening slope. Zero steps have no
///   logarithm and are skipped.
///
/// # Example
///
/// ```ignore
/// let solution = newton::solve_unobserved(f, f_prime, 1.5, &config);
/// ConvergencePlot::from_trace(&solution.trace)
///     .exact_root(std::f64::consts::SQRT_2)
///     .show(ShowConfig::new().title("Newton: x² = 2").legend())?;
/// ```
pub struct ConvergencePlot {
    iterates: Vec<[f64; 2]>,
    log_steps: Vec<[f64; 2]>,
    exact_root: Option<f64>,
}

impl ConvergencePlot {
    /// Collects the points to draw from a trace.
    #[must_use]
    pub fn from_trace(trace: &Trace) -> Self {
        Self {
            iterates: iterate_points(trace.iterates()),
            log_steps: log_step_points(trace.step_sizes()),
            exact_root: None,
        }
    }

    /// Marks the exact root on the iterate panel.
    #[must_use]
    pub fn exact_root(mut self, root: f64) -> Self {
        self.exact_root = Some(root);
        self
    }

    /// Opens a blocking egui window displaying both panels.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let legend = config.legend;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(ConvergenceApp { plot: self, legend }))),
        )
    }
}

/// Pairs each iterate with its iteration number, starting at 0.
#[allow(clippy::cast_precision_loss)]
fn iterate_points(iterates: &[f64]) -> Vec<[f64; 2]> {
    iterates
        .iter()
        .enumerate()
        .map(|(n, &x)| [n as f64, x])
        .collect()
}

/// Pairs each step's base-10 log with its iteration number, starting at 1.
#[allow(clippy::cast_precision_loss)]
fn log_step_points(steps: &[f64]) -> Vec<[f64; 2]> {
    steps
        .iter()
        .enumerate()
        .filter(|(_, step)| **step > 0.0)
        .map(|(k, &step)| [(k + 1) as f64, step.log10()])
        .collect()
}

/// The egui [`eframe::App`] that renders a [`ConvergencePlot`].
struct ConvergenceApp {
    plot: ConvergencePlot,
    legend: bool,
}

impl eframe::App for ConvergenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                let mut iterates = Plot::new("iterates")
                    .x_axis_label("iteration n")
                    .y_axis_label("x_n");
                let mut steps = Plot::new("step_sizes")
                    .x_axis_label("iteration n")
                    .y_axis_label("log₁₀ |x_{n+1} - x_n|");
                if self.legend {
                    iterates = iterates.legend(Legend::default());
                    steps = steps.legend(Legend::default());
                }

                columns[0].heading("Convergence to the root");
                iterates.show(&mut columns[0], |plot_ui| {
                    let points = &self.plot.iterates;
                    plot_ui.line(Line::new(PlotPoints::from(points.clone())).name("x_n"));
                    plot_ui.points(Points::new(PlotPoints::from(points.clone())).radius(3.0));
                    if let Some(root) = self.plot.exact_root {
                        plot_ui.hline(HLine::new(root).name(format!("exact root = {root:.6}")));
                    }
                });

                columns[1].heading("Step size (quadratic convergence)");
                steps.show(&mut columns[1], |plot_ui| {
                    let points = &self.plot.log_steps;
                    plot_ui.line(Line::new(PlotPoints::from(points.clone())).name("|dx|"));
                    plot_ui.points(Points::new(PlotPoints::from(points.clone())).radius(3.0));
                });
            });
        });
    }
}
