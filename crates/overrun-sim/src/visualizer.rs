//! Rendering seam for duration histograms.

/// Renders a probability-density histogram of a duration sample with a
/// vertical marker at the deadline.
///
/// Implementations own the output policy (terminal, file, nothing at
/// all); the estimator itself never renders. Callers decide whether and
/// where a run's distribution is drawn.
pub trait Visualizer {
    /// Render `samples` as a histogram with a marker line at `marker`.
    ///
    /// With `density` set, bars show probability density rather than
    /// raw counts.
    fn render_histogram(&self, samples: &[f64], marker: f64, density: bool);
}

/// Visualizer that renders nothing.
///
/// For tests and headless callers that only want the estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn render_histogram(&self, _samples: &[f64], _marker: f64, _density: bool) {}
}
