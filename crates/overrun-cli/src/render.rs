//! Terminal histogram rendering.

use std::fmt::Write;

use overrun_sim::{Histogram, Visualizer};

/// Width of the histogram bars (characters).
const HIST_BAR_WIDTH: usize = 40;

/// Renders the duration histogram as text on stderr.
///
/// One row per bin with a `#` bar scaled to the tallest bin, and a
/// `<- deadline` tag on the bin the marker falls in. A marker outside
/// the sampled range gets a note instead of a tag.
pub struct TextVisualizer {
    bins: usize,
}

impl TextVisualizer {
    pub fn new(bins: usize) -> Self {
        Self { bins }
    }
}

impl Visualizer for TextVisualizer {
    fn render_histogram(&self, samples: &[f64], marker: f64, density: bool) {
        if let Some(card) = histogram_card(samples, marker, density, self.bins) {
            eprint!("{card}");
        }
    }
}

/// Build the text card for a histogram.
///
/// Returns `None` when there is nothing to draw: an empty sample or a
/// zero bin count.
fn histogram_card(samples: &[f64], marker: f64, density: bool, bins: usize) -> Option<String> {
    let hist = Histogram::from_samples(samples, bins)?;
    let values: Vec<f64> = if density {
        hist.densities()
    } else {
        hist.counts().iter().map(|&c| c as f64).collect()
    };
    let max_value = values.iter().copied().fold(0.0_f64, f64::max).max(1e-12);
    let marker_bin = hist.marker_bin(marker);

    let mut out = String::with_capacity(1024);
    let label = if density { "density" } else { "count" };
    let _ = writeln!(
        out,
        "total duration ({} per bin, n = {})",
        label,
        samples.len()
    );
    for (idx, value) in values.iter().enumerate() {
        let (lo, hi) = hist.bin_edges(idx);
        let bar_len = ((value / max_value) * HIST_BAR_WIDTH as f64).round() as usize;
        let bar: String = "#".repeat(bar_len);
        let pad: String = " ".repeat(HIST_BAR_WIDTH.saturating_sub(bar_len));
        let tag = if marker_bin == Some(idx) {
            "  <- deadline"
        } else {
            ""
        };
        let _ = writeln!(out, "  [{lo:>7.2}, {hi:>7.2}) |{bar}{pad}| {value:.4}{tag}");
    }
    if marker_bin.is_none() {
        let (lo, hi) = hist.range();
        let side = if marker < lo { "below" } else { "above" };
        let _ = writeln!(
            out,
            "  deadline {marker:.2} is {side} the sampled range [{lo:.2}, {hi:.2}]"
        );
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / 10.0).collect()
    }

    #[test]
    fn card_tags_the_deadline_bin() {
        let card = histogram_card(&ramp(100), 5.0, true, 10).unwrap();
        let tagged: Vec<&str> = card
            .lines()
            .filter(|line| line.ends_with("<- deadline"))
            .collect();
        assert_eq!(tagged.len(), 1);
        // 100 samples over [0, 9.9) in 10 bins: the marker bin starts at 4.95
        assert!(tagged[0].contains("4.95"));
    }

    #[test]
    fn card_notes_marker_outside_range() {
        let card = histogram_card(&ramp(100), 42.0, true, 10).unwrap();
        assert!(!card.contains("<- deadline"));
        assert!(card.contains("deadline 42.00 is above the sampled range"));
    }

    #[test]
    fn bars_never_exceed_the_configured_width() {
        let card = histogram_card(&ramp(1000), 5.0, true, 20).unwrap();
        for line in card.lines().filter(|line| line.contains('|')) {
            let hashes = line.chars().filter(|&c| c == '#').count();
            assert!(hashes <= HIST_BAR_WIDTH, "bar too wide in {line:?}");
        }
    }

    #[test]
    fn count_mode_prints_raw_counts() {
        let card = histogram_card(&ramp(100), 5.0, false, 10).unwrap();
        assert!(card.contains("count per bin"));
        // 100 evenly-spread samples over 10 bins
        assert!(card.contains("10.0000"));
    }

    #[test]
    fn empty_sample_renders_nothing() {
        assert!(histogram_card(&[], 1.0, true, 10).is_none());
    }
}
