//! Equal-width histogram binning with density normalization.

use serde::{Deserialize, Serialize};

/// An equal-width histogram over a duration sample.
///
/// Bins span `[min, max]` of the sample, half-open except the last bin,
/// which includes its upper edge. A sample where every value is
/// identical gets its range widened by 0.5 on each side so the single
/// spike still has a drawable extent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    lo: f64,
    hi: f64,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Bin `samples` into `bins` equal-width bins.
    ///
    /// Returns `None` when there is nothing to bin: an empty sample or
    /// a zero bin count.
    pub fn from_samples(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in samples {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &v in samples {
            // The max sample lands exactly on `bins`; clamp it into the
            // closed last bin.
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self {
            lo,
            hi,
            counts,
            total: samples.len() as u64,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// Inclusive range the histogram spans.
    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Lower and upper edge of bin `idx`.
    pub fn bin_edges(&self, idx: usize) -> (f64, f64) {
        let width = self.bin_width();
        (
            self.lo + idx as f64 * width,
            self.lo + (idx + 1) as f64 * width,
        )
    }

    /// Per-bin probability density: count / (total * bin width).
    ///
    /// The densities integrate to 1 over the histogram range.
    pub fn densities(&self) -> Vec<f64> {
        let norm = self.total as f64 * self.bin_width();
        self.counts.iter().map(|&c| c as f64 / norm).collect()
    }

    /// Index of the bin containing `marker`, or `None` when the marker
    /// falls outside the histogram range.
    pub fn marker_bin(&self, marker: f64) -> Option<usize> {
        if marker < self.lo || marker > self.hi {
            return None;
        }
        let idx = ((marker - self.lo) / self.bin_width()) as usize;
        Some(idx.min(self.counts.len() - 1))
    }
}
