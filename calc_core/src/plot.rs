//! # Plot Sampling
//!
//! Produces the discrete `(x, y)` data the presentation layer draws as a line
//! chart. The engine does no rendering; it only samples.
//!
//! ```rust
//! use calc_core::plot::SampleGrid;
//!
//! let xs = SampleGrid::default().xs();
//! assert_eq!(xs.len(), 400);
//! assert_eq!(xs[0], -10.0);
//! assert_eq!(xs[399], 10.0);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of samples across the plot domain
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// Default plot domain, closed interval
pub const DEFAULT_X_RANGE: (f64, f64) = (-10.0, 10.0);

/// Evenly spaced sample positions over a closed interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    pub x_min: f64,
    pub x_max: f64,
    pub count: usize,
}

impl Default for SampleGrid {
    fn default() -> Self {
        SampleGrid {
            x_min: DEFAULT_X_RANGE.0,
            x_max: DEFAULT_X_RANGE.1,
            count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl SampleGrid {
    /// Sample positions, both endpoints included.
    ///
    /// The last position is pinned to `x_max` so accumulated rounding never
    /// moves the endpoint.
    pub fn xs(&self) -> Vec<f64> {
        match self.count {
            0 => Vec::new(),
            1 => vec![self.x_min],
            n => {
                let step = (self.x_max - self.x_min) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.x_max
                        } else {
                            self.x_min + i as f64 * step
                        }
                    })
                    .collect()
            }
        }
    }

    /// Evaluate `f` at every sample position
    pub fn sample<F>(&self, f: F) -> Vec<(f64, f64)>
    where
        F: Fn(f64) -> f64,
    {
        self.xs().into_iter().map(|x| (x, f(x))).collect()
    }
}

/// A labeled sampled curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSample {
    /// Legend label, e.g. `f(x) = 1.0x² + 0.0x + 0.0`
    pub label: String,
    /// Ordered by increasing x
    pub points: Vec<(f64, f64)>,
}

impl PlotSample {
    /// Smallest and largest x, or `None` when empty
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// Smallest and largest y, or `None` when empty
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|&(_, y)| y).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}
