//! Ordinary least-squares trend lines.

use crate::models::{Domain, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Trend endpoints at the two edges of `domain_x`, in data space.
    pub fn segment(&self, domain_x: Domain) -> ((f64, f64), (f64, f64)) {
        (
            (domain_x.min, self.predict(domain_x.min)),
            (domain_x.max, self.predict(domain_x.max)),
        )
    }
}

/// Least-squares fit of `y = slope·x + intercept`.
///
/// Sums are taken over deviations from the means, so a large x offset with a
/// small spread still fits exactly. Degenerate input (no points, one point,
/// or all x equal) gives `slope = 0` and `intercept = mean(y)`, or `0` when
/// there are no points.
pub fn fit(points: &[Point]) -> RegressionResult {
    let Some(first) = points.first() else {
        return RegressionResult::default();
    };
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let flat = RegressionResult {
        slope: 0.0,
        intercept: mean_y,
    };
    if points.iter().all(|p| p.x == first.x) {
        return flat;
    }

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for p in points {
        let dx = p.x - mean_x;
        sxx += dx * dx;
        sxy += dx * (p.y - mean_y);
    }
    if sxx == 0.0 {
        return flat;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    if slope.is_finite() && intercept.is_finite() {
        RegressionResult { slope, intercept }
    } else {
        flat
    }
}
