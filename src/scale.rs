//! Linear scales: affine maps from a data domain to a pixel range, plus
//! "nice" tick generation for gridlines and axis labels.
//!
//! A degenerate domain (`min == max`) maps every value to `range.start`.
//! Nothing here divides by a zero width.

use crate::models::{Domain, Range};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of ticks a single call may produce.
const MAX_TICKS: usize = 1_000;

/// Relative slack (in step units) used when deciding whether an edge tick
/// lies inside the domain.
const TICK_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: Range,
}

impl LinearScale {
    pub fn new(domain: Domain, range: Range) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Pixels per domain unit (signed). Zero for a degenerate domain.
    pub fn scale_factor(&self) -> f64 {
        if self.domain.is_degenerate() {
            0.0
        } else {
            self.range.span() / self.domain.width()
        }
    }

    /// Map a domain value to pixel space. Values outside the domain are not clamped.
    pub fn map(&self, value: f64) -> f64 {
        if self.domain.is_degenerate() {
            return self.range.start;
        }
        self.range.start + (value - self.domain.min) / self.domain.width() * self.range.span()
    }

    /// Map a pixel back to a domain value. A zero-length range or a
    /// degenerate domain yields `domain.min`.
    pub fn invert(&self, pixel: f64) -> f64 {
        let span = self.range.span();
        if span == 0.0 || self.domain.is_degenerate() {
            return self.domain.min;
        }
        self.domain.min + (pixel - self.range.start) / span * self.domain.width()
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain, count)
    }

    /// A copy of this scale whose domain is widened outward to tick-step multiples.
    pub fn nice(&self, count: usize) -> Self {
        Self {
            domain: nice_domain(self.domain, count),
            range: self.range,
        }
    }
}

/// Smallest value of the form `{1, 2, 5} × 10^k` that is `>= raw_step`.
/// Returns `0.0` for non-positive or non-finite input.
pub fn nice_step(raw_step: f64) -> f64 {
    if !(raw_step.is_finite() && raw_step > 0.0) {
        return 0.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Position of the `i`-th multiple of `step`. Sub-unit steps divide by the
/// inverse so decimal ticks come out as 0.2, 0.4, ... rather than 0.6000000000000001.
fn tick_value(i: f64, step: f64) -> f64 {
    if step >= 1.0 {
        i * step
    } else {
        i / (1.0 / step).round()
    }
}

/// Tick values for `domain`, non-decreasing and deterministic.
///
/// - `count == 0` gives no ticks.
/// - A degenerate domain gives the single value `domain.min`.
/// - A domain narrower than one step gives its two edges.
pub fn ticks(domain: Domain, count: usize) -> Vec<f64> {
    if count == 0 || !domain.min.is_finite() || !domain.max.is_finite() {
        return Vec::new();
    }
    if domain.is_degenerate() {
        return vec![domain.min];
    }
    let count = count.min(MAX_TICKS);
    let step = nice_step(domain.width() / count as f64);
    if step == 0.0 {
        return vec![domain.min];
    }

    let first = (domain.min / step - TICK_EPSILON).ceil();
    let last = (domain.max / step + TICK_EPSILON).floor();
    if last < first {
        // No step multiple falls inside; label the edges instead.
        return vec![domain.min, domain.max];
    }
    let n = ((last - first) as usize).min(MAX_TICKS * 3);

    (0..=n)
        .map(|k| {
            let v = tick_value(first + k as f64, step);
            let v = if v.abs() < step * TICK_EPSILON { 0.0 } else { v };
            v.clamp(domain.min, domain.max)
        })
        .collect()
}

/// Widen `domain` outward to the nearest multiples of its tick step.
pub fn nice_domain(domain: Domain, count: usize) -> Domain {
    if count == 0 || domain.is_degenerate() {
        return domain;
    }
    let step = nice_step(domain.width() / count as f64);
    if step == 0.0 {
        return domain;
    }
    Domain::new(
        tick_value((domain.min / step).floor(), step),
        tick_value((domain.max / step).ceil(), step),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_picks_one_two_five() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(16.6), 20.0);
        assert_eq!(nice_step(42.0), 50.0);
        assert_eq!(nice_step(600.0), 1000.0);
        assert_eq!(nice_step(0.0), 0.0);
        assert_eq!(nice_step(f64::NAN), 0.0);
    }

    #[test]
    fn sub_unit_ticks_are_clean_decimals() {
        let t = ticks(Domain::new(0.0, 1.0), 5);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn nice_domain_extends_outward() {
        let d = nice_domain(Domain::new(3.0, 97.0), 5);
        assert_eq!(d, Domain::new(0.0, 100.0));
    }
}
