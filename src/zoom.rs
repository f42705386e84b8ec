//! Interactive pan/zoom over a fixed base domain.
//!
//! The controller owns a [`ZoomState`] and only changes it through
//! [`ZoomPanController::zoom`], [`ZoomPanController::pan`] and
//! [`ZoomPanController::reset`]. After every transition:
//!
//! - `1 <= zoom_level <= max_zoom`
//! - each visible domain lies inside its base domain and has width
//!   `base_width / zoom_level`
//!
//! The same zoom level applies to both axes.

use crate::models::{Domain, Range};
use crate::scale::LinearScale;
use log::debug;
use serde::{Deserialize, Serialize};

/// Wheel delta units per halving/doubling exponent step: `factor = 2^(-delta · 0.002)`,
/// so a classic 100-unit notch zooms by about 13%.
pub const WHEEL_SENSITIVITY: f64 = 0.002;

/// Zoom multiplier for a wheel delta. Negative deltas (scrolling up) zoom in.
pub fn wheel_factor(delta: f64) -> f64 {
    2f64.powf(-delta * WHEEL_SENSITIVITY)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZoomState {
    pub domain_x: Domain,
    pub domain_y: Domain,
    pub zoom_level: f64,
}

#[derive(Debug, Clone)]
pub struct ZoomPanController {
    base_x: Domain,
    base_y: Domain,
    range_x: Range,
    range_y: Range,
    max_zoom: f64,
    state: ZoomState,
}

impl ZoomPanController {
    /// A controller showing the full base domains. A `max_zoom` below 1
    /// (or NaN) is treated as 1, which disables zooming.
    pub fn new(
        base_x: Domain,
        base_y: Domain,
        range_x: Range,
        range_y: Range,
        max_zoom: f64,
    ) -> Self {
        let max_zoom = if max_zoom >= 1.0 { max_zoom } else { 1.0 };
        Self {
            base_x,
            base_y,
            range_x,
            range_y,
            max_zoom,
            state: ZoomState {
                domain_x: base_x,
                domain_y: base_y,
                zoom_level: 1.0,
            },
        }
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    pub fn zoom_level(&self) -> f64 {
        self.state.zoom_level
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn base_x(&self) -> Domain {
        self.base_x
    }

    pub fn base_y(&self) -> Domain {
        self.base_y
    }

    /// Scales for the current visible window.
    pub fn scales(&self) -> (LinearScale, LinearScale) {
        (
            LinearScale::new(self.state.domain_x, self.range_x),
            LinearScale::new(self.state.domain_y, self.range_y),
        )
    }

    /// Wheel gesture at pixel `(x, y)`. Huge deltas saturate at `max_zoom` or 1.
    pub fn zoom(&mut self, delta: f64, x: f64, y: f64) {
        if delta.is_nan() {
            return;
        }
        self.zoom_by(wheel_factor(delta), x, y);
    }

    /// Multiply the zoom level by `factor`, keeping the data under `(x, y)` in place.
    ///
    /// An overflowed factor (`inf`) lands on `max_zoom`, an underflowed one (`0`) on 1.
    pub fn zoom_by(&mut self, factor: f64, x: f64, y: f64) {
        if factor.is_nan() || factor < 0.0 || !(x.is_finite() && y.is_finite()) {
            return;
        }
        let level = (self.state.zoom_level * factor).clamp(1.0, self.max_zoom);
        if level == self.state.zoom_level {
            return;
        }

        let domain_x = zoom_axis(
            self.base_x,
            self.state.domain_x,
            self.range_x,
            x,
            self.base_x.width() / level,
        );
        let domain_y = zoom_axis(
            self.base_y,
            self.state.domain_y,
            self.range_y,
            y,
            self.base_y.width() / level,
        );
        self.state = ZoomState {
            domain_x,
            domain_y,
            zoom_level: level,
        };
        debug!(
            "zoom -> level {:.3}, x {:?}, y {:?}",
            level, self.state.domain_x, self.state.domain_y
        );
    }

    /// Drag by a pixel delta. Content follows the pointer; no effect at zoom level 1.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if self.state.zoom_level <= 1.0 || !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let level = self.state.zoom_level;
        self.state.domain_x = pan_axis(self.base_x, self.state.domain_x, self.range_x, dx, level);
        self.state.domain_y = pan_axis(self.base_y, self.state.domain_y, self.range_y, dy, level);
        debug!(
            "pan by ({dx}, {dy}) -> x {:?}, y {:?}",
            self.state.domain_x, self.state.domain_y
        );
    }

    /// Back to zoom level 1 and the base domains.
    pub fn reset(&mut self) {
        self.state = ZoomState {
            domain_x: self.base_x,
            domain_y: self.base_y,
            zoom_level: 1.0,
        };
        debug!("zoom reset");
    }
}

/// New window of `width` on one axis, anchored so the value under `pointer`
/// stays under `pointer`.
fn zoom_axis(base: Domain, current: Domain, range: Range, pointer: f64, width: f64) -> Domain {
    let anchor = LinearScale::new(current, range).invert(pointer);
    let span = range.span();
    let t = if span == 0.0 {
        0.5
    } else {
        (pointer - range.start) / span
    };
    clamp_window(base, anchor - t * width, width)
}

fn pan_axis(base: Domain, current: Domain, range: Range, pixel_delta: f64, level: f64) -> Domain {
    let factor = LinearScale::new(current, range).scale_factor();
    if factor == 0.0 {
        return current;
    }
    let domain_delta = pixel_delta / factor;
    clamp_window(base, current.min - domain_delta, base.width() / level)
}

/// Slide a window of `width` starting at `min` back inside `base`.
fn clamp_window(base: Domain, min: f64, width: f64) -> Domain {
    if width.is_nan() || width >= base.width() {
        return base;
    }
    let hi = (base.max - width).max(base.min);
    let min = min.clamp(base.min, hi);
    Domain {
        min,
        max: (min + width).min(base.max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_window_slides_back_inside() {
        let base = Domain::new(0.0, 10.0);
        assert_eq!(clamp_window(base, -3.0, 4.0), Domain::new(0.0, 4.0));
        assert_eq!(clamp_window(base, 9.0, 4.0), Domain::new(6.0, 10.0));
        assert_eq!(clamp_window(base, 2.0, 40.0), base);
    }

    #[test]
    fn wheel_factor_direction() {
        assert!(wheel_factor(-100.0) > 1.0);
        assert!(wheel_factor(100.0) < 1.0);
        assert_eq!(wheel_factor(0.0), 1.0);
    }
}
