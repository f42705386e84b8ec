//! Chart layout configuration, fixed at construction time.

use crate::error::{PodstatsError, Result};
use crate::models::{Range, Rect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 48.0,
            left: 64.0,
        }
    }
}

/// Layout and interaction limits for one chart.
///
/// Missing fields in a JSON config fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Upper bound for the zoom level of interactive charts (>= 1).
    pub max_zoom: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Locale tag for tick labels (`en`, `de`, `fr`, ...).
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 420.0,
            margins: Margins::default(),
            max_zoom: 8.0,
            tick_count: 6,
            locale: "en".to_string(),
        }
    }
}

impl ChartConfig {
    /// Reject layouts that leave no drawing area or break the zoom bounds.
    pub fn validate(&self) -> Result<()> {
        let m = &self.margins;
        let numbers = [
            ("width", self.width),
            ("height", self.height),
            ("margins.top", m.top),
            ("margins.right", m.right),
            ("margins.bottom", m.bottom),
            ("margins.left", m.left),
            ("max_zoom", self.max_zoom),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            let msg = format!("{name} must be finite");
            return Err(PodstatsError::InvalidConfig(msg));
        }
        if let Some((name, _)) = numbers[2..6].iter().find(|(_, v)| *v < 0.0) {
            let msg = format!("{name} must not be negative");
            return Err(PodstatsError::InvalidConfig(msg));
        }
        if self.width <= m.left + m.right {
            return Err(PodstatsError::InvalidConfig(format!(
                "width {} leaves no room between margins {} and {}",
                self.width, m.left, m.right
            )));
        }
        if self.height <= m.top + m.bottom {
            return Err(PodstatsError::InvalidConfig(format!(
                "height {} leaves no room between margins {} and {}",
                self.height, m.top, m.bottom
            )));
        }
        if self.max_zoom < 1.0 {
            return Err(PodstatsError::InvalidConfig(format!(
                "max_zoom must be at least 1, got {}",
                self.max_zoom
            )));
        }
        Ok(())
    }

    /// Plot area: the chart minus its margins.
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.margins.left,
            y: self.margins.top,
            width: self.width - self.margins.left - self.margins.right,
            height: self.height - self.margins.top - self.margins.bottom,
        }
    }

    /// Horizontal pixel range, left to right.
    pub fn x_range(&self) -> Range {
        let inner = self.inner();
        Range::new(inner.x, inner.right())
    }

    /// Vertical pixel range, bottom to top (screen y grows downward).
    pub fn y_range(&self) -> Range {
        let inner = self.inner();
        Range::new(inner.bottom(), inner.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ChartConfig::default();
        cfg.validate().unwrap();
        assert_eq!(
            cfg.inner(),
            Rect {
                x: 64.0,
                y: 20.0,
                width: 636.0,
                height: 352.0,
            }
        );
        assert_eq!(cfg.y_range(), Range::new(372.0, 20.0));
    }

    #[test]
    fn rejects_margins_wider_than_chart() {
        let cfg = ChartConfig {
            width: 80.0,
            ..ChartConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, PodstatsError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_max_zoom_below_one() {
        let cfg = ChartConfig {
            max_zoom: 0.5,
            ..ChartConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{"width": 900, "max_zoom": 4}"#).unwrap();
        assert_eq!(cfg.width, 900.0);
        assert_eq!(cfg.max_zoom, 4.0);
        assert_eq!(cfg.height, 420.0);
        assert_eq!(cfg.margins, Margins::default());
    }
}
