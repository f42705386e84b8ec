use serde::{Deserialize, Serialize};

/// One episode row as it appears in the source table.
///
/// Column names in the CSV header equal the field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: String,
    pub title: String,
    /// Episode length in minutes.
    pub duration_min: f64,
    /// Share of plays listened to the end, in percent.
    pub completion_rate: f64,
    pub new_listeners: f64,
    pub returning_listeners: f64,
    /// Cumulative subscriber count after this episode.
    pub subscribers: f64,
    pub social_shares: f64,
    pub subscribers_gained: f64,
}

impl Episode {
    /// Numeric fields paired with their column names, in header order.
    pub fn metrics(&self) -> [(&'static str, f64); 7] {
        [
            ("duration_min", self.duration_min),
            ("completion_rate", self.completion_rate),
            ("new_listeners", self.new_listeners),
            ("returning_listeners", self.returning_listeners),
            ("subscribers", self.subscribers),
            ("social_shares", self.social_shares),
            ("subscribers_gained", self.subscribers_gained),
        ]
    }

    /// Display label used for marks and tooltips, e.g. "E12 · Scaling Rust".
    pub fn label(&self) -> String {
        match (self.id.trim(), self.title.trim()) {
            ("", t) => t.to_string(),
            (i, "") => i.to_string(),
            (i, t) => format!("{i} · {t}"),
        }
    }
}

/// A derived data point, one per episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Point {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// Closed interval of data values. `min <= max` always holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Build a domain from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Extent of a set of values; `[0, 0]` when there are none.
    pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo > hi {
            Self { min: 0.0, max: 0.0 }
        } else {
            Self { min: lo, max: hi }
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Same domain widened by `pad` on both sides.
    pub fn padded(&self, pad: f64) -> Self {
        Self::new(self.min - pad, self.max + pad)
    }
}

/// Pixel interval. `start` maps from `Domain::min`, `end` from `Domain::max`,
/// so vertical ranges usually run bottom to top (`start > end`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed length `end - start`.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, px: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        px >= lo && px <= hi
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned pixel rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_nothing_is_zero_domain() {
        let d = Domain::extent(Vec::<f64>::new());
        assert_eq!(d, Domain { min: 0.0, max: 0.0 });
        assert!(d.is_degenerate());
    }

    #[test]
    fn domain_new_orders_bounds() {
        let d = Domain::new(5.0, -1.0);
        assert_eq!((d.min, d.max), (-1.0, 5.0));
    }

    #[test]
    fn label_skips_empty_parts() {
        let mut e = Episode {
            id: "E1".into(),
            title: "Pilot".into(),
            duration_min: 30.0,
            completion_rate: 70.0,
            new_listeners: 10.0,
            returning_listeners: 5.0,
            subscribers: 100.0,
            social_shares: 3.0,
            subscribers_gained: 8.0,
        };
        assert_eq!(e.label(), "E1 · Pilot");
        e.title = "  ".into();
        assert_eq!(e.label(), "E1");
    }
}
