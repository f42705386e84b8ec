//! Renderer input: everything needed to paint one chart, already in pixels.

use crate::charts::ChartKind;
use crate::models::{PixelPoint, Rect, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickLabel {
    pub value: f64,
    pub pixel: f64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    Dot {
        center: PixelPoint,
        radius: f64,
        series: usize,
        label: String,
        highlighted: bool,
    },
    Bar {
        rect: Rect,
        series: usize,
        label: String,
        highlighted: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polyline {
    pub series: usize,
    pub points: Vec<PixelPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tooltip {
    pub origin: PixelPoint,
    pub size: Size,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartFrame {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: f64,
    pub height: f64,
    pub inner: Rect,
    pub series_names: Vec<String>,
    pub x_ticks: Vec<TickLabel>,
    pub y_ticks: Vec<TickLabel>,
    pub marks: Vec<Mark>,
    pub lines: Vec<Polyline>,
    pub trend: Option<Segment>,
    pub tooltip: Option<Tooltip>,
    pub zoom_level: f64,
}

/// Clip a segment to `rect` (Liang–Barsky). `None` when nothing of it is inside.
pub fn clip_segment(seg: Segment, rect: Rect) -> Option<Segment> {
    let dx = seg.to.x - seg.from.x;
    let dy = seg.to.y - seg.from.y;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let edges = [
        (-dx, seg.from.x - rect.x),
        (dx, rect.right() - seg.from.x),
        (-dy, seg.from.y - rect.y),
        (dy, rect.bottom() - seg.from.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some(Segment {
        from: PixelPoint::new(seg.from.x + t0 * dx, seg.from.y + t0 * dy),
        to: PixelPoint::new(seg.from.x + t1 * dx, seg.from.y + t1 * dy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }

    #[test]
    fn clip_keeps_inside_segment() {
        let s = Segment {
            from: PixelPoint::new(10.0, 10.0),
            to: PixelPoint::new(90.0, 50.0),
        };
        assert_eq!(clip_segment(s, rect()), Some(s));
    }

    #[test]
    fn clip_trims_crossing_segment() {
        let s = Segment {
            from: PixelPoint::new(-50.0, 50.0),
            to: PixelPoint::new(150.0, 50.0),
        };
        let c = clip_segment(s, rect()).unwrap();
        assert_eq!(c.from, PixelPoint::new(0.0, 50.0));
        assert_eq!(c.to, PixelPoint::new(100.0, 50.0));
    }

    #[test]
    fn clip_drops_outside_segment() {
        let s = Segment {
            from: PixelPoint::new(-50.0, -10.0),
            to: PixelPoint::new(150.0, -1.0),
        };
        assert_eq!(clip_segment(s, rect()), None);
    }
}
