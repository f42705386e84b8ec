//! Tooltip box placement inside a chart's inner bounds.

use crate::models::{PixelPoint, Rect, Size};
use crate::text::{estimate_text_width, wrap_to_width};

/// Gap between the hovered point and the nearest tooltip corner.
pub const TOOLTIP_OFFSET: f64 = 8.0;
pub const TOOLTIP_FONT_PX: f64 = 12.0;
pub const TOOLTIP_LINE_HEIGHT: f64 = 16.0;
pub const TOOLTIP_PADDING: f64 = 6.0;
/// Widest a tooltip title line may get before it wraps.
pub const TOOLTIP_MAX_TEXT_WIDTH: f64 = 220.0;

/// Top-left corner for a tooltip box of `size` next to `point`.
///
/// Prefers right-and-above. Flips to the left when the box would cross the
/// right edge, moves below when it would cross the top edge, and finally
/// clamps the origin to the inner minimum on both axes.
pub fn place(point: PixelPoint, size: Size, inner: Rect) -> PixelPoint {
    let mut x = point.x + TOOLTIP_OFFSET;
    let mut y = point.y - TOOLTIP_OFFSET - size.height;

    if x + size.width > inner.right() {
        x = point.x - TOOLTIP_OFFSET - size.width;
    }
    if y < inner.y {
        y = point.y + TOOLTIP_OFFSET;
    }

    PixelPoint::new(x.max(inner.x), y.max(inner.y))
}

/// Box size needed to show `lines` at `font_px`, padding included.
pub fn estimate_box(lines: &[String], font_px: f64) -> Size {
    let text_w = lines
        .iter()
        .map(|l| estimate_text_width(l, font_px))
        .fold(0.0, f64::max);
    Size {
        width: text_w + 2.0 * TOOLTIP_PADDING,
        height: lines.len() as f64 * TOOLTIP_LINE_HEIGHT + 2.0 * TOOLTIP_PADDING,
    }
}

/// Tooltip text: the wrapped title followed by one `name: value` row per entry.
pub fn compose_lines(title: &str, rows: &[(String, String)], max_width: f64) -> Vec<String> {
    let wrap_at = max_width.min(TOOLTIP_MAX_TEXT_WIDTH);
    let mut lines = wrap_to_width(title, TOOLTIP_FONT_PX, wrap_at);
    lines.extend(rows.iter().map(|(name, value)| format!("{name}: {value}")));
    lines
}
