//! Utility functions for the SVG renderer: series colors and pixel rounding.

use plotters::prelude::*;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange,
/// Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

pub const GRID: RGBColor = RGBColor(230, 230, 230);
pub const AXIS: RGBColor = RGBColor(90, 90, 90);
pub const TREND: RGBColor = RGBColor(60, 60, 60);

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Round a frame coordinate to a backend pixel.
#[inline]
pub fn px(v: f64) -> i32 {
    v.round() as i32
}

#[inline]
pub fn px_point(x: f64, y: f64) -> (i32, i32) {
    (px(x), px(y))
}
