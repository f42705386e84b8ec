//! Reference renderer: paints a [`ChartFrame`] to **SVG** with `plotters`.
//!
//! All geometry is already in pixels, so this module only draws primitives:
//! gridlines, axes, tick labels, marks, the trend segment, a legend for
//! multi-series charts, and the tooltip box.

pub mod util;

use crate::frame::{ChartFrame, Mark};
use crate::tooltip::{TOOLTIP_FONT_PX, TOOLTIP_LINE_HEIGHT, TOOLTIP_PADDING};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontTransform};

use plotters_svg::SVGBackend;

use std::path::Path;

use util::{AXIS, GRID, TREND, office_color, px, px_point};

const TICK_LEN: i32 = 5;
const TICK_FONT_PX: u32 = 12;
const AXIS_FONT_PX: u32 = 13;
const TITLE_FONT_PX: u32 = 15;

/// Render `frame` into an in-memory SVG document.
pub fn render_svg_string(frame: &ChartFrame) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, canvas_size(frame)).into_drawing_area();
        draw_frame(&root, frame)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buf)
}

/// Render `frame` to an `.svg` file.
pub fn render_svg<P: AsRef<Path>>(frame: &ChartFrame, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    match out_path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {}
        _ => {
            let shown = out_path.display();
            return Err(anyhow!("only .svg output is supported: {shown}"));
        }
    }
    let root = SVGBackend::new(out_path, canvas_size(frame)).into_drawing_area();
    draw_frame(&root, frame)?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn text_style(size: u32, h: HPos, v: VPos) -> TextStyle<'static> {
    TextStyle::from((FontFamily::SansSerif, size)).pos(Pos::new(h, v))
}

fn canvas_size(frame: &ChartFrame) -> (u32, u32) {
    (frame.width.round().max(1.0) as u32, frame.height.round().max(1.0) as u32)
}

fn draw_frame<DB>(root: &DrawingArea<DB, Shift>, frame: &ChartFrame) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    draw_axes(root, frame)?;
    draw_marks(root, frame)?;
    draw_legend(root, frame)?;
    draw_tooltip(root, frame)?;
    Ok(())
}

fn draw_axes<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &ChartFrame,
) -> Result<()> {
    let inner = frame.inner;
    let (left, right) = (px(inner.x), px(inner.right()));
    let (top, bottom) = (px(inner.y), px(inner.bottom()));

    let x_tick_style = text_style(TICK_FONT_PX, HPos::Center, VPos::Top);
    let y_tick_style = text_style(TICK_FONT_PX, HPos::Right, VPos::Center);

    for t in &frame.x_ticks {
        let x = px(t.pixel);
        let grid = vec![(x, top), (x, bottom)];
        root.draw(&PathElement::new(grid, GRID.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;
        let tick = vec![(x, bottom), (x, bottom + TICK_LEN)];
        root.draw(&PathElement::new(tick, AXIS.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;
        let label_pos = (x, bottom + TICK_LEN + 2);
        root.draw(&Text::new(t.text.clone(), label_pos, x_tick_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    for t in &frame.y_ticks {
        let y = px(t.pixel);
        let grid = vec![(left, y), (right, y)];
        root.draw(&PathElement::new(grid, GRID.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;
        let tick = vec![(left - TICK_LEN, y), (left, y)];
        root.draw(&PathElement::new(tick, AXIS.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;
        let label_pos = (left - TICK_LEN - 3, y);
        root.draw(&Text::new(t.text.clone(), label_pos, y_tick_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.draw(&PathElement::new(
        vec![(left, top), (left, bottom), (right, bottom)],
        AXIS.stroke_width(1),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let x_desc_style = text_style(AXIS_FONT_PX, HPos::Center, VPos::Bottom);
    root.draw(&Text::new(
        frame.x_label.clone(),
        (px(inner.x + inner.width / 2.0), px(frame.height) - 4),
        x_desc_style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let y_desc_style = TextStyle::from((FontFamily::SansSerif, AXIS_FONT_PX))
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        frame.y_label.clone(),
        (4, px(inner.y + inner.height / 2.0)),
        y_desc_style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let title_style = text_style(TITLE_FONT_PX, HPos::Left, VPos::Bottom);
    let title_pos = (left, (top - 4).max(TITLE_FONT_PX as i32));
    root.draw(&Text::new(frame.title.clone(), title_pos, title_style))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_marks<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &ChartFrame,
) -> Result<()> {
    for mark in &frame.marks {
        if let Mark::Bar {
            rect,
            series,
            highlighted,
            ..
        } = mark
        {
            let color = office_color(*series);
            let corners = [px_point(rect.x, rect.y), px_point(rect.right(), rect.bottom())];
            root.draw(&Rectangle::new(corners, color.filled()))
                .map_err(|e| anyhow!("{:?}", e))?;
            if *highlighted {
                root.draw(&Rectangle::new(corners, BLACK.stroke_width(2)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }

    for line in &frame.lines {
        let pts: Vec<(i32, i32)> = line.points.iter().map(|p| px_point(p.x, p.y)).collect();
        let color = office_color(line.series);
        root.draw(&PathElement::new(pts, color.stroke_width(2)))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    if let Some(seg) = frame.trend {
        root.draw(&PathElement::new(
            vec![px_point(seg.from.x, seg.from.y), px_point(seg.to.x, seg.to.y)],
            TREND.stroke_width(2),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    for mark in &frame.marks {
        if let Mark::Dot {
            center,
            radius,
            series,
            highlighted,
            ..
        } = mark
        {
            let c = px_point(center.x, center.y);
            let r = px(*radius).max(1);
            root.draw(&Circle::new(c, r, office_color(*series).filled()))
                .map_err(|e| anyhow!("{:?}", e))?;
            if *highlighted {
                root.draw(&Circle::new(c, r + 1, BLACK.stroke_width(1)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}

/// Single-row legend above the plot, right-aligned; only for multi-series charts.
fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &ChartFrame,
) -> Result<()> {
    if frame.series_names.len() < 2 {
        return Ok(());
    }
    let label_style = text_style(TICK_FONT_PX, HPos::Left, VPos::Center);
    let y = (px(frame.inner.y) - 8).max(8);
    let mut x = px(frame.inner.right());
    for (idx, name) in frame.series_names.iter().enumerate().rev() {
        let text_w = crate::text::estimate_text_width(name, TICK_FONT_PX as f64) as i32;
        x -= text_w + 24;
        let swatch = [(x, y - 5), (x + 10, y + 5)];
        root.draw(&Rectangle::new(swatch, office_color(idx).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Text::new(name.clone(), (x + 14, y), label_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn draw_tooltip<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &ChartFrame,
) -> Result<()> {
    let Some(tip) = frame.tooltip.as_ref() else {
        return Ok(());
    };
    let (right, bottom) = (tip.origin.x + tip.size.width, tip.origin.y + tip.size.height);
    let corners = [px_point(tip.origin.x, tip.origin.y), px_point(right, bottom)];
    root.draw(&Rectangle::new(corners, WHITE.mix(0.95).filled()))
        .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Rectangle::new(corners, AXIS.stroke_width(1)))
        .map_err(|e| anyhow!("{:?}", e))?;

    let style = text_style(TOOLTIP_FONT_PX as u32, HPos::Left, VPos::Top);
    for (i, line) in tip.lines.iter().enumerate() {
        let x = tip.origin.x + TOOLTIP_PADDING;
        let y = tip.origin.y + TOOLTIP_PADDING + i as f64 * TOOLTIP_LINE_HEIGHT;
        root.draw(&Text::new(line.clone(), px_point(x, y), style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
