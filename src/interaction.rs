//! One chart instance: derived data plus the state user input can change.
//!
//! A [`Chart`] exclusively owns its hover target and (for scatter charts) its
//! [`ZoomPanController`]. Input arrives as discrete [`InputEvent`]s through
//! [`Chart::handle`]; [`Chart::frame`] is a pure function of that state and
//! the data, so a sequence of events can be replayed and checked without a UI.

use crate::charts::{ChartKind, MarkKind, Series, base_domains, derive_series};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::format::{format_value, map_locale};
use crate::frame::{ChartFrame, Mark, Polyline, Segment, TickLabel, Tooltip, clip_segment};
use crate::models::{Domain, Episode, PixelPoint, Rect};
use crate::regression::{RegressionResult, fit};
use crate::scale::LinearScale;
use crate::tooltip::{TOOLTIP_FONT_PX, TOOLTIP_PADDING, compose_lines, estimate_box, place};
use crate::zoom::{ZoomPanController, ZoomState};
use log::{debug, warn};
use num_format::Locale;
use serde::{Deserialize, Serialize};

/// Pointer distance within which a dot or line vertex counts as hovered.
pub const HOVER_RADIUS: f64 = 12.0;
pub const DOT_RADIUS: f64 = 4.0;
pub const VERTEX_RADIUS: f64 = 3.0;
/// Share of an episode slot a bar occupies.
const BAR_WIDTH_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved to pixel `(x, y)`.
    Hover { x: f64, y: f64 },
    /// Pointer left the chart.
    Leave,
    /// Scroll wheel at `(x, y)`; negative `delta` zooms in.
    Wheel { delta: f64, x: f64, y: f64 },
    /// Drag by a pixel delta.
    Drag { dx: f64, dy: f64 },
    Reset,
}

/// Which point the pointer is over: `series` and `index` into [`Chart::series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub series: usize,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct Chart {
    kind: ChartKind,
    config: ChartConfig,
    series: Vec<Series>,
    trend: Option<RegressionResult>,
    base_x: Domain,
    base_y: Domain,
    zoom: Option<ZoomPanController>,
    hover: Option<HoverTarget>,
}

impl Chart {
    /// Build a chart of `kind` from episode rows. Fails only on an invalid `config`.
    pub fn new(kind: ChartKind, episodes: &[Episode], config: ChartConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!("{kind:?}: {e}");
            return Err(e);
        }
        let mut chart = Self {
            kind,
            config,
            series: Vec::new(),
            trend: None,
            base_x: Domain::new(0.0, 0.0),
            base_y: Domain::new(0.0, 0.0),
            zoom: None,
            hover: None,
        };
        chart.set_episodes(episodes);
        Ok(chart)
    }

    /// Replace the data. Series, domains and trend are recomputed; zoom and
    /// hover start over.
    pub fn set_episodes(&mut self, episodes: &[Episode]) {
        self.series = derive_series(self.kind, episodes);
        let (base_x, base_y) = base_domains(self.kind, &self.series, self.config.tick_count);
        self.base_x = base_x;
        self.base_y = base_y;
        self.trend = if self.kind.has_trend() {
            self.series.first().map(|s| fit(&s.points))
        } else {
            None
        };
        self.zoom = self.kind.is_interactive().then(|| {
            ZoomPanController::new(
                base_x,
                base_y,
                self.config.x_range(),
                self.config.y_range(),
                self.config.max_zoom,
            )
        });
        self.hover = None;
        debug!(
            "{:?}: {} episodes, x {:?}, y {:?}, trend {:?}",
            self.kind,
            episodes.len(),
            base_x,
            base_y,
            self.trend
        );
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn trend(&self) -> Option<RegressionResult> {
        self.trend
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    /// Zoom state of an interactive chart; `None` for static charts.
    pub fn zoom_state(&self) -> Option<&ZoomState> {
        self.zoom.as_ref().map(|z| z.state())
    }

    pub fn base_domains(&self) -> (Domain, Domain) {
        (self.base_x, self.base_y)
    }

    /// Scales for what is currently visible.
    pub fn scales(&self) -> (LinearScale, LinearScale) {
        match &self.zoom {
            Some(z) => z.scales(),
            None => (
                LinearScale::new(self.base_x, self.config.x_range()),
                LinearScale::new(self.base_y, self.config.y_range()),
            ),
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        let inner = self.config.inner();
        match event {
            InputEvent::Hover { x, y } => {
                self.hover = self.hit_test(PixelPoint::new(x, y));
            }
            InputEvent::Leave => self.hover = None,
            InputEvent::Wheel { delta, x, y } => {
                if !inner.contains(PixelPoint::new(x, y)) {
                    debug!("{:?}: wheel outside plot area ignored", self.kind);
                    return;
                }
                match self.zoom.as_mut() {
                    Some(z) => z.zoom(delta, x, y),
                    None => debug!("{:?}: static chart ignores wheel", self.kind),
                }
            }
            InputEvent::Drag { dx, dy } => match self.zoom.as_mut() {
                Some(z) => z.pan(dx, dy),
                None => debug!("{:?}: static chart ignores drag", self.kind),
            },
            InputEvent::Reset => {
                if let Some(z) = self.zoom.as_mut() {
                    z.reset();
                }
            }
        }
    }

    /// Renderer input for the current state.
    pub fn frame(&self) -> ChartFrame {
        let locale = map_locale(&self.config.locale);
        let (sx, sy) = self.scales();
        let inner = self.config.inner();
        let episode_axis = matches!(
            self.kind,
            ChartKind::ListenerMix | ChartKind::SubscriberGrowth
        );

        let x_ticks = tick_labels(&sx, self.config.tick_count, locale, episode_axis);
        let y_ticks = tick_labels(&sy, self.config.tick_count, locale, false);

        let mut marks = Vec::new();
        let mut lines = Vec::new();
        for (si, s) in self.series.iter().enumerate() {
            let mut polyline = Vec::new();
            for (i, p) in s.points.iter().enumerate() {
                if !self.is_visible(&sx, &sy, si, i) {
                    continue;
                }
                let target = HoverTarget {
                    series: si,
                    index: i,
                };
                let highlighted = self.hover == Some(target);
                match s.mark {
                    MarkKind::Bar => marks.push(Mark::Bar {
                        rect: self.bar_rect(&sx, &sy, si, i),
                        series: si,
                        label: p.label.clone(),
                        highlighted,
                    }),
                    MarkKind::Dot | MarkKind::Line => {
                        let center = PixelPoint::new(sx.map(p.x), sy.map(p.y));
                        let radius = if s.mark == MarkKind::Dot {
                            DOT_RADIUS
                        } else {
                            VERTEX_RADIUS
                        };
                        if s.mark == MarkKind::Line {
                            polyline.push(center);
                        }
                        marks.push(Mark::Dot {
                            center,
                            radius: if highlighted { radius * 1.5 } else { radius },
                            series: si,
                            label: p.label.clone(),
                            highlighted,
                        });
                    }
                }
            }
            if polyline.len() > 1 {
                lines.push(Polyline {
                    series: si,
                    points: polyline,
                });
            }
        }

        let trend = self.trend.and_then(|r| {
            let ((x0, y0), (x1, y1)) = r.segment(sx.domain());
            let seg = Segment {
                from: PixelPoint::new(sx.map(x0), sy.map(y0)),
                to: PixelPoint::new(sx.map(x1), sy.map(y1)),
            };
            clip_segment(seg, inner)
        });

        let tooltip = self
            .hover
            .and_then(|t| self.tooltip_for(t, &sx, &sy, locale));

        ChartFrame {
            kind: self.kind,
            title: self.kind.title().to_string(),
            x_label: self.kind.x_label().to_string(),
            y_label: self.kind.y_label().to_string(),
            width: self.config.width,
            height: self.config.height,
            inner,
            series_names: self.series.iter().map(|s| s.name.clone()).collect(),
            x_ticks,
            y_ticks,
            marks,
            lines,
            trend,
            tooltip,
            zoom_level: self.zoom.as_ref().map_or(1.0, |z| z.zoom_level()),
        }
    }

    fn is_visible(&self, sx: &LinearScale, sy: &LinearScale, si: usize, i: usize) -> bool {
        let p = &self.series[si].points[i];
        sx.domain().contains(p.x) && sy.domain().contains(p.y)
    }

    /// Bottom of the stacked bar segment at (`si`, `i`).
    fn bar_base(&self, si: usize, i: usize) -> f64 {
        self.series[..si]
            .iter()
            .rev()
            .find(|s| s.mark == MarkKind::Bar)
            .and_then(|s| s.points.get(i))
            .map_or(0.0, |p| p.y)
    }

    fn bar_rect(&self, sx: &LinearScale, sy: &LinearScale, si: usize, i: usize) -> Rect {
        let p = &self.series[si].points[i];
        let width = sx.scale_factor().abs() * BAR_WIDTH_RATIO;
        let (a, b) = (sy.map(p.y), sy.map(self.bar_base(si, i)));
        let (top, bottom) = if a <= b { (a, b) } else { (b, a) };
        Rect {
            x: sx.map(p.x) - width / 2.0,
            y: top,
            width,
            height: bottom - top,
        }
    }

    fn anchor(&self, sx: &LinearScale, sy: &LinearScale, t: HoverTarget) -> PixelPoint {
        let s = &self.series[t.series];
        let p = &s.points[t.index];
        match s.mark {
            MarkKind::Bar => {
                let r = self.bar_rect(sx, sy, t.series, t.index);
                PixelPoint::new(r.x + r.width / 2.0, r.y)
            }
            MarkKind::Dot | MarkKind::Line => PixelPoint::new(sx.map(p.x), sy.map(p.y)),
        }
    }

    fn hit_test(&self, pointer: PixelPoint) -> Option<HoverTarget> {
        if !self.config.inner().contains(pointer) {
            return None;
        }
        let (sx, sy) = self.scales();
        let mut best: Option<(f64, HoverTarget)> = None;
        for (si, s) in self.series.iter().enumerate() {
            for i in 0..s.points.len() {
                if !self.is_visible(&sx, &sy, si, i) {
                    continue;
                }
                let target = HoverTarget {
                    series: si,
                    index: i,
                };
                if s.mark == MarkKind::Bar {
                    if self.bar_rect(&sx, &sy, si, i).contains(pointer) {
                        return Some(target);
                    }
                    continue;
                }
                let d = self.anchor(&sx, &sy, target).distance(pointer);
                if d <= HOVER_RADIUS && best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, target));
                }
            }
        }
        best.map(|(_, t)| t)
    }

    fn tooltip_for(
        &self,
        t: HoverTarget,
        sx: &LinearScale,
        sy: &LinearScale,
        locale: &Locale,
    ) -> Option<Tooltip> {
        let s = self.series.get(t.series)?;
        let p = s.points.get(t.index)?;
        if !self.is_visible(sx, sy, t.series, t.index) {
            return None;
        }
        let rows = match s.mark {
            MarkKind::Bar => vec![
                (self.kind.x_label().to_string(), format_value(p.x, locale)),
                (s.name.clone(), format_value(p.y - self.bar_base(t.series, t.index), locale)),
            ],
            MarkKind::Dot | MarkKind::Line => vec![
                (self.kind.x_label().to_string(), format_value(p.x, locale)),
                (self.kind.y_label().to_string(), format_value(p.y, locale)),
            ],
        };
        let inner = self.config.inner();
        let lines = compose_lines(&p.label, &rows, inner.width - 2.0 * TOOLTIP_PADDING);
        let size = estimate_box(&lines, TOOLTIP_FONT_PX);
        let origin = place(self.anchor(sx, sy, t), size, inner);
        Some(Tooltip {
            origin,
            size,
            lines,
        })
    }
}

fn tick_labels(
    scale: &LinearScale,
    count: usize,
    locale: &Locale,
    whole_numbers_only: bool,
) -> Vec<TickLabel> {
    scale
        .ticks(count)
        .into_iter()
        .filter(|v| !whole_numbers_only || v.fract() == 0.0)
        .map(|value| TickLabel {
            value,
            pixel: scale.map(value),
            text: format_value(value, locale),
        })
        .collect()
}
