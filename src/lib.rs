//! podstats
//!
//! A small chart engine for podcast analytics. It turns a table of episode
//! metrics into chart frames: scaled marks, nice ticks, least-squares trend
//! lines, tooltip placement, and a zoom/pan state for the scatter charts.
//! Frames are plain data; [`viz`] paints them to SVG.
//!
//! ### Features
//! - Linear scales with "nice" 1/2/5 tick steps
//! - OLS regression with safe fallbacks for degenerate input
//! - Anchor-preserving wheel zoom and clamped drag pan
//! - Tooltip boxes that stay inside the plot area
//! - Load episodes from CSV, write frames as JSON or SVG
//!
//! ### Example
//! ```no_run
//! use podstats::{Chart, ChartConfig, ChartKind, InputEvent};
//!
//! let episodes = podstats::storage::load_csv("episodes.csv")?;
//! let mut chart = Chart::new(ChartKind::DurationCompletion, &episodes, ChartConfig::default())?;
//! chart.handle(InputEvent::Wheel { delta: -240.0, x: 380.0, y: 200.0 });
//! chart.handle(InputEvent::Hover { x: 300.0, y: 180.0 });
//! let frame = chart.frame();
//! podstats::viz::render_svg(&frame, "duration.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod format;
pub mod frame;
pub mod interaction;
pub mod models;
pub mod regression;
pub mod scale;
pub mod stats;
pub mod storage;
pub mod text;
pub mod tooltip;
pub mod viz;
pub mod zoom;

pub use charts::{ChartKind, MarkKind, Series};
pub use config::{ChartConfig, Margins};
pub use error::PodstatsError;
pub use frame::ChartFrame;
pub use interaction::{Chart, HoverTarget, InputEvent};
pub use models::{Domain, Episode, PixelPoint, Point, Range, Rect, Size};
pub use regression::{RegressionResult, fit};
pub use scale::LinearScale;
pub use zoom::{ZoomPanController, ZoomState};
