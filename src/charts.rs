//! The four podcast charts and how each one derives its series from episode rows.

use crate::models::{Domain, Episode, Point};
use crate::scale::nice_domain;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Episode length against completion rate, with trend.
    DurationCompletion,
    /// New vs. returning listeners per episode, stacked.
    ListenerMix,
    /// Cumulative subscribers over episodes, with trend.
    SubscriberGrowth,
    /// Social shares against subscribers gained, with trend.
    SharesSubscribers,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::DurationCompletion,
        ChartKind::ListenerMix,
        ChartKind::SubscriberGrowth,
        ChartKind::SharesSubscribers,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::DurationCompletion => "Episode duration vs. completion rate",
            ChartKind::ListenerMix => "Listener mix per episode",
            ChartKind::SubscriberGrowth => "Subscriber growth",
            ChartKind::SharesSubscribers => "Social shares vs. subscribers gained",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ChartKind::DurationCompletion => "Duration (min)",
            ChartKind::ListenerMix | ChartKind::SubscriberGrowth => "Episode",
            ChartKind::SharesSubscribers => "Social shares",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartKind::DurationCompletion => "Completion rate (%)",
            ChartKind::ListenerMix => "Listeners",
            ChartKind::SubscriberGrowth => "Subscribers",
            ChartKind::SharesSubscribers => "Subscribers gained",
        }
    }

    /// Scatter charts accept wheel zoom and drag pan.
    pub fn is_interactive(&self) -> bool {
        matches!(self, ChartKind::DurationCompletion | ChartKind::SharesSubscribers)
    }

    pub fn has_trend(&self) -> bool {
        !matches!(self, ChartKind::ListenerMix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    Dot,
    /// Stacked bar. A point's `y` is the top of its segment; the bottom is
    /// the previous bar series' `y` at the same index (or 0).
    Bar,
    Line,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub mark: MarkKind,
    pub points: Vec<Point>,
}

/// Derive the series for `kind`, one point per episode in input order.
pub fn derive_series(kind: ChartKind, episodes: &[Episode]) -> Vec<Series> {
    let episode_no = |i: usize| (i + 1) as f64;
    match kind {
        ChartKind::DurationCompletion => vec![Series {
            name: "Episodes".into(),
            mark: MarkKind::Dot,
            points: episodes
                .iter()
                .map(|e| Point::new(e.duration_min, e.completion_rate, e.label()))
                .collect(),
        }],
        ChartKind::ListenerMix => vec![
            Series {
                name: "New listeners".into(),
                mark: MarkKind::Bar,
                points: episodes
                    .iter()
                    .enumerate()
                    .map(|(i, e)| Point::new(episode_no(i), e.new_listeners, e.label()))
                    .collect(),
            },
            Series {
                name: "Returning listeners".into(),
                mark: MarkKind::Bar,
                points: episodes
                    .iter()
                    .enumerate()
                    .map(|(i, e)| {
                        Point::new(
                            episode_no(i),
                            e.new_listeners + e.returning_listeners,
                            e.label(),
                        )
                    })
                    .collect(),
            },
        ],
        ChartKind::SubscriberGrowth => vec![Series {
            name: "Subscribers".into(),
            mark: MarkKind::Line,
            points: episodes
                .iter()
                .enumerate()
                .map(|(i, e)| Point::new(episode_no(i), e.subscribers, e.label()))
                .collect(),
        }],
        ChartKind::SharesSubscribers => vec![Series {
            name: "Episodes".into(),
            mark: MarkKind::Dot,
            points: episodes
                .iter()
                .map(|e| Point::new(e.social_shares, e.subscribers_gained, e.label()))
                .collect(),
        }],
    }
}

/// Base (x, y) domains for the derived series.
///
/// - Scatter charts use the raw data extent so zooming covers exactly the data.
/// - Bars get half a slot of room on each side and a y axis that includes 0.
/// - Static charts round their y axis out to tick multiples.
/// - A single-valued extent is widened by 1 on each side; no data gives `[0, 0]`.
pub fn base_domains(kind: ChartKind, series: &[Series], tick_count: usize) -> (Domain, Domain) {
    let points = || series.iter().flat_map(|s| s.points.iter());
    let has_data = points().next().is_some();
    let widen = |d: Domain| {
        if has_data && d.is_degenerate() {
            d.padded(1.0)
        } else {
            d
        }
    };

    let x = widen(Domain::extent(points().map(|p| p.x)));
    let y = widen(Domain::extent(points().map(|p| p.y)));
    if !has_data {
        return (x, y);
    }

    match kind {
        ChartKind::DurationCompletion | ChartKind::SharesSubscribers => (x, y),
        ChartKind::ListenerMix => {
            let x = Domain::extent(points().map(|p| p.x)).padded(0.5);
            let y = Domain::new(y.min.min(0.0), y.max.max(0.0));
            (x, nice_domain(widen(y), tick_count))
        }
        ChartKind::SubscriberGrowth => (x, nice_domain(y, tick_count)),
    }
}
