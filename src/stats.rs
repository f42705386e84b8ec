use crate::models::{Domain, Episode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one episode metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub metric: String,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

impl Summary {
    /// `[min, max]` of the metric, `[0, 0]` when there were no values.
    pub fn extent(&self) -> Domain {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => Domain::new(lo, hi),
            _ => Domain::new(0.0, 0.0),
        }
    }
}

/// Summarize one series of values.
pub fn summarize(metric: &str, values: &[f64]) -> Summary {
    let mut vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let mean = if count > 0 {
        Some(vals.iter().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Summary {
        metric: metric.to_string(),
        count,
        min,
        max,
        mean,
        median,
    }
}

/// Per-metric summaries over all episodes, in column order.
pub fn metric_summaries(episodes: &[Episode]) -> Vec<Summary> {
    let mut columns: BTreeMap<usize, (&'static str, Vec<f64>)> = BTreeMap::new();
    for e in episodes {
        for (pos, (name, v)) in e.metrics().into_iter().enumerate() {
            columns.entry(pos).or_insert_with(|| (name, Vec::new())).1.push(v);
        }
    }
    columns
        .into_values()
        .map(|(name, vals)| summarize(name, &vals))
        .collect()
}
