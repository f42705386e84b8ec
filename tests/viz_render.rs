use podstats::models::Episode;
use podstats::{Chart, ChartConfig, ChartKind, InputEvent, viz};
use std::fs;
use tempfile::tempdir;

fn sample() -> Vec<Episode> {
    (1..=6)
        .map(|i| {
            let n = i as f64;
            Episode {
                id: format!("E{i}"),
                title: format!("Episode {i}"),
                duration_min: 20.0 + 7.0 * n,
                completion_rate: 90.0 - 4.0 * n,
                new_listeners: 80.0 + 10.0 * n,
                returning_listeners: 30.0 * n,
                subscribers: 120.0 * n,
                social_shares: 5.0 * n,
                subscribers_gained: 12.0 * n + 3.0,
            }
        })
        .collect()
}

#[test]
fn every_chart_renders_to_svg_file() {
    let dir = tempdir().unwrap();
    for kind in ChartKind::ALL {
        let mut chart = Chart::new(kind, &sample(), ChartConfig::default()).unwrap();
        chart.handle(InputEvent::Hover { x: 300.0, y: 200.0 });
        let path = dir.path().join(format!("{kind:?}.svg"));
        viz::render_svg(&chart.frame(), &path).unwrap();
        let meta = fs::metadata(&path).expect("file created");
        assert!(meta.len() > 0, "svg has content");
    }
}

#[test]
fn svg_string_carries_title_and_ticks() {
    let cfg = ChartConfig::default();
    let chart = Chart::new(ChartKind::SubscriberGrowth, &sample(), cfg).unwrap();
    let frame = chart.frame();
    let svg = viz::render_svg_string(&frame).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Subscriber growth"));
    assert!(svg.contains(&frame.y_ticks[1].text));
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::new(ChartKind::ListenerMix, &[], ChartConfig::default()).unwrap();
    let svg = viz::render_svg_string(&chart.frame()).unwrap();
    assert!(svg.contains("Listener mix per episode"));
}

#[test]
fn non_svg_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let chart = Chart::new(ChartKind::ListenerMix, &sample(), ChartConfig::default()).unwrap();
    let path = dir.path().join("chart.png");
    let err = viz::render_svg(&chart.frame(), &path).unwrap_err();
    assert!(err.to_string().contains(".svg"));
    assert!(!path.exists());
}
