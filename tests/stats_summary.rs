use podstats::models::{Domain, Episode};
use podstats::stats::{metric_summaries, summarize};

fn ep(n: usize, dur: f64, shares: f64) -> Episode {
    Episode {
        id: format!("E{n}"),
        title: "Demo".into(),
        duration_min: dur,
        completion_rate: 50.0,
        new_listeners: 10.0,
        returning_listeners: 5.0,
        subscribers: 100.0 * n as f64,
        social_shares: shares,
        subscribers_gained: 3.0,
    }
}

#[test]
fn median_even_and_odd() {
    // Even count: (2 + 3) / 2
    let s = summarize("x", &[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(s.count, 4);
    assert_eq!(s.min, Some(1.0));
    assert_eq!(s.max, Some(4.0));
    assert_eq!(s.mean, Some(2.5));
    assert_eq!(s.median, Some(2.5));

    let s = summarize("x", &[30.0, 10.0, 20.0]);
    assert_eq!(s.median, Some(20.0));
}

#[test]
fn non_finite_values_are_skipped() {
    let s = summarize("x", &[f64::NAN, 2.0, f64::INFINITY]);
    assert_eq!(s.count, 1);
    assert_eq!(s.median, Some(2.0));
}

#[test]
fn empty_input_has_no_statistics() {
    let s = summarize("x", &[]);
    assert_eq!(s.count, 0);
    assert!(s.min.is_none() && s.mean.is_none() && s.median.is_none());
    assert_eq!(s.extent(), Domain::new(0.0, 0.0));
}

#[test]
fn one_summary_per_metric_in_column_order() {
    let eps = vec![ep(1, 30.0, 8.0), ep(2, 50.0, 2.0), ep(3, 40.0, 5.0)];
    let all = metric_summaries(&eps);
    let names: Vec<&str> = all.iter().map(|s| s.metric.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "duration_min",
            "completion_rate",
            "new_listeners",
            "returning_listeners",
            "subscribers",
            "social_shares",
            "subscribers_gained",
        ]
    );
    assert_eq!(all[0].extent(), Domain::new(30.0, 50.0));
    assert_eq!(all[0].median, Some(40.0));
    assert_eq!(all[4].mean, Some(200.0));
    assert_eq!(all[5].median, Some(5.0));
    assert!(metric_summaries(&[]).is_empty());
}
