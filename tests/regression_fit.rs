use podstats::models::{Domain, Point};
use podstats::regression::{RegressionResult, fit};

fn pts(xy: &[(f64, f64)]) -> Vec<Point> {
    xy.iter()
        .enumerate()
        .map(|(i, (x, y))| Point::new(*x, *y, format!("E{i}")))
        .collect()
}

#[test]
fn exact_line_is_recovered() {
    let r = fit(&pts(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]));
    assert!((r.slope - 2.0).abs() < 1e-12);
    assert!(r.intercept.abs() < 1e-12);
}

#[test]
fn noisy_data_matches_closed_form() {
    // x = 1..5, y = 2, 3, 5, 4, 6 → slope 0.9, intercept 1.3
    let data = [(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)];
    let r = fit(&pts(&data));
    assert!((r.slope - 0.9).abs() < 1e-12);
    assert!((r.intercept - 1.3).abs() < 1e-12);
}

#[test]
fn large_x_offset_keeps_the_slope() {
    // Spread of 2 around 1e7: the uncentered sums lose it entirely.
    let r = fit(&pts(&[(1e7, 0.0), (1e7 + 1.0, 1.0), (1e7 + 2.0, 2.0)]));
    assert!((r.slope - 1.0).abs() < 1e-9);
    assert!((r.intercept + 1e7).abs() < 1e-6);
    assert!((r.predict(1e7 + 1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(fit(&[]), RegressionResult::default());
}

#[test]
fn single_point_is_flat_through_it() {
    let r = fit(&pts(&[(1.0, 5.0)]));
    assert_eq!(r.slope, 0.0);
    assert_eq!(r.intercept, 5.0);
}

#[test]
fn identical_x_is_flat_at_mean() {
    let r = fit(&pts(&[(0.1, 1.0), (0.1, 2.0), (0.1, 6.0)]));
    assert_eq!(r.slope, 0.0);
    assert!((r.intercept - 3.0).abs() < 1e-12);
    assert!(r.slope.is_finite() && r.intercept.is_finite());
}

#[test]
fn segment_spans_the_domain() {
    let r = RegressionResult {
        slope: 0.5,
        intercept: 10.0,
    };
    let ((x0, y0), (x1, y1)) = r.segment(Domain::new(20.0, 60.0));
    assert_eq!((x0, y0), (20.0, 20.0));
    assert_eq!((x1, y1), (60.0, 40.0));
}
