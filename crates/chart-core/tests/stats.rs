// File: crates/chart-core/tests/stats.rs
// Purpose: Box statistics on known inputs.

use chart_core::BoxStats;

#[test]
fn quartiles_whiskers_and_outliers() {
    let values = [9.0, 1.0, 2.0, 100.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let s = BoxStats::compute(&values).unwrap();

    assert_eq!(s.count, 10);
    assert!((s.q1 - 3.25).abs() < 1e-12);
    assert!((s.median - 5.5).abs() < 1e-12);
    assert!((s.q3 - 7.75).abs() < 1e-12);
    assert!((s.iqr() - 4.5).abs() < 1e-12);

    // upper reach 7.75 + 6.75 = 14.5 stops at 9
    assert_eq!(s.whisker_low, 1.0);
    assert_eq!(s.whisker_high, 9.0);
    assert_eq!(s.outliers, vec![100.0]);
    assert_eq!(s.extent(), (1.0, 100.0));
}

#[test]
fn low_outliers_are_reported_ascending() {
    let mut values: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
    values.push(-40.0);
    values.push(-80.0);
    let s = BoxStats::compute(&values).unwrap();
    assert_eq!(s.outliers, vec![-80.0, -40.0]);
    assert_eq!(s.whisker_low, 50.0);
}

#[test]
fn order_of_input_does_not_matter() {
    let a = BoxStats::compute(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
    let b = BoxStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(a, b);
}
