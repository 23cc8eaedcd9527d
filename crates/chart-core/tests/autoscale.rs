// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale and category ordering over several boxes.

use chart_core::{BoxPlotChart, Category, ChartError};

#[test]
fn autoscale_covers_whiskers_and_outliers() {
    let mut chart = BoxPlotChart::new("t");
    chart.add_category(Category::new("Low", vec![1.0, 2.0, 3.0, 4.0, 5.0]));
    // 100 is an outlier of this group
    chart.add_category(Category::new("High", vec![10.0, 11.0, 12.0, 13.0, 14.0, 100.0]));

    chart.autoscale_axes(0.05).unwrap();

    // data spans 1..100 => 5% of 99 on each side
    assert!((chart.y_axis.min - (1.0 - 4.95)).abs() < 1e-9);
    assert!((chart.y_axis.max - (100.0 + 4.95)).abs() < 1e-9);
    assert_eq!(chart.x_axis.min, -0.5);
    assert_eq!(chart.x_axis.max, 1.5);
}

#[test]
fn categories_keep_insertion_order() {
    let mut chart = BoxPlotChart::new("t");
    for label in ["Premium", "Standard", "Budget", "Value"] {
        chart.add_category(Category::new(label, vec![1.0]));
    }
    assert_eq!(chart.category_labels(), vec!["Premium", "Standard", "Budget", "Value"]);
}

#[test]
fn autoscale_without_data_fails() {
    let mut chart = BoxPlotChart::new("t");
    assert!(matches!(chart.autoscale_axes(0.05), Err(ChartError::EmptyChart)));

    chart.add_category(Category::new("Empty", Vec::new()));
    assert!(matches!(chart.autoscale_axes(0.05), Err(ChartError::EmptyChart)));
}
