// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{BoxPlotChart, Category, RenderOptions};

fn spread(center: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| center + ((i as f64) * 0.37).sin() * 10.0).collect()
}

#[test]
fn render_smoke_png() {
    let mut chart = BoxPlotChart::new("Smoke").with_axis_labels("Group", "Amount");
    chart.add_category(Category::new("A", spread(50.0, 40)));
    chart.add_category(Category::new("B", spread(20.0, 30)));
    chart.autoscale_axes(0.05).expect("autoscale");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // 8in x 64dpi on each side
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (512, 512));
}

#[test]
fn render_overwrites_existing_file() {
    let out = std::path::PathBuf::from("target/test_out/overwrite.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"stale contents").unwrap();

    let mut chart = BoxPlotChart::new("Overwrite");
    chart.add_category(Category::new("A", spread(5.0, 10)));
    chart.autoscale_axes(0.05).unwrap();
    chart.render_to_png(&RenderOptions::default(), &out).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn invalid_options_are_rejected() {
    let mut chart = BoxPlotChart::new("Bad");
    chart.add_category(Category::new("A", vec![1.0, 2.0, 3.0]));
    chart.autoscale_axes(0.05).unwrap();

    let mut opts = RenderOptions::default();
    opts.dpi = 0.0;
    assert!(matches!(chart.render_to_png_bytes(&opts), Err(chart_core::ChartError::Config(_))));

    let mut opts = RenderOptions::default();
    opts.box_width = 1.5;
    assert!(opts.validate().is_err());
}
