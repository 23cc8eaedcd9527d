// File: crates/chart-core/tests/normalize.rs
// Purpose: Exact-size guarantee of the post-render normalization pass.

use chart_core::{normalize_png, ChartError, NormalizeOutcome};
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

fn out_path(name: &str) -> PathBuf {
    let p = PathBuf::from("target/test_out/normalize").join(name);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    p
}

fn write_png(path: &PathBuf, w: u32, h: u32) {
    let img = RgbaImage::from_pixel(w, h, Rgba([30, 120, 200, 255]));
    img.save(path).expect("write png");
}

#[test]
fn resizes_off_size_image() {
    let path = out_path("off_size.png");
    write_png(&path, 531, 498);

    let outcome = normalize_png(&path, (512, 512)).expect("normalize");
    assert_eq!(outcome, NormalizeOutcome::Resized { from: (531, 498) });

    let img = image::open(&path).expect("reopen");
    assert_eq!((img.width(), img.height()), (512, 512));
    // uniform color survives resampling
    let px = img.to_rgba8().get_pixel(256, 256).0;
    assert!((px[2] as i16 - 200).abs() <= 2);
}

#[test]
fn leaves_exact_size_untouched() {
    let path = out_path("exact.png");
    write_png(&path, 512, 512);
    let before = std::fs::read(&path).unwrap();

    assert_eq!(normalize_png(&path, (512, 512)).unwrap(), NormalizeOutcome::Unchanged);
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn missing_file_is_io_error() {
    let path = out_path("does_not_exist.png");
    std::fs::remove_file(&path).ok();
    assert!(matches!(normalize_png(&path, (512, 512)), Err(ChartError::Io { .. })));
}

#[test]
fn garbage_file_is_decode_error() {
    let path = out_path("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(normalize_png(&path, (512, 512)), Err(ChartError::Decode { .. })));
}

#[test]
fn zero_target_is_config_error() {
    let path = out_path("zero.png");
    write_png(&path, 4, 4);
    assert!(matches!(normalize_png(&path, (0, 512)), Err(ChartError::Config(_))));
}
