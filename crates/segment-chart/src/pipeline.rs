// File: crates/segment-chart/src/pipeline.rs
// Summary: Generate -> render -> normalize, producing the segment box-plot PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::types::{TARGET_HEIGHT, TARGET_WIDTH};
use chart_core::{normalize_png, BoxPlotChart, Category, NormalizeOutcome, RenderOptions};
use tracing::{debug, info};

use crate::dataset::{self, GeneratorConfig, Sample, Segment};

pub const OUTPUT_PATH: &str = "chart.png";
pub const TITLE: &str = "Purchase Amount Distribution by Customer Segment";
pub const X_LABEL: &str = "Customer Segment";
pub const Y_LABEL: &str = "Purchase Amount ($)";

/// Fraction of the data span added above and below the value axis.
const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub output: PathBuf,
    pub generator: GeneratorConfig,
    pub render: RenderOptions,
    /// Exact (width, height) of the file left on disk.
    pub target: (u32, u32),
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(OUTPUT_PATH),
            generator: GeneratorConfig::default(),
            render: RenderOptions::default(),
            target: (TARGET_WIDTH, TARGET_HEIGHT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub samples: usize,
    pub resized: bool,
}

impl RunReport {
    /// Line printed on success.
    pub fn confirmation(&self) -> String {
        format!(
            "Chart successfully generated: {} ({}x{} pixels)",
            self.output.display(),
            self.width,
            self.height
        )
    }
}

/// Box plot of `samples` with one box per segment, always in [`Segment::ALL`] order.
pub fn build_chart(samples: &[Sample]) -> BoxPlotChart {
    let mut chart = BoxPlotChart::new(TITLE).with_axis_labels(X_LABEL, Y_LABEL);
    for (segment, amounts) in dataset::group_amounts(samples, &Segment::ALL) {
        chart.add_category(Category::new(segment.label(), amounts));
    }
    chart
}

pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let samples = dataset::generate(&config.generator).context("generating purchase data")?;
    for s in dataset::summarize(&samples, &Segment::ALL) {
        debug!(segment = %s.segment, count = s.count, min = s.min, max = s.max, mean = s.mean, "segment summary");
    }

    let mut chart = build_chart(&samples);
    chart.autoscale_axes(Y_MARGIN).context("scaling value axis")?;

    let (native_w, native_h) = config.render.pixel_size();
    info!(path = %config.output.display(), native_w, native_h, "rendering chart");
    chart
        .render_to_png(&config.render, &config.output)
        .with_context(|| format!("rendering '{}'", config.output.display()))?;

    let outcome = normalize_png(&config.output, config.target)
        .with_context(|| format!("normalizing '{}'", config.output.display()))?;

    Ok(RunReport {
        output: config.output.clone(),
        width: config.target.0,
        height: config.target.1,
        samples: samples.len(),
        resized: matches!(outcome, NormalizeOutcome::Resized { .. }),
    })
}
