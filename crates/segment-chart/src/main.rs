// File: crates/segment-chart/src/main.rs
// Summary: Writes chart.png (512x512) with purchase amount box plots per customer segment.

use anyhow::{Context, Result};
use segment_chart::{run, PipelineConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the confirmation line.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;

    let report = run(&PipelineConfig::default())?;
    println!("{}", report.confirmation());
    Ok(())
}
