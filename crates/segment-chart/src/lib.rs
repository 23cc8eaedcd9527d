// File: crates/segment-chart/src/lib.rs
// Summary: Synthetic customer-segment dataset and the generate -> render -> normalize pipeline.

pub mod dataset;
pub mod pipeline;

pub use dataset::{generate, GeneratorConfig, Sample, Segment, SegmentParams};
pub use pipeline::{run, PipelineConfig, RunReport};
