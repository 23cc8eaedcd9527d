// File: crates/segment-chart/src/dataset.rs
// Summary: Seeded synthetic purchase amounts per customer segment, clamped at zero.

use std::collections::HashSet;
use std::fmt;

use chart_core::{ChartError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Seed used for the shipped chart.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Premium,
    Standard,
    Budget,
    Value,
}

impl Segment {
    /// Display order on the category axis.
    pub const ALL: [Segment; 4] = [Segment::Premium, Segment::Standard, Segment::Budget, Segment::Value];

    pub const fn label(self) -> &'static str {
        match self {
            Segment::Premium => "Premium",
            Segment::Standard => "Standard",
            Segment::Budget => "Budget",
            Segment::Value => "Value",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One purchase: which segment made it and how much was spent (never negative).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub segment: Segment,
    pub amount: f64,
}

/// How many purchases a segment contributes and the normal distribution they come from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentParams {
    pub segment: Segment,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl SegmentParams {
    pub const fn new(segment: Segment, count: usize, mean: f64, std_dev: f64) -> Self {
        Self { segment, count, mean, std_dev }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Segments in sampling order.
    pub segments: Vec<SegmentParams>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            segments: vec![
                SegmentParams::new(Segment::Premium, 150, 250.0, 45.0),
                SegmentParams::new(Segment::Standard, 200, 150.0, 35.0),
                SegmentParams::new(Segment::Budget, 180, 80.0, 30.0),
                SegmentParams::new(Segment::Value, 120, 45.0, 20.0),
            ],
        }
    }
}

impl GeneratorConfig {
    pub fn total_count(&self) -> usize {
        self.segments.iter().map(|p| p.count).sum()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for p in &self.segments {
            if !p.mean.is_finite() {
                return Err(ChartError::Config(format!("{}: mean must be finite, got {}", p.segment, p.mean)));
            }
            if !(p.std_dev.is_finite() && p.std_dev >= 0.0) {
                return Err(ChartError::Config(format!(
                    "{}: standard deviation must be finite and non-negative, got {}",
                    p.segment, p.std_dev
                )));
            }
            if !seen.insert(p.segment) {
                return Err(ChartError::Config(format!("{} listed more than once", p.segment)));
            }
        }
        Ok(())
    }
}

/// Draw every segment's purchases from one generator seeded with `config.seed`,
/// segment by segment in config order, clamping each amount to `>= 0`.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<Sample>> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.total_count());
    for p in &config.segments {
        let normal = Normal::new(p.mean, p.std_dev)
            .map_err(|e| ChartError::Config(format!("{}: {}", p.segment, e)))?;
        samples.extend((0..p.count).map(|_| Sample {
            segment: p.segment,
            amount: normal.sample(&mut rng).max(0.0),
        }));
    }
    debug!(seed = config.seed, samples = samples.len(), "generated purchase samples");
    Ok(samples)
}

/// Amounts per segment in `order`, whatever order the samples arrived in.
/// Segments in `order` without samples get an empty list.
pub fn group_amounts(samples: &[Sample], order: &[Segment]) -> Vec<(Segment, Vec<f64>)> {
    order
        .iter()
        .map(|&seg| {
            let values = samples.iter().filter(|s| s.segment == seg).map(|s| s.amount).collect();
            (seg, values)
        })
        .collect()
}

/// Per-segment overview used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSummary {
    pub segment: Segment,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

pub fn summarize(samples: &[Sample], order: &[Segment]) -> Vec<SegmentSummary> {
    group_amounts(samples, order)
        .into_iter()
        .map(|(segment, values)| {
            let count = values.len();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = if count == 0 { f64::NAN } else { values.iter().sum::<f64>() / count as f64 };
            SegmentSummary { segment, count, min, max, mean }
        })
        .collect()
}
