// File: crates/chart-core/src/category.rs
// Summary: Labeled group of values shown as one box on the category axis.

use crate::stats::BoxStats;

#[derive(Clone, Debug)]
pub struct Category {
    pub label: String,
    pub values: Vec<f64>,
}

impl Category {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }

    pub fn stats(&self) -> Option<BoxStats> {
        BoxStats::compute(&self.values)
    }
}
