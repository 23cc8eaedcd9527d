// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Category axis: one unit per category, centered on integer positions.
    pub fn categorical(label: impl Into<String>, count: usize) -> Self {
        Self::new(label, -0.5, count as f64 - 0.5)
    }

    pub fn default_value() -> Self {
        Self::new("Value", 0.0, 1.0)
    }

    /// Fit the range to `[lo, hi]` padded by `margin` of the span on each side.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let span = hi - lo;
        let pad = if span.abs() < 1e-12 { 0.5 } else { span * margin.max(0.0) };
        self.min = lo - pad;
        self.max = hi + pad;
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
