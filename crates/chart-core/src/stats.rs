// File: crates/chart-core/src/stats.rs
// Summary: Five-number box statistics with 1.5 IQR whiskers and outliers.

use std::cmp::Ordering;

/// Summary drawn for one category of a box plot.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest datum still within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Highest datum still within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    /// Data beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Whisker reach as a multiple of the interquartile range.
    pub const WHISKER_IQR: f64 = 1.5;

    /// Compute statistics over the finite values of `values`; `None` when there are none.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_limit = q1 - Self::WHISKER_IQR * iqr;
        let hi_limit = q3 + Self::WHISKER_IQR * iqr;

        // No datum inside the reach (only possible with interpolated quartiles) pins the whisker to the box.
        let whisker_low = match sorted.iter().copied().find(|&v| v >= lo_limit) {
            Some(v) if v <= q1 => v,
            _ => q1,
        };
        let whisker_high = match sorted.iter().rev().copied().find(|&v| v <= hi_limit) {
            Some(v) if v >= q3 => v,
            _ => q3,
        };
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lowest and highest value drawn (whiskers or outliers).
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.outliers.first().copied().unwrap_or(self.whisker_low).min(self.whisker_low);
        let hi = self.outliers.last().copied().unwrap_or(self.whisker_high).max(self.whisker_high);
        (lo, hi)
    }
}

/// Quantile `p` in [0, 1] of ascending `sorted`, interpolating linearly between closest ranks.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantiles_interpolate() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&v, 0.0), 1.0);
        assert_eq!(quantile_sorted(&v, 0.5), 2.5);
        assert_eq!(quantile_sorted(&v, 0.25), 1.75);
        assert_eq!(quantile_sorted(&v, 1.0), 4.0);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn single_value_collapses() {
        let s = BoxStats::compute(&[7.0]).unwrap();
        assert_eq!((s.q1, s.median, s.q3), (7.0, 7.0, 7.0));
        assert_eq!((s.whisker_low, s.whisker_high), (7.0, 7.0));
        assert!(s.outliers.is_empty());
    }

    #[test]
    fn empty_and_non_finite_inputs() {
        assert!(BoxStats::compute(&[]).is_none());
        assert!(BoxStats::compute(&[f64::NAN, f64::INFINITY]).is_none());
        let s = BoxStats::compute(&[f64::NAN, 1.0, 3.0]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.median, 2.0);
    }
}
