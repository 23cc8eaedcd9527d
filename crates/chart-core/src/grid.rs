// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Pick a "nice" tick step (1, 2, 2.5, 5 x 10^k) giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

/// Tick values at multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0 and accumulated error around zero
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step.is_finite() && step > 0.0 {
        while decimals < 6 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0) {
                break;
            }
            decimals += 1;
        }
    }
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(400.0, 6), 100.0);
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(12.0, 5), 2.5);
        assert!((nice_step(0.9, 6) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ticks_inside_range() {
        let t = nice_ticks(-18.0, 395.0, 6);
        assert_eq!(t, vec![0.0, 100.0, 200.0, 300.0]);
        assert!(nice_ticks(1.0, 1.0, 6).is_empty());
    }

    #[test]
    fn tick_formatting() {
        assert_eq!(format_tick(100.0, 50.0), "100");
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(1.2, 0.2), "1.2");
        assert_eq!(format_tick(7.5, 2.5), "7.5");
    }
}
