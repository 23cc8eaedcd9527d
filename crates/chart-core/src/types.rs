// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, resolution, paddings).

/// Figure edge length in inches.
pub const FIGURE_INCHES: f32 = 8.0;
/// Output resolution in dots per inch.
pub const DPI: f32 = 64.0;
/// Typographic points per inch; line widths and font sizes are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Required width of the final PNG in pixels.
pub const TARGET_WIDTH: u32 = 512;
/// Required height of the final PNG in pixels.
pub const TARGET_HEIGHT: u32 = 512;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 48, 56)
    }
}

/// Convert a length in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_canvas_is_target_size() {
        assert_eq!((FIGURE_INCHES * DPI).round() as u32, TARGET_WIDTH);
        assert_eq!((FIGURE_INCHES * DPI).round() as u32, TARGET_HEIGHT);
    }

    #[test]
    fn points_scale_with_dpi() {
        assert!((pt_to_px(72.0, 64.0) - 64.0).abs() < 1e-6);
        assert!((pt_to_px(2.0, 72.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn insets_sums() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.hsum(), 3);
        assert_eq!(i.vsum(), 7);
    }
}
