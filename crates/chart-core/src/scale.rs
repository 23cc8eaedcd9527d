// File: crates/chart-core/src/scale.rs
// Summary: Category (X) band scale and Value (Y) linear scale transforms.

/// Value Y coordinate (e.g., purchase amount).
pub type Value = f64;

/// Horizontal band scale: `count` equal-width bands spanning `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }
    /// Width of one band in pixels.
    #[inline]
    pub fn band_width(&self) -> f32 {
        (self.right_px - self.left_px) / self.count.max(1) as f32
    }
    /// Pixel center of band `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 0.5) * self.band_width()
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
