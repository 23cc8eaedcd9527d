// File: crates/chart-core/src/theme.rs
// Summary: Light "whitegrid" theme, qualitative category palette and font sizes.

use skia_safe as skia;

/// Qualitative Set2 palette (ARGB), cycled per category.
pub const SET2: [u32; 8] = [
    0xff66c2a5, 0xfffc8d62, 0xff8da0cb, 0xffe78ac3,
    0xffa6d854, 0xffffd92f, 0xffe5c494, 0xffb3b3b3,
];

/// Font sizes and paddings in typographic points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub title_pt: f32,
    pub label_pt: f32,
    pub tick_pt: f32,
    pub title_pad_pt: f32,
    pub label_pad_pt: f32,
    pub tick_pad_pt: f32,
    pub outer_pad_pt: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_pt: 16.0,
            label_pt: 13.0,
            // "talk" context tick size (16.5) scaled by 0.9
            tick_pt: 14.85,
            title_pad_pt: 20.0,
            label_pad_pt: 6.0,
            tick_pad_pt: 5.0,
            outer_pad_pt: 8.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub spine: skia::Color,
    pub text: skia::Color,
    pub grid_width_pt: f32,
    pub spine_width_pt: f32,
    /// Outlier marker size in points.
    pub flier_size_pt: f32,
    pub palette: &'static [u32],
    /// Saturation multiplier applied to palette colors for box fills.
    pub saturation: f32,
    pub typography: Typography,
}

impl Theme {
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            spine: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            text: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            grid_width_pt: 1.5,
            spine_width_pt: 1.875,
            flier_size_pt: 5.0,
            palette: &SET2,
            saturation: 0.75,
            typography: Typography::default(),
        }
    }

    /// Raw palette color for category `index` (wraps around).
    pub fn palette_color(&self, index: usize) -> skia::Color {
        if self.palette.is_empty() {
            return skia::Color::from_argb(255, 0x80, 0x80, 0x80);
        }
        skia::Color::new(self.palette[index % self.palette.len()])
    }

    /// Fill colors for `count` boxes, desaturated by the theme's factor.
    pub fn box_fills(&self, count: usize) -> Vec<skia::Color> {
        (0..count)
            .map(|i| desaturate(self.palette_color(i), self.saturation))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::whitegrid()
    }
}

/// Gray used for box outlines, whiskers, medians and outliers:
/// 60% of the darkest fill's lightness.
pub fn edge_gray(fills: &[skia::Color]) -> skia::Color {
    let lum = fills
        .iter()
        .map(|c| rgb_to_hls(unit(c.r()), unit(c.g()), unit(c.b())).1)
        .fold(f32::INFINITY, f32::min);
    let lum = if lum.is_finite() { lum * 0.6 } else { 0.25 };
    let v = byte(lum);
    skia::Color::from_argb(255, v, v, v)
}

/// Scale the HLS saturation of `color` by `factor` (1.0 keeps it unchanged).
pub fn desaturate(color: skia::Color, factor: f32) -> skia::Color {
    let (h, l, s) = rgb_to_hls(unit(color.r()), unit(color.g()), unit(color.b()));
    let (r, g, b) = hls_to_rgb(h, l, (s * factor).clamp(0.0, 1.0));
    skia::Color::from_argb(color.a(), byte(r), byte(g), byte(b))
}

fn unit(v: u8) -> f32 {
    v as f32 / 255.0
}

fn byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rgb_to_hls(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) * 0.5;
    if (maxc - minc).abs() < f32::EPSILON {
        return (0.0, l, 0.0);
    }
    let delta = maxc - minc;
    let s = if l <= 0.5 { delta / (maxc + minc) } else { delta / (2.0 - maxc - minc) };
    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

fn hls_to_rgb(h: f32, l: f32, s: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: skia::Color, b: skia::Color) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
        d(a.r(), b.r()) && d(a.g(), b.g()) && d(a.b(), b.b()) && a.a() == b.a()
    }

    #[test]
    fn full_saturation_is_identity() {
        for &argb in SET2.iter() {
            let c = skia::Color::new(argb);
            assert!(close(desaturate(c, 1.0), c), "{:08x}", argb);
        }
    }

    #[test]
    fn desaturation_moves_toward_gray() {
        let c = skia::Color::new(SET2[1]);
        let d = desaturate(c, 0.75);
        let spread = |x: skia::Color| x.r().max(x.g()).max(x.b()) - x.r().min(x.g()).min(x.b());
        assert!(spread(d) < spread(c));
        let gray = skia::Color::from_argb(255, 90, 90, 90);
        assert!(close(desaturate(gray, 0.5), gray));
    }

    #[test]
    fn edge_is_darker_neutral_gray() {
        let fills = Theme::whitegrid().box_fills(4);
        let e = edge_gray(&fills);
        assert_eq!(e.r(), e.g());
        assert_eq!(e.g(), e.b());
        assert!(e.r() < 128);
    }

    #[test]
    fn palette_cycles() {
        let t = Theme::whitegrid();
        assert_eq!(t.palette_color(0), t.palette_color(SET2.len()));
        assert_ne!(t.palette_color(0), t.palette_color(1));
    }
}
