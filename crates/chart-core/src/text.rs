// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; supports bold runs and anchored placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Which point of the laid-out text box sits at the requested position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    BottomCenter,
    CenterRight,
    Center,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, weight: Weight) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        if weight == Weight::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, weight: Weight) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, weight);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of `text` as laid out at `size` pixels.
    pub fn measure(&self, text: &str, size: f32, weight: Weight) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), weight);
        (p.longest_line(), p.height())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: (f32, f32),
        size: f32,
        color: skia::Color,
        weight: Weight,
        anchor: Anchor,
    ) {
        let mut p = self.layout(text, size, color, weight);
        let (w, h) = (p.longest_line(), p.height());
        let (x, y) = at;
        // Paragraph paints from its top-left corner
        let origin = match anchor {
            Anchor::TopLeft => (x, y),
            Anchor::TopCenter => (x - w * 0.5, y),
            Anchor::BottomCenter => (x - w * 0.5, y - h),
            Anchor::CenterRight => (x - w, y - h * 0.5),
            Anchor::Center => (x - w * 0.5, y - h * 0.5),
        };
        p.paint(canvas, origin);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
