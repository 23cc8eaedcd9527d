// File: crates/chart-core/src/chart.rs
// Summary: Box-plot chart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::category::Category;
use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::{BandScale, ValueScale};
use crate::stats::BoxStats;
use crate::text::{Anchor, TextShaper, Weight};
use crate::theme::{edge_gray, Theme};
use crate::types::{pt_to_px, Insets, DPI, FIGURE_INCHES};

/// Approximate number of value-axis intervals.
const Y_TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Canvas size in inches (width, height).
    pub figure_inches: (f32, f32),
    pub dpi: f32,
    /// Fixed margins; `None` fits them to the title, labels and tick text.
    pub insets: Option<Insets>,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Box outline, whisker and median stroke width in points.
    pub line_width_pt: f32,
    /// Box width as a fraction of the category band.
    pub box_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure_inches: (FIGURE_INCHES, FIGURE_INCHES),
            dpi: DPI,
            insets: None,
            theme: Theme::whitegrid(),
            draw_labels: true,
            line_width_pt: 2.0,
            box_width: 0.8,
        }
    }
}

impl RenderOptions {
    /// Native raster size: inches times DPI, rounded to whole pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let (w, h) = self.figure_inches;
        ((w * self.dpi).round() as i32, (h * self.dpi).round() as i32)
    }

    #[inline]
    pub fn px(&self, pt: f32) -> f32 {
        pt_to_px(pt, self.dpi)
    }

    pub fn validate(&self) -> Result<()> {
        let (w_in, h_in) = self.figure_inches;
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ChartError::Config(format!("dpi must be positive, got {}", self.dpi)));
        }
        if !(w_in.is_finite() && h_in.is_finite() && w_in > 0.0 && h_in > 0.0) {
            return Err(ChartError::Config(format!(
                "figure size must be positive, got {}x{} in",
                w_in, h_in
            )));
        }
        let (w, h) = self.pixel_size();
        if w < 1 || h < 1 {
            return Err(ChartError::Config(format!("canvas rounds to {}x{} pixels", w, h)));
        }
        if let Some(insets) = self.insets {
            if insets.hsum() as i32 >= w || insets.vsum() as i32 >= h {
                return Err(ChartError::Config(format!(
                    "insets {:?} leave no plot area on a {}x{} canvas",
                    insets, w, h
                )));
            }
        }
        if !(self.box_width > 0.0 && self.box_width <= 1.0) {
            return Err(ChartError::Config(format!(
                "box width must be in (0, 1], got {}",
                self.box_width
            )));
        }
        if !(self.line_width_pt.is_finite() && self.line_width_pt >= 0.0) {
            return Err(ChartError::Config(format!(
                "line width must be non-negative, got {}",
                self.line_width_pt
            )));
        }
        Ok(())
    }
}

/// Grouped box plot: one box per category, categories laid out in insertion order.
pub struct BoxPlotChart {
    pub title: String,
    pub categories: Vec<Category>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl BoxPlotChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: Vec::new(),
            x_axis: Axis::categorical("Category", 0),
            y_axis: Axis::default_value(),
        }
    }

    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_axis.label = x_label.into();
        self.y_axis.label = y_label.into();
        self
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
        self.x_axis.min = -0.5;
        self.x_axis.max = self.categories.len() as f64 - 0.5;
    }

    /// Category labels in x-axis order.
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn box_stats(&self) -> Vec<Option<BoxStats>> {
        self.categories.iter().map(Category::stats).collect()
    }

    /// Fit the value axis to every whisker and outlier, padded by `margin` of the span per side.
    pub fn autoscale_axes(&mut self, margin: f64) -> Result<()> {
        let (lo, hi) = self
            .box_stats()
            .iter()
            .flatten()
            .map(BoxStats::extent)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
        if !lo.is_finite() || !hi.is_finite() {
            return Err(ChartError::EmptyChart);
        }
        self.y_axis.fit(lo, hi, margin);
        self.x_axis.min = -0.5;
        self.x_axis.max = self.categories.len() as f64 - 0.5;
        Ok(())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
            }
        }
        std::fs::write(path, &bytes).map_err(|e| ChartError::io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote chart PNG");
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        opts.validate()?;
        let (width, height) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        debug!(width, height, categories = self.categories.len(), "rendering box plot");
        self.draw(surface.canvas(), opts, width, height);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, width: i32, height: i32) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let step = nice_step(self.y_axis.span(), Y_TICK_TARGET);
        let ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);
        let tick_labels: Vec<String> = ticks.iter().map(|&t| format_tick(t, step)).collect();

        let plot = match (opts.insets, &shaper) {
            (Some(insets), _) => rect_from_insets(width, height, &insets),
            (None, Some(shaper)) => self.fit_plot_rect(shaper, opts, width, height, &tick_labels),
            (None, None) => rect_from_insets(width, height, &Insets::default()),
        }
        .normalized();

        let band = BandScale::new(plot.left, plot.right, self.categories.len());
        let vscale = ValueScale::new_linear(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, theme, opts, &plot, &vscale, &ticks);

        let fills = theme.box_fills(self.categories.len());
        let edge = edge_gray(&fills);
        for (i, stats) in self.box_stats().iter().enumerate() {
            let Some(stats) = stats else { continue };
            let style = BoxStyle {
                fill: fills[i],
                edge,
                line_px: opts.px(opts.line_width_pt),
                flier_px: opts.px(theme.flier_size_pt),
            };
            draw_box(canvas, stats, band.center(i), band.band_width() * opts.box_width, &vscale, &style);
        }

        draw_spines(canvas, theme, opts, &plot);

        if let Some(shaper) = &shaper {
            self.draw_text(canvas, shaper, opts, &plot, &band, &vscale, &ticks, &tick_labels, height);
        }
    }

    /// Plot rectangle leaving just enough room for the title, axis labels and tick labels.
    fn fit_plot_rect(
        &self,
        shaper: &TextShaper,
        opts: &RenderOptions,
        width: i32,
        height: i32,
        tick_labels: &[String],
    ) -> PlotRect {
        let ty = &opts.theme.typography;
        let pad = opts.px(ty.outer_pad_pt);
        let tick_px = opts.px(ty.tick_pt);
        let label_px = opts.px(ty.label_pt);
        let label_gap = opts.px(ty.label_pad_pt);
        let tick_gap = opts.px(ty.tick_pad_pt);

        let text_h = |text: &str, size: f32, weight: Weight| -> f32 {
            if text.is_empty() { 0.0 } else { shaper.measure(text, size, weight).1 }
        };

        let title_h = text_h(&self.title, opts.px(ty.title_pt), Weight::Bold);
        let title_pad = if self.title.is_empty() { 0.0 } else { opts.px(ty.title_pad_pt) };
        let x_label_h = text_h(&self.x_axis.label, label_px, Weight::Bold);
        // rotated, so its line height is horizontal extent
        let y_label_w = text_h(&self.y_axis.label, label_px, Weight::Bold);

        let tick_w = tick_labels
            .iter()
            .map(|t| shaper.measure(t, tick_px, Weight::Regular).0)
            .fold(0.0f32, f32::max);
        let cat_h = self
            .categories
            .iter()
            .map(|c| text_h(&c.label, tick_px, Weight::Regular))
            .fold(0.0f32, f32::max);

        let left = pad + y_label_w + label_gap + tick_w + tick_gap;
        let top = pad + title_h + title_pad;
        let bottom = height as f32 - pad - x_label_h - label_gap - cat_h - tick_gap;

        // Keep the last category label from running off the right edge.
        let mut right = width as f32 - pad;
        if let Some(last) = self.categories.last() {
            let band = BandScale::new(left, right, self.categories.len());
            let label_w = shaper.measure(&last.label, tick_px, Weight::Regular).0;
            right -= (label_w * 0.5 - band.band_width() * 0.5).max(0.0);
        }

        PlotRect::from_ltrb(left, top, right, bottom)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        plot: &PlotRect,
        band: &BandScale,
        vscale: &ValueScale,
        ticks: &[f64],
        tick_labels: &[String],
        height: i32,
    ) {
        let theme = &opts.theme;
        let ty = &theme.typography;
        let pad = opts.px(ty.outer_pad_pt);
        let tick_px = opts.px(ty.tick_pt);
        let label_px = opts.px(ty.label_pt);
        let tick_gap = opts.px(ty.tick_pad_pt);

        // Title
        shaper.draw(
            canvas,
            &self.title,
            (plot.center_x(), plot.top - opts.px(ty.title_pad_pt)),
            opts.px(ty.title_pt),
            theme.text,
            Weight::Bold,
            Anchor::BottomCenter,
        );

        // Value ticks
        for (&t, label) in ticks.iter().zip(tick_labels) {
            shaper.draw(
                canvas,
                label,
                (plot.left - tick_gap, vscale.to_px(t)),
                tick_px,
                theme.text,
                Weight::Regular,
                Anchor::CenterRight,
            );
        }

        // Category ticks
        for (i, c) in self.categories.iter().enumerate() {
            shaper.draw(
                canvas,
                &c.label,
                (band.center(i), plot.bottom + tick_gap),
                tick_px,
                theme.text,
                Weight::Regular,
                Anchor::TopCenter,
            );
        }

        // Axis labels
        shaper.draw(
            canvas,
            &self.x_axis.label,
            (plot.center_x(), height as f32 - pad),
            label_px,
            theme.text,
            Weight::Bold,
            Anchor::BottomCenter,
        );

        let (_, y_label_h) = shaper.measure(&self.y_axis.label, label_px, Weight::Bold);
        canvas.save();
        canvas.translate((pad + y_label_h * 0.5, plot.center_y()));
        canvas.rotate(-90.0, None);
        shaper.draw(
            canvas,
            &self.y_axis.label,
            (0.0, 0.0),
            label_px,
            theme.text,
            Weight::Bold,
            Anchor::Center,
        );
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

struct BoxStyle {
    fill: skia::Color,
    edge: skia::Color,
    line_px: f32,
    flier_px: f32,
}

fn rect_from_insets(width: i32, height: i32, insets: &Insets) -> PlotRect {
    PlotRect::from_ltrb(
        insets.left as f32,
        insets.top as f32,
        width as f32 - insets.right as f32,
        height as f32 - insets.bottom as f32,
    )
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    opts: &RenderOptions,
    plot: &PlotRect,
    vscale: &ValueScale,
    ticks: &[f64],
) {
    let mut bg = skia::Paint::default();
    bg.set_color(theme.plot_background);
    canvas.draw_rect(plot.to_skia(), &bg);

    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(opts.px(theme.grid_width_pt));

    // horizontals only; the category axis carries no grid
    for &t in ticks {
        let y = vscale.to_px(t);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, theme: &Theme, opts: &RenderOptions, plot: &PlotRect) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.spine);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(opts.px(theme.spine_width_pt));
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_box(
    canvas: &skia::Canvas,
    stats: &BoxStats,
    cx: f32,
    box_w: f32,
    vscale: &ValueScale,
    style: &BoxStyle,
) {
    let half = box_w * 0.5;
    let top = vscale.to_px(stats.q3);
    let bottom = vscale.to_px(stats.q1).max(top + 1.0);
    let rect = skia::Rect::from_ltrb(cx - half, top, cx + half, bottom);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(style.fill);
    canvas.draw_rect(rect, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.line_px);
    stroke.set_color(style.edge);
    canvas.draw_rect(rect, &stroke);

    // median
    let ym = vscale.to_px(stats.median);
    canvas.draw_line((cx - half, ym), (cx + half, ym), &stroke);

    // whiskers with caps at half the box width
    let cap = half * 0.5;
    for (from, to) in [(stats.q1, stats.whisker_low), (stats.q3, stats.whisker_high)] {
        let (y0, y1) = (vscale.to_px(from), vscale.to_px(to));
        canvas.draw_line((cx, y0), (cx, y1), &stroke);
        canvas.draw_line((cx - cap, y1), (cx + cap, y1), &stroke);
    }

    // outliers as diamonds
    let mut flier = skia::Paint::default();
    flier.set_anti_alias(true);
    flier.set_style(skia::paint::Style::Fill);
    flier.set_color(style.edge);
    let r = style.flier_px * 0.5;
    for &v in &stats.outliers {
        let y = vscale.to_px(v);
        let mut builder = skia::PathBuilder::new();
        builder.move_to((cx, y - r));
        builder.line_to((cx + r * 0.7, y));
        builder.line_to((cx, y + r));
        builder.line_to((cx - r * 0.7, y));
        builder.close();
        let path = builder.detach();
        canvas.draw_path(&path, &flier);
    }
}
