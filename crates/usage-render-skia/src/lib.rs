// File: crates/usage-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for the focus/context usage chart.
// Notes:
// - Reads everything it draws from a `FocusContextController`; it never mutates chart
//   state. Legend visibility lives here, not in the core.

pub mod legend;
pub mod text;
pub mod theme;
pub mod ticks;

use anyhow::Result;
use skia_safe as skia;
use usage_core::{BrushState, FocusContextController, HoverReadout, PlotRect, Sample, SeriesKind, TimeScale, ValueScale};

pub use legend::Legend;
pub use theme::Theme;

use text::{Anchor, Labeler};

use ticks::{date_format, date_ticks, nice_ticks};

pub struct RenderOptions {
    pub theme: Theme,
    /// Text is platform dependent; snapshot tests switch it off.
    pub draw_labels: bool,
    /// Approximate tick count per axis.
    pub ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true, ticks: 6 }
    }
}

pub struct SkiaRenderer {
    pub opts: RenderOptions,
    labels: Labeler,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts, labels: Labeler::new() } }

    /// Draw the current controller frame and encode it as PNG.
    pub fn render_png_bytes(&self, ctl: &FocusContextController, hover: Option<&HoverReadout>, legend: &Legend) -> Result<Vec<u8>> {
        let layout = ctl.layout();
        let (w, h) = (layout.width().max(1), layout.height().max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.opts.theme.background);

        self.draw_focus(canvas, ctl, legend);
        self.draw_context(canvas, ctl);
        if let Some(r) = hover {
            self.draw_hover(canvas, ctl, r, legend);
        }
        self.draw_legend(canvas, ctl, legend);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        ctl: &FocusContextController,
        hover: Option<&HoverReadout>,
        legend: &Legend,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(ctl, hover, legend)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path.as_ref(), bytes)?;
        tracing::debug!(path = %output_png_path.as_ref().display(), "wrote chart");
        Ok(())
    }

    fn draw_focus(&self, canvas: &skia::Canvas, ctl: &FocusContextController, legend: &Legend) {
        let t = &self.opts.theme;
        let rect = ctl.layout().focus_rect();
        let d = ctl.domain();
        let eligible = ctl.eligible_series();

        draw_value_grid(canvas, &rect, &d.focus_y, self.opts.ticks, t.grid);

        canvas.save();
        canvas.clip_rect(to_rect(&rect), None, Some(true));
        if eligible.contains(&SeriesKind::GeneralSupply) && legend.is_visible(SeriesKind::GeneralSupply) {
            let path = area_path(ctl.slice().as_slice(), &d.focus_x, &d.focus_y, rect.bottom);
            canvas.draw_path(&path, &fill_paint(t.general_supply_fill));
        }
        if eligible.contains(&SeriesKind::NationalAverage) && legend.is_visible(SeriesKind::NationalAverage) {
            let y = d.focus_y_right.to_px(ctl.config().national_average_kwh).clamp(rect.top, rect.bottom);
            canvas.draw_line((rect.left, y), (rect.right, y), &stroke_paint(t.national_average, 5.0));
        }
        canvas.restore();

        let axis = stroke_paint(t.axis_line, 1.5);
        canvas.draw_line((rect.left, rect.bottom), (rect.right, rect.bottom), &axis);
        canvas.draw_line((rect.left, rect.top), (rect.left, rect.bottom), &axis);
        canvas.draw_line((rect.right, rect.top), (rect.right, rect.bottom), &axis);

        if self.opts.draw_labels {
            let c = t.axis_label;
            for v in nice_ticks(d.focus_y.vmin, d.focus_y.vmax, self.opts.ticks) {
                let y = d.focus_y.to_px(v);
                self.labels.draw(canvas, &format!("{v:.2}"), (rect.left - 4.0, y + 4.0), 11.0, c, Anchor::End, true);
            }
            for v in nice_ticks(d.focus_y_right.vmin, d.focus_y_right.vmax, self.opts.ticks) {
                let y = d.focus_y_right.to_px(v);
                self.labels.draw(canvas, &format!("{v:.2}"), (rect.right + 4.0, y + 4.0), 11.0, c, Anchor::Start, true);
            }
            self.draw_date_labels(canvas, &rect, &d.focus_x);
            self.labels.draw(canvas, "General Supply KWH", (rect.left + 6.0, rect.top + 14.0), 12.0, c, Anchor::Start, false);
            self.labels.draw(canvas, "Off Peak KWH", (rect.right - 6.0, rect.top + 14.0), 12.0, c, Anchor::End, false);
        }
    }

    fn draw_context(&self, canvas: &skia::Canvas, ctl: &FocusContextController) {
        let t = &self.opts.theme;
        let rect = ctl.layout().context_rect();
        let d = ctl.domain();

        // One sample per horizontal pixel is all the overview can show.
        let samples = usage_core::lttb(ctl.slice().as_slice(), rect.width().max(2.0) as usize);
        canvas.save();
        canvas.clip_rect(to_rect(&rect), None, Some(true));
        canvas.draw_path(&area_path(&samples, &d.context_x, &d.context_y, rect.bottom), &fill_paint(t.general_supply_fill));
        canvas.restore();
        canvas.draw_line((rect.left, rect.bottom), (rect.right, rect.bottom), &stroke_paint(t.axis_line, 1.0));

        let window = match ctl.state() {
            BrushState::Dragging { extent } => extent,
            BrushState::Snapping { target } => Some(target),
            BrushState::Idle => ctl.selection(),
        };
        if let Some(sel) = window {
            let x0 = d.context_x.to_px(sel.start).clamp(rect.left, rect.right);
            let x1 = d.context_x.to_px(sel.end).clamp(rect.left, rect.right);
            let brush = skia::Rect::from_ltrb(x0, rect.top, x1.max(x0 + 1.0), rect.bottom);
            canvas.draw_rect(brush, &fill_paint(t.brush_fill));
            canvas.draw_rect(brush, &stroke_paint(t.brush_stroke, 1.0));
            // Half-disc resize handles on both edges.
            let r = rect.height() / 4.0;
            let cy = rect.top + rect.height() / 2.0;
            for (x, start) in [(x0, 90.0f32), (x1, -90.0f32)] {
                let oval = skia::Rect::from_ltrb(x - r, cy - r, x + r, cy + r);
                canvas.draw_arc(oval, start, 180.0, true, &fill_paint(t.brush_stroke));
            }
        }

        if self.opts.draw_labels {
            self.draw_date_labels(canvas, &rect, &d.context_x);
        }
    }

    fn draw_hover(&self, canvas: &skia::Canvas, ctl: &FocusContextController, r: &HoverReadout, legend: &Legend) {
        let t = &self.opts.theme;
        let rect = ctl.layout().focus_rect();
        if !rect.contains_x(r.x) {
            return;
        }
        let guide = stroke_paint(t.marker_stroke, 1.0);
        let ring = stroke_paint(t.marker_stroke, 1.5);
        let fill = fill_paint(t.marker_fill);

        let general = r.general_marker_visible(legend.is_visible(SeriesKind::GeneralSupply));
        if general {
            canvas.draw_line((rect.left, r.y_general), (r.x, r.y_general), &guide);
            canvas.draw_circle((r.x, r.y_general), 7.0, &fill);
            canvas.draw_circle((r.x, r.y_general), 7.0, &ring);
        }
        let off_peak = r.off_peak_marker_visible(legend.is_visible(SeriesKind::NationalAverage));
        if off_peak {
            canvas.draw_line((rect.right, r.y_off_peak), (r.x, r.y_off_peak), &guide);
            canvas.draw_circle((r.x, r.y_off_peak), 7.0, &fill);
            canvas.draw_circle((r.x, r.y_off_peak), 7.0, &ring);
        }

        if self.opts.draw_labels && (general || off_peak) {
            let line = format!("{} kWh  {}  {}x national average", r.kwh_text, r.date_text, r.ratio_text());
            self.labels.draw(canvas, &line, (rect.left + 6.0, rect.top + 32.0), 13.0, t.axis_label, Anchor::Start, false);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, ctl: &FocusContextController, legend: &Legend) {
        let t = &self.opts.theme;
        let rect = ctl.layout().focus_rect();
        let s = ctl.layout().scale;
        let (x, mut y) = (rect.right - 200.0 * s, rect.top + 20.0 * s);
        for (kind, visible) in legend.entries() {
            let color = if visible { t.series_color(kind) } else { t.legend_disabled };
            let mut tri = skia::Path::new();
            tri.move_to((x, y + 6.0 * s));
            tri.line_to((x + 6.0 * s, y - 6.0 * s));
            tri.line_to((x + 12.0 * s, y + 6.0 * s));
            tri.close();
            canvas.draw_path(&tri, &fill_paint(color));
            if self.opts.draw_labels {
                self.labels.draw(canvas, kind.label(), (x + 18.0 * s, y + 5.0 * s), 12.0 * s, t.axis_label, Anchor::Start, false);
            }
            y += 22.0 * s;
        }
    }

    fn draw_date_labels(&self, canvas: &skia::Canvas, rect: &PlotRect, x: &TimeScale) {
        let (d0, d1) = x.domain();
        let fmt = date_format(d0, d1);
        for t in date_ticks(d0, d1, self.opts.ticks) {
            let label = t.format(fmt).to_string();
            self.labels.draw(canvas, &label, (x.to_px(t), rect.bottom + 16.0), 11.0, self.opts.theme.axis_label, Anchor::Middle, false);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = fill_paint(color);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p
}

/// Closed area between the series and `baseline_px`.
fn area_path(samples: &[Sample], x: &TimeScale, y: &ValueScale, baseline_px: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return path;
    };
    path.move_to((x.to_px(first.timestamp), baseline_px));
    for s in samples {
        path.line_to((x.to_px(s.timestamp), y.to_px(s.general_supply)));
    }
    path.line_to((x.to_px(last.timestamp), baseline_px));
    path.close();
    path
}

fn draw_value_grid(canvas: &skia::Canvas, rect: &PlotRect, y: &ValueScale, count: usize, color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    for v in nice_ticks(y.vmin, y.vmax, count) {
        let py = y.to_px(v);
        canvas.draw_line((rect.left, py), (rect.right, py), &paint);
    }
}
