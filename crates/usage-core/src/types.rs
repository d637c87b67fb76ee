// File: crates/usage-core/src/types.rs
// Summary: Surface size, panel margins and the derived focus/context plot rectangles.

use serde::{Deserialize, Serialize};

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn hsum(&self) -> u32 { self.left + self.right }
}

/// Plot rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains_x(&self, x: f32) -> bool { x >= self.left && x <= self.right }
}

/// Design-time geometry of the two stacked panels. Both panels share the
/// surface width; the context panel sits below the focus panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: u32,
    pub height: u32,
    pub focus: Insets,
    pub context: Insets,
    /// Space reserved on the right of both plots for the off-peak axis.
    pub right_axis_gutter: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 769,
            height: 500,
            focus: Insets::new(40, 10, 10, 100),
            context: Insets::new(40, 10, 430, 20),
            right_axis_gutter: 32,
        }
    }
}

/// Concrete layout at the current surface size. Resizing scales the design
/// geometry uniformly, keeping the design aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub design: LayoutConfig,
    pub scale: f32,
}

impl Layout {
    pub fn new(design: LayoutConfig) -> Self {
        Self { design, scale: 1.0 }
    }

    /// Fit the design into `width` x `height`.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        let sx = width as f32 / self.design.width.max(1) as f32;
        let sy = height as f32 / self.design.height.max(1) as f32;
        let scale = sx.min(sy);
        Self { design: self.design, scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 } }
    }

    pub fn width(&self) -> i32 { (self.design.width as f32 * self.scale).round() as i32 }
    pub fn height(&self) -> i32 { (self.design.height as f32 * self.scale).round() as i32 }

    fn panel(&self, m: &Insets, panel_height: i64) -> PlotRect {
        let d = &self.design;
        let plot_w = (d.width as i64 - m.hsum() as i64 - d.right_axis_gutter as i64).max(1) as f32;
        let left = m.left as f32;
        let top = m.top as f32;
        PlotRect {
            left: left * self.scale,
            top: top * self.scale,
            right: (left + plot_w) * self.scale,
            bottom: (top + panel_height.max(1) as f32) * self.scale,
        }
    }

    pub fn focus_rect(&self) -> PlotRect {
        let m = self.design.focus;
        self.panel(&m, self.design.height as i64 - m.top as i64 - m.bottom as i64)
    }

    pub fn context_rect(&self) -> PlotRect {
        let m = self.design.context;
        self.panel(&m, self.design.height as i64 - m.top as i64 - m.bottom as i64)
    }
}

impl Default for Layout {
    fn default() -> Self { Self::new(LayoutConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panels_match_design() {
        let l = Layout::default();
        let f = l.focus_rect();
        assert_eq!((f.left, f.top, f.width(), f.height()), (40.0, 10.0, 687.0, 390.0));
        let c = l.context_rect();
        assert_eq!((c.top, c.height()), (430.0, 50.0));
    }

    #[test]
    fn resize_scales_uniformly() {
        let l = Layout::default().resized(769 * 2, 2000);
        assert_eq!(l.scale, 2.0);
        assert_eq!(l.focus_rect().width(), 687.0 * 2.0);
        assert_eq!(l.height(), 1000);
    }
}
