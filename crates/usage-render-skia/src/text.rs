// File: crates/usage-render-skia/src/text.rs
// Summary: Label drawing through Skia textlayout, so axis and readout text use real system fonts.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

pub struct Labeler {
    fonts: FontCollection,
}

impl Labeler {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn paragraph(&self, text: &str, size: f32, color: skia::Color, numeric: bool) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(if numeric { MONO } else { SANS });

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut p = builder.build();
        p.layout(10_000.0);
        p
    }

    /// Draw `text` with its baseline at `y`. Tick values use tabular digits.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), size: f32, color: skia::Color, anchor: Anchor, numeric: bool) {
        let mut p = self.paragraph(text, size, color, numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w / 2.0,
            Anchor::End => x - w,
        };
        p.paint(canvas, (left, y - size * 0.8));
    }
}

impl Default for Labeler {
    fn default() -> Self { Self::new() }
}
