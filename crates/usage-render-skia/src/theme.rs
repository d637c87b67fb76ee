// File: crates/usage-render-skia/src/theme.rs
// Summary: Colour palette for the usage chart.

use skia_safe as skia;
use usage_core::SeriesKind;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub general_supply: skia::Color,
    pub general_supply_fill: skia::Color,
    pub national_average: skia::Color,
    pub brush_fill: skia::Color,
    pub brush_stroke: skia::Color,
    pub marker_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub legend_disabled: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            general_supply: skia::Color::from_argb(255, 0, 151, 136),
            general_supply_fill: skia::Color::from_argb(204, 0, 151, 136), // 0.8 opacity
            national_average: skia::Color::from_argb(255, 71, 176, 75),
            brush_fill: skia::Color::from_argb(60, 0, 151, 136),
            brush_stroke: skia::Color::from_argb(255, 0, 110, 100),
            marker_stroke: skia::Color::from_argb(255, 0, 0, 0),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            legend_disabled: skia::Color::from_argb(255, 190, 190, 195),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            general_supply: skia::Color::from_argb(255, 0, 181, 164),
            general_supply_fill: skia::Color::from_argb(204, 0, 181, 164),
            national_average: skia::Color::from_argb(255, 96, 200, 100),
            brush_fill: skia::Color::from_argb(60, 0, 181, 164),
            brush_stroke: skia::Color::from_argb(255, 0, 220, 200),
            marker_stroke: skia::Color::from_argb(255, 235, 235, 245),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            legend_disabled: skia::Color::from_argb(255, 80, 80, 90),
        }
    }

    pub fn series_color(&self, kind: SeriesKind) -> skia::Color {
        match kind {
            SeriesKind::GeneralSupply => self.general_supply,
            SeriesKind::NationalAverage => self.national_average,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
