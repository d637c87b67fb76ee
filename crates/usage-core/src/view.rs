// File: crates/usage-core/src/view.rs
// Focus and context display domains derived from the active slice.

use chrono::{Duration, NaiveDateTime};

use crate::brush::Selection;
use crate::sample::Series;
use crate::scale::{TimeScale, ValueScale};
use crate::types::Layout;

/// Scales for both panels. The context x domain always spans the whole slice;
/// the focus x domain is the brushed window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayDomain {
    pub focus_x: TimeScale,
    pub focus_y: ValueScale,
    /// Off-peak axis on the right of the focus panel.
    pub focus_y_right: ValueScale,
    pub context_x: TimeScale,
    pub context_y: ValueScale,
}

impl DisplayDomain {
    /// Domains for `series`. An empty series falls back to `fallback` so the
    /// axes still have something to show.
    pub fn from_series(series: &Series, layout: &Layout, headroom: f64, min_span: Duration, fallback: (NaiveDateTime, NaiveDateTime)) -> Self {
        let (d0, d1) = series.extent().unwrap_or(fallback);
        let y_max = series.max_general_supply().unwrap_or(0.0) * headroom;
        let y1_max = series.max_off_peak().unwrap_or(0.0) * headroom;

        let f = layout.focus_rect();
        let c = layout.context_rect();
        let focus_x = TimeScale::new(f.left, f.right, d0, d1, min_span);
        let focus_y = ValueScale::new_linear(f.top, f.bottom, 0.0, y_max);
        Self {
            focus_x,
            focus_y,
            focus_y_right: ValueScale::new_linear(f.top, f.bottom, 0.0, y1_max),
            context_x: focus_x.with_range(c.left, c.right),
            context_y: focus_y.with_range(c.top, c.bottom),
        }
    }

    pub fn context_extent(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.context_x.domain()
    }

    /// Point the focus panel at `window`, or back at the full context extent.
    pub fn with_focus_window(&self, window: Option<Selection>) -> Self {
        let (d0, d1) = match window {
            Some(sel) => (sel.start, sel.end),
            None => self.context_x.domain(),
        };
        Self { focus_x: self.focus_x.with_domain(d0, d1), ..*self }
    }

    /// Re-project onto a new layout, keeping every domain.
    pub fn relayout(&self, layout: &Layout) -> Self {
        let f = layout.focus_rect();
        let c = layout.context_rect();
        Self {
            focus_x: self.focus_x.with_range(f.left, f.right),
            focus_y: self.focus_y.with_range(f.top, f.bottom),
            focus_y_right: self.focus_y_right.with_range(f.top, f.bottom),
            context_x: self.context_x.with_range(c.left, c.right),
            context_y: self.context_y.with_range(c.top, c.bottom),
        }
    }
}
