// File: crates/usage-core/src/controller.rs
// Summary: Focus/context controller; owns the session state and turns UI events into
// state transitions plus render instructions.
// Notes:
// - Every handler works from the committed state and the event payload alone, so a
//   handler replayed out of turn (e.g. a resize mid-drag) leaves the state consistent.
// - Per-interaction failures are absorbed in `handle`; the typed `on_*` methods
//   return them for callers that want the detail.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, info, trace, warn};

use crate::brush::{peak_selection, snap_to_days, Selection};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::hover::{HoverReadout, HoverTracker};
use crate::night::NightConsumptionFilter;
use crate::range::RangeSelector;
use crate::sample::{Series, SeriesKind};
use crate::stats::{self, Stats};
use crate::store::TimeSeriesStore;
use crate::types::Layout;
use crate::view::DisplayDomain;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushState {
    Idle,
    /// Pointer held on the brush; `extent` is the live window (`None` = cleared).
    Dragging { extent: Option<Selection> },
    /// Released; the brush is animating onto `target`.
    Snapping { target: Selection },
}

/// Who produced a brush-end. Programmatic ends are the echo of a snap
/// animation and must not snap again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushOrigin {
    User,
    Programmatic,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderInstruction {
    None,
    /// Redraw the focus panel only; the context panel is unchanged.
    Focus,
    /// Redraw both panels.
    Full,
    /// Animate the brush to `selection` and redraw the focus panel.
    SnapBrush { selection: Selection },
    /// Show (`Some`) or hide (`None`) the hover markers and sidebar readout.
    Tooltip(Option<HoverReadout>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// Month selector changed; the selector reports a 0-based index.
    MonthSelected { selector_index: usize },
    BrushStart,
    BrushMove(Option<Selection>),
    BrushEnd { extent: Option<Selection>, origin: BrushOrigin },
    SnapSettled,
    PointerMove { x: f32 },
    PointerOut,
    Resize { width: u32, height: u32 },
}

pub struct FocusContextController {
    config: ChartConfig,
    store: TimeSeriesStore,
    filter: NightConsumptionFilter,
    selector: RangeSelector,
    hover: HoverTracker,
    layout: Layout,
    slice: Series,
    stats: Stats,
    domain: DisplayDomain,
    selection: Option<Selection>,
    state: BrushState,
    month: Option<u32>,
}

impl FocusContextController {
    /// Controller over `store` with nothing selected yet. Call
    /// [`on_month_change`](Self::on_month_change) or [`render`](Self::render) next.
    pub fn new(store: TimeSeriesStore, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let layout = Layout::new(config.layout);
        let slice = Series::new();
        let fallback = store.extent().unwrap_or_else(|| year_start(config.year));
        let domain = DisplayDomain::from_series(&slice, &layout, config.value_headroom, config.sample_interval(), fallback);
        Ok(Self {
            filter: config.night_filter(),
            selector: config.range_selector(),
            hover: HoverTracker::new(config.national_average_kwh).with_ordered(store.is_ordered()),
            config,
            store,
            layout,
            slice,
            stats: Stats::empty(),
            domain,
            selection: None,
            state: BrushState::Idle,
            month: None,
        })
    }

    /// Convenience: construct and show the configured initial month.
    pub fn with_initial_month(store: TimeSeriesStore, config: ChartConfig) -> Result<Self> {
        let month = config.initial_month;
        let mut ctl = Self::new(store, config)?;
        ctl.on_month_change(month)?;
        Ok(ctl)
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn store(&self) -> &TimeSeriesStore { &self.store }
    pub fn slice(&self) -> &Series { &self.slice }
    pub fn stats(&self) -> &Stats { &self.stats }
    pub fn domain(&self) -> &DisplayDomain { &self.domain }
    pub fn selection(&self) -> Option<Selection> { self.selection }
    pub fn state(&self) -> BrushState { self.state }
    pub fn month(&self) -> Option<u32> { self.month }
    pub fn layout(&self) -> &Layout { &self.layout }

    /// Window currently shown by the focus panel.
    pub fn focus_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.domain.focus_x.domain()
    }

    /// Series a renderer may draw right now. Whether each is switched on is the
    /// legend's business.
    pub fn eligible_series(&self) -> Vec<SeriesKind> {
        SeriesKind::ALL
            .into_iter()
            .filter(|k| match k {
                SeriesKind::GeneralSupply => !self.slice.is_empty(),
                SeriesKind::NationalAverage => true,
            })
            .collect()
    }

    fn fallback_extent(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.month
            .and_then(|m| self.selector.month_range(m).ok())
            .map(|r| (r.start, r.end))
            .or_else(|| self.store.extent())
            .unwrap_or_else(|| year_start(self.config.year))
    }

    /// Make `series` the active slice: fresh domains, fresh stats, and a
    /// default selection around the peak reading. Discards any prior selection.
    pub fn render(&mut self, series: Series) -> RenderInstruction {
        let fallback = self.fallback_extent();
        self.slice = series;
        self.stats = stats::compute(&self.slice);
        let domain = DisplayDomain::from_series(
            &self.slice,
            &self.layout,
            self.config.value_headroom,
            self.config.sample_interval(),
            fallback,
        );
        self.selection = peak_selection(&self.slice, self.config.peak_window());
        self.domain = domain.with_focus_window(self.selection);
        self.state = BrushState::Idle;
        debug!(samples = self.slice.len(), selection = ?self.selection, "rendered slice");
        RenderInstruction::Full
    }

    fn clamp_to_context(&self, extent: Option<Selection>) -> Option<Selection> {
        let (lo, hi) = self.domain.context_extent();
        extent.and_then(|s| s.clamp_to(lo, hi))
    }

    pub fn on_brush_start(&mut self) -> RenderInstruction {
        if !matches!(self.state, BrushState::Dragging { .. }) {
            debug!(from = ?self.state, "brush drag started");
            self.state = BrushState::Dragging { extent: self.selection };
        }
        RenderInstruction::None
    }

    /// Live drag feedback: retarget the focus window, nothing else.
    pub fn on_brush_move(&mut self, extent: Option<Selection>) -> RenderInstruction {
        let window = self.clamp_to_context(extent);
        self.state = BrushState::Dragging { extent: window };
        self.domain = self.domain.with_focus_window(window);
        RenderInstruction::Focus
    }

    pub fn on_brush_end(&mut self, extent: Option<Selection>, origin: BrushOrigin) -> RenderInstruction {
        if origin == BrushOrigin::Programmatic {
            trace!("ignoring programmatic brush end");
            return RenderInstruction::None;
        }
        let Some(raw) = self.clamp_to_context(extent) else {
            debug!("brush cleared; focus shows full context");
            self.selection = None;
            self.domain = self.domain.with_focus_window(None);
            self.state = BrushState::Idle;
            return RenderInstruction::Focus;
        };
        let (lo, hi) = self.domain.context_extent();
        let snapped = snap_to_days(raw);
        let target = snapped.clamp_to(lo, hi).unwrap_or(raw);
        debug!(start = %target.start, end = %target.end, "brush snapped to days");
        self.selection = Some(target);
        self.domain = self.domain.with_focus_window(Some(target));
        self.state = BrushState::Snapping { target };
        RenderInstruction::SnapBrush { selection: target }
    }

    pub fn on_snap_settled(&mut self) -> RenderInstruction {
        if let BrushState::Snapping { .. } = self.state {
            self.state = BrushState::Idle;
        }
        RenderInstruction::None
    }

    /// Re-slice to `month` (1-based). On error the previous slice stays.
    pub fn on_month_change(&mut self, month: u32) -> Result<RenderInstruction> {
        let range = self.selector.month_range(month)?;
        let week = self.selector.week_range(month)?;

        let slice = self.filter.apply(&self.store.query_range(range.start, range.end));
        // TODO: wire the week slice into a secondary panel once one exists.
        let week_slice = self.filter.apply(&self.store.query_range(week.start, week.end));
        trace!(month, samples = week_slice.len(), "computed week slice");

        self.month = Some(month);
        let instr = self.render(slice);
        match self.stats.summary {
            Some(s) => info!(month, samples = self.stats.count, sum = self.stats.sum, min = s.min, max = s.max, mean = s.mean, "month selected"),
            None => info!(month, "month selected; no data in range"),
        }
        Ok(instr)
    }

    /// Only the pixel mapping changes; domains, selection and any drag in
    /// progress are preserved.
    pub fn on_resize(&mut self, width: u32, height: u32) -> RenderInstruction {
        self.layout = self.layout.resized(width, height);
        self.domain = self.domain.relayout(&self.layout);
        debug!(width, height, scale = self.layout.scale, "resized");
        RenderInstruction::Full
    }

    pub fn on_pointer_move(&self, x: f32) -> Result<HoverReadout> {
        self.hover.locate(&self.slice, &self.domain, x)
    }

    pub fn on_pointer_out(&self) -> RenderInstruction {
        RenderInstruction::Tooltip(None)
    }

    /// Event entry point for UI glue. Never fails: a bad selector index or a
    /// hover with nothing under it degrades to no update / no tooltip.
    pub fn handle(&mut self, event: ChartEvent) -> RenderInstruction {
        match event {
            ChartEvent::MonthSelected { selector_index } => {
                match RangeSelector::month_from_selector(selector_index).and_then(|m| self.on_month_change(m)) {
                    Ok(instr) => instr,
                    Err(e) => {
                        warn!(selector_index, error = %e, "month change rejected; keeping current slice");
                        RenderInstruction::None
                    }
                }
            }
            ChartEvent::BrushStart => self.on_brush_start(),
            ChartEvent::BrushMove(extent) => self.on_brush_move(extent),
            ChartEvent::BrushEnd { extent, origin } => self.on_brush_end(extent, origin),
            ChartEvent::SnapSettled => self.on_snap_settled(),
            ChartEvent::PointerMove { x } => match self.on_pointer_move(x) {
                Ok(readout) => RenderInstruction::Tooltip(Some(readout)),
                Err(e @ ChartError::OutOfRange) => {
                    trace!(error = %e, "no tooltip");
                    RenderInstruction::Tooltip(None)
                }
                Err(e) => {
                    warn!(error = %e, "hover failed");
                    RenderInstruction::Tooltip(None)
                }
            },
            ChartEvent::PointerOut => self.on_pointer_out(),
            ChartEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }
}

fn year_start(year: i32) -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN);
    (start, start + Duration::days(1))
}
