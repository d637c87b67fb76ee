// File: crates/usage-core/src/lib.rs
// Summary: Core library entry point; overnight usage data windowing and the
// focus/context brush interaction, independent of any renderer.

pub mod error;
pub mod sample;
pub mod store;
pub mod night;
pub mod stats;
pub mod range;
pub mod types;
pub mod scale;
pub mod view;
pub mod brush;
pub mod hover;
pub mod controller;
pub mod config;
pub mod downsample;

pub use error::{ChartError, Result};
pub use sample::{Sample, Series, SeriesKind};
pub use store::{RawRow, TimeSeriesStore};
pub use night::NightConsumptionFilter;
pub use stats::{Stats, Summary};
pub use range::{month_range, week_range, DateRange, RangeSelector};
pub use types::{Insets, Layout, LayoutConfig, PlotRect};
pub use scale::{TimeScale, ValueScale};
pub use view::DisplayDomain;
pub use brush::{snap_to_days, Selection};
pub use hover::{locate, locate_date, locate_date_unordered, HoverReadout, HoverTracker};
pub use controller::{BrushOrigin, BrushState, ChartEvent, FocusContextController, RenderInstruction};
pub use config::{ChartConfig, NightConfig};
pub use downsample::lttb;
