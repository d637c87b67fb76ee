// File: crates/demo/src/main.rs
// Summary: Demo loads a half-hourly usage CSV, selects a month, replays a brush drag and a
// hover through the controller, and renders each stage to PNG.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Duration;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use usage_core::{
    BrushOrigin, ChartEvent, FocusContextController, RenderInstruction, Selection, TimeSeriesStore,
};
use usage_render_skia::{Legend, RenderOptions, SkiaRenderer, Theme};

use crate::config::{AppConfig, LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "usage-demo", about = "Render overnight electricity usage as focus/context PNGs")]
struct Args {
    /// Half-hourly usage CSV (End Datetime, General Supply KWH, Off Peak KWH).
    #[arg(long, default_value = "6_months.csv")]
    data: PathBuf,
    /// Optional JSON5 config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Month to show (1-12); defaults to the configured initial month.
    #[arg(long)]
    month: Option<u32>,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    /// Theme name (light or dark).
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app = AppConfig::load(args.config.as_deref())?;
    init_logging(&app.logging);

    let store = TimeSeriesStore::from_path(&args.data)
        .with_context(|| format!("failed to load usage CSV '{}'", args.data.display()))?;
    info!(path = %args.data.display(), rows = store.len(), ordered = store.is_ordered(), "loaded usage data");

    let month = args.month.unwrap_or(app.chart.initial_month);
    let mut ctl = FocusContextController::new(store, app.chart.clone())?;
    ctl.on_month_change(month).with_context(|| format!("selecting month {month}"))?;

    let theme = Theme::by_name(&args.theme).unwrap_or_else(|| {
        warn!(theme = %args.theme, "unknown theme; using light");
        Theme::light()
    });
    let renderer = SkiaRenderer::new(RenderOptions { theme, ..Default::default() });
    let legend = Legend::new();

    renderer.render_to_png(&ctl, None, &legend, out_path(&args.out_dir, month, "overview"))?;

    // Replay a user drag over days 3..5 of the context window, released mid-day.
    let (lo, _) = ctl.domain().context_extent();
    if let Some(drag) = Selection::new(lo + Duration::days(2) + Duration::hours(5), lo + Duration::days(4) + Duration::hours(13)) {
        ctl.handle(ChartEvent::BrushStart);
        ctl.handle(ChartEvent::BrushMove(Some(drag)));
        renderer.render_to_png(&ctl, None, &legend, out_path(&args.out_dir, month, "dragging"))?;
        if let RenderInstruction::SnapBrush { selection } = ctl.handle(ChartEvent::BrushEnd { extent: Some(drag), origin: BrushOrigin::User }) {
            info!(start = %selection.start, end = %selection.end, "brush snapped");
            ctl.handle(ChartEvent::BrushEnd { extent: Some(selection), origin: BrushOrigin::Programmatic });
        }
        ctl.handle(ChartEvent::SnapSettled);
        renderer.render_to_png(&ctl, None, &legend, out_path(&args.out_dir, month, "brushed"))?;
    }

    let rect = ctl.layout().focus_rect();
    match ctl.handle(ChartEvent::PointerMove { x: rect.left + rect.width() / 2.0 }) {
        RenderInstruction::Tooltip(Some(readout)) => {
            info!(kwh = %readout.kwh_text, at = %readout.date_text, ratio = %readout.ratio_text(), "hover readout");
            renderer.render_to_png(&ctl, Some(&readout), &legend, out_path(&args.out_dir, month, "hover"))?;
        }
        _ => info!("nothing under the pointer"),
    }

    let stats = ctl.stats();
    match stats.summary {
        Some(s) => println!(
            "month {month}: {} samples, total {:.3} kWh, min {:.3}, max {:.3}, mean {:.3}",
            stats.count, stats.sum, s.min, s.max, s.mean
        ),
        None => println!("month {month}: no readings"),
    }
    println!("Wrote charts to {}", args.out_dir.display());
    Ok(())
}

fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    match cfg.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Output file like `<out_dir>/usage_m01_<stage>.png`.
fn out_path(dir: &Path, month: u32, stage: &str) -> PathBuf {
    dir.join(format!("usage_m{month:02}_{stage}.png"))
}
