//! Entry point for `monitor2views`: resolve a device configuration, lay out
//! the facet views for one monitor and emit them as JSON.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Args;
use facet_layout::{FacetConfig, LayoutEngine, Monitor, View};
use log::info;
use serde::Serialize;
use std::{fs, time::Instant};

/// The document written to stdout or `--output`.
#[derive(Debug, Serialize)]
struct LayoutDocument<'a> {
    monitor: Monitor,
    config: &'a FacetConfig,
    views: &'a [View],
}

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let t0 = Instant::now();

    let raw = args.raw_config()?;
    let engine = LayoutEngine::from_raw(raw).context("invalid facet configuration")?;
    let monitor = args.monitor();

    let views = engine.generate_views(&monitor).with_context(|| {
        format!("laying out views for {}x{} monitor", monitor.width, monitor.height)
    })?;

    let json = render(&monitor, engine.config(), &views, args.pretty)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {} views to {}", views.len(), path.display());
        }
        None => println!("{json}"),
    }

    info!(
        "Laid out {} facets x {} parts in {:.2?}",
        engine.config().faces(),
        engine.config().precision(),
        t0.elapsed()
    );
    Ok(())
}

fn render(monitor: &Monitor, config: &FacetConfig, views: &[View], pretty: bool) -> Result<String> {
    let doc = LayoutDocument {
        monitor: *monitor,
        config,
        views,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}
