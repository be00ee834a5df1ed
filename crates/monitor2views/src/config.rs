use anyhow::{Context, Result};
use clap::Parser;
use facet_layout::{Monitor, RawFacetConfig};
use std::{fs, path::PathBuf};

/// `monitor2views` - Lays out per-facet views of a pyramidal hologram display.
///
/// Device settings come from an optional JSON file, then from flags or
/// environment variables; flags win over the file. Omitted settings fall back
/// to the library defaults, except the device `height` and `base`.
#[derive(Parser, Debug, Clone)]
#[command(name = "monitor2views", version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// JSON file holding the device configuration.
    #[arg(long, env = "FACET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of reflective facets.
    #[arg(long, env = "FACET_FACES")]
    pub faces: Option<i64>,

    /// Facet height of the device.
    #[arg(long, env = "FACET_HEIGHT")]
    pub height: Option<f64>,

    /// Facet tilt in degrees, 0..=90.
    #[arg(long, env = "FACET_ANGLE")]
    pub angle: Option<f64>,

    /// Side length of the device's base opening.
    #[arg(long, env = "FACET_BASE")]
    pub base: Option<f64>,

    /// Depth slices per facet.
    #[arg(long, env = "FACET_PRECISION")]
    pub precision: Option<i64>,

    /// Place one orbiting camera per facet instead of a single fixed camera.
    #[arg(long, env = "FACET_TRUE_REFLECTION")]
    pub true_reflection: Option<bool>,

    /// Monitor width in pixels.
    #[arg(long, env = "MONITOR_WIDTH")]
    pub monitor_width: f64,

    /// Monitor height in pixels.
    #[arg(long, env = "MONITOR_HEIGHT")]
    pub monitor_height: f64,

    /// Write the layout here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Args {
    /// Settings given on the command line (or via environment variables).
    pub fn flag_config(&self) -> RawFacetConfig {
        RawFacetConfig {
            faces: self.faces,
            height: self.height,
            angle: self.angle,
            base: self.base,
            precision: self.precision,
            true_reflection: self.true_reflection,
        }
    }

    /// The config file (if any) overlaid with the flag settings.
    pub fn raw_config(&self) -> Result<RawFacetConfig> {
        let file = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                parse_config(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => RawFacetConfig::default(),
        };
        Ok(file.merged(self.flag_config()))
    }

    pub fn monitor(&self) -> Monitor {
        Monitor::new(self.monitor_width, self.monitor_height)
    }
}

pub fn parse_config(text: &str) -> Result<RawFacetConfig> {
    Ok(serde_json::from_str(text)?)
}
