//! Error types for configuration resolution and layout.

use thiserror::Error;

/// Raised once, while resolving a [`FacetConfig`](crate::FacetConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A field without a default was not supplied.
    #[error("missing required config field `{0}`")]
    Missing(&'static str),

    /// A count or a length is zero or negative.
    #[error("config field `{field}` must be > 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    /// A count that does not fit in `u32`.
    #[error("config field `{field}` is too large (got {value})")]
    TooLarge { field: &'static str, value: i64 },

    /// NaN or infinity.
    #[error("config field `{field}` must be finite (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    /// Facet tilt outside `[0, 90]` degrees.
    #[error("facet angle must be within [0, 90] degrees (got {0})")]
    AngleOutOfRange(f64),
}

/// Raised by a single layout request. No views are produced when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The monitor rectangle has a non-finite or non-positive side.
    #[error("monitor must have finite, positive sides (got {width} x {height})")]
    InvalidMonitor { width: f64, height: f64 },

    /// The monitor is too small for the device base, or the device projects
    /// nothing (`angle == 0`).
    #[error("degenerate viewport: optimum projection size is {optimum}")]
    DegenerateViewport { optimum: f64 },
}
