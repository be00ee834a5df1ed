// src/lib.rs
//! Facet layout: per-facet views for pyramidal reflective (hologram) displays.
//!
//! A pyramid (or any N-sided prism) placed on a monitor reflects N regions of
//! the screen towards the viewer. This library computes, for a given device and
//! monitor:
//! - one square window centered on the monitor, sized so both the device and
//!   the monitor can accommodate it,
//! - one camera per facet (up vector, eye position, field of view),
//! - a fan of depth slices ("parts") per facet, used to draw layered content.
//!
//! ```
//! use facet_layout::{LayoutEngine, Monitor, RawFacetConfig};
//!
//! let engine = LayoutEngine::from_raw(RawFacetConfig {
//!     height: Some(100.0),
//!     base: Some(20.0),
//!     precision: Some(2),
//!     ..Default::default()
//! })?;
//!
//! let views = engine.generate_views(&Monitor::new(800.0, 600.0))?;
//! assert_eq!(views.len(), 4);
//! assert!(views[0].parts.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod monitor;
pub mod part;
pub mod view;

// Re-export commonly used types for convenience.
pub use self::config::{guess_config, FacetConfig, RawFacetConfig};
pub use self::error::{ConfigError, LayoutError};
pub use self::layout::{Diagonals, LayoutEngine, Viewport};
pub use self::monitor::Monitor;
pub use self::part::{CanvasRect, Part};
pub use self::view::View;
