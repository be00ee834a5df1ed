//! The view layout engine: one square window centered on the monitor, one
//! camera per facet, and a fan of depth slices per facet.

use std::f64::consts::PI;

use glam::DVec3;

use crate::{
    config::{guess_config, FacetConfig, RawFacetConfig},
    error::{ConfigError, LayoutError},
    monitor::Monitor,
    part::Part,
    view::{View, FOV_DEG},
};

/// Orbit radius of the facet cameras.
pub const CAMERA_DISTANCE: f64 = 1800.0;

/// Camera position used for every facet when `true_reflection` is off.
pub const FIXED_EYE: DVec3 = DVec3::new(0.0, 500.0, CAMERA_DISTANCE);

/// Radial extents used to place part boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagonals {
    /// Diagonal of the `optimum x optimum` square: the radial depth of a facet.
    pub big: f64,
    /// Diagonal of the base's half-square: where the fan starts.
    pub small: f64,
}

/// The square window shared by all facet views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    /// Side length (`2 * optimum + base`).
    pub size: f64,
    /// Largest projection both the device and the monitor can accommodate.
    pub optimum: f64,
    pub diagonals: Diagonals,
}

/// Computes facet views for a fixed device configuration.
///
/// The engine holds no per-request state, so one instance can serve any
/// number of monitors, from any number of threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: FacetConfig,
    /// Half the angular width of one facet, `PI / faces`.
    step: f64,
}

impl LayoutEngine {
    pub fn new(config: FacetConfig) -> Self {
        let step = PI / config.faces() as f64;
        Self { config, step }
    }

    /// Resolves `raw` (defaults + validation) and builds an engine from it.
    pub fn from_raw(raw: RawFacetConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(guess_config(raw)?))
    }

    #[inline]
    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fits the square viewport window for `monitor`.
    ///
    /// The projection size is bounded both by the device (facet height
    /// projected by its tilt) and by the monitor (shorter side minus the base,
    /// halved). A non-positive result means nothing could be displayed and is
    /// reported as [`LayoutError::DegenerateViewport`].
    pub fn viewport(&self, monitor: &Monitor) -> Result<Viewport, LayoutError> {
        monitor.validate()?;

        let base = self.config.base();
        let p_side = self.config.height() * self.config.angle().to_radians().sin();
        let m_side = (monitor.min_side() - base) / 2.0;
        let optimum = if p_side < m_side { p_side } else { m_side };

        if optimum <= 0.0 {
            log::warn!(
                "Degenerate viewport for {}x{} monitor: device side {:.3}, monitor side {:.3}",
                monitor.width,
                monitor.height,
                p_side,
                m_side
            );
            return Err(LayoutError::DegenerateViewport { optimum });
        }

        let half_base = base / 2.0;
        Ok(Viewport {
            x: monitor.width / 2.0 - half_base - optimum,
            y: monitor.height / 2.0 - half_base - optimum,
            size: 2.0 * optimum + base,
            optimum,
            diagonals: Diagonals {
                big: (optimum * optimum + optimum * optimum).sqrt(),
                small: (half_base * half_base + half_base * half_base).sqrt(),
            },
        })
    }

    /// Generates one view per facet, in facet order.
    ///
    /// Either every view is produced or an error is returned.
    pub fn generate_views(&self, monitor: &Monitor) -> Result<Vec<View>, LayoutError> {
        let vp = self.viewport(monitor)?;
        log::debug!(
            "Laying out {} facets on {}x{}: window {:.2} at ({:.2}, {:.2})",
            self.config.faces(),
            monitor.width,
            monitor.height,
            vp.size,
            vp.x,
            vp.y
        );

        let views = (0..self.config.faces())
            .map(|i| {
                let (cx, cy) = self.direction(i);
                let parts = self.assign_parts(i, monitor, vp.diagonals);

                let up = DVec3::new(-cx, cy, 0.0);
                let eye = if self.config.true_reflection() {
                    DVec3::new(cy * CAMERA_DISTANCE, 0.0, cx * CAMERA_DISTANCE)
                } else {
                    FIXED_EYE
                };

                View::new(vp.x, vp.y, vp.size, vp.size, up, eye, FOV_DEG, parts)
            })
            .collect();

        Ok(views)
    }

    /// Depth slices for facet `index`.
    ///
    /// Facet 0 never gets parts. Every other facet gets `precision` slices
    /// between the rays at `(2 * index - 1) * step` and `(2 * index + 1) * step`,
    /// starting at `diagonals.small` from the monitor center and reaching
    /// `diagonals.small + diagonals.big`.
    pub fn assign_parts(&self, index: u32, monitor: &Monitor, diagonals: Diagonals) -> Vec<Part> {
        if index == 0 {
            return Vec::new();
        }

        let precision = self.config.precision() as f64;
        let slice = diagonals.big / precision;
        let center = monitor.center();

        let (near_sin, near_cos) = ((2 * index - 1) as f64 * self.step).sin_cos();
        let (far_sin, far_cos) = ((2 * index + 1) as f64 * self.step).sin_cos();

        (0..self.config.precision())
            .map(|i| {
                let r_near = i as f64 * slice + diagonals.small;
                let r_far = (i + 1) as f64 * slice + diagonals.small;
                Part::from_coords(
                    near_sin * r_near + center.x,
                    near_cos * r_near + center.y,
                    far_sin * r_far + center.x,
                    far_cos * r_far + center.y,
                )
            })
            .collect()
    }

    /// Unit direction `(sin, cos)` of facet `index`, rounded to two decimals.
    fn direction(&self, index: u32) -> (f64, f64) {
        let (s, c) = (index as f64 * 2.0 * self.step).sin_cos();
        (round2(s), round2(c))
    }
}

/// Rounds to two decimals, halves toward positive infinity.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}
