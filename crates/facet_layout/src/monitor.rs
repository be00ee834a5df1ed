use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// The rendering area a layout is computed for, in screen units (usually pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub width: f64,
    pub height: f64,
}

impl Monitor {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space center of the monitor.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// The shorter side. On a square monitor this is the width.
    #[inline]
    pub fn min_side(&self) -> f64 {
        if self.height < self.width {
            self.height
        } else {
            self.width
        }
    }

    /// Rejects NaN, infinite, zero and negative sides.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidMonitor {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_side_prefers_width_on_ties() {
        assert_eq!(Monitor::new(800.0, 600.0).min_side(), 600.0);
        assert_eq!(Monitor::new(600.0, 800.0).min_side(), 600.0);
        assert_eq!(Monitor::new(500.0, 500.0).min_side(), 500.0);
    }

    #[test]
    fn center_is_half_extent() {
        assert_eq!(Monitor::new(800.0, 600.0).center(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn validate_rejects_bad_sides() {
        assert!(Monitor::new(800.0, 600.0).validate().is_ok());
        assert!(Monitor::new(0.0, 600.0).validate().is_err());
        assert!(Monitor::new(800.0, -1.0).validate().is_err());
        assert!(Monitor::new(f64::NAN, 600.0).validate().is_err());
        assert!(Monitor::new(800.0, f64::INFINITY).validate().is_err());
    }
}
