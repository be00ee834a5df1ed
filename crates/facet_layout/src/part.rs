use glam::DVec2;
use serde::Serialize;

/// Axis-aligned canvas rectangle (origin at the minimum corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One depth slice of a facet, in screen coordinates.
///
/// `near` lies on the ray bounding the facet on one side, `far` on the ray
/// bounding it on the other side, one slice further out. Together with the
/// monitor center they span the wedge the slice is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Part {
    pub near: DVec2,
    pub far: DVec2,
}

impl Part {
    /// Packs four screen coordinates into a part.
    #[inline]
    pub fn from_coords(near_x: f64, near_y: f64, far_x: f64, far_y: f64) -> Self {
        Self {
            near: DVec2::new(near_x, near_y),
            far: DVec2::new(far_x, far_y),
        }
    }

    /// The four numbers in `(near_x, near_y, far_x, far_y)` order.
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.near.x, self.near.y, self.far.x, self.far.y]
    }

    /// Bounding rectangle spanned by both corners.
    pub fn bounds(&self) -> CanvasRect {
        let min = self.near.min(self.far);
        let max = self.near.max(self.far);
        CanvasRect {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Clip triangle `[center, near, far]` for canvas drawing.
    #[inline]
    pub fn wedge(&self, center: DVec2) -> [DVec2; 3] {
        [center, self.near, self.far]
    }
}
