use glam::{DMat4, DVec3};
use serde::Serialize;

use crate::part::Part;

/// Vertical field of view shared by every facet camera, in degrees.
pub const FOV_DEG: f64 = 60.0;

/// One facet's viewport on the monitor plus the camera that renders into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// Screen-space origin of the (square) viewport.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Camera up vector; always lies in the XY plane.
    pub up: DVec3,
    /// Camera position. The camera looks at the world origin.
    pub eye: DVec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Depth slices, nearest first. Empty for facet 0.
    pub parts: Vec<Part>,
}

impl View {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        up: DVec3,
        eye: DVec3,
        fov: f64,
        parts: Vec<Part>,
    ) -> Self {
        Self { x, y, width, height, up, eye, fov, parts }
    }

    /// `[x, y, width, height]` of the viewport.
    #[inline]
    pub fn rect(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Right-handed view matrix looking from `eye` at the world origin.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, DVec3::ZERO, self.up)
    }

    /// Right-handed perspective projection for this viewport, depth in [0, 1].
    pub fn projection(&self, z_near: f64, z_far: f64) -> DMat4 {
        DMat4::perspective_rh(
            self.fov.to_radians(),
            self.width / self.height,
            z_near,
            z_far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(eye: DVec3, up: DVec3) -> View {
        View::new(10.0, 20.0, 160.0, 160.0, up, eye, FOV_DEG, Vec::new())
    }

    #[test]
    fn rect_matches_fields() {
        assert_eq!(
            sample(DVec3::new(0.0, 500.0, 1800.0), DVec3::Y).rect(),
            [10.0, 20.0, 160.0, 160.0]
        );
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let eye = DVec3::new(0.0, 500.0, 1800.0);
        let view = sample(eye, DVec3::Y);
        let m = view.view_matrix();

        assert!(m.transform_point3(eye).length() < 1e-9);

        // The look-at target sits straight ahead on -Z.
        let target = m.transform_point3(DVec3::ZERO);
        assert!(target.x.abs() < 1e-9);
        assert!(target.y.abs() < 1e-9);
        assert!((target.z + eye.length()).abs() < 1e-9);
    }

    #[test]
    fn projection_uses_square_aspect() {
        let view = sample(DVec3::new(1800.0, 0.0, 0.0), DVec3::Y);
        let p = view.projection(1.0, 10_000.0);
        let expected = DMat4::perspective_rh(60f64.to_radians(), 1.0, 1.0, 10_000.0);
        assert_eq!(p, expected);
    }

    #[test]
    fn serializes_vectors_as_arrays() {
        let view = sample(DVec3::new(0.0, 500.0, 1800.0), DVec3::new(-1.0, 0.0, 0.0));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["eye"], serde_json::json!([0.0, 500.0, 1800.0]));
        assert_eq!(json["up"], serde_json::json!([-1.0, 0.0, 0.0]));
        assert_eq!(json["parts"], serde_json::json!([]));
    }
}
