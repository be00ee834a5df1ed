//! Device configuration: the user-facing, partially specified form and the
//! resolved form the layout engine runs on.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_FACES: u32 = 4;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_PRECISION: u32 = 10;

/// Configuration as supplied by a user (JSON file, CLI flags, ...).
///
/// Every field is optional. [`guess_config`] fills in defaults and rejects
/// anything outside the domain the engine accepts. Integers are kept signed
/// here so that `faces: -1` is reported as a domain error instead of a parse
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFacetConfig {
    pub faces: Option<i64>,
    pub height: Option<f64>,
    pub angle: Option<f64>,
    pub base: Option<f64>,
    pub precision: Option<i64>,
    #[serde(alias = "trueReflection")]
    pub true_reflection: Option<bool>,
}

impl RawFacetConfig {
    /// Field-wise overlay: values set in `other` win.
    pub fn merged(self, other: RawFacetConfig) -> Self {
        Self {
            faces: other.faces.or(self.faces),
            height: other.height.or(self.height),
            angle: other.angle.or(self.angle),
            base: other.base.or(self.base),
            precision: other.precision.or(self.precision),
            true_reflection: other.true_reflection.or(self.true_reflection),
        }
    }
}

/// A validated device configuration. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacetConfig {
    /// Number of reflective facets, one view per facet.
    faces: u32,
    /// Facet height of the device.
    height: f64,
    /// Facet tilt in degrees, `[0, 90]`.
    angle: f64,
    /// Side length of the device's base opening.
    base: f64,
    /// Depth slices per facet.
    precision: u32,
    /// Orbiting, physically placed cameras instead of one fixed camera.
    true_reflection: bool,
}

impl FacetConfig {
    /// Builds a configuration from fully specified values, applying the same
    /// validation as [`guess_config`].
    pub fn new(
        faces: u32,
        height: f64,
        angle: f64,
        base: f64,
        precision: u32,
        true_reflection: bool,
    ) -> Result<Self, ConfigError> {
        guess_config(RawFacetConfig {
            faces: Some(faces.into()),
            height: Some(height),
            angle: Some(angle),
            base: Some(base),
            precision: Some(precision.into()),
            true_reflection: Some(true_reflection),
        })
    }

    #[inline]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn true_reflection(&self) -> bool {
        self.true_reflection
    }
}

/// Resolves a raw configuration: fills defaults, then validates.
///
/// `faces`, `angle`, `precision` and `true_reflection` default to
/// [`DEFAULT_FACES`], [`DEFAULT_ANGLE_DEG`], [`DEFAULT_PRECISION`] and
/// `false`. `height` and `base` describe the physical device and must be given.
pub fn guess_config(raw: RawFacetConfig) -> Result<FacetConfig, ConfigError> {
    let faces = count("faces", raw.faces.unwrap_or(DEFAULT_FACES.into()))?;
    let precision = count("precision", raw.precision.unwrap_or(DEFAULT_PRECISION.into()))?;

    let height = length("height", raw.height.ok_or(ConfigError::Missing("height"))?)?;
    let base = length("base", raw.base.ok_or(ConfigError::Missing("base"))?)?;

    let angle = raw.angle.unwrap_or(DEFAULT_ANGLE_DEG);
    if !angle.is_finite() {
        return Err(ConfigError::NotFinite { field: "angle", value: angle });
    }
    if !(0.0..=90.0).contains(&angle) {
        return Err(ConfigError::AngleOutOfRange(angle));
    }

    Ok(FacetConfig {
        faces,
        height,
        angle,
        base,
        precision,
        true_reflection: raw.true_reflection.unwrap_or(false),
    })
}

fn count(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NotPositive { field, value: value as f64 });
    }
    u32::try_from(value).map_err(|_| ConfigError::TooLarge { field, value })
}

fn length(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> RawFacetConfig {
        RawFacetConfig {
            height: Some(100.0),
            base: Some(20.0),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let cfg = guess_config(device()).unwrap();
        assert_eq!(cfg.faces(), DEFAULT_FACES);
        assert_eq!(cfg.angle(), DEFAULT_ANGLE_DEG);
        assert_eq!(cfg.precision(), DEFAULT_PRECISION);
        assert!(!cfg.true_reflection());
        assert_eq!(cfg.height(), 100.0);
        assert_eq!(cfg.base(), 20.0);
    }

    #[test]
    fn device_geometry_is_required() {
        let err = guess_config(RawFacetConfig { base: Some(20.0), ..Default::default() });
        assert_eq!(err, Err(ConfigError::Missing("height")));

        let err = guess_config(RawFacetConfig { height: Some(100.0), ..Default::default() });
        assert_eq!(err, Err(ConfigError::Missing("base")));
    }

    #[test]
    fn rejects_non_positive_counts() {
        let err = guess_config(RawFacetConfig { faces: Some(0), ..device() });
        assert!(matches!(err, Err(ConfigError::NotPositive { field: "faces", .. })));

        let err = guess_config(RawFacetConfig { precision: Some(-3), ..device() });
        assert!(matches!(err, Err(ConfigError::NotPositive { field: "precision", .. })));

        let err = guess_config(RawFacetConfig { faces: Some(i64::MAX), ..device() });
        assert!(matches!(err, Err(ConfigError::TooLarge { field: "faces", .. })));
    }

    #[test]
    fn rejects_bad_lengths() {
        let err = guess_config(RawFacetConfig { height: Some(0.0), ..device() });
        assert!(matches!(err, Err(ConfigError::NotPositive { field: "height", .. })));

        let err = guess_config(RawFacetConfig { base: Some(f64::NAN), ..device() });
        assert!(matches!(err, Err(ConfigError::NotFinite { field: "base", .. })));
    }

    #[test]
    fn angle_must_be_within_quarter_turn() {
        assert!(guess_config(RawFacetConfig { angle: Some(0.0), ..device() }).is_ok());
        assert!(guess_config(RawFacetConfig { angle: Some(90.0), ..device() }).is_ok());
        assert_eq!(
            guess_config(RawFacetConfig { angle: Some(90.5), ..device() }),
            Err(ConfigError::AngleOutOfRange(90.5))
        );
        assert_eq!(
            guess_config(RawFacetConfig { angle: Some(-1.0), ..device() }),
            Err(ConfigError::AngleOutOfRange(-1.0))
        );
    }

    #[test]
    fn new_validates_like_guess() {
        assert!(FacetConfig::new(4, 100.0, 45.0, 20.0, 2, false).is_ok());
        assert!(FacetConfig::new(0, 100.0, 45.0, 20.0, 2, false).is_err());
        assert!(FacetConfig::new(4, 100.0, 120.0, 20.0, 2, false).is_err());
    }

    #[test]
    fn deserializes_camel_case_reflection_flag() {
        let raw: RawFacetConfig = serde_json::from_str(
            r#"{ "faces": 3, "height": 80, "base": 10, "trueReflection": true }"#,
        )
        .unwrap();
        assert_eq!(raw.faces, Some(3));
        assert_eq!(raw.true_reflection, Some(true));
        assert_eq!(raw.precision, None);

        let raw: RawFacetConfig =
            serde_json::from_str(r#"{ "true_reflection": false }"#).unwrap();
        assert_eq!(raw.true_reflection, Some(false));

        assert!(serde_json::from_str::<RawFacetConfig>(r#"{ "facez": 3 }"#).is_err());
    }

    #[test]
    fn merged_prefers_overlay() {
        let file = RawFacetConfig { faces: Some(3), angle: Some(30.0), ..device() };
        let flags = RawFacetConfig { faces: Some(6), ..Default::default() };
        let cfg = file.merged(flags);
        assert_eq!(cfg.faces, Some(6));
        assert_eq!(cfg.angle, Some(30.0));
        assert_eq!(cfg.height, Some(100.0));
    }
}
