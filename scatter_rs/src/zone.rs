//! The reserved rectangle kept free of kernels.
//!
//! Coordinates live on a normalized percentage plane: `x` and `y` in
//! `0..=100`, origin at the top-left corner.

use serde::{Deserialize, Serialize};

use crate::error::ScatterError;

/// Lower edge of the percentage plane.
pub const PLANE_MIN: f64 = 0.0;
/// Upper edge of the percentage plane.
pub const PLANE_MAX: f64 = 100.0;
/// Vertical and horizontal split between the two halves.
pub const MIDLINE: f64 = 50.0;

/// Rectangle reserved for the hero text and the foreground bowl.
///
/// [`SafeZone::new`] only hands out non-empty zones inside the plane.
/// Deserialization takes the bounds as written; [`SafeZone::validate`] runs
/// when the zone reaches a [`crate::Scatter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl SafeZone {
    /// Zone used by the MakhanaCo hero: headline block plus bowl.
    pub const HERO: SafeZone = SafeZone {
        x_min: 22.0,
        x_max: 78.0,
        y_min: 12.0,
        y_max: 72.0,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ScatterError> {
        let zone = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        zone.validate()?;
        Ok(zone)
    }

    /// Checks the bounds lie inside the plane and span a non-empty area.
    pub fn validate(&self) -> Result<(), ScatterError> {
        for (name, value) in [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ] {
            // NaN fails the range check too
            if !(PLANE_MIN..=PLANE_MAX).contains(&value) {
                return Err(ScatterError::ZoneOutOfPlane { name, value });
            }
        }
        if self.x_min >= self.x_max {
            return Err(ScatterError::EmptyZone {
                axis: "x",
                min: self.x_min,
                max: self.x_max,
            });
        }
        if self.y_min >= self.y_max {
            return Err(ScatterError::EmptyZone {
                axis: "y",
                min: self.y_min,
                max: self.y_max,
            });
        }
        Ok(())
    }

    /// Strict interior test. Points on the border are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min < x && x < self.x_max && self.y_min < y && y < self.y_max
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for SafeZone {
    fn default() -> Self {
        Self::HERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_zone_is_valid() {
        let zone = SafeZone::new(22.0, 78.0, 12.0, 72.0).expect("hero zone");
        assert_eq!(zone, SafeZone::HERO);
        assert_eq!(zone.width(), 56.0);
        assert_eq!(zone.height(), 60.0);
    }

    #[test]
    fn contains_is_strict() {
        let zone = SafeZone::HERO;
        assert!(zone.contains(50.0, 40.0));
        assert!(!zone.contains(22.0, 40.0));
        assert!(!zone.contains(78.0, 40.0));
        assert!(!zone.contains(50.0, 12.0));
        assert!(!zone.contains(50.0, 72.0));
        assert!(!zone.contains(10.0, 40.0));
    }

    #[test]
    fn rejects_inverted_axes() {
        assert_eq!(
            SafeZone::new(78.0, 22.0, 12.0, 72.0),
            Err(ScatterError::EmptyZone {
                axis: "x",
                min: 78.0,
                max: 22.0
            })
        );
        assert!(matches!(
            SafeZone::new(22.0, 78.0, 40.0, 40.0),
            Err(ScatterError::EmptyZone { axis: "y", .. })
        ));
    }

    #[test]
    fn rejects_bounds_outside_plane() {
        assert!(matches!(
            SafeZone::new(-1.0, 78.0, 12.0, 72.0),
            Err(ScatterError::ZoneOutOfPlane { name: "x_min", .. })
        ));
        assert!(matches!(
            SafeZone::new(22.0, 78.0, 12.0, 101.0),
            Err(ScatterError::ZoneOutOfPlane { name: "y_max", .. })
        ));
        assert!(SafeZone::new(22.0, f64::NAN, 12.0, 72.0).is_err());
    }

    #[test]
    fn deserialization_defers_validation() {
        let ok: SafeZone =
            serde_json::from_str(r#"{"x_min":10,"x_max":90,"y_min":5,"y_max":60}"#)
                .expect("valid zone");
        assert_eq!(ok.x_min(), 10.0);
        assert!(ok.validate().is_ok());

        let inverted: SafeZone =
            serde_json::from_str(r#"{"x_min":90,"x_max":10,"y_min":5,"y_max":60}"#)
                .expect("bounds parse as written");
        assert_eq!(
            inverted.validate(),
            Err(ScatterError::EmptyZone {
                axis: "x",
                min: 90.0,
                max: 10.0
            })
        );
    }
}
