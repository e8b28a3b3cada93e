//! Circle: a shape described by a single radius.

use std::f64::consts::PI;

use sv_core::{ensure_dimension, ensure_measurable, Real, Result};

/// A circle of a given radius.
///
/// The radius is validated at construction and cannot change afterwards.
/// Radii whose area `π·r²` would overflow to infinity (above roughly
/// `7.5e153`) are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Circle {
    radius: Real,
}

impl Circle {
    /// Create a new circle.
    ///
    /// # Errors
    /// Returns [`sv_core::Error::InvalidAttribute`] if `radius` is negative,
    /// NaN, infinite, or too large for a finite area.
    pub fn new(radius: Real) -> Result<Self> {
        let radius = ensure_dimension("radius", radius)?;
        let radius = ensure_measurable("radius", radius, PI * radius * radius)?;
        tracing::trace!(radius, "constructed circle");
        Ok(Self { radius })
    }

    /// Radius.
    pub fn radius(&self) -> Real {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::Error;

    #[test]
    fn keeps_radius() {
        assert_eq!(Circle::new(5.0).unwrap().radius(), 5.0);
    }

    #[test]
    fn degenerate_circle_is_allowed() {
        assert_eq!(Circle::new(0.0).unwrap().radius(), 0.0);
    }

    #[test]
    fn rejects_negative_radius() {
        assert!(matches!(
            Circle::new(-1.0),
            Err(Error::InvalidAttribute {
                attribute: "radius",
                ..
            })
        ));
    }

    #[test]
    fn negative_zero_radius_is_zero() {
        assert!(Circle::new(-0.0).unwrap().radius().is_sign_positive());
    }

    #[test]
    fn largest_radii() {
        assert!(Circle::new(7e153).is_ok());
        assert!(matches!(
            Circle::new(1e154),
            Err(Error::InvalidAttribute {
                attribute: "radius",
                ..
            })
        ));
        assert!(Circle::new(1e300).is_err());
    }

    #[test]
    fn rejects_nan_radius() {
        assert!(Circle::new(Real::NAN).is_err());
    }
}
