//! Rectangle: a shape described by width and height.

use sv_core::{ensure_dimension, ensure_measurable, Real, Result};

/// An axis-aligned rectangle.
///
/// Both the area `w·h` and the perimeter `2(w+h)` must be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rectangle {
    width: Real,
    height: Real,
}

impl Rectangle {
    /// Create a new rectangle.
    ///
    /// # Errors
    /// Returns [`sv_core::Error::InvalidAttribute`] naming the first of
    /// `width` / `height` that is negative, NaN, or infinite, or the larger
    /// of the two when the area or perimeter would overflow.
    pub fn new(width: Real, height: Real) -> Result<Self> {
        let width = ensure_dimension("width", width)?;
        let height = ensure_dimension("height", height)?;
        let (attribute, larger) = if width >= height {
            ("width", width)
        } else {
            ("height", height)
        };
        ensure_measurable(attribute, larger, width * height)?;
        ensure_measurable(attribute, larger, 2.0 * (width + height))?;
        tracing::trace!(width, height, "constructed rectangle");
        Ok(Self { width, height })
    }

    /// Width.
    pub fn width(&self) -> Real {
        self.width
    }

    /// Height.
    pub fn height(&self) -> Real {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::Error;

    #[test]
    fn keeps_dimensions() {
        let r = Rectangle::new(10.0, 20.0).unwrap();
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn overflowing_measures_are_rejected() {
        assert!(Rectangle::new(1e154, 1e154).is_ok());
        assert!(matches!(
            Rectangle::new(1e10, 1e300),
            Err(Error::InvalidAttribute {
                attribute: "height",
                ..
            })
        ));
        // zero area, but the perimeter still overflows
        assert!(matches!(
            Rectangle::new(Real::MAX, 0.0),
            Err(Error::InvalidAttribute {
                attribute: "width",
                ..
            })
        ));
    }

    #[test]
    fn reports_first_bad_dimension() {
        let err = Rectangle::new(-1.0, -2.0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAttribute {
                attribute: "width",
                ..
            }
        ));

        let err = Rectangle::new(1.0, Real::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAttribute {
                attribute: "height",
                ..
            }
        ));
    }
}
