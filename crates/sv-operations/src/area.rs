//! Area of each shape.
//!
//! ```text
//! circle:     π · r²       (displayed with `precision` decimals)
//! rectangle:  w · h        (displayed exactly)
//! ```

use std::f64::consts::PI;

use sv_core::{Result, Size, Visitor};
use sv_shapes::{Circle, Rectangle, ShapeKind, ShapeVisitor};

use crate::measurement::{check_precision, Measurement, Quantity, DEFAULT_PRECISION};

/// Computes the enclosed area of each visited shape.
#[derive(Debug, Clone, Copy)]
pub struct Area {
    precision: Size,
}

impl Default for Area {
    fn default() -> Self {
        Self::new()
    }
}

impl Area {
    /// Area with the default display precision (2 decimals).
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Area with a custom display precision for circle results.
    ///
    /// # Errors
    /// Returns [`sv_core::Error::Precondition`] above
    /// [`MAX_PRECISION`](crate::MAX_PRECISION).
    pub fn with_precision(precision: Size) -> Result<Self> {
        Ok(Self {
            precision: check_precision(precision)?,
        })
    }

    /// Display precision applied to circle results.
    pub fn precision(&self) -> Size {
        self.precision
    }
}

impl Visitor for Area {
    type Output = Measurement;
}

impl ShapeVisitor for Area {
    fn visit_circle(&mut self, circle: &Circle) -> Measurement {
        let r = circle.radius();
        Measurement::rounded_to(ShapeKind::Circle, Quantity::Area, PI * r * r, self.precision)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Measurement {
        Measurement::exact(
            ShapeKind::Rectangle,
            Quantity::Area,
            rectangle.width() * rectangle.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sv_core::Visitable;
    use sv_shapes::Shape;

    #[test]
    fn circle_area() {
        let m = Shape::circle(5.0).unwrap().accept(&mut Area::new());
        assert_abs_diff_eq!(m.value(), 78.539_816_339_744_83, epsilon = 1e-12);
        assert_abs_diff_eq!(m.rounded(), 78.54, epsilon = 1e-12);
        assert_eq!(m.to_string(), "Circle area: 78.54");
    }

    #[test]
    fn rectangle_area_is_exact() {
        let m = Shape::rectangle(10.0, 20.0).unwrap().accept(&mut Area::new());
        assert_eq!(m.value(), 200.0);
        assert_eq!(m.precision(), None);
        assert_eq!(m.to_string(), "Rectangle area: 200");
    }

    #[test]
    fn custom_precision() {
        let mut area = Area::with_precision(4).unwrap();
        let m = Shape::circle(1.0).unwrap().accept(&mut area);
        assert_eq!(m.to_string(), "Circle area: 3.1416");
    }

    #[test]
    fn rejects_excessive_precision() {
        assert!(Area::with_precision(99).is_err());
    }

    #[test]
    fn degenerate_shapes_have_zero_area() {
        assert_eq!(Shape::circle(0.0).unwrap().accept(&mut Area::new()).value(), 0.0);
        assert_eq!(
            Shape::rectangle(0.0, 7.0).unwrap().accept(&mut Area::new()).value(),
            0.0
        );
    }
}
