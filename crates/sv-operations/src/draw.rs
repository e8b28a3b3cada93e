//! Draw: describe each shape in words.

use sv_core::utilities::data_formatters::{format_dimensions, format_exact};
use sv_core::Visitor;
use sv_shapes::{Circle, Rectangle, ShapeVisitor};

/// Produces a drawing description per shape. No numeric computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Draw;

impl Visitor for Draw {
    type Output = String;
}

impl ShapeVisitor for Draw {
    fn visit_circle(&mut self, circle: &Circle) -> String {
        format!("Drawing circle with radius {}", format_exact(circle.radius()))
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> String {
        format!(
            "Drawing rectangle {}",
            format_dimensions(rectangle.width(), rectangle.height())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::Visitable;
    use sv_shapes::Shape;

    #[test]
    fn draws_circle() {
        let circle = Shape::circle(5.0).unwrap();
        assert_eq!(circle.accept(&mut Draw), "Drawing circle with radius 5");
    }

    #[test]
    fn draws_rectangle() {
        let rect = Shape::rectangle(10.0, 20.0).unwrap();
        assert_eq!(rect.accept(&mut Draw), "Drawing rectangle 10x20");
    }

    #[test]
    fn fractional_attributes() {
        let rect = Shape::rectangle(1.5, 0.25).unwrap();
        assert_eq!(rect.accept(&mut Draw), "Drawing rectangle 1.5x0.25");
    }

    #[test]
    fn negative_zero_radius_draws_as_zero() {
        let circle = Shape::circle(-0.0).unwrap();
        assert_eq!(circle.accept(&mut Draw), "Drawing circle with radius 0");
    }
}
