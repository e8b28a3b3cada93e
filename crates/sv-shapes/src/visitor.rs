//! Double dispatch over the shape hierarchy.
//!
//! Every shape kind implements [`Visitable`] for any [`ShapeVisitor`]: its
//! `accept` forwards `self` to the one handler named after its kind and does
//! nothing else. [`Shape`] routes with an exhaustive `match`, so the
//! compiler, not a runtime check, guarantees that every kind has a handler.

use sv_core::{Visitable, Visitor};

use crate::circle::Circle;
use crate::rectangle::Rectangle;
use crate::shape::Shape;

/// An operation over shapes: exactly one handler per [`ShapeKind`](crate::ShapeKind).
///
/// Handlers must not depend on anything but the visited shape's attributes
/// and the visitor's own configuration or state.
pub trait ShapeVisitor: Visitor {
    /// Handle a circle.
    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;

    /// Handle a rectangle.
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output;
}

impl<V: ShapeVisitor + ?Sized> Visitable<V> for Circle {
    fn accept(&self, visitor: &mut V) -> V::Output {
        visitor.visit_circle(self)
    }
}

impl<V: ShapeVisitor + ?Sized> Visitable<V> for Rectangle {
    fn accept(&self, visitor: &mut V) -> V::Output {
        visitor.visit_rectangle(self)
    }
}

impl<V: ShapeVisitor + ?Sized> Visitable<V> for Shape {
    fn accept(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Circle(circle) => circle.accept(visitor),
            Shape::Rectangle(rectangle) => rectangle.accept(visitor),
        }
    }
}
