//! # sv-shapes
//!
//! The variant hierarchy of shapevisit: a closed set of immutable shapes
//! ([`Circle`], [`Rectangle`]) and the [`ShapeVisitor`] trait that every
//! operation over them implements.
//!
//! Shapes carry only their own geometric attributes. They know nothing about
//! the operations that exist; an operation is added by implementing
//! [`ShapeVisitor`] in any crate, without touching this one.
//!
//! ```
//! use sv_core::Visitable;
//! use sv_shapes::{Circle, Rectangle, Shape, ShapeVisitor};
//!
//! struct Name;
//! impl sv_core::Visitor for Name {
//!     type Output = &'static str;
//! }
//! impl ShapeVisitor for Name {
//!     fn visit_circle(&mut self, _: &Circle) -> &'static str { "circle" }
//!     fn visit_rectangle(&mut self, _: &Rectangle) -> &'static str { "rectangle" }
//! }
//!
//! let shape: Shape = "rectangle:10x20".parse().unwrap();
//! assert_eq!(shape.accept(&mut Name), "rectangle");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Circle.
pub mod circle;

/// Rectangle.
pub mod rectangle;

/// `Shape` sum type, `ShapeKind`, and textual shape specs.
pub mod shape;

/// `ShapeVisitor` and the `accept` routing for every kind.
pub mod visitor;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use shape::{Shape, ShapeKind};
pub use visitor::ShapeVisitor;
