//! The closed shape hierarchy.
//!
//! [`Shape`] is the sum of every concrete kind. The set is fixed: adding a
//! variant here forces every [`ShapeVisitor`](crate::ShapeVisitor) in the
//! workspace to grow a handler before it compiles again.

use std::fmt;
use std::str::FromStr;

use sv_core::utilities::data_formatters::{format_dimensions, format_exact};
use sv_core::utilities::data_parsers::{parse_dimensions, parse_real, split_spec};
use sv_core::{Error, Real, Result};

use crate::circle::Circle;
use crate::rectangle::Rectangle;

/// Discriminant of a [`Shape`], without its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    /// See [`Circle`].
    Circle,
    /// See [`Rectangle`].
    Rectangle,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    /// Lower-case name used in shape specs and drawing output.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    /// Parse a kind name, case-insensitively. `rect` is accepted for
    /// `rectangle`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            _ => Err(Error::UnsupportedKind(s.trim().to_string())),
        }
    }
}

/// Any shape of the closed hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A rectangle.
    Rectangle(Rectangle),
}

impl Shape {
    /// Build a validated circle.
    pub fn circle(radius: Real) -> Result<Self> {
        Circle::new(radius).map(Shape::Circle)
    }

    /// Build a validated rectangle.
    pub fn rectangle(width: Real, height: Real) -> Result<Self> {
        Rectangle::new(width, height).map(Shape::Rectangle)
    }

    /// Kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl fmt::Display for Shape {
    /// Render as a spec that [`Shape::from_str`] reads back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "circle:{}", format_exact(c.radius())),
            Shape::Rectangle(r) => {
                write!(f, "rectangle:{}", format_dimensions(r.width(), r.height()))
            }
        }
    }
}

impl FromStr for Shape {
    type Err = Error;

    /// Parse `circle:R` or `rectangle:WxH`.
    ///
    /// # Errors
    /// * [`Error::Parse`] for a malformed spec,
    /// * [`Error::UnsupportedKind`] for a kind outside the hierarchy,
    /// * [`Error::InvalidAttribute`] for a negative or non-finite attribute.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, attributes) = split_spec(s)?;
        let shape = match kind.parse::<ShapeKind>()? {
            ShapeKind::Circle => Shape::circle(parse_real(attributes)?)?,
            ShapeKind::Rectangle => {
                let (width, height) = parse_dimensions(attributes)?;
                Shape::rectangle(width, height)?
            }
        };
        tracing::debug!(spec = s, %shape, "parsed shape");
        Ok(shape)
    }
}
