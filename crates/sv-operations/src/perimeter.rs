//! Perimeter of each shape.
//!
//! Lives entirely in this crate: the shapes did not change to support it.

use std::f64::consts::PI;

use sv_core::{Result, Size, Visitor};
use sv_shapes::{Circle, Rectangle, ShapeKind, ShapeVisitor};

use crate::measurement::{check_precision, Measurement, Quantity, DEFAULT_PRECISION};

/// Computes the boundary length of each visited shape.
#[derive(Debug, Clone, Copy)]
pub struct Perimeter {
    precision: Size,
}

impl Default for Perimeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Perimeter {
    /// Perimeter with the default display precision (2 decimals).
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Perimeter with a custom display precision for circle results.
    pub fn with_precision(precision: Size) -> Result<Self> {
        Ok(Self {
            precision: check_precision(precision)?,
        })
    }
}

impl Visitor for Perimeter {
    type Output = Measurement;
}

impl ShapeVisitor for Perimeter {
    fn visit_circle(&mut self, circle: &Circle) -> Measurement {
        Measurement::rounded_to(
            ShapeKind::Circle,
            Quantity::Perimeter,
            2.0 * PI * circle.radius(),
            self.precision,
        )
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Measurement {
        Measurement::exact(
            ShapeKind::Rectangle,
            Quantity::Perimeter,
            2.0 * (rectangle.width() + rectangle.height()),
        )
    }
}
