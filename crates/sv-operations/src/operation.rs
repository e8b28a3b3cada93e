//! Runtime selection of a built-in operation.
//!
//! [`Operation`] names one of the built-in visitors so that a harness can
//! pick operations from text (a CLI flag, say) and run them over a
//! collection. Each run builds a fresh visitor, lets every shape accept it
//! in order, and wraps the handler results as [`Effect`]s.

use std::fmt;
use std::str::FromStr;

use sv_core::{visit_all, Error, Result, Size};
use sv_shapes::{Shape, ShapeKind};

use crate::area::Area;
use crate::draw::Draw;
use crate::measurement::Measurement;
use crate::perimeter::Perimeter;

/// A built-in operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// See [`Draw`].
    Draw,
    /// See [`Area`].
    Area,
    /// See [`Perimeter`].
    Perimeter,
}

impl Operation {
    /// Every built-in operation.
    pub const ALL: [Operation; 3] = [Operation::Draw, Operation::Area, Operation::Perimeter];

    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Draw => "draw",
            Operation::Area => "area",
            Operation::Perimeter => "perimeter",
        }
    }

    /// Heading printed before this operation's effects.
    pub fn header(&self) -> &'static str {
        match self {
            Operation::Draw => "Drawing shapes:",
            Operation::Area => "Calculating areas:",
            Operation::Perimeter => "Calculating perimeters:",
        }
    }

    /// Run this operation over `shapes`, in order.
    ///
    /// `precision` is the display precision of irrational results; it is
    /// ignored by [`Operation::Draw`].
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] if `precision` is out of range.
    pub fn run(&self, shapes: &[Shape], precision: Size) -> Result<Vec<Effect>> {
        tracing::debug!(operation = self.name(), shapes = shapes.len(), "running operation");
        let effects = match self {
            Operation::Draw => {
                let texts = visit_all(shapes, &mut Draw);
                shapes
                    .iter()
                    .zip(texts)
                    .map(|(shape, text)| Effect::Drawn {
                        kind: shape.kind(),
                        text,
                    })
                    .collect()
            }
            Operation::Area => {
                let mut area = Area::with_precision(precision)?;
                visit_all(shapes, &mut area)
                    .into_iter()
                    .map(Effect::Measured)
                    .collect()
            }
            Operation::Perimeter => {
                let mut perimeter = Perimeter::with_precision(precision)?;
                visit_all(shapes, &mut perimeter)
                    .into_iter()
                    .map(Effect::Measured)
                    .collect()
            }
        };
        Ok(effects)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" => Ok(Operation::Draw),
            "area" => Ok(Operation::Area),
            "perimeter" => Ok(Operation::Perimeter),
            other => Err(Error::Parse(format!(
                "unknown operation '{other}' (expected draw, area, or perimeter)"
            ))),
        }
    }
}

/// One observable result of applying an operation to one shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "effect", rename_all = "lowercase")
)]
pub enum Effect {
    /// A drawing description.
    Drawn {
        /// Kind of the drawn shape.
        kind: ShapeKind,
        /// Description text.
        text: String,
    },
    /// A numeric measurement.
    Measured(Measurement),
}

impl Effect {
    /// Kind of the shape this effect came from.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Effect::Drawn { kind, .. } => *kind,
            Effect::Measured(m) => m.kind(),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Drawn { text, .. } => f.write_str(text),
            Effect::Measured(m) => fmt::Display::fmt(m, f),
        }
    }
}
