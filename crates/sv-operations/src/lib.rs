//! # sv-operations
//!
//! The operation set of shapevisit. Every operation is a [`ShapeVisitor`]
//! with one handler per shape kind:
//!
//! * [`Draw`] – a drawing description per shape,
//! * [`Area`] – enclosed area, as a [`Measurement`],
//! * [`Perimeter`] – boundary length, as a [`Measurement`],
//! * [`KindTally`] – how many shapes of each kind were visited.
//!
//! None of them required a change to `sv-shapes`.
//!
//! ```
//! use sv_core::visit_all;
//! use sv_operations::{Area, Draw};
//! use sv_shapes::Shape;
//!
//! let shapes = vec![Shape::circle(5.0).unwrap(), Shape::rectangle(10.0, 20.0).unwrap()];
//!
//! let drawn = visit_all(&shapes, &mut Draw);
//! assert_eq!(drawn, ["Drawing circle with radius 5", "Drawing rectangle 10x20"]);
//!
//! let areas: Vec<String> = visit_all(&shapes, &mut Area::new())
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(areas, ["Circle area: 78.54", "Rectangle area: 200"]);
//! ```
//!
//! [`ShapeVisitor`]: sv_shapes::ShapeVisitor

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Area.
pub mod area;

/// Draw.
pub mod draw;

/// `Measurement`, `Quantity`, and display precision limits.
pub mod measurement;

/// Runtime selection of a built-in operation.
pub mod operation;

/// Perimeter.
pub mod perimeter;

/// KindTally.
pub mod tally;

pub use area::Area;
pub use draw::Draw;
pub use measurement::{Measurement, Quantity, DEFAULT_PRECISION, MAX_PRECISION};
pub use operation::{Effect, Operation};
pub use perimeter::Perimeter;
pub use tally::KindTally;
