//! # shapevisit
//!
//! Double dispatch over a closed set of shapes: operations (draw, area,
//! perimeter, ...) are added without modifying the shapes they act on.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sv-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! shapevisit = "0.1"
//! ```
//!
//! ```rust
//! use shapevisit::prelude::*;
//!
//! let shapes: Vec<Shape> = ["circle:5", "rectangle:10x20"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let area = shapes[1].accept(&mut Area::new());
//! assert_eq!(area.value(), 200.0);
//! assert_eq!(visit_all(&shapes, &mut Draw)[0], "Drawing circle with radius 5");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, visitor traits, and error definitions.
pub use sv_core as core;

/// The shape hierarchy and its visitor trait.
pub use sv_shapes as shapes;

/// Built-in operations over shapes.
pub use sv_operations as operations;

/// The names most programs need.
pub mod prelude {
    pub use sv_core::{visit_all, Error, Result, Visitable, Visitor};
    pub use sv_operations::{Area, Draw, Effect, KindTally, Measurement, Operation, Perimeter};
    pub use sv_shapes::{Circle, Rectangle, Shape, ShapeKind, ShapeVisitor};
}
