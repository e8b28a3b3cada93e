//! # sv-core
//!
//! Core types, traits, and error definitions for shapevisit.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the `Real` alias, the error hierarchy, the
//! generic `Visitor` / `Visitable` pair, and the formatting and parsing
//! helpers used when shapes are read from or rendered to text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Design patterns: visitor.
pub mod patterns;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for every geometric attribute and result.
pub type Real = f64;

/// Alias used for counts and display precisions.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{ensure_dimension, ensure_measurable, Error, Result};
pub use patterns::visitor::{visit_all, Visitable, Visitor};
