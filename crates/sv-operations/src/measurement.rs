//! Numeric results of measuring operations.
//!
//! A [`Measurement`] always stores the full-precision value. Its optional
//! display precision only affects [`Measurement::rounded`] and `Display`;
//! `Display` formats the stored value directly, so any finite value prints
//! as a finite number.

use std::fmt;

use sv_core::utilities::data_formatters::{capitalize, format_exact, format_real};
use sv_core::{ensure, Real, Result, Size};
use sv_shapes::ShapeKind;

/// Largest display precision accepted by the measuring operations.
pub const MAX_PRECISION: Size = 15;

/// Decimal places used for irrational results unless configured otherwise.
pub const DEFAULT_PRECISION: Size = 2;

/// Validate a display precision.
///
/// # Errors
/// Returns [`sv_core::Error::Precondition`] above [`MAX_PRECISION`].
pub fn check_precision(precision: Size) -> Result<Size> {
    ensure!(
        precision <= MAX_PRECISION,
        "display precision must be at most {MAX_PRECISION}, got {precision}"
    );
    Ok(precision)
}

/// What was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Quantity {
    /// Enclosed area.
    Area,
    /// Length of the boundary.
    Perimeter,
}

impl Quantity {
    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Area => "area",
            Quantity::Perimeter => "perimeter",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measured value for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    kind: ShapeKind,
    quantity: Quantity,
    value: Real,
    precision: Option<Size>,
}

impl Measurement {
    /// A result shown exactly as computed (e.g. a rectangle's area).
    pub fn exact(kind: ShapeKind, quantity: Quantity, value: Real) -> Self {
        Self {
            kind,
            quantity,
            value,
            precision: None,
        }
    }

    /// A result shown with `precision` decimals (e.g. a circle's area).
    pub fn rounded_to(kind: ShapeKind, quantity: Quantity, value: Real, precision: Size) -> Self {
        Self {
            kind,
            quantity,
            value,
            precision: Some(precision),
        }
    }

    /// Kind of the measured shape.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// What was measured.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Full-precision value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Display precision, `None` for exact results.
    pub fn precision(&self) -> Option<Size> {
        self.precision
    }

    /// The value rounded to the closest `precision` decimals, or unchanged
    /// for exact results.
    ///
    /// Values too large to carry `precision` decimals are returned as is.
    pub fn rounded(&self) -> Real {
        match self.precision {
            Some(p) => round_closest(self.value, p),
            None => self.value,
        }
    }
}

impl fmt::Display for Measurement {
    /// `"Circle area: 78.54"`, `"Rectangle area: 200"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = match self.precision {
            Some(p) => format_real(self.value, p),
            None => format_exact(self.value),
        };
        write!(
            f,
            "{} {}: {}",
            capitalize(self.kind.name()),
            self.quantity,
            shown
        )
    }
}

// Ties round away from zero.
fn round_closest(value: Real, precision: Size) -> Real {
    let mult = 10_f64.powi(precision as i32);
    let scaled = value * mult;
    if scaled.is_finite() {
        scaled.round() / mult
    } else {
        value
    }
}
