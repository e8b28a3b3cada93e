//! Error types for shapevisit.
//!
//! Every failure in the workspace is a programmer error: a shape built from
//! non-physical attributes, or a textual shape spec naming a kind that does
//! not exist. Both are reported through a single `thiserror`-derived enum and
//! are never retried or defaulted. The `ensure!` macro is the shorthand for
//! raising a precondition failure.

use std::fmt::Display;

use num_traits::Float;
use thiserror::Error;

/// The top-level error type used throughout shapevisit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A shape attribute is negative, NaN, infinite, or so large that a
    /// measurement of the shape overflows.
    #[error("invalid attribute: {attribute} {reason}, got {value}")]
    InvalidAttribute {
        /// Name of the offending attribute (`"radius"`, `"width"`, ...).
        attribute: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Which rule the value broke.
        reason: &'static str,
    },

    /// A kind name that is not part of the closed shape hierarchy.
    #[error("unsupported shape kind: {0}")]
    UnsupportedKind(String),

    /// A textual shape spec that could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout shapevisit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check that a geometric attribute is finite and non-negative.
///
/// Returns the value on success, with `-0.0` normalised to `0.0`, and
/// [`Error::InvalidAttribute`] otherwise.
///
/// ```
/// use sv_core::ensure_dimension;
/// assert_eq!(ensure_dimension("radius", 5.0_f64), Ok(5.0));
/// assert!(ensure_dimension("radius", -1.0_f64).is_err());
/// assert!(ensure_dimension("width", f64::NAN).is_err());
/// ```
pub fn ensure_dimension<T: Float + Display>(attribute: &'static str, value: T) -> Result<T> {
    if value.is_finite() && value >= T::zero() {
        Ok(value + T::zero())
    } else {
        Err(Error::InvalidAttribute {
            attribute,
            value: value.to_string(),
            reason: "must be finite and non-negative",
        })
    }
}

/// Check that a measure derived from `value` (an area, a perimeter) is
/// still finite.
///
/// ```
/// use sv_core::ensure_measurable;
/// assert_eq!(ensure_measurable("radius", 2.0_f64, 4.0 * 3.14), Ok(2.0));
/// assert!(ensure_measurable("radius", 1e200_f64, 1e200 * 1e200).is_err());
/// ```
pub fn ensure_measurable<T: Float + Display>(
    attribute: &'static str,
    value: T,
    derived: T,
) -> Result<T> {
    if derived.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidAttribute {
            attribute,
            value: value.to_string(),
            reason: "is too large for a finite measurement",
        })
    }
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sv_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
