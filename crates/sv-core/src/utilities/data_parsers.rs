//! Data parsing helpers.
//!
//! Shapes are written as `kind:attributes`, e.g. `circle:5` or
//! `rectangle:10x20`. These functions split such a spec and parse its
//! numeric parts; deciding which kinds exist is left to the caller.

use crate::errors::{Error, Result};
use crate::Real;

/// Split a `kind:attributes` spec into its trimmed halves.
///
/// # Errors
/// Returns [`Error::Parse`] if there is no `:` or the kind is empty.
pub fn split_spec(s: &str) -> Result<(&str, &str)> {
    let (kind, rest) = s
        .split_once(':')
        .ok_or_else(|| Error::Parse(format!("expected `kind:attributes`, got '{s}'")))?;
    let kind = kind.trim();
    if kind.is_empty() {
        return Err(Error::Parse(format!("missing shape kind in '{s}'")));
    }
    Ok((kind, rest.trim()))
}

/// Parse a single real number, e.g. `"5"` or `" 2.5 "`.
///
/// No range check is done here; see [`ensure_dimension`](crate::ensure_dimension).
pub fn parse_real(s: &str) -> Result<Real> {
    let s = s.trim();
    s.parse::<Real>()
        .map_err(|_| Error::Parse(format!("invalid number '{s}'")))
}

/// Parse a `WxH` pair such as `"10x20"` (the separator may be `x` or `X`).
pub fn parse_dimensions(s: &str) -> Result<(Real, Real)> {
    let parts: Vec<&str> = s.split(['x', 'X']).collect();
    if parts.len() != 2 {
        return Err(Error::Parse(format!(
            "expected `WIDTHxHEIGHT`, got '{}'",
            s.trim()
        )));
    }
    Ok((parse_real(parts[0])?, parse_real(parts[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_spec() {
        assert_eq!(split_spec("circle:5").unwrap(), ("circle", "5"));
        assert_eq!(split_spec(" rect : 1x2 ").unwrap(), ("rect", "1x2"));
        assert!(matches!(split_spec("circle"), Err(Error::Parse(_))));
        assert!(matches!(split_spec(":5"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real("5").unwrap(), 5.0);
        assert_eq!(parse_real(" 2.5 ").unwrap(), 2.5);
        assert!(parse_real("five").is_err());
        assert!(parse_real("").is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("10x20").unwrap(), (10.0, 20.0));
        assert_eq!(parse_dimensions("1.5X3").unwrap(), (1.5, 3.0));
        assert!(parse_dimensions("10").is_err());
        assert!(parse_dimensions("1x2x3").is_err());
        assert!(parse_dimensions("axb").is_err());
    }
}
