// crates/confspec-core/src/runtime/datatype.rs
// ============================================================================
// Module: Confspec Datatype Validator
// Description: Raw string validation against declared datatypes.
// Purpose: Check parseability, numeric/length bounds, and unit patterns.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Validates one raw string value against a declared [`Datatype`]: numeric
//! values must parse and lie within their inclusive bounds, strings must
//! respect their character-length cap and named unit pattern, and booleans
//! parse case-insensitively as `true`/`false`.
//!
//! The allowed-value set is a cross-cutting property attribute checked by the
//! engine, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Display;
use std::str::FromStr;

use crate::core::finding::BoundViolation;
use crate::core::finding::FindingKind;
use crate::core::property::Datatype;
use crate::core::units::UnitRegistry;

// ============================================================================
// SECTION: Value Issues
// ============================================================================

/// One reason a value failed datatype validation.
///
/// # Invariants
/// - Variants are stable for programmatic handling and map 1:1 onto error
///   finding kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueIssue {
    /// The value does not parse as the declared datatype.
    TypeMismatch {
        /// Stable datatype label.
        expected: &'static str,
        /// The value as supplied.
        value: String,
    },
    /// The parsed numeric value violates a declared bound.
    OutOfRange {
        /// The value as supplied.
        value: String,
        /// The violated bound.
        violation: BoundViolation,
    },
    /// The string value exceeds the declared maximum length.
    TooLong {
        /// Length of the supplied value in characters.
        length: usize,
        /// Declared maximum length in characters.
        max_length: usize,
    },
    /// The string value does not match the named unit pattern.
    PatternMismatch {
        /// The unit whose pattern failed.
        unit: String,
        /// The value as supplied.
        value: String,
    },
    /// The named unit is not registered. Unreachable when datatype and
    /// registry come from the same integrity-checked corpus.
    UnknownUnit {
        /// The unresolvable unit name.
        unit: String,
    },
}

impl From<ValueIssue> for FindingKind {
    fn from(issue: ValueIssue) -> Self {
        match issue {
            ValueIssue::TypeMismatch { expected, value } => {
                Self::TypeMismatch { expected, value }
            }
            ValueIssue::OutOfRange { value, violation } => Self::OutOfRange { value, violation },
            ValueIssue::TooLong { length, max_length } => Self::TooLong { length, max_length },
            ValueIssue::PatternMismatch { unit, value } => Self::PatternMismatch { unit, value },
            ValueIssue::UnknownUnit { unit } => Self::UnknownUnit { unit },
        }
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a raw string value against a declared datatype.
///
/// # Errors
///
/// Returns the specific [`ValueIssue`] on the first failed check for this
/// value; the engine converts it into an error finding.
pub fn validate_value(
    datatype: &Datatype,
    value: &str,
    units: &UnitRegistry,
) -> Result<(), ValueIssue> {
    match datatype {
        Datatype::Bool => check_bool(value),
        Datatype::Integer { min, max } => check_scalar::<i64>(value, *min, *max, "integer"),
        Datatype::Float { min, max } => check_scalar::<f64>(value, *min, *max, "float"),
        Datatype::String { max_length, unit } => {
            check_string(value, *max_length, unit.as_deref(), units)
        }
    }
}

/// Parses a boolean, case-insensitively.
fn check_bool(value: &str) -> Result<(), ValueIssue> {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        Ok(())
    } else {
        Err(ValueIssue::TypeMismatch { expected: "bool", value: value.to_string() })
    }
}

/// Parses a numeric value and checks its inclusive bounds.
fn check_scalar<T>(
    value: &str,
    min: Option<T>,
    max: Option<T>,
    expected: &'static str,
) -> Result<(), ValueIssue>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let Ok(parsed) = value.parse::<T>() else {
        return Err(ValueIssue::TypeMismatch { expected, value: value.to_string() });
    };
    if let Some(min) = min
        && parsed < min
    {
        return Err(ValueIssue::OutOfRange {
            value: value.to_string(),
            violation: BoundViolation::BelowMinimum(min.to_string()),
        });
    }
    if let Some(max) = max
        && parsed > max
    {
        return Err(ValueIssue::OutOfRange {
            value: value.to_string(),
            violation: BoundViolation::AboveMaximum(max.to_string()),
        });
    }
    Ok(())
}

/// Checks a string value's character length and unit pattern.
fn check_string(
    value: &str,
    max_length: Option<usize>,
    unit: Option<&str>,
    units: &UnitRegistry,
) -> Result<(), ValueIssue> {
    if let Some(max_length) = max_length {
        let length = value.chars().count();
        if length > max_length {
            return Err(ValueIssue::TooLong { length, max_length });
        }
    }
    if let Some(unit) = unit {
        let matched = units
            .matches(unit, value)
            .map_err(|unknown| ValueIssue::UnknownUnit { unit: unknown.unit })?;
        if !matched {
            return Err(ValueIssue::PatternMismatch {
                unit: unit.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
