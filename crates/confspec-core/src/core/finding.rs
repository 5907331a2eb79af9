// crates/confspec-core/src/core/finding.rs
// ============================================================================
// Module: Confspec Findings
// Description: Validation outcome records for one configuration instance.
// Purpose: Carry precise, ordered diagnostics back to the caller.
// Dependencies: serde, crate::core::version
// ============================================================================

//! ## Overview
//! A finding is one validation outcome attached to a property: an error that
//! should block the caller, or an advisory warning. Findings are plain data
//! with stable kinds so callers can branch on them programmatically; the
//! [`std::fmt::Display`] rendering is for operator-facing messages.
//!
//! Severity derives from the kind. The engine never fails on a finding;
//! collecting them exhaustively is the whole point.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::core::version::Version;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Severity of one finding.
///
/// # Invariants
/// - Variants are stable for serialization and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The caller should treat the instance as invalid.
    Error,
    /// Advisory; the instance remains valid.
    Warning,
}

impl Severity {
    /// Returns a stable label for the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

// ============================================================================
// SECTION: Bound Violations
// ============================================================================

/// The numeric bound an out-of-range value violated.
///
/// # Invariants
/// - Bounds are carried in their declared rendering for stable messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "bound", content = "limit")]
pub enum BoundViolation {
    /// The value fell below the inclusive minimum.
    BelowMinimum(String),
    /// The value exceeded the inclusive maximum.
    AboveMaximum(String),
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum(min) => write!(f, "below minimum {min}"),
            Self::AboveMaximum(max) => write!(f, "above maximum {max}"),
        }
    }
}

// ============================================================================
// SECTION: Finding Kinds
// ============================================================================

/// Classification of one finding, with message-relevant details.
///
/// # Invariants
/// - Variants are stable for serialization and programmatic handling.
/// - Each variant maps to exactly one severity; see [`FindingKind::severity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FindingKind {
    /// The supplied name resolves to no corpus property.
    UnknownProperty,
    /// The property does not exist yet at the query version.
    PropertyNotYetAvailable {
        /// Version the property starts existing at.
        as_of: Version,
    },
    /// The property is deprecated at the query version.
    DeprecatedProperty {
        /// Version the deprecation starts at.
        since: Version,
        /// Replacement property names, when declared.
        replaced_by: Vec<String>,
    },
    /// The value does not parse as the declared datatype.
    TypeMismatch {
        /// Stable datatype label (`integer`, `float`, `bool`).
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
    /// The named unit is not registered. Unreachable when spec and registry
    /// come from the same integrity-checked corpus.
    UnknownUnit {
        /// The unresolvable unit name.
        unit: String,
    },
    /// The value is not a member of the closed allowed-value set.
    NotAnAllowedValue {
        /// The value as supplied.
        value: String,
        /// The legal values.
        allowed: Vec<String>,
    },
    /// The property's allowed-value set is explicitly empty; no value is
    /// currently legal.
    PropertyRetired,
    /// A declared prerequisite property is absent from the instance.
    MissingDependency {
        /// Canonical name of the absent prerequisite.
        dependency: String,
    },
    /// A declared prerequisite holds a different value than required.
    UnsatisfiedDependency {
        /// Canonical name of the prerequisite.
        dependency: String,
        /// The value the prerequisite must hold.
        expected: String,
        /// The value the prerequisite actually holds.
        actual: String,
    },
    /// A property required for an active role was not supplied.
    MissingRequiredProperty {
        /// The active role that requires the property.
        role: String,
        /// Default value effective at the query version, when one exists.
        default: Option<String>,
    },
    /// Changing the property requires a product restart. Advisory.
    RestartRequired,
}

impl FindingKind {
    /// Returns the severity this kind carries.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::UnknownProperty | Self::DeprecatedProperty { .. } | Self::RestartRequired => {
                Severity::Warning
            }
            Self::PropertyNotYetAvailable { .. }
            | Self::TypeMismatch { .. }
            | Self::OutOfRange { .. }
            | Self::TooLong { .. }
            | Self::PatternMismatch { .. }
            | Self::UnknownUnit { .. }
            | Self::NotAnAllowedValue { .. }
            | Self::PropertyRetired
            | Self::MissingDependency { .. }
            | Self::UnsatisfiedDependency { .. }
            | Self::MissingRequiredProperty { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty => write!(f, "not a recognized property"),
            Self::PropertyNotYetAvailable { as_of } => {
                write!(f, "not available before version {as_of}")
            }
            Self::DeprecatedProperty { since, replaced_by } => {
                write!(f, "deprecated since version {since}")?;
                if !replaced_by.is_empty() {
                    write!(f, " (use {})", replaced_by.join(", "))?;
                }
                Ok(())
            }
            Self::TypeMismatch { expected, value } => {
                write!(f, "value '{value}' is not a valid {expected}")
            }
            Self::OutOfRange { value, violation } => {
                write!(f, "value '{value}' is {violation}")
            }
            Self::TooLong { length, max_length } => {
                write!(f, "value is {length} characters long, maximum is {max_length}")
            }
            Self::PatternMismatch { unit, value } => {
                write!(f, "value '{value}' does not match the '{unit}' pattern")
            }
            Self::UnknownUnit { unit } => write!(f, "unit '{unit}' is not registered"),
            Self::NotAnAllowedValue { value, allowed } => {
                write!(f, "value '{value}' is not one of: {}", allowed.join(", "))
            }
            Self::PropertyRetired => write!(f, "retired; no value is accepted"),
            Self::MissingDependency { dependency } => {
                write!(f, "requires '{dependency}' to be set")
            }
            Self::UnsatisfiedDependency { dependency, expected, actual } => {
                write!(f, "requires '{dependency}' to be '{expected}', found '{actual}'")
            }
            Self::MissingRequiredProperty { role, default } => {
                write!(f, "required for role '{role}' but not supplied")?;
                if let Some(default) = default {
                    write!(f, " (default: '{default}')")?;
                }
                Ok(())
            }
            Self::RestartRequired => write!(f, "changing this value requires a restart"),
        }
    }
}

// ============================================================================
// SECTION: Finding
// ============================================================================

/// One validation outcome attached to a property.
///
/// # Invariants
/// - `severity` always equals `kind.severity()`.
/// - `property` is the name as supplied for instance findings, or the
///   canonical corpus name for missing-required findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// The property the finding is attached to.
    pub property: String,
    /// Severity derived from the kind.
    pub severity: Severity,
    /// Classification with message-relevant details.
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    /// Creates a finding, deriving severity from the kind.
    #[must_use]
    pub fn new(property: impl Into<String>, kind: FindingKind) -> Self {
        let severity = kind.severity();
        Self { property: property.into(), severity, kind }
    }

    /// Returns `true` when the finding is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity.as_str(), self.property, self.kind)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
