// crates/confspec-core/src/core/version.rs
// ============================================================================
// Module: Confspec Version Model
// Description: Product version values and version ranges.
// Purpose: Provide total ordering and range containment for dotted versions.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Product versions are dotted numeric strings (`1.0.0`). Two versions
//! compare component-wise numerically, and missing components are treated as
//! zero, so `1.0` and `1.0.0` are equal. Versions normalize at parse time by
//! trimming trailing zero components, which keeps derived equality, ordering,
//! and hashing consistent with that rule.
//!
//! Ranges are half-open: `from` is inclusive and `to`, when present, is
//! exclusive. A query equal to `to` falls outside the range.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Version parse errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The input was empty or whitespace-only.
    #[error("version string is empty")]
    Empty,
    /// A dotted component was empty (`1..0` or a trailing dot).
    #[error("version '{input}' has an empty component")]
    EmptyComponent {
        /// The full input string.
        input: String,
    },
    /// A dotted component was not an unsigned number.
    #[error("version '{input}' has a non-numeric component '{component}'")]
    InvalidComponent {
        /// The full input string.
        input: String,
        /// The offending component.
        component: String,
    },
}

// ============================================================================
// SECTION: Version
// ============================================================================

/// A product version parsed from a dotted numeric string.
///
/// # Invariants
/// - Components are normalized: trailing zero components are trimmed, so
///   `1.0` and `1.0.0` hold identical component lists.
/// - Equality, ordering, and hashing consider components only; the original
///   rendering is preserved for display.
#[derive(Debug, Clone)]
pub struct Version {
    /// Normalized numeric components (no trailing zeros).
    components: Vec<u64>,
    /// The string form the version was parsed from.
    rendered: String,
}

impl Version {
    /// Returns the normalized numeric components.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Returns the original string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }
        let mut components = Vec::new();
        for part in trimmed.split('.') {
            if part.is_empty() {
                return Err(VersionParseError::EmptyComponent { input: trimmed.to_string() });
            }
            let component: u64 =
                part.parse().map_err(|_| VersionParseError::InvalidComponent {
                    input: trimmed.to_string(),
                    component: part.to_string(),
                })?;
            components.push(component);
        }
        while components.last() == Some(&0) {
            components.pop();
        }
        Ok(Self { components, rendered: trimmed.to_string() })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rendered.fmt(f)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Normalization trims trailing zeros, so plain lexicographic
        // comparison of the component lists is the component-wise numeric
        // order with missing components read as zero.
        self.components.cmp(&other.components)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rendered)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// ============================================================================
// SECTION: Version Range
// ============================================================================

/// A half-open version interval attached to a versioned value.
///
/// # Invariants
/// - `from` is inclusive; `to`, when present, is exclusive.
/// - An absent `to` extends the range to every later version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    /// Inclusive start version.
    pub from: Version,
    /// Exclusive end version, or `None` for an unbounded range.
    pub to: Option<Version>,
}

impl VersionRange {
    /// Creates a range starting at `from`, open-ended or bounded by `to`.
    #[must_use]
    pub const fn new(from: Version, to: Option<Version>) -> Self {
        Self { from, to }
    }

    /// Returns `true` when `query` lies inside the range.
    #[must_use]
    pub fn contains(&self, query: &Version) -> bool {
        if *query < self.from {
            return false;
        }
        match &self.to {
            Some(to) => query < to,
            None => true,
        }
    }

    /// Returns `true` when the two ranges share at least one version.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let self_before_other = match &self.to {
            Some(to) => *to <= other.from,
            None => false,
        };
        let other_before_self = match &other.to {
            Some(to) => *to <= self.from,
            None => false,
        };
        !(self_before_other || other_before_self)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to {
            Some(to) => write!(f, "[{}, {})", self.from, to),
            None => write!(f, "[{}, ...)", self.from),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::*;

    fn v(input: &str) -> Version {
        input.parse().unwrap()
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1"), v("1.0.0"));
        assert!(v("1.0.1") > v("1"));
    }

    #[test]
    fn ordering_is_numeric_not_textual() {
        assert!(v("0.10.0") > v("0.9.0"));
        assert!(v("1.2") < v("1.10"));
    }

    #[test]
    fn display_preserves_input_form() {
        assert_eq!(v("1.0").to_string(), "1.0");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Version>(), Err(VersionParseError::Empty));
        assert!(matches!(
            "1..0".parse::<Version>(),
            Err(VersionParseError::EmptyComponent { .. })
        ));
        assert!(matches!(
            "1.a.0".parse::<Version>(),
            Err(VersionParseError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn range_end_is_exclusive() {
        let range = VersionRange::new(v("1.0.0"), Some(v("2.0.0")));
        assert!(range.contains(&v("1.0.0")));
        assert!(range.contains(&v("1.9.9")));
        assert!(!range.contains(&v("2.0.0")));
        assert!(!range.contains(&v("0.9.9")));
    }

    #[test]
    fn unbounded_range_contains_all_later_versions() {
        let range = VersionRange::new(v("1.0.0"), None);
        assert!(range.contains(&v("99.0.0")));
        assert!(!range.contains(&v("0.9.0")));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let first = VersionRange::new(v("1.0.0"), Some(v("2.0.0")));
        let second = VersionRange::new(v("2.0.0"), Some(v("3.0.0")));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn unbounded_range_overlaps_every_successor() {
        let open = VersionRange::new(v("1.0.0"), None);
        let later = VersionRange::new(v("5.0.0"), Some(v("6.0.0")));
        assert!(open.overlaps(&later));
    }
}
