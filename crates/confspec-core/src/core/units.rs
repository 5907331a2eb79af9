// crates/confspec-core/src/core/units.rs
// ============================================================================
// Module: Confspec Unit Registry
// Description: Named validation patterns for string-typed properties.
// Purpose: Resolve unit names to full-string matchers at validation time.
// Dependencies: regex, thiserror
// ============================================================================

//! ## Overview
//! A unit is a named, reusable validation pattern (`port`, `memory`, `url`)
//! applied to string-typed properties. Patterns are compiled once during
//! registry construction and never mutated afterwards.
//!
//! Matching is full-string: a value matches only when the pattern covers the
//! entire value. Some corpus patterns anchor only at one end, so the registry
//! wraps every pattern in its own anchors rather than trusting the source
//! pattern to be self-anchored. This is a fixed design decision.
//!
//! Worked examples attached to a unit are checked against the unit's own
//! pattern during construction and are never consulted during instance
//! validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A unit entry carried an empty name.
    #[error("unit at position {index} has an empty name")]
    EmptyName {
        /// Zero-based position of the entry in the source list.
        index: usize,
    },
    /// A unit entry carried no pattern or an empty pattern.
    #[error("unit '{unit}' has an empty pattern")]
    EmptyPattern {
        /// The unit name.
        unit: String,
    },
    /// A unit pattern failed to compile.
    #[error("unit '{unit}' has an invalid pattern '{pattern}'")]
    InvalidPattern {
        /// The unit name.
        unit: String,
        /// The pattern as supplied.
        pattern: String,
    },
    /// A unit name was registered twice.
    #[error("unit '{unit}' is registered more than once")]
    DuplicateUnit {
        /// The unit name.
        unit: String,
    },
    /// A worked example did not match its own unit pattern.
    #[error("unit '{unit}' example '{example}' does not match its own pattern")]
    ExampleMismatch {
        /// The unit name.
        unit: String,
        /// The failing example value.
        example: String,
    },
}

/// Lookup failure for an unregistered unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unit '{unit}' is not registered")]
pub struct UnknownUnit {
    /// The unit name that failed to resolve.
    pub unit: String,
}

// ============================================================================
// SECTION: Unit
// ============================================================================

/// One named validation pattern with optional worked examples.
///
/// # Invariants
/// - `matcher` is the source pattern wrapped in full-string anchors.
/// - `examples` each match the pattern (verified at construction).
#[derive(Debug)]
pub struct Unit {
    /// The unit name (`port`, `memory`, ...).
    name: String,
    /// The pattern as supplied by the corpus.
    pattern: String,
    /// The compiled, full-string-anchored matcher.
    matcher: Regex,
    /// Canonical example values for documentation and self-test.
    examples: Vec<String>,
}

impl Unit {
    /// Compiles a unit from its source pattern and verifies its examples.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] when the pattern is empty or invalid, or when an
    /// example fails to match the compiled pattern.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        examples: Vec<String>,
    ) -> Result<Self, UnitError> {
        let name = name.into();
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(UnitError::EmptyPattern { unit: name });
        }
        // Full-string semantics: wrap the source pattern in anchors. Inner
        // anchors stay legal because they still match at the ends.
        let anchored = format!("^(?:{pattern})$");
        let Ok(matcher) = Regex::new(&anchored) else {
            return Err(UnitError::InvalidPattern { unit: name, pattern });
        };
        let unit = Self { name, pattern, matcher, examples };
        for example in &unit.examples {
            if !unit.matches(example) {
                return Err(UnitError::ExampleMismatch {
                    unit: unit.name.clone(),
                    example: example.clone(),
                });
            }
        }
        Ok(unit)
    }

    /// Returns the unit name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pattern as supplied by the corpus.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the worked examples.
    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Returns `true` when `value` matches the whole pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }
}

// ============================================================================
// SECTION: Unit Registry
// ============================================================================

/// Immutable collection of named units, keyed by unit name.
///
/// # Invariants
/// - Populated once at corpus construction; no runtime mutation.
/// - Unit names are unique.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    /// Units keyed by name.
    units: HashMap<String, Unit>,
}

impl UnitRegistry {
    /// Builds a registry from compiled units.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::DuplicateUnit`] when a name is registered twice
    /// and [`UnitError::EmptyName`] when a unit has no name.
    pub fn new(units: Vec<Unit>) -> Result<Self, UnitError> {
        let mut map = HashMap::with_capacity(units.len());
        for (index, unit) in units.into_iter().enumerate() {
            if unit.name().is_empty() {
                return Err(UnitError::EmptyName { index });
            }
            let name = unit.name().to_string();
            if map.insert(name.clone(), unit).is_some() {
                return Err(UnitError::DuplicateUnit { unit: name });
            }
        }
        Ok(Self { units: map })
    }

    /// Resolves a unit by name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownUnit`] when the name is not registered.
    pub fn resolve(&self, unit: &str) -> Result<&Unit, UnknownUnit> {
        self.units.get(unit).ok_or_else(|| UnknownUnit { unit: unit.to_string() })
    }

    /// Returns `true` when `value` fully matches the named unit's pattern.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownUnit`] when the name is not registered.
    pub fn matches(&self, unit: &str, value: &str) -> Result<bool, UnknownUnit> {
        self.resolve(unit).map(|unit| unit.matches(value))
    }

    /// Returns `true` when the named unit is registered.
    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    /// Returns the number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` when no units are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::*;

    const MEMORY_PATTERN: &str =
        "(^\\p{N}+)(?:\\s*)((?:b|k|m|g|t|p|kb|mb|gb|tb|pb)\\b$)";

    #[test]
    fn start_anchored_pattern_still_requires_full_match() {
        // The port pattern anchors only at the start in the corpus data.
        let unit = Unit::new("port", "[0-9]{1,5}", Vec::new()).unwrap();
        assert!(unit.matches("65535"));
        assert!(!unit.matches("65535 "));
        assert!(!unit.matches("port 65535"));
    }

    #[test]
    fn memory_pattern_matches_corpus_examples() {
        let unit = Unit::new(
            "memory",
            MEMORY_PATTERN,
            vec!["1024b".to_string(), "100 mb".to_string(), "1g".to_string()],
        )
        .unwrap();
        assert!(unit.matches("1000m"));
        assert!(!unit.matches("abc"));
        assert!(!unit.matches("100"));
    }

    #[test]
    fn failing_example_is_rejected_at_construction() {
        let result = Unit::new("memory", MEMORY_PATTERN, vec!["abc".to_string()]);
        assert_eq!(
            result.err(),
            Some(UnitError::ExampleMismatch {
                unit: "memory".to_string(),
                example: "abc".to_string(),
            })
        );
    }

    #[test]
    fn empty_and_invalid_patterns_are_rejected() {
        assert!(matches!(
            Unit::new("x", "", Vec::new()),
            Err(UnitError::EmptyPattern { .. })
        ));
        assert!(matches!(
            Unit::new("x", "(", Vec::new()),
            Err(UnitError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn duplicate_unit_names_are_rejected() {
        let first = Unit::new("port", "[0-9]+", Vec::new()).unwrap();
        let second = Unit::new("port", "[0-9]{1,5}", Vec::new()).unwrap();
        let result = UnitRegistry::new(vec![first, second]);
        assert!(matches!(result, Err(UnitError::DuplicateUnit { .. })));
    }

    #[test]
    fn unknown_unit_fails_resolution_and_matching() {
        let registry = UnitRegistry::new(Vec::new()).unwrap();
        assert!(registry.resolve("port").is_err());
        assert_eq!(
            registry.matches("port", "80"),
            Err(UnknownUnit { unit: "port".to_string() })
        );
    }
}
