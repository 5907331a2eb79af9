// crates/confspec-core/src/core/corpus.rs
// ============================================================================
// Module: Confspec Corpus
// Description: The immutable, integrity-checked property-specification corpus.
// Purpose: Provide alias-based lookup and effective-value queries over specs.
// Dependencies: thiserror, crate::core
// ============================================================================

//! ## Overview
//! A [`Corpus`] owns every property specification plus the unit registry,
//! with an alias-to-spec lookup built once at construction. Construction is
//! the single integrity gate: overlapping version ranges, duplicate aliases,
//! dangling dependency references, unresolvable unit names, and failing unit
//! examples are all fatal here, so validation calls never observe a corrupt
//! corpus.
//!
//! A constructed corpus is immutable and `Send + Sync`; any number of
//! validation calls may share it without coordination.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use thiserror::Error;

use crate::core::property::Datatype;
use crate::core::property::PropertySpec;
use crate::core::property::VersionedValue;
use crate::core::units::UnitError;
use crate::core::units::UnitRegistry;
use crate::core::version::Version;
use crate::runtime::resolver::resolve_effective;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Corpus integrity errors, fatal at construction.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// The unit registry failed to build.
    #[error(transparent)]
    Unit(#[from] UnitError),
    /// A property spec carried no name entries.
    #[error("property at position {index} has no names")]
    NamelessProperty {
        /// Zero-based position of the spec in the source list.
        index: usize,
    },
    /// A name form was registered by more than one property.
    #[error("property name '{name}' is registered more than once")]
    DuplicateName {
        /// The doubly registered name.
        name: String,
    },
    /// Version-scoped values of one attribute were not ordered by start
    /// version.
    #[error("property '{property}' has unordered {attribute} ranges")]
    UnorderedRanges {
        /// Canonical property name.
        property: String,
        /// The attribute (`default_values` or `recommended_values`).
        attribute: &'static str,
    },
    /// Two version ranges of one attribute share at least one version.
    #[error("property '{property}' has overlapping {attribute} ranges")]
    OverlappingRanges {
        /// Canonical property name.
        property: String,
        /// The attribute (`default_values` or `recommended_values`).
        attribute: &'static str,
    },
    /// A version range starts before the property exists.
    #[error(
        "property '{property}' has a range starting at {from} before its introduction at {as_of}"
    )]
    RangeBeforeIntroduction {
        /// Canonical property name.
        property: String,
        /// The property's introduction version.
        as_of: Version,
        /// The offending range start.
        from: Version,
    },
    /// A dependency references a property absent from the corpus.
    #[error("property '{property}' depends on unknown property '{dependency}'")]
    DanglingDependency {
        /// Canonical property name.
        property: String,
        /// The unresolvable reference.
        dependency: String,
    },
    /// A string datatype names a unit absent from the registry.
    #[error("property '{property}' names unknown unit '{unit}'")]
    UnresolvableUnit {
        /// Canonical property name.
        property: String,
        /// The unresolvable unit name.
        unit: String,
    },
}

// ============================================================================
// SECTION: Corpus
// ============================================================================

/// The loaded specification corpus: property specs plus the unit registry.
///
/// # Invariants
/// - Immutable after construction; shared freely across threads.
/// - `lookup` maps every registered name form of every spec to its index in
///   `properties`, which preserves corpus order.
#[derive(Debug)]
pub struct Corpus {
    /// Property specs in corpus order.
    properties: Vec<PropertySpec>,
    /// Alias-to-spec index built once at construction.
    lookup: HashMap<String, usize>,
    /// Named validation patterns.
    units: UnitRegistry,
}

impl Corpus {
    /// Builds a corpus, running every load-time integrity check.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError`] on the first integrity violation; a corrupt
    /// corpus must never serve validation calls.
    pub fn new(properties: Vec<PropertySpec>, units: UnitRegistry) -> Result<Self, CorpusError> {
        let mut lookup = HashMap::new();
        for (index, spec) in properties.iter().enumerate() {
            if spec.names.is_empty() {
                return Err(CorpusError::NamelessProperty { index });
            }
            for entry in &spec.names {
                if lookup.insert(entry.name.clone(), index).is_some() {
                    return Err(CorpusError::DuplicateName { name: entry.name.clone() });
                }
            }
            check_ranges(spec, "default_values", &spec.default_values)?;
            check_ranges(spec, "recommended_values", &spec.recommended_values)?;
            if let Datatype::String { unit: Some(unit), .. } = &spec.datatype
                && !units.contains(unit)
            {
                return Err(CorpusError::UnresolvableUnit {
                    property: spec.canonical_name().to_string(),
                    unit: unit.clone(),
                });
            }
        }
        let corpus = Self { properties, lookup, units };
        for spec in &corpus.properties {
            for dependency in &spec.depends_on {
                if corpus.resolve(&dependency.property).is_none() {
                    return Err(CorpusError::DanglingDependency {
                        property: spec.canonical_name().to_string(),
                        dependency: dependency.property.clone(),
                    });
                }
            }
        }
        Ok(corpus)
    }

    /// Resolves a property by any of its registered name forms.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&PropertySpec> {
        self.lookup.get(name).map(|index| &self.properties[*index])
    }

    /// Returns all property specs in corpus order.
    #[must_use]
    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    /// Returns the unit registry.
    #[must_use]
    pub const fn units(&self) -> &UnitRegistry {
        &self.units
    }

    /// Returns the default value of `name` effective at `version`.
    #[must_use]
    pub fn default_value(&self, name: &str, version: &Version) -> Option<&str> {
        self.resolve(name)
            .and_then(|spec| resolve_effective(&spec.default_values, version))
            .map(|entry| entry.value.as_str())
    }

    /// Returns the recommended value of `name` effective at `version`.
    #[must_use]
    pub fn recommended_value(&self, name: &str, version: &Version) -> Option<&str> {
        self.resolve(name)
            .and_then(|spec| resolve_effective(&spec.recommended_values, version))
            .map(|entry| entry.value.as_str())
    }
}

// ============================================================================
// SECTION: Range Checks
// ============================================================================

/// Validates ordering, non-overlap, and introduction bounds for one
/// attribute's version-scoped values.
fn check_ranges(
    spec: &PropertySpec,
    attribute: &'static str,
    entries: &[VersionedValue],
) -> Result<(), CorpusError> {
    for entry in entries {
        if entry.range.from < spec.as_of_version {
            return Err(CorpusError::RangeBeforeIntroduction {
                property: spec.canonical_name().to_string(),
                as_of: spec.as_of_version.clone(),
                from: entry.range.from.clone(),
            });
        }
    }
    for pair in entries.windows(2) {
        let [previous, next] = pair else {
            continue;
        };
        if next.range.from < previous.range.from {
            return Err(CorpusError::UnorderedRanges {
                property: spec.canonical_name().to_string(),
                attribute,
            });
        }
        if previous.range.overlaps(&next.range) {
            return Err(CorpusError::OverlappingRanges {
                property: spec.canonical_name().to_string(),
                attribute,
            });
        }
    }
    // Ordered-by-start plus pairwise-adjacent disjointness implies pairwise
    // disjointness for half-open ranges, except when an earlier range is
    // unbounded; that case overlaps its immediate successor and is caught
    // above.
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
