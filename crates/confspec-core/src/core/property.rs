// crates/confspec-core/src/core/property.rs
// ============================================================================
// Module: Confspec Property Model
// Description: Per-property specification metadata.
// Purpose: Represent one configurable property with all validation know-how.
// Dependencies: serde, crate::core::version
// ============================================================================

//! ## Overview
//! A [`PropertySpec`] carries everything the engine needs to judge one
//! property: its equivalent name forms, datatype with bounds, version-scoped
//! default and recommended values, per-role requirement flags, dependency
//! declarations, deprecation markers, and advisory metadata.
//!
//! Specs are plain data. All cross-spec invariants (unique aliases,
//! non-overlapping ranges, resolvable dependencies and units) are enforced by
//! [`crate::core::corpus::Corpus`] at construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::version::Version;
use crate::core::version::VersionRange;

// ============================================================================
// SECTION: Property Names
// ============================================================================

/// Representation context a property name belongs to.
///
/// # Invariants
/// - Variants are stable for serialization and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// Environment-variable form (`HTTP_PORT`).
    Env,
    /// Configuration-file key form (`http.port`).
    File,
}

/// One registered name form for a property.
///
/// # Invariants
/// - `name` is unique across the whole corpus (enforced at corpus build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyName {
    /// The name as it appears in configuration sources.
    pub name: String,
    /// The representation context the name belongs to.
    pub kind: NameKind,
}

impl PropertyName {
    /// Creates a name entry.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NameKind) -> Self {
        Self { name: name.into(), kind }
    }
}

// ============================================================================
// SECTION: Datatype
// ============================================================================

/// Declared datatype of a property value, with optional bounds.
///
/// # Invariants
/// - Numeric bounds are inclusive.
/// - `max_length` counts characters, not bytes.
/// - `unit` names a pattern in the unit registry (resolvable, enforced at
///   corpus build).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum Datatype {
    /// Boolean (`true`/`false`, case-insensitive).
    Bool,
    /// Signed integer with optional inclusive bounds.
    Integer {
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// Floating-point number with optional inclusive bounds.
    Float {
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
    },
    /// Free-form string with optional length cap and unit pattern.
    String {
        /// Maximum length in characters.
        max_length: Option<usize>,
        /// Name of a unit pattern the value must match.
        unit: Option<String>,
    },
}

impl Datatype {
    /// Returns a stable label for the datatype.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer { .. } => "integer",
            Self::Float { .. } => "float",
            Self::String { .. } => "string",
        }
    }
}

// ============================================================================
// SECTION: Versioned Values, Roles, Dependencies
// ============================================================================

/// A default or recommended value effective within a version range.
///
/// # Invariants
/// - Ranges across entries of one attribute are pairwise non-overlapping and
///   ordered by start version (enforced at corpus build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedValue {
    /// The value effective within `range`.
    pub value: String,
    /// The versions the value applies to.
    pub range: VersionRange,
}

impl VersionedValue {
    /// Creates a versioned value.
    #[must_use]
    pub fn new(value: impl Into<String>, range: VersionRange) -> Self {
        Self { value: value.into(), range }
    }
}

/// Requirement flag for one deployment role.
///
/// # Invariants
/// - A property without an entry for a role is not applicable to that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// The role name.
    pub role: String,
    /// Whether the property must be supplied for this role.
    pub required: bool,
}

impl RoleRequirement {
    /// Creates a role requirement entry.
    #[must_use]
    pub fn new(role: impl Into<String>, required: bool) -> Self {
        Self { role: role.into(), required }
    }
}

/// One declared prerequisite of a property.
///
/// # Invariants
/// - `property` resolves to a corpus property (enforced at corpus build).
/// - Satisfied only when the referenced property is present in the instance
///   (under any alias) and its value equals `value` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Name of the prerequisite property (any registered form).
    pub property: String,
    /// The exact value the prerequisite must hold.
    pub value: String,
}

impl Dependency {
    /// Creates a dependency entry.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self { property: property.into(), value: value.into() }
    }
}

// ============================================================================
// SECTION: Property Specification
// ============================================================================

/// Full specification of one configurable property.
///
/// # Invariants
/// - `names` is non-empty; the first entry is the canonical display name.
/// - `as_of_version` is <= every range start in `default_values` and
///   `recommended_values` (enforced at corpus build).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Equivalent name forms, canonical first.
    pub names: Vec<PropertyName>,
    /// Declared datatype with bounds.
    pub datatype: Datatype,
    /// Version-scoped default values.
    pub default_values: Vec<VersionedValue>,
    /// Version-scoped recommended values.
    pub recommended_values: Vec<VersionedValue>,
    /// Per-role requirement flags.
    pub roles: Vec<RoleRequirement>,
    /// Closed set of legal values. `None` means unrestricted; an empty set
    /// means no value is currently legal (retired property).
    pub allowed_values: Option<Vec<String>>,
    /// Prerequisite properties with required values.
    pub depends_on: Vec<Dependency>,
    /// Version the property starts existing at.
    pub as_of_version: Version,
    /// Version the property is deprecated from, when any.
    pub deprecated_since: Option<Version>,
    /// Replacement property names surfaced in deprecation findings.
    pub deprecated_for: Vec<String>,
    /// Whether changing the property requires a product restart. Advisory;
    /// never blocks validation.
    pub restart_required: bool,
    /// Human-readable description.
    pub description: Option<String>,
    /// Links to further documentation.
    pub additional_doc: Vec<String>,
    /// Free-form classification tags.
    pub tags: Vec<String>,
}

impl PropertySpec {
    /// Creates a minimal spec; optional attributes start empty.
    #[must_use]
    pub fn new(names: Vec<PropertyName>, datatype: Datatype, as_of_version: Version) -> Self {
        Self {
            names,
            datatype,
            default_values: Vec::new(),
            recommended_values: Vec::new(),
            roles: Vec::new(),
            allowed_values: None,
            depends_on: Vec::new(),
            as_of_version,
            deprecated_since: None,
            deprecated_for: Vec::new(),
            restart_required: false,
            description: None,
            additional_doc: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Returns the canonical display name (first registered form).
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        self.names.first().map_or("", |entry| entry.name.as_str())
    }

    /// Returns `true` when `name` is one of the registered forms.
    #[must_use]
    pub fn has_alias(&self, name: &str) -> bool {
        self.names.iter().any(|entry| entry.name == name)
    }

    /// Returns `true` when the property exists at `version`.
    #[must_use]
    pub fn is_available_at(&self, version: &Version) -> bool {
        self.as_of_version <= *version
    }

    /// Returns `true` when the property is deprecated at `version`.
    #[must_use]
    pub fn is_deprecated_at(&self, version: &Version) -> bool {
        self.deprecated_since.as_ref().is_some_and(|since| *since <= *version)
    }

    /// Returns the requirement entry for `role`, when one exists.
    #[must_use]
    pub fn role_entry(&self, role: &str) -> Option<&RoleRequirement> {
        self.roles.iter().find(|entry| entry.role == role)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
