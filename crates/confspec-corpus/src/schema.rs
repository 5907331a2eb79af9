// crates/confspec-corpus/src/schema.rs
// ============================================================================
// Module: Corpus Document Schema
// Description: Serde model of the JSON corpus document.
// Purpose: Decode the wire form before typed conversion into the core model.
// Dependencies: confspec-core, serde
// ============================================================================

//! ## Overview
//! The raw document model mirrors the JSON corpus one-to-one: versions and
//! numeric bounds stay strings here and are parsed into typed form by the
//! loader, so a bad value is reported against its property rather than as an
//! opaque decode failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use confspec_core::NameKind;
use serde::Deserialize;

// ============================================================================
// SECTION: Document Root
// ============================================================================

/// The root of a corpus document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDocument {
    /// Shared settings; currently the unit pattern library.
    pub config_settings: RawSettings,
    /// All property specifications.
    pub config_options: Vec<RawOption>,
}

/// Shared corpus settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSettings {
    /// Named validation patterns.
    #[serde(default)]
    pub unit: Vec<RawUnit>,
}

/// One named validation pattern.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawUnit {
    /// The unit name.
    pub name: String,
    /// The regular expression, matched against the whole value.
    pub regex: Option<String>,
    /// Worked example values, checked against the pattern at load.
    #[serde(default)]
    pub examples: Vec<String>,
}

// ============================================================================
// SECTION: Property Options
// ============================================================================

/// One property specification as written in the document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawOption {
    /// Equivalent name forms, canonical first.
    pub property_names: Vec<RawName>,
    /// Declared datatype with bounds as written.
    pub datatype: RawDatatype,
    /// Version-scoped default values.
    #[serde(default)]
    pub default_values: Vec<RawVersionedValue>,
    /// Version-scoped recommended values.
    #[serde(default)]
    pub recommended_values: Vec<RawVersionedValue>,
    /// Per-role requirement flags.
    #[serde(default)]
    pub roles: Vec<RawRole>,
    /// Closed set of legal values; absent means unrestricted.
    pub allowed_values: Option<Vec<String>>,
    /// Prerequisite properties with required values.
    #[serde(default)]
    pub depends_on: Vec<RawDependency>,
    /// Version the property starts existing at.
    pub as_of_version: String,
    /// Version the property is deprecated from.
    pub deprecated_since: Option<String>,
    /// Replacement property names.
    #[serde(default)]
    pub deprecated_for: Vec<String>,
    /// Whether changing the property requires a restart.
    #[serde(default)]
    pub restart_required: bool,
    /// Human-readable description.
    pub description: Option<String>,
    /// Links to further documentation.
    #[serde(default)]
    pub additional_doc: Vec<String>,
    /// Free-form classification tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One registered name form.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawName {
    /// The name as it appears in configuration sources.
    pub name: String,
    /// The representation context (`env` or `file`).
    pub kind: NameKind,
}

/// Declared datatype with bounds kept as written.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub(crate) enum RawDatatype {
    /// Boolean.
    Bool,
    /// Signed integer with optional inclusive bounds.
    Integer {
        /// Inclusive lower bound as written.
        min: Option<String>,
        /// Inclusive upper bound as written.
        max: Option<String>,
    },
    /// Floating-point number with optional inclusive bounds.
    Float {
        /// Inclusive lower bound as written.
        min: Option<String>,
        /// Inclusive upper bound as written.
        max: Option<String>,
    },
    /// Free-form string with optional length cap and unit pattern.
    String {
        /// Maximum length in characters, as written.
        max: Option<String>,
        /// Name of a unit pattern the value must match.
        unit: Option<String>,
    },
}

/// One default or recommended value with its version scope.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawVersionedValue {
    /// Inclusive start version.
    pub from_version: String,
    /// Exclusive end version; absent means open-ended.
    pub to_version: Option<String>,
    /// The value effective within the scope.
    pub value: String,
}

/// One per-role requirement flag.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRole {
    /// The role name.
    pub name: String,
    /// Whether the property must be supplied for this role.
    pub required: bool,
}

/// One dependency declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDependency {
    /// Name of the prerequisite property (any registered form).
    pub property: String,
    /// The exact value the prerequisite must hold.
    pub value: String,
}
