// crates/confspec-corpus/src/loader.rs
// ============================================================================
// Module: Corpus Loader
// Description: Decode and convert corpus documents into the core model.
// Purpose: Produce an integrity-checked Corpus or a precise load error.
// Dependencies: confspec-core, serde_json
// ============================================================================

//! ## Overview
//! Loading is a two-step pipeline: decode the JSON document into the raw
//! schema, then convert field by field into typed core values — versions,
//! numeric bounds, compiled unit patterns. Conversion errors name the
//! property and field they occurred in. The final [`Corpus::new`] call runs
//! the corpus-wide integrity checks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use confspec_core::Corpus;
use confspec_core::CorpusError;
use confspec_core::Datatype;
use confspec_core::Dependency;
use confspec_core::PropertyName;
use confspec_core::PropertySpec;
use confspec_core::RoleRequirement;
use confspec_core::Unit;
use confspec_core::UnitRegistry;
use confspec_core::Version;
use confspec_core::VersionRange;
use confspec_core::VersionedValue;

use crate::error::CorpusLoadError;
use crate::schema::RawDatatype;
use crate::schema::RawDocument;
use crate::schema::RawOption;
use crate::schema::RawVersionedValue;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Loads a corpus from a JSON document string.
///
/// # Errors
///
/// Returns [`CorpusLoadError`] when the document fails to decode, a version
/// or bound fails to parse, or the corpus fails an integrity check.
pub fn load_str(input: &str) -> Result<Corpus, CorpusLoadError> {
    let document: RawDocument =
        serde_json::from_str(input).map_err(|source| CorpusLoadError::Document { source })?;
    convert(document)
}

/// Loads a corpus from a JSON document on disk.
///
/// # Errors
///
/// Returns [`CorpusLoadError::Io`] when the file cannot be read, otherwise
/// as [`load_str`].
pub fn load_path(path: impl AsRef<Path>) -> Result<Corpus, CorpusLoadError> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)
        .map_err(|source| CorpusLoadError::Io { path: path.to_path_buf(), source })?;
    load_str(&input)
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts a decoded document into an integrity-checked corpus.
fn convert(document: RawDocument) -> Result<Corpus, CorpusLoadError> {
    let mut units = Vec::with_capacity(document.config_settings.unit.len());
    for unit in document.config_settings.unit {
        let pattern = unit.regex.unwrap_or_default();
        units.push(Unit::new(unit.name, pattern, unit.examples).map_err(CorpusError::from)?);
    }
    let registry = UnitRegistry::new(units).map_err(CorpusError::from)?;

    let mut properties = Vec::with_capacity(document.config_options.len());
    for option in document.config_options {
        properties.push(convert_option(option)?);
    }
    Ok(Corpus::new(properties, registry)?)
}

/// Converts one raw property option into a typed spec.
fn convert_option(option: RawOption) -> Result<PropertySpec, CorpusLoadError> {
    let property =
        option.property_names.first().map_or_else(String::new, |entry| entry.name.clone());
    let names = option
        .property_names
        .into_iter()
        .map(|entry| PropertyName::new(entry.name, entry.kind))
        .collect();
    let datatype = convert_datatype(&property, option.datatype)?;
    let as_of_version = parse_version(&property, "as_of_version", &option.as_of_version)?;
    let deprecated_since = option
        .deprecated_since
        .map(|raw| parse_version(&property, "deprecated_since", &raw))
        .transpose()?;

    let mut spec = PropertySpec::new(names, datatype, as_of_version);
    spec.default_values = convert_values(&property, option.default_values)?;
    spec.recommended_values = convert_values(&property, option.recommended_values)?;
    spec.roles = option
        .roles
        .into_iter()
        .map(|role| RoleRequirement::new(role.name, role.required))
        .collect();
    spec.allowed_values = option.allowed_values;
    spec.depends_on = option
        .depends_on
        .into_iter()
        .map(|dependency| Dependency::new(dependency.property, dependency.value))
        .collect();
    spec.deprecated_since = deprecated_since;
    spec.deprecated_for = option.deprecated_for;
    spec.restart_required = option.restart_required;
    spec.description = option.description;
    spec.additional_doc = option.additional_doc;
    spec.tags = option.tags;
    Ok(spec)
}

/// Converts a raw datatype, parsing its bounds.
fn convert_datatype(
    property: &str,
    datatype: RawDatatype,
) -> Result<Datatype, CorpusLoadError> {
    match datatype {
        RawDatatype::Bool => Ok(Datatype::Bool),
        RawDatatype::Integer { min, max } => Ok(Datatype::Integer {
            min: parse_bound(property, "min", min, "integer")?,
            max: parse_bound(property, "max", max, "integer")?,
        }),
        RawDatatype::Float { min, max } => Ok(Datatype::Float {
            min: parse_bound(property, "min", min, "float")?,
            max: parse_bound(property, "max", max, "float")?,
        }),
        RawDatatype::String { max, unit } => Ok(Datatype::String {
            max_length: parse_bound(property, "max", max, "length")?,
            unit,
        }),
    }
}

/// Converts version-scoped values, parsing their range bounds.
fn convert_values(
    property: &str,
    values: Vec<RawVersionedValue>,
) -> Result<Vec<VersionedValue>, CorpusLoadError> {
    let mut converted = Vec::with_capacity(values.len());
    for value in values {
        let from = parse_version(property, "from_version", &value.from_version)?;
        let to = value
            .to_version
            .map(|raw| parse_version(property, "to_version", &raw))
            .transpose()?;
        converted.push(VersionedValue::new(value.value, VersionRange::new(from, to)));
    }
    Ok(converted)
}

/// Parses one version field, attributing failures to the property.
fn parse_version(
    property: &str,
    field: &'static str,
    raw: &str,
) -> Result<Version, CorpusLoadError> {
    raw.parse().map_err(|source| CorpusLoadError::Version {
        property: property.to_string(),
        field,
        source,
    })
}

/// Parses one optional numeric bound, attributing failures to the property.
fn parse_bound<T: std::str::FromStr>(
    property: &str,
    field: &'static str,
    raw: Option<String>,
    expected: &'static str,
) -> Result<Option<T>, CorpusLoadError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.parse().map(Some).map_err(|_| CorpusLoadError::Bound {
        property: property.to_string(),
        field,
        value: raw,
        expected,
    })
}
