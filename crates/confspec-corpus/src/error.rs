// crates/confspec-corpus/src/error.rs
// ============================================================================
// Module: Corpus Load Errors
// Description: Failure modes for corpus document loading.
// Purpose: Surface the file, position, or field implicated on bad input.
// Dependencies: confspec-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Load errors are the first of the two error tiers: they are fatal to
//! startup and carry enough context (path, JSON position, property and
//! field) to point at the offending part of the document. The second tier,
//! per-instance findings, lives in `confspec-core` and is never fatal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use confspec_core::CorpusError;
use confspec_core::VersionParseError;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Corpus document loading errors, fatal to startup.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    /// The document could not be read from disk.
    #[error("failed to read corpus document '{}'", path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the schema. The
    /// source error reports line and column.
    #[error("corpus document is malformed: {source}")]
    Document {
        /// The underlying decode error, with position information.
        #[source]
        source: serde_json::Error,
    },
    /// A version string on a property failed to parse.
    #[error("property '{property}', field '{field}': {source}")]
    Version {
        /// Canonical name of the property carrying the bad version.
        property: String,
        /// The field the version appeared in.
        field: &'static str,
        /// The underlying parse error.
        #[source]
        source: VersionParseError,
    },
    /// A numeric bound on a datatype failed to parse.
    #[error("property '{property}': {field} bound '{value}' is not a valid {expected}")]
    Bound {
        /// Canonical name of the property carrying the bad bound.
        property: String,
        /// The bound field (`min` or `max`).
        field: &'static str,
        /// The bound as written in the document.
        value: String,
        /// The numeric kind the bound must parse as.
        expected: &'static str,
    },
    /// The decoded corpus failed an integrity check.
    #[error(transparent)]
    Integrity(#[from] CorpusError),
}
